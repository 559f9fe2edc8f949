//! Market Series
//!
//! Observation sequences produced once per source and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one logical data source (exchange name, ticker segment)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceId(String);

impl SourceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive match against another identifier
    pub fn matches(&self, other: &str) -> bool {
        self.0.eq_ignore_ascii_case(other)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SourceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Simulated observations for a single source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketSeries {
    source: SourceId,
    prices: Vec<f64>,
    volumes: Option<Vec<u64>>,
}

impl MarketSeries {
    /// Price-only series
    pub fn prices_only(source: SourceId, prices: Vec<f64>) -> Self {
        Self {
            source,
            prices,
            volumes: None,
        }
    }

    /// Parallel price and volume series
    pub fn with_volumes(source: SourceId, prices: Vec<f64>, volumes: Vec<u64>) -> Self {
        Self {
            source,
            prices,
            volumes: Some(volumes),
        }
    }

    pub fn source(&self) -> &SourceId {
        &self.source
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn volumes(&self) -> Option<&[u64]> {
        self.volumes.as_deref()
    }

    /// Volumes widened to f64 for statistics
    pub fn volumes_f64(&self) -> Option<Vec<f64>> {
        self.volumes
            .as_ref()
            .map(|v| v.iter().map(|&x| x as f64).collect())
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn latest_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    pub fn latest_volume(&self) -> Option<u64> {
        self.volumes.as_ref().and_then(|v| v.last().copied())
    }

    /// Consume the series, yielding its prices
    pub fn into_prices(self) -> Vec<f64> {
        self.prices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_id_case_insensitive_match() {
        let id = SourceId::new("Nasdaq");
        assert!(id.matches("NASDAQ"));
        assert!(id.matches("nasdaq"));
        assert!(!id.matches("NYSE"));
        assert_eq!(id.to_string(), "Nasdaq");
    }

    #[test]
    fn test_prices_only_series() {
        let series = MarketSeries::prices_only("AAPL-0".into(), vec![150.0, 150.5]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.latest_price(), Some(150.5));
        assert!(series.volumes().is_none());
        assert!(series.latest_volume().is_none());
    }

    #[test]
    fn test_volumes_widened() {
        let series = MarketSeries::with_volumes("NYSE".into(), vec![1.0, 2.0], vec![900, 1100]);
        assert_eq!(series.volumes_f64(), Some(vec![900.0, 1100.0]));
        assert_eq!(series.latest_volume(), Some(1100));
    }
}

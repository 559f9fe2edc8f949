use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::domain::{MarketSeries, SourceId};
use crate::ports::{MarketDataError, MarketDataPort, SeriesRequest};

/// Closed interval sampled uniformly
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformRange {
    pub low: f64,
    pub high: f64,
}

impl UniformRange {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.low == self.high {
            return self.low;
        }
        rng.gen_range(self.low..=self.high)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    pub fn is_valid(&self) -> bool {
        self.low.is_finite() && self.high.is_finite() && self.low <= self.high
    }
}

/// Per-observation noise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationProfile {
    /// Relative price fluctuation, applied as base * (1 + x)
    pub price_fluctuation: UniformRange,
    /// Volume multiplier, applied as base * x
    pub volume_multiplier: UniformRange,
}

impl Default for SimulationProfile {
    fn default() -> Self {
        Self {
            price_fluctuation: UniformRange::new(-0.005, 0.005),
            volume_multiplier: UniformRange::new(0.8, 1.2),
        }
    }
}

/// Anomaly injected into the final observation of one designated source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurstProfile {
    /// Source that bursts, matched case-insensitively
    pub source: Option<String>,
    /// Relative price lift of the last observation
    pub price_lift: UniformRange,
    /// Volume multiplier of the last observation
    pub volume_multiplier: UniformRange,
}

impl Default for BurstProfile {
    fn default() -> Self {
        Self {
            source: None,
            price_lift: UniformRange::new(0.01, 0.02),
            volume_multiplier: UniformRange::new(2.0, 3.0),
        }
    }
}

impl BurstProfile {
    pub fn for_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Default::default()
        }
    }

    pub fn applies_to(&self, source: &SourceId) -> bool {
        self.source
            .as_deref()
            .map(|burst| source.matches(burst))
            .unwrap_or(false)
    }
}

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Stream seed for one source: FNV-1a over the source name, mixed with `seed`
pub fn source_seed(seed: u64, source: &SourceId) -> u64 {
    let hash = source
        .as_str()
        .bytes()
        .fold(FNV_OFFSET_BASIS, |hash, byte| {
            (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
        });
    seed ^ hash
}

/// Round to cents
pub fn round_price(price: f64) -> f64 {
    (price * 100.0).round() / 100.0
}

/// Generate one source's observations
///
/// Prices are `base * (1 + fluctuation)` rounded to 2 decimals, volumes are
/// `trunc(base_volume * multiplier)`. A bursting source has its last
/// observation overwritten.
pub fn generate_series<R: Rng + ?Sized>(
    source: &SourceId,
    request: &SeriesRequest,
    profile: &SimulationProfile,
    burst: &BurstProfile,
    rng: &mut R,
) -> MarketSeries {
    let base_price = request.base_price;
    let mut prices = Vec::with_capacity(request.points);
    let mut volumes = request.base_volume.map(|_| Vec::with_capacity(request.points));

    for _ in 0..request.points {
        let fluctuation = profile.price_fluctuation.sample(rng);
        prices.push(round_price(base_price * (1.0 + fluctuation)));

        if let (Some(base_volume), Some(volumes)) = (request.base_volume, volumes.as_mut()) {
            let multiplier = profile.volume_multiplier.sample(rng);
            volumes.push((base_volume as f64 * multiplier) as u64);
        }
    }

    if burst.applies_to(source) {
        if let Some(last) = prices.last_mut() {
            let lift = burst.price_lift.sample(rng);
            *last = round_price(base_price * (1.0 + lift));
        }
        if let (Some(base_volume), Some(last)) =
            (request.base_volume, volumes.as_mut().and_then(|v| v.last_mut()))
        {
            let multiplier = burst.volume_multiplier.sample(rng);
            *last = (base_volume as f64 * multiplier) as u64;
        }
        tracing::debug!("Injected burst into last observation of {}", source);
    }

    match volumes {
        Some(volumes) => MarketSeries::with_volumes(source.clone(), prices, volumes),
        None => MarketSeries::prices_only(source.clone(), prices),
    }
}

/// In-process market data source producing simulated observations
#[derive(Debug, Clone, Default)]
pub struct SyntheticMarketData {
    profile: SimulationProfile,
    burst: BurstProfile,
    seed: Option<u64>,
}

impl SyntheticMarketData {
    pub fn new(profile: SimulationProfile) -> Self {
        Self {
            profile,
            ..Default::default()
        }
    }

    /// Designate the source whose last observation bursts
    pub fn with_burst(mut self, burst: BurstProfile) -> Self {
        self.burst = burst;
        self
    }

    /// Make every source's stream reproducible
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Each source gets its own stream so results don't depend on scheduling
    fn rng_for(&self, source: &SourceId) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(source_seed(seed, source)),
            None => StdRng::from_entropy(),
        }
    }
}

#[async_trait]
impl MarketDataPort for SyntheticMarketData {
    async fn fetch_series(
        &self,
        source: &SourceId,
        request: &SeriesRequest,
    ) -> Result<MarketSeries, MarketDataError> {
        if !request.base_price.is_finite() {
            return Err(MarketDataError::InvalidRequest(format!(
                "base price must be finite, got {}",
                request.base_price
            )));
        }

        let mut rng = self.rng_for(source);
        let source = source.clone();
        let request = *request;
        let profile = self.profile;
        let burst = self.burst.clone();

        // Generation is CPU-bound; keep it off the async workers
        tokio::task::spawn_blocking(move || {
            generate_series(&source, &request, &profile, &burst, &mut rng)
        })
        .await
        .map_err(|e| MarketDataError::TaskFailed(format!("Task join error: {}", e)))
    }
}

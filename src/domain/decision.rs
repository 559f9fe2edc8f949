use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete trading decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Decision {
    Buy,
    Sell,
    Hold,
}

/// How a decision label is rendered in reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    /// "Buy" / "Sell" / "Hold"
    #[default]
    Title,
    /// "BUY" / "SELL" / "HOLD"
    Upper,
}

impl Decision {
    pub fn label(&self, style: LabelStyle) -> &'static str {
        match (self, style) {
            (Decision::Buy, LabelStyle::Title) => "Buy",
            (Decision::Sell, LabelStyle::Title) => "Sell",
            (Decision::Hold, LabelStyle::Title) => "Hold",
            (Decision::Buy, LabelStyle::Upper) => "BUY",
            (Decision::Sell, LabelStyle::Upper) => "SELL",
            (Decision::Hold, LabelStyle::Upper) => "HOLD",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(LabelStyle::Title))
    }
}

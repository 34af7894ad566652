use std::fmt;

use serde::{Deserialize, Serialize};

/// Status label attached to a ratio value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    Healthy,
    LiquidityRisk,
    Efficient,
    LowMargin,
    VeryGood,
    Suboptimal,
    /// Sentinel for a key that names no known ratio.
    Unknown,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Healthy => "Healthy",
            Self::LiquidityRisk => "Liquidity Risk",
            Self::Efficient => "Efficient",
            Self::LowMargin => "Low Margin",
            Self::VeryGood => "Very Good",
            Self::Suboptimal => "Suboptimal",
            Self::Unknown => "-",
        }
    }

    /// Whether the label reads as good news.
    pub fn is_favorable(&self) -> bool {
        matches!(self, Self::Healthy | Self::Efficient | Self::VeryGood)
    }
}

impl fmt::Display for Label {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.pad(self.as_str())
    }
}

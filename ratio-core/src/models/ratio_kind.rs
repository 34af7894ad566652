use serde::{Deserialize, Serialize};

/// The three ratios the engine knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RatioKind {
    CurrentRatio,
    NetProfitMargin,
    ReturnOnEquity,
}

impl RatioKind {
    pub const ALL: [RatioKind; 3] = [
        RatioKind::CurrentRatio,
        RatioKind::NetProfitMargin,
        RatioKind::ReturnOnEquity,
    ];

    /// Canonical key, also used as the storage column name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CurrentRatio => "current_ratio",
            Self::NetProfitMargin => "net_profit_margin",
            Self::ReturnOnEquity => "return_on_equity",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::CurrentRatio => "Current Ratio",
            Self::NetProfitMargin => "Net Profit Margin",
            Self::ReturnOnEquity => "Return on Equity",
        }
    }

    /// Unit suffix shown after the value: `x` for a multiple, `%` for a percentage.
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::CurrentRatio => "x",
            Self::NetProfitMargin | Self::ReturnOnEquity => "%",
        }
    }

    /// Resolves any of the key spellings found at input boundaries.
    ///
    /// Accepts camelCase (`netProfitMargin`), the short keys (`npm`, `roe`,
    /// `cr`), snake_case storage names and kebab-case CLI names. Matching is
    /// case-insensitive.
    pub fn parse(s: &str) -> Option<Self> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "currentratio" | "cr" => Some(Self::CurrentRatio),
            "netprofitmargin" | "npm" => Some(Self::NetProfitMargin),
            "returnonequity" | "roe" => Some(Self::ReturnOnEquity),
            _ => None,
        }
    }
}

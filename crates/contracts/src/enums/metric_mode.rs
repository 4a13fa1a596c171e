use serde::{Deserialize, Serialize};

use crate::domain::a001_market_fact::aggregate::MarketFact;

/// Market evaluation mode selected in the dashboard ("By Value" / "By Volume")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MetricMode {
    /// Market size in US$ million (`market_value_usd / 1000`)
    #[default]
    ByValue,
    /// Market volume in units (`volume_units`)
    ByVolume,
}

impl MetricMode {
    /// Metric value of a single fact under this mode.
    ///
    /// This is the only place where the mode is mapped to a formula.
    pub fn value_of(&self, fact: &MarketFact) -> f64 {
        match self {
            MetricMode::ByValue => fact.market_value_usd / 1000.0,
            MetricMode::ByVolume => fact.volume_units as f64,
        }
    }

    /// Axis / KPI label for this mode
    pub fn label(&self) -> &'static str {
        match self {
            MetricMode::ByValue => "Market Size (US$ Million)",
            MetricMode::ByVolume => "Market Volume (Units)",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            MetricMode::ByValue => "By Value",
            MetricMode::ByVolume => "By Volume",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "By Value" => Some(MetricMode::ByValue),
            "By Volume" => Some(MetricMode::ByVolume),
            _ => None,
        }
    }
}

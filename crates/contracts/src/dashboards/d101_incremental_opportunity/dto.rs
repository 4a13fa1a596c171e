use serde::{Deserialize, Serialize};

use crate::shared::series::WaterfallSeries;

/// Incremental opportunity tab (waterfall)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncrementalOpportunityResponse {
    pub base_year: i32,
    pub terminal_year: i32,
    /// Base-year total actually used (after the reference fallback)
    pub base_value: f64,
    pub waterfall: WaterfallSeries,
    /// Years whose increment came from the default schedule, not from facts
    pub fallback_years: Vec<i32>,
}

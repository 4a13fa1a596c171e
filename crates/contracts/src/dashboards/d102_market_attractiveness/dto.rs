use serde::{Deserialize, Serialize};

/// Market attractiveness tab (bubble chart)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketAttractivenessResponse {
    pub start_year: i32,
    pub end_year: i32,
    pub bubbles: Vec<BubblePoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubblePoint {
    pub region: String,
    pub cagr_index: f64,
    pub market_share_index: f64,
    pub incremental_opportunity: f64,
    pub description: Option<String>,
    /// At least one value was replaced by a named default
    pub is_fallback: bool,
}

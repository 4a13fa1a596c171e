pub mod d100_market_analysis;
pub mod d101_incremental_opportunity;
pub mod d102_market_attractiveness;
pub mod d103_growth_rates;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::filters::AnalysisFilters;

/// All four tabs computed from one fact generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Fact generation the views were computed from
    pub generation: Uuid,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub filters: AnalysisFilters,
    pub market_analysis: d100_market_analysis::MarketAnalysisResponse,
    pub incremental_opportunity: d101_incremental_opportunity::IncrementalOpportunityResponse,
    pub market_attractiveness: d102_market_attractiveness::MarketAttractivenessResponse,
    pub growth_rates: d103_growth_rates::GrowthRatesResponse,
}

pub mod d100_market_analysis;
pub mod d101_incremental_opportunity;
pub mod d102_market_attractiveness;
pub mod d103_growth_rates;

use contracts::dashboards::DashboardSnapshot;
use contracts::shared::filters::AnalysisFilters;

use crate::shared::config::Config;
use crate::shared::data::FactSnapshot;

/// Compute every tab from one fact generation and its filter states
pub fn build_snapshot(
    snapshot: &FactSnapshot,
    filters: AnalysisFilters,
    config: &Config,
) -> DashboardSnapshot {
    let facts = &snapshot.facts;
    DashboardSnapshot {
        generation: snapshot.generation,
        generated_at: snapshot.generated_at,
        market_analysis: d100_market_analysis::build_market_analysis(facts, &filters.main),
        incremental_opportunity: d101_incremental_opportunity::build_incremental_opportunity(
            facts,
            &filters.incremental,
            &config.incremental,
        ),
        market_attractiveness: d102_market_attractiveness::build_market_attractiveness(
            facts,
            &filters.attractiveness,
            &config.attractiveness,
        ),
        growth_rates: d103_growth_rates::build_growth_rates(facts, &filters.growth),
        filters,
    }
}

use contracts::dashboards::d101_incremental_opportunity::IncrementalOpportunityResponse;
use contracts::domain::a001_market_fact::MarketFact;
use contracts::shared::filters::FilterState;
use std::collections::BTreeMap;

use crate::shared::aggregation::{incremental_deltas, waterfall, yearly_totals};
use crate::shared::config::IncrementalConfig;
use crate::shared::filters::filter_facts;

/// Waterfall from the base year to the terminal year for the incremental tab.
///
/// An empty base year falls back to the reference baseline; years without
/// usable data take the scaled default schedule and are listed in
/// `fallback_years`.
pub fn build_incremental_opportunity(
    facts: &[MarketFact],
    state: &FilterState,
    config: &IncrementalConfig,
) -> IncrementalOpportunityResponse {
    let filtered = filter_facts(facts, state);
    let totals: BTreeMap<i32, f64> = yearly_totals(&filtered, state.mode)
        .into_iter()
        .map(|yv| (yv.year, yv.value))
        .collect();

    let observed_base = totals.get(&config.base_year).copied().unwrap_or(0.0);
    let base_value = if observed_base > 0.0 {
        observed_base
    } else {
        tracing::warn!(
            "No data for base year {}, using reference baseline {}",
            config.base_year,
            config.reference_baseline
        );
        config.reference_baseline
    };

    let (deltas, fallback_years) = incremental_deltas(
        &totals,
        config.first_year..=config.last_year,
        base_value,
        &config.default_increments,
        config.reference_baseline,
    );
    if !fallback_years.is_empty() {
        tracing::debug!("incremental: default schedule used for {:?}", fallback_years);
    }

    IncrementalOpportunityResponse {
        base_year: config.base_year,
        terminal_year: config.terminal_year,
        base_value,
        waterfall: waterfall(config.base_year, base_value, &deltas, config.terminal_year),
        fallback_years,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::embedded_default;
    use crate::shared::testing::fact;
    use contracts::enums::{AnalysisView, Dimension};
    use contracts::shared::series::SegmentKind;

    #[test]
    fn test_empty_data_uses_reference_schedule() {
        let config = embedded_default().unwrap().incremental;
        let state = FilterState::new(AnalysisView::Incremental);
        let response = build_incremental_opportunity(&[], &state, &config);

        assert_eq!(response.base_value, 57159.0);
        assert_eq!(response.fallback_years, (2025..=2031).collect::<Vec<_>>());
        let segments = &response.waterfall.segments;
        assert_eq!(segments.len(), 9);
        assert!((segments[1].total_value - 59797.4).abs() < 1e-6);
        assert!((segments[2].total_value - 62647.8).abs() < 1e-6);
        assert_eq!(segments[8].kind, SegmentKind::Total);
        assert_eq!(segments[8].year, 2032);
        assert!((response.waterfall.total_incremental_opportunity - 22767.6).abs() < 1e-6);
    }

    #[test]
    fn test_observed_growth_and_scaled_fallback() {
        let config = embedded_default().unwrap().incremental;
        let facts = vec![
            fact(2024, "Europe", "Germany", 5715.9),
            fact(2025, "Europe", "Germany", 6000.0),
            fact(2025, "Asia Pacific", "Japan", 9000.0),
        ];
        let mut state = FilterState::new(AnalysisView::Incremental);
        state.set_selection(Dimension::Region, ["Europe"]);
        let response = build_incremental_opportunity(&facts, &state, &config);

        assert!((response.base_value - 5715.9).abs() < 1e-9);
        let deltas: Vec<f64> = response
            .waterfall
            .segments
            .iter()
            .map(|s| s.incremental_portion)
            .collect();
        assert!((deltas[1] - 284.1).abs() < 1e-6);
        // 2026 has no data: schedule scaled to a tenth of the reference
        assert!((deltas[2] - 285.04).abs() < 1e-6);
        assert_eq!(response.fallback_years.first(), Some(&2026));
    }
}

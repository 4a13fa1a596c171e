use contracts::dashboards::d100_market_analysis::{MarketAnalysisResponse, MarketKpi};
use contracts::domain::a001_market_fact::MarketFact;
use contracts::enums::{Dimension, MetricMode};
use contracts::shared::filters::FilterState;

use crate::shared::aggregation::{aggregate, aggregate_stacked, percent_of_total};
use crate::shared::filters::filter_facts;
use crate::shared::format::format_with_commas;

/// Standard tab: segment charts, region split and share analysis
pub fn build_market_analysis(facts: &[MarketFact], state: &FilterState) -> MarketAnalysisResponse {
    let filtered = filter_facts(facts, state);
    let mode = state.mode;
    tracing::debug!("market analysis: {} of {} facts", filtered.len(), facts.len());

    // Выбранные значения фильтра задают колонки графиков
    let grouped = |dimension: Dimension| {
        aggregate(&filtered, dimension, mode, &state.selected_labels(dimension))
    };
    let stacked = |dimension: Dimension| {
        aggregate_stacked(&filtered, dimension, mode, &state.selected_labels(dimension))
    };

    MarketAnalysisResponse {
        mode,
        metric_label: mode.label().to_string(),
        fact_count: filtered.len(),
        kpi: market_kpi(&filtered, mode),

        product_type: grouped(Dimension::ProductType),
        insurance_type: grouped(Dimension::InsuranceType),
        plan_type: grouped(Dimension::PlanType),
        coverage_type: grouped(Dimension::CoverageType),
        region: grouped(Dimension::Region),

        region_country_percentage: percent_of_total(&filtered, mode),

        insurance_type_share: stacked(Dimension::InsuranceType),
        plan_type_share: stacked(Dimension::PlanType),
        coverage_type_share: stacked(Dimension::CoverageType),
        distribution_channel_share: stacked(Dimension::DistributionChannel),
    }
}

/// Total of the metric over the filtered facts
pub fn market_kpi(facts: &[&MarketFact], mode: MetricMode) -> MarketKpi {
    if facts.is_empty() {
        return MarketKpi {
            total_value: 0.0,
            total_value_text: "N/A".to_string(),
        };
    }

    let total: f64 = facts.iter().map(|f| mode.value_of(f)).sum();
    let total_value_text = match mode {
        MetricMode::ByValue => format!("{}M", format_with_commas(total, 1)),
        MetricMode::ByVolume => format!("{}K Units", format_with_commas(total / 1000.0, 1)),
    };
    MarketKpi {
        total_value: total,
        total_value_text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{fact, with};
    use contracts::enums::AnalysisView;

    fn sample() -> Vec<MarketFact> {
        vec![
            fact(2024, "Europe", "Germany", 1500.0),
            with(fact(2024, "Europe", "France", 734.5), Dimension::PlanType, "HMO"),
            fact(2023, "Asia Pacific", "Japan", 200.0),
        ]
    }

    #[test]
    fn test_kpi_text_per_mode() {
        let facts = sample();
        let refs: Vec<&MarketFact> = facts.iter().collect();
        assert_eq!(
            market_kpi(&refs, MetricMode::ByValue).total_value_text,
            "2,434.5M"
        );
        assert_eq!(
            market_kpi(&refs, MetricMode::ByVolume).total_value_text,
            "2.4K Units"
        );
        assert_eq!(market_kpi(&[], MetricMode::ByValue).total_value_text, "N/A");
    }

    #[test]
    fn test_selection_drives_chart_columns() {
        let facts = sample();
        let mut state = FilterState::new(AnalysisView::Main);
        state.set_selection(Dimension::Year, [2024]);
        state.set_selection(Dimension::PlanType, ["HMO", "EPO"]);

        let response = build_market_analysis(&facts, &state);
        assert_eq!(response.fact_count, 1);
        assert_eq!(response.plan_type.categories, vec!["EPO", "HMO"]);
        // zero-only segments are dropped from the share chart
        assert_eq!(response.plan_type_share.categories, vec!["HMO"]);
        assert_eq!(response.region.categories, vec!["Europe"]);
        assert_eq!(response.metric_label, "Market Size (US$ Million)");
        assert_eq!(response.region_country_percentage.len(), 1);
        assert_eq!(response.region_country_percentage[0].value, 100.0);
    }

    #[test]
    fn test_unrestricted_state_covers_all_years() {
        let facts = sample();
        let state = FilterState::new(AnalysisView::Main).with_mode(MetricMode::ByVolume);
        let response = build_market_analysis(&facts, &state);

        assert_eq!(response.fact_count, 3);
        let years: Vec<i32> = response.region.rows.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2023, 2024]);
        assert_eq!(response.region.categories, vec!["Asia Pacific", "Europe"]);
        assert_eq!(response.region_country_percentage[1].value, 734.0);
    }
}

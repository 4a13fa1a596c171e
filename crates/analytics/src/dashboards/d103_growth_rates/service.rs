use contracts::dashboards::d103_growth_rates::{
    EntityGrowthSeries, GrowthEntityKind, GrowthRatesResponse,
};
use contracts::domain::a001_market_fact::{geography, MarketFact};
use contracts::enums::Dimension;
use contracts::shared::filters::FilterState;

use crate::shared::aggregation::growth_by_entity;
use crate::shared::filters::filter_facts;

/// YoY / CAGR tab: one series per selected country, else per selected region.
///
/// Nothing selected means nothing to plot. Entities are never summed together.
pub fn build_growth_rates(facts: &[MarketFact], state: &FilterState) -> GrowthRatesResponse {
    let filtered = filter_facts(facts, state);

    let countries = state.selected_labels(Dimension::Country);
    let regions = state.selected_labels(Dimension::Region);
    let (kind, dimension, names) = if !countries.is_empty() {
        (GrowthEntityKind::Country, Dimension::Country, countries)
    } else if !regions.is_empty() {
        (GrowthEntityKind::Region, Dimension::Region, regions)
    } else {
        return GrowthRatesResponse::default();
    };

    let entities = growth_by_entity(&filtered, dimension, &names, state.mode)
        .into_iter()
        .map(|(name, points)| {
            let label = match kind {
                GrowthEntityKind::Country => match geography::region_of(&name) {
                    Some(region) => format!("{} ({})", name, region),
                    None => name.clone(),
                },
                GrowthEntityKind::Region => name.clone(),
            };
            EntityGrowthSeries {
                kind,
                name,
                label,
                points,
            }
        })
        .collect();

    GrowthRatesResponse { entities }
}

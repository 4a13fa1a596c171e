use contracts::domain::a001_market_fact::{geography, DimensionValue, MarketFact};
use contracts::enums::{AnalysisView, Dimension, MetricMode};
use contracts::shared::filters::{CountryOption, FilterOptions, FilterState};
use std::collections::{BTreeMap, BTreeSet};

/// Dimensions pre-selected in full by the main view's default state
const SELECT_ALL_BY_DEFAULT: &[Dimension] = &[
    Dimension::Region,
    Dimension::InsuranceType,
    Dimension::PlanType,
    Dimension::CoverageType,
    Dimension::CoverageOption,
    Dimension::EnterpriseSize,
    Dimension::ProductType,
    Dimension::PayorType,
];

/// Distinct dropdown values of the whole dataset
pub fn filter_options(facts: &[MarketFact]) -> FilterOptions {
    let years: BTreeSet<i32> = facts.iter().map(|f| f.year).collect();

    let mut categories: BTreeMap<Dimension, BTreeSet<&str>> = BTreeMap::new();
    for fact in facts {
        for dimension in Dimension::all() {
            if let DimensionValue::Text(text) = fact.dimension_value(dimension) {
                if !text.is_empty() {
                    categories.entry(dimension).or_default().insert(text);
                }
            }
        }
    }

    FilterOptions {
        years: years.into_iter().collect(),
        categories: categories
            .into_iter()
            .map(|(d, values)| (d, values.into_iter().map(str::to_string).collect()))
            .collect(),
    }
}

/// Countries offered for the selected regions (all countries when none selected)
pub fn countries_for(selected_regions: &[String]) -> Vec<&'static str> {
    if selected_regions.is_empty() {
        return geography::regions()
            .into_iter()
            .flat_map(|region| geography::countries_of(region).iter().copied())
            .collect();
    }
    selected_regions
        .iter()
        .flat_map(|region| geography::countries_of(region).iter().copied())
        .collect()
}

/// Country options of the growth view, labelled with their region
pub fn country_options(facts: &[MarketFact], selected_regions: &[String]) -> Vec<CountryOption> {
    let country_region: BTreeMap<&str, &str> = facts
        .iter()
        .filter(|f| !f.country.is_empty() && !f.region.is_empty())
        .map(|f| (f.country.as_str(), f.region.as_str()))
        .collect();

    country_region
        .into_iter()
        .filter(|(_, region)| {
            selected_regions.is_empty() || selected_regions.iter().any(|r| r == region)
        })
        .map(|(country, region)| CountryOption {
            value: country.to_string(),
            label: format!("{} ({})", country, region),
        })
        .collect()
}

/// Initial state of the main view: latest year, every region and segment
/// selected, countries and channels unrestricted, by value.
pub fn default_main_filters(options: &FilterOptions) -> FilterState {
    let mut state = FilterState::new(AnalysisView::Main).with_mode(MetricMode::ByValue);
    if let Some(latest) = options.years.last() {
        state.set_selection(Dimension::Year, [*latest]);
    }
    for dimension in SELECT_ALL_BY_DEFAULT {
        state.set_selection(*dimension, options.values(*dimension).iter().cloned());
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filters::filter_facts;
    use crate::shared::testing::{fact, with};
    use contracts::shared::filters::FilterValue;

    fn sample() -> Vec<MarketFact> {
        vec![
            with(fact(2024, "Europe", "Germany", 10.0), Dimension::PlanType, ""),
            fact(2023, "Europe", "France", 10.0),
            fact(2025, "North America", "Canada", 10.0),
        ]
    }

    #[test]
    fn test_options_sorted_and_blank_free() {
        let options = filter_options(&sample());
        assert_eq!(options.years, vec![2023, 2024, 2025]);
        assert_eq!(options.values(Dimension::Region), ["Europe", "North America"]);
        assert_eq!(options.values(Dimension::PlanType), ["Point of Service (POS)"]);
        assert_eq!(
            options.values(Dimension::Country),
            ["Canada", "France", "Germany"]
        );
    }

    #[test]
    fn test_countries_for_regions() {
        assert_eq!(countries_for(&[]).len(), 23);
        assert_eq!(
            countries_for(&["North America".to_string(), "Latin America".to_string()]),
            vec!["U.S.", "Canada", "Brazil", "Argentina", "Mexico", "Rest of Latin America"]
        );
    }

    #[test]
    fn test_country_options_labelled_and_narrowed() {
        let options = country_options(&sample(), &["Europe".to_string()]);
        assert_eq!(
            options,
            vec![
                CountryOption {
                    value: "France".to_string(),
                    label: "France (Europe)".to_string()
                },
                CountryOption {
                    value: "Germany".to_string(),
                    label: "Germany (Europe)".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_default_filters_select_latest_year_and_everything_else() {
        let facts = sample();
        let state = default_main_filters(&filter_options(&facts));
        assert_eq!(
            state.selection(Dimension::Year).unwrap().iter().collect::<Vec<_>>(),
            vec![&FilterValue::Integer(2025)]
        );
        assert!(state.selection(Dimension::Country).is_none());
        assert!(state.selection(Dimension::DistributionChannel).is_none());
        assert_eq!(state.selected_labels(Dimension::Region).len(), 2);
        // default state must not hide data of the selected year
        assert_eq!(filter_facts(&facts, &state).len(), 1);
    }
}

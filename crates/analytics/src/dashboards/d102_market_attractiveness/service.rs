use contracts::dashboards::d102_market_attractiveness::{BubblePoint, MarketAttractivenessResponse};
use contracts::domain::a001_market_fact::MarketFact;
use contracts::shared::filters::FilterState;
use contracts::shared::series::RegionAttractiveness;
use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::shared::aggregation::attractiveness;
use crate::shared::config::{AttractivenessConfig, AttractivenessFallback};
use crate::shared::filters::filter_facts;

/// Display values of a region without enough data
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NamedDefault {
    pub cagr_index: f64,
    pub market_share_index: f64,
    pub incremental_opportunity: f64,
}

fn named(cagr_index: f64, market_share_index: f64, incremental_opportunity: f64) -> NamedDefault {
    NamedDefault {
        cagr_index,
        market_share_index,
        incremental_opportunity,
    }
}

/// Fallback for a region missing from the table
pub const GENERIC_DEFAULT: NamedDefault = NamedDefault {
    cagr_index: 5.0,
    market_share_index: 5.0,
    incremental_opportunity: 5000.0,
};

static NAMED_DEFAULTS: Lazy<HashMap<&'static str, NamedDefault>> = Lazy::new(|| {
    HashMap::from([
        ("Asia Pacific", named(8.5, 9.2, 12500.0)),
        ("Europe", named(5.2, 6.8, 6800.0)),
        ("Rest of Europe", named(4.8, 5.5, 5500.0)),
        ("North America", named(5.8, 7.1, 7200.0)),
        ("Middle East", named(6.5, 3.2, 1200.0)),
        ("Latin America", named(4.2, 2.8, 800.0)),
        ("Africa", named(3.8, 1.9, 400.0)),
    ])
});

/// Chart shown when no region has data at all
const PLACEHOLDER_REGIONS: &[&str] = &[
    "Asia Pacific",
    "Europe",
    "North America",
    "Middle East",
    "Latin America",
    "Africa",
];

const ASIA_PACIFIC_NOTE: &str = "Asia Pacific is expected to lead the market on rapid \
    industrialization and fast-growing employer-sponsored coverage.";

/// Tooltip text attached to a region's bubble
pub fn region_note(region: &str) -> Option<String> {
    (region == "Asia Pacific").then(|| ASIA_PACIFIC_NOTE.to_string())
}

pub fn named_default(region: &str) -> NamedDefault {
    NAMED_DEFAULTS.get(region).copied().unwrap_or(GENERIC_DEFAULT)
}

/// Year window of the bubble chart over the available years.
///
/// Starts at `years[floor(n * fraction)]` and ends at the last year; without
/// years the configured window is used.
pub fn attractiveness_window(years: &[i32], config: &AttractivenessConfig) -> (i32, i32) {
    match (years.first(), years.last()) {
        (Some(_), Some(&last)) => {
            let index = ((years.len() as f64) * config.window_start_fraction).floor() as usize;
            let first = years.get(index.min(years.len() - 1)).copied().unwrap_or(last);
            (first, last)
        }
        _ => (config.start_year, config.end_year),
    }
}

/// Bubble chart of the attractiveness tab
pub fn build_market_attractiveness(
    facts: &[MarketFact],
    state: &FilterState,
    config: &AttractivenessConfig,
) -> MarketAttractivenessResponse {
    let mut years: Vec<i32> = facts.iter().map(|f| f.year).collect();
    years.sort_unstable();
    years.dedup();
    let (window_start, window_end) = attractiveness_window(&years, config);

    let in_window: Vec<&MarketFact> = filter_facts(facts, state)
        .into_iter()
        .filter(|f| f.year >= window_start && f.year <= window_end)
        .collect();
    tracing::debug!(
        "attractiveness: {} facts in {}..={}",
        in_window.len(),
        window_start,
        window_end
    );

    let regions = attractiveness(&in_window, config.start_year, config.end_year);
    let bubbles = apply_fallback(regions, config.fallback);

    MarketAttractivenessResponse {
        start_year: config.start_year,
        end_year: config.end_year,
        bubbles,
    }
}

/// Substitute or drop regions whose values are not positive
pub fn apply_fallback(
    regions: Vec<RegionAttractiveness>,
    policy: AttractivenessFallback,
) -> Vec<BubblePoint> {
    if regions.is_empty() {
        return match policy {
            AttractivenessFallback::NamedDefaults => placeholder_bubbles(),
            AttractivenessFallback::OmitRegion => Vec::new(),
        };
    }

    regions
        .into_iter()
        .filter_map(|r| {
            let complete = r.cagr_index > 0.0
                && r.market_share_index > 0.0
                && r.incremental_opportunity > 0.0;
            if complete {
                return Some(BubblePoint {
                    description: region_note(&r.region),
                    region: r.region,
                    cagr_index: r.cagr_index,
                    market_share_index: r.market_share_index,
                    incremental_opportunity: r.incremental_opportunity,
                    is_fallback: false,
                });
            }

            match policy {
                AttractivenessFallback::OmitRegion => {
                    tracing::debug!("attractiveness: {} omitted, not enough data", r.region);
                    None
                }
                AttractivenessFallback::NamedDefaults => {
                    let d = named_default(&r.region);
                    let pick = |value: f64, default: f64| if value > 0.0 { value } else { default };
                    Some(BubblePoint {
                        cagr_index: pick(r.cagr_index, d.cagr_index),
                        market_share_index: pick(r.market_share_index, d.market_share_index),
                        incremental_opportunity: pick(
                            r.incremental_opportunity,
                            d.incremental_opportunity,
                        ),
                        description: region_note(&r.region),
                        region: r.region,
                        is_fallback: true,
                    })
                }
            }
        })
        .collect()
}

fn placeholder_bubbles() -> Vec<BubblePoint> {
    tracing::warn!("attractiveness: no regional data, showing named defaults");
    PLACEHOLDER_REGIONS
        .iter()
        .map(|region| {
            let d = named_default(region);
            BubblePoint {
                region: region.to_string(),
                cagr_index: d.cagr_index,
                market_share_index: d.market_share_index,
                incremental_opportunity: d.incremental_opportunity,
                description: region_note(region),
                is_fallback: true,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::embedded_default;
    use crate::shared::testing::fact;
    use contracts::enums::AnalysisView;

    #[test]
    fn test_window_from_available_years() {
        let config = embedded_default().unwrap().attractiveness;
        assert_eq!(attractiveness_window(&[2023, 2024, 2025], &config), (2023, 2025));
        let years: Vec<i32> = (2021..=2032).collect();
        assert_eq!(attractiveness_window(&years, &config), (2024, 2032));
        assert_eq!(attractiveness_window(&[], &config), (2025, 2032));
    }

    #[test]
    fn test_no_regions_gives_placeholder_chart() {
        let config = embedded_default().unwrap().attractiveness;
        let state = FilterState::new(AnalysisView::Attractiveness);
        let response = build_market_attractiveness(&[], &state, &config);

        assert_eq!(response.bubbles.len(), 6);
        assert_eq!(response.bubbles[0].region, "Asia Pacific");
        assert!(response.bubbles[0].description.is_some());
        assert!(response.bubbles[1].description.is_none());
        assert!(response.bubbles.iter().all(|b| b.is_fallback));
    }

    #[test]
    fn test_partial_values_are_replaced_per_field() {
        let config = embedded_default().unwrap().attractiveness;
        let facts = vec![
            fact(2025, "Europe", "Germany", 100.0),
            fact(2025, "Oceania", "Australia", 100.0),
        ];
        let state = FilterState::new(AnalysisView::Attractiveness);
        let response = build_market_attractiveness(&facts, &state, &config);

        // no 2032 data: CAGR and opportunity fall back, share is observed
        let europe = &response.bubbles[0];
        assert_eq!(europe.region, "Europe");
        assert!(europe.is_fallback);
        assert_eq!(europe.cagr_index, 5.2);
        assert_eq!(europe.market_share_index, 5.0);
        assert_eq!(europe.incremental_opportunity, 6800.0);

        let other = &response.bubbles[1];
        assert_eq!(other.cagr_index, GENERIC_DEFAULT.cagr_index);
    }

    #[test]
    fn test_omit_policy_drops_incomplete_regions() {
        let regions = vec![
            RegionAttractiveness {
                region: "Europe".to_string(),
                cagr_index: 0.4,
                market_share_index: 6.0,
                incremental_opportunity: 120.0,
            },
            RegionAttractiveness {
                region: "Africa".to_string(),
                cagr_index: 0.0,
                market_share_index: 4.0,
                incremental_opportunity: 0.0,
            },
        ];
        let bubbles = apply_fallback(regions, AttractivenessFallback::OmitRegion);
        assert_eq!(bubbles.len(), 1);
        assert_eq!(bubbles[0].region, "Europe");
        assert!(!bubbles[0].is_fallback);

        assert!(apply_fallback(Vec::new(), AttractivenessFallback::OmitRegion).is_empty());
    }
}

use contracts::domain::a001_market_fact::MarketFact;
use contracts::enums::MetricMode;
use contracts::shared::series::RegionAttractiveness;
use std::collections::BTreeMap;

/// Upper bound of both indices
pub const INDEX_CAP: f64 = 10.0;

#[derive(Default)]
struct RegionSums {
    start: f64,
    end: f64,
    window: f64,
}

/// Attractiveness of every region present in `facts` (market value, US$ million).
///
/// Start and end values are the region sums of `start_year` and `end_year`;
/// market share is the region's share of the total of all given facts. Both
/// are compressed to an index `min(raw / 10, 10)`. Regions come back sorted.
pub fn attractiveness(
    facts: &[&MarketFact],
    start_year: i32,
    end_year: i32,
) -> Vec<RegionAttractiveness> {
    let mode = MetricMode::ByValue;
    let mut regions: BTreeMap<&str, RegionSums> = BTreeMap::new();
    let mut all_regions_total = 0.0;

    for fact in facts {
        if fact.region.is_empty() {
            continue;
        }
        let value = mode.value_of(fact);
        let sums = regions.entry(fact.region.as_str()).or_default();
        sums.window += value;
        if fact.year == start_year {
            sums.start += value;
        }
        if fact.year == end_year {
            sums.end += value;
        }
        all_regions_total += value;
    }

    let span = end_year - start_year;
    regions
        .into_iter()
        .map(|(region, sums)| {
            let cagr = if sums.start > 0.0 && sums.end > 0.0 && span > 0 {
                ((sums.end / sums.start).powf(1.0 / span as f64) - 1.0) * 100.0
            } else {
                0.0
            };
            let market_share = if all_regions_total > 0.0 {
                sums.window / all_regions_total * 100.0
            } else {
                0.0
            };
            RegionAttractiveness {
                region: region.to_string(),
                cagr_index: to_index(cagr),
                market_share_index: to_index(market_share),
                incremental_opportunity: sums.end - sums.start,
            }
        })
        .collect()
}

fn to_index(raw: f64) -> f64 {
    (raw / 10.0).min(INDEX_CAP)
}

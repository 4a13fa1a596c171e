use contracts::domain::a001_market_fact::MarketFact;
use contracts::enums::MetricMode;
use contracts::shared::series::RegionCountryShare;
use std::collections::BTreeMap;

/// Share of each country within its region, per year.
///
/// By value the share is a percentage of the region-year total (0 when the
/// total is 0); by volume the raw country sum is reported instead. Ordered by
/// year, region, country.
pub fn percent_of_total(facts: &[&MarketFact], mode: MetricMode) -> Vec<RegionCountryShare> {
    // (year, region) -> country -> sum
    let mut sums: BTreeMap<(i32, &str), BTreeMap<&str, f64>> = BTreeMap::new();
    for fact in facts {
        if fact.region.is_empty() || fact.country.is_empty() {
            continue;
        }
        *sums
            .entry((fact.year, fact.region.as_str()))
            .or_default()
            .entry(fact.country.as_str())
            .or_insert(0.0) += mode.value_of(fact);
    }

    let mut shares = Vec::new();
    for ((year, region), countries) in sums {
        let total: f64 = countries.values().sum();
        for (country, value) in countries {
            let value = match mode {
                MetricMode::ByValue if total > 0.0 => value / total * 100.0,
                MetricMode::ByValue => 0.0,
                MetricMode::ByVolume => value,
            };
            shares.push(RegionCountryShare {
                year,
                region: region.to_string(),
                country: country.to_string(),
                value,
                year_region: format!("{} - {}", year, region),
            });
        }
    }
    shares
}

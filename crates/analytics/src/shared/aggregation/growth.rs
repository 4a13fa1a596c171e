use contracts::domain::a001_market_fact::MarketFact;
use contracts::enums::{Dimension, MetricMode};
use contracts::shared::series::{GrowthPoint, YearValue};
use std::collections::BTreeMap;

/// Metric sum per year, ascending
pub fn yearly_totals(facts: &[&MarketFact], mode: MetricMode) -> Vec<YearValue> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for fact in facts {
        *totals.entry(fact.year).or_insert(0.0) += mode.value_of(fact);
    }
    totals
        .into_iter()
        .map(|(year, value)| YearValue { year, value })
        .collect()
}

/// YoY and CAGR (percent) of a yearly series.
///
/// Duplicate years are summed. Fewer than two distinct years give an empty
/// series. The first point is always 0/0; YoY needs a positive previous value,
/// CAGR a positive first and current value.
pub fn growth_series(values: &[YearValue]) -> Vec<GrowthPoint> {
    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for v in values {
        *by_year.entry(v.year).or_insert(0.0) += v.value;
    }
    if by_year.len() < 2 {
        return Vec::new();
    }

    let series: Vec<(i32, f64)> = by_year.into_iter().collect();
    let (first_year, first_value) = series[0];

    series
        .iter()
        .enumerate()
        .map(|(i, &(year, current))| {
            if i == 0 {
                return GrowthPoint { year, yoy: 0.0, cagr: 0.0 };
            }
            let previous = series[i - 1].1;
            let yoy = if previous > 0.0 {
                (current - previous) / previous * 100.0
            } else {
                0.0
            };
            let span = year - first_year;
            let cagr = if first_value > 0.0 && current > 0.0 && span > 0 {
                ((current / first_value).powf(1.0 / span as f64) - 1.0) * 100.0
            } else {
                0.0
            };
            GrowthPoint { year, yoy, cagr }
        })
        .collect()
}

/// Growth series of each named entity of a dimension, computed independently.
///
/// Entities with fewer than two years of data are left out.
pub fn growth_by_entity(
    facts: &[&MarketFact],
    dimension: Dimension,
    names: &[String],
    mode: MetricMode,
) -> Vec<(String, Vec<GrowthPoint>)> {
    names
        .iter()
        .filter_map(|name| {
            let own: Vec<&MarketFact> = facts
                .iter()
                .copied()
                .filter(|f| f.category_key(dimension) == name.as_str())
                .collect();
            let points = growth_series(&yearly_totals(&own, mode));
            if points.is_empty() {
                tracing::debug!("{} {}: not enough years for growth", dimension, name);
                None
            } else {
                Some((name.clone(), points))
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::fact;

    fn yv(year: i32, value: f64) -> YearValue {
        YearValue { year, value }
    }

    #[test]
    fn test_constant_ten_percent_growth() {
        let points = growth_series(&[yv(2023, 100.0), yv(2024, 110.0), yv(2025, 121.0)]);
        assert_eq!(points.len(), 3);
        assert_eq!(points[0], GrowthPoint { year: 2023, yoy: 0.0, cagr: 0.0 });
        for p in &points[1..] {
            assert!((p.yoy - 10.0).abs() < 1e-9, "yoy {}", p.yoy);
            assert!((p.cagr - 10.0).abs() < 1e-9, "cagr {}", p.cagr);
        }
    }

    #[test]
    fn test_single_year_gives_empty_series() {
        assert!(growth_series(&[yv(2024, 50.0)]).is_empty());
        assert!(growth_series(&[yv(2024, 50.0), yv(2024, 20.0)]).is_empty());
        assert!(growth_series(&[]).is_empty());
    }

    #[test]
    fn test_zero_denominators_give_zero() {
        let points = growth_series(&[yv(2023, 0.0), yv(2024, 10.0), yv(2025, 0.0)]);
        assert_eq!(points[1].yoy, 0.0);
        assert_eq!(points[1].cagr, 0.0);
        assert_eq!(points[2].yoy, -100.0);
        assert_eq!(points[2].cagr, 0.0);
    }

    #[test]
    fn test_unsorted_input_is_ordered() {
        let points = growth_series(&[yv(2025, 121.0), yv(2023, 100.0), yv(2024, 110.0)]);
        let years: Vec<i32> = points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2023, 2024, 2025]);
    }

    #[test]
    fn test_entities_are_not_summed() {
        let facts = vec![
            fact(2023, "Europe", "Germany", 100.0),
            fact(2024, "Europe", "Germany", 150.0),
            fact(2023, "Europe", "France", 400.0),
            fact(2024, "Europe", "France", 200.0),
            fact(2024, "Europe", "Italy", 80.0),
        ];
        let refs: Vec<&MarketFact> = facts.iter().collect();
        let names = vec![
            "Germany".to_string(),
            "France".to_string(),
            "Italy".to_string(),
        ];
        let series = growth_by_entity(&refs, Dimension::Country, &names, MetricMode::ByValue);

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0, "Germany");
        assert_eq!(
            series[0].1,
            vec![
                GrowthPoint { year: 2023, yoy: 0.0, cagr: 0.0 },
                GrowthPoint { year: 2024, yoy: 50.0, cagr: 50.0 },
            ]
        );
        assert_eq!(series[1].0, "France");
        assert_eq!(series[1].1[1].yoy, -50.0);
    }
}

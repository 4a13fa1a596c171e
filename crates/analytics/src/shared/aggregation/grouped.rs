use contracts::domain::a001_market_fact::MarketFact;
use contracts::enums::{Dimension, MetricMode};
use contracts::shared::series::{GroupedRow, GroupedTable};
use std::collections::{BTreeMap, BTreeSet};

/// Year × category sums of the metric.
///
/// Categories are the explicit list when it has any non-blank entry (order
/// kept, duplicates dropped), otherwise the sorted distinct non-blank values
/// found in `facts`. Facts outside the category set or with a blank category
/// are not counted. Every row carries every category, missing cells are 0.
pub fn aggregate(
    facts: &[&MarketFact],
    dimension: Dimension,
    mode: MetricMode,
    explicit_categories: &[String],
) -> GroupedTable {
    let categories = resolve_categories(facts, dimension, explicit_categories);
    let known: BTreeSet<&str> = categories.iter().map(String::as_str).collect();

    // year -> category -> sum
    let mut sums: BTreeMap<i32, BTreeMap<String, f64>> = BTreeMap::new();
    for fact in facts {
        let row = sums.entry(fact.year).or_default();
        let key = fact.category_key(dimension);
        if key.is_empty() || !known.contains(&*key) {
            continue;
        }
        *row.entry(key.into_owned()).or_insert(0.0) += mode.value_of(fact);
    }

    let rows = sums
        .into_iter()
        .map(|(year, mut values)| {
            for category in &categories {
                values.entry(category.clone()).or_insert(0.0);
            }
            GroupedRow { year, values }
        })
        .collect();

    GroupedTable { categories, rows }
}

/// Same as [`aggregate`], then drops categories that are zero in every row.
///
/// Pruning happens after the full aggregation so a category with values in
/// only some years is kept.
pub fn aggregate_stacked(
    facts: &[&MarketFact],
    dimension: Dimension,
    mode: MetricMode,
    explicit_categories: &[String],
) -> GroupedTable {
    let mut table = aggregate(facts, dimension, mode, explicit_categories);

    let empty: Vec<String> = table
        .categories
        .iter()
        .filter(|c| table.rows.iter().all(|row| row.value(c) == 0.0))
        .cloned()
        .collect();
    if empty.is_empty() {
        return table;
    }

    table.categories.retain(|c| !empty.contains(c));
    for row in &mut table.rows {
        row.values.retain(|c, _| !empty.contains(c));
    }
    table
}

fn resolve_categories(
    facts: &[&MarketFact],
    dimension: Dimension,
    explicit_categories: &[String],
) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let explicit: Vec<String> = explicit_categories
        .iter()
        .filter(|c| !c.is_empty() && seen.insert(c.as_str()))
        .cloned()
        .collect();
    if !explicit.is_empty() {
        return explicit;
    }

    facts
        .iter()
        .map(|f| f.category_key(dimension))
        .filter(|k| !k.is_empty())
        .map(|k| k.into_owned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::testing::{fact, with};

    fn sample() -> Vec<MarketFact> {
        vec![
            with(fact(2024, "Europe", "Germany", 10.0), Dimension::PlanType, "HMO"),
            with(fact(2024, "Europe", "France", 5.0), Dimension::PlanType, "PPO"),
            with(fact(2023, "Europe", "Italy", 7.0), Dimension::PlanType, "HMO"),
            with(fact(2023, "Europe", "Spain", 3.0), Dimension::PlanType, ""),
        ]
    }

    #[test]
    fn test_implicit_categories_sorted_and_blank_free() {
        let facts = sample();
        let refs: Vec<&MarketFact> = facts.iter().collect();
        let table = aggregate(&refs, Dimension::PlanType, MetricMode::ByValue, &[]);

        assert_eq!(table.categories, vec!["HMO", "PPO"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].year, 2023);
        assert_eq!(table.rows[0].value("HMO"), 7.0);
        assert_eq!(table.rows[0].values.get("PPO"), Some(&0.0));
        assert_eq!(table.rows[1].value("HMO"), 10.0);
        assert_eq!(table.rows[1].value("PPO"), 5.0);
    }

    #[test]
    fn test_grouped_total_is_conserved_per_year() {
        let facts = sample();
        let refs: Vec<&MarketFact> = facts.iter().collect();
        let table = aggregate(&refs, Dimension::PlanType, MetricMode::ByVolume, &[]);

        assert_eq!(table.rows.len(), 2);
        for row in &table.rows {
            let expected: f64 = facts
                .iter()
                .filter(|f| f.year == row.year && !f.plan_type.is_empty())
                .map(|f| MetricMode::ByVolume.value_of(f))
                .sum();
            assert_eq!(row.total(), expected, "year {}", row.year);
        }
        assert_eq!(table.rows[0].total(), 7.0);
        assert_eq!(table.rows[1].total(), 15.0);
    }

    #[test]
    fn test_explicit_categories_keep_order_and_zero_columns() {
        let facts = sample();
        let refs: Vec<&MarketFact> = facts.iter().collect();
        let explicit = vec![
            "PPO".to_string(),
            "".to_string(),
            "EPO".to_string(),
            "PPO".to_string(),
        ];
        let table = aggregate(&refs, Dimension::PlanType, MetricMode::ByValue, &explicit);

        assert_eq!(table.categories, vec!["PPO", "EPO"]);
        assert_eq!(table.rows[1].value("PPO"), 5.0);
        assert_eq!(table.rows[1].values.get("EPO"), Some(&0.0));
        assert!(table.rows[1].values.get("HMO").is_none());
    }

    #[test]
    fn test_stacked_prunes_only_all_zero_categories() {
        let facts = sample();
        let refs: Vec<&MarketFact> = facts.iter().collect();
        let explicit = vec!["HMO".to_string(), "PPO".to_string(), "EPO".to_string()];
        let table = aggregate_stacked(&refs, Dimension::PlanType, MetricMode::ByValue, &explicit);

        // PPO only has a value in 2024 and must survive
        assert_eq!(table.categories, vec!["HMO", "PPO"]);
        assert!(table.rows.iter().all(|r| !r.values.contains_key("EPO")));
        assert_eq!(table.rows[0].values.get("PPO"), Some(&0.0));
    }

    #[test]
    fn test_empty_input_gives_empty_table() {
        let table = aggregate(&[], Dimension::Region, MetricMode::ByValue, &[]);
        assert!(table.categories.is_empty());
        assert!(table.rows.is_empty());
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let facts = sample();
        let refs: Vec<&MarketFact> = facts.iter().collect();
        let a = aggregate(&refs, Dimension::Country, MetricMode::ByValue, &[]);
        let b = aggregate(&refs, Dimension::Country, MetricMode::ByValue, &[]);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}

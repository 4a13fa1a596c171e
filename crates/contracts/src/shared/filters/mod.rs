use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::domain::a001_market_fact::DimensionValue;
use crate::enums::{AnalysisView, Dimension, MetricMode};

/// A single selected value of a filter control.
///
/// Years may arrive either as numbers or as strings; both forms match.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Integer(i64),
    Text(String),
}

impl FilterValue {
    pub fn matches(&self, value: DimensionValue<'_>) -> bool {
        match (self, value) {
            (FilterValue::Integer(i), DimensionValue::Year(year)) => *i == year as i64,
            (FilterValue::Text(s), DimensionValue::Year(year)) => {
                s.trim().parse::<i64>().map_or(false, |i| i == year as i64)
            }
            (FilterValue::Text(s), DimensionValue::Text(text)) => s == text,
            (FilterValue::Integer(i), DimensionValue::Text(text)) => i.to_string() == text,
        }
    }

    /// Text form used as a chart category label
    pub fn as_label(&self) -> String {
        match self {
            FilterValue::Integer(i) => i.to_string(),
            FilterValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

impl From<i32> for FilterValue {
    fn from(i: i32) -> Self {
        FilterValue::Integer(i as i64)
    }
}

/// Filter state of one analysis view.
///
/// An empty (or absent) selection means "no restriction", never "nothing".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub view: AnalysisView,
    /// Selected values per dimension
    #[serde(default)]
    pub selections: BTreeMap<Dimension, BTreeSet<FilterValue>>,
    #[serde(default)]
    pub mode: MetricMode,
}

impl FilterState {
    pub fn new(view: AnalysisView) -> Self {
        Self {
            view,
            selections: BTreeMap::new(),
            mode: MetricMode::ByValue,
        }
    }

    pub fn with_mode(mut self, mode: MetricMode) -> Self {
        self.mode = mode;
        self
    }

    /// Selected values of a dimension; `None` when unrestricted
    pub fn selection(&self, dimension: Dimension) -> Option<&BTreeSet<FilterValue>> {
        self.selections.get(&dimension).filter(|s| !s.is_empty())
    }

    /// Non-blank selected labels in order (used as explicit chart categories)
    pub fn selected_labels(&self, dimension: Dimension) -> Vec<String> {
        self.selection(dimension)
            .map(|values| {
                values
                    .iter()
                    .map(FilterValue::as_label)
                    .filter(|label| !label.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Replace the whole selection of a dimension.
    ///
    /// Changing the region selection resets the dependent country selection.
    pub fn set_selection<I, V>(&mut self, dimension: Dimension, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<FilterValue>,
    {
        let values: BTreeSet<FilterValue> = values.into_iter().map(Into::into).collect();
        if values.is_empty() {
            self.selections.remove(&dimension);
        } else {
            self.selections.insert(dimension, values);
        }
        if dimension == Dimension::Region {
            self.selections.remove(&Dimension::Country);
        }
    }

    /// True when no dimension is restricted
    pub fn is_unrestricted(&self) -> bool {
        self.selections.values().all(|s| s.is_empty())
    }
}

/// Independent filter states of the four dashboard views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisFilters {
    pub main: FilterState,
    pub incremental: FilterState,
    pub attractiveness: FilterState,
    pub growth: FilterState,
}

impl Default for AnalysisFilters {
    fn default() -> Self {
        Self {
            main: FilterState::new(AnalysisView::Main),
            incremental: FilterState::new(AnalysisView::Incremental),
            attractiveness: FilterState::new(AnalysisView::Attractiveness),
            growth: FilterState::new(AnalysisView::Growth),
        }
    }
}

impl AnalysisFilters {
    pub fn get(&self, view: AnalysisView) -> &FilterState {
        match view {
            AnalysisView::Main => &self.main,
            AnalysisView::Incremental => &self.incremental,
            AnalysisView::Attractiveness => &self.attractiveness,
            AnalysisView::Growth => &self.growth,
        }
    }

    pub fn get_mut(&mut self, view: AnalysisView) -> &mut FilterState {
        match view {
            AnalysisView::Main => &mut self.main,
            AnalysisView::Incremental => &mut self.incremental,
            AnalysisView::Attractiveness => &mut self.attractiveness,
            AnalysisView::Growth => &mut self.growth,
        }
    }
}

/// Options offered by the filter dropdowns
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Distinct years, ascending
    pub years: Vec<i32>,
    /// Distinct non-blank values per text dimension, sorted
    pub categories: BTreeMap<Dimension, Vec<String>>,
}

impl FilterOptions {
    pub fn values(&self, dimension: Dimension) -> &[String] {
        self.categories
            .get(&dimension)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Country option of the growth view: value plus "Country (Region)" label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryOption {
    pub value: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_matches_number_and_string() {
        let year = DimensionValue::Year(2024);
        assert!(FilterValue::Integer(2024).matches(year));
        assert!(FilterValue::from("2024").matches(year));
        assert!(FilterValue::from(" 2024 ").matches(year));
        assert!(!FilterValue::from("2023").matches(year));
        assert!(!FilterValue::from("twenty").matches(year));
    }

    #[test]
    fn test_region_change_resets_countries() {
        let mut state = FilterState::new(AnalysisView::Main);
        state.set_selection(Dimension::Country, ["Germany"]);
        state.set_selection(Dimension::InsuranceType, ["Fully-Insured Plans"]);
        state.set_selection(Dimension::Region, ["Europe"]);

        assert!(state.selection(Dimension::Country).is_none());
        assert!(state.selection(Dimension::InsuranceType).is_some());
        assert_eq!(state.selected_labels(Dimension::Region), vec!["Europe"]);
    }

    #[test]
    fn test_empty_selection_is_unrestricted() {
        let mut state = FilterState::new(AnalysisView::Growth);
        state.set_selection(Dimension::Region, Vec::<String>::new());
        assert!(state.is_unrestricted());
        assert!(state.selection(Dimension::Region).is_none());
    }

    #[test]
    fn test_filter_state_deserializes_mixed_years() {
        let json = r#"{"view":"Main","selections":{"year":[2024,"2025"]},"mode":"ByVolume"}"#;
        let state: FilterState = serde_json::from_str(json).unwrap();
        let years = state.selection(Dimension::Year).unwrap();
        assert!(years.contains(&FilterValue::Integer(2024)));
        assert!(years.contains(&FilterValue::Text("2025".to_string())));
        assert_eq!(state.mode, MetricMode::ByVolume);
    }
}

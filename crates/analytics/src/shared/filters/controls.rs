use contracts::enums::{AnalysisView, Dimension, MetricMode};
use contracts::shared::filters::{AnalysisFilters, FilterState, FilterValue};
use std::collections::BTreeMap;

use crate::shared::error::AnalyticsError;

/// Replace the selection of one dimension of a view's filter state.
///
/// Rejects dimensions the view does not filter on and year values that are
/// not integers. Selecting regions resets the country selection.
pub fn apply_selection(
    state: &mut FilterState,
    dimension: Dimension,
    values: Vec<FilterValue>,
) -> Result<(), AnalyticsError> {
    if !state.view.accepts(dimension) {
        return Err(AnalyticsError::DimensionNotInView {
            dimension,
            view: state.view,
        });
    }
    if dimension == Dimension::Year {
        for value in &values {
            if let FilterValue::Text(text) = value {
                if text.trim().parse::<i64>().is_err() {
                    return Err(AnalyticsError::InvalidYear(text.clone()));
                }
            }
        }
    }

    tracing::debug!(
        "{:?} view: {} -> {} value(s)",
        state.view,
        dimension,
        values.len()
    );
    state.set_selection(dimension, values);
    Ok(())
}

/// Build a filter state from raw `dimension code -> values` pairs
pub fn parse_selection(
    view: AnalysisView,
    raw: &BTreeMap<String, Vec<FilterValue>>,
    mode: MetricMode,
) -> Result<FilterState, AnalyticsError> {
    let mut state = FilterState::new(view).with_mode(mode);
    // regions first: setting them resets the country selection
    let mut parsed = raw
        .iter()
        .map(|(code, values)| {
            Dimension::from_code(code)
                .map(|d| (d, values))
                .ok_or_else(|| AnalyticsError::UnknownDimension(code.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    parsed.sort_by_key(|(d, _)| *d != Dimension::Region);

    for (dimension, values) in parsed {
        apply_selection(&mut state, dimension, values.clone())?;
    }
    Ok(state)
}

/// Re-check externally supplied filter states through [`apply_selection`].
///
/// Each slot must carry its own view tag and restrict only the dimensions
/// that view filters on.
pub fn validate_filters(filters: &AnalysisFilters) -> Result<AnalysisFilters, AnalyticsError> {
    let mut checked = AnalysisFilters::default();
    for view in [
        AnalysisView::Main,
        AnalysisView::Incremental,
        AnalysisView::Attractiveness,
        AnalysisView::Growth,
    ] {
        let state = filters.get(view);
        if state.view != view {
            return Err(AnalyticsError::ViewMismatch {
                slot: view,
                found: state.view,
            });
        }

        let target = checked.get_mut(view);
        target.mode = state.mode;
        // Dimension order puts regions before countries
        for (dimension, values) in &state.selections {
            apply_selection(target, *dimension, values.iter().cloned().collect())?;
        }
    }
    Ok(checked)
}

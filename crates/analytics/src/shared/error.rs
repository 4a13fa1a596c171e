use contracts::enums::{AnalysisView, Dimension};
use thiserror::Error;

/// Ошибки аналитического ядра
#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    #[error("Dimension {dimension} is not filterable in the {view:?} view")]
    DimensionNotInView {
        dimension: Dimension,
        view: AnalysisView,
    },

    #[error("Filter state of the {slot:?} view is tagged {found:?}")]
    ViewMismatch {
        slot: AnalysisView,
        found: AnalysisView,
    },

    #[error("Invalid year value: {0}")]
    InvalidYear(String),

    #[error("Invalid year window: {start}..={end}")]
    InvalidYearWindow { start: i32, end: i32 },

    #[error("Default increment schedule has {actual} values, {expected} years expected")]
    IncrementScheduleMismatch { expected: usize, actual: usize },

    #[error("Fact generation failed: {0}")]
    Generation(String),
}

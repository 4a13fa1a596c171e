pub mod analysis_view;
pub mod dimension;
pub mod metric_mode;

pub use analysis_view::AnalysisView;
pub use dimension::Dimension;
pub use metric_mode::MetricMode;

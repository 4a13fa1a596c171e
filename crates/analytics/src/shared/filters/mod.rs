pub mod controls;
pub mod engine;
pub mod options;

pub use controls::{apply_selection, parse_selection, validate_filters};
pub use engine::{fact_matches, filter_facts};
pub use options::{countries_for, country_options, default_main_filters, filter_options};

pub mod filters;
pub mod series;

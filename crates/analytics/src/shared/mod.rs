pub mod aggregation;
pub mod config;
pub mod data;
pub mod error;
pub mod filters;
pub mod format;

#[cfg(test)]
pub mod testing;

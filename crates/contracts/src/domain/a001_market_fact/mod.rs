pub mod aggregate;
pub mod geography;

pub use aggregate::{DimensionValue, MarketFact};

pub mod delimited;
pub mod fact_store;
pub mod generator;

pub use delimited::{parse_delimited, DelimitedTable};
pub use fact_store::{FactSnapshot, FactStore};
pub use generator::{FactGenerator, SeededRandom, SyntheticGenerator};

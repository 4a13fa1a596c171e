pub mod service;

pub use service::build_incremental_opportunity;

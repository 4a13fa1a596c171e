pub mod service;

pub use service::build_growth_rates;

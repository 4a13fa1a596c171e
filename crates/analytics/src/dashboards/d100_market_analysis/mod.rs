pub mod service;

pub use service::{build_market_analysis, market_kpi};

pub mod service;

pub use service::{apply_fallback, attractiveness_window, build_market_attractiveness};

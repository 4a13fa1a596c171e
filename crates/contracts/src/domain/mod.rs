pub mod a001_market_fact;

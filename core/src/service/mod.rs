pub mod aggregator;
pub mod loader;

//! Services for loading, aggregating and configuring

pub mod aggregator;
pub mod config;
pub mod loader;
pub mod range;
pub mod terminal;

pub use aggregator::Aggregator;
pub use config::{ConfigService, EnvVars, FileConfig, Overrides, Settings};
pub use loader::{load_samples, parse_samples};
pub use range::RangeSpec;

pub mod descriptive;
pub mod trend;
pub mod engine;

pub use descriptive::{quantile, DescriptiveStats};
pub use trend::TrendMetrics;
pub use engine::MetricsEngine;

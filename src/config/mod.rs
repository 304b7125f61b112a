pub mod traits;
pub mod generator;
pub mod output;
pub mod manager;

pub use manager::AppConfig;
pub use generator::GeneratorConfig;
pub use output::OutputConfig;
pub use traits::ConfigSection;

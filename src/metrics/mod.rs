pub mod collector;
pub mod exporter;
pub mod types;

pub use collector::MetricsCollector;
pub use exporter::MetricsExporter;
pub use types::SpotMetrics;

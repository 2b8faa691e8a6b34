pub mod acquisition;
pub mod config;
pub mod pipeline;
pub mod reports;
pub mod store;
pub mod telemetry;
pub mod terms;

// Re-export commonly used types for convenience.
pub use acquisition::{AcquisitionError, StaticSource, TermSource};
pub use config::{AppConfig, WorkspacePaths};
pub use pipeline::{Pipeline, RunSummary};
pub use store::DayStore;
pub use terms::{merge_terms, TermRecord};

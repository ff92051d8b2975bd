//! Services for data aggregation and processing

pub mod aggregator;
pub mod data_loader;
pub mod format;
pub mod normalizer;
pub mod pricing;

pub use aggregator::Aggregator;
pub use data_loader::SnapshotLoader;
pub use normalizer::{normalize, NormalizedSnapshot};
pub use pricing::RateTable;

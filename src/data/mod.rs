//! Synthetic data sources.

pub mod generate;

pub use generate::{GeneratedData, GeneratedStats, generate_operations, month_starts};

//! Input/output helpers.
//!
//! - CSV ingest + column resolution (`ingest`)
//! - raw and processed CSV writers (`export`)

pub mod export;
pub mod ingest;

pub use export::*;
pub use ingest::*;

//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the enumerated dataset dimensions (`Product`, `ClientSegment`)
//! - raw rows (`OperationsRecord`)
//! - processed rows and their derived metrics (`ProcessedRecord`, `ProfitFigures`)

pub mod types;

pub use types::*;

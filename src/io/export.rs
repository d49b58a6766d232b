//! Write the raw and processed CSV files.
//!
//! Both writers create the parent directory when needed and overwrite any
//! existing file.

use std::fs::{File, create_dir_all};
use std::path::Path;

use crate::domain::OperationsRecord;
use crate::error::AppError;
use crate::report::ProcessedTable;

/// Write generated rows to the raw CSV (no index column).
pub fn write_operations_csv(path: &Path, records: &[OperationsRecord]) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(create_output(path)?);

    if records.is_empty() {
        writer
            .write_record(["Month", "Product", "ClientSegment", "RevenueCHF", "CostCHF"])
            .map_err(|e| AppError::output(format!("Failed to write raw CSV header: {e}")))?;
    }
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| AppError::output(format!("Failed to write raw CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::output(format!("Failed to flush raw CSV '{}': {e}", path.display())))
}

/// Write the processed table as laid out by `process_table`.
pub fn write_processed_csv(path: &Path, table: &ProcessedTable) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(create_output(path)?);

    writer
        .write_record(&table.headers)
        .map_err(|e| AppError::output(format!("Failed to write processed CSV header: {e}")))?;

    for r in &table.records {
        writer
            .write_record(&r.cells)
            .map_err(|e| AppError::output(format!("Failed to write processed CSV row: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| AppError::output(format!("Failed to flush processed CSV '{}': {e}", path.display())))
}

fn create_output(path: &Path) -> Result<File, AppError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        create_dir_all(dir)
            .map_err(|e| AppError::output(format!("Failed to create directory '{}': {e}", dir.display())))?;
    }
    File::create(path).map_err(|e| AppError::output(format!("Failed to create CSV '{}': {e}", path.display())))
}

//! CSV ingest for the processor.
//!
//! The processor accepts any table that has a revenue-like and a cost-like
//! column. This module is responsible for:
//! - reading headers and rows (flexible widths, cells kept as written)
//! - resolving the revenue/cost columns by case-insensitive prefix
//! - coercing those cells to numbers (unparseable → 0)
//!
//! No profit logic lives here.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use tracing::warn;

use crate::error::AppError;

const REVENUE_PREFIX: &str = "revenue";
const COST_PREFIX: &str = "cost";

/// Positions of the columns the profit computation reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfitColumns {
    pub revenue: usize,
    pub cost: usize,
}

/// A row-level error encountered during ingest.
#[derive(Debug, Clone)]
pub struct RowError {
    pub line: usize,
    pub message: String,
}

/// One ingested row: the original cells plus coerced amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct IngestedRow {
    pub cells: Vec<String>,
    pub revenue: f64,
    pub cost: f64,
}

/// Ingest output: headers, resolved columns, rows, and diagnostics.
#[derive(Debug, Clone)]
pub struct IngestedTable {
    pub path: PathBuf,
    pub headers: Vec<String>,
    pub columns: ProfitColumns,
    pub rows: Vec<IngestedRow>,
    pub row_errors: Vec<RowError>,
    /// Non-empty revenue/cost cells that could not be parsed and became `0`.
    pub coerced_cells: usize,
}

/// Load a CSV and prepare it for the profit computation.
pub fn load_table(path: &Path) -> Result<IngestedTable, AppError> {
    if !path.is_file() {
        return Err(AppError::input(format!(
            "Raw CSV not found at {}. Run `finops generate` first or place your raw CSV there.",
            path.display()
        )));
    }

    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open CSV '{}': {e}", path.display())))?;

    // Cells are kept byte-for-byte; only headers and amounts are trimmed.
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::input(format!("Failed to read CSV headers: {e}")))?
        .iter()
        .map(normalize_header_name)
        .collect();

    let columns = resolve_profit_columns(&headers).ok_or_else(|| {
        AppError::input(format!(
            "Could not find revenue/cost columns in {}. Columns found: {:?}",
            path.display(),
            headers
        ))
    })?;

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut coerced_cells = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2: records start after the header line, and lines are 1-based.
        let line = idx + 2;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        let cells = fit_to_width(&record, headers.len());
        let (revenue, revenue_coerced) = coerce_amount(&cells[columns.revenue]);
        let (cost, cost_coerced) = coerce_amount(&cells[columns.cost]);
        for (coerced, name) in [(revenue_coerced, columns.revenue), (cost_coerced, columns.cost)] {
            if coerced {
                coerced_cells += 1;
                warn!(line, column = %headers[name], "non-numeric amount coerced to 0");
            }
        }

        rows.push(IngestedRow { cells, revenue, cost });
    }

    Ok(IngestedTable {
        path: path.to_path_buf(),
        headers,
        columns,
        rows,
        row_errors,
        coerced_cells,
    })
}

/// Find the first revenue-like and first cost-like column.
///
/// Matching is a case-insensitive prefix test; the first match in header
/// order wins.
pub fn resolve_profit_columns(headers: &[String]) -> Option<ProfitColumns> {
    let find = |prefix: &str| {
        headers
            .iter()
            .position(|h| h.to_lowercase().starts_with(prefix))
    };

    Some(ProfitColumns {
        revenue: find(REVENUE_PREFIX)?,
        cost: find(COST_PREFIX)?,
    })
}

/// Parse an amount cell, substituting `0.0` for anything that is not a finite number.
///
/// The flag is `true` when a non-empty cell had to be replaced.
pub fn coerce_amount(cell: &str) -> (f64, bool) {
    let s = cell.trim();
    if s.is_empty() {
        return (0.0, false);
    }
    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => (v, false),
        _ => (0.0, true),
    }
}

fn normalize_header_name(name: &str) -> String {
    // Excel and other tools sometimes emit UTF-8 CSVs with a BOM prefix on the
    // first header. Left in place it would break prefix matching.
    name.trim().trim_start_matches('\u{feff}').to_string()
}

fn fit_to_width(record: &StringRecord, width: usize) -> Vec<String> {
    let mut cells: Vec<String> = record.iter().take(width).map(str::to_string).collect();
    cells.resize(width, String::new());
    cells
}

//! Shared pipeline logic behind the CLI subcommands.
//!
//! generate: synthetic rows -> raw CSV
//! process:  raw CSV -> profit metrics -> processed CSV
//!
//! The CLI only handles printing; everything here returns data.

use tracing::{info, warn};

use crate::config::ProjectPaths;
use crate::data::{GeneratedData, generate_operations};
use crate::domain::GenerateConfig;
use crate::error::AppError;
use crate::io::export::{write_operations_csv, write_processed_csv};
use crate::io::ingest::{RowError, load_table};
use crate::report::{ProcessedTable, ProfitSummary, process_table, summarize};

/// Outputs of a generator run.
#[derive(Debug, Clone)]
pub struct GenerateOutput {
    pub data: GeneratedData,
}

/// Outputs of a processor run.
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub table: ProcessedTable,
    pub summary: ProfitSummary,
    /// Input rows that could not be decoded and were left out.
    pub row_errors: Vec<RowError>,
}

/// Generate the synthetic dataset and write the raw CSV.
pub fn run_generate(paths: &ProjectPaths, config: &GenerateConfig) -> Result<GenerateOutput, AppError> {
    let data = generate_operations(config)?;
    write_operations_csv(&paths.raw_csv, &data.records)?;
    info!(path = %paths.raw_csv.display(), rows = data.records.len(), "wrote raw operations CSV");

    Ok(GenerateOutput { data })
}

/// Read the raw CSV, attach profit metrics, and write the processed CSV.
pub fn run_process(paths: &ProjectPaths) -> Result<ProcessOutput, AppError> {
    let ingested = load_table(&paths.raw_csv)?;
    info!(
        path = %ingested.path.display(),
        rows = ingested.rows.len(),
        revenue_column = %ingested.headers[ingested.columns.revenue],
        cost_column = %ingested.headers[ingested.columns.cost],
        "loaded raw CSV"
    );
    for e in &ingested.row_errors {
        warn!(line = e.line, error = %e.message, "skipped unreadable CSV row");
    }
    if ingested.coerced_cells > 0 {
        warn!(cells = ingested.coerced_cells, "non-numeric amounts were treated as 0");
    }

    let table = process_table(&ingested);
    write_processed_csv(&paths.processed_csv, &table)?;
    info!(path = %paths.processed_csv.display(), rows = table.records.len(), "wrote processed CSV");

    let summary = summarize(&table);
    Ok(ProcessOutput {
        table,
        summary,
        row_errors: ingested.row_errors,
    })
}

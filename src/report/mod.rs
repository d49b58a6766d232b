//! Reporting utilities: profit metrics and formatted terminal output.

pub mod format;
pub mod profit;

pub use format::{format_generate_summary, format_process_summary};
pub use profit::{ProcessedTable, ProfitSummary, process_table, profit_figures, summarize};

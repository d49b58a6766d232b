//! Formatted terminal output for both stages.
//!
//! We keep formatting code in one place so the generator and profit code stay
//! free of presentation concerns.

use std::path::Path;

use crate::data::GeneratedStats;
use crate::io::ingest::RowError;
use crate::report::profit::ProfitSummary;

/// Summary printed after the generator writes the raw CSV.
pub fn format_generate_summary(path: &Path, stats: &GeneratedStats, seed: Option<u64>) -> String {
    let mut out = String::new();

    out.push_str("=== finops - synthetic operations data ===\n");
    out.push_str(&format!("Wrote raw data to: {}\n", path.display()));
    out.push_str(&format!("Rows: {}\n", stats.n_rows));
    match seed {
        Some(seed) => out.push_str(&format!("Seed: {seed}\n")),
        None => out.push_str("Seed: entropy\n"),
    }
    out.push_str(&format!(
        "Revenue: [{}, {}] CHF | total {} CHF\n",
        stats.revenue_min, stats.revenue_max, stats.revenue_total
    ));
    out.push_str(&format!("Cost: total {} CHF", stats.cost_total));

    out
}

/// Summary printed after the processor writes the processed CSV.
pub fn format_process_summary(path: &Path, summary: &ProfitSummary, row_errors: &[RowError]) -> String {
    let mut out = String::new();

    out.push_str("=== finops - profit metrics ===\n");
    out.push_str(&format!(
        "Wrote processed data to: {}  (rows: {})\n",
        path.display(),
        summary.n_rows
    ));
    out.push_str(&format!("{:<14}{:>18}\n", "Revenue CHF", format!("{:.2}", summary.revenue_total)));
    out.push_str(&format!("{:<14}{:>18}\n", "Cost CHF", format!("{:.2}", summary.cost_total)));
    out.push_str(&format!("{:<14}{:>18}\n", "Profit CHF", format!("{:.2}", summary.profit_total)));
    let margin = summary
        .overall_margin
        .map(|m| format!("{:.2}%", m * 100.0))
        .unwrap_or_else(|| "n/a".to_string());
    out.push_str(&format!("{:<14}{:>18}", "Margin", margin));

    if summary.undefined_margins > 0 {
        out.push_str(&format!(
            "\nNote: {} row(s) have zero revenue; their margin is left empty.",
            summary.undefined_margins
        ));
    }

    if !row_errors.is_empty() {
        out.push_str(&format!("\nSkipped {} unreadable row(s):", row_errors.len()));
        for e in row_errors {
            out.push_str(&format!("\n  line {}: {}", e.line, e.message));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(undefined: usize, margin: Option<f64>) -> ProfitSummary {
        ProfitSummary {
            n_rows: 2,
            revenue_total: 200_000.0,
            cost_total: 150_000.0,
            profit_total: 50_000.0,
            overall_margin: margin,
            undefined_margins: undefined,
        }
    }

    #[test]
    fn process_summary_reports_rows_and_margin() {
        let text = format_process_summary(Path::new("out.csv"), &summary(0, Some(0.25)), &[]);
        assert!(text.contains("Wrote processed data to: out.csv  (rows: 2)"));
        assert!(text.contains("25.00%"));
        assert!(!text.contains("Note:"));
    }

    #[test]
    fn process_summary_flags_zero_revenue_rows() {
        let text = format_process_summary(Path::new("out.csv"), &summary(1, None), &[]);
        assert!(text.contains("n/a"));
        assert!(text.contains("1 row(s) have zero revenue"));
    }

    #[test]
    fn process_summary_lists_skipped_rows() {
        let errors = [RowError {
            line: 3,
            message: "CSV parse error: invalid utf-8".to_string(),
        }];
        let text = format_process_summary(Path::new("out.csv"), &summary(0, Some(0.25)), &errors);
        assert!(text.contains("Skipped 1 unreadable row(s):"));
        assert!(text.contains("line 3: CSV parse error: invalid utf-8"));
    }

    #[test]
    fn generate_summary_mentions_seed() {
        let stats = GeneratedStats {
            n_rows: 36,
            revenue_min: 100_000,
            revenue_max: 499_999,
            revenue_total: 10_000_000,
            cost_total: 5_000_000,
        };
        let text = format_generate_summary(Path::new("raw.csv"), &stats, Some(7));
        assert!(text.contains("Rows: 36"));
        assert!(text.contains("Seed: 7"));
    }
}

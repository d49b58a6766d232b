//! Profit metrics: per-row figures and table-level totals.

use crate::domain::{MARGIN_DECIMALS, ProcessedRecord, ProfitFigures};
use crate::io::ingest::IngestedTable;

pub const PROFIT_HEADER: &str = "AbsoluteProfitCHF";
pub const MARGIN_HEADER: &str = "ProfitMargin";

/// Ingested table with profit metrics attached to every row.
///
/// `headers` and each record's `cells` are the complete output layout,
/// metric columns included.
#[derive(Debug, Clone)]
pub struct ProcessedTable {
    pub headers: Vec<String>,
    pub records: Vec<ProcessedRecord>,
}

/// Table-level totals for the terminal summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfitSummary {
    pub n_rows: usize,
    pub revenue_total: f64,
    pub cost_total: f64,
    pub profit_total: f64,
    /// `profit_total / revenue_total`; `None` when total revenue is zero.
    pub overall_margin: Option<f64>,
    /// Rows whose margin is undefined (zero revenue).
    pub undefined_margins: usize,
}

/// Compute absolute profit and margin for one row.
pub fn profit_figures(revenue: f64, cost: f64) -> ProfitFigures {
    let absolute_profit = revenue - cost;
    ProfitFigures {
        absolute_profit,
        margin: margin(absolute_profit, revenue),
    }
}

/// Attach profit metrics to every ingested row.
///
/// Revenue and cost cells are replaced by their coerced values so the output
/// agrees with the numbers the metrics were computed from. Existing
/// `AbsoluteProfitCHF` / `ProfitMargin` columns (exact name) are overwritten
/// in place; missing ones are appended.
pub fn process_table(table: &IngestedTable) -> ProcessedTable {
    let columns = table.columns;
    let mut headers = table.headers.clone();
    let profit_at = metric_column(&mut headers, PROFIT_HEADER);
    let margin_at = metric_column(&mut headers, MARGIN_HEADER);

    let records = table
        .rows
        .iter()
        .map(|row| {
            let profit = profit_figures(row.revenue, row.cost);

            let mut cells = row.cells.clone();
            cells.resize(headers.len(), String::new());
            cells[columns.revenue] = format_amount(row.revenue);
            cells[columns.cost] = format_amount(row.cost);
            cells[profit_at] = format_amount(profit.absolute_profit);
            cells[margin_at] = profit.margin.map(|m| m.to_string()).unwrap_or_default();

            ProcessedRecord {
                cells,
                revenue: row.revenue,
                cost: row.cost,
                profit,
            }
        })
        .collect();

    ProcessedTable { headers, records }
}

/// Totals across all processed rows.
pub fn summarize(table: &ProcessedTable) -> ProfitSummary {
    let revenue_total: f64 = table.records.iter().map(|r| r.revenue).sum();
    let cost_total: f64 = table.records.iter().map(|r| r.cost).sum();
    let profit_total: f64 = table.records.iter().map(|r| r.profit.absolute_profit).sum();

    ProfitSummary {
        n_rows: table.records.len(),
        revenue_total,
        cost_total,
        profit_total,
        overall_margin: margin(profit_total, revenue_total),
        undefined_margins: table.records.iter().filter(|r| r.profit.margin.is_none()).count(),
    }
}

/// Format an amount for CSV output: integral values without a fractional part.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        value.to_string()
    }
}

fn metric_column(headers: &mut Vec<String>, name: &str) -> usize {
    let existing = headers.iter().position(|h| h == name);
    if let Some(idx) = existing {
        return idx;
    }
    headers.push(name.to_string());
    headers.len() - 1
}

fn margin(profit: f64, revenue: f64) -> Option<f64> {
    if revenue == 0.0 {
        return None;
    }
    Some(round_to(profit / revenue, MARGIN_DECIMALS))
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ingest::{IngestedRow, ProfitColumns};
    use std::path::PathBuf;

    fn table(rows: &[(&str, f64, f64)]) -> IngestedTable {
        IngestedTable {
            path: PathBuf::from("test.csv"),
            headers: vec!["Product".into(), "RevenueCHF".into(), "CostCHF".into()],
            columns: ProfitColumns { revenue: 1, cost: 2 },
            rows: rows
                .iter()
                .map(|(p, rev, cost)| IngestedRow {
                    cells: vec![p.to_string(), "raw".into(), "raw".into()],
                    revenue: *rev,
                    cost: *cost,
                })
                .collect(),
            row_errors: Vec::new(),
            coerced_cells: 0,
        }
    }

    #[test]
    fn half_margin() {
        let f = profit_figures(200_000.0, 100_000.0);
        assert_eq!(f.absolute_profit, 100_000.0);
        assert_eq!(f.margin, Some(0.5));
    }

    #[test]
    fn zero_revenue_has_no_margin() {
        let f = profit_figures(0.0, 5_000.0);
        assert_eq!(f.absolute_profit, -5_000.0);
        assert_eq!(f.margin, None);
    }

    #[test]
    fn margin_is_rounded_to_four_places() {
        // 1 - 2/3 = 0.33333...
        let f = profit_figures(300_000.0, 200_000.0);
        assert_eq!(f.margin, Some(0.3333));

        let f = profit_figures(123_457.0, 69_521.0);
        assert_eq!(f.margin, Some(0.4369));
    }

    #[test]
    fn processing_rewrites_amount_cells() {
        let processed = process_table(&table(&[("ETF", 200_000.0, 100_000.0), ("Bonds", 0.0, 0.0)]));
        assert_eq!(processed.records.len(), 2);
        assert_eq!(
            processed.headers,
            vec!["Product", "RevenueCHF", "CostCHF", "AbsoluteProfitCHF", "ProfitMargin"]
        );
        assert_eq!(processed.records[0].cells, vec!["ETF", "200000", "100000", "100000", "0.5"]);
        assert_eq!(processed.records[0].profit.margin, Some(0.5));
        assert_eq!(processed.records[1].cells, vec!["Bonds", "0", "0", "0", ""]);
        assert_eq!(processed.records[1].profit.margin, None);
    }

    #[test]
    fn existing_metric_columns_are_overwritten() {
        let mut input = table(&[("ETF", 200_000.0, 100_000.0)]);
        input.headers.insert(1, "ProfitMargin".into());
        input.rows[0].cells.insert(1, "9".into());
        input.columns = ProfitColumns { revenue: 2, cost: 3 };

        let processed = process_table(&input);
        assert_eq!(
            processed.headers,
            vec!["Product", "ProfitMargin", "RevenueCHF", "CostCHF", "AbsoluteProfitCHF"]
        );
        assert_eq!(processed.records[0].cells, vec!["ETF", "0.5", "200000", "100000", "100000"]);
    }

    #[test]
    fn summary_totals() {
        let processed = process_table(&table(&[("ETF", 200_000.0, 100_000.0), ("Bonds", 0.0, 50_000.0)]));
        let s = summarize(&processed);
        assert_eq!(s.n_rows, 2);
        assert_eq!(s.revenue_total, 200_000.0);
        assert_eq!(s.cost_total, 150_000.0);
        assert_eq!(s.profit_total, 50_000.0);
        assert_eq!(s.overall_margin, Some(0.25));
        assert_eq!(s.undefined_margins, 1);
    }

    #[test]
    fn amount_formatting() {
        assert_eq!(format_amount(100_000.0), "100000");
        assert_eq!(format_amount(-5.0), "-5");
        assert_eq!(format_amount(12.5), "12.5");
    }
}

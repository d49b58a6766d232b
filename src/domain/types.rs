//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - built in-memory by the generator
//! - written to the raw CSV
//! - carried through the profit computation into the processed CSV

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// First month of the synthetic dataset.
pub const FIRST_MONTH: (i32, u32, u32) = (2024, 1, 1);

/// Number of consecutive months generated.
pub const MONTH_COUNT: u32 = 12;

/// Revenue is drawn from `[REVENUE_MIN, REVENUE_MAX)` (CHF).
pub const REVENUE_MIN: i64 = 100_000;
pub const REVENUE_MAX: i64 = 500_000;

/// Cost is `revenue × u` with `u` drawn from `[COST_RATIO_MIN, COST_RATIO_MAX)`.
pub const COST_RATIO_MIN: f64 = 0.35;
pub const COST_RATIO_MAX: f64 = 0.65;

/// Decimal places kept on `ProfitMargin`.
pub const MARGIN_DECIMALS: i32 = 4;

/// Product lines covered by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    Equity,
    Bonds,
    #[serde(rename = "ETF")]
    Etf,
}

impl Product {
    pub const ALL: [Product; 3] = [Product::Equity, Product::Bonds, Product::Etf];

    /// Label used in CSV files and terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Product::Equity => "Equity",
            Product::Bonds => "Bonds",
            Product::Etf => "ETF",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Client segments covered by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientSegment {
    Private,
    Corporate,
    Institutional,
}

impl ClientSegment {
    pub const ALL: [ClientSegment; 3] = [
        ClientSegment::Private,
        ClientSegment::Corporate,
        ClientSegment::Institutional,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ClientSegment::Private => "Private",
            ClientSegment::Corporate => "Corporate",
            ClientSegment::Institutional => "Institutional",
        }
    }
}

impl fmt::Display for ClientSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One row of the raw operations table.
///
/// Field names map 1:1 onto the raw CSV header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationsRecord {
    #[serde(rename = "Month")]
    pub month: NaiveDate,
    #[serde(rename = "Product")]
    pub product: Product,
    #[serde(rename = "ClientSegment")]
    pub client_segment: ClientSegment,
    #[serde(rename = "RevenueCHF")]
    pub revenue_chf: i64,
    #[serde(rename = "CostCHF")]
    pub cost_chf: i64,
}

/// Derived profit metrics for a single row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitFigures {
    /// `revenue - cost`.
    pub absolute_profit: f64,
    /// `absolute_profit / revenue`, rounded; `None` when revenue is zero.
    pub margin: Option<f64>,
}

/// A source row augmented with its profit metrics.
///
/// The processor works on whatever columns the input CSV has, so the row is
/// kept as string cells: the full output row, metric cells included. Revenue
/// and cost cells hold the coerced numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedRecord {
    pub cells: Vec<String>,
    pub revenue: f64,
    pub cost: f64,
    pub profit: ProfitFigures,
}

/// Generator settings.
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

//! Synthetic operations dataset generation.
//!
//! Every (month, product, client segment) combination gets exactly one row,
//! iterated month-major, then product, then segment.

use chrono::{Months, NaiveDate};
use rand::prelude::*;
use rand::rngs::StdRng;

use crate::domain::{
    COST_RATIO_MAX, COST_RATIO_MIN, ClientSegment, FIRST_MONTH, GenerateConfig, MONTH_COUNT, OperationsRecord,
    Product, REVENUE_MAX, REVENUE_MIN,
};
use crate::error::AppError;

/// Generated rows plus their summary stats.
#[derive(Debug, Clone)]
pub struct GeneratedData {
    pub records: Vec<OperationsRecord>,
    pub stats: GeneratedStats,
}

/// Summary stats about the generated rows.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedStats {
    pub n_rows: usize,
    pub revenue_min: i64,
    pub revenue_max: i64,
    pub revenue_total: i64,
    pub cost_total: i64,
}

/// Build one row per (month, product, segment) with random revenue and cost.
pub fn generate_operations(config: &GenerateConfig) -> Result<GeneratedData, AppError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (y, m, d) = FIRST_MONTH;
    let first = NaiveDate::from_ymd_opt(y, m, d)
        .ok_or_else(|| AppError::new(4, "Invalid first month for the synthetic dataset."))?;
    let months = month_starts(first, MONTH_COUNT)?;

    let mut records = Vec::with_capacity(months.len() * Product::ALL.len() * ClientSegment::ALL.len());
    for &month in &months {
        for product in Product::ALL {
            for client_segment in ClientSegment::ALL {
                let (revenue_chf, cost_chf) = draw_amounts(&mut rng);
                records.push(OperationsRecord {
                    month,
                    product,
                    client_segment,
                    revenue_chf,
                    cost_chf,
                });
            }
        }
    }

    let stats = compute_stats(&records).ok_or_else(|| AppError::new(4, "Failed to compute generator stats."))?;

    Ok(GeneratedData { records, stats })
}

/// First-of-month dates: `first`, `first + 1 month`, ...
pub fn month_starts(first: NaiveDate, count: u32) -> Result<Vec<NaiveDate>, AppError> {
    (0..count)
        .map(|i| {
            first
                .checked_add_months(Months::new(i))
                .ok_or_else(|| AppError::new(4, format!("Month offset {i} overflows the calendar.")))
        })
        .collect()
}

// Cost is truncated toward zero, so it can land one franc below the exact ratio bound.
fn draw_amounts(rng: &mut StdRng) -> (i64, i64) {
    let revenue = rng.gen_range(REVENUE_MIN..REVENUE_MAX);
    let ratio = rng.gen_range(COST_RATIO_MIN..COST_RATIO_MAX);
    let cost = (revenue as f64 * ratio).trunc() as i64;
    (revenue, cost)
}

fn compute_stats(records: &[OperationsRecord]) -> Option<GeneratedStats> {
    let revenue_min = records.iter().map(|r| r.revenue_chf).min()?;
    let revenue_max = records.iter().map(|r| r.revenue_chf).max()?;

    Some(GeneratedStats {
        n_rows: records.len(),
        revenue_min,
        revenue_max,
        revenue_total: records.iter().map(|r| r.revenue_chf).sum(),
        cost_total: records.iter().map(|r| r.cost_chf).sum(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> GeneratedData {
        generate_operations(&GenerateConfig { seed: Some(seed) }).unwrap()
    }

    #[test]
    fn produces_full_cross_product() {
        let data = seeded(1);
        assert_eq!(data.records.len(), 36);
        assert_eq!(data.stats.n_rows, 36);

        // Month-major ordering: first nine rows share January.
        let jan = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(data.records[..9].iter().all(|r| r.month == jan));
        assert_eq!(data.records[0].product, Product::Equity);
        assert_eq!(data.records[0].client_segment, ClientSegment::Private);
        assert_eq!(data.records[8].product, Product::Etf);
        assert_eq!(data.records[8].client_segment, ClientSegment::Institutional);

        let dec = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(data.records[35].month, dec);
    }

    #[test]
    fn amounts_stay_in_range() {
        for seed in 0..20 {
            for r in seeded(seed).records {
                assert!((REVENUE_MIN..REVENUE_MAX).contains(&r.revenue_chf), "revenue {}", r.revenue_chf);

                let rev = r.revenue_chf as f64;
                let cost = r.cost_chf as f64;
                assert!(cost >= (rev * COST_RATIO_MIN).floor(), "cost {cost} below 35% of {rev}");
                assert!(cost <= rev * COST_RATIO_MAX, "cost {cost} above 65% of {rev}");
            }
        }
    }

    #[test]
    fn same_seed_is_reproducible() {
        assert_eq!(seeded(42).records, seeded(42).records);
    }

    #[test]
    fn month_starts_cross_year_boundary() {
        let nov = NaiveDate::from_ymd_opt(2024, 11, 1).unwrap();
        let months = month_starts(nov, 3).unwrap();
        assert_eq!(
            months,
            vec![
                nov,
                NaiveDate::from_ymd_opt(2024, 12, 1).unwrap(),
                NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            ]
        );
    }
}

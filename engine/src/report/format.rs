//! Shapes the year aggregate into the output models consumers receive.

use std::collections::HashMap;

use shared::models::{MonthlySales, SalesRecord, YearSales, YearTotal};
use shared::utils::{month_name, round2};

use crate::error::EngineError;
use crate::report::aggregate::YearAggregate;
use crate::resolve::date::resolve_date;

/// Maps each year's 12-slot array to named month buckets, most recent year
/// first. Rounding happens here, once per bucket, never per row.
pub fn format_report(aggregate: &YearAggregate) -> Vec<YearSales> {
    let mut report: Vec<YearSales> = aggregate
        .iter()
        .map(|(year, months)| YearSales {
            year: *year,
            monthly: months
                .iter()
                .enumerate()
                .map(|(idx, sum)| MonthlySales {
                    month: month_name(idx).to_string(),
                    value: sum.round() as i64,
                })
                .collect(),
        })
        .collect();
    report.sort_by(|a, b| b.year.cmp(&a.year));
    report
}

/// Exact-match filter over a formatted report. A miss is the expected
/// `YearNotFound` outcome, not a failure.
pub fn filter_by_year(report: &[YearSales], year: i32) -> Result<YearSales, EngineError> {
    report
        .iter()
        .find(|ys| ys.year == year)
        .cloned()
        .ok_or(EngineError::YearNotFound { year })
}

/// The lighter per-year totals view over typed records. Years come from
/// the fixed `Sale_Date` field, totals from `Sales_Amount` alone; rows with
/// unreadable dates are skipped. Output is sorted by year for stable
/// results, though callers are promised no particular order.
pub fn yearly_totals(records: &[SalesRecord]) -> Vec<YearTotal> {
    let mut totals: HashMap<i32, f64> = HashMap::new();
    for record in records {
        if let Some(ym) = resolve_date(&record.sale_date) {
            *totals.entry(ym.year).or_insert(0.0) += record.sales_amount;
        }
    }

    let mut out: Vec<YearTotal> = totals
        .into_iter()
        .map(|(year, total)| YearTotal {
            year: year.to_string(),
            total_sales: round2(total),
        })
        .collect();
    out.sort_by(|a, b| a.year.cmp(&b.year));
    out
}

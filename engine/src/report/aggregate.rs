//! Year/month accumulation of resolved rows.

use std::collections::HashMap;

use crate::data::loader::SalesDataset;
use crate::detect::ColumnMapping;
use crate::resolve::date::resolve_date;
use crate::resolve::value::resolve_value;

/// One row after successful date and value extraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedRecord {
    pub year: i32,
    pub month_index: usize,
    pub value: f64,
}

/// Per-year running sums, one slot per month. Slots are created
/// zero-initialized on first sight of a year and only ever grow by
/// accumulation, so summation order does not matter.
pub type YearAggregate = HashMap<i32, [f64; 12]>;

/// Resolves every row of the dataset against the precomputed mapping. Rows
/// whose date cell is empty or unparseable are dropped, not erred.
pub fn resolve_rows(dataset: &SalesDataset, mapping: &ColumnMapping) -> Vec<ResolvedRecord> {
    let mut resolved = Vec::with_capacity(dataset.rows.len());
    let mut dropped = 0usize;
    for row in &dataset.rows {
        let raw_date = row.get(&mapping.date).unwrap_or("");
        match resolve_date(raw_date) {
            Some(ym) => resolved.push(ResolvedRecord {
                year: ym.year,
                month_index: ym.month_index,
                value: resolve_value(row, mapping, &dataset.headers),
            }),
            None => dropped += 1,
        }
    }
    if dropped > 0 {
        tracing::debug!(dropped, kept = resolved.len(), "Dropped rows with unresolvable dates");
    }
    resolved
}

pub fn accumulate(records: &[ResolvedRecord]) -> YearAggregate {
    let mut aggregate = YearAggregate::new();
    for record in records {
        let months = aggregate.entry(record.year).or_insert([0.0; 12]);
        months[record.month_index] += record.value;
    }
    aggregate
}

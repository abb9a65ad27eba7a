//! Per-row sales value resolution. The strategies form an explicit ordered
//! fallback chain; the first one that produces a value wins, and a row that
//! defeats all of them contributes zero rather than failing the request.

use crate::data::loader::RawRow;
use crate::detect::{detect_column, ColumnMapping, QUANTITY_PATTERNS, UNIT_PRICE_PATTERNS};

/// Strips everything that is not a digit, `.` or `-`, then parses as f64.
/// Anything unparseable after stripping degrades to 0.0.
pub fn parse_lenient_number(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    match cleaned.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

pub fn resolve_value(row: &RawRow, mapping: &ColumnMapping, headers: &[String]) -> f64 {
    direct_sales_amount(row, mapping)
        .or_else(|| mapped_quantity_times_price(row, mapping))
        .or_else(|| redetected_quantity_times_price(row, headers))
        .unwrap_or(0.0)
}

/// Strategy 1: a mapped sales-amount column with a non-empty cell.
fn direct_sales_amount(row: &RawRow, mapping: &ColumnMapping) -> Option<f64> {
    let col = mapping.sales_amount.as_deref()?;
    let raw = row.get(col).filter(|v| !v.is_empty())?;
    Some(parse_lenient_number(raw))
}

/// Strategy 2: quantity × unit price from the primary mapping.
fn mapped_quantity_times_price(row: &RawRow, mapping: &ColumnMapping) -> Option<f64> {
    multiply_columns(row, mapping.quantity.as_deref()?, mapping.unit_price.as_deref()?)
}

/// Strategy 3: a second detection pass over the full header list with the
/// same quantity/unit-price pattern sets. Catches datasets where the
/// primary mapping missed one of the pair.
fn redetected_quantity_times_price(row: &RawRow, headers: &[String]) -> Option<f64> {
    let qty_col = detect_column(headers, QUANTITY_PATTERNS)?;
    let price_col = detect_column(headers, UNIT_PRICE_PATTERNS)?;
    multiply_columns(row, qty_col, price_col)
}

fn multiply_columns(row: &RawRow, qty_col: &str, price_col: &str) -> Option<f64> {
    let qty = row.get(qty_col).filter(|v| !v.is_empty())?;
    let price = row.get(price_col).filter(|v| !v.is_empty())?;
    Some(parse_lenient_number(qty) * parse_lenient_number(price))
}

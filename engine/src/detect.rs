//! Column detection: matches dataset headers to semantic roles via
//! prioritized case-insensitive substring patterns. Detection runs once per
//! dataset, against the header list of row 1, and the resulting
//! `ColumnMapping` is threaded into the row-level resolvers.

use crate::error::EngineError;

/// Patterns for the date column, in priority order. The date column is the
/// only mandatory one.
pub const DATE_PATTERNS: &[&str] = &[
    "date",
    "orderdate",
    "order_date",
    "order date",
    "invoice",
    "shipdate",
    "sale_date",
    "salesdate",
];

pub const SALES_PATTERNS: &[&str] = &["sales", "amount", "total", "price", "revenue"];

pub const QUANTITY_PATTERNS: &[&str] = &["quantity", "qty", "units"];

pub const UNIT_PRICE_PATTERNS: &[&str] = &["unitprice", "unit price", "price", "unit_price"];

/// Returns the first header containing the current pattern, scanning
/// patterns in priority order. An earlier pattern always beats a later one,
/// even when the later pattern would match a header appearing earlier in
/// the file.
pub fn detect_column<'a>(headers: &'a [String], patterns: &[&str]) -> Option<&'a str> {
    let lower: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
    for pattern in patterns {
        if let Some(idx) = lower.iter().position(|h| h.contains(*pattern)) {
            return Some(&headers[idx]);
        }
    }
    None
}

/// The semantic columns resolved for one dataset. Only `date` is required;
/// the value resolver treats the rest as best-effort.
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    pub date: String,
    pub sales_amount: Option<String>,
    pub quantity: Option<String>,
    pub unit_price: Option<String>,
}

impl ColumnMapping {
    pub fn detect(headers: &[String]) -> Result<Self, EngineError> {
        let date = detect_column(headers, DATE_PATTERNS)
            .ok_or_else(|| EngineError::NoDateColumn {
                headers: headers.to_vec(),
            })?
            .to_string();

        let mapping = ColumnMapping {
            date,
            sales_amount: detect_column(headers, SALES_PATTERNS).map(str::to_string),
            quantity: detect_column(headers, QUANTITY_PATTERNS).map(str::to_string),
            unit_price: detect_column(headers, UNIT_PRICE_PATTERNS).map(str::to_string),
        };
        tracing::debug!(
            date = %mapping.date,
            sales = ?mapping.sales_amount,
            quantity = ?mapping.quantity,
            unit_price = ?mapping.unit_price,
            "Detected column mapping"
        );
        Ok(mapping)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detect_is_case_insensitive_substring() {
        let h = headers(&["OrderDate", "TotalRevenue"]);
        assert_eq!(detect_column(&h, DATE_PATTERNS), Some("OrderDate"));
        assert_eq!(detect_column(&h, SALES_PATTERNS), Some("TotalRevenue"));
    }

    #[test]
    fn test_earlier_pattern_beats_earlier_header() {
        // "sales" precedes "revenue" in the pattern list, so "Sales" wins
        // even though "Revenue" also matches a (later) pattern.
        let h = headers(&["Order Date", "Sales", "Revenue"]);
        assert_eq!(detect_column(&h, SALES_PATTERNS), Some("Sales"));
    }

    #[test]
    fn test_first_header_wins_within_one_pattern() {
        let h = headers(&["Gross Sales", "Net Sales"]);
        assert_eq!(detect_column(&h, SALES_PATTERNS), Some("Gross Sales"));
    }

    #[test]
    fn test_no_match_returns_none() {
        let h = headers(&["ID", "Region"]);
        assert_eq!(detect_column(&h, SALES_PATTERNS), None);
    }

    #[test]
    fn test_mapping_requires_a_date_column() {
        let h = headers(&["ID", "Amount"]);
        let err = ColumnMapping::detect(&h).unwrap_err();
        match err {
            EngineError::NoDateColumn { headers } => {
                assert_eq!(headers, vec!["ID".to_string(), "Amount".to_string()]);
            }
            other => panic!("expected NoDateColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_mapping_marks_missing_optional_columns() {
        let h = headers(&["Ship Date", "Region"]);
        let mapping = ColumnMapping::detect(&h).unwrap();
        assert_eq!(mapping.date, "Ship Date");
        assert!(mapping.sales_amount.is_none());
        assert!(mapping.quantity.is_none());
        assert!(mapping.unit_price.is_none());
    }

    #[test]
    fn test_invoice_header_counts_as_date() {
        let h = headers(&["InvoiceNo", "Amount"]);
        let mapping = ColumnMapping::detect(&h).unwrap();
        assert_eq!(mapping.date, "InvoiceNo");
    }
}

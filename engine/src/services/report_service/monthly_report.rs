// Handlers for the monthly report and its single-year filter.
use shared::models::YearSales;

use crate::data::sales_store::SalesDataStore;
use crate::detect::ColumnMapping;
use crate::error::EngineError;
use crate::report::aggregate::{accumulate, resolve_rows};
use crate::report::format::{filter_by_year, format_report};

pub fn handle_monthly_report(store: &SalesDataStore) -> Result<Vec<YearSales>, EngineError> {
    let dataset = store.dataset().ok_or(EngineError::EmptyDataset)?;

    // Detection runs once, against the dataset's header universe; every
    // row-level resolver works off this one mapping.
    let mapping = ColumnMapping::detect(&dataset.headers)?;
    let resolved = resolve_rows(dataset, &mapping);
    let report = format_report(&accumulate(&resolved));

    tracing::info!(years = report.len(), rows = resolved.len(), "Monthly report built");
    Ok(report)
}

pub fn handle_year_report(store: &SalesDataStore, year: i32) -> Result<YearSales, EngineError> {
    let report = handle_monthly_report(store)?;
    filter_by_year(&report, year)
}

// Service facade the transport layer calls into. Each operation logs the
// request and dispatches to its handler submodule.
use shared::models::{YearSales, YearTotal};

use crate::data::sales_store::SalesDataStore;
use crate::error::EngineError;

pub mod load_dataset;
pub mod monthly_report;
pub mod yearly_totals;

pub struct ReportService {
    store: SalesDataStore,
}

impl ReportService {
    pub fn new(store: SalesDataStore) -> Self {
        ReportService { store }
    }

    /// Reads the CSV at `path` into the store. Returns the row count.
    pub fn load_dataset(&mut self, path: &str) -> Result<usize, EngineError> {
        tracing::info!(path = %path, "Received load dataset request");
        load_dataset::handle_load_dataset(path, &mut self.store)
    }

    /// Full monthly report over the loaded dataset, latest year first.
    pub fn monthly_report(&self) -> Result<Vec<YearSales>, EngineError> {
        tracing::info!("Received monthly report request");
        monthly_report::handle_monthly_report(&self.store)
    }

    /// Monthly report narrowed to one calendar year.
    pub fn monthly_report_for_year(&self, year: i32) -> Result<YearSales, EngineError> {
        tracing::info!(year, "Received single-year report request");
        monthly_report::handle_year_report(&self.store, year)
    }

    /// Per-year totals over a fixed-schema CSV, independent of the
    /// column-detection pipeline and of the store.
    pub fn yearly_totals(&self, path: &str) -> Result<Vec<YearTotal>, EngineError> {
        tracing::info!(path = %path, "Received yearly totals request");
        yearly_totals::handle_yearly_totals(path)
    }
}

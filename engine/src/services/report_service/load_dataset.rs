// Handler for the load-dataset operation.
use crate::data::loader;
use crate::data::sales_store::SalesDataStore;
use crate::error::EngineError;

pub fn handle_load_dataset(path: &str, store: &mut SalesDataStore) -> Result<usize, EngineError> {
    let dataset = loader::load_dataset(path)?;
    if dataset.is_empty() {
        return Err(EngineError::EmptyDataset);
    }

    let rows = dataset.rows.len();
    store.set_dataset(dataset);
    tracing::info!(rows, "Dataset stored");
    Ok(rows)
}

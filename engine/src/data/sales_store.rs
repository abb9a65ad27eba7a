// Holds the dataset loaded for the current invocation. Reports are pure
// functions of this state; nothing here mutates after loading.
use crate::data::loader::SalesDataset;

pub struct SalesDataStore {
    dataset: Option<SalesDataset>,
}

impl SalesDataStore {
    pub fn new() -> Self {
        SalesDataStore { dataset: None }
    }

    pub fn set_dataset(&mut self, dataset: SalesDataset) {
        self.dataset = Some(dataset);
    }

    pub fn dataset(&self) -> Option<&SalesDataset> {
        self.dataset.as_ref()
    }
}

impl Default for SalesDataStore {
    fn default() -> Self {
        Self::new()
    }
}

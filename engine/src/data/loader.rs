use std::fs::File;
use std::io::{BufReader, ErrorKind, Read};

use csv::ReaderBuilder;
use shared::models::SalesRecord;

use crate::error::EngineError;

/// One CSV record as an ordered header-name → raw-string mapping. Values
/// are kept untouched; all numeric and date coercion happens later, at the
/// resolver boundaries.
#[derive(Debug, Clone)]
pub struct RawRow {
    fields: Vec<(String, String)>,
}

impl RawRow {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        RawRow { fields }
    }

    pub fn get(&self, header: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == header)
            .map(|(_, value)| value.as_str())
    }
}

/// A fully loaded dataset. The header list comes from row 1 and defines the
/// column universe for every row; it is never re-derived per row.
#[derive(Debug, Clone)]
pub struct SalesDataset {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

impl SalesDataset {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Loads the whole CSV into memory as string rows, header order preserved.
pub fn load_dataset(file_path: &str) -> Result<SalesDataset, EngineError> {
    let file = open_csv(file_path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(BufReader::new(file));

    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| {
            tracing::warn!(line = idx + 2, error = %e, "Unreadable CSV record");
            e
        })?;
        let fields = headers
            .iter()
            .zip(record.iter())
            .map(|(name, value)| (name.clone(), value.to_string()))
            .collect();
        rows.push(RawRow::new(fields));
    }

    tracing::info!(path = %file_path, rows = rows.len(), columns = headers.len(), "Loaded sales dataset");
    Ok(SalesDataset { headers, rows })
}

/// Typed reader for the fixed well-known schema, used by the yearly totals
/// view only. Column detection plays no part here.
pub fn load_sales_records(file_path: &str) -> Result<Vec<SalesRecord>, EngineError> {
    let file = open_csv(file_path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(BufReader::new(file));

    let mut records = Vec::new();
    for result in rdr.deserialize() {
        let record: SalesRecord = result?;
        records.push(record);
    }

    tracing::info!(path = %file_path, rows = records.len(), "Loaded typed sales records");
    Ok(records)
}

fn open_csv(file_path: &str) -> Result<impl Read, EngineError> {
    File::open(file_path).map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            EngineError::FileNotFound {
                path: file_path.to_string(),
            }
        } else {
            EngineError::from(e)
        }
    })
}

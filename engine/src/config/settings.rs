// Engine settings, loaded from environment variables with sane defaults.
use serde::Deserialize;

use crate::error::EngineError;

#[derive(Debug, Deserialize, Clone)]
pub struct EngineSettings {
    /// Path of the sales CSV handed to the pipeline.
    pub csv_path: String,
    /// Optional single-year filter applied to the monthly report.
    pub filter_year: Option<i32>,
}

impl Default for EngineSettings {
    fn default() -> Self {
        EngineSettings {
            csv_path: "data/sales_dataset.csv".to_string(),
            filter_year: None,
        }
    }
}

impl EngineSettings {
    pub fn from_env() -> Result<Self, EngineError> {
        let mut settings = EngineSettings::default();
        if let Ok(path) = std::env::var("SALES_CSV_PATH") {
            settings.csv_path = path;
        }
        if let Ok(year) = std::env::var("SALES_FILTER_YEAR") {
            let parsed = year.parse::<i32>().map_err(|_| {
                EngineError::ConfigError(format!("SALES_FILTER_YEAR is not a year: '{}'", year))
            })?;
            settings.filter_year = Some(parsed);
        }
        Ok(settings)
    }
}

// Engine entry point: loads the configured CSV, builds the report, and
// writes JSON to stdout. The structured error payload goes to stdout too,
// so a transport wrapper can relay either shape unchanged.
use engine::config::settings::EngineSettings;
use engine::data::sales_store::SalesDataStore;
use engine::error::{EngineError, ErrorPayload};
use engine::services::ReportService;
use tracing::info;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting sales insight engine...");
    let settings = EngineSettings::from_env()?;
    info!(csv_path = %settings.csv_path, filter_year = ?settings.filter_year, "Settings loaded");

    let mut service = ReportService::new(SalesDataStore::new());
    match run(&settings, &mut service) {
        Ok(json) => {
            println!("{}", json);
            Ok(())
        }
        Err(err) => {
            println!("{}", serde_json::to_string(&ErrorPayload::from(&err))?);
            std::process::exit(if err.is_not_found() { 2 } else { 1 });
        }
    }
}

fn run(settings: &EngineSettings, service: &mut ReportService) -> Result<String, EngineError> {
    service.load_dataset(&settings.csv_path)?;
    let json = match settings.filter_year {
        Some(year) => serde_json::to_string_pretty(&service.monthly_report_for_year(year)?),
        None => serde_json::to_string_pretty(&service.monthly_report()?),
    };
    json.map_err(|e| EngineError::ProcessingError(format!("Failed to serialize report: {}", e)))
}

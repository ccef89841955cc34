use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use talent_insights::analytics::{TimePeriod, VendorColumn};
use talent_insights::config::AnalyticsConfig;
use talent_insights::dataset::{Dataset, VendorCsvImporter};
use talent_insights::error::AppError;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) dataset: Arc<Dataset>,
}

/// Seeded dataset, with vendors replaced by the configured CSV export when one is set.
pub(crate) fn load_dataset(config: &AnalyticsConfig) -> Result<Dataset, AppError> {
    let dataset = Dataset::seed();
    let Some(path) = config.vendor_csv.as_deref() else {
        return Ok(dataset);
    };

    let vendors = VendorCsvImporter::from_path(path)?;
    info!(path = %path.display(), vendors = vendors.len(), "loaded vendor export");
    Ok(dataset.with_vendors(vendors))
}

pub(crate) fn parse_period(raw: &str) -> Result<TimePeriod, String> {
    TimePeriod::from_key(raw.trim()).ok_or_else(|| {
        let keys: Vec<&str> = TimePeriod::ordered().iter().map(|period| period.key()).collect();
        format!("unknown period '{raw}', expected one of {}", keys.join(", "))
    })
}

pub(crate) fn parse_vendor_column(raw: &str) -> Result<VendorColumn, String> {
    let normalized = raw.trim().replace('-', "_").to_ascii_lowercase();
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|_| format!("unknown vendor column '{raw}'"))
}

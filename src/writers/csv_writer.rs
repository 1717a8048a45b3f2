use crate::error::Result;
use crate::models::{AqiStatus, Dataset};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Output row: the input columns plus the derived status. Absent optional
/// values are written as empty cells.
#[derive(Debug, Serialize)]
struct ClassifiedRow<'a> {
    country: &'a str,
    location_name: Option<&'a str>,
    last_updated: Option<&'a str>,
    condition_text: &'a str,
    temperature_celsius: f64,
    humidity: f64,
    #[serde(rename = "air_quality_PM2.5")]
    pm25: f64,
    #[serde(rename = "air_quality_Carbon_Monoxide")]
    carbon_monoxide: f64,
    aqi_status: AqiStatus,
}

#[derive(Debug, Default)]
pub struct WeatherWriter;

impl WeatherWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write the classified table as CSV, creating parent directories.
    pub fn write_classified(&self, dataset: &Dataset, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut writer = csv::Writer::from_path(path)?;

        for record in dataset {
            writer.serialize(ClassifiedRow {
                country: &record.country,
                location_name: record.location_name.as_deref(),
                last_updated: record.last_updated.as_deref(),
                condition_text: &record.condition_text,
                temperature_celsius: record.temperature_celsius,
                humidity: record.humidity,
                pm25: record.pm25,
                carbon_monoxide: record.carbon_monoxide,
                aqi_status: record.aqi_status,
            })?;
        }
        writer.flush()?;

        info!(path = %path.display(), records = dataset.len(), "Wrote classified dataset");
        Ok(())
    }
}

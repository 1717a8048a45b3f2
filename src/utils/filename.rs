use chrono::{Datelike, Local};
use std::path::PathBuf;

use crate::utils::constants::DEFAULT_OUTPUT_DIR;

/// Generate default dashboard filename with format: weather-dashboard-{YYMMDD}.html
pub fn generate_default_dashboard_filename() -> PathBuf {
    dated_filename("weather-dashboard", "html")
}

/// Generate default classified CSV filename with format: weather-classified-{YYMMDD}.csv
pub fn generate_default_classified_filename() -> PathBuf {
    dated_filename("weather-classified", "csv")
}

fn dated_filename(stem: &str, extension: &str) -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year

    let filename = format!(
        "{}-{:02}{:02}{:02}.{}",
        stem,
        year,
        now.month(),
        now.day(),
        extension
    );
    PathBuf::from(DEFAULT_OUTPUT_DIR).join(filename)
}

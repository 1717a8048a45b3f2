use crate::error::DataLoadError;
use crate::models::aqi::{classify_aqi, AqiStatus};
use crate::models::weather::RawWeatherRow;
use crate::models::{Dataset, WeatherRecord};
use crate::utils::constants::{COL_AQI_STATUS, REQUIRED_COLUMNS};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

pub struct WeatherReader {
    delimiter: u8,
}

impl WeatherReader {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Read and classify the weather repository CSV at `path`.
    pub fn read_dataset(&self, path: &Path) -> Result<Dataset, DataLoadError> {
        let bytes = fs::read(path)?;
        let dataset = self.read_bytes(&bytes)?.with_source(path);

        info!(
            path = %path.display(),
            records = dataset.len(),
            status_derived = dataset.status_derived(),
            "Loaded weather dataset"
        );
        Ok(dataset)
    }

    /// Parse an in-memory CSV document. A leading byte-order mark is dropped.
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<Dataset, DataLoadError> {
        let (text, encoding, had_errors) = encoding_rs::UTF_8.decode(bytes);
        if had_errors {
            warn!(encoding = encoding.name(), "Input contained malformed byte sequences");
        }

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(csv::Trim::Headers)
            .from_reader(text.as_bytes());

        let headers = reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(DataLoadError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }
        let has_status_column = headers.iter().any(|h| h == COL_AQI_STATUS);
        debug!(
            columns = headers.len(),
            has_status_column, "Validated CSV header"
        );

        let mut records = Vec::new();
        for row in reader.deserialize::<RawWeatherRow>() {
            records.push(Self::normalise_row(row?)?);
        }

        Ok(Dataset::from_records(records).with_status_derived(!has_status_column))
    }

    /// Lowercase the condition and keep an existing status; blank cells are classified.
    fn normalise_row(row: RawWeatherRow) -> Result<WeatherRecord, DataLoadError> {
        let aqi_status = match row.aqi_status.as_deref().map(str::trim) {
            Some(label) if !label.is_empty() => {
                AqiStatus::parse(label).ok_or_else(|| DataLoadError::InvalidStatus(label.to_string()))?
            }
            _ => classify_aqi(row.pm25),
        };

        Ok(WeatherRecord {
            country: row.country,
            location_name: row.location_name,
            last_updated: row.last_updated,
            condition_text: row.condition_text.to_lowercase(),
            temperature_celsius: row.temperature_celsius,
            humidity: row.humidity,
            pm25: row.pm25,
            carbon_monoxide: row.carbon_monoxide,
            aqi_status,
        })
    }
}

impl Default for WeatherReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "country,location_name,last_updated,condition_text,temperature_celsius,humidity,air_quality_Carbon_Monoxide,air_quality_PM2.5";

    #[test]
    fn test_read_dataset_normalises_and_classifies() -> Result<(), DataLoadError> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "{}", HEADER)?;
        writeln!(temp_file, "Egypt,Cairo,2024-05-16 13:00,Sunny,31.2,28,520.5,49.9")?;
        writeln!(temp_file, "India,New Delhi,2024-05-16 13:00,Partly Cloudy,38.0,20,1201.0,160.3")?;

        let reader = WeatherReader::new();
        let dataset = reader.read_dataset(temp_file.path())?;

        assert_eq!(dataset.len(), 2);
        assert!(dataset.status_derived());
        assert_eq!(dataset.source(), Some(temp_file.path()));

        let records = dataset.records();
        assert_eq!(records[0].condition_text, "sunny");
        assert_eq!(records[0].aqi_status, AqiStatus::Good);
        assert_eq!(records[0].location_name.as_deref(), Some("Cairo"));
        assert_eq!(records[1].condition_text, "partly cloudy");
        assert_eq!(records[1].aqi_status, AqiStatus::Unhealthy);
        assert!((records[1].carbon_monoxide - 1201.0).abs() < f64::EPSILON);

        Ok(())
    }

    #[test]
    fn test_missing_column_is_reported_by_name() {
        let csv = "country,condition_text,temperature_celsius,humidity,air_quality_PM2.5\nX,clear,20,50,40\n";
        let err = WeatherReader::new().read_bytes(csv.as_bytes()).unwrap_err();

        match err {
            DataLoadError::MissingColumn { column } => {
                assert_eq!(column, "air_quality_Carbon_Monoxide")
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = WeatherReader::new()
            .read_dataset(Path::new("definitely/not/here/GlobalWeatherRepository.csv"))
            .unwrap_err();
        assert!(matches!(err, DataLoadError::Io(_)));
    }

    #[test]
    fn test_unparseable_number_is_csv_error() {
        let csv = "country,condition_text,temperature_celsius,humidity,air_quality_PM2.5,air_quality_Carbon_Monoxide\nX,clear,warm,50,40,300\n";
        let err = WeatherReader::new().read_bytes(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::Csv(_)));
    }

    #[test]
    fn test_byte_order_mark_is_ignored() -> Result<(), DataLoadError> {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(
            b"country,condition_text,temperature_celsius,humidity,air_quality_PM2.5,air_quality_Carbon_Monoxide\nX,Clear,20,50,40,300\n",
        );

        let dataset = WeatherReader::new().read_bytes(&bytes)?;
        assert_eq!(dataset.records()[0].country, "X");
        Ok(())
    }

    #[test]
    fn test_existing_status_column_is_kept() -> Result<(), DataLoadError> {
        let csv = "country,condition_text,temperature_celsius,humidity,air_quality_PM2.5,air_quality_Carbon_Monoxide,aqi_status\n\
                   X,clear,20,50,40,300,Unhealthy\n\
                   Y,rain,21,60,120,310,\n";

        let dataset = WeatherReader::new().read_bytes(csv.as_bytes())?;

        assert!(!dataset.status_derived());
        assert_eq!(dataset.records()[0].aqi_status, AqiStatus::Unhealthy);
        assert_eq!(
            dataset.records()[1].aqi_status,
            AqiStatus::UnhealthyForSensitiveGroups
        );
        Ok(())
    }

    #[test]
    fn test_unknown_status_label_is_rejected() {
        let csv = "country,condition_text,temperature_celsius,humidity,air_quality_PM2.5,air_quality_Carbon_Monoxide,aqi_status\n\
                   X,clear,20,50,40,300,Terrible\n";
        let err = WeatherReader::new().read_bytes(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, DataLoadError::InvalidStatus(ref s) if s == "Terrible"));
    }

    #[test]
    fn test_semicolon_delimiter() -> Result<(), DataLoadError> {
        let csv = "country;condition_text;temperature_celsius;humidity;air_quality_PM2.5;air_quality_Carbon_Monoxide\nX;Mist;12.5;90;75;410\n";
        let dataset = WeatherReader::with_delimiter(b';').read_bytes(csv.as_bytes())?;

        assert_eq!(dataset.records()[0].condition_text, "mist");
        assert_eq!(dataset.records()[0].aqi_status, AqiStatus::Moderate);
        Ok(())
    }
}

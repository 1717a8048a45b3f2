use crate::models::{Dataset, WeatherRecord};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Serialize)]
pub struct DatasetSummary {
    pub total_records: usize,
    pub unique_countries: usize,
    pub unique_conditions: usize,
    pub temperature_stats: TemperatureStats,
    pub mean_pm25: f64,
    pub last_updated_range: Option<(String, String)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemperatureStats {
    pub min_temp: f64,
    pub max_temp: f64,
    pub avg_temp: f64,
    pub min_temp_location: String,
    pub max_temp_location: String,
}

fn describe_location(record: &WeatherRecord) -> String {
    match &record.location_name {
        Some(name) if !name.is_empty() => format!("{}, {}", name, record.country),
        _ => record.country.clone(),
    }
}

impl DatasetSummary {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let mut countries = HashSet::new();
        let mut conditions = HashSet::new();
        let mut min_temp = f64::INFINITY;
        let mut max_temp = f64::NEG_INFINITY;
        let mut min_temp_location = String::new();
        let mut max_temp_location = String::new();
        let mut temp_sum = 0.0;
        let mut temp_count = 0usize;
        let mut pm25_sum = 0.0;
        let mut first_update: Option<&str> = None;
        let mut last_update: Option<&str> = None;

        for record in dataset {
            countries.insert(record.country.as_str());
            conditions.insert(record.condition_text.as_str());

            if record.temperature_celsius.is_finite() {
                if record.temperature_celsius < min_temp {
                    min_temp = record.temperature_celsius;
                    min_temp_location = describe_location(record);
                }
                if record.temperature_celsius > max_temp {
                    max_temp = record.temperature_celsius;
                    max_temp_location = describe_location(record);
                }
                temp_sum += record.temperature_celsius;
                temp_count += 1;
            }

            pm25_sum += record.pm25;

            if let Some(updated) = record.last_updated.as_deref().filter(|s| !s.is_empty()) {
                if first_update.map_or(true, |first| updated < first) {
                    first_update = Some(updated);
                }
                if last_update.map_or(true, |last| updated > last) {
                    last_update = Some(updated);
                }
            }
        }

        // No finite temperatures at all
        if temp_count == 0 {
            min_temp = f64::NAN;
            max_temp = f64::NAN;
            min_temp_location = "No valid measurements".to_string();
            max_temp_location = "No valid measurements".to_string();
        }

        let avg_temp = if temp_count > 0 {
            temp_sum / temp_count as f64
        } else {
            f64::NAN
        };

        let mean_pm25 = if dataset.is_empty() {
            f64::NAN
        } else {
            pm25_sum / dataset.len() as f64
        };

        Self {
            total_records: dataset.len(),
            unique_countries: countries.len(),
            unique_conditions: conditions.len(),
            temperature_stats: TemperatureStats {
                min_temp,
                max_temp,
                avg_temp,
                min_temp_location,
                max_temp_location,
            },
            mean_pm25,
            last_updated_range: first_update
                .zip(last_update)
                .map(|(first, last)| (first.to_string(), last.to_string())),
        }
    }

    /// One-line caption for the dashboard header.
    pub fn caption(&self) -> String {
        let mut caption = format!(
            "{} observations from {} countries",
            self.total_records, self.unique_countries
        );
        if let Some((first, last)) = &self.last_updated_range {
            caption.push_str(&format!(", updated {} to {}", first, last));
        }
        caption
    }

    pub fn summary(&self) -> String {
        let temp_range = if self.temperature_stats.min_temp.is_nan()
            || self.temperature_stats.max_temp.is_nan()
        {
            "No valid measurements".to_string()
        } else {
            format!(
                "{:.1}°C to {:.1}°C",
                self.temperature_stats.min_temp, self.temperature_stats.max_temp
            )
        };

        let pm25 = if self.mean_pm25.is_nan() {
            "No valid measurements".to_string()
        } else {
            format!("{:.1} µg/m³", self.mean_pm25)
        };

        format!(
            "Records: {} total\n\
            Countries: {}\n\
            Weather Conditions: {}\n\
            Temperature Range: {}\n\
            Mean PM2.5: {}",
            self.total_records,
            self.unique_countries,
            self.unique_conditions,
            temp_range,
            pm25
        )
    }

    pub fn detailed_summary(&self) -> String {
        let coldest = if self.temperature_stats.min_temp.is_nan() {
            "No valid measurements".to_string()
        } else {
            format!(
                "{:.1}°C at {}",
                self.temperature_stats.min_temp, self.temperature_stats.min_temp_location
            )
        };

        let hottest = if self.temperature_stats.max_temp.is_nan() {
            "No valid measurements".to_string()
        } else {
            format!(
                "{:.1}°C at {}",
                self.temperature_stats.max_temp, self.temperature_stats.max_temp_location
            )
        };

        let average = if self.temperature_stats.avg_temp.is_nan() {
            "No valid measurements".to_string()
        } else {
            format!("{:.1}°C", self.temperature_stats.avg_temp)
        };

        let updated = match &self.last_updated_range {
            Some((first, last)) => format!("{} to {}", first, last),
            None => "Not recorded".to_string(),
        };

        format!(
            "{}\n\n\
            Extreme Temperatures:\n\
            - Coldest: {}\n\
            - Hottest: {}\n\
            - Average: {}\n\n\
            Last Updated: {}",
            self.summary(),
            coldest,
            hottest,
            average,
            updated
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_tracks_extremes_and_updates() {
        let dataset = Dataset::from_records(vec![
            WeatherRecord::builder()
                .country("Egypt")
                .location_name("Cairo")
                .last_updated("2024-05-16 13:00")
                .condition("Sunny")
                .temperature(36.5)
                .pm25(60.0)
                .build(),
            WeatherRecord::builder()
                .country("Norway")
                .last_updated("2024-05-16 09:15")
                .condition("Light snow")
                .temperature(-4.0)
                .pm25(8.0)
                .build(),
            WeatherRecord::builder()
                .country("Egypt")
                .condition("sunny")
                .temperature(30.0)
                .pm25(40.0)
                .build(),
        ]);

        let summary = DatasetSummary::from_dataset(&dataset);

        assert_eq!(summary.total_records, 3);
        assert_eq!(summary.unique_countries, 2);
        assert_eq!(summary.unique_conditions, 2);
        assert_eq!(summary.temperature_stats.max_temp_location, "Cairo, Egypt");
        assert_eq!(summary.temperature_stats.min_temp_location, "Norway");
        assert!((summary.mean_pm25 - 36.0).abs() < 1e-12);
        assert_eq!(
            summary.last_updated_range,
            Some(("2024-05-16 09:15".to_string(), "2024-05-16 13:00".to_string()))
        );
        assert!(summary.detailed_summary().contains("Hottest: 36.5°C at Cairo, Egypt"));
        assert!(summary.caption().starts_with("3 observations from 2 countries"));
    }

    #[test]
    fn test_empty_dataset_has_no_measurements() {
        let summary = DatasetSummary::from_dataset(&Dataset::default());

        assert_eq!(summary.total_records, 0);
        assert!(summary.summary().contains("Temperature Range: No valid measurements"));
        assert!(summary.last_updated_range.is_none());
    }
}

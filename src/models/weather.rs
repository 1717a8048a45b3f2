use serde::{Deserialize, Serialize};

use crate::models::aqi::{classify_aqi, AqiStatus};

/// One row of the global weather repository after load-time normalisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub country: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    pub condition_text: String,
    pub temperature_celsius: f64,
    pub humidity: f64,

    #[serde(rename = "air_quality_PM2.5")]
    pub pm25: f64,

    #[serde(rename = "air_quality_Carbon_Monoxide")]
    pub carbon_monoxide: f64,

    pub aqi_status: AqiStatus,
}

impl WeatherRecord {
    /// Build a record from raw readings, lowercasing the condition and
    /// deriving the AQI tier.
    pub fn new(
        country: String,
        condition_text: &str,
        temperature_celsius: f64,
        humidity: f64,
        pm25: f64,
        carbon_monoxide: f64,
    ) -> Self {
        Self {
            country,
            location_name: None,
            last_updated: None,
            condition_text: condition_text.to_lowercase(),
            temperature_celsius,
            humidity,
            pm25,
            carbon_monoxide,
            aqi_status: classify_aqi(pm25),
        }
    }

    pub fn builder() -> WeatherRecordBuilder {
        WeatherRecordBuilder::new()
    }
}

/// Row as it appears in the CSV: `aqi_status` may be absent or blank.
#[derive(Debug, Deserialize)]
pub(crate) struct RawWeatherRow {
    pub country: String,
    #[serde(default)]
    pub location_name: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    pub condition_text: String,
    pub temperature_celsius: f64,
    pub humidity: f64,
    #[serde(rename = "air_quality_PM2.5")]
    pub pm25: f64,
    #[serde(rename = "air_quality_Carbon_Monoxide")]
    pub carbon_monoxide: f64,
    #[serde(default)]
    pub aqi_status: Option<String>,
}

#[derive(Debug, Default)]
pub struct WeatherRecordBuilder {
    country: Option<String>,
    location_name: Option<String>,
    last_updated: Option<String>,
    condition_text: Option<String>,
    temperature_celsius: f64,
    humidity: f64,
    pm25: f64,
    carbon_monoxide: f64,
    aqi_status: Option<AqiStatus>,
}

impl WeatherRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    pub fn location_name(mut self, name: impl Into<String>) -> Self {
        self.location_name = Some(name.into());
        self
    }

    pub fn last_updated(mut self, timestamp: impl Into<String>) -> Self {
        self.last_updated = Some(timestamp.into());
        self
    }

    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition_text = Some(condition.into());
        self
    }

    pub fn temperature(mut self, celsius: f64) -> Self {
        self.temperature_celsius = celsius;
        self
    }

    pub fn humidity(mut self, humidity: f64) -> Self {
        self.humidity = humidity;
        self
    }

    pub fn pm25(mut self, pm25: f64) -> Self {
        self.pm25 = pm25;
        self
    }

    pub fn carbon_monoxide(mut self, co: f64) -> Self {
        self.carbon_monoxide = co;
        self
    }

    /// Pin the tier instead of deriving it from PM2.5.
    pub fn aqi_status(mut self, status: AqiStatus) -> Self {
        self.aqi_status = Some(status);
        self
    }

    pub fn build(self) -> WeatherRecord {
        WeatherRecord {
            country: self.country.unwrap_or_default(),
            location_name: self.location_name,
            last_updated: self.last_updated,
            condition_text: self.condition_text.unwrap_or_default().to_lowercase(),
            temperature_celsius: self.temperature_celsius,
            humidity: self.humidity,
            pm25: self.pm25,
            carbon_monoxide: self.carbon_monoxide,
            aqi_status: self.aqi_status.unwrap_or_else(|| classify_aqi(self.pm25)),
        }
    }
}

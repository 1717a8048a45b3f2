pub mod analyzers;
pub mod charts;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod readers;
pub mod report;
pub mod utils;
pub mod writers;

pub use crate::config::DashboardConfig;
pub use crate::error::{DashboardError, DataLoadError, Result};
pub use crate::models::{classify_aqi, AqiStatus, Dataset, WeatherRecord};
pub use crate::readers::DatasetCache;

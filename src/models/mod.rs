pub mod aqi;
pub mod dataset;
pub mod weather;

pub use aqi::{classify_aqi, AqiStatus};
pub use dataset::Dataset;
pub use weather::{WeatherRecord, WeatherRecordBuilder};

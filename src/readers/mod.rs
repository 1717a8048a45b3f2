pub mod dataset_cache;
pub mod weather_reader;

pub use dataset_cache::DatasetCache;
pub use weather_reader::WeatherReader;

pub mod climate;
pub mod dashboard_data;
pub mod pollution;
pub mod summary;

pub use climate::{temperature_histogram, temperature_humidity_pairs, TemperatureHistogram};
pub use dashboard_data::DashboardData;
pub use pollution::{
    aqi_distribution, co_by_top_conditions, top_countries_by_pm25, AqiShare, BoxStats,
    CoDistribution, ConditionCo, CountryMean,
};
pub use summary::{DatasetSummary, TemperatureStats};

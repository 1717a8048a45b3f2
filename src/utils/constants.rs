/// File names
pub const DEFAULT_INPUT_FILE: &str = "GlobalWeatherRepository.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Column names
pub const COL_COUNTRY: &str = "country";
pub const COL_CONDITION: &str = "condition_text";
pub const COL_TEMPERATURE: &str = "temperature_celsius";
pub const COL_HUMIDITY: &str = "humidity";
pub const COL_PM25: &str = "air_quality_PM2.5";
pub const COL_CARBON_MONOXIDE: &str = "air_quality_Carbon_Monoxide";
pub const COL_AQI_STATUS: &str = "aqi_status";

pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_COUNTRY,
    COL_CONDITION,
    COL_TEMPERATURE,
    COL_HUMIDITY,
    COL_PM25,
    COL_CARBON_MONOXIDE,
];

/// PM2.5 tier upper bounds (inclusive)
pub const AQI_GOOD_MAX: f64 = 50.0;
pub const AQI_MODERATE_MAX: f64 = 100.0;
pub const AQI_SENSITIVE_MAX: f64 = 150.0;
pub const AQI_UNHEALTHY_MAX: f64 = 200.0;

/// Aggregation defaults
pub const DEFAULT_TOP_COUNTRIES: usize = 10;
pub const DEFAULT_TOP_CONDITIONS: usize = 5;
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;
pub const DEFAULT_CO_AXIS_MAX: f64 = 1500.0;
pub const KDE_GRID_POINTS: usize = 200;

/// Chart defaults
pub const DEFAULT_CHART_WIDTH: u32 = 1000;
pub const DEFAULT_CHART_HEIGHT: u32 = 500;
pub const SCATTER_ALPHA: f64 = 0.3;

/// Page text
pub const DEFAULT_TITLE: &str = "Global Weather & Air Quality Dashboard";
pub const DEFAULT_AUTHOR: &str = "Mai Khafaga";
pub const PAGE_TITLE: &str = "Mai's Weather Dashboard";
pub const CONCLUSION: &str =
    "Conclusion: The temperature data follows a normal distribution centered around 20-25°C.";

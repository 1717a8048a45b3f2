use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

/// Failure to produce the classified in-memory table.
#[derive(Error, Debug)]
pub enum DataLoadError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: '{column}'")]
    MissingColumn { column: String },

    #[error("Invalid aqi_status value: '{0}'")]
    InvalidStatus(String),
}

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Error loading data: {0}")]
    Load(#[from] DataLoadError),

    #[error("Chart rendering error: {0}")]
    Render(String),

    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<::config::ConfigError> for DashboardError {
    fn from(err: ::config::ConfigError) -> Self {
        DashboardError::Config(err.to_string())
    }
}

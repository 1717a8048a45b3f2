use crate::error::Result;
use crate::utils::constants::{
    DEFAULT_AUTHOR, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, DEFAULT_CO_AXIS_MAX,
    DEFAULT_HISTOGRAM_BINS, DEFAULT_TITLE, DEFAULT_TOP_COUNTRIES, DEFAULT_TOP_CONDITIONS,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;
use validator::Validate;

/// Presentation and aggregation settings. Every field has a default, so a
/// config file only needs the keys it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DashboardConfig {
    #[validate(length(min = 1))]
    pub title: String,

    pub author: String,

    #[validate(range(min = 1, max = 100))]
    pub top_countries: usize,

    #[validate(range(min = 1, max = 20))]
    pub top_conditions: usize,

    #[validate(range(min = 1, max = 500))]
    pub histogram_bins: usize,

    #[validate(range(min = 1.0))]
    pub co_axis_max: f64,

    #[validate(range(min = 200, max = 4000))]
    pub chart_width: u32,

    #[validate(range(min = 200, max = 4000))]
    pub chart_height: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            top_countries: DEFAULT_TOP_COUNTRIES,
            top_conditions: DEFAULT_TOP_CONDITIONS,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            co_axis_max: DEFAULT_CO_AXIS_MAX,
            chart_width: DEFAULT_CHART_WIDTH,
            chart_height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl DashboardConfig {
    /// Defaults, overlaid with `path` when given (format from its extension).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => {
                let settings = ::config::Config::builder()
                    .add_source(::config::File::from(path))
                    .build()?;
                info!(path = %path.display(), "Loaded dashboard configuration");
                settings.try_deserialize::<DashboardConfig>()?
            }
            None => DashboardConfig::default(),
        };

        config.validate()?;
        Ok(config)
    }
}

use crate::analyzers::DashboardData;
use crate::charts::{
    render_aqi_pie, render_co_boxplot, render_temperature_histogram, render_temperature_humidity,
    render_top_countries, ChartSize,
};
use crate::config::DashboardConfig;
use crate::error::{DataLoadError, Result};
use crate::readers::DatasetCache;
use crate::report::html::{render_dashboard_page, render_error_page, ChartSection};
use crate::utils::constants::CONCLUSION;
use std::path::Path;
use tracing::{error, info};

/// Outcome of building the page: either every view, or the load error page.
#[derive(Debug)]
pub enum DashboardPage {
    Rendered {
        html: String,
        data: Box<DashboardData>,
    },
    LoadFailed {
        html: String,
        error: DataLoadError,
    },
}

impl DashboardPage {
    pub fn html(&self) -> &str {
        match self {
            DashboardPage::Rendered { html, .. } | DashboardPage::LoadFailed { html, .. } => html,
        }
    }
}

/// Load the dataset through `cache` and render the full page. A load failure
/// yields the error page; a chart failure aborts the whole page.
pub fn build_dashboard(cache: &DatasetCache, config: &DashboardConfig) -> Result<DashboardPage> {
    let dataset = match cache.get() {
        Ok(dataset) => dataset,
        Err(err) => {
            error!(path = %cache.path().display(), error = %err, "Failed to load dataset");
            let html = render_error_page(
                &config.title,
                &config.author,
                &format!("Error loading data: {}", err),
                &missing_file_hint(cache.path()),
            );
            return Ok(DashboardPage::LoadFailed { html, error: err });
        }
    };

    let data = DashboardData::compute(dataset, config);
    let sections = render_sections(&data, config)?;
    let html = render_dashboard_page(
        &config.title,
        &config.author,
        &data.summary.caption(),
        &sections,
        CONCLUSION,
    );

    info!(sections = sections.len(), bytes = html.len(), "Rendered dashboard");
    Ok(DashboardPage::Rendered {
        html,
        data: Box::new(data),
    })
}

/// The five charts in display order.
pub fn render_sections(data: &DashboardData, config: &DashboardConfig) -> Result<Vec<ChartSection>> {
    let size = ChartSize::new(config.chart_width, config.chart_height);
    let tall = ChartSize::new(config.chart_width, config.chart_height * 6 / 5);
    let square = ChartSize::new(config.chart_height * 8 / 5, config.chart_height * 8 / 5);

    Ok(vec![
        ChartSection {
            heading: format!(
                "1. Top {} Most Polluted Countries (PM2.5)",
                config.top_countries
            ),
            svg: render_top_countries(&data.top_countries, size)?,
        },
        ChartSection {
            heading: "2. Temperature vs Humidity Relation".to_string(),
            svg: render_temperature_humidity(&data.temperature_humidity, size)?,
        },
        ChartSection {
            heading: format!(
                "3. CO Levels across Top {} Weather Conditions",
                config.top_conditions
            ),
            svg: render_co_boxplot(&data.co_by_condition, config.co_axis_max, tall)?,
        },
        ChartSection {
            heading: "4. Global Air Quality (AQI) Percentage".to_string(),
            svg: render_aqi_pie(&data.aqi_distribution, square)?,
        },
        ChartSection {
            heading: "5. Global Temperature Distribution Analysis".to_string(),
            svg: render_temperature_histogram(&data.temperature_histogram, tall)?,
        },
    ])
}

pub fn missing_file_hint(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    format!(
        "Please make sure '{}' is in the same folder as this dashboard is run from.",
        name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_error_page() {
        let dir = tempfile::tempdir().unwrap();
        let cache = DatasetCache::new(dir.path().join("GlobalWeatherRepository.csv"));

        let page = build_dashboard(&cache, &DashboardConfig::default()).unwrap();

        match &page {
            DashboardPage::LoadFailed { error, .. } => assert!(matches!(error, DataLoadError::Io(_))),
            DashboardPage::Rendered { .. } => panic!("expected load failure"),
        }
        assert!(page.html().contains("Error loading data:"));
        assert!(page.html().contains("GlobalWeatherRepository.csv"));
        assert!(!page.html().contains("<svg"));
    }

    #[test]
    fn test_hint_names_file() {
        let hint = missing_file_hint(Path::new("data/GlobalWeatherRepository.csv"));
        assert!(hint.contains("'GlobalWeatherRepository.csv'"));
    }
}

use crate::analyzers::climate::{temperature_histogram, temperature_humidity_pairs, TemperatureHistogram};
use crate::analyzers::pollution::{
    aqi_distribution, co_by_top_conditions, top_countries_by_pm25, AqiShare, CoDistribution,
    CountryMean,
};
use crate::analyzers::summary::DatasetSummary;
use crate::config::DashboardConfig;
use crate::models::Dataset;
use serde::Serialize;
use tracing::info;

/// Every aggregate the dashboard displays, computed in display order.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardData {
    pub summary: DatasetSummary,
    pub top_countries: Vec<CountryMean>,
    #[serde(skip)]
    pub temperature_humidity: Vec<(f64, f64)>,
    pub co_by_condition: CoDistribution,
    pub aqi_distribution: Vec<AqiShare>,
    pub temperature_histogram: TemperatureHistogram,
}

impl DashboardData {
    pub fn compute(dataset: &Dataset, config: &DashboardConfig) -> Self {
        let summary = DatasetSummary::from_dataset(dataset);
        let top_countries = top_countries_by_pm25(dataset, config.top_countries);
        let temperature_humidity = temperature_humidity_pairs(dataset);
        let co_by_condition = co_by_top_conditions(dataset, config.top_conditions);
        let aqi_distribution = aqi_distribution(dataset);
        let temperature_histogram = temperature_histogram(dataset, config.histogram_bins);

        info!(
            records = dataset.len(),
            countries = summary.unique_countries,
            "Computed dashboard aggregates"
        );

        Self {
            summary,
            top_countries,
            temperature_humidity,
            co_by_condition,
            aqi_distribution,
            temperature_histogram,
        }
    }

    /// Plain-text rendition of the five views for the terminal.
    pub fn text_report(&self) -> String {
        let mut report = String::new();

        report.push_str("=== Dataset Summary ===\n");
        report.push_str(&self.summary.detailed_summary());

        report.push_str("\n\n=== Top Countries by Mean PM2.5 ===\n");
        for (i, entry) in self.top_countries.iter().enumerate() {
            report.push_str(&format!(
                "  {:>2}. {:<32} {:>8.2} ({} readings)\n",
                i + 1,
                entry.country,
                entry.mean_pm25,
                entry.readings
            ));
        }

        report.push_str(&format!(
            "\n=== Temperature vs Humidity ===\n  {} points\n",
            self.temperature_humidity.len()
        ));

        report.push_str("\n=== CO Levels by Top Weather Conditions ===\n");
        for entry in &self.co_by_condition.per_condition {
            let s = &entry.stats;
            report.push_str(&format!(
                "  {:<24} n={:<6} min={:.1} q1={:.1} median={:.1} q3={:.1} max={:.1}\n",
                entry.condition, s.count, s.min, s.q1, s.median, s.q3, s.max
            ));
        }

        report.push_str("\n=== AQI Status Distribution ===\n");
        for share in &self.aqi_distribution {
            report.push_str(&format!(
                "  {:<32} {:>5.1}% ({})\n",
                share.status.label(),
                share.rounded_percentage(),
                share.count
            ));
        }

        report.push_str("\n=== Temperature Distribution ===\n");
        let hist = &self.temperature_histogram;
        match (hist.range(), hist.bin_width()) {
            (Some((lo, hi)), Some(width)) => report.push_str(&format!(
                "  {} readings in {} bins of {:.2}°C over {:.1}°C to {:.1}°C\n",
                hist.observations,
                hist.counts.len(),
                width,
                lo,
                hi
            )),
            _ => report.push_str("  No valid measurements\n"),
        }

        report
    }
}

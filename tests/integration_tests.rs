use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use weather_dashboard::analyzers::{aqi_distribution, co_by_top_conditions, top_countries_by_pm25};
use weather_dashboard::report::{build_dashboard, DashboardPage};
use weather_dashboard::writers::WeatherWriter;
use weather_dashboard::{AqiStatus, DashboardConfig, DatasetCache};

const HEADER: &str = "country,location_name,last_updated,condition_text,temperature_celsius,humidity,air_quality_Carbon_Monoxide,air_quality_PM2.5";

fn write_csv(dir: &TempDir, rows: &[&str]) -> std::path::PathBuf {
    let path = dir.path().join("GlobalWeatherRepository.csv");
    let mut contents = String::from(HEADER);
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}

#[test]
fn test_three_row_scenario() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_csv(
        &temp_dir,
        &[
            "X,Alpha,2024-05-16 10:00,Clear,20,50,300,40",
            "X,Alpha,2024-05-16 11:00,Clear,25,55,1600,60",
            "Y,Beta,2024-05-16 12:00,Rain,30,60,500,200",
        ],
    );

    let cache = DatasetCache::new(&path);
    let dataset = cache.get().unwrap();

    let statuses: Vec<AqiStatus> = dataset.iter().map(|r| r.aqi_status).collect();
    assert_eq!(
        statuses,
        vec![AqiStatus::Good, AqiStatus::Moderate, AqiStatus::Unhealthy]
    );

    let top: Vec<(String, f64)> = top_countries_by_pm25(dataset, 10)
        .into_iter()
        .map(|c| (c.country, c.mean_pm25))
        .collect();
    assert_eq!(top, vec![("Y".to_string(), 200.0), ("X".to_string(), 50.0)]);

    let distribution = aqi_distribution(dataset);
    assert_eq!(distribution.len(), 3);
    for share in &distribution {
        assert_eq!(share.rounded_percentage(), 33.3);
    }

    let co = co_by_top_conditions(dataset, 5);
    assert_eq!(co.conditions, vec!["clear", "rain"]);
    // 1600 lies above the display axis but still counts
    assert_eq!(co.per_condition[0].stats.max, 1600.0);
}

#[test]
fn test_render_writes_all_five_sections_in_order() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let mut rows = Vec::new();
    let conditions = ["Sunny", "Clear", "Partly cloudy", "Overcast", "Mist", "Fog"];
    for i in 0..60 {
        rows.push(format!(
            "Country {},Town {},2024-05-{:02} 12:00,{},{},{},{},{}",
            i % 12,
            i,
            1 + i % 28,
            conditions[i % conditions.len()],
            5.0 + (i as f64) * 0.5,
            30 + i % 60,
            200.0 + (i as f64) * 25.0,
            (i as f64) * 4.0
        ));
    }
    let row_refs: Vec<&str> = rows.iter().map(String::as_str).collect();
    let path = write_csv(&temp_dir, &row_refs);

    let cache = DatasetCache::new(&path);
    let page = build_dashboard(&cache, &DashboardConfig::default()).unwrap();

    let html = match &page {
        DashboardPage::Rendered { html, data } => {
            assert_eq!(data.top_countries.len(), 10);
            assert_eq!(data.co_by_condition.conditions.len(), 5);
            assert_eq!(data.temperature_humidity.len(), 60);
            assert_eq!(data.temperature_histogram.counts.len(), 30);
            html.clone()
        }
        DashboardPage::LoadFailed { error, .. } => panic!("load failed: {error}"),
    };

    let headings = [
        "1. Top 10 Most Polluted Countries (PM2.5)",
        "2. Temperature vs Humidity Relation",
        "3. CO Levels across Top 5 Weather Conditions",
        "4. Global Air Quality (AQI) Percentage",
        "5. Global Temperature Distribution Analysis",
        "Conclusion: The temperature data follows a normal distribution",
    ];
    let positions: Vec<usize> = headings
        .iter()
        .map(|h| html.find(h).unwrap_or_else(|| panic!("missing {h}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(html.matches("<svg").count(), 5);
    assert!(html.contains("Global Weather &amp; Air Quality Dashboard"));

    // The cache handed out the same table; a second build does not reload.
    assert!(cache.is_loaded());
}

#[test]
fn test_missing_column_aborts_every_view() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("GlobalWeatherRepository.csv");
    fs::write(
        &path,
        "country,condition_text,temperature_celsius,humidity,air_quality_PM2.5\nX,clear,20,50,40\n",
    )
    .unwrap();

    let cache = DatasetCache::new(&path);
    let page = build_dashboard(&cache, &DashboardConfig::default()).unwrap();

    assert!(matches!(page, DashboardPage::LoadFailed { .. }));
    assert!(page.html().contains("air_quality_Carbon_Monoxide"));
    assert!(!page.html().contains("<section>"));
}

#[test]
fn test_classify_then_reload_is_idempotent() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = write_csv(
        &temp_dir,
        &[
            "A,One,2024-05-16 10:00,Sunny,20,50,300,50",
            "B,Two,2024-05-16 10:00,Sunny,21,51,310,50.0001",
            "C,Three,2024-05-16 10:00,Mist,22,52,320,150",
            "D,Four,2024-05-16 10:00,Mist,23,53,330,999",
        ],
    );

    let first = DatasetCache::new(&path);
    let first = first.get().unwrap();

    let classified = temp_dir.path().join("classified.csv");
    WeatherWriter::new().write_classified(first, &classified).unwrap();

    let second = DatasetCache::new(&classified);
    let second = second.get().unwrap();

    assert!(!second.status_derived());
    let before: Vec<AqiStatus> = first.iter().map(|r| r.aqi_status).collect();
    let after: Vec<AqiStatus> = second.iter().map(|r| r.aqi_status).collect();
    assert_eq!(before, after);
    assert_eq!(
        before,
        vec![
            AqiStatus::Good,
            AqiStatus::Moderate,
            AqiStatus::UnhealthyForSensitiveGroups,
            AqiStatus::VeryUnhealthyOrHazardous
        ]
    );
}

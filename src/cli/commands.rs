use crate::analyzers::DashboardData;
use crate::cli::args::{Cli, Commands};
use crate::config::DashboardConfig;
use crate::error::{DashboardError, Result};
use crate::readers::DatasetCache;
use crate::report::{build_dashboard, missing_file_hint, DashboardPage};
use crate::utils::filename::{generate_default_classified_filename, generate_default_dashboard_filename};
use crate::utils::progress::ProgressReporter;
use crate::writers::WeatherWriter;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render {
            input_file,
            output_file,
            config,
        } => {
            let config = DashboardConfig::load(config.as_deref())?;
            let output_file = output_file.unwrap_or_else(generate_default_dashboard_filename);

            println!("Rendering weather dashboard...");
            println!("Input file: {}", input_file.display());
            println!("Output file: {}", output_file.display());

            let progress = ProgressReporter::new_spinner("Loading dataset and rendering charts...", false);
            let cache = DatasetCache::new(&input_file);
            let page = match build_dashboard(&cache, &config) {
                Ok(page) => page,
                Err(err) => {
                    progress.abandon();
                    return Err(err);
                }
            };

            write_page(&output_file, page.html())?;

            match page {
                DashboardPage::Rendered { data, .. } => {
                    progress.finish_with_message(&format!(
                        "Rendered dashboard for {} records",
                        data.summary.total_records
                    ));
                    println!("\n{}", data.summary.summary());
                    println!("Dashboard complete!");
                }
                DashboardPage::LoadFailed { error, .. } => {
                    progress.abandon();
                    warn!(path = %output_file.display(), "Wrote error page");
                    eprintln!("{}", missing_file_hint(&input_file));
                    return Err(DashboardError::Load(error));
                }
            }
        }

        Commands::Summary {
            input_file,
            config,
            json,
        } => {
            let config = DashboardConfig::load(config.as_deref())?;

            let progress = ProgressReporter::new_spinner("Loading dataset...", json);
            let cache = DatasetCache::new(&input_file);
            let dataset = match cache.get() {
                Ok(dataset) => dataset,
                Err(err) => {
                    progress.abandon();
                    eprintln!("{}", missing_file_hint(&input_file));
                    return Err(err.into());
                }
            };
            progress.finish_with_message(&format!("Loaded {} records", dataset.len()));

            let data = DashboardData::compute(dataset, &config);
            if json {
                println!("{}", serde_json::to_string_pretty(&data)?);
            } else {
                println!("\n{}", data.text_report());
            }
        }

        Commands::Classify {
            input_file,
            output_file,
        } => {
            let output_file = output_file.unwrap_or_else(generate_default_classified_filename);

            println!("Classifying air quality...");
            println!("Input file: {}", input_file.display());

            let progress = ProgressReporter::new_spinner("Loading dataset...", false);
            let cache = DatasetCache::new(&input_file);
            let dataset = match cache.get() {
                Ok(dataset) => dataset,
                Err(err) => {
                    progress.abandon();
                    eprintln!("{}", missing_file_hint(&input_file));
                    return Err(err.into());
                }
            };
            if !dataset.status_derived() {
                info!("Input already carries aqi_status; existing values kept");
            }

            progress.set_message("Writing classified dataset...");
            if let Err(err) = WeatherWriter::new().write_classified(dataset, &output_file) {
                progress.abandon();
                return Err(err);
            }
            progress.finish_with_message("Classification complete");
            println!(
                "Wrote {} records to {}",
                dataset.len(),
                output_file.display()
            );
        }
    }

    Ok(())
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    // Create output directory if it doesn't exist
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, html)?;
    info!(path = %path.display(), bytes = html.len(), "Wrote dashboard page");
    Ok(())
}

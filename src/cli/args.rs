use crate::utils::constants::DEFAULT_INPUT_FILE;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "weather-dashboard")]
#[command(about = "Global weather and air quality dashboard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the five-chart dashboard to a single HTML page
    Render {
        #[arg(short, long, default_value = DEFAULT_INPUT_FILE, help = "Input weather repository CSV")]
        input_file: PathBuf,

        #[arg(
            short,
            long,
            help = "Output HTML file path [default: output/weather-dashboard-{YYMMDD}.html]"
        )]
        output_file: Option<PathBuf>,

        #[arg(short, long, help = "TOML/JSON/YAML file overriding dashboard settings")]
        config: Option<PathBuf>,
    },

    /// Print the dataset summary and every aggregate to the terminal
    Summary {
        #[arg(short, long, default_value = DEFAULT_INPUT_FILE, help = "Input weather repository CSV")]
        input_file: PathBuf,

        #[arg(short, long, help = "TOML/JSON/YAML file overriding dashboard settings")]
        config: Option<PathBuf>,

        #[arg(long, help = "Emit the aggregates as JSON")]
        json: bool,
    },

    /// Write the dataset with its derived aqi_status column
    Classify {
        #[arg(short, long, default_value = DEFAULT_INPUT_FILE, help = "Input weather repository CSV")]
        input_file: PathBuf,

        #[arg(
            short,
            long,
            help = "Output CSV file path [default: output/weather-classified-{YYMMDD}.csv]"
        )]
        output_file: Option<PathBuf>,
    },
}

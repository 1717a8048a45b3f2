pub mod constants;
pub mod filename;
pub mod logging;
pub mod progress;

pub use constants::*;
pub use filename::{generate_default_classified_filename, generate_default_dashboard_filename};
pub use logging::init_tracing;
pub use progress::ProgressReporter;

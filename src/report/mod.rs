pub mod dashboard;
pub mod html;

pub use dashboard::{build_dashboard, missing_file_hint, render_sections, DashboardPage};
pub use html::{escape_html, render_dashboard_page, render_error_page, ChartSection};

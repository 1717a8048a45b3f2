//! SVG chart rendering for the five dashboard views.
//!
//! Each renderer draws into an in-memory string with plotters'
//! `SVGBackend` and returns the finished `<svg>` document, ready to be
//! inlined into the HTML page.

pub mod bar;
pub mod boxplot;
pub mod histogram;
pub mod palette;
pub mod pie;
pub mod scatter;

pub use bar::render_top_countries;
pub use boxplot::render_co_boxplot;
pub use histogram::render_temperature_histogram;
pub use pie::render_aqi_pie;
pub use scatter::render_temperature_humidity;

use crate::error::DashboardError;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;

pub(crate) const FONT: &str = "sans-serif";

/// Pixel dimensions of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSize {
    pub width: u32,
    pub height: u32,
}

impl ChartSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub(crate) fn dims(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

pub(crate) fn render_error<E: std::fmt::Display>(err: E) -> DashboardError {
    DashboardError::Render(err.to_string())
}

/// Placeholder for a view with nothing to plot.
pub(crate) fn draw_no_data<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
) -> Result<(), DashboardError> {
    let (width, height) = root.dim_in_pixel();
    root.draw(&Text::new(
        "No data",
        (width as i32 / 2 - 30, height as i32 / 2),
        (FONT, 20).into_font().color(&BLACK),
    ))
    .map_err(render_error)
}

/// Observed range of `values` widened by 5% on each side.
pub(crate) fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (lo, hi) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if !lo.is_finite() {
        return 0.0..1.0;
    }
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    (lo - pad)..(hi + pad)
}

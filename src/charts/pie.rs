use crate::analyzers::AqiShare;
use crate::charts::palette::pinks;
use crate::charts::{draw_no_data, render_error, ChartSize, FONT};
use crate::error::Result;
use plotters::prelude::*;

const START_ANGLE: f64 = 140.0;

/// AQI tiers as pie slices, labelled with their share to one decimal place.
pub fn render_aqi_pie(shares: &[AqiShare], size: ChartSize) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size.dims()).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        if shares.is_empty() {
            draw_no_data(&root)?;
        } else {
            let (width, height) = root.dim_in_pixel();
            let center = (width as i32 / 2, height as i32 / 2);
            let radius = width.min(height) as f64 * 0.3;

            let sizes: Vec<f64> = shares.iter().map(|s| s.percentage).collect();
            let colors = pinks(shares.len());
            let labels: Vec<String> = shares
                .iter()
                .map(|s| format!("{} ({:.1}%)", s.status.label(), s.rounded_percentage()))
                .collect();

            let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
            pie.start_angle(START_ANGLE);
            pie.label_style((FONT, 16).into_font().color(&BLACK));
            root.draw(&pie).map_err(render_error)?;
        }

        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

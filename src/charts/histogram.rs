use crate::analyzers::TemperatureHistogram;
use crate::charts::palette::FOREST_GREEN;
use crate::charts::{draw_no_data, render_error, ChartSize, FONT};
use crate::error::Result;
use plotters::prelude::*;

/// Histogram bars with the density curve drawn over them.
pub fn render_temperature_histogram(hist: &TemperatureHistogram, size: ChartSize) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size.dims()).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        match hist.range() {
            None => draw_no_data(&root)?,
            Some((lo, hi)) => {
                let curve_max = hist.density.iter().map(|p| p.1).fold(0.0, f64::max);
                let y_max = (hist.max_count() as f64).max(curve_max) * 1.1;
                let y_max = if y_max > 0.0 { y_max } else { 1.0 };

                let mut chart = ChartBuilder::on(&root)
                    .margin(20)
                    .x_label_area_size(40)
                    .y_label_area_size(60)
                    .build_cartesian_2d(lo..hi, 0f64..y_max)
                    .map_err(render_error)?;

                chart
                    .configure_mesh()
                    .x_desc("Temperature Celsius")
                    .y_desc("Count")
                    .label_style((FONT, 14))
                    .draw()
                    .map_err(render_error)?;

                let bars: Vec<[(f64, f64); 2]> = hist
                    .counts
                    .iter()
                    .enumerate()
                    .map(|(i, &count)| [(hist.edges[i], 0.0), (hist.edges[i + 1], count as f64)])
                    .collect();

                chart
                    .draw_series(
                        bars.iter()
                            .map(|&corners| Rectangle::new(corners, FOREST_GREEN.mix(0.5).filled())),
                    )
                    .map_err(render_error)?;
                chart
                    .draw_series(
                        bars.iter()
                            .map(|&corners| Rectangle::new(corners, FOREST_GREEN.stroke_width(1))),
                    )
                    .map_err(render_error)?;

                if !hist.density.is_empty() {
                    chart
                        .draw_series(LineSeries::new(
                            hist.density.iter().copied(),
                            FOREST_GREEN.stroke_width(2),
                        ))
                        .map_err(render_error)?;
                }
            }
        }

        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

use crate::charts::palette::PURPLE;
use crate::charts::{draw_no_data, padded_range, render_error, ChartSize, FONT};
use crate::error::Result;
use crate::utils::constants::SCATTER_ALPHA;
use plotters::prelude::*;

pub fn render_temperature_humidity(points: &[(f64, f64)], size: ChartSize) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size.dims()).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        if points.is_empty() {
            draw_no_data(&root)?;
        } else {
            let x_range = padded_range(points.iter().map(|p| p.0));
            let y_range = padded_range(points.iter().map(|p| p.1));

            let mut chart = ChartBuilder::on(&root)
                .margin(20)
                .x_label_area_size(40)
                .y_label_area_size(50)
                .build_cartesian_2d(x_range, y_range)
                .map_err(render_error)?;

            chart
                .configure_mesh()
                .x_desc("temperature_celsius")
                .y_desc("humidity")
                .label_style((FONT, 14))
                .draw()
                .map_err(render_error)?;

            let style = PURPLE.mix(SCATTER_ALPHA).filled();
            chart
                .draw_series(
                    points
                        .iter()
                        .filter(|(t, h)| t.is_finite() && h.is_finite())
                        .map(|&(t, h)| Circle::new((t, h), 3, style)),
                )
                .map_err(render_error)?;
        }

        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

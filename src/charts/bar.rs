use crate::analyzers::CountryMean;
use crate::charts::palette::reds_reversed;
use crate::charts::{draw_no_data, render_error, ChartSize, FONT};
use crate::error::Result;
use plotters::prelude::*;

/// Horizontal bars of mean PM2.5, highest country at the top.
pub fn render_top_countries(countries: &[CountryMean], size: ChartSize) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size.dims()).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        if countries.is_empty() {
            draw_no_data(&root)?;
        } else {
            let rows = countries.len();
            let x_max = countries
                .iter()
                .map(|c| c.mean_pm25)
                .filter(|v| v.is_finite())
                .fold(0.0, f64::max);
            let x_max = if x_max > 0.0 { x_max * 1.1 } else { 1.0 };
            let colors = reds_reversed(rows);

            // Row 0 is drawn at the bottom, so rank r sits on row (rows - 1 - r).
            let row_label = |value: &SegmentValue<i32>| match value {
                SegmentValue::CenterOf(row) if (0..rows as i32).contains(row) => {
                    countries[rows - 1 - *row as usize].country.clone()
                }
                _ => String::new(),
            };

            let mut chart = ChartBuilder::on(&root)
                .margin(20)
                .x_label_area_size(40)
                .y_label_area_size(200)
                .build_cartesian_2d(0f64..x_max, (0..rows as i32).into_segmented())
                .map_err(render_error)?;

            chart
                .configure_mesh()
                .disable_y_mesh()
                .y_labels(rows + 1)
                .y_label_formatter(&row_label)
                .x_desc("Mean PM2.5")
                .label_style((FONT, 14))
                .draw()
                .map_err(render_error)?;

            chart
                .draw_series(countries.iter().enumerate().map(|(rank, entry)| {
                    let row = (rows - 1 - rank) as i32;
                    let mut bar = Rectangle::new(
                        [
                            (0.0, SegmentValue::Exact(row)),
                            (entry.mean_pm25, SegmentValue::Exact(row + 1)),
                        ],
                        colors[rank].filled(),
                    );
                    bar.set_margin(4, 4, 0, 0);
                    bar
                }))
                .map_err(render_error)?;
        }

        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

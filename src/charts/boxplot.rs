use crate::analyzers::CoDistribution;
use crate::charts::palette::copper_reversed;
use crate::charts::{draw_no_data, render_error, ChartSize, FONT};
use crate::error::Result;
use plotters::prelude::*;

/// One box per condition. The y axis is fixed to `[0, axis_max]`; readings
/// beyond it still shape the boxes but are drawn off-scale.
pub fn render_co_boxplot(
    distribution: &CoDistribution,
    axis_max: f64,
    size: ChartSize,
) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size.dims()).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;

        if distribution.conditions.is_empty() {
            draw_no_data(&root)?;
        } else {
            let conditions = &distribution.conditions;
            let colors = copper_reversed(conditions.len());

            let mut chart = ChartBuilder::on(&root)
                .margin(20)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d(conditions[..].into_segmented(), 0f32..axis_max as f32)
                .map_err(render_error)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_desc("condition_text")
                .y_desc("air_quality_Carbon_Monoxide")
                .label_style((FONT, 14))
                .draw()
                .map_err(render_error)?;

            let boxes: Vec<_> = conditions
                .iter()
                .enumerate()
                .filter_map(|(i, condition)| {
                    let values: Vec<f64> = distribution
                        .readings
                        .iter()
                        .filter(|(c, _)| c == condition)
                        .map(|(_, co)| *co)
                        .collect();
                    if values.is_empty() {
                        return None;
                    }
                    let quartiles = Quartiles::new(&values);
                    Some(
                        Boxplot::new_vertical(SegmentValue::CenterOf(condition), &quartiles)
                            .width(40)
                            .whisker_width(0.5)
                            .style(colors[i].stroke_width(2)),
                    )
                })
                .collect();

            chart.draw_series(boxes).map_err(render_error)?;
        }

        root.present().map_err(render_error)?;
    }
    Ok(svg)
}

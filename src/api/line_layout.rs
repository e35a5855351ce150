use tracing::trace;

use crate::core::{Datum, GroupDatum, Point, build_area, build_line};
use crate::error::ChartResult;

use super::series_table::{LayoutScaffold, SeriesTable};
use super::{
    ChartConfig, ChartGeometry, ChartKind, DEFAULT_LINE_COLOR, LinePoint, LineSeriesGeometry,
};

/// Lays out a single-series line chart with one vertex per category center.
pub fn layout_line_chart(data: &[Datum], config: &ChartConfig) -> ChartResult<ChartGeometry> {
    let table = SeriesTable::from_single(data)?;
    layout_lines(ChartKind::Line, &table, config)
}

/// Lays out one line per series, all sharing the category centers.
pub fn layout_grouped_line_chart(
    data: &[GroupDatum],
    config: &ChartConfig,
) -> ChartResult<ChartGeometry> {
    let table = SeriesTable::from_grouped(data, config.series_order.as_deref())?;
    layout_lines(ChartKind::GroupedLine, &table, config)
}

fn layout_lines(
    kind: ChartKind,
    table: &SeriesTable,
    config: &ChartConfig,
) -> ChartResult<ChartGeometry> {
    let scaffold = LayoutScaffold::build(kind, table, config, DEFAULT_LINE_COLOR)?;
    let axis = scaffold.axis;
    let to_screen = |point: Point| axis.to_screen(point.x, point.y);

    let mut lines = Vec::with_capacity(table.series_keys.len());
    if !table.categories.is_empty() {
        for (series_index, series_key) in table.series_keys.iter().enumerate() {
            // Paths are built on (category, value) pixel pairs and swapped to
            // screen x/y afterwards.
            let mut logical = Vec::with_capacity(table.categories.len());
            let mut points = Vec::with_capacity(table.categories.len());
            for (category_index, category) in table.categories.iter().enumerate() {
                let Some(center) = scaffold.categories.center_at(category_index) else {
                    continue;
                };
                let value = table.value(category_index, series_index);
                let value_px = axis.value_position(value.max(0.0));
                logical.push(Point::new(center, value_px));
                points.push(LinePoint {
                    category: category.clone(),
                    value,
                    position: axis.to_screen(center, value_px),
                });
            }

            let line = build_line(&logical).map_points(to_screen);
            let area = config
                .area
                .then(|| build_area(&logical, axis.baseline_position()).map_points(to_screen));
            lines.push(LineSeriesGeometry {
                series_key: table.public_key(series_index),
                color: scaffold.colors.color_of(series_key).to_owned(),
                points,
                line,
                area,
            });
        }
    }

    trace!(series = lines.len(), area = config.area, "laid out lines");
    Ok(scaffold.finish(table, config, Vec::new(), lines))
}

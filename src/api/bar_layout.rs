use tracing::trace;

use crate::core::{Datum, GroupBandLayout, GroupDatum};
use crate::error::ChartResult;

use super::series_table::{LayoutScaffold, SeriesTable};
use super::{BarGeometry, ChartConfig, ChartGeometry, ChartKind, DEFAULT_BAR_COLOR};

/// Lays out a single-series bar chart.
///
/// With `ready == false` every bar collapses onto the baseline, the state a
/// renderer animates from; all other geometry is unaffected.
pub fn layout_bar_chart(
    data: &[Datum],
    config: &ChartConfig,
    ready: bool,
) -> ChartResult<ChartGeometry> {
    let table = SeriesTable::from_single(data)?;
    layout_bars(ChartKind::Bar, &table, config, ready)
}

/// Lays out a grouped bar chart, one bar per category and series.
///
/// Series keys missing from a datum produce a zero-extent bar rather than a
/// gap in the group.
pub fn layout_grouped_bar_chart(
    data: &[GroupDatum],
    config: &ChartConfig,
    ready: bool,
) -> ChartResult<ChartGeometry> {
    let table = SeriesTable::from_grouped(data, config.series_order.as_deref())?;
    layout_bars(ChartKind::GroupedBar, &table, config, ready)
}

fn layout_bars(
    kind: ChartKind,
    table: &SeriesTable,
    config: &ChartConfig,
    ready: bool,
) -> ChartResult<ChartGeometry> {
    let scaffold = LayoutScaffold::build(kind, table, config, DEFAULT_BAR_COLOR)?;
    let axis = scaffold.axis;
    let series_gap = if table.grouped { config.series_gap } else { 0.0 };
    let groups = GroupBandLayout::nest(scaffold.categories.clone(), &table.series_keys, series_gap);

    let series_count = table.series_keys.len();
    let series_width = groups.series_width();
    let mut bars = Vec::with_capacity(table.categories.len() * series_count);
    for (category_index, category) in table.categories.iter().enumerate() {
        for (series_index, series_key) in table.series_keys.iter().enumerate() {
            let Some(offset) = groups.series_offset(category_index, series_index) else {
                continue;
            };
            let value = table.value(category_index, series_index).max(0.0);
            let value_px = if ready {
                axis.value_position(value)
            } else {
                axis.baseline_position()
            };
            let stagger_index = category_index * series_count + series_index;

            bars.push(BarGeometry {
                category: category.clone(),
                category_index,
                series_key: table.public_key(series_index),
                value,
                rect: axis.bar_rect(offset, series_width, value_px),
                color: scaffold.colors.color_of(series_key).to_owned(),
                tooltip_anchor: axis.to_screen(offset + series_width / 2.0, value_px),
                transition_delay_ms: stagger_index as f64 * config.stagger_ms,
            });
        }
    }

    trace!(bars = bars.len(), ready, "laid out bars");
    Ok(scaffold.finish(table, config, bars, Vec::new()))
}

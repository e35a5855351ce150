use serde::{Deserialize, Serialize};

use crate::core::{
    CategoryTick, ColorScale, Orientation, PathGeometry, PlotArea, Point, Rect, ValueDomain,
    ValueTick,
};

use super::LegendEntry;

/// Chart variant a geometry was laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Bar,
    GroupedBar,
    Line,
    GroupedLine,
}

impl ChartKind {
    #[must_use]
    pub fn is_grouped(self) -> bool {
        matches!(self, Self::GroupedBar | Self::GroupedLine)
    }
}

/// One resolved bar.
///
/// `series_key` is `None` for single-series charts. `value` is the datum
/// value after clamping negatives to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub category: String,
    pub category_index: usize,
    pub series_key: Option<String>,
    pub value: f64,
    pub rect: Rect,
    pub color: String,
    /// Center of the bar's value end, where tooltips attach.
    pub tooltip_anchor: Point,
    pub transition_delay_ms: f64,
}

/// One line vertex at a category center.
///
/// `value` is the raw datum value; `position` uses it clamped to zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinePoint {
    pub category: String,
    pub value: f64,
    pub position: Point,
}

/// Polyline, optional filled area and vertices of one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSeriesGeometry {
    pub series_key: Option<String>,
    pub color: String,
    pub points: Vec<LinePoint>,
    pub line: PathGeometry,
    pub area: Option<PathGeometry>,
}

/// Everything the rendering layer needs for one chart, in plotting-area pixels.
///
/// Screen coordinates are relative to the plotting-area origin; the render
/// pass offsets them by the frame padding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartGeometry {
    pub kind: ChartKind,
    pub orientation: Orientation,
    pub plot: PlotArea,
    pub domain: ValueDomain,
    pub baseline_position: f64,
    pub category_band_width: f64,
    pub value_ticks: Vec<ValueTick>,
    pub category_ticks: Vec<CategoryTick>,
    pub series_order: Vec<String>,
    pub colors: ColorScale,
    pub legend: Vec<LegendEntry>,
    pub bars: Vec<BarGeometry>,
    pub lines: Vec<LineSeriesGeometry>,
}

impl ChartGeometry {
    #[must_use]
    pub fn color_of(&self, series_key: &str) -> &str {
        self.colors.color_of(series_key)
    }

    /// Raw tick values in ascending order.
    #[must_use]
    pub fn tick_values(&self) -> Vec<f64> {
        self.value_ticks.iter().map(|tick| tick.value).collect()
    }

    #[must_use]
    pub fn bar(&self, category: &str, series_key: Option<&str>) -> Option<&BarGeometry> {
        self.bars
            .iter()
            .find(|bar| bar.category == category && bar.series_key.as_deref() == series_key)
    }

    #[must_use]
    pub fn line(&self, series_key: Option<&str>) -> Option<&LineSeriesGeometry> {
        self.lines
            .iter()
            .find(|line| line.series_key.as_deref() == series_key)
    }

    /// True when no bar or line series was produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty() && self.lines.is_empty()
    }
}

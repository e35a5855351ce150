use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{
    BaselinePolicy, FramePadding, Orientation, PlotArea, TickSpec, Viewport, default_palette,
};
use crate::error::{ChartError, ChartResult};

use super::validation::validate_chart_config;

/// Fill used by single-series bar charts without an explicit series color.
pub const DEFAULT_BAR_COLOR: &str = "#60a5fa";
/// Stroke used by single-series line charts without an explicit series color.
pub const DEFAULT_LINE_COLOR: &str = "#4f83cc";

/// Value-axis domain override and tick selection.
///
/// Display formatting of tick values is not part of the config; it is set on
/// the engine and applied only when a frame is built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ValueAxisConfig {
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    #[serde(default)]
    pub ticks: Option<TickSpec>,
}

/// Styling consumed only by the render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub bar_corner_radius: f64,
    pub line_stroke_width: f64,
    pub show_dots: bool,
    pub dot_radius: f64,
    pub font_size_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_corner_radius: 6.0,
            line_stroke_width: 2.0,
            show_dots: true,
            dot_radius: 3.0,
            font_size_px: 12.0,
        }
    }
}

/// Chart configuration shared by every bar and line variant.
///
/// Serializable so host applications can persist chart setup without
/// inventing their own format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub frame_padding: FramePadding,
    #[serde(default)]
    pub orientation: Orientation,
    /// Gap ratio between category bands, in `[0, 1)`.
    #[serde(default = "default_gap_ratio")]
    pub category_gap: f64,
    /// Gap ratio between series bands inside one category, in `[0, 1)`.
    #[serde(default = "default_gap_ratio")]
    pub series_gap: f64,
    #[serde(default)]
    pub value_axis: ValueAxisConfig,
    #[serde(default)]
    pub baseline: BaselinePolicy,
    /// Explicit series order; inferred from data when absent.
    #[serde(default)]
    pub series_order: Option<Vec<String>>,
    /// Per-series color overrides.
    #[serde(default)]
    pub colors: IndexMap<String, String>,
    /// Display names for legend and tooltip consumers.
    #[serde(default)]
    pub series_labels: IndexMap<String, String>,
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    /// Color of single-series charts.
    #[serde(default)]
    pub series_color: Option<String>,
    /// Fill the region under line series.
    #[serde(default)]
    pub area: bool,
    /// Rotate bottom category labels.
    #[serde(default)]
    pub rotate_labels: bool,
    /// Delay between consecutive bar entry transitions.
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: f64,
    #[serde(default)]
    pub style: ChartStyle,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            frame_padding: FramePadding::default(),
            orientation: Orientation::default(),
            category_gap: default_gap_ratio(),
            series_gap: default_gap_ratio(),
            value_axis: ValueAxisConfig::default(),
            baseline: BaselinePolicy::default(),
            series_order: None,
            colors: IndexMap::new(),
            series_labels: IndexMap::new(),
            palette: default_palette(),
            series_color: None,
            area: false,
            rotate_labels: false,
            stagger_ms: default_stagger_ms(),
            style: ChartStyle::default(),
        }
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    #[must_use]
    pub fn with_frame_padding(mut self, frame_padding: FramePadding) -> Self {
        self.frame_padding = frame_padding;
        self
    }

    #[must_use]
    pub fn with_category_gap(mut self, category_gap: f64) -> Self {
        self.category_gap = category_gap;
        self
    }

    #[must_use]
    pub fn with_series_gap(mut self, series_gap: f64) -> Self {
        self.series_gap = series_gap;
        self
    }

    /// Overrides both ends of the value domain.
    #[must_use]
    pub fn with_value_domain(mut self, min: f64, max: f64) -> Self {
        self.value_axis.min = Some(min);
        self.value_axis.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_value_min(mut self, min: f64) -> Self {
        self.value_axis.min = Some(min);
        self
    }

    #[must_use]
    pub fn with_value_max(mut self, max: f64) -> Self {
        self.value_axis.max = Some(max);
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: TickSpec) -> Self {
        self.value_axis.ticks = Some(ticks);
        self
    }

    #[must_use]
    pub fn with_baseline(mut self, baseline: BaselinePolicy) -> Self {
        self.baseline = baseline;
        self
    }

    #[must_use]
    pub fn with_series_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.series_order = Some(order.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_color(mut self, series_key: impl Into<String>, color: impl Into<String>) -> Self {
        self.colors.insert(series_key.into(), color.into());
        self
    }

    #[must_use]
    pub fn with_series_label(
        mut self,
        series_key: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        self.series_labels.insert(series_key.into(), label.into());
        self
    }

    #[must_use]
    pub fn with_palette<I, S>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_series_color(mut self, color: impl Into<String>) -> Self {
        self.series_color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_area(mut self, area: bool) -> Self {
        self.area = area;
        self
    }

    #[must_use]
    pub fn with_rotated_labels(mut self, rotate_labels: bool) -> Self {
        self.rotate_labels = rotate_labels;
        self
    }

    #[must_use]
    pub fn with_stagger_ms(mut self, stagger_ms: f64) -> Self {
        self.stagger_ms = stagger_ms;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Plotting-area size left after frame padding.
    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.frame_padding.plot_area(self.viewport)
    }

    /// Display name of a series, falling back to its key.
    #[must_use]
    pub fn series_label<'a>(&'a self, series_key: &'a str) -> &'a str {
        self.series_labels
            .get(series_key)
            .map_or(series_key, String::as_str)
    }

    /// Rejects out-of-range options once, before any geometry is computed.
    pub fn validate(&self) -> ChartResult<()> {
        validate_chart_config(self)
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_gap_ratio() -> f64 {
    0.2
}

fn default_stagger_ms() -> f64 {
    30.0
}

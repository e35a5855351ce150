use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::decimal_to_f64;
use crate::error::ChartResult;

/// Smallest width a measured container may resolve to.
pub const MIN_CONTAINER_WIDTH_PX: u32 = 320;

/// Outer pixel dimensions of one chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Builds a viewport from a measured container width.
    ///
    /// Measured widths are floored to [`MIN_CONTAINER_WIDTH_PX`] so narrow
    /// containers still produce a usable plotting area.
    #[must_use]
    pub fn from_container_width(measured_width: f64, height: u32) -> Self {
        let width = if measured_width.is_finite() {
            measured_width.max(f64::from(MIN_CONTAINER_WIDTH_PX)).round() as u32
        } else {
            MIN_CONTAINER_WIDTH_PX
        };
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(640, 360)
    }
}

/// Margin reserved around the plotting area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FramePadding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl FramePadding {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Resolves the plotting area left inside `viewport`.
    ///
    /// Dimensions never go below zero; rejecting paddings that consume the
    /// whole viewport is left to configuration validation.
    #[must_use]
    pub fn plot_area(self, viewport: Viewport) -> PlotArea {
        PlotArea {
            width: (f64::from(viewport.width) - self.left - self.right).max(0.0),
            height: (f64::from(viewport.height) - self.top - self.bottom).max(0.0),
        }
    }
}

impl Default for FramePadding {
    fn default() -> Self {
        Self::new(24.0, 24.0, 40.0, 40.0)
    }
}

/// Inner plotting-area size handed to scale construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Screen-space point relative to the plotting-area origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn center(self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// Single-series category point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Datum {
    pub label: String,
    pub value: f64,
}

impl Datum {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn from_decimal(label: impl Into<String>, value: Decimal) -> ChartResult<Self> {
        Ok(Self {
            label: label.into(),
            value: decimal_to_f64(value, "value")?,
        })
    }
}

/// Multi-series category point.
///
/// Series keys absent from `values` read as zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupDatum {
    pub label: String,
    #[serde(default)]
    pub values: IndexMap<String, f64>,
}

impl GroupDatum {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            values: IndexMap::new(),
        }
    }

    #[must_use]
    pub fn with_value(mut self, series_key: impl Into<String>, value: f64) -> Self {
        self.values.insert(series_key.into(), value);
        self
    }

    #[must_use]
    pub fn value_of(&self, series_key: &str) -> f64 {
        self.values.get(series_key).copied().unwrap_or(0.0)
    }
}

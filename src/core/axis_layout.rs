use serde::{Deserialize, Serialize};

use crate::core::{BandLayout, LinearScale, PlotArea, Point, Rect, ValueDomain};

/// Gap between the plot edge and value-axis labels on the left side.
pub const VALUE_LABEL_SIDE_OFFSET_PX: f64 = 8.0;
/// Gap between the plot bottom and value-axis labels below it.
pub const VALUE_LABEL_BELOW_OFFSET_PX: f64 = 14.0;
/// Gap between the plot edge and category-axis labels.
pub const CATEGORY_LABEL_OFFSET_PX: f64 = 20.0;
/// Rotation applied to bottom category labels when rotation is requested.
pub const ROTATED_LABEL_ANGLE_DEG: f64 = -40.0;

/// Which screen axis carries the categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Categories along screen-x, values along screen-y (larger values higher).
    #[default]
    Vertical,
    /// Categories along screen-y, values along screen-x (larger values further right).
    Horizontal,
}

impl Orientation {
    #[must_use]
    pub fn category_length(self, plot: PlotArea) -> f64 {
        match self {
            Self::Vertical => plot.width,
            Self::Horizontal => plot.height,
        }
    }

    #[must_use]
    pub fn value_length(self, plot: PlotArea) -> f64 {
        match self {
            Self::Vertical => plot.height,
            Self::Horizontal => plot.width,
        }
    }

    /// Pixel range the value scale maps onto.
    #[must_use]
    pub fn value_range(self, plot: PlotArea) -> (f64, f64) {
        match self {
            Self::Vertical => (plot.height, 0.0),
            Self::Horizontal => (0.0, plot.width),
        }
    }

    /// Converts a logical `(category, value)` pixel pair to screen space.
    #[must_use]
    pub fn to_screen(self, category_px: f64, value_px: f64) -> Point {
        match self {
            Self::Vertical => Point::new(category_px, value_px),
            Self::Horizontal => Point::new(value_px, category_px),
        }
    }

    /// Screen rectangle covering `category_start..category_start + category_extent`
    /// on the category axis and the span between two value-axis positions.
    #[must_use]
    pub fn span_rect(
        self,
        category_start: f64,
        category_extent: f64,
        value_a: f64,
        value_b: f64,
    ) -> Rect {
        let value_start = value_a.min(value_b);
        let value_extent = (value_a - value_b).abs();
        match self {
            Self::Vertical => Rect::new(category_start, value_start, category_extent, value_extent),
            Self::Horizontal => {
                Rect::new(value_start, category_start, value_extent, category_extent)
            }
        }
    }
}

/// Value-axis position that bars and filled areas grow from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaselinePolicy {
    /// The position of value `0`.
    #[default]
    Zero,
    /// The position of the resolved domain minimum (the plot edge).
    DomainMin,
}

/// Screen side an axis is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisSide {
    Left,
    Bottom,
}

/// Horizontal anchoring of a label relative to its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Straight segment in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub from: Point,
    pub to: Point,
}

/// One value-axis tick with its grid line and label anchor.
///
/// Carries the raw tick value; label text is produced by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueTick {
    pub value: f64,
    pub position: f64,
    pub grid_line: LineSegment,
    pub label_anchor: Point,
    pub text_anchor: TextAnchor,
}

/// One category-axis label anchored at its band center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTick {
    pub label: String,
    pub center: f64,
    pub label_anchor: Point,
    pub text_anchor: TextAnchor,
    pub rotation_deg: Option<f64>,
}

/// Orientation-agnostic pairing of a band category axis and a linear value axis.
///
/// Geometry is computed along the two logical axes and converted to screen
/// x/y only through [`Orientation`], so every chart variant shares one
/// implementation of the axis swap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    orientation: Orientation,
    plot: PlotArea,
    domain: ValueDomain,
    value_scale: LinearScale,
    baseline_px: f64,
}

impl AxisLayout {
    #[must_use]
    pub fn new(
        orientation: Orientation,
        plot: PlotArea,
        domain: ValueDomain,
        baseline: BaselinePolicy,
    ) -> Self {
        let (range_start, range_end) = orientation.value_range(plot);
        let value_scale = LinearScale::new(domain.min, domain.max, range_start, range_end);
        let baseline_value = match baseline {
            BaselinePolicy::Zero => 0.0,
            BaselinePolicy::DomainMin => domain.min,
        };

        Self {
            orientation,
            plot,
            domain,
            value_scale,
            baseline_px: value_scale.map(baseline_value),
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub fn plot(&self) -> PlotArea {
        self.plot
    }

    #[must_use]
    pub fn domain(&self) -> ValueDomain {
        self.domain
    }

    #[must_use]
    pub fn value_scale(&self) -> LinearScale {
        self.value_scale
    }

    /// Pixel range the category bands partition.
    #[must_use]
    pub fn category_range(&self) -> (f64, f64) {
        (0.0, self.orientation.category_length(self.plot))
    }

    #[must_use]
    pub fn value_position(&self, value: f64) -> f64 {
        self.value_scale.map(value)
    }

    #[must_use]
    pub fn baseline_position(&self) -> f64 {
        self.baseline_px
    }

    #[must_use]
    pub fn to_screen(&self, category_px: f64, value_px: f64) -> Point {
        self.orientation.to_screen(category_px, value_px)
    }

    /// Rectangle growing from the baseline to `value_px`.
    #[must_use]
    pub fn bar_rect(&self, category_start: f64, category_extent: f64, value_px: f64) -> Rect {
        self.orientation
            .span_rect(category_start, category_extent, self.baseline_px, value_px)
    }

    /// Which side the value axis is drawn on.
    #[must_use]
    pub fn value_axis_side(&self) -> AxisSide {
        match self.orientation {
            Orientation::Vertical => AxisSide::Left,
            Orientation::Horizontal => AxisSide::Bottom,
        }
    }

    /// Which side the category axis is drawn on.
    #[must_use]
    pub fn category_axis_side(&self) -> AxisSide {
        match self.orientation {
            Orientation::Vertical => AxisSide::Bottom,
            Orientation::Horizontal => AxisSide::Left,
        }
    }

    /// Positions each tick value and spans its grid line across the plot.
    #[must_use]
    pub fn value_ticks(&self, ticks: &[f64]) -> Vec<ValueTick> {
        let cross_length = self.orientation.category_length(self.plot);
        ticks
            .iter()
            .map(|&value| {
                let position = self.value_position(value);
                let grid_line = LineSegment {
                    from: self.to_screen(0.0, position),
                    to: self.to_screen(cross_length, position),
                };
                let (label_anchor, text_anchor) = match self.value_axis_side() {
                    AxisSide::Left => (
                        Point::new(-VALUE_LABEL_SIDE_OFFSET_PX, position),
                        TextAnchor::End,
                    ),
                    AxisSide::Bottom => (
                        Point::new(position, self.plot.height + VALUE_LABEL_BELOW_OFFSET_PX),
                        TextAnchor::Middle,
                    ),
                };
                ValueTick {
                    value,
                    position,
                    grid_line,
                    label_anchor,
                    text_anchor,
                }
            })
            .collect()
    }

    /// Anchors each category label at its band center.
    ///
    /// `rotate_labels` only applies to a bottom category axis.
    #[must_use]
    pub fn category_ticks(&self, bands: &BandLayout, rotate_labels: bool) -> Vec<CategoryTick> {
        (0..bands.len())
            .filter_map(|index| {
                let center = bands.center_at(index)?;
                let label = bands.labels().get(index)?.clone();
                let tick = match self.category_axis_side() {
                    AxisSide::Bottom => CategoryTick {
                        label,
                        center,
                        label_anchor: Point::new(
                            center,
                            self.plot.height + CATEGORY_LABEL_OFFSET_PX,
                        ),
                        text_anchor: if rotate_labels {
                            TextAnchor::End
                        } else {
                            TextAnchor::Middle
                        },
                        rotation_deg: rotate_labels.then_some(ROTATED_LABEL_ANGLE_DEG),
                    },
                    AxisSide::Left => CategoryTick {
                        label,
                        center,
                        label_anchor: Point::new(-CATEGORY_LABEL_OFFSET_PX, center),
                        text_anchor: TextAnchor::End,
                        rotation_deg: None,
                    },
                };
                Some(tick)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertical_span_rect_grows_upward_from_baseline() {
        let rect = Orientation::Vertical.span_rect(10.0, 20.0, 300.0, 100.0);
        assert_eq!(rect, Rect::new(10.0, 100.0, 20.0, 200.0));
    }

    #[test]
    fn horizontal_span_rect_swaps_axes() {
        let rect = Orientation::Horizontal.span_rect(10.0, 20.0, 0.0, 150.0);
        assert_eq!(rect, Rect::new(0.0, 10.0, 150.0, 20.0));
    }

    #[test]
    fn domain_min_baseline_sits_on_plot_edge() {
        let layout = AxisLayout::new(
            Orientation::Vertical,
            PlotArea::new(400.0, 300.0),
            ValueDomain::new(10.0, 40.0),
            BaselinePolicy::DomainMin,
        );
        assert_eq!(layout.baseline_position(), 300.0);

        let zero = AxisLayout::new(
            Orientation::Vertical,
            PlotArea::new(400.0, 300.0),
            ValueDomain::new(10.0, 40.0),
            BaselinePolicy::Zero,
        );
        assert!((zero.baseline_position() - 400.0).abs() <= 1e-9);
    }
}

use tracing::trace;

use crate::core::{Point, TextAnchor};
use crate::error::ChartResult;
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, LineStrokeStyle, PathPrimitive, RectPrimitive,
    RenderFrame, TextHAlign, TextPrimitive,
};

use super::{ChartConfig, ChartGeometry};

// #d7d7d7, #999999 and #777777.
const GRID_COLOR: Color = Color::rgb(215.0 / 255.0, 215.0 / 255.0, 215.0 / 255.0);
const GRID_DASH_PX: f64 = 4.0;
const BASELINE_COLOR: Color = Color::rgb(153.0 / 255.0, 153.0 / 255.0, 153.0 / 255.0);
const LABEL_COLOR: Color = Color::rgb(119.0 / 255.0, 119.0 / 255.0, 119.0 / 255.0);
const AREA_ALPHA: f64 = 0.2;

/// Default value-axis label text: shortest round-trip decimal form.
#[must_use]
pub fn default_value_tick_label(value: f64) -> String {
    format!("{value}")
}

/// Materializes `geometry` into viewport-pixel primitives.
///
/// Plotting-area coordinates are offset by the frame padding. Empty labels
/// are skipped since text primitives must carry text.
pub fn build_render_frame(
    geometry: &ChartGeometry,
    config: &ChartConfig,
    format_value_tick: &dyn Fn(f64) -> String,
) -> ChartResult<RenderFrame> {
    let padding = config.frame_padding;
    let shift = |point: Point| Point::new(point.x + padding.left, point.y + padding.top);
    let style = config.style;
    let mut frame = RenderFrame::new(config.viewport);

    for tick in &geometry.value_ticks {
        let from = shift(tick.grid_line.from);
        let to = shift(tick.grid_line.to);
        frame.lines.push(
            LinePrimitive::new(from.x, from.y, to.x, to.y, 1.0, GRID_COLOR).with_stroke_style(
                LineStrokeStyle::Dashed {
                    dash_px: GRID_DASH_PX,
                    gap_px: GRID_DASH_PX,
                },
            ),
        );

        let text = format_value_tick(tick.value);
        if !text.is_empty() {
            let anchor = shift(tick.label_anchor);
            frame.texts.push(TextPrimitive::new(
                text,
                anchor.x,
                anchor.y,
                style.font_size_px,
                LABEL_COLOR,
                h_align(tick.text_anchor),
            ));
        }
    }

    let (category_start, category_end) = (0.0, geometry.orientation.category_length(geometry.plot));
    let baseline_from = shift(
        geometry
            .orientation
            .to_screen(category_start, geometry.baseline_position),
    );
    let baseline_to = shift(
        geometry
            .orientation
            .to_screen(category_end, geometry.baseline_position),
    );
    frame.lines.push(LinePrimitive::new(
        baseline_from.x,
        baseline_from.y,
        baseline_to.x,
        baseline_to.y,
        1.0,
        BASELINE_COLOR,
    ));

    for series in &geometry.lines {
        let color = Color::from_hex(&series.color)?;
        if let Some(area) = &series.area {
            if !area.is_empty() {
                let fill = Color {
                    alpha: color.alpha * AREA_ALPHA,
                    ..color
                };
                frame
                    .paths
                    .push(PathPrimitive::filled(area.clone().map_points(shift), fill));
            }
        }
        if !series.line.is_empty() {
            frame.paths.push(PathPrimitive::stroked(
                series.line.clone().map_points(shift),
                color,
                style.line_stroke_width,
            ));
        }
        if style.show_dots {
            for point in &series.points {
                let center = shift(point.position);
                frame.circles.push(CirclePrimitive::new(
                    center.x,
                    center.y,
                    style.dot_radius,
                    color,
                ));
            }
        }
    }

    for bar in &geometry.bars {
        let origin = shift(Point::new(bar.rect.x, bar.rect.y));
        frame.rects.push(
            RectPrimitive::new(
                origin.x,
                origin.y,
                bar.rect.width,
                bar.rect.height,
                Color::from_hex(&bar.color)?,
            )
            .with_corner_radius(style.bar_corner_radius),
        );
    }

    for tick in &geometry.category_ticks {
        if tick.label.is_empty() {
            continue;
        }
        let anchor = shift(tick.label_anchor);
        let mut text = TextPrimitive::new(
            tick.label.clone(),
            anchor.x,
            anchor.y,
            style.font_size_px,
            LABEL_COLOR,
            h_align(tick.text_anchor),
        );
        if let Some(rotation_deg) = tick.rotation_deg {
            text = text.with_rotation(rotation_deg);
        }
        frame.texts.push(text);
    }

    trace!(
        lines = frame.lines.len(),
        paths = frame.paths.len(),
        rects = frame.rects.len(),
        circles = frame.circles.len(),
        texts = frame.texts.len(),
        "built render frame"
    );
    Ok(frame)
}

fn h_align(anchor: TextAnchor) -> TextHAlign {
    match anchor {
        TextAnchor::Start => TextHAlign::Left,
        TextAnchor::Middle => TextHAlign::Center,
        TextAnchor::End => TextHAlign::Right,
    }
}

#[cfg(test)]
mod tests {
    use super::default_value_tick_label;

    #[test]
    fn whole_values_print_without_fraction() {
        assert_eq!(default_value_tick_label(30.0), "30");
        assert_eq!(default_value_tick_label(2.5), "2.5");
    }
}

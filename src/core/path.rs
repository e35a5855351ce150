use serde::{Deserialize, Serialize};

use crate::core::Point;

/// One drawing command of a path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Straight segment back to the most recent `MoveTo` point.
    Close,
}

/// Ordered command list for a polyline or closed area.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathGeometry {
    pub commands: Vec<PathCommand>,
}

impl PathGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Applies `transform` to every point, keeping command order.
    #[must_use]
    pub fn map_points(self, transform: impl Fn(Point) -> Point) -> Self {
        let commands = self
            .commands
            .into_iter()
            .map(|command| match command {
                PathCommand::MoveTo(point) => PathCommand::MoveTo(transform(point)),
                PathCommand::LineTo(point) => PathCommand::LineTo(transform(point)),
                PathCommand::Close => PathCommand::Close,
            })
            .collect();
        Self { commands }
    }

    /// SVG path data (`M x y L x y ... Z`).
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        self.commands
            .iter()
            .map(|command| match command {
                PathCommand::MoveTo(point) => format!("M {} {}", point.x, point.y),
                PathCommand::LineTo(point) => format!("L {} {}", point.x, point.y),
                PathCommand::Close => "Z".to_owned(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Straight polyline through `points` in order.
///
/// No points give an empty path; one point gives a lone `MoveTo`.
#[must_use]
pub fn build_line(points: &[Point]) -> PathGeometry {
    let Some((first, rest)) = points.split_first() else {
        return PathGeometry::empty();
    };

    let mut commands = Vec::with_capacity(points.len());
    commands.push(PathCommand::MoveTo(*first));
    commands.extend(rest.iter().copied().map(PathCommand::LineTo));
    PathGeometry { commands }
}

/// Region between the polyline through `points` and the line `y = baseline_y`.
///
/// The outline runs along the points, drops to the baseline under the last
/// point, runs back under the first point and closes. Fewer than two points
/// enclose nothing and give an empty path.
#[must_use]
pub fn build_area(points: &[Point], baseline_y: f64) -> PathGeometry {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return PathGeometry::empty();
    };
    if points.len() < 2 {
        return PathGeometry::empty();
    }

    let mut path = build_line(points);
    path.commands.reserve(3);
    path.commands
        .push(PathCommand::LineTo(Point::new(last.x, baseline_y)));
    path.commands
        .push(PathCommand::LineTo(Point::new(first.x, baseline_y)));
    path.commands.push(PathCommand::Close);
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_path_data_matches_command_order() {
        let path = build_area(&[Point::new(10.0, 5.0), Point::new(30.0, 7.5)], 50.0);
        assert_eq!(path.to_svg_path_data(), "M 10 5 L 30 7.5 L 30 50 L 10 50 Z");
    }

    #[test]
    fn empty_path_has_empty_svg_data() {
        assert_eq!(PathGeometry::default().to_svg_path_data(), "");
    }

    #[test]
    fn map_points_preserves_close() {
        let path = build_area(&[Point::new(0.0, 1.0), Point::new(2.0, 3.0)], 0.0)
            .map_points(|point| Point::new(point.y, point.x));
        assert!(path.is_closed());
        assert_eq!(path.commands[0], PathCommand::MoveTo(Point::new(1.0, 0.0)));
    }
}

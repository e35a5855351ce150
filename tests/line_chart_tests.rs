use approx::assert_abs_diff_eq;
use bandchart::api::{
    ChartConfig, ChartKind, DEFAULT_LINE_COLOR, layout_grouped_line_chart, layout_line_chart,
};
use bandchart::core::{
    BaselinePolicy, Datum, FramePadding, GroupDatum, Orientation, PathCommand, Point, Viewport,
};

fn config() -> ChartConfig {
    ChartConfig::new(Viewport::new(300, 100))
        .with_frame_padding(FramePadding::uniform(0.0))
        .with_category_gap(0.0)
}

fn sample() -> Vec<Datum> {
    vec![
        Datum::new("mon", 0.0),
        Datum::new("tue", 50.0),
        Datum::new("wed", 100.0),
    ]
}

#[test]
fn line_vertices_sit_on_category_centers() {
    let geometry = layout_line_chart(&sample(), &config()).expect("layout");
    assert_eq!(geometry.kind, ChartKind::Line);
    assert!(geometry.bars.is_empty());

    let series = geometry.line(None).expect("single series");
    assert_eq!(series.color, DEFAULT_LINE_COLOR);
    assert_eq!(series.points.len(), 3);
    let expected = [(50.0, 100.0), (150.0, 50.0), (250.0, 0.0)];
    for (point, (x, y)) in series.points.iter().zip(expected) {
        assert_abs_diff_eq!(point.position.x, x, epsilon = 1e-9);
        assert_abs_diff_eq!(point.position.y, y, epsilon = 1e-9);
    }
    assert_eq!(series.line.commands.len(), 3);
    assert!(series.area.is_none());
}

#[test]
fn area_closes_along_zero_baseline() {
    let geometry = layout_line_chart(&sample(), &config().with_area(true)).expect("layout");
    let area = geometry
        .line(None)
        .and_then(|series| series.area.as_ref())
        .expect("area path");
    assert!(area.is_closed());
    let commands = &area.commands;
    let n = commands.len();
    match (commands[n - 3], commands[n - 2]) {
        (PathCommand::LineTo(last), PathCommand::LineTo(first)) => {
            assert_abs_diff_eq!(last.x, 250.0, epsilon = 1e-9);
            assert_abs_diff_eq!(last.y, 100.0, epsilon = 1e-9);
            assert_abs_diff_eq!(first.x, 50.0, epsilon = 1e-9);
            assert_abs_diff_eq!(first.y, 100.0, epsilon = 1e-9);
        }
        other => panic!("unexpected area tail: {other:?}"),
    }
}

#[test]
fn negative_line_values_keep_raw_value_but_clamp_position() {
    let data = vec![Datum::new("a", -20.0), Datum::new("b", 10.0)];
    let geometry = layout_line_chart(&data, &config()).expect("layout");
    let point = &geometry.line(None).expect("series").points[0];
    assert_eq!(point.value, -20.0);
    assert_abs_diff_eq!(point.position.y, 100.0, epsilon = 1e-9);
}

#[test]
fn horizontal_line_swaps_screen_axes() {
    let config = ChartConfig::new(Viewport::new(100, 300))
        .with_frame_padding(FramePadding::uniform(0.0))
        .with_category_gap(0.0)
        .with_orientation(Orientation::Horizontal)
        .with_area(true);
    let geometry = layout_line_chart(&sample(), &config).expect("layout");
    let series = geometry.line(None).expect("series");

    let last = series.points[2].position;
    assert_abs_diff_eq!(last.x, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(last.y, 250.0, epsilon = 1e-9);
    assert_eq!(
        series.line.commands[0],
        PathCommand::MoveTo(series.points[0].position)
    );
    let area = series.area.as_ref().expect("area");
    assert!(
        area.commands
            .iter()
            .any(|command| *command == PathCommand::LineTo(Point::new(0.0, 250.0)))
    );
}

#[test]
fn single_point_line_has_no_area() {
    let data = vec![Datum::new("only", 3.0)];
    let geometry = layout_line_chart(&data, &config().with_area(true)).expect("layout");
    let series = geometry.line(None).expect("series");
    assert_eq!(series.line.commands.len(), 1);
    assert!(series.area.as_ref().is_some_and(|area| area.is_empty()));
}

#[test]
fn empty_data_produces_no_lines() {
    let geometry = layout_line_chart(&[], &config()).expect("layout");
    assert!(geometry.lines.is_empty());
    let geometry = layout_grouped_line_chart(&[], &config()).expect("layout");
    assert!(geometry.lines.is_empty());
    assert!(geometry.legend.is_empty());
}

#[test]
fn grouped_lines_share_category_centers() {
    let data = vec![
        GroupDatum::new("x").with_value("a", 10.0).with_value("b", 20.0),
        GroupDatum::new("y").with_value("b", 40.0),
    ];
    let config = config().with_value_max(40.0);
    let geometry = layout_grouped_line_chart(&data, &config).expect("layout");

    assert_eq!(geometry.kind, ChartKind::GroupedLine);
    assert_eq!(geometry.series_order, ["a", "b"]);
    assert_eq!(geometry.lines.len(), 2);

    let a = geometry.line(Some("a")).expect("series a");
    let b = geometry.line(Some("b")).expect("series b");
    assert_abs_diff_eq!(a.points[1].position.x, b.points[1].position.x, epsilon = 1e-9);
    assert_eq!(a.points[1].value, 0.0);
    assert_abs_diff_eq!(a.points[1].position.y, 100.0, epsilon = 1e-9);
    assert_abs_diff_eq!(b.points[1].position.y, 0.0, epsilon = 1e-9);
    assert_ne!(a.color, b.color);
    assert_eq!(geometry.legend.len(), 2);
}

#[test]
fn domain_min_baseline_closes_area_on_plot_edge() {
    let data = vec![
        GroupDatum::new("x").with_value("a", 60.0),
        GroupDatum::new("y").with_value("a", 80.0),
    ];
    let config = config()
        .with_value_domain(50.0, 100.0)
        .with_baseline(BaselinePolicy::DomainMin)
        .with_area(true);
    let geometry = layout_grouped_line_chart(&data, &config).expect("layout");
    assert_abs_diff_eq!(geometry.baseline_position, 100.0, epsilon = 1e-9);

    let area = geometry
        .line(Some("a"))
        .and_then(|series| series.area.as_ref())
        .expect("area");
    let baseline_points = area
        .commands
        .iter()
        .filter(|command| matches!(command, PathCommand::LineTo(p) if (p.y - 100.0).abs() <= 1e-9))
        .count();
    assert_eq!(baseline_points, 2);
}

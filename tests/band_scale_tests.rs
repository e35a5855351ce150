use approx::assert_abs_diff_eq;
use bandchart::core::{BandLayout, GroupBandLayout, GroupDatum, infer_series_order, resolve_series_order};

#[test]
fn three_bands_over_three_hundred_pixels() {
    let bands = BandLayout::new(&["A", "B", "C"], 0.0, 300.0, 0.2);
    assert_abs_diff_eq!(bands.band_width(), 80.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bands.gap_width(), 15.0, epsilon = 1e-9);

    let offsets: Vec<f64> = bands.bands().map(|(_, offset)| offset).collect();
    assert_eq!(offsets.len(), 3);
    for (offset, expected) in offsets.iter().zip([15.0, 110.0, 205.0]) {
        assert_abs_diff_eq!(*offset, expected, epsilon = 1e-9);
    }
    assert_abs_diff_eq!(bands.center_at(1).expect("center"), 150.0, epsilon = 1e-9);
}

#[test]
fn empty_labels_use_one_phantom_band() {
    let labels: [&str; 0] = [];
    let bands = BandLayout::new(&labels, 0.0, 100.0, 0.2);
    assert!(bands.is_empty());
    assert_abs_diff_eq!(bands.band_width(), 80.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bands.gap_width(), 10.0, epsilon = 1e-9);
    assert_eq!(bands.offset_at(0), None);
    assert_eq!(bands.bands().count(), 0);
}

#[test]
fn zero_gap_bands_tile_the_range() {
    let bands = BandLayout::new(&["a", "b", "c", "d"], 0.0, 100.0, 0.0);
    assert_abs_diff_eq!(bands.band_width(), 25.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bands.offset_at(3).expect("offset"), 75.0, epsilon = 1e-9);
}

#[test]
fn unknown_label_has_no_position() {
    let bands = BandLayout::new(&["a"], 0.0, 100.0, 0.2);
    assert_eq!(bands.position_of("missing"), None);
    assert_eq!(bands.offset_at(5), None);
}

#[test]
fn duplicate_labels_keep_separate_bands() {
    let bands = BandLayout::new(&["x", "x", "y"], 0.0, 300.0, 0.0);
    assert_eq!(bands.len(), 3);
    assert_abs_diff_eq!(bands.position_of("x").expect("first x"), 0.0, epsilon = 1e-9);
    assert_abs_diff_eq!(bands.offset_at(1).expect("second x"), 100.0, epsilon = 1e-9);
    let labels: Vec<&str> = bands.bands().map(|(label, _)| label).collect();
    assert_eq!(labels, ["x", "x", "y"]);
}

#[test]
fn group_band_nests_series_inside_category_band() {
    let groups = GroupBandLayout::new(&["Q1", "Q2"], &["a", "b"], 0.0, 300.0, 0.0, 0.0);
    assert_abs_diff_eq!(groups.outer.band_width(), 150.0, epsilon = 1e-9);
    assert_abs_diff_eq!(groups.series_width(), 75.0, epsilon = 1e-9);
    assert_abs_diff_eq!(groups.series_offset(1, 1).expect("offset"), 225.0, epsilon = 1e-9);
    assert_eq!(groups.series_offset(2, 0), None);
    assert_eq!(groups.series_offset(0, 2), None);
}

#[test]
fn series_order_is_first_occurrence_across_categories() {
    let data = vec![
        GroupDatum::new("Q1").with_value("north", 1.0).with_value("south", 2.0),
        GroupDatum::new("Q2")
            .with_value("east", 3.0)
            .with_value("north", 4.0),
    ];
    assert_eq!(infer_series_order(&data), ["north", "south", "east"]);

    let explicit = vec!["east".to_owned(), "north".to_owned()];
    assert_eq!(resolve_series_order(Some(&explicit), &data), ["east", "north"]);
    assert_eq!(resolve_series_order(None, &data), ["north", "south", "east"]);
}

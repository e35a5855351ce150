use bandchart::core::BandLayout;
use proptest::prelude::*;

proptest! {
    #[test]
    fn bands_and_gaps_partition_the_range(
        count in 1usize..200,
        gap_ratio in 0.0f64..=0.9,
        range_start in -1_000.0f64..1_000.0,
        length in 1.0f64..10_000.0
    ) {
        let labels: Vec<String> = (0..count).map(|i| format!("c{i}")).collect();
        let bands = BandLayout::new(&labels, range_start, range_start + length, gap_ratio);
        let total = bands.gap_width() * (count as f64 + 1.0) + bands.band_width() * count as f64;
        prop_assert!((total - length).abs() <= 1e-6 * length.max(1.0));

        let last = bands.offset_at(count - 1).expect("last band");
        let end = last + bands.band_width() + bands.gap_width();
        prop_assert!((end - (range_start + length)).abs() <= 1e-6 * length.max(1.0));
    }

    #[test]
    fn bands_are_ordered_and_disjoint(
        count in 2usize..100,
        gap_ratio in 0.0f64..0.9
    ) {
        let labels: Vec<String> = (0..count).map(|i| i.to_string()).collect();
        let bands = BandLayout::new(&labels, 0.0, 1_000.0, gap_ratio);
        let offsets: Vec<f64> = bands.bands().map(|(_, offset)| offset).collect();
        for pair in offsets.windows(2) {
            prop_assert!(pair[1] >= pair[0] + bands.band_width() - 1e-9);
        }
    }
}

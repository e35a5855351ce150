use bandchart::core::ColorScale;
use indexmap::IndexMap;
use proptest::prelude::*;

proptest! {
    #[test]
    fn colors_cycle_through_palette_in_series_order(
        series_count in 1usize..40,
        palette_len in 1usize..8
    ) {
        let keys: Vec<String> = (0..series_count).map(|i| format!("s{i}")).collect();
        let palette: Vec<String> = (0..palette_len).map(|i| format!("#{i:06x}")).collect();
        let colors = ColorScale::new(&keys, &IndexMap::new(), &palette);
        for (index, key) in keys.iter().enumerate() {
            prop_assert_eq!(colors.color_of(key), palette[index % palette_len].as_str());
        }
    }

    #[test]
    fn color_assignment_is_deterministic(series_count in 1usize..20) {
        let keys: Vec<String> = (0..series_count).map(|i| format!("k{i}")).collect();
        let palette = ["#111", "#222", "#333"];
        let first = ColorScale::new(&keys, &IndexMap::new(), &palette);
        let second = ColorScale::new(&keys, &IndexMap::new(), &palette);
        prop_assert_eq!(first, second);
    }
}

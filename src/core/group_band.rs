use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::{BandLayout, GroupDatum};

/// Nested band layout for grouped bars.
///
/// `outer` partitions the category axis; `inner` partitions
/// `0..outer.band_width()` among series keys with the same algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBandLayout {
    pub outer: BandLayout,
    pub inner: BandLayout,
}

impl GroupBandLayout {
    #[must_use]
    pub fn new<C: AsRef<str>, S: AsRef<str>>(
        category_labels: &[C],
        series_keys: &[S],
        range_start: f64,
        range_end: f64,
        outer_gap_ratio: f64,
        inner_gap_ratio: f64,
    ) -> Self {
        let outer = BandLayout::new(category_labels, range_start, range_end, outer_gap_ratio);
        Self::nest(outer, series_keys, inner_gap_ratio)
    }

    /// Partitions every band of an existing `outer` layout among `series_keys`.
    #[must_use]
    pub fn nest<S: AsRef<str>>(
        outer: BandLayout,
        series_keys: &[S],
        inner_gap_ratio: f64,
    ) -> Self {
        let inner = BandLayout::new(series_keys, 0.0, outer.band_width(), inner_gap_ratio);
        Self { outer, inner }
    }

    /// Offset along the category axis of one series band inside one category.
    #[must_use]
    pub fn series_offset(&self, category_index: usize, series_index: usize) -> Option<f64> {
        Some(self.outer.offset_at(category_index)? + self.inner.offset_at(series_index)?)
    }

    /// Extent of every series band along the category axis.
    #[must_use]
    pub fn series_width(&self) -> f64 {
        self.inner.band_width()
    }
}

/// Series keys in order of first appearance across `data`, deduplicated.
#[must_use]
pub fn infer_series_order(data: &[GroupDatum]) -> Vec<String> {
    let keys: IndexSet<&str> = data
        .iter()
        .flat_map(|datum| datum.values.keys().map(String::as_str))
        .collect();
    keys.into_iter().map(str::to_owned).collect()
}

/// Explicit series order when supplied, otherwise first-occurrence order.
///
/// The result drives both inner banding and default color assignment, so it
/// is resolved once per layout and reused by both.
#[must_use]
pub fn resolve_series_order(explicit: Option<&[String]>, data: &[GroupDatum]) -> Vec<String> {
    match explicit {
        Some(order) => order.to_vec(),
        None => infer_series_order(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_offset_adds_outer_and_inner_offsets() {
        let layout = GroupBandLayout::new(&["q1", "q2"], &["a", "b"], 0.0, 200.0, 0.0, 0.0);
        assert_eq!(layout.outer.band_width(), 100.0);
        assert_eq!(layout.series_width(), 50.0);
        assert_eq!(layout.series_offset(1, 1), Some(150.0));
        assert_eq!(layout.series_offset(2, 0), None);
    }

    #[test]
    fn inferred_order_follows_first_occurrence() {
        let data = vec![
            GroupDatum::new("jan").with_value("plan", 1.0).with_value("actual", 2.0),
            GroupDatum::new("feb")
                .with_value("actual", 3.0)
                .with_value("forecast", 4.0),
        ];
        assert_eq!(infer_series_order(&data), vec!["plan", "actual", "forecast"]);
    }
}

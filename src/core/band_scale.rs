use serde::{Deserialize, Serialize};

/// Equal-width bands laid out over a pixel range, one per label.
///
/// For `n` labels over a range of length `L` with gap ratio `g`:
/// `band_width = L * (1 - g) / n` and `gap_width = L * g / (n + 1)`, so
/// `gap_width + n * (band_width + gap_width) == L`.
///
/// Bands are addressed by index. Duplicate labels each keep their own band;
/// [`BandLayout::position_of`] resolves a label to its first band.
///
/// `gap_ratio` must lie in `[0, 1)`. Larger ratios yield a zero or negative
/// band width and are not clamped here; configuration validation rejects them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BandLayout {
    labels: Vec<String>,
    offsets: Vec<f64>,
    band_width: f64,
    gap_width: f64,
}

impl BandLayout {
    /// Partitions `range_start..range_end` among `labels` in the given order.
    ///
    /// An empty label list is laid out as one phantom band so widths stay
    /// finite; the phantom band has no offset and is never returned.
    #[must_use]
    pub fn new<S: AsRef<str>>(
        labels: &[S],
        range_start: f64,
        range_end: f64,
        gap_ratio: f64,
    ) -> Self {
        let band_count = labels.len().max(1) as f64;
        let total = range_end - range_start;
        let total_gap = total * gap_ratio;
        let gap_width = total_gap / (band_count + 1.0);
        let band_width = (total - total_gap) / band_count;

        let first = range_start + gap_width;
        let offsets = (0..labels.len())
            .map(|index| first + index as f64 * (band_width + gap_width))
            .collect();

        Self {
            labels: labels.iter().map(|label| label.as_ref().to_owned()).collect(),
            offsets,
            band_width,
            gap_width,
        }
    }

    #[must_use]
    pub fn band_width(&self) -> f64 {
        self.band_width
    }

    #[must_use]
    pub fn gap_width(&self) -> f64 {
        self.gap_width
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Start offset of the band at `index`.
    #[must_use]
    pub fn offset_at(&self, index: usize) -> Option<f64> {
        self.offsets.get(index).copied()
    }

    /// Midpoint of the band at `index`.
    #[must_use]
    pub fn center_at(&self, index: usize) -> Option<f64> {
        self.offset_at(index)
            .map(|offset| offset + self.band_width / 2.0)
    }

    /// Start offset of the first band carrying `label`.
    #[must_use]
    pub fn position_of(&self, label: &str) -> Option<f64> {
        self.labels
            .iter()
            .position(|candidate| candidate == label)
            .and_then(|index| self.offset_at(index))
    }

    /// Iterates `(label, offset)` pairs in layout order.
    pub fn bands(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.offsets.iter().copied())
    }
}

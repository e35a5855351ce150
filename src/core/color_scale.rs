use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Palette used when a chart does not supply its own.
pub const DEFAULT_PALETTE: [&str; 6] = [
    "#73A7D9", "#FFC84C", "#95D1A9", "#C49BCF", "#FF9B66", "#AEC1E5",
];

#[must_use]
pub fn default_palette() -> Vec<String> {
    DEFAULT_PALETTE.iter().map(|color| (*color).to_owned()).collect()
}

/// Deterministic series-key to color assignment for one render pass.
///
/// Resolution per key: an explicit override wins, otherwise the palette entry
/// at the key's position in the series order, cycling once the series count
/// exceeds the palette. Keys outside both fall back to the first palette
/// entry. The whole table is resolved eagerly at construction, so repeated
/// lookups always agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScale {
    assignments: IndexMap<String, String>,
    fallback: String,
}

impl ColorScale {
    /// Builds the assignment table. An empty `palette` uses [`DEFAULT_PALETTE`].
    #[must_use]
    pub fn new<K: AsRef<str>, P: AsRef<str>>(
        series_order: &[K],
        overrides: &IndexMap<String, String>,
        palette: &[P],
    ) -> Self {
        let palette: Vec<&str> = if palette.is_empty() {
            DEFAULT_PALETTE.to_vec()
        } else {
            palette.iter().map(AsRef::as_ref).collect()
        };

        let mut assignments = overrides.clone();
        for (index, key) in series_order.iter().enumerate() {
            let key = key.as_ref();
            if !assignments.contains_key(key) {
                let color = palette[index % palette.len()];
                assignments.insert(key.to_owned(), color.to_owned());
            }
        }

        Self {
            assignments,
            fallback: palette[0].to_owned(),
        }
    }

    #[must_use]
    pub fn color_of(&self, series_key: &str) -> &str {
        self.assignments
            .get(series_key)
            .map_or(self.fallback.as_str(), String::as_str)
    }

    #[must_use]
    pub fn fallback(&self) -> &str {
        &self.fallback
    }
}

use serde::{Deserialize, Serialize};

use crate::core::ColorScale;

use super::ChartConfig;

/// Legend row for one series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub key: String,
    pub label: String,
    pub color: String,
}

/// Legend rows in series order, using the same colors as the chart.
#[must_use]
pub fn build_legend(
    series_order: &[String],
    colors: &ColorScale,
    config: &ChartConfig,
) -> Vec<LegendEntry> {
    series_order
        .iter()
        .map(|key| LegendEntry {
            key: key.clone(),
            label: config.series_label(key).to_owned(),
            color: colors.color_of(key).to_owned(),
        })
        .collect()
}

use serde::{Deserialize, Serialize};

/// Resolved numeric extent of the value axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueDomain {
    pub min: f64,
    pub max: f64,
}

impl ValueDomain {
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Resolves the domain from optional overrides and observed values.
    ///
    /// `min` defaults to `0`, `max` to the largest observed value (never below
    /// `0`). A domain that collapses to a single value is widened to
    /// `min..min + 1`, so an empty data set resolves to `0..1`.
    #[must_use]
    pub fn resolve(
        min_override: Option<f64>,
        max_override: Option<f64>,
        values: impl IntoIterator<Item = f64>,
    ) -> Self {
        let min = min_override.unwrap_or(0.0);
        let max = max_override.unwrap_or_else(|| values.into_iter().fold(0.0, f64::max));
        if max == min {
            Self::new(min, min + 1.0)
        } else {
            Self::new(min, max)
        }
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.max - self.min
    }
}

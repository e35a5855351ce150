use serde::{Deserialize, Serialize};

/// Affine mapping from a numeric domain onto a pixel range.
///
/// A zero-width domain is treated as having span `1` so construction never
/// fails. Values outside the domain extrapolate; callers that need clamping
/// must clamp before mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    #[must_use]
    pub fn new(domain_start: f64, domain_end: f64, range_start: f64, range_end: f64) -> Self {
        Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        }
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to its pixel position.
    ///
    /// Interpolates as `start * (1 - t) + end * t` so both domain endpoints
    /// land exactly on the range endpoints.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let t = (value - self.domain_start) / self.domain_span();
        self.range_start * (1.0 - t) + self.range_end * t
    }

    /// Maps a pixel position back into domain units.
    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let range_span = self.range_end - self.range_start;
        if range_span == 0.0 {
            return self.domain_start;
        }
        let t = (pixel - self.range_start) / range_span;
        self.domain_start + t * self.domain_span()
    }

    fn domain_span(self) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 { 1.0 } else { span }
    }
}

#[cfg(test)]
mod tests {
    use super::LinearScale;

    #[test]
    fn zero_width_domain_maps_to_range_start() {
        let scale = LinearScale::new(5.0, 5.0, 300.0, 0.0);
        assert_eq!(scale.map(5.0), 300.0);
        assert!(scale.map(6.0).is_finite());
    }

    #[test]
    fn inverted_range_keeps_endpoints() {
        let scale = LinearScale::new(0.0, 30.0, 240.0, 0.0);
        assert_eq!(scale.map(0.0), 240.0);
        assert_eq!(scale.map(30.0), 0.0);
        assert_eq!(scale.map(15.0), 120.0);
    }

    #[test]
    fn values_outside_domain_extrapolate() {
        let scale = LinearScale::new(0.0, 10.0, 0.0, 100.0);
        assert_eq!(scale.map(-5.0), -50.0);
        assert_eq!(scale.map(20.0), 200.0);
    }
}

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::primitives::round_half_up;

/// Ordered tick values for one linear axis.
pub type TickSet = SmallVec<[f64; 8]>;

/// How value-axis ticks are chosen.
///
/// Serialized untagged so configs read as `[0, 5, 10]`, `{ "step": 5 }` or
/// `{ "count": 4 }`. No spec at all means a three-tick min/mid/max set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TickSpec {
    /// Used verbatim, without checking against the domain.
    Literal(Vec<f64>),
    /// Multiples of `step` inside the domain, bracketed by the domain ends.
    Step { step: f64 },
    /// `count + 1` evenly spaced values; interior ones are rounded.
    Count { count: usize },
}

/// Produces the ascending tick values for `domain_min..=domain_max`.
///
/// Step, count and default ticks always start at `domain_min` and end at
/// `domain_max`. Interior count and default ticks are rounded to integers and
/// kept inside the domain, so on a narrow domain neighbouring ticks may
/// coincide.
#[must_use]
pub fn generate_ticks(domain_min: f64, domain_max: f64, spec: Option<&TickSpec>) -> TickSet {
    match spec {
        None => smallvec![
            domain_min,
            rounded_interior(domain_min, domain_max, (domain_min + domain_max) / 2.0),
            domain_max
        ],
        Some(TickSpec::Literal(values)) => values.iter().copied().collect(),
        Some(TickSpec::Step { step }) => step_ticks(domain_min, domain_max, *step),
        Some(TickSpec::Count { count }) => count_ticks(domain_min, domain_max, *count),
    }
}

/// Relative distance below which a step multiple is treated as a domain end.
const STEP_END_EPSILON: f64 = 1e-9;

fn step_ticks(domain_min: f64, domain_max: f64, step: f64) -> TickSet {
    let mut ticks = TickSet::new();
    if step.is_finite() && domain_min.is_finite() && domain_max.is_finite() {
        let step = step.max(1.0);
        let epsilon = step * STEP_END_EPSILON;
        let start = (domain_min / step).ceil() * step;
        let mut index = 0_u64;
        let mut value = start;
        while value <= domain_max {
            // Both ends are forced below; multiples on or near them would
            // duplicate or precede them.
            if value > domain_min + epsilon && value < domain_max - epsilon {
                ticks.push(value);
            }
            index += 1;
            value = start + index as f64 * step;
        }
    }

    ticks.insert(0, domain_min);
    if ticks.last() != Some(&domain_max) {
        ticks.push(domain_max);
    }
    ticks
}

fn count_ticks(domain_min: f64, domain_max: f64, count: usize) -> TickSet {
    let count = count.max(1);
    let span = domain_max - domain_min;
    (0..=count)
        .map(|index| match index {
            0 => domain_min,
            last if last == count => domain_max,
            _ => rounded_interior(
                domain_min,
                domain_max,
                domain_min + span * index as f64 / count as f64,
            ),
        })
        .collect()
}

fn rounded_interior(domain_min: f64, domain_max: f64, value: f64) -> f64 {
    round_half_up(value).max(domain_min).min(domain_max)
}

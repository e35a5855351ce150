use crate::core::{TickSpec, ValueDomain};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

use super::ChartConfig;

/// Upper bound on the number of ticks a step or count spec may produce.
pub const MAX_GENERATED_TICKS: usize = 10_000;

pub(super) fn validate_chart_config(config: &ChartConfig) -> ChartResult<()> {
    if !config.viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: config.viewport.width,
            height: config.viewport.height,
        });
    }

    let padding = config.frame_padding;
    for (side, value) in [
        ("top", padding.top),
        ("right", padding.right),
        ("bottom", padding.bottom),
        ("left", padding.left),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "frame padding `{side}` must be finite and >= 0"
            )));
        }
    }
    let plot = config.plot_area();
    if plot.width <= 0.0 || plot.height <= 0.0 {
        return Err(ChartError::InvalidConfig(
            "frame padding must leave a positive plotting area".to_owned(),
        ));
    }

    validate_gap_ratio("category gap", config.category_gap)?;
    validate_gap_ratio("series gap", config.series_gap)?;

    let axis = &config.value_axis;
    for (name, bound) in [("min", axis.min), ("max", axis.max)] {
        if bound.is_some_and(|value| !value.is_finite()) {
            return Err(ChartError::InvalidConfig(format!(
                "value axis {name} must be finite"
            )));
        }
    }
    if let (Some(min), Some(max)) = (axis.min, axis.max) {
        if min > max {
            return Err(ChartError::InvalidConfig(
                "value axis min must be <= max".to_owned(),
            ));
        }
    }
    if let Some(ticks) = &axis.ticks {
        validate_tick_spec(ticks)?;
    }

    if config.palette.is_empty() {
        return Err(ChartError::InvalidConfig(
            "palette must contain at least one color".to_owned(),
        ));
    }
    let colors = config
        .palette
        .iter()
        .chain(config.colors.values())
        .chain(config.series_color.iter());
    for color in colors {
        Color::from_hex(color)
            .map_err(|_| ChartError::InvalidConfig(format!("unsupported color `{color}`")))?;
    }

    if !config.stagger_ms.is_finite() || config.stagger_ms < 0.0 {
        return Err(ChartError::InvalidConfig(
            "stagger must be finite and >= 0".to_owned(),
        ));
    }

    let style = config.style;
    if !style.bar_corner_radius.is_finite() || style.bar_corner_radius < 0.0 {
        return Err(ChartError::InvalidConfig(
            "bar corner radius must be finite and >= 0".to_owned(),
        ));
    }
    for (name, value) in [
        ("line stroke width", style.line_stroke_width),
        ("dot radius", style.dot_radius),
        ("font size", style.font_size_px),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "{name} must be finite and > 0"
            )));
        }
    }

    Ok(())
}

/// Rejects a domain whose overrides and data resolve to `min > max`.
pub(super) fn validate_resolved_domain(domain: ValueDomain) -> ChartResult<()> {
    if !domain.min.is_finite() || !domain.max.is_finite() || domain.min > domain.max {
        return Err(ChartError::InvalidConfig(format!(
            "value domain resolves to min {} above max {}",
            domain.min, domain.max
        )));
    }
    Ok(())
}

/// Rejects step specs that would enumerate too many ticks over `domain`.
pub(super) fn validate_tick_budget(
    domain: ValueDomain,
    ticks: Option<&TickSpec>,
) -> ChartResult<()> {
    let Some(TickSpec::Step { step }) = ticks else {
        return Ok(());
    };
    let tick_count = (domain.span().abs() / step.max(1.0)).floor() + 1.0;
    if tick_count > MAX_GENERATED_TICKS as f64 {
        return Err(ChartError::InvalidConfig(format!(
            "tick step {step} produces more than {MAX_GENERATED_TICKS} ticks"
        )));
    }
    Ok(())
}

fn validate_gap_ratio(name: &str, ratio: f64) -> ChartResult<()> {
    if !ratio.is_finite() || !(0.0..1.0).contains(&ratio) {
        return Err(ChartError::InvalidConfig(format!(
            "{name} ratio must be finite and in [0, 1)"
        )));
    }
    Ok(())
}

fn validate_tick_spec(ticks: &TickSpec) -> ChartResult<()> {
    match ticks {
        TickSpec::Literal(values) => {
            if values.iter().any(|value| !value.is_finite()) {
                return Err(ChartError::InvalidConfig(
                    "literal ticks must be finite".to_owned(),
                ));
            }
        }
        TickSpec::Step { step } => {
            if !step.is_finite() {
                return Err(ChartError::InvalidConfig(
                    "tick step must be finite".to_owned(),
                ));
            }
        }
        TickSpec::Count { count } => {
            if *count > MAX_GENERATED_TICKS {
                return Err(ChartError::InvalidConfig(format!(
                    "tick count must be <= {MAX_GENERATED_TICKS}"
                )));
            }
        }
    }
    Ok(())
}

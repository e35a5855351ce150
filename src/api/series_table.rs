use indexmap::{IndexMap, IndexSet};
use tracing::{debug, warn};

use crate::core::primitives::ensure_finite;
use crate::core::{
    AxisLayout, BandLayout, ColorScale, Datum, GroupDatum, ValueDomain, ValueTick,
    generate_ticks, resolve_series_order,
};
use crate::error::ChartResult;

use super::validation::{validate_resolved_domain, validate_tick_budget};
use super::{
    BarGeometry, ChartConfig, ChartGeometry, ChartKind, LegendEntry, LineSeriesGeometry,
    build_legend,
};

/// Color-table key of the implicit series in single-series charts.
pub(super) const SINGLE_SERIES_KEY: &str = "value";

/// Category-by-series value matrix shared by every chart variant.
///
/// Single-series data is one implicit series, so bar and line layouts run the
/// same code for both shapes.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct SeriesTable {
    pub categories: Vec<String>,
    pub series_keys: Vec<String>,
    /// `values[category][series]`, with missing entries read as zero.
    pub values: Vec<Vec<f64>>,
    pub grouped: bool,
}

impl SeriesTable {
    pub fn from_single(data: &[Datum]) -> ChartResult<Self> {
        let mut values = Vec::with_capacity(data.len());
        for datum in data {
            values.push(vec![ensure_finite(datum.value, "datum value")?]);
        }
        Ok(Self {
            categories: data.iter().map(|datum| datum.label.clone()).collect(),
            series_keys: vec![SINGLE_SERIES_KEY.to_owned()],
            values,
            grouped: false,
        })
    }

    pub fn from_grouped(
        data: &[GroupDatum],
        explicit_order: Option<&[String]>,
    ) -> ChartResult<Self> {
        let series_keys = resolve_series_order(explicit_order, data);
        let mut values = Vec::with_capacity(data.len());
        for datum in data {
            let mut row = Vec::with_capacity(series_keys.len());
            for key in &series_keys {
                row.push(ensure_finite(datum.value_of(key), "series value")?);
            }
            values.push(row);
        }
        Ok(Self {
            categories: data.iter().map(|datum| datum.label.clone()).collect(),
            series_keys,
            values,
            grouped: true,
        })
    }

    /// Public series key of column `series_index`; `None` for the implicit series.
    pub fn public_key(&self, series_index: usize) -> Option<String> {
        if self.grouped {
            self.series_keys.get(series_index).cloned()
        } else {
            None
        }
    }

    pub fn value(&self, category_index: usize, series_index: usize) -> f64 {
        self.values
            .get(category_index)
            .and_then(|row| row.get(series_index))
            .copied()
            .unwrap_or(0.0)
    }

    fn all_values(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().flatten().copied()
    }
}

/// Pieces every variant resolves the same way before placing its marks.
pub(super) struct LayoutScaffold {
    pub kind: ChartKind,
    pub axis: AxisLayout,
    pub categories: BandLayout,
    pub value_ticks: Vec<ValueTick>,
    pub colors: ColorScale,
    pub legend: Vec<LegendEntry>,
}

impl LayoutScaffold {
    /// Validates `config` once, then resolves domain, ticks, axes and colors.
    pub fn build(
        kind: ChartKind,
        table: &SeriesTable,
        config: &ChartConfig,
        single_series_color: &str,
    ) -> ChartResult<Self> {
        config.validate()?;

        let axis_config = &config.value_axis;
        let domain = ValueDomain::resolve(axis_config.min, axis_config.max, table.all_values());
        validate_resolved_domain(domain)?;
        validate_tick_budget(domain, axis_config.ticks.as_ref())?;
        let ticks = generate_ticks(domain.min, domain.max, axis_config.ticks.as_ref());

        let axis = AxisLayout::new(
            config.orientation,
            config.plot_area(),
            domain,
            config.baseline,
        );
        let distinct: IndexSet<&str> = table.categories.iter().map(String::as_str).collect();
        if distinct.len() != table.categories.len() {
            warn!(
                categories = table.categories.len(),
                distinct = distinct.len(),
                "duplicate category labels, each keeps its own band"
            );
        }

        let (range_start, range_end) = axis.category_range();
        let categories = BandLayout::new(
            &table.categories,
            range_start,
            range_end,
            config.category_gap,
        );

        let (colors, legend) = if table.grouped {
            let colors = ColorScale::new(&table.series_keys, &config.colors, &config.palette);
            let legend = build_legend(&table.series_keys, &colors, config);
            (colors, legend)
        } else {
            let color = config
                .series_color
                .clone()
                .unwrap_or_else(|| single_series_color.to_owned());
            let overrides = IndexMap::from([(SINGLE_SERIES_KEY.to_owned(), color)]);
            let colors = ColorScale::new(&table.series_keys, &overrides, &config.palette);
            (colors, Vec::new())
        };

        debug!(
            ?kind,
            orientation = ?config.orientation,
            domain_min = domain.min,
            domain_max = domain.max,
            categories = categories.len(),
            series = table.series_keys.len(),
            ticks = ticks.len(),
            "resolved chart scaffold"
        );

        Ok(Self {
            kind,
            value_ticks: axis.value_ticks(&ticks),
            axis,
            categories,
            colors,
            legend,
        })
    }

    pub fn finish(
        self,
        table: &SeriesTable,
        config: &ChartConfig,
        bars: Vec<BarGeometry>,
        lines: Vec<LineSeriesGeometry>,
    ) -> ChartGeometry {
        ChartGeometry {
            kind: self.kind,
            orientation: self.axis.orientation(),
            plot: self.axis.plot(),
            domain: self.axis.domain(),
            baseline_position: self.axis.baseline_position(),
            category_band_width: self.categories.band_width(),
            category_ticks: self
                .axis
                .category_ticks(&self.categories, config.rotate_labels),
            value_ticks: self.value_ticks,
            series_order: if table.grouped {
                table.series_keys.clone()
            } else {
                Vec::new()
            },
            colors: self.colors,
            legend: self.legend,
            bars,
            lines,
        }
    }
}

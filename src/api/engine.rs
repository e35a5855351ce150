use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::core::{Datum, GroupDatum, Viewport};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::{build_render_frame, default_value_tick_label};
use super::{
    ChartConfig, ChartGeometry, layout_bar_chart, layout_grouped_bar_chart,
    layout_grouped_line_chart, layout_line_chart,
};

/// Display formatter for value-axis tick labels.
pub type ValueTickFormatterFn = Arc<dyn Fn(f64) -> String + Send + Sync + 'static>;

/// Lays out charts from a validated config and hands frames to a renderer.
///
/// Every render call recomputes geometry from its inputs; nothing is cached
/// between calls.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    config: ChartConfig,
    value_tick_formatter: Option<ValueTickFormatterFn>,
}

impl<R: Renderer> fmt::Debug for ChartEngine<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartEngine")
            .field("config", &self.config)
            .field(
                "has_value_tick_formatter",
                &self.value_tick_formatter.is_some(),
            )
            .finish_non_exhaustive()
    }
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            orientation = ?config.orientation,
            "chart engine initialized"
        );
        Ok(Self {
            renderer,
            config,
            value_tick_formatter: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Replaces the config; the previous one is kept when validation fails.
    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Updates the viewport, keeping the rest of the config.
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let mut config = self.config.clone();
        config.viewport = viewport;
        self.set_config(config)
    }

    /// Follows a measured container width, clamped to the minimum chart width.
    pub fn resize_to_container_width(&mut self, measured_width: f64) -> ChartResult<()> {
        let viewport = Viewport::from_container_width(measured_width, self.config.viewport.height);
        debug!(
            measured_width,
            width = viewport.width,
            "resizing to container"
        );
        self.set_viewport(viewport)
    }

    pub fn set_value_tick_formatter(&mut self, formatter: ValueTickFormatterFn) {
        self.value_tick_formatter = Some(formatter);
    }

    pub fn clear_value_tick_formatter(&mut self) {
        self.value_tick_formatter = None;
    }

    /// Label text for one value tick, using the installed formatter if any.
    #[must_use]
    pub fn format_value_tick(&self, value: f64) -> String {
        match &self.value_tick_formatter {
            Some(formatter) => formatter(value),
            None => default_value_tick_label(value),
        }
    }

    pub fn bar_chart_geometry(&self, data: &[Datum], ready: bool) -> ChartResult<ChartGeometry> {
        layout_bar_chart(data, &self.config, ready)
    }

    pub fn grouped_bar_chart_geometry(
        &self,
        data: &[GroupDatum],
        ready: bool,
    ) -> ChartResult<ChartGeometry> {
        layout_grouped_bar_chart(data, &self.config, ready)
    }

    pub fn line_chart_geometry(&self, data: &[Datum]) -> ChartResult<ChartGeometry> {
        layout_line_chart(data, &self.config)
    }

    pub fn grouped_line_chart_geometry(&self, data: &[GroupDatum]) -> ChartResult<ChartGeometry> {
        layout_grouped_line_chart(data, &self.config)
    }

    pub fn render_bar_chart(&mut self, data: &[Datum], ready: bool) -> ChartResult<ChartGeometry> {
        let geometry = self.bar_chart_geometry(data, ready)?;
        self.render_geometry(&geometry)?;
        Ok(geometry)
    }

    pub fn render_grouped_bar_chart(
        &mut self,
        data: &[GroupDatum],
        ready: bool,
    ) -> ChartResult<ChartGeometry> {
        let geometry = self.grouped_bar_chart_geometry(data, ready)?;
        self.render_geometry(&geometry)?;
        Ok(geometry)
    }

    pub fn render_line_chart(&mut self, data: &[Datum]) -> ChartResult<ChartGeometry> {
        let geometry = self.line_chart_geometry(data)?;
        self.render_geometry(&geometry)?;
        Ok(geometry)
    }

    pub fn render_grouped_line_chart(
        &mut self,
        data: &[GroupDatum],
    ) -> ChartResult<ChartGeometry> {
        let geometry = self.grouped_line_chart_geometry(data)?;
        self.render_geometry(&geometry)?;
        Ok(geometry)
    }

    /// Builds the frame for `geometry` without rendering it.
    pub fn build_render_frame(&self, geometry: &ChartGeometry) -> ChartResult<RenderFrame> {
        build_render_frame(geometry, &self.config, &|value| {
            self.format_value_tick(value)
        })
    }

    pub fn render_geometry(&mut self, geometry: &ChartGeometry) -> ChartResult<()> {
        let frame = self.build_render_frame(geometry)?;
        debug!(
            kind = ?geometry.kind,
            bars = geometry.bars.len(),
            lines = geometry.lines.len(),
            "rendering chart frame"
        );
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}

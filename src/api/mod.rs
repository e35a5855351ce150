//! Chart-level layout: config, per-variant geometry and the render pass.

mod bar_layout;
mod chart_config;
mod chart_geometry;
mod engine;
mod json_contract;
mod legend;
mod line_layout;
mod render_frame_builder;
mod series_table;
mod validation;

pub use bar_layout::{layout_bar_chart, layout_grouped_bar_chart};
pub use chart_config::{
    ChartConfig, ChartStyle, DEFAULT_BAR_COLOR, DEFAULT_LINE_COLOR, ValueAxisConfig,
};
pub use chart_geometry::{BarGeometry, ChartGeometry, ChartKind, LinePoint, LineSeriesGeometry};
pub use engine::{ChartEngine, ValueTickFormatterFn};
pub use json_contract::{GEOMETRY_SNAPSHOT_JSON_SCHEMA_V1, GeometrySnapshotJsonContractV1};
pub use legend::{LegendEntry, build_legend};
pub use line_layout::{layout_grouped_line_chart, layout_line_chart};
pub use render_frame_builder::{build_render_frame, default_value_tick_label};
pub use validation::MAX_GENERATED_TICKS;

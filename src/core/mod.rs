pub mod axis_layout;
pub mod band_scale;
pub mod color_scale;
pub mod domain;
pub mod group_band;
pub mod path;
pub mod primitives;
pub mod scale;
pub mod ticks;
pub mod types;

pub use axis_layout::{
    AxisLayout, AxisSide, BaselinePolicy, CategoryTick, LineSegment, Orientation, TextAnchor,
    ValueTick,
};
pub use band_scale::BandLayout;
pub use color_scale::{ColorScale, DEFAULT_PALETTE, default_palette};
pub use domain::ValueDomain;
pub use group_band::{GroupBandLayout, infer_series_order, resolve_series_order};
pub use path::{PathCommand, PathGeometry, build_area, build_line};
pub use scale::LinearScale;
pub use ticks::{TickSet, TickSpec, generate_ticks};
pub use types::{
    Datum, FramePadding, GroupDatum, MIN_CONTAINER_WIDTH_PX, PlotArea, Point, Rect, Viewport,
};

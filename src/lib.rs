//! bandchart: band-scale chart geometry for bar and line charts.
//!
//! `core` holds the scale, tick, color and path math. `api` composes it into
//! per-variant chart geometry and render frames, and `render` defines the
//! backend-agnostic primitives a drawing backend consumes.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartConfig, ChartEngine, ChartGeometry};
pub use error::{ChartError, ChartResult};

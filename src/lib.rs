//! chart-overlay: layout engine for a purely visual chart overlay layer.
//!
//! The engine consumes a geometry snapshot pushed by a host chart (bar/column,
//! stacked-bar, line or area) and derives positioned overlay primitives:
//! resized/restyled data markers, value labels, axis labels with icons and
//! stacked-axis labels. It never alters the underlying chart; drawing the
//! primitives is delegated to an [`render::OverlaySurface`] implementation.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod render;
pub mod telemetry;

pub use api::{OverlayEngine, OverlayEngineConfig};
pub use error::{OverlayError, OverlayResult};

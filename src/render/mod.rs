mod frame;
mod null_surface;
mod primitives;

pub use frame::{OverlayFrame, OverlayViewport};
pub use null_surface::NullSurface;
pub use primitives::{
    AxisLabelPrimitive, AxisStackLabelPrimitive, CornerRounding, MarkerFill, MarkerPrimitive,
    OverlayPrimitive, ValueLabelPrimitive,
};

use crate::error::OverlayResult;

/// Contract implemented by any host rendering surface.
///
/// Surfaces receive a fully materialized, deterministic `OverlayFrame` so
/// drawing code stays isolated from overlay layout logic.
pub trait OverlaySurface {
    fn commit(&mut self, frame: &OverlayFrame) -> OverlayResult<()>;
}

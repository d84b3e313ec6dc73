use crate::error::OverlayResult;
use crate::render::{OverlayFrame, OverlaySurface};

/// No-op surface used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub commit_count: usize,
    pub last_marker_count: usize,
    pub last_primitive_count: usize,
}

impl OverlaySurface for NullSurface {
    fn commit(&mut self, frame: &OverlayFrame) -> OverlayResult<()> {
        frame.validate()?;
        self.commit_count += 1;
        self.last_marker_count = frame.markers().count();
        self.last_primitive_count = frame.primitives.len();
        Ok(())
    }
}

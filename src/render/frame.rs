use serde::{Deserialize, Serialize};

use crate::core::{ChartSize, ClipWindow};
use crate::error::{OverlayError, OverlayResult};
use crate::render::{MarkerPrimitive, OverlayPrimitive};

/// Clipped viewport of the overlay layer, mirroring the host chart size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlayViewport {
    pub width: f64,
    pub height: f64,
    /// Pixels trimmed from the top edge.
    pub inset_top: f64,
    /// Pixels trimmed from the bottom edge.
    pub inset_bottom: f64,
}

impl OverlayViewport {
    pub const EMPTY: Self = Self {
        width: 0.0,
        height: 0.0,
        inset_top: 0.0,
        inset_bottom: 0.0,
    };

    /// Derives the visible viewport: the full chart size clipped
    /// symmetrically around the supplied window.
    #[must_use]
    pub fn from_clip(size: ChartSize, clip: ClipWindow) -> Self {
        Self {
            width: size.width,
            height: size.height,
            inset_top: clip.y,
            inset_bottom: size.height - (clip.y + clip.height),
        }
    }

    pub fn validate(self) -> OverlayResult<()> {
        let finite = self.width.is_finite()
            && self.height.is_finite()
            && self.inset_top.is_finite()
            && self.inset_bottom.is_finite();
        if !finite || self.width < 0.0 || self.height < 0.0 {
            return Err(OverlayError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Complete primitive set produced by one rebuild.
///
/// A frame replaces its predecessor wholesale; no primitive survives across
/// rebuilds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayFrame {
    pub viewport: OverlayViewport,
    pub primitives: Vec<OverlayPrimitive>,
}

impl OverlayFrame {
    #[must_use]
    pub const fn new(viewport: OverlayViewport) -> Self {
        Self {
            viewport,
            primitives: Vec::new(),
        }
    }

    /// Frame emitted for unsupported chart types and before the first
    /// geometry snapshot arrives.
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(OverlayViewport::EMPTY)
    }

    pub fn push(&mut self, primitive: OverlayPrimitive) {
        self.primitives.push(primitive);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn markers(&self) -> impl Iterator<Item = &MarkerPrimitive> {
        self.primitives.iter().filter_map(|primitive| match primitive {
            OverlayPrimitive::Marker(marker) => Some(marker),
            _ => None,
        })
    }

    pub fn validate(&self) -> OverlayResult<()> {
        self.viewport.validate()?;
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        Ok(())
    }
}

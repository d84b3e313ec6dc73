use tracing::debug;

use crate::core::{IconCatalog, OverlayStyle};
use crate::error::{OverlayError, OverlayResult};
use crate::render::{OverlayFrame, OverlaySurface};

use super::{
    OverlayEngineConfig, OverlaySnapshot, PlotAreaProperties, PlotAreaSettings, rebuild_overlay,
};

/// Overlay engine owning the current snapshot, style and committed frame.
///
/// Single-threaded and synchronous: every mutation triggers a full rebuild
/// that runs to completion before control returns, so the committed frame
/// always reflects the most recent update (last write wins). A failed
/// rebuild leaves the previously committed frame in place.
#[derive(Debug)]
pub struct OverlayEngine<S: OverlaySurface> {
    surface: S,
    style: OverlayStyle,
    icons: IconCatalog,
    snapshot: Option<OverlaySnapshot>,
    frame: OverlayFrame,
}

impl<S: OverlaySurface> OverlayEngine<S> {
    /// Creates an engine and commits the initial empty frame.
    pub fn new(mut surface: S, config: OverlayEngineConfig) -> OverlayResult<Self> {
        config.validate()?;
        let frame = OverlayFrame::empty();
        surface.commit(&frame)?;
        Ok(Self {
            surface,
            style: config.style,
            icons: config.icons,
            snapshot: None,
            frame,
        })
    }

    /// Replaces the geometry snapshot in one atomic call, then rebuilds.
    pub fn set_extension_data(&mut self, snapshot: OverlaySnapshot) -> OverlayResult<()> {
        debug!(
            chart_type = %snapshot.context.chart_type,
            series_count = snapshot.series.len(),
            "set extension data"
        );
        self.snapshot = Some(snapshot);
        self.rebuild_and_commit()
    }

    pub fn set_rounded(&mut self, rounded: bool) -> OverlayResult<()> {
        self.style.rounded = rounded;
        self.rebuild_and_commit()
    }

    pub fn set_size_increment(&mut self, percent: f64) -> OverlayResult<()> {
        if !percent.is_finite() {
            return Err(OverlayError::InvalidData(
                "size increment must be finite".to_owned(),
            ));
        }
        self.style.size_increment_percent = percent;
        self.rebuild_and_commit()
    }

    pub fn set_axis_label_color(&mut self, color: impl Into<String>) -> OverlayResult<()> {
        let color = color.into();
        if color.is_empty() {
            return Err(OverlayError::InvalidData(
                "axis label color must not be empty".to_owned(),
            ));
        }
        self.style.axis_label_color = color;
        self.rebuild_and_commit()
    }

    /// Applies a settings-panel partial update, then rebuilds once.
    ///
    /// See [`PlotAreaSettings`] for the falsy-is-no-op semantics.
    pub fn apply_settings(&mut self, settings: PlotAreaSettings) -> OverlayResult<()> {
        if settings.rounded == Some(true) {
            self.style.rounded = true;
        }
        if let Some(percent) = settings.size_increment {
            if percent.is_finite() && percent != 0.0 {
                self.style.size_increment_percent = percent;
            }
        }
        if let Some(color) = settings.axis_label_color {
            if !color.is_empty() {
                self.style.axis_label_color = color;
            }
        }
        self.rebuild_and_commit()
    }

    /// Current style mirrored as the outbound notification payload.
    #[must_use]
    pub fn properties(&self) -> PlotAreaProperties {
        PlotAreaProperties {
            rounded: self.style.rounded,
            size_increment: self.style.size_increment_percent,
            axis_label_color: self.style.axis_label_color.clone(),
        }
    }

    #[must_use]
    pub fn style(&self) -> &OverlayStyle {
        &self.style
    }

    #[must_use]
    pub fn icons(&self) -> &IconCatalog {
        &self.icons
    }

    /// Read-only view of the most recently committed frame.
    #[must_use]
    pub fn frame(&self) -> &OverlayFrame {
        &self.frame
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn rebuild_and_commit(&mut self) -> OverlayResult<()> {
        let frame = match &self.snapshot {
            Some(snapshot) => rebuild_overlay(snapshot, &self.style, &self.icons)?,
            None => OverlayFrame::empty(),
        };
        self.surface.commit(&frame)?;
        self.frame = frame;
        Ok(())
    }
}

use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};

/// Axis-aligned rectangle in the host chart's pixel coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn validate(self, what: &str) -> OverlayResult<()> {
        for (field, value) in [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(OverlayError::InvalidGeometry(format!(
                    "{what} rect field `{field}` must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// Host chart pixel size, as delivered with each geometry snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartSize {
    pub width: f64,
    pub height: f64,
}

impl ChartSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn validate(self) -> OverlayResult<()> {
        if !self.width.is_finite() || !self.height.is_finite() || self.width < 0.0 || self.height < 0.0
        {
            return Err(OverlayError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Vertical clip window the overlay is trimmed to, in chart pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipWindow {
    pub y: f64,
    pub height: f64,
}

impl ClipWindow {
    #[must_use]
    pub const fn new(y: f64, height: f64) -> Self {
        Self { y, height }
    }

    pub fn validate(self) -> OverlayResult<()> {
        if !self.y.is_finite() || !self.height.is_finite() {
            return Err(OverlayError::InvalidGeometry(
                "clip window fields must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Chart families the overlay layer knows how to decorate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    BarColumn,
    StackedBar,
    Line,
    Area,
}

impl ChartKind {
    /// Resolves a host chart-type name.
    ///
    /// `None` marks an unsupported type; the host chart passes through such
    /// states while transitioning between visualizations, so this is a
    /// normal condition rather than an error.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "barcolumn" => Some(Self::BarColumn),
            "stackedbar" => Some(Self::StackedBar),
            "line" => Some(Self::Line),
            "area" => Some(Self::Area),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BarColumn => "barcolumn",
            Self::StackedBar => "stackedbar",
            Self::Line => "line",
            Self::Area => "area",
        }
    }

    /// Stacked-family charts use the neutral value-label color instead of
    /// the series color.
    #[must_use]
    pub fn is_stacked_family(self) -> bool {
        self.name().starts_with("stacked")
    }
}

use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::error::{OverlayError, OverlayResult};

/// Corner treatment selected for a resolved marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CornerRounding {
    /// Square corners: rounding disabled, or an interior stack segment.
    None,
    /// All four corners rounded at the same radius.
    Uniform { radius: f64 },
    /// Value-side corners of a horizontal bar (top-right and bottom-right).
    RightEnd { radius: f64 },
    /// Top corners of a vertical bar.
    TopEnd { radius: f64 },
}

impl CornerRounding {
    #[must_use]
    pub fn radius(self) -> Option<f64> {
        match self {
            Self::None => None,
            Self::Uniform { radius } | Self::RightEnd { radius } | Self::TopEnd { radius } => {
                Some(radius)
            }
        }
    }

    pub fn validate(self) -> OverlayResult<()> {
        if let Some(radius) = self.radius() {
            if !radius.is_finite() || radius < 0.0 {
                return Err(OverlayError::InvalidGeometry(
                    "corner radius must be finite and >= 0".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Fill treatment for a marker primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MarkerFill {
    /// Solid fill with the resolved color.
    Solid,
    /// Stroked outline; triangle indicators render this way.
    Outline { stroke_width: f64 },
}

/// Resized/restyled visual stand-in for one data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub rect: Rect,
    pub color: String,
    pub fill: MarkerFill,
    pub rounding: CornerRounding,
    pub opacity: Option<f64>,
}

impl MarkerPrimitive {
    pub fn validate(&self) -> OverlayResult<()> {
        self.rect.validate("marker")?;
        self.rounding.validate()?;
        if self.color.is_empty() {
            return Err(OverlayError::InvalidData(
                "marker color must not be empty".to_owned(),
            ));
        }
        if let MarkerFill::Outline { stroke_width } = self.fill {
            if !stroke_width.is_finite() || stroke_width <= 0.0 {
                return Err(OverlayError::InvalidGeometry(
                    "marker stroke width must be finite and > 0".to_owned(),
                ));
            }
        }
        if let Some(opacity) = self.opacity {
            if !opacity.is_finite() || !(0.0..=1.0).contains(&opacity) {
                return Err(OverlayError::InvalidData(
                    "marker opacity must be finite and in [0, 1]".to_owned(),
                ));
            }
        }
        Ok(())
    }
}

/// Value label positioned next to its data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueLabelPrimitive {
    pub rect: Rect,
    pub text: String,
    pub color: String,
    pub font_size: f64,
}

impl ValueLabelPrimitive {
    pub fn validate(&self) -> OverlayResult<()> {
        self.rect.validate("value label")?;
        validate_font_size(self.font_size)
    }
}

/// Axis label box with room reserved for a trailing icon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelPrimitive {
    pub rect: Rect,
    pub text: String,
    pub color: String,
    pub font_size: f64,
    pub icon: Option<String>,
}

impl AxisLabelPrimitive {
    pub fn validate(&self) -> OverlayResult<()> {
        self.rect.validate("axis label")?;
        validate_font_size(self.font_size)
    }
}

/// Stack-total label rendered alongside an axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisStackLabelPrimitive {
    pub rect: Rect,
    pub text: String,
    pub color: String,
    pub font_size: f64,
}

impl AxisStackLabelPrimitive {
    pub fn validate(&self) -> OverlayResult<()> {
        self.rect.validate("axis stack label")?;
        validate_font_size(self.font_size)
    }
}

/// Any positioned overlay element produced by one rebuild.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OverlayPrimitive {
    Marker(MarkerPrimitive),
    ValueLabel(ValueLabelPrimitive),
    AxisLabel(AxisLabelPrimitive),
    AxisStackLabel(AxisStackLabelPrimitive),
}

impl OverlayPrimitive {
    pub fn validate(&self) -> OverlayResult<()> {
        match self {
            Self::Marker(marker) => marker.validate(),
            Self::ValueLabel(label) => label.validate(),
            Self::AxisLabel(label) => label.validate(),
            Self::AxisStackLabel(label) => label.validate(),
        }
    }
}

fn validate_font_size(font_size: f64) -> OverlayResult<()> {
    if !font_size.is_finite() || font_size <= 0.0 {
        return Err(OverlayError::InvalidData(
            "font size must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}

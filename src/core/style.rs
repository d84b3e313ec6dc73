use serde::{Deserialize, Serialize};

use crate::error::{OverlayError, OverlayResult};

/// Adjustable overlay appearance parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayStyle {
    /// Enables corner rounding on resolved markers.
    pub rounded: bool,
    /// Percentage growth applied symmetrically to a marker's footprint.
    /// Negative values shrink; the engine does not special-case sign.
    pub size_increment_percent: f64,
    /// Text color applied to axis and stacked-axis labels.
    pub axis_label_color: String,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            rounded: true,
            size_increment_percent: 0.0,
            axis_label_color: "#333".to_owned(),
        }
    }
}

impl OverlayStyle {
    /// Growth factor `k` derived from the percentage increment.
    #[must_use]
    pub fn growth_factor(&self) -> f64 {
        self.size_increment_percent / 100.0
    }

    pub fn validate(&self) -> OverlayResult<()> {
        if !self.size_increment_percent.is_finite() {
            return Err(OverlayError::InvalidData(
                "size increment must be finite".to_owned(),
            ));
        }
        if self.axis_label_color.is_empty() {
            return Err(OverlayError::InvalidData(
                "axis label color must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

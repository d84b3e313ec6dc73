use serde::{Deserialize, Serialize};

/// Partial style update emitted by the plot-area settings panel.
///
/// Panel compatibility: the panel surfaces unchanged inputs as falsy
/// values, so `Some(false)`, `Some(0)`, non-finite numbers and `Some("")`
/// are all treated as "no change", exactly like an absent field. Rounding
/// therefore cannot be disabled, nor the increment reset to zero, through
/// this path — use the direct engine setters for that.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotAreaSettings {
    #[serde(default)]
    pub rounded: Option<bool>,
    #[serde(default)]
    pub size_increment: Option<f64>,
    #[serde(default)]
    pub axis_label_color: Option<String>,
}

impl PlotAreaSettings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_rounded(mut self, rounded: bool) -> Self {
        self.rounded = Some(rounded);
        self
    }

    #[must_use]
    pub fn with_size_increment(mut self, percent: f64) -> Self {
        self.size_increment = Some(percent);
        self
    }

    #[must_use]
    pub fn with_axis_label_color(mut self, color: impl Into<String>) -> Self {
        self.axis_label_color = Some(color.into());
        self
    }
}

/// Outbound notification payload mirroring the current style state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotAreaProperties {
    pub rounded: bool,
    pub size_increment: f64,
    pub axis_label_color: String,
}

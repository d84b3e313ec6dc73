use serde::{Deserialize, Serialize};

use crate::core::types::{ChartKind, ChartSize, ClipWindow};
use crate::error::OverlayResult;

/// Immutable chart geometry context for one rebuild.
///
/// `chart_type` keeps the raw host name so transitional, unsupported types
/// stay representable; [`ChartContext::supported_kind`] resolves the four
/// kinds the overlay decorates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartContext {
    pub chart_type: String,
    #[serde(default)]
    pub is_horizontal: bool,
    #[serde(rename = "chartSize")]
    pub size: ChartSize,
    #[serde(rename = "clipPath")]
    pub clip_window: ClipWindow,
}

impl ChartContext {
    #[must_use]
    pub fn new(
        chart_type: impl Into<String>,
        is_horizontal: bool,
        size: ChartSize,
        clip_window: ClipWindow,
    ) -> Self {
        Self {
            chart_type: chart_type.into(),
            is_horizontal,
            size,
            clip_window,
        }
    }

    #[must_use]
    pub fn supported_kind(&self) -> Option<ChartKind> {
        ChartKind::from_name(&self.chart_type)
    }

    pub fn validate(&self) -> OverlayResult<()> {
        self.size.validate()?;
        self.clip_window.validate()
    }
}

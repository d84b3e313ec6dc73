use serde::{Deserialize, Serialize};

use crate::core::{IconCatalog, OverlayStyle};
use crate::error::OverlayResult;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load overlay
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayEngineConfig {
    #[serde(default)]
    pub style: OverlayStyle,
    #[serde(default = "IconCatalog::chart_standard")]
    pub icons: IconCatalog,
}

impl Default for OverlayEngineConfig {
    fn default() -> Self {
        Self {
            style: OverlayStyle::default(),
            icons: IconCatalog::chart_standard(),
        }
    }
}

impl OverlayEngineConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn with_icons(mut self, icons: IconCatalog) -> Self {
        self.icons = icons;
        self
    }

    pub fn validate(&self) -> OverlayResult<()> {
        self.style.validate()
    }
}

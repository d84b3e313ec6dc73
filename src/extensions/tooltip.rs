use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::core::IconCatalog;

/// Numeric fragment extracted from a formatted value for the progress bar.
static NUMBER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.0-9]+").expect("number pattern"));

/// One icon + label entry of the tooltip's header/detail list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipEntry {
    pub title: String,
    pub value: String,
}

impl TooltipEntry {
    #[must_use]
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// Header/detail payload pushed by the host per hover target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TooltipContent {
    #[serde(default)]
    pub header: Option<TooltipEntry>,
    #[serde(default)]
    pub details: Vec<TooltipEntry>,
}

impl TooltipContent {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_header(mut self, header: TooltipEntry) -> Self {
        self.header = Some(header);
        self
    }

    #[must_use]
    pub fn with_detail(mut self, entry: TooltipEntry) -> Self {
        self.details.push(entry);
        self
    }
}

/// Adjustable tooltip appearance parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipStyle {
    /// Upper bound of the header progress indicator.
    pub max: f64,
    /// Fill color of the progress indicator.
    pub color: String,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            max: 100.0,
            color: "lightblue".to_owned(),
        }
    }
}

impl TooltipStyle {
    /// Applies a settings-panel partial update with the same
    /// falsy-is-no-op quirk as [`crate::api::PlotAreaSettings`]:
    /// `Some(0)`, non-finite numbers and `Some("")` change nothing.
    pub fn apply_settings(&mut self, settings: TooltipSettings) {
        if let Some(color) = settings.color {
            if !color.is_empty() {
                self.color = color;
            }
        }
        if let Some(max) = settings.max {
            if max.is_finite() && max != 0.0 {
                self.max = max;
            }
        }
    }

    /// Current style mirrored as the outbound notification payload.
    #[must_use]
    pub fn properties(&self) -> TooltipProperties {
        TooltipProperties {
            color: self.color.clone(),
            max: self.max,
        }
    }
}

/// Partial update emitted by the tooltip settings panel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TooltipSettings {
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub max: Option<f64>,
}

/// Outbound notification payload mirroring the current tooltip style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipProperties {
    pub color: String,
    pub max: f64,
}

/// Progress indicator attached to the header row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressIndicator {
    pub value: f64,
    pub max: f64,
    pub color: String,
}

/// One resolved tooltip row: icon, label text, optional progress bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipRow {
    pub icon: Option<String>,
    pub title: String,
    pub text: String,
    pub progress: Option<ProgressIndicator>,
}

/// Builds the rendered row list: the header row first (carrying the
/// progress indicator), then detail rows in input order.
///
/// A header whose value has no numeric fragment produces no row at all,
/// since the progress bar would have nothing to show.
#[must_use]
pub fn build_tooltip_rows(
    content: &TooltipContent,
    style: &TooltipStyle,
    icons: &IconCatalog,
) -> Vec<TooltipRow> {
    let mut rows = Vec::with_capacity(content.details.len() + 1);
    if let Some(header) = &content.header {
        if let Some(value) = leading_number(&header.value) {
            rows.push(TooltipRow {
                icon: resolve_icon(icons, header),
                title: header.title.clone(),
                text: header.value.clone(),
                progress: Some(ProgressIndicator {
                    value,
                    max: style.max,
                    color: style.color.clone(),
                }),
            });
        }
    }
    for entry in &content.details {
        rows.push(TooltipRow {
            icon: resolve_icon(icons, entry),
            title: entry.title.clone(),
            text: entry.value.clone(),
            progress: None,
        });
    }
    rows
}

/// Entry value match, then entry title, then the info icon.
fn resolve_icon(icons: &IconCatalog, entry: &TooltipEntry) -> Option<String> {
    icons
        .get(&entry.value)
        .or_else(|| icons.get(&entry.title))
        .or_else(|| icons.get("Info"))
        .map(str::to_owned)
}

fn leading_number(value: &str) -> Option<f64> {
    NUMBER_PATTERN.find(value).and_then(|m| m.as_str().parse().ok())
}

use serde::{Deserialize, Serialize};

use crate::core::labels::{LabelTree, ValueLabel};
use crate::core::types::Rect;

/// One input series, in host delivery order.
///
/// Order is significant: the host lists the outermost stacked segment
/// first, so index 0 is the terminal segment of a stacked layout (see
/// [`crate::api::rebuild_overlay`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesDescriptor {
    pub color: String,
    #[serde(default)]
    pub show_as_triangle: bool,
    #[serde(default)]
    pub data_points: Vec<DataPoint>,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            show_as_triangle: false,
            data_points: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_triangles(mut self) -> Self {
        self.show_as_triangle = true;
        self
    }

    #[must_use]
    pub fn with_point(mut self, point: DataPoint) -> Self {
        self.data_points.push(point);
        self
    }
}

/// One data point: an optional marker rectangle and optional value labels.
///
/// Both halves are independently absent without that being an error; a
/// point with neither contributes no primitives.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    #[serde(default, rename = "dataInfo")]
    pub data: Option<DataRect>,
    #[serde(default, rename = "labelInfo")]
    pub label: Option<LabelTree<ValueLabel>>,
}

impl DataPoint {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            data: None,
            label: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, data: DataRect) -> Self {
        self.data = Some(data);
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: LabelTree<ValueLabel>) -> Self {
        self.label = Some(label);
        self
    }
}

/// Base rectangle of one data point, with optional per-point styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRect {
    #[serde(flatten)]
    pub rect: Rect,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub opacity: Option<f64>,
}

impl DataRect {
    #[must_use]
    pub const fn new(rect: Rect) -> Self {
        Self {
            rect,
            color: None,
            opacity: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }
}

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::Rect;

/// A possibly nested sequence of label descriptors.
///
/// Hosts deliver either a single descriptor or arbitrarily nested arrays of
/// them; the untagged representation accepts both JSON shapes verbatim.
/// All three label resolvers share the same order-preserving traversal so
/// flatten semantics cannot drift apart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabelTree<T> {
    Leaf(T),
    Group(Vec<LabelTree<T>>),
}

impl<T> LabelTree<T> {
    /// Flattens the tree into leaf references, preserving left-to-right order.
    #[must_use]
    pub fn leaves(&self) -> SmallVec<[&T; 8]> {
        let mut out = SmallVec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut SmallVec<[&'a T; 8]>) {
        match self {
            Self::Leaf(leaf) => out.push(leaf),
            Self::Group(children) => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
        }
    }

    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Group(children) => children.iter().map(LabelTree::leaf_count).sum(),
        }
    }
}

/// Value label attached to one data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueLabel {
    #[serde(flatten)]
    pub rect: Rect,
    /// Pre-formatted text; the overlay renders it verbatim.
    pub formatted_value: String,
    pub font_size: f64,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub variance_label_type: Option<String>,
}

impl ValueLabel {
    #[must_use]
    pub fn new(rect: Rect, formatted_value: impl Into<String>, font_size: f64) -> Self {
        Self {
            rect,
            formatted_value: formatted_value.into(),
            font_size,
            color: None,
            variance_label_type: None,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn with_variance_label_type(mut self, kind: impl Into<String>) -> Self {
        self.variance_label_type = Some(kind.into());
        self
    }
}

/// Axis label descriptor; `point_value` keys the icon lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLabel {
    #[serde(flatten)]
    pub rect: Rect,
    pub point_value: String,
    pub formatted_value: String,
    pub font_size: f64,
}

impl AxisLabel {
    #[must_use]
    pub fn new(
        rect: Rect,
        point_value: impl Into<String>,
        formatted_value: impl Into<String>,
        font_size: f64,
    ) -> Self {
        Self {
            rect,
            point_value: point_value.into(),
            formatted_value: formatted_value.into(),
            font_size,
        }
    }
}

/// Stack-total label descriptor; no icon, box used as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisStackLabel {
    #[serde(flatten)]
    pub rect: Rect,
    pub formatted_value: String,
    pub font_size: f64,
}

impl AxisStackLabel {
    #[must_use]
    pub fn new(rect: Rect, formatted_value: impl Into<String>, font_size: f64) -> Self {
        Self {
            rect,
            formatted_value: formatted_value.into(),
            font_size,
        }
    }
}

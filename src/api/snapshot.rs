use serde::{Deserialize, Serialize};

use crate::core::{AxisLabel, AxisStackLabel, ChartContext, LabelTree, SeriesDescriptor};
use crate::error::OverlayResult;

/// Complete geometry payload pushed by the host chart in one atomic call.
///
/// The serde shape matches the host wire format (`chartType`,
/// `isHorizontal`, `chartSize`, `clipPath`, camel-cased label trees), so a
/// host payload deserializes directly. Axis label trees are required —
/// hosts with no labels on an axis send an empty group — while stack-label
/// trees are genuinely optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlaySnapshot {
    #[serde(flatten)]
    pub context: ChartContext,
    #[serde(default)]
    pub series: Vec<SeriesDescriptor>,
    pub x_axis_labels: LabelTree<AxisLabel>,
    pub y_axis_labels: LabelTree<AxisLabel>,
    #[serde(default)]
    pub x_axis_stack_labels: Option<LabelTree<AxisStackLabel>>,
    #[serde(default)]
    pub y_axis_stack_labels: Option<LabelTree<AxisStackLabel>>,
}

impl OverlaySnapshot {
    #[must_use]
    pub fn new(context: ChartContext) -> Self {
        Self {
            context,
            series: Vec::new(),
            x_axis_labels: LabelTree::Group(Vec::new()),
            y_axis_labels: LabelTree::Group(Vec::new()),
            x_axis_stack_labels: None,
            y_axis_stack_labels: None,
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesDescriptor) -> Self {
        self.series.push(series);
        self
    }

    #[must_use]
    pub fn with_x_axis_labels(mut self, labels: LabelTree<AxisLabel>) -> Self {
        self.x_axis_labels = labels;
        self
    }

    #[must_use]
    pub fn with_y_axis_labels(mut self, labels: LabelTree<AxisLabel>) -> Self {
        self.y_axis_labels = labels;
        self
    }

    #[must_use]
    pub fn with_x_axis_stack_labels(mut self, labels: LabelTree<AxisStackLabel>) -> Self {
        self.x_axis_stack_labels = Some(labels);
        self
    }

    #[must_use]
    pub fn with_y_axis_stack_labels(mut self, labels: LabelTree<AxisStackLabel>) -> Self {
        self.y_axis_stack_labels = Some(labels);
        self
    }

    pub fn validate(&self) -> OverlayResult<()> {
        self.context.validate()
    }
}

use crate::core::{ChartKind, LabelTree, ValueLabel};
use crate::error::OverlayResult;
use crate::render::ValueLabelPrimitive;

/// Neutral text color used by stacked-family charts, where per-segment
/// colors would fight the label.
const STACKED_LABEL_COLOR: &str = "#666";

/// Resolves one data point's label tree into positioned text primitives,
/// flattening nested groups in input order at any depth.
pub fn resolve_value_labels(
    labels: &LabelTree<ValueLabel>,
    kind: ChartKind,
    series_color: &str,
) -> OverlayResult<Vec<ValueLabelPrimitive>> {
    let leaves = labels.leaves();
    let mut out = Vec::with_capacity(leaves.len());
    for label in leaves {
        label.rect.validate("value label input")?;
        let color = if label.variance_label_type.is_some() {
            // A variance label's own color always wins; an absent color
            // falls back to the family default.
            label
                .color
                .clone()
                .unwrap_or_else(|| default_label_color(kind, series_color))
        } else {
            default_label_color(kind, series_color)
        };
        out.push(ValueLabelPrimitive {
            rect: label.rect,
            text: label.formatted_value.clone(),
            color,
            font_size: label.font_size,
        });
    }
    Ok(out)
}

fn default_label_color(kind: ChartKind, series_color: &str) -> String {
    if kind.is_stacked_family() {
        STACKED_LABEL_COLOR.to_owned()
    } else {
        series_color.to_owned()
    }
}

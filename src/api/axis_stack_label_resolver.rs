use crate::core::{AxisStackLabel, LabelTree};
use crate::error::OverlayResult;
use crate::render::AxisStackLabelPrimitive;

/// Resolves a stack-total label tree into positioned text primitives.
///
/// Absent input (`None`) yields no primitives and is explicitly distinct
/// from a present-but-empty tree. No box inflation, no icon.
pub fn resolve_axis_stack_labels(
    labels: Option<&LabelTree<AxisStackLabel>>,
    axis_label_color: &str,
) -> OverlayResult<Vec<AxisStackLabelPrimitive>> {
    let Some(labels) = labels else {
        return Ok(Vec::new());
    };
    let leaves = labels.leaves();
    let mut out = Vec::with_capacity(leaves.len());
    for label in leaves {
        label.rect.validate("axis stack label input")?;
        out.push(AxisStackLabelPrimitive {
            rect: label.rect,
            text: label.formatted_value.clone(),
            color: axis_label_color.to_owned(),
            font_size: label.font_size,
        });
    }
    Ok(out)
}

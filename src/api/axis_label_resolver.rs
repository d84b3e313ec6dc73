use crate::core::{AxisLabel, IconCatalog, LabelTree, Rect};
use crate::error::OverlayResult;
use crate::render::AxisLabelPrimitive;

/// Extra box width reserved for the trailing icon and its padding.
const ICON_SLOT_WIDTH: f64 = 36.0;
/// Leftward shift keeping the inflated box aligned with the axis tick.
const BOX_SHIFT_LEFT: f64 = 30.0;
/// Upward nudge so the box clears the label background.
const BOX_SHIFT_UP: f64 = 2.0;

/// Resolves an axis label tree into positioned, iconized label boxes.
///
/// The input tree is required; a host that has no labels for an axis sends
/// an empty group, not an absent field.
pub fn resolve_axis_labels(
    labels: &LabelTree<AxisLabel>,
    axis_label_color: &str,
    icons: &IconCatalog,
) -> OverlayResult<Vec<AxisLabelPrimitive>> {
    let leaves = labels.leaves();
    let mut out = Vec::with_capacity(leaves.len());
    for label in leaves {
        label.rect.validate("axis label input")?;
        let rect = Rect::new(
            label.rect.x - BOX_SHIFT_LEFT,
            label.rect.y - BOX_SHIFT_UP,
            label.rect.width + ICON_SLOT_WIDTH,
            label.rect.height,
        );
        out.push(AxisLabelPrimitive {
            rect,
            text: label.formatted_value.clone(),
            color: axis_label_color.to_owned(),
            font_size: label.font_size,
            icon: resolve_icon(icons, &label.point_value),
        });
    }
    Ok(out)
}

/// Exact value match, then the generic city icon, then the info icon.
fn resolve_icon(icons: &IconCatalog, point_value: &str) -> Option<String> {
    icons
        .get(point_value)
        .or_else(|| icons.get("City"))
        .or_else(|| icons.get("Info"))
        .map(str::to_owned)
}

use tracing::{debug, trace};

use crate::core::{IconCatalog, OverlayStyle};
use crate::error::OverlayResult;
use crate::render::{OverlayFrame, OverlayPrimitive, OverlayViewport};

use super::{
    MarkerContext, OverlaySnapshot, resolve_axis_labels, resolve_axis_stack_labels,
    resolve_marker, resolve_value_labels,
};

/// Rebuilds the complete overlay primitive set for one snapshot/style pair.
///
/// Pure: identical inputs produce element-wise identical frames. A failed
/// rebuild yields an error, never a partially populated frame. Primitive
/// order is markers and value labels per series (series order, point order
/// within a series), then x-axis labels, y-axis labels, x-axis stack
/// labels, y-axis stack labels.
pub fn rebuild_overlay(
    snapshot: &OverlaySnapshot,
    style: &OverlayStyle,
    icons: &IconCatalog,
) -> OverlayResult<OverlayFrame> {
    style.validate()?;
    snapshot.validate()?;

    let Some(kind) = snapshot.context.supported_kind() else {
        // Normal transitional state while the host switches chart types.
        debug!(
            chart_type = %snapshot.context.chart_type,
            "unsupported chart type, emitting empty overlay"
        );
        return Ok(OverlayFrame::empty());
    };

    let viewport =
        OverlayViewport::from_clip(snapshot.context.size, snapshot.context.clip_window);
    let mut frame = OverlayFrame::new(viewport);

    for (index, series) in snapshot.series.iter().enumerate() {
        let context = MarkerContext {
            kind,
            is_horizontal: snapshot.context.is_horizontal,
            show_as_triangle: series.show_as_triangle,
            // The host lists the outermost stacked segment first, not last.
            is_outermost_segment: index == 0,
        };
        for point in &series.data_points {
            if let Some(data) = &point.data {
                let marker = resolve_marker(data, context, &series.color, style)?;
                frame.push(OverlayPrimitive::Marker(marker));
            }
            if let Some(labels) = &point.label {
                for primitive in resolve_value_labels(labels, kind, &series.color)? {
                    frame.push(OverlayPrimitive::ValueLabel(primitive));
                }
            }
        }
    }

    for labels in [&snapshot.x_axis_labels, &snapshot.y_axis_labels] {
        for primitive in resolve_axis_labels(labels, &style.axis_label_color, icons)? {
            frame.push(OverlayPrimitive::AxisLabel(primitive));
        }
    }
    for labels in [
        snapshot.x_axis_stack_labels.as_ref(),
        snapshot.y_axis_stack_labels.as_ref(),
    ] {
        for primitive in resolve_axis_stack_labels(labels, &style.axis_label_color)? {
            frame.push(OverlayPrimitive::AxisStackLabel(primitive));
        }
    }

    trace!(primitive_count = frame.primitives.len(), "overlay rebuilt");
    Ok(frame)
}

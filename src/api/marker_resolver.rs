use crate::core::{ChartKind, DataRect, OverlayStyle, Rect};
use crate::error::OverlayResult;
use crate::render::{CornerRounding, MarkerFill, MarkerPrimitive};

const TRIANGLE_STROKE_WIDTH: f64 = 3.0;
const TRIANGLE_RADIUS_BIAS: f64 = 3.0;

/// Per-series placement facts one marker resolution depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerContext {
    pub kind: ChartKind,
    pub is_horizontal: bool,
    pub show_as_triangle: bool,
    /// The series listed first is the outermost stacked segment; only that
    /// segment receives rounding on stacked bars.
    pub is_outermost_segment: bool,
}

/// Resolves one data point's base rectangle into its marker primitive.
///
/// Growth is symmetric about the base rect's center: extents scale by
/// `1 + k` and the origin shifts back by half the growth, so the resolved
/// rect stays centered on the base rect for any `k >= -1`.
pub fn resolve_marker(
    data: &DataRect,
    context: MarkerContext,
    series_color: &str,
    style: &OverlayStyle,
) -> OverlayResult<MarkerPrimitive> {
    data.rect.validate("marker input")?;
    style.validate()?;

    let k = style.growth_factor();
    let (rect, rounding, fill) = if context.show_as_triangle {
        resolve_triangle(data.rect, k)
    } else {
        match context.kind {
            ChartKind::BarColumn | ChartKind::StackedBar => resolve_bar(data.rect, context, k),
            ChartKind::Line | ChartKind::Area => resolve_point(data.rect, k),
        }
    };

    let rounding = if style.rounded {
        rounding
    } else {
        CornerRounding::None
    };
    // Empty per-point colors count as absent and fall back to the series.
    let color = match &data.color {
        Some(color) if !color.is_empty() => color.clone(),
        _ => series_color.to_owned(),
    };

    Ok(MarkerPrimitive {
        rect,
        color,
        fill,
        rounding,
        opacity: data.opacity,
    })
}

/// Triangle indicators override the per-chart-kind rules entirely: the
/// marker collapses to a centered square whose side is half the smaller
/// extent, drawn as an outline.
fn resolve_triangle(base: Rect, k: f64) -> (Rect, CornerRounding, MarkerFill) {
    let side = base.width.min(base.height) / 2.0 * (1.0 + k);
    let rect = Rect::new(
        base.x + (base.width - side) / 2.0,
        base.y + (base.height - side) / 2.0,
        side,
        side,
    );
    // The fixed bias pushes the radius past the half-side so the indicator
    // renders as a rounded blob.
    let rounding = CornerRounding::Uniform {
        radius: side / 2.0 + TRIANGLE_RADIUS_BIAS,
    };
    (
        rect,
        rounding,
        MarkerFill::Outline {
            stroke_width: TRIANGLE_STROKE_WIDTH,
        },
    )
}

/// Bars grow along the cross axis only and round on the value side: the
/// right corners when horizontal, the top corners otherwise.
fn resolve_bar(base: Rect, context: MarkerContext, k: f64) -> (Rect, CornerRounding, MarkerFill) {
    let (rect, rounding) = if context.is_horizontal {
        let height = base.height * (1.0 + k);
        let rect = Rect::new(base.x, base.y - base.height * k / 2.0, base.width, height);
        (
            rect,
            CornerRounding::RightEnd {
                radius: height / 2.0,
            },
        )
    } else {
        let width = base.width * (1.0 + k);
        let rect = Rect::new(base.x - base.width * k / 2.0, base.y, width, base.height);
        (
            rect,
            CornerRounding::TopEnd {
                radius: width / 2.0,
            },
        )
    };
    // Interior stacked segments keep square corners.
    let rounding = if context.kind == ChartKind::StackedBar && !context.is_outermost_segment {
        CornerRounding::None
    } else {
        rounding
    };
    (rect, rounding, MarkerFill::Solid)
}

/// Line/area points grow on both axes and round into a capsule.
fn resolve_point(base: Rect, k: f64) -> (Rect, CornerRounding, MarkerFill) {
    let width = base.width * (1.0 + k);
    let height = base.height * (1.0 + k);
    let rect = Rect::new(
        base.x - base.width * k / 2.0,
        base.y - base.height * k / 2.0,
        width,
        height,
    );
    (
        rect,
        CornerRounding::Uniform {
            radius: height / 2.0,
        },
        MarkerFill::Solid,
    )
}

use chart_overlay::api::{MarkerContext, resolve_marker};
use chart_overlay::core::{ChartKind, DataRect, OverlayStyle, Rect};
use chart_overlay::render::CornerRounding;
use proptest::prelude::*;

const KINDS: [ChartKind; 4] = [
    ChartKind::BarColumn,
    ChartKind::StackedBar,
    ChartKind::Line,
    ChartKind::Area,
];

proptest! {
    #[test]
    fn resolved_markers_stay_centered_on_the_base_rect(
        x in -1000.0f64..1000.0,
        y in -1000.0f64..1000.0,
        width in 0.0f64..400.0,
        height in 0.0f64..400.0,
        size_increment_percent in -100.0f64..300.0,
        kind_index in 0usize..4,
        is_horizontal in any::<bool>(),
        show_as_triangle in any::<bool>(),
        is_outermost_segment in any::<bool>()
    ) {
        let base = Rect::new(x, y, width, height);
        let context = MarkerContext {
            kind: KINDS[kind_index],
            is_horizontal,
            show_as_triangle,
            is_outermost_segment,
        };
        let style = OverlayStyle {
            size_increment_percent,
            ..OverlayStyle::default()
        };

        let marker = resolve_marker(&DataRect::new(base), context, "#2a6df4", &style)
            .expect("resolve");

        let (base_cx, base_cy) = base.center();
        let (cx, cy) = marker.rect.center();
        prop_assert!((cx - base_cx).abs() <= 1e-6, "cx {cx} vs {base_cx}");
        prop_assert!((cy - base_cy).abs() <= 1e-6, "cy {cy} vs {base_cy}");
    }

    #[test]
    fn growth_scales_extents_by_the_increment_factor(
        width in 0.0f64..400.0,
        height in 0.0f64..400.0,
        size_increment_percent in -100.0f64..300.0
    ) {
        let base = Rect::new(0.0, 0.0, width, height);
        let context = MarkerContext {
            kind: ChartKind::Line,
            is_horizontal: false,
            show_as_triangle: false,
            is_outermost_segment: true,
        };
        let style = OverlayStyle {
            size_increment_percent,
            ..OverlayStyle::default()
        };
        let marker = resolve_marker(&DataRect::new(base), context, "#2a6df4", &style)
            .expect("resolve");

        let factor = 1.0 + size_increment_percent / 100.0;
        prop_assert!((marker.rect.width - width * factor).abs() <= 1e-6);
        prop_assert!((marker.rect.height - height * factor).abs() <= 1e-6);
    }

    #[test]
    fn stacked_bars_round_exactly_when_outermost(
        is_outermost_segment in any::<bool>(),
        is_horizontal in any::<bool>(),
        size_increment_percent in -100.0f64..300.0
    ) {
        let base = Rect::new(10.0, 10.0, 24.0, 60.0);
        let context = MarkerContext {
            kind: ChartKind::StackedBar,
            is_horizontal,
            show_as_triangle: false,
            is_outermost_segment,
        };
        let style = OverlayStyle {
            size_increment_percent,
            ..OverlayStyle::default()
        };
        let marker = resolve_marker(&DataRect::new(base), context, "#2a6df4", &style)
            .expect("resolve");

        let rounded = !matches!(marker.rounding, CornerRounding::None);
        prop_assert_eq!(rounded, is_outermost_segment);
        if rounded {
            let expected = if is_horizontal {
                matches!(marker.rounding, CornerRounding::RightEnd { .. })
            } else {
                matches!(marker.rounding, CornerRounding::TopEnd { .. })
            };
            prop_assert!(expected, "rounding edge follows orientation");
        }
    }

    #[test]
    fn triangle_side_is_half_the_smaller_extent_scaled(
        width in 1.0f64..400.0,
        height in 1.0f64..400.0,
        size_increment_percent in -100.0f64..300.0
    ) {
        let base = Rect::new(0.0, 0.0, width, height);
        let context = MarkerContext {
            kind: ChartKind::BarColumn,
            is_horizontal: false,
            show_as_triangle: true,
            is_outermost_segment: true,
        };
        let style = OverlayStyle {
            size_increment_percent,
            ..OverlayStyle::default()
        };
        let marker = resolve_marker(&DataRect::new(base), context, "#2a6df4", &style)
            .expect("resolve");

        let side = width.min(height) / 2.0 * (1.0 + size_increment_percent / 100.0);
        prop_assert!((marker.rect.width - side).abs() <= 1e-6);
        prop_assert!((marker.rect.height - side).abs() <= 1e-6);
        match marker.rounding {
            CornerRounding::Uniform { radius } => {
                prop_assert!((radius - (side / 2.0 + 3.0)).abs() <= 1e-6);
            }
            other => prop_assert!(false, "expected uniform rounding, got {other:?}"),
        }
    }
}

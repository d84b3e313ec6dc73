use chart_overlay::api::{OverlaySnapshot, rebuild_overlay};
use chart_overlay::core::{
    AxisLabel, AxisStackLabel, ChartContext, ChartSize, ClipWindow, DataPoint, DataRect,
    IconCatalog, LabelTree, OverlayStyle, Rect, SeriesDescriptor, ValueLabel,
};
use chart_overlay::render::{CornerRounding, OverlayPrimitive};

fn context(chart_type: &str) -> ChartContext {
    ChartContext::new(
        chart_type,
        false,
        ChartSize::new(800.0, 600.0),
        ClipWindow::new(40.0, 500.0),
    )
}

fn stacked_two_series_snapshot() -> OverlaySnapshot {
    let point = |x: f64| {
        DataPoint::empty()
            .with_data(DataRect::new(Rect::new(x, 100.0, 20.0, 50.0)))
            .with_label(LabelTree::Leaf(ValueLabel::new(
                Rect::new(x, 80.0, 20.0, 14.0),
                "42",
                11.0,
            )))
    };
    OverlaySnapshot::new(context("stackedbar"))
        .with_series(SeriesDescriptor::new("#111111").with_point(point(10.0)))
        .with_series(SeriesDescriptor::new("#222222").with_point(point(40.0)))
        .with_x_axis_labels(LabelTree::Leaf(AxisLabel::new(
            Rect::new(10.0, 560.0, 60.0, 18.0),
            "California",
            "CA",
            11.0,
        )))
        .with_y_axis_labels(LabelTree::Leaf(AxisLabel::new(
            Rect::new(0.0, 100.0, 60.0, 18.0),
            "Juices",
            "Juices",
            11.0,
        )))
        .with_x_axis_stack_labels(LabelTree::Leaf(AxisStackLabel::new(
            Rect::new(10.0, 60.0, 30.0, 14.0),
            "84",
            11.0,
        )))
        .with_y_axis_stack_labels(LabelTree::Leaf(AxisStackLabel::new(
            Rect::new(700.0, 100.0, 30.0, 14.0),
            "84",
            11.0,
        )))
}

#[test]
fn unsupported_chart_types_yield_empty_frames() {
    for chart_type in ["donut", "scatter", "waterfall", ""] {
        let snapshot = stacked_two_series_snapshot();
        let snapshot = OverlaySnapshot {
            context: context(chart_type),
            ..snapshot
        };
        let frame = rebuild_overlay(&snapshot, &OverlayStyle::default(), &IconCatalog::default())
            .expect("rebuild");
        assert!(
            frame.is_empty(),
            "chart type {chart_type:?} must produce no primitives"
        );
    }
}

#[test]
fn viewport_is_clipped_symmetrically_around_the_window() {
    let snapshot = OverlaySnapshot::new(context("line"));
    let frame = rebuild_overlay(&snapshot, &OverlayStyle::default(), &IconCatalog::default())
        .expect("rebuild");

    assert_eq!(frame.viewport.width, 800.0);
    assert_eq!(frame.viewport.height, 600.0);
    assert_eq!(frame.viewport.inset_top, 40.0);
    assert_eq!(frame.viewport.inset_bottom, 60.0);
}

#[test]
fn primitives_follow_series_then_axis_order() {
    let snapshot = stacked_two_series_snapshot();
    let frame = rebuild_overlay(&snapshot, &OverlayStyle::default(), &IconCatalog::default())
        .expect("rebuild");

    let kinds: Vec<&'static str> = frame
        .primitives
        .iter()
        .map(|primitive| match primitive {
            OverlayPrimitive::Marker(_) => "marker",
            OverlayPrimitive::ValueLabel(_) => "value",
            OverlayPrimitive::AxisLabel(_) => "axis",
            OverlayPrimitive::AxisStackLabel(_) => "stack",
        })
        .collect();
    assert_eq!(
        kinds,
        [
            "marker", "value", "marker", "value", "axis", "axis", "stack", "stack"
        ]
    );
}

#[test]
fn first_series_is_the_outermost_stacked_segment() {
    let snapshot = stacked_two_series_snapshot();
    let frame = rebuild_overlay(&snapshot, &OverlayStyle::default(), &IconCatalog::default())
        .expect("rebuild");

    let markers: Vec<_> = frame.markers().collect();
    assert_eq!(markers.len(), 2);
    assert!(
        matches!(markers[0].rounding, CornerRounding::TopEnd { .. }),
        "series index 0 is the outermost segment and rounds"
    );
    assert_eq!(
        markers[1].rounding,
        CornerRounding::None,
        "later series are interior segments"
    );
}

#[test]
fn points_without_data_or_labels_contribute_nothing() {
    let snapshot = OverlaySnapshot::new(context("barcolumn"))
        .with_series(SeriesDescriptor::new("#123456").with_point(DataPoint::empty()));
    let frame = rebuild_overlay(&snapshot, &OverlayStyle::default(), &IconCatalog::default())
        .expect("rebuild");
    assert!(frame.is_empty());
}

#[test]
fn rebuild_is_idempotent_for_identical_inputs() {
    let snapshot = stacked_two_series_snapshot();
    let style = OverlayStyle {
        size_increment_percent: 15.0,
        ..OverlayStyle::default()
    };
    let icons = IconCatalog::chart_standard();

    let first = rebuild_overlay(&snapshot, &style, &icons).expect("first rebuild");
    let second = rebuild_overlay(&snapshot, &style, &icons).expect("second rebuild");
    assert_eq!(first, second);
}

#[test]
fn malformed_series_geometry_fails_the_whole_rebuild() {
    let snapshot = OverlaySnapshot::new(context("barcolumn")).with_series(
        SeriesDescriptor::new("#123456").with_point(
            DataPoint::empty().with_data(DataRect::new(Rect::new(0.0, 0.0, f64::INFINITY, 4.0))),
        ),
    );
    let result = rebuild_overlay(&snapshot, &OverlayStyle::default(), &IconCatalog::default());
    assert!(result.is_err(), "no partially populated frame is produced");
}

#[test]
fn non_finite_size_increment_is_rejected() {
    let snapshot = stacked_two_series_snapshot();
    let style = OverlayStyle {
        size_increment_percent: f64::NAN,
        ..OverlayStyle::default()
    };
    assert!(rebuild_overlay(&snapshot, &style, &IconCatalog::default()).is_err());
}

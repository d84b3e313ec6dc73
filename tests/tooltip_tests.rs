use chart_overlay::core::IconCatalog;
use chart_overlay::extensions::{
    TooltipContent, TooltipEntry, TooltipSettings, TooltipStyle, build_tooltip_rows,
};

fn icons() -> IconCatalog {
    IconCatalog::tooltip_standard()
}

#[test]
fn header_row_carries_the_progress_indicator() {
    let content = TooltipContent::new()
        .with_header(TooltipEntry::new("Gross Margin", "12.5%"))
        .with_detail(TooltipEntry::new("Location", "California"));
    let style = TooltipStyle::default();

    let rows = build_tooltip_rows(&content, &style, &icons());
    assert_eq!(rows.len(), 2);

    let header = &rows[0];
    assert_eq!(header.text, "12.5%");
    let progress = header.progress.as_ref().expect("progress indicator");
    assert_eq!(progress.value, 12.5);
    assert_eq!(progress.max, 100.0);
    assert_eq!(progress.color, "lightblue");

    assert!(rows[1].progress.is_none(), "detail rows have no bar");
}

#[test]
fn header_without_a_numeric_value_produces_no_row() {
    let content = TooltipContent::new()
        .with_header(TooltipEntry::new("Location", "California"))
        .with_detail(TooltipEntry::new("Store", "Downtown"));

    let rows = build_tooltip_rows(&content, &TooltipStyle::default(), &icons());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Store");
}

#[test]
fn icon_lookup_prefers_value_then_title_then_info() {
    let content = TooltipContent::new()
        .with_detail(TooltipEntry::new("Location", "California"))
        .with_detail(TooltipEntry::new("Quantity Sold", "1.2M"))
        .with_detail(TooltipEntry::new("Forecast", "sunny"));

    let rows = build_tooltip_rows(&content, &TooltipStyle::default(), &icons());
    assert!(
        rows[0].icon.as_deref().expect("icon").ends_with("/Location.png"),
        "value match wins"
    );
    assert!(
        rows[1].icon.as_deref().expect("icon").ends_with("/Quantity.png"),
        "title match is the second tier"
    );
    assert!(
        rows[2].icon.as_deref().expect("icon").ends_with("/Info.png"),
        "info icon is the final tier"
    );
}

#[test]
fn empty_catalog_yields_no_icons() {
    let content = TooltipContent::new().with_detail(TooltipEntry::new("Forecast", "sunny"));
    let rows = build_tooltip_rows(&content, &TooltipStyle::default(), &IconCatalog::new());
    assert_eq!(rows[0].icon, None);
}

#[test]
fn numeric_fragment_is_extracted_from_mixed_text() {
    let content = TooltipContent::new().with_header(TooltipEntry::new("Discount", "save 7.25 now"));
    let rows = build_tooltip_rows(&content, &TooltipStyle::default(), &icons());
    assert_eq!(rows[0].progress.as_ref().expect("progress").value, 7.25);
}

#[test]
fn style_settings_apply_with_the_falsy_quirk() {
    let mut style = TooltipStyle::default();

    style.apply_settings(TooltipSettings {
        color: Some(String::new()),
        max: Some(0.0),
    });
    assert_eq!(style.color, "lightblue");
    assert_eq!(style.max, 100.0);

    style.apply_settings(TooltipSettings {
        color: Some("#d04a2f".to_owned()),
        max: Some(250.0),
    });
    assert_eq!(style.color, "#d04a2f");
    assert_eq!(style.max, 250.0);

    let properties = style.properties();
    assert_eq!(properties.color, "#d04a2f");
    assert_eq!(properties.max, 250.0);
}

#[test]
fn custom_style_flows_into_the_progress_indicator() {
    let mut style = TooltipStyle::default();
    style.apply_settings(TooltipSettings {
        color: Some("red".to_owned()),
        max: Some(200.0),
    });

    let content = TooltipContent::new().with_header(TooltipEntry::new("Gross Margin", "150"));
    let rows = build_tooltip_rows(&content, &style, &icons());
    let progress = rows[0].progress.as_ref().expect("progress");
    assert_eq!(progress.value, 150.0);
    assert_eq!(progress.max, 200.0);
    assert_eq!(progress.color, "red");
}

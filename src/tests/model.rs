//! Tests for the dashboard data model.

use crate::*;

#[test]
fn test_widget_kind_display() {
    assert_eq!(WidgetKind::Donut.to_string(), "donut");
    assert_eq!(WidgetKind::Bar.to_string(), "bar");
    assert_eq!(WidgetKind::Empty.to_string(), "empty");
    assert_eq!(WidgetKind::Custom.to_string(), "custom");
}

#[test]
fn test_widget_kind_from_str_is_case_insensitive() {
    assert_eq!("DONUT".parse::<WidgetKind>(), Ok(WidgetKind::Donut));
    assert_eq!("Bar".parse::<WidgetKind>(), Ok(WidgetKind::Bar));
    assert_eq!("custom".parse::<WidgetKind>(), Ok(WidgetKind::Custom));
}

#[test]
fn test_widget_kind_from_str_rejects_unknown() {
    let err = "pie".parse::<WidgetKind>().expect_err("pie is not a widget kind");
    assert_eq!(err, ParseWidgetKindError("pie".to_string()));
    assert_eq!(err.to_string(), "invalid widget kind: pie");
}

#[test]
fn test_widget_new_has_no_chart_fields() {
    let widget = Widget::new("w", "Name", "Text", WidgetKind::Custom);
    assert!(widget.chart_data.is_none());
    assert!(widget.total.is_none());
    assert!(widget.subtitle.is_none());
}

#[test]
fn test_widget_bar_sets_total_and_subtitle() {
    let widget = Widget::bar(
        "w",
        "Images",
        "2 Total Images",
        2,
        "Total Images",
        vec![ChartDatum::new("Critical", 2, "#C1232B")],
    );
    assert_eq!(widget.kind, WidgetKind::Bar);
    assert_eq!(widget.total, Some(2.0));
    assert_eq!(widget.subtitle.as_deref(), Some("Total Images"));
}

#[test]
fn test_chart_sum_adds_all_values() {
    let widget = Widget::donut(
        "w",
        "Alerts",
        "Alerts",
        vec![
            ChartDatum::new("Critical", 45, "#C1232B"),
            ChartDatum::new("High", 85, "#E87C25"),
            ChartDatum::new("Medium", 120, "#FCCE10"),
        ],
    );
    assert_eq!(widget.chart_sum(), 250.0);
}

#[test]
fn test_chart_sum_without_chart_data_is_zero() {
    let widget = Widget::new("w", "Note", "text", WidgetKind::Custom);
    assert_eq!(widget.chart_sum(), 0.0);
}

#[test]
fn test_category_contains() {
    let category = Category::new(
        "cat",
        "Category",
        vec![Widget::new("a", "A", "", WidgetKind::Empty)],
    );
    assert!(category.contains("a"));
    assert!(!category.contains("b"));
}

#[test]
fn test_dashboard_category_lookup_and_count() {
    let dashboard = seed::initial_dashboard();
    assert!(dashboard.category("registry-scan").is_some());
    assert!(dashboard.category("ticket").is_none());
    assert_eq!(dashboard.widget_count(), 6);
}

#[test]
fn test_dashboard_default_is_empty() {
    let dashboard = Dashboard::default();
    assert!(dashboard.categories.is_empty());
    assert_eq!(dashboard.widget_count(), 0);
}

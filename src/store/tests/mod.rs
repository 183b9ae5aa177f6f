//! Tests for the DashboardStore module.
//!
//! Tests are organized into categories:
//! - `reducer`: Pure transition properties of `apply`
//! - `dispatch`: Store state replacement and revisions
//! - `subscriber`: Broadcast channel and notifications
//! - `scenarios`: End-to-end flows over the seed data


use crate::{Widget, WidgetKind};

/// Helper function to create a custom widget with the given ID.
pub(super) fn create_test_widget(id: &str) -> Widget {
    Widget::new(
        id.to_string(),
        format!("Widget {}", id),
        format!("text for {}", id),
        WidgetKind::Custom,
    )
}

/// Returns the widget ids of `category_id` in order, or an empty vec.
pub(super) fn widget_ids(dashboard: &crate::Dashboard, category_id: &str) -> Vec<String> {
    dashboard
        .category(category_id)
        .map(|c| c.widgets.iter().map(|w| w.id.clone()).collect())
        .unwrap_or_default()
}

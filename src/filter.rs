//! Search projection over the dashboard.
//!
//! The projection is recomputed from scratch for every query and never
//! touches the source dashboard. Categories always survive filtering, even
//! when none of their widgets match.

use crate::{Category, Dashboard, Widget};

/// Returns `true` if `widget`'s name or text contains `query`, ignoring case.
///
/// An empty query matches every widget.
pub fn matches(widget: &Widget, query: &str) -> bool {
    let needle = query.to_lowercase();
    matches_lowercase(widget, &needle)
}

fn matches_lowercase(widget: &Widget, needle: &str) -> bool {
    widget.name.to_lowercase().contains(needle) || widget.text.to_lowercase().contains(needle)
}

/// Projects `dashboard` onto the widgets matching `query`.
///
/// Every category is kept in its original order; each category's widget
/// sequence is the in-order subsequence of matching widgets.
pub fn filter_dashboard(dashboard: &Dashboard, query: &str) -> Dashboard {
    let needle = query.to_lowercase();
    Dashboard {
        categories: dashboard
            .categories
            .iter()
            .map(|category| Category {
                id: category.id.clone(),
                name: category.name.clone(),
                widgets: category
                    .widgets
                    .iter()
                    .filter(|w| matches_lowercase(w, &needle))
                    .cloned()
                    .collect(),
            })
            .collect(),
    }
}

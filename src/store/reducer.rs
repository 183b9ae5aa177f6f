//! Pure transition function for the dashboard.

use super::{Action, StoreError};
use crate::{Category, Dashboard, Widget};

/// Applies `action` to `state`, returning the next dashboard.
///
/// The input is never mutated. Only the widget sequence of the category
/// matching the action's `category_id` changes; all other categories are
/// cloned unchanged and category order is preserved.
///
/// # Errors
///
/// Returns [`StoreError::UnknownCategory`] when a `ToggleWidget` targets a
/// category that does not exist. `AddWidget` and `RemoveWidget` with an
/// unknown category return an unchanged copy of `state`.
pub fn apply(state: &Dashboard, action: &Action) -> Result<Dashboard, StoreError> {
    match action {
        Action::AddWidget {
            category_id,
            widget,
        } => Ok(append_widget(state, category_id, widget)),
        Action::RemoveWidget {
            category_id,
            widget_id,
        } => Ok(remove_widget(state, category_id, widget_id)),
        Action::ToggleWidget {
            category_id,
            widget,
        } => {
            let category =
                state
                    .category(category_id)
                    .ok_or_else(|| StoreError::UnknownCategory {
                        category_id: category_id.clone(),
                    })?;
            if category.contains(&widget.id) {
                Ok(remove_widget(state, category_id, &widget.id))
            } else {
                Ok(append_widget(state, category_id, widget))
            }
        }
    }
}

fn append_widget(state: &Dashboard, category_id: &str, widget: &Widget) -> Dashboard {
    map_category(state, category_id, |category| {
        let mut widgets = category.widgets.clone();
        widgets.push(widget.clone());
        widgets
    })
}

fn remove_widget(state: &Dashboard, category_id: &str, widget_id: &str) -> Dashboard {
    map_category(state, category_id, |category| {
        category
            .widgets
            .iter()
            .filter(|w| w.id != widget_id)
            .cloned()
            .collect()
    })
}

/// Rebuilds the dashboard, replacing the widgets of the matching category.
fn map_category<F>(state: &Dashboard, category_id: &str, f: F) -> Dashboard
where
    F: Fn(&Category) -> Vec<Widget>,
{
    Dashboard {
        categories: state
            .categories
            .iter()
            .map(|category| {
                if category.id == category_id {
                    Category {
                        id: category.id.clone(),
                        name: category.name.clone(),
                        widgets: f(category),
                    }
                } else {
                    category.clone()
                }
            })
            .collect(),
    }
}

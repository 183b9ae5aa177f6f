//! Transitions accepted by the dashboard store.

use crate::Widget;
use std::fmt;

/// A state transition dispatched to the store.
///
/// Every variant targets the widget sequence of exactly one category,
/// identified by `category_id`.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Append `widget` to the category.
    AddWidget {
        /// Target category.
        category_id: String,
        /// Widget to append.
        widget: Widget,
    },
    /// Remove every widget with `widget_id` from the category.
    RemoveWidget {
        /// Target category.
        category_id: String,
        /// Id of the widget(s) to remove.
        widget_id: String,
    },
    /// Remove `widget` if its id is present in the category, else append it.
    ToggleWidget {
        /// Target category. Must exist.
        category_id: String,
        /// Widget to add or whose id to remove.
        widget: Widget,
    },
}

impl Action {
    /// Builds an [`Action::AddWidget`].
    pub fn add_widget(category_id: impl Into<String>, widget: Widget) -> Self {
        Action::AddWidget {
            category_id: category_id.into(),
            widget,
        }
    }

    /// Builds an [`Action::RemoveWidget`].
    pub fn remove_widget(category_id: impl Into<String>, widget_id: impl Into<String>) -> Self {
        Action::RemoveWidget {
            category_id: category_id.into(),
            widget_id: widget_id.into(),
        }
    }

    /// Builds an [`Action::ToggleWidget`].
    pub fn toggle_widget(category_id: impl Into<String>, widget: Widget) -> Self {
        Action::ToggleWidget {
            category_id: category_id.into(),
            widget,
        }
    }

    /// Category targeted by this action.
    pub fn category_id(&self) -> &str {
        match self {
            Action::AddWidget { category_id, .. }
            | Action::RemoveWidget { category_id, .. }
            | Action::ToggleWidget { category_id, .. } => category_id,
        }
    }

    /// Id of the widget this action adds, removes or toggles.
    pub fn widget_id(&self) -> &str {
        match self {
            Action::AddWidget { widget, .. } | Action::ToggleWidget { widget, .. } => &widget.id,
            Action::RemoveWidget { widget_id, .. } => widget_id,
        }
    }

    /// Discriminant without payload.
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::AddWidget { .. } => ActionKind::AddWidget,
            Action::RemoveWidget { .. } => ActionKind::RemoveWidget,
            Action::ToggleWidget { .. } => ActionKind::ToggleWidget,
        }
    }
}

/// Payload-free action discriminant, carried in store notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    /// See [`Action::AddWidget`].
    AddWidget,
    /// See [`Action::RemoveWidget`].
    RemoveWidget,
    /// See [`Action::ToggleWidget`].
    ToggleWidget,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ActionKind::AddWidget => "add-widget",
            ActionKind::RemoveWidget => "remove-widget",
            ActionKind::ToggleWidget => "toggle-widget",
        };
        write!(f, "{}", s)
    }
}

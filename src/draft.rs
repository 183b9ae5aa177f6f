//! Custom widget drafts.
//!
//! The add-widget modal collects a category, a name and a text. A draft is
//! validated here before anything reaches the store; the store itself trusts
//! its caller and performs no field validation.

use crate::store::Action;
use crate::{Widget, WidgetKind};
use chrono::Utc;
use std::fmt;
use thiserror::Error;

/// Draft form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    /// Target category selector.
    Category,
    /// Widget name input.
    Name,
    /// Widget text input.
    Text,
}

impl DraftField {
    /// Field after this one in form order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            DraftField::Category => DraftField::Name,
            DraftField::Name => DraftField::Text,
            DraftField::Text => DraftField::Category,
        }
    }

    /// Field before this one in form order, wrapping around.
    pub fn previous(self) -> Self {
        match self {
            DraftField::Category => DraftField::Text,
            DraftField::Name => DraftField::Category,
            DraftField::Text => DraftField::Name,
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DraftField::Category => "category",
            DraftField::Name => "name",
            DraftField::Text => "text",
        };
        write!(f, "{}", s)
    }
}

/// Draft validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// A required field is empty or whitespace-only.
    #[error("Missing required field: {field}")]
    MissingRequiredField {
        /// The first empty field in form order.
        field: DraftField,
    },
}

/// In-progress custom widget form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WidgetDraft {
    /// Selected category id; empty means "choose a category".
    pub category_id: String,
    /// Widget name.
    pub name: String,
    /// Widget text.
    pub text: String,
}

impl WidgetDraft {
    /// Mutable access to a text field's buffer. `Category` is a selector and
    /// has no free-text buffer.
    pub fn field_mut(&mut self, field: DraftField) -> Option<&mut String> {
        match field {
            DraftField::Category => None,
            DraftField::Name => Some(&mut self.name),
            DraftField::Text => Some(&mut self.text),
        }
    }

    /// Checks that every field is filled.
    pub fn validate(&self) -> Result<(), DraftError> {
        let fields = [
            (DraftField::Category, &self.category_id),
            (DraftField::Name, &self.name),
            (DraftField::Text, &self.text),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                return Err(DraftError::MissingRequiredField { field });
            }
        }
        Ok(())
    }

    /// Validates the draft and turns it into an `AddWidget` action.
    ///
    /// The widget id comes from `ids`; name and text are kept verbatim.
    pub fn into_action(&self, ids: &mut WidgetIdGenerator) -> Result<Action, DraftError> {
        self.validate()?;
        let widget = Widget::new(ids.next_id(), &self.name, &self.text, WidgetKind::Custom);
        Ok(Action::add_widget(&self.category_id, widget))
    }

    /// Clears name and text after a confirmed submission. The selected
    /// category is kept.
    pub fn clear_inputs(&mut self) {
        self.name.clear();
        self.text.clear();
    }
}

/// Generates `widget-<unix-millis>` ids that never repeat within a process.
///
/// Two requests within the same millisecond (or a clock step backwards)
/// receive strictly increasing suffixes.
#[derive(Debug, Default)]
pub struct WidgetIdGenerator {
    last: i64,
}

impl WidgetIdGenerator {
    /// Creates a generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next unique widget id.
    pub fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        format!("widget-{}", self.last)
    }
}

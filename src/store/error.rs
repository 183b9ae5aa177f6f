//! Store error types.

use thiserror::Error;

/// Errors surfaced by the reducer.
///
/// `AddWidget` and `RemoveWidget` treat an unknown category as a no-op and
/// never produce an error; only `ToggleWidget` requires its category to exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The action referenced a category id that is not in the dashboard.
    #[error("Unknown category: {category_id}")]
    UnknownCategory {
        /// The id that matched no category.
        category_id: String,
    },
}

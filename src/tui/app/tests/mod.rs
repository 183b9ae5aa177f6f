pub(crate) use super::*;
pub(crate) use crate::tui::test_utils::seeded_app;

mod basic;

/// Widget ids of `category_id` in the app's store, in order.
pub(crate) fn store_ids(app: &App, category_id: &str) -> Vec<String> {
    app.store()
        .state()
        .category(category_id)
        .map(|c| c.widgets.iter().map(|w| w.id.clone()).collect())
        .unwrap_or_default()
}

/// Status message text, if any.
pub(crate) fn status(app: &App) -> Option<&str> {
    app.status_message.as_ref().map(|(msg, _)| msg.as_str())
}

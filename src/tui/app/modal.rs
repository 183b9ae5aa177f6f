//! Add-widget modal state.

use crate::catalog::CatalogTab;
use crate::draft::DraftField;

/// Which page of the modal is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalMode {
    /// Catalog checklist for the current tab.
    #[default]
    Catalog,
    /// Custom widget form.
    Custom,
}

/// Navigation state of the add-widget modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    /// Selected catalog tab.
    pub tab: CatalogTab,
    /// Highlighted checklist entry.
    pub cursor: usize,
    /// Current page.
    pub mode: ModalMode,
    /// Focused custom form field.
    pub field: DraftField,
}

impl Default for Modal {
    fn default() -> Self {
        Self {
            tab: CatalogTab::Cspm,
            cursor: 0,
            mode: ModalMode::Catalog,
            field: DraftField::Category,
        }
    }
}

impl Modal {
    /// Switches to `tab`, resetting the checklist cursor.
    pub fn set_tab(&mut self, tab: CatalogTab) {
        if self.tab != tab {
            self.tab = tab;
            self.cursor = 0;
        }
    }

    /// Moves the checklist cursor down, clamped to `count` entries.
    pub fn cursor_down(&mut self, count: usize) {
        self.cursor = (self.cursor + 1).min(count.saturating_sub(1));
    }

    /// Moves the checklist cursor up.
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Shows the custom widget form with the category selector focused.
    pub fn open_custom(&mut self) {
        self.mode = ModalMode::Custom;
        self.field = DraftField::Category;
    }

    /// Returns to the catalog checklist.
    pub fn back_to_catalog(&mut self) {
        self.mode = ModalMode::Catalog;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_tab_resets_cursor() {
        let mut modal = Modal {
            cursor: 1,
            ..Modal::default()
        };
        modal.set_tab(CatalogTab::Image);
        assert_eq!(modal.cursor, 0);
        assert_eq!(modal.tab, CatalogTab::Image);
    }

    #[test]
    fn set_same_tab_keeps_cursor() {
        let mut modal = Modal {
            cursor: 1,
            ..Modal::default()
        };
        modal.set_tab(CatalogTab::Cspm);
        assert_eq!(modal.cursor, 1);
    }

    #[test]
    fn cursor_is_clamped() {
        let mut modal = Modal::default();
        modal.cursor_down(2);
        modal.cursor_down(2);
        assert_eq!(modal.cursor, 1);
        modal.cursor_up();
        modal.cursor_up();
        assert_eq!(modal.cursor, 0);
        modal.cursor_down(0);
        assert_eq!(modal.cursor, 0);
    }

    #[test]
    fn custom_form_starts_on_category() {
        let mut modal = Modal {
            field: DraftField::Text,
            ..Modal::default()
        };
        modal.open_custom();
        assert_eq!(modal.mode, ModalMode::Custom);
        assert_eq!(modal.field, DraftField::Category);
        modal.back_to_catalog();
        assert_eq!(modal.mode, ModalMode::Catalog);
    }
}

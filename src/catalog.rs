//! Add-widget picker catalog.
//!
//! The picker groups catalog widgets under four tabs. Each tab maps to one
//! seed category id; a tab whose category is not in the seed (`Ticket`)
//! lists nothing. Checkbox state is derived from the *current* dashboard on
//! every render, never stored, so it stays consistent with removals made
//! from the dashboard view.

use crate::{Category, Dashboard, Widget};
use std::fmt;

/// Picker tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogTab {
    /// Cloud security posture management.
    Cspm,
    /// Cloud workload protection.
    Cwpp,
    /// Container image scanning.
    Image,
    /// Ticketing (no seed category).
    Ticket,
}

impl CatalogTab {
    /// All tabs in display order.
    pub const ALL: [CatalogTab; 4] = [
        CatalogTab::Cspm,
        CatalogTab::Cwpp,
        CatalogTab::Image,
        CatalogTab::Ticket,
    ];

    /// Tab label.
    pub fn label(self) -> &'static str {
        match self {
            CatalogTab::Cspm => "CSPM",
            CatalogTab::Cwpp => "CWPP",
            CatalogTab::Image => "Image",
            CatalogTab::Ticket => "Ticket",
        }
    }

    /// Category id listed under this tab.
    pub fn category_id(self) -> &'static str {
        match self {
            CatalogTab::Cspm => "cspm-executive",
            CatalogTab::Cwpp => "cwpp-dashboard",
            CatalogTab::Image => "registry-scan",
            CatalogTab::Ticket => "ticket",
        }
    }

    /// Zero-based position in [`CatalogTab::ALL`].
    pub fn index(self) -> usize {
        match self {
            CatalogTab::Cspm => 0,
            CatalogTab::Cwpp => 1,
            CatalogTab::Image => 2,
            CatalogTab::Ticket => 3,
        }
    }

    /// Tab at `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Next tab, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab, wrapping around.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for CatalogTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A catalog widget paired with its derived checkbox state.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry<'a> {
    /// Category the widget would be toggled into.
    pub category_id: &'a str,
    /// Catalog widget (from the seed).
    pub widget: &'a Widget,
    /// Whether a widget with this id is currently on the dashboard category.
    pub checked: bool,
}

/// The picker's source of catalog widgets.
///
/// Holds the seed categories; the catalog does not shrink when widgets are
/// removed from the dashboard.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Creates a catalog from the seed dashboard.
    pub fn new(seed: &Dashboard) -> Self {
        Self {
            categories: seed.categories.clone(),
        }
    }

    /// Seed categories, used by the custom widget category selector.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Seed category listed under `tab`, if any.
    pub fn category_for(&self, tab: CatalogTab) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == tab.category_id())
    }

    /// Entries for `tab` with checkbox state derived from `current`.
    pub fn entries<'a>(&'a self, tab: CatalogTab, current: &Dashboard) -> Vec<CatalogEntry<'a>> {
        let Some(category) = self.category_for(tab) else {
            return Vec::new();
        };
        let existing = current.category(&category.id);
        category
            .widgets
            .iter()
            .map(|widget| CatalogEntry {
                category_id: &category.id,
                widget,
                checked: existing.is_some_and(|c| c.contains(&widget.id)),
            })
            .collect()
    }
}

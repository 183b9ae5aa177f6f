//! Widget Dashboard library
//!
//! This crate provides the state store, search projection and terminal UI for
//! a categorized widget dashboard. Categories hold ordered widgets (donut
//! charts, bar charts, text panels); the user adds, removes and toggles
//! widgets through an add-widget modal and filters them with a search box.
//!
//! All dashboard state lives in memory for the lifetime of the process.
//! Mutation goes exclusively through [`store::DashboardStore::dispatch`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Add-widget picker catalog (tabs mapped to seed categories).
pub mod catalog;

/// Configuration utilities including XDG path resolution.
pub mod config;

/// Custom widget drafts, validation and id generation.
pub mod draft;

/// Search projection over the dashboard.
pub mod filter;

/// Logging initialization.
pub mod logging;

/// Panel renderers turning widgets into styled terminal lines.
pub mod panels;

/// Built-in seed dataset and seed file loading.
pub mod seed;

/// Dashboard state store and reducer.
pub mod store;

/// TUI module providing the terminal user interface for the dashboard.
pub mod tui;

/// Widget kind enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    /// Ring chart with a legend and a summed total.
    Donut,
    /// Horizontal stacked bar with percentage-of-total segments.
    Bar,
    /// Placeholder panel showing only its text.
    Empty,
    /// User-created text panel.
    Custom,
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            WidgetKind::Donut => "donut",
            WidgetKind::Bar => "bar",
            WidgetKind::Empty => "empty",
            WidgetKind::Custom => "custom",
        };
        write!(f, "{}", s)
    }
}

/// Error type for parsing WidgetKind from string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWidgetKindError(pub String);

impl fmt::Display for ParseWidgetKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid widget kind: {}", self.0)
    }
}

impl std::error::Error for ParseWidgetKindError {}

impl FromStr for WidgetKind {
    type Err = ParseWidgetKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "donut" => Ok(WidgetKind::Donut),
            "bar" => Ok(WidgetKind::Bar),
            "empty" => Ok(WidgetKind::Empty),
            "custom" => Ok(WidgetKind::Custom),
            _ => Err(ParseWidgetKindError(s.to_string())),
        }
    }
}

/// A single slice of chart data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    /// Legend label.
    pub name: String,
    /// Magnitude of the slice. Seed files must keep it finite and
    /// non-negative.
    pub value: f64,
    /// Hex color string such as `#C1232B`.
    pub color: String,
}

impl ChartDatum {
    /// Creates a chart datum.
    pub fn new(name: impl Into<String>, value: impl Into<f64>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            color: color.into(),
        }
    }
}

/// A single display panel belonging to a category.
///
/// Widgets are never mutated once created; transitions only append them to,
/// or filter them out of, a category's widget sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    /// Identifier, unique within the category the widget currently resides in.
    pub id: String,
    /// Card title, matched by search.
    pub name: String,
    /// Free text body, matched by search.
    pub text: String,
    /// Rendering kind.
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    /// Chart slices, required for donut and bar widgets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_data: Option<Vec<ChartDatum>>,
    /// Denominator for bar percentages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    /// Caption shown under a bar widget's total.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

impl Widget {
    /// Creates a widget of the given kind without chart data.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        text: impl Into<String>,
        kind: WidgetKind,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            text: text.into(),
            kind,
            chart_data: None,
            total: None,
            subtitle: None,
        }
    }

    /// Creates a donut widget with the given slices.
    pub fn donut(
        id: impl Into<String>,
        name: impl Into<String>,
        text: impl Into<String>,
        chart_data: Vec<ChartDatum>,
    ) -> Self {
        Self {
            chart_data: Some(chart_data),
            ..Self::new(id, name, text, WidgetKind::Donut)
        }
    }

    /// Creates a bar widget with the given slices, total and subtitle.
    pub fn bar(
        id: impl Into<String>,
        name: impl Into<String>,
        text: impl Into<String>,
        total: impl Into<f64>,
        subtitle: impl Into<String>,
        chart_data: Vec<ChartDatum>,
    ) -> Self {
        Self {
            chart_data: Some(chart_data),
            total: Some(total.into()),
            subtitle: Some(subtitle.into()),
            ..Self::new(id, name, text, WidgetKind::Bar)
        }
    }

    /// Sum of all chart values, or 0 for widgets without chart data.
    pub fn chart_sum(&self) -> f64 {
        self.chart_data
            .as_deref()
            .map(|data| data.iter().map(|d| d.value).sum())
            .unwrap_or(0.0)
    }
}

/// A named grouping of widgets shown as one dashboard section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category identifier.
    pub id: String,
    /// Section heading.
    pub name: String,
    /// Ordered widget sequence.
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl Category {
    /// Creates a category with the given widgets.
    pub fn new(id: impl Into<String>, name: impl Into<String>, widgets: Vec<Widget>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            widgets,
        }
    }

    /// Returns `true` if a widget with `widget_id` is in this category.
    pub fn contains(&self, widget_id: &str) -> bool {
        self.widgets.iter().any(|w| w.id == widget_id)
    }
}

/// Root aggregate: the ordered list of categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Ordered category sequence. Fixed after seeding.
    pub categories: Vec<Category>,
}

impl Dashboard {
    /// Creates a dashboard from categories.
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Looks up a category by id.
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Total widget count across all categories.
    pub fn widget_count(&self) -> usize {
        self.categories.iter().map(|c| c.widgets.len()).sum()
    }
}

#[cfg(test)]
mod tests;

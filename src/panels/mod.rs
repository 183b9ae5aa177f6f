//! Panel system for dashboard widget cards.
//!
//! This module defines the `Panel` trait that turns a [`Widget`] into the
//! styled lines shown inside its card, and the `PanelRegistry` that maps each
//! [`WidgetKind`] to a panel implementation.
//!
//! # Architecture
//!
//! Panels are stateless renderers. Each receives the widget and the inner
//! width of its card and returns owned ratatui `Line`s; the card border and
//! title are drawn by the dashboard view.
//!
//! # Example
//!
//! ```
//! use widget_dashboard::panels::PanelRegistry;
//! use widget_dashboard::{Widget, WidgetKind};
//!
//! let registry = PanelRegistry::new();
//! let widget = Widget::new("w", "Notes", "hello", WidgetKind::Custom);
//! let panel = registry.panel_for(widget.kind);
//! let lines = panel.render(&widget, 30);
//! assert_eq!(lines[0].to_string(), "hello");
//! ```

pub mod bar;
pub mod donut;
pub mod text;

use crate::{ChartDatum, Widget, WidgetKind};
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};
use std::collections::HashMap;

/// Trait for widget card bodies.
///
/// Panels must be thread-safe (`Send + Sync`) so the registry can be shared.
pub trait Panel: Send + Sync {
    /// Render the widget body as lines fitting `width` columns.
    fn render(&self, widget: &Widget, width: u16) -> Vec<Line<'static>>;

    /// Kind of widget this panel renders.
    fn kind(&self) -> WidgetKind;
}

/// Factory function type for creating panel instances.
pub type PanelFactory = fn() -> Box<dyn Panel>;

/// Registry mapping widget kinds to panels.
///
/// Panels are created once at construction; lookups are by kind.
pub struct PanelRegistry {
    panels: HashMap<WidgetKind, Box<dyn Panel>>,
}

impl PanelRegistry {
    /// Creates a registry with the built-in panels for every kind.
    pub fn new() -> Self {
        let mut reg = Self {
            panels: HashMap::new(),
        };
        reg.register(donut::create);
        reg.register(bar::create);
        reg.register(text::create_empty);
        reg.register(text::create_custom);
        reg
    }

    /// Registers the panel produced by `factory`, replacing any panel for
    /// the same kind.
    pub fn register(&mut self, factory: PanelFactory) {
        let panel = factory();
        self.panels.insert(panel.kind(), panel);
    }

    /// Returns the panel for `kind`.
    ///
    /// Falls back to the plain text panel when no panel is registered, so a
    /// widget always renders its text.
    pub fn panel_for(&self, kind: WidgetKind) -> &dyn Panel {
        match self.panels.get(&kind) {
            Some(panel) => panel.as_ref(),
            None => &text::FALLBACK,
        }
    }

    /// Renders `widget` with the panel registered for its kind.
    ///
    /// Donut and bar widgets without chart data render as text.
    pub fn render(&self, widget: &Widget, width: u16) -> Vec<Line<'static>> {
        let kind = match widget.kind {
            WidgetKind::Donut | WidgetKind::Bar if widget.chart_data.is_none() => {
                WidgetKind::Custom
            }
            kind => kind,
        };
        self.panel_for(kind).render(widget, width)
    }
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Color used for unparsable chart colors and empty bar tracks.
pub const FALLBACK_COLOR: Color = Color::Gray;

/// Parses a `#RRGGBB` string into an RGB color.
///
/// Anything else falls back to [`FALLBACK_COLOR`].
pub fn parse_color(hex: &str) -> Color {
    let Some(digits) = hex.strip_prefix('#') else {
        return FALLBACK_COLOR;
    };
    if digits.len() != 6 || !digits.is_ascii() {
        return FALLBACK_COLOR;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    match (channel(0), channel(2), channel(4)) {
        (Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => FALLBACK_COLOR,
    }
}

/// Percentage of `total` represented by `value`.
///
/// A zero (or non-finite) total yields 0 rather than dividing by zero.
pub fn percentage(value: f64, total: f64) -> f64 {
    if total <= 0.0 || !total.is_finite() {
        return 0.0;
    }
    value / total * 100.0
}

/// Splits `width` cells into one segment per datum, proportional to
/// `value / total`.
///
/// Segments are clamped so their sum never exceeds `width`; data whose
/// values add up to more than `total` is truncated from the right.
pub fn segment_widths(data: &[ChartDatum], total: f64, width: u16) -> Vec<u16> {
    let mut remaining = width;
    data.iter()
        .map(|datum| {
            let cells = (percentage(datum.value, total) / 100.0 * f64::from(width)).round();
            let cells = (cells as u16).min(remaining);
            remaining -= cells;
            cells
        })
        .collect()
}

/// Legend row: a colored dot and `name (value)`.
pub(crate) fn legend_line(datum: &ChartDatum) -> Line<'static> {
    Line::from(vec![
        Span::styled("● ", Style::default().fg(parse_color(&datum.color))),
        Span::raw(format!("{} ({})", datum.name, datum.value)),
    ])
}

/// Stacked bar line built from [`segment_widths`], padded with a gray track.
pub(crate) fn stacked_bar_line(data: &[ChartDatum], total: f64, width: u16) -> Line<'static> {
    let widths = segment_widths(data, total, width);
    let used: u16 = widths.iter().sum();
    let mut spans: Vec<Span<'static>> = data
        .iter()
        .zip(widths)
        .filter(|(_, cells)| *cells > 0)
        .map(|(datum, cells)| {
            Span::styled(
                "█".repeat(cells as usize),
                Style::default().fg(parse_color(&datum.color)),
            )
        })
        .collect();
    if used < width {
        spans.push(Span::styled(
            "░".repeat((width - used) as usize),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

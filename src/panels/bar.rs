//! Bar chart panel.
//!
//! Shows the widget's declared total and subtitle above a stacked bar whose
//! segments are each slice's percentage of that total, then an inline legend.
//! The total comes from the widget, not from the slices, so the bar may be
//! partially filled (or truncated when slices exceed it).

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::{legend_line, stacked_bar_line, Panel};
use crate::{Widget, WidgetKind};

/// Panel for [`WidgetKind::Bar`] widgets.
pub struct BarPanel;

impl Panel for BarPanel {
    fn render(&self, widget: &Widget, width: u16) -> Vec<Line<'static>> {
        let data = widget.chart_data.as_deref().unwrap_or_default();
        let total = widget.total.unwrap_or(0.0);

        let mut legend: Vec<Span<'static>> = Vec::new();
        for (i, datum) in data.iter().enumerate() {
            if i > 0 {
                legend.push(Span::raw("  "));
            }
            legend.extend(legend_line(datum).spans);
        }

        vec![
            Line::from(Span::styled(
                total.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                widget.subtitle.clone().unwrap_or_default(),
                Style::default().fg(Color::DarkGray),
            )),
            stacked_bar_line(data, total, width),
            Line::from(legend),
        ]
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Bar
    }
}

/// Factory for the registry.
pub fn create() -> Box<dyn Panel> {
    Box::new(BarPanel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::initial_dashboard;
    use crate::ChartDatum;

    #[test]
    fn renders_total_and_subtitle() {
        let dashboard = initial_dashboard();
        let widget = &dashboard.categories[2].widgets[0];
        let lines = BarPanel.render(widget, 40);
        assert_eq!(lines[0].to_string(), "1470");
        assert_eq!(lines[1].to_string(), "Total Vulnerabilities");
    }

    #[test]
    fn bar_is_partially_filled_against_declared_total() {
        let dashboard = initial_dashboard();
        let widget = &dashboard.categories[2].widgets[0];
        let bar = BarPanel.render(widget, 100)[2].to_string();
        // 9/1470 rounds to 1 cell, 150/1470 to 10 cells
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 11);
        assert_eq!(bar.chars().count(), 100);
    }

    #[test]
    fn legend_is_inline() {
        let dashboard = initial_dashboard();
        let widget = &dashboard.categories[2].widgets[1];
        let lines = BarPanel.render(widget, 40);
        assert_eq!(lines[3].to_string(), "● Critical (2)  ● High (2)");
    }

    #[test]
    fn missing_total_renders_zero_and_empty_bar() {
        let mut widget = Widget::new("w", "Bar", "", WidgetKind::Bar);
        widget.chart_data = Some(vec![ChartDatum::new("a", 5, "#C1232B")]);
        let lines = BarPanel.render(&widget, 10);
        assert_eq!(lines[0].to_string(), "0");
        assert_eq!(lines[1].to_string(), "");
        assert_eq!(lines[2].to_string(), "░".repeat(10));
    }
}

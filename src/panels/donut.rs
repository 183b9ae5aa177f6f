//! Donut chart panel.
//!
//! A terminal has no ring primitive, so the donut is drawn as its unrolled
//! circumference: one proportional strip, the summed total with a `Total`
//! caption, and a legend row per slice.
//!
//! ```text
//! ████████████░░░░░░░░
//! 4 Total
//! ● Connected (2)
//! ● Not Connected (2)
//! ```

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::{legend_line, stacked_bar_line, Panel};
use crate::{Widget, WidgetKind};

/// Panel for [`WidgetKind::Donut`] widgets.
pub struct DonutPanel;

impl Panel for DonutPanel {
    fn render(&self, widget: &Widget, width: u16) -> Vec<Line<'static>> {
        let data = widget.chart_data.as_deref().unwrap_or_default();
        let total = widget.chart_sum();

        let mut lines = Vec::with_capacity(data.len() + 2);
        lines.push(stacked_bar_line(data, total, width));
        lines.push(Line::from(vec![
            Span::styled(
                total.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" Total", Style::default().fg(Color::DarkGray)),
        ]));
        lines.extend(data.iter().map(legend_line));
        lines
    }

    fn kind(&self) -> WidgetKind {
        WidgetKind::Donut
    }
}

/// Factory for the registry.
pub fn create() -> Box<dyn Panel> {
    Box::new(DonutPanel)
}

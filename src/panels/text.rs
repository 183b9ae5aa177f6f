//! Text panels for empty and custom widgets.

use ratatui::{
    style::{Color, Style},
    text::Line,
};

use super::Panel;
use crate::{Widget, WidgetKind};

/// Glyph shown above an empty widget's text.
const EMPTY_GLYPH: &str = "▦";

/// Plain text used when no panel is registered for a kind.
pub(crate) static FALLBACK: TextPanel = TextPanel {
    kind: WidgetKind::Custom,
};

/// Panel rendering a widget's text.
///
/// `Empty` widgets get a centered placeholder glyph and dimmed, centered
/// text; every other kind renders its text one line per newline.
pub struct TextPanel {
    kind: WidgetKind,
}

impl Panel for TextPanel {
    fn render(&self, widget: &Widget, _width: u16) -> Vec<Line<'static>> {
        if self.kind == WidgetKind::Empty {
            let dim = Style::default().fg(Color::DarkGray);
            let mut lines = vec![Line::styled(EMPTY_GLYPH, dim).centered()];
            lines.extend(
                widget
                    .text
                    .lines()
                    .map(|l| Line::styled(l.to_string(), dim).centered()),
            );
            return lines;
        }
        widget
            .text
            .lines()
            .map(|l| Line::raw(l.to_string()))
            .collect()
    }

    fn kind(&self) -> WidgetKind {
        self.kind
    }
}

/// Factory for empty widgets.
pub fn create_empty() -> Box<dyn Panel> {
    Box::new(TextPanel {
        kind: WidgetKind::Empty,
    })
}

/// Factory for custom widgets.
pub fn create_custom() -> Box<dyn Panel> {
    Box::new(TextPanel {
        kind: WidgetKind::Custom,
    })
}

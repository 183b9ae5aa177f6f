//! Shared test utilities for TUI testing with ratatui TestBackend.
//!
//! Provides helpers for creating test terminals, extracting buffer content,
//! and asserting colors.

use crate::seed::initial_dashboard;
use crate::tui::app::{App, TuiSettings};
use ratatui::{backend::TestBackend, buffer::Buffer, style::Color, Terminal};

/// Creates a Terminal with TestBackend at the specified dimensions.
pub fn test_terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("failed to create test terminal")
}

/// Creates an app over the built-in seed with default settings.
pub fn seeded_app() -> App {
    App::new(initial_dashboard(), TuiSettings::default())
}

/// Extracts all text from a specific row in the buffer as a single String.
pub fn row_text(buffer: &Buffer, row: u16) -> String {
    let area = buffer.area();
    if row >= area.height {
        return String::new();
    }
    (0..area.width)
        .map(|col| {
            buffer
                .cell((col, row))
                .map(|cell| cell.symbol())
                .unwrap_or(" ")
        })
        .collect()
}

/// Checks if a specific row contains the given substring.
pub fn row_contains(buffer: &Buffer, row: u16, text: &str) -> bool {
    row_text(buffer, row).contains(text)
}

/// Finds the first row index that contains the given text, or None if not found.
pub fn find_row_with_text(buffer: &Buffer, text: &str) -> Option<u16> {
    (0..buffer.area().height).find(|row| row_contains(buffer, *row, text))
}

/// Asserts that the cell at (col, row) has the specified foreground color.
pub fn assert_fg_color(buffer: &Buffer, col: u16, row: u16, color: Color) {
    let cell = buffer
        .cell((col, row))
        .unwrap_or_else(|| panic!("cell at ({}, {}) does not exist", col, row));
    assert_eq!(
        cell.fg, color,
        "expected fg color {:?} at ({}, {}), got {:?}",
        color, col, row, cell.fg
    );
}

/// Finds the first occurrence of `text` in the specified row and checks
/// if the first character of that text has the specified foreground color.
///
/// Columns are counted in characters, so rows must not contain wide glyphs
/// before `text`.
pub fn assert_text_fg_in_row(buffer: &Buffer, row: u16, text: &str, color: Color) {
    let row_string = row_text(buffer, row);
    let byte_col = row_string
        .find(text)
        .unwrap_or_else(|| panic!("text '{}' not found in row {}: '{}'", text, row, row_string));
    let col = row_string[..byte_col].chars().count();
    assert_fg_color(buffer, col as u16, row, color);
}

/// Renders the full dashboard to a buffer and returns the buffer for inspection.
pub fn render_dashboard_to_buffer(app: &mut App, width: u16, height: u16) -> Buffer {
    let mut terminal = test_terminal(width, height);
    terminal
        .draw(|frame| {
            crate::tui::ui::render_dashboard(frame, app);
        })
        .expect("draw failed");
    terminal.backend().buffer().clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_has_requested_size() {
        let terminal = test_terminal(80, 24);
        let size = terminal.size().expect("should have size");
        assert_eq!(size.width, 80);
        assert_eq!(size.height, 24);
    }

    #[test]
    fn row_helpers_find_text() {
        let mut terminal = test_terminal(40, 10);
        terminal
            .draw(|frame| {
                use ratatui::layout::{Constraint, Direction, Layout};
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(1), Constraint::Length(1)])
                    .split(frame.area());
                frame.render_widget(ratatui::widgets::Paragraph::new("First Line"), chunks[0]);
                frame.render_widget(ratatui::widgets::Paragraph::new("Target Row"), chunks[1]);
            })
            .expect("draw failed");
        let buffer = terminal.backend().buffer();
        assert!(row_contains(buffer, 0, "First"));
        assert!(!row_contains(buffer, 0, "Target"));
        assert_eq!(find_row_with_text(buffer, "Target Row"), Some(1));
        assert_eq!(row_text(buffer, 99), "");
    }

    #[test]
    fn text_fg_uses_character_columns() {
        use ratatui::style::Style;
        use ratatui::text::{Line, Span};
        let mut terminal = test_terminal(20, 1);
        terminal
            .draw(|frame| {
                let line = Line::from(vec![
                    Span::raw("● "),
                    Span::styled("red", Style::default().fg(Color::Red)),
                ]);
                frame.render_widget(ratatui::widgets::Paragraph::new(line), frame.area());
            })
            .expect("draw failed");
        assert_text_fg_in_row(terminal.backend().buffer(), 0, "red", Color::Red);
    }
}

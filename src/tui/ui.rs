//! Main rendering orchestration for the TUI dashboard.
//!
//! Provides the top-level `render_dashboard` function that composes the
//! header (breadcrumb, search box, title), the category card grid, the
//! footer, and the add-widget modal overlay.

use crate::tui::app::{App, Focus};
use crate::tui::views::dashboard::render_categories;
use crate::tui::views::modal::render_modal;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Instant;

/// Breadcrumb shown at the top left.
const BREADCRUMB_TEXT: &str = "Home > Dashboard V2";

/// Page title above the category sections.
const TITLE_TEXT: &str = "CNAPP Dashboard";

/// Search box placeholder.
const SEARCH_PLACEHOLDER: &str = "Search anything...";

/// Width of the search box including its label.
const SEARCH_WIDTH: usize = 36;

/// Footer text showing available keybindings on the dashboard.
const FOOTER_TEXT: &str = "[j/k] Navigate  [/] Search  [a] Add  [x] Remove  [q] Quit";

/// Footer text while the search box has focus.
const SEARCH_FOOTER_TEXT: &str = "Type to filter  [Enter/Esc] Done";

/// Renders the full dashboard: header, card grid, footer, and modal.
pub fn render_dashboard(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // breadcrumb + search
            Constraint::Length(1), // title + add hint
            Constraint::Min(3),    // categories
            Constraint::Length(1), // footer
        ])
        .split(area);

    frame.render_widget(Paragraph::new(header_line(app, chunks[0].width)), chunks[0]);
    frame.render_widget(Paragraph::new(title_line(chunks[1].width)), chunks[1]);

    render_categories(frame, chunks[2], app);

    frame.render_widget(Paragraph::new(footer_line(app)), chunks[3]);

    if app.modal.is_some() {
        render_modal(frame, centered_modal_area(area), app);
    }
}

/// Breadcrumb on the left, search box on the right.
fn header_line(app: &App, width: u16) -> Line<'static> {
    let focused = app.focus == Focus::Search && app.modal.is_none();
    let label_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let label = "/ Search: ";
    let mut query = if app.search.is_empty() && !focused {
        Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.search.clone())
    };
    if focused {
        query = Span::styled(format!("{}▏", app.search), Style::default().fg(Color::White));
    }

    let search_len = label.chars().count() + query.content.chars().count();
    let padding = (width as usize)
        .saturating_sub(BREADCRUMB_TEXT.chars().count())
        .saturating_sub(search_len.max(SEARCH_WIDTH));

    Line::from(vec![
        Span::styled(BREADCRUMB_TEXT, Style::default().fg(Color::Cyan)),
        Span::raw(" ".repeat(padding)),
        Span::styled(label, label_style),
        query,
    ])
}

/// Page title on the left, add-widget hint on the right.
fn title_line(width: u16) -> Line<'static> {
    let hint = "[a] Add Widget +";
    let padding = (width as usize)
        .saturating_sub(TITLE_TEXT.chars().count())
        .saturating_sub(hint.chars().count());
    Line::from(vec![
        Span::styled(TITLE_TEXT, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" ".repeat(padding)),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ])
}

/// Status message while it is live, otherwise keybinding hints.
fn footer_line(app: &App) -> Line<'static> {
    if let Some((msg, expiry)) = &app.status_message {
        if Instant::now() < *expiry {
            return Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
        }
    }
    let hints = if app.focus == Focus::Search {
        SEARCH_FOOTER_TEXT
    } else {
        FOOTER_TEXT
    };
    Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
}

/// Centered rectangle for the modal, shrunk to fit small terminals.
fn centered_modal_area(area: Rect) -> Rect {
    let width = 64u16.min(area.width.saturating_sub(2));
    let height = 20u16.min(area.height.saturating_sub(2));
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

//! Add-widget modal overlay.
//!
//! Two pages share one frame: the catalog checklist for the selected tab and
//! the custom widget form. Checkbox state is read from the store on every
//! render.

use crate::catalog::CatalogTab;
use crate::draft::DraftField;
use crate::tui::app::{App, ModalMode};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Intro line under the modal title.
pub const INTRO_TEXT: &str = "Personalize your dashboard by adding the following widget";

/// Renders the modal into `area`. Does nothing when no modal is open or the
/// area is too small to be useful.
pub fn render_modal(frame: &mut Frame, area: Rect, app: &App) {
    let Some(modal) = &app.modal else {
        return;
    };
    if area.width < 20 || area.height < 6 {
        return;
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(" Add Widget ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        Line::styled(INTRO_TEXT, Style::default().fg(Color::DarkGray)),
        Line::raw(""),
        tabs_line(modal.tab),
        Line::raw(""),
    ];
    match modal.mode {
        ModalMode::Catalog => catalog_lines(app, modal.tab, modal.cursor, &mut lines),
        ModalMode::Custom => custom_lines(app, modal.field, &mut lines),
    }

    // Action hints pinned to the last inner row
    let hints = match modal.mode {
        ModalMode::Catalog => "[Space] Toggle  [c] Custom  [Tab] Next tab  [Enter/Esc] Done",
        ModalMode::Custom => "[Tab] Field  [Ctrl+J] Newline  [Enter] Confirm  [Esc] Back",
    };
    let body_height = inner.height.saturating_sub(1);
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        Rect::new(inner.x, inner.y, inner.width, body_height),
    );
    frame.render_widget(
        Paragraph::new(Line::styled(hints, Style::default().fg(Color::DarkGray))),
        Rect::new(inner.x, inner.y + body_height, inner.width, 1),
    );
}

/// Tab strip with the selected tab highlighted.
fn tabs_line(selected: CatalogTab) -> Line<'static> {
    let mut spans = Vec::new();
    for tab in CatalogTab::ALL {
        let style = if tab == selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("{} {}", tab.index() + 1, tab.label()),
            style,
        ));
        spans.push(Span::raw("   "));
    }
    Line::from(spans)
}

fn catalog_lines(app: &App, tab: CatalogTab, cursor: usize, lines: &mut Vec<Line<'static>>) {
    let catalog = app.catalog();
    match catalog.category_for(tab) {
        Some(category) => lines.push(Line::styled(
            category.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        None => lines.push(Line::styled(
            "No widgets in this tab",
            Style::default().fg(Color::DarkGray),
        )),
    }

    for (i, entry) in catalog
        .entries(tab, app.store().state())
        .into_iter()
        .enumerate()
    {
        let mark = if entry.checked { "[x] " } else { "[ ] " };
        let style = if i == cursor {
            Style::default().fg(Color::Black).bg(Color::Cyan)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(if i == cursor { "▸ " } else { "  " }, style),
            Span::styled(format!("{mark}{}", entry.widget.name), style),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "+ Create Custom Widget [c]",
        Style::default().fg(Color::Blue),
    ));
}

fn custom_lines(app: &App, focused: DraftField, lines: &mut Vec<Line<'static>>) {
    let field_style = |field: DraftField| {
        if field == focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };
    let cursor = |field: DraftField| if field == focused { "▏" } else { "" };

    let category = app
        .draft_category_name()
        .unwrap_or("Choose a category")
        .to_string();
    lines.push(Line::styled("Select Category", field_style(DraftField::Category)));
    lines.push(Line::raw(format!("  < {category} >")));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Widget Name", field_style(DraftField::Name)));
    lines.push(Line::raw(format!("  {}{}", app.draft.name, cursor(DraftField::Name))));
    lines.push(Line::raw(""));

    // One row per text line; the cursor trails the last one
    lines.push(Line::styled("Widget Text", field_style(DraftField::Text)));
    let text_rows: Vec<&str> = app.draft.text.split('\n').collect();
    let last = text_rows.len() - 1;
    for (i, row) in text_rows.into_iter().enumerate() {
        let mark = if i == last { cursor(DraftField::Text) } else { "" };
        lines.push(Line::raw(format!("  {row}{mark}")));
    }
    lines.push(Line::raw(""));

    lines.push(Line::styled(
        "← Back to widget list [Esc]",
        Style::default().fg(Color::Blue),
    ));
}

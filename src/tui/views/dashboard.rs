//! Category sections and widget card grid.
//!
//! Each category renders as a bold title followed by rows of cards: one card
//! per (filtered) widget and a trailing "Add Widget" card. The grid scrolls
//! vertically so the selected card stays fully visible.

use crate::panels::PanelRegistry;
use crate::tui::app::App;
use crate::{Category, Widget};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of a card row, borders included.
pub const CARD_HEIGHT: u16 = 9;

/// Label of the trailing card in every category.
pub const ADD_CARD_TEXT: &str = "+ Add Widget";

/// What a card shows.
#[derive(Debug, Clone, Copy)]
enum Card<'a> {
    Widget(&'a Widget),
    Add,
}

/// A horizontal band of the grid in content coordinates.
#[derive(Debug)]
enum Row<'a> {
    Title(&'a Category),
    Cards(Vec<(usize, Card<'a>)>),
}

impl Row<'_> {
    fn height(&self) -> u16 {
        match self {
            Row::Title(_) => 1,
            Row::Cards(_) => CARD_HEIGHT,
        }
    }
}

/// Lays out every category of `categories` into rows with content y offsets.
fn layout_rows(categories: &[Category], columns: u16) -> Vec<(u16, Row<'_>)> {
    let columns = usize::from(columns.max(1));
    let mut rows = Vec::new();
    let mut y: u16 = 0;
    let mut slot = 0usize;
    for (i, category) in categories.iter().enumerate() {
        if i > 0 {
            y = y.saturating_add(1);
        }
        rows.push((y, Row::Title(category)));
        y = y.saturating_add(1);

        let mut cards: Vec<(usize, Card<'_>)> = category
            .widgets
            .iter()
            .map(|w| {
                slot += 1;
                (slot - 1, Card::Widget(w))
            })
            .collect();
        cards.push((slot, Card::Add));
        slot += 1;

        for chunk in cards.chunks(columns) {
            rows.push((y, Row::Cards(chunk.to_vec())));
            y = y.saturating_add(CARD_HEIGHT);
        }
    }
    rows
}

/// Scroll offset that keeps the band `[top, top + height)` inside a viewport
/// of `viewport` rows. A band taller than the viewport is aligned to its top.
fn scroll_to_show(scroll: u16, top: u16, height: u16, viewport: u16) -> u16 {
    if top < scroll {
        top
    } else if top.saturating_add(height) > scroll.saturating_add(viewport) {
        top.saturating_add(height).saturating_sub(viewport).min(top)
    } else {
        scroll
    }
}

/// Renders the filtered dashboard into `area`.
///
/// Updates `app.scroll` to keep the selection visible and records every
/// drawn card in `app.card_areas` for mouse hit testing.
pub fn render_categories(frame: &mut Frame, area: Rect, app: &mut App) {
    let view = app.view();
    let mut card_areas = Vec::new();

    if area.height == 0 || area.width == 0 {
        app.card_areas = card_areas;
        return;
    }
    if view.categories.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No categories",
                Style::default().fg(Color::DarkGray),
            )),
            area,
        );
        app.card_areas = card_areas;
        return;
    }

    let columns = app.settings.columns.max(1);
    let rows = layout_rows(&view.categories, columns);

    let mut scroll = app.scroll;
    if let Some((top, row)) = rows.iter().find(|(_, row)| match row {
        Row::Cards(cards) => cards.iter().any(|(slot, _)| *slot == app.selected),
        Row::Title(_) => false,
    }) {
        scroll = scroll_to_show(scroll, *top, row.height(), area.height);
        // Keep the category title above the first card row in view
        if let Some(title_top) = top.checked_sub(1) {
            let is_title = rows
                .iter()
                .any(|(y, r)| *y == title_top && matches!(r, Row::Title(_)));
            if is_title && title_top < scroll && top + row.height() <= title_top + area.height {
                scroll = title_top;
            }
        }
    }

    let panels = app.panels();
    let bottom = scroll.saturating_add(area.height);
    for (top, row) in &rows {
        if *top < scroll || *top >= bottom {
            continue;
        }
        // Rows running past the bottom edge are clipped
        let height = row.height().min(bottom - top);
        let rect = Rect::new(area.x, area.y + (top - scroll), area.width, height);
        match row {
            Row::Title(category) => render_title(frame, rect, category),
            Row::Cards(cards) => {
                let constraints = vec![Constraint::Ratio(1, u32::from(columns)); usize::from(columns)];
                let cells = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(constraints)
                    .split(rect);
                for ((slot, card), cell) in cards.iter().zip(cells.iter()) {
                    let selected = *slot == app.selected;
                    match card {
                        Card::Widget(widget) => {
                            render_widget_card(frame, *cell, widget, panels, selected)
                        }
                        Card::Add => render_add_card(frame, *cell, selected),
                    }
                    card_areas.push((*cell, *slot));
                }
            }
        }
    }

    app.scroll = scroll;
    app.card_areas = card_areas;
}

/// Category name with its visible widget count.
fn render_title(frame: &mut Frame, area: Rect, category: &Category) {
    let line = Line::from(vec![
        Span::styled(
            category.name.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" ({})", category.widgets.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn card_border_style(selected: bool) -> Style {
    if selected {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Bordered card titled with the widget name; the body comes from the panel
/// registered for the widget kind.
pub fn render_widget_card(
    frame: &mut Frame,
    area: Rect,
    widget: &Widget,
    panels: &PanelRegistry,
    selected: bool,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(card_border_style(selected))
        .title(Span::styled(
            widget.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ));
    if selected {
        block = block.title_top(Line::from("[x]").right_aligned());
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(panels.render(widget, inner.width)), inner);
}

/// Bordered card with a centered "+ Add Widget" label.
pub fn render_add_card(frame: &mut Frame, area: Rect, selected: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(card_border_style(selected));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![Line::raw(""); usize::from(inner.height.saturating_sub(1) / 2)];
    let label_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    lines.push(Line::styled(ADD_CARD_TEXT, label_style).centered());
    frame.render_widget(Paragraph::new(lines), inner);
}

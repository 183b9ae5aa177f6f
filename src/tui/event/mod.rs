//! Event handling for the TUI.
//!
//! Wraps crossterm events and adds a tick variant for periodic UI refresh.
//! Key handling is routed by screen: the add-widget modal first, then the
//! search box, then card navigation.

use crate::catalog::CatalogTab;
use crate::draft::DraftField;
use crate::store;
use crate::tui::app::{App, Focus, ModalMode, Slot};
use crossterm::event::{
    Event as CrosstermEvent, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    MouseEvent,
};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

/// Application-level event variants.
#[derive(Debug, Clone, Copy)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse event occurred.
    Mouse(MouseEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI refresh.
    Tick,
}

/// Event handler that merges terminal input events with periodic ticks.
pub struct EventHandler {
    /// Tick interval duration.
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new EventHandler with the specified tick rate.
    pub fn new(tick_rate: Duration) -> Self {
        Self { tick_rate }
    }

    /// Waits for the next event, returning either a terminal event or a tick.
    ///
    /// Uses `tokio::select!` to race between crossterm input and the tick timer.
    pub async fn next(&self, reader: &mut EventStream) -> std::io::Result<Event> {
        let mut tick = interval(self.tick_rate);
        // Consume the first immediate tick
        tick.tick().await;

        loop {
            tokio::select! {
                maybe_event = reader.next() => {
                    match maybe_event {
                        Some(Ok(CrosstermEvent::Key(key))) => return Ok(Event::Key(key)),
                        Some(Ok(CrosstermEvent::Mouse(mouse))) => return Ok(Event::Mouse(mouse)),
                        Some(Ok(CrosstermEvent::Resize(w, h))) => return Ok(Event::Resize(w, h)),
                        Some(Err(e)) => return Err(e),
                        // Ignore focus, paste events
                        Some(Ok(_)) => continue,
                        None => return Err(std::io::Error::new(
                            std::io::ErrorKind::UnexpectedEof,
                            "event stream ended",
                        )),
                    }
                }
                _ = tick.tick() => {
                    return Ok(Event::Tick);
                }
            }
        }
    }
}

/// Action produced by handling a key event.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No action to take.
    None,
    /// Quit the application.
    Quit,
    /// Apply a transition to the dashboard store.
    Dispatch(store::Action),
}

/// Handles a key event by updating view state or returning an action.
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match app.modal.as_ref().map(|m| m.mode) {
        Some(ModalMode::Catalog) => return handle_catalog_key(app, key),
        Some(ModalMode::Custom) => return handle_custom_key(app, key),
        None => {}
    }

    match app.focus {
        Focus::Search => handle_search_key(app, key),
        Focus::Dashboard => handle_dashboard_key(app, key),
    }
}

/// Card navigation keys.
fn handle_dashboard_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('/') => {
            app.focus = Focus::Search;
            Action::None
        }
        KeyCode::Char('j') | KeyCode::Char('l') | KeyCode::Down | KeyCode::Right => {
            app.select_next();
            Action::None
        }
        KeyCode::Char('k') | KeyCode::Char('h') | KeyCode::Up | KeyCode::Left => {
            app.select_previous();
            Action::None
        }
        KeyCode::Char('x') | KeyCode::Delete => match app.selected_slot() {
            Some(Slot::Widget {
                category_id,
                widget_id,
            }) => Action::Dispatch(store::Action::remove_widget(category_id, widget_id)),
            _ => Action::None,
        },
        KeyCode::Char('a') => {
            let slot = app.selected_slot();
            app.open_modal(slot.as_ref().map(Slot::category_id));
            Action::None
        }
        KeyCode::Enter => {
            if let Some(Slot::AddCard { category_id }) = app.selected_slot() {
                app.open_modal(Some(&category_id));
            }
            Action::None
        }
        KeyCode::Esc => {
            if !app.search.is_empty() {
                app.search.clear();
                app.clamp_selection();
            }
            Action::None
        }
        _ => Action::None,
    }
}

/// Search box editing keys.
fn handle_search_key(app: &mut App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.focus = Focus::Dashboard;
        }
        KeyCode::Backspace => {
            app.search.pop();
            app.clamp_selection();
        }
        KeyCode::Char(c) => {
            app.search.push(c);
            app.clamp_selection();
        }
        _ => {}
    }
    Action::None
}

/// Catalog checklist keys.
fn handle_catalog_key(app: &mut App, key: KeyEvent) -> Action {
    let count = app.modal_entry_count();
    let Some(modal) = app.modal.as_mut() else {
        return Action::None;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            app.close_modal();
        }
        KeyCode::Tab => modal.set_tab(modal.tab.next()),
        KeyCode::BackTab => modal.set_tab(modal.tab.previous()),
        KeyCode::Char(c @ '1'..='4') => {
            if let Some(tab) = CatalogTab::from_index(usize::from(c as u8 - b'1')) {
                modal.set_tab(tab);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => modal.cursor_down(count),
        KeyCode::Char('k') | KeyCode::Up => modal.cursor_up(),
        KeyCode::Char(' ') => return app.toggle_under_cursor(),
        KeyCode::Char('c') => modal.open_custom(),
        _ => {}
    }
    Action::None
}

/// Custom widget form keys.
fn handle_custom_key(app: &mut App, key: KeyEvent) -> Action {
    let Some(modal) = app.modal.as_mut() else {
        return Action::None;
    };
    let field = modal.field;
    let newline = field == DraftField::Text
        && match key.code {
            KeyCode::Enter => key.modifiers.contains(KeyModifiers::ALT),
            KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        };
    if newline {
        app.draft.text.push('\n');
        return Action::None;
    }
    match key.code {
        KeyCode::Esc => modal.back_to_catalog(),
        KeyCode::Enter => return app.submit_draft(),
        KeyCode::Tab | KeyCode::Down => modal.field = field.next(),
        KeyCode::BackTab | KeyCode::Up => modal.field = field.previous(),
        KeyCode::Left if field == DraftField::Category => app.cycle_draft_category(false),
        KeyCode::Right | KeyCode::Char(' ') if field == DraftField::Category => {
            app.cycle_draft_category(true)
        }
        KeyCode::Backspace => {
            if let Some(buffer) = app.draft.field_mut(field) {
                buffer.pop();
            }
        }
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
        KeyCode::Char(c) => {
            if let Some(buffer) = app.draft.field_mut(field) {
                buffer.push(c);
            }
        }
        _ => {}
    }
    Action::None
}

//! Application state and main event loop for the TUI.
//!
//! Manages terminal setup/teardown, panic hooks, and the core render loop.
//! All dashboard mutation goes through the owned [`DashboardStore`]; the app
//! subscribes to the store and turns each applied update into a footer
//! status message.

mod modal;

pub use modal::{Modal, ModalMode};

use crate::catalog::{Catalog, CatalogTab};
use crate::config::{ConfigError, TuiConfig};
use crate::draft::{WidgetDraft, WidgetIdGenerator};
use crate::filter::filter_dashboard;
use crate::panels::PanelRegistry;
use crate::store::{self, ActionKind, DashboardStore, StoreUpdate};
use crate::tui::event::{handle_key_event, Action, Event, EventHandler};
use crate::tui::ui::render_dashboard;
use crate::Dashboard;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::layout::{Position, Rect};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::{Duration, Instant};
use tokio::sync::broadcast::{self, error::TryRecvError};

/// Runtime TUI settings resolved from the `[tui]` config section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TuiSettings {
    /// Redraw tick interval.
    pub tick_rate: Duration,
    /// Cards per grid row (at least 1).
    pub columns: u16,
    /// Lifetime of a footer status message.
    pub status_timeout: Duration,
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            columns: 3,
            status_timeout: Duration::from_secs(3),
        }
    }
}

impl TuiSettings {
    /// Resolves settings, parsing the duration strings.
    pub fn from_config(config: &TuiConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            tick_rate: config.tick_rate()?,
            columns: config.columns.max(1),
            status_timeout: config.status_timeout()?,
        })
    }
}

/// Which input receives typed characters on the dashboard screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Card navigation.
    Dashboard,
    /// The header search box.
    Search,
}

/// A selectable card in the visible dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// A widget card.
    Widget {
        /// Category holding the widget.
        category_id: String,
        /// Widget id.
        widget_id: String,
    },
    /// The trailing "Add Widget" card of a category.
    AddCard {
        /// Category the card belongs to.
        category_id: String,
    },
}

impl Slot {
    /// Category the slot belongs to.
    pub fn category_id(&self) -> &str {
        match self {
            Slot::Widget { category_id, .. } | Slot::AddCard { category_id } => category_id,
        }
    }
}

/// Core application state for the TUI.
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,
    /// Count of ticks processed.
    pub tick_count: u64,
    /// Current search query.
    pub search: String,
    /// Keyboard focus on the dashboard screen.
    pub focus: Focus,
    /// Index into [`App::slots`] of the highlighted card.
    pub selected: usize,
    /// Vertical scroll offset of the card area, in rows.
    pub scroll: u16,
    /// Open add-widget modal, if any.
    pub modal: Option<Modal>,
    /// Custom widget form contents. Kept across modal openings; a confirmed
    /// submission clears name and text but keeps the category.
    pub draft: WidgetDraft,
    /// Temporary status message shown in footer, with expiry time.
    pub status_message: Option<(String, Instant)>,
    /// Resolved `[tui]` settings.
    pub settings: TuiSettings,
    /// Screen areas of the cards drawn in the last render, by slot index.
    ///
    /// Used by mouse click detection.
    pub card_areas: Vec<(Rect, usize)>,
    store: DashboardStore,
    catalog: Catalog,
    panels: PanelRegistry,
    ids: WidgetIdGenerator,
    updates: broadcast::Receiver<StoreUpdate>,
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("should_quit", &self.should_quit)
            .field("tick_count", &self.tick_count)
            .field("search", &self.search)
            .field("focus", &self.focus)
            .field("selected", &self.selected)
            .field("modal", &self.modal)
            .field("draft", &self.draft)
            .field("store", &self.store)
            .finish()
    }
}

impl App {
    /// Creates an app whose store and catalog are both built from `seed`.
    pub fn new(seed: Dashboard, settings: TuiSettings) -> Self {
        let catalog = Catalog::new(&seed);
        let store = DashboardStore::new(seed);
        let updates = store.subscribe();
        Self {
            should_quit: false,
            tick_count: 0,
            search: String::new(),
            focus: Focus::Dashboard,
            selected: 0,
            scroll: 0,
            modal: None,
            draft: WidgetDraft::default(),
            status_message: None,
            settings,
            card_areas: Vec::new(),
            store,
            catalog,
            panels: PanelRegistry::new(),
            ids: WidgetIdGenerator::new(),
            updates,
        }
    }

    /// Sets the initial search query.
    pub fn with_search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    /// The store owning the dashboard.
    pub fn store(&self) -> &DashboardStore {
        &self.store
    }

    /// The add-widget catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The panel registry used to draw card bodies.
    pub fn panels(&self) -> &PanelRegistry {
        &self.panels
    }

    /// The dashboard as currently shown: the store state filtered by the
    /// search query.
    pub fn view(&self) -> Dashboard {
        filter_dashboard(self.store.state(), &self.search)
    }

    /// Selectable cards in display order: each category's widgets followed by
    /// its add card.
    pub fn slots(&self) -> Vec<Slot> {
        slots_of(&self.view())
    }

    /// The highlighted card, if any.
    pub fn selected_slot(&self) -> Option<Slot> {
        self.slots().into_iter().nth(self.selected)
    }

    /// Moves the selection forward by one, clamped to the last card.
    pub fn select_next(&mut self) {
        let last = self.slots().len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }

    /// Moves the selection back by one, clamped to the first card.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keeps the selection on an existing card after the view changed.
    pub fn clamp_selection(&mut self) {
        let last = self.slots().len().saturating_sub(1);
        self.selected = self.selected.min(last);
    }

    /// Shows `message` in the footer until the status timeout elapses.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now() + self.settings.status_timeout));
    }

    /// Clears the status message if its expiry time has passed.
    ///
    /// Returns `true` if a message was cleared.
    pub fn expire_status_message(&mut self) -> bool {
        match &self.status_message {
            Some((_, expiry)) if Instant::now() >= *expiry => {
                self.status_message = None;
                true
            }
            _ => false,
        }
    }

    /// Opens the add-widget modal.
    ///
    /// When `category_id` maps to a catalog tab, that tab is preselected.
    /// It also becomes the custom form's category if none is chosen yet.
    pub fn open_modal(&mut self, category_id: Option<&str>) {
        let mut modal = Modal::default();
        if let Some(id) = category_id {
            if let Some(tab) = CatalogTab::ALL.into_iter().find(|t| t.category_id() == id) {
                modal.tab = tab;
            }
            if self.draft.category_id.is_empty()
                && self.catalog.categories().iter().any(|c| c.id == id)
            {
                self.draft.category_id = id.to_string();
            }
        }
        tracing::debug!("Opened add-widget modal on tab {}", modal.tab);
        self.modal = Some(modal);
    }

    /// Closes the add-widget modal.
    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    /// Toggle action for the catalog entry under the modal cursor.
    pub fn toggle_under_cursor(&self) -> Action {
        let Some(modal) = &self.modal else {
            return Action::None;
        };
        let entries = self.catalog.entries(modal.tab, self.store.state());
        match entries.get(modal.cursor) {
            Some(entry) => Action::Dispatch(store::Action::toggle_widget(
                entry.category_id,
                entry.widget.clone(),
            )),
            None => Action::None,
        }
    }

    /// Number of entries listed under the modal's current tab.
    pub fn modal_entry_count(&self) -> usize {
        self.modal
            .as_ref()
            .map_or(0, |m| self.catalog.entries(m.tab, self.store.state()).len())
    }

    /// Cycles the custom form's category selector. Position 0 is the empty
    /// "choose a category" option.
    pub fn cycle_draft_category(&mut self, forward: bool) {
        let mut options: Vec<&str> = vec![""];
        options.extend(self.catalog.categories().iter().map(|c| c.id.as_str()));
        let current = options
            .iter()
            .position(|id| *id == self.draft.category_id)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        self.draft.category_id = options[next].to_string();
    }

    /// Display name of the custom form's selected category.
    pub fn draft_category_name(&self) -> Option<&str> {
        self.catalog
            .categories()
            .iter()
            .find(|c| c.id == self.draft.category_id)
            .map(|c| c.name.as_str())
    }

    /// Validates the custom form and turns it into an `AddWidget` dispatch.
    ///
    /// An incomplete form leaves the modal open and shows
    /// `Please fill all fields`.
    pub fn submit_draft(&mut self) -> Action {
        if self.modal.is_none() {
            return Action::None;
        }
        match self.draft.into_action(&mut self.ids) {
            Ok(action) => {
                self.draft.clear_inputs();
                self.modal = None;
                Action::Dispatch(action)
            }
            Err(e) => {
                tracing::debug!("Custom widget rejected: {}", e);
                self.set_status("Please fill all fields");
                Action::None
            }
        }
    }

    /// Applies an action produced by input handling.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::Dispatch(action) => {
                if let Err(e) = self.store.dispatch(action) {
                    self.set_status(e.to_string());
                }
                self.drain_store_updates();
                self.clamp_selection();
            }
        }
    }

    /// Turns pending store notifications into a status message.
    fn drain_store_updates(&mut self) {
        loop {
            match self.updates.try_recv() {
                Ok(update) => {
                    let message = self.describe_update(&update);
                    self.set_status(message);
                }
                Err(TryRecvError::Lagged(skipped)) => {
                    tracing::warn!("Missed {} store updates", skipped);
                }
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
            }
        }
    }

    fn describe_update(&self, update: &StoreUpdate) -> String {
        let category = self
            .store
            .state()
            .category(&update.category_id)
            .map_or(update.category_id.as_str(), |c| c.name.as_str());
        let present = self
            .store
            .contains_widget(&update.category_id, &update.widget_id);
        match (update.action, present) {
            (ActionKind::AddWidget, _) | (ActionKind::ToggleWidget, true) => {
                format!("Added {} to {}", update.widget_id, category)
            }
            (ActionKind::RemoveWidget, _) | (ActionKind::ToggleWidget, false) => {
                format!("Removed {} from {}", update.widget_id, category)
            }
        }
    }

    /// Handles a mouse event.
    ///
    /// Scrolling moves the selection. A left click selects the card under
    /// the pointer; clicking an add card opens the modal.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if self.modal.is_some() {
            return;
        }
        match mouse.kind {
            MouseEventKind::ScrollDown => self.select_next(),
            MouseEventKind::ScrollUp => self.select_previous(),
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(index) = self.card_at(mouse.column, mouse.row) else {
                    return;
                };
                self.selected = index;
                self.focus = Focus::Dashboard;
                if let Some(Slot::AddCard { category_id }) = self.selected_slot() {
                    self.open_modal(Some(&category_id));
                }
            }
            _ => {}
        }
    }

    /// Slot index of the card drawn at (`column`, `row`) in the last render.
    fn card_at(&self, column: u16, row: u16) -> Option<usize> {
        self.card_areas
            .iter()
            .find(|(area, _)| area.contains(Position::new(column, row)))
            .map(|(_, index)| *index)
    }

    /// Runs the TUI application: sets up terminal, enters event loop, restores on exit.
    pub async fn run(&mut self) -> io::Result<()> {
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        setup_terminal()?;

        let result = self.event_loop().await;

        restore_terminal()?;
        result
    }

    /// Main event loop: renders UI and processes events.
    async fn event_loop(&mut self) -> io::Result<()> {
        let backend = CrosstermBackend::new(stdout());
        let mut terminal = Terminal::new(backend)?;
        let event_handler = EventHandler::new(self.settings.tick_rate);
        let mut reader = EventStream::new();

        terminal.draw(|frame| render_dashboard(frame, self))?;

        loop {
            let event = event_handler.next(&mut reader).await?;
            let should_render = match event {
                Event::Key(key) => {
                    let action = handle_key_event(self, key);
                    self.handle_action(action);
                    true
                }
                Event::Mouse(mouse) => {
                    self.handle_mouse_event(mouse);
                    true
                }
                Event::Tick => {
                    self.tick_count += 1;
                    self.expire_status_message()
                }
                Event::Resize(_, _) => true,
            };

            if self.should_quit {
                tracing::debug!("Quit requested after {} ticks", self.tick_count);
                return Ok(());
            }

            if should_render {
                terminal.draw(|frame| render_dashboard(frame, self))?;
            }
        }
    }
}

/// Selectable cards of `view` in display order.
pub fn slots_of(view: &Dashboard) -> Vec<Slot> {
    let mut slots = Vec::new();
    for category in &view.categories {
        slots.extend(category.widgets.iter().map(|w| Slot::Widget {
            category_id: category.id.clone(),
            widget_id: w.id.clone(),
        }));
        slots.push(Slot::AddCard {
            category_id: category.id.clone(),
        });
    }
    slots
}

/// Enables raw mode and switches to the alternate screen.
fn setup_terminal() -> io::Result<()> {
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    Ok(())
}

/// Restores the terminal to its original state.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

#[cfg(test)]
mod tests;

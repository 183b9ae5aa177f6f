//! Dashboard store module.
//!
//! This module holds the single dashboard value, applies transitions through
//! the pure [`apply`] reducer and notifies subscribers of each new state.
//! The store is the only writer; the view reads through [`DashboardStore::state`]
//! and mutates exclusively through [`DashboardStore::dispatch`].

use crate::{seed, Dashboard};
use tokio::sync::broadcast;

#[cfg(test)]
mod tests;

mod action;
mod error;
mod reducer;

pub use action::{Action, ActionKind};
pub use error::StoreError;
pub use reducer::apply;

/// Default capacity for the subscriber notification channel.
/// This allows for bursty update scenarios without dropping notifications.
const DEFAULT_SUBSCRIBER_CHANNEL_CAPACITY: usize = 64;

/// Notification broadcast after every successful dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreUpdate {
    /// Which transition was applied.
    pub action: ActionKind,
    /// Category the transition targeted.
    pub category_id: String,
    /// Widget id the transition added, removed or toggled.
    pub widget_id: String,
    /// Store revision after the transition.
    pub revision: u64,
}

/// Owner of the current [`Dashboard`] value.
///
/// Each dispatch replaces the held dashboard with the value returned by
/// [`apply`], so readers always observe a fully-formed state. Subscribers
/// receive a [`StoreUpdate`] per applied transition.
///
/// # Example
///
/// ```
/// use widget_dashboard::store::{Action, DashboardStore};
///
/// let mut store = DashboardStore::with_seed();
/// store
///     .dispatch(Action::remove_widget("cspm-executive", "widget-1"))
///     .expect("remove never fails");
/// let cspm = store.state().category("cspm-executive").unwrap();
/// assert_eq!(cspm.widgets.len(), 1);
/// ```
pub struct DashboardStore {
    /// Current dashboard value.
    state: Dashboard,
    /// Count of transitions applied since construction.
    revision: u64,
    /// Broadcast channel sender for subscriber notifications.
    update_tx: broadcast::Sender<StoreUpdate>,
}

impl std::fmt::Debug for DashboardStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardStore")
            .field("categories", &self.state.categories.len())
            .field("widgets", &self.state.widget_count())
            .field("revision", &self.revision)
            .field("subscriber_count", &self.update_tx.receiver_count())
            .finish()
    }
}

impl DashboardStore {
    /// Creates a store seeded with `seed`.
    pub fn new(seed: Dashboard) -> Self {
        let (update_tx, _rx) = broadcast::channel(DEFAULT_SUBSCRIBER_CHANNEL_CAPACITY);
        Self {
            state: seed,
            revision: 0,
            update_tx,
        }
    }

    /// Creates a store seeded with the built-in fixture.
    pub fn with_seed() -> Self {
        Self::new(seed::initial_dashboard())
    }

    /// Returns the current dashboard.
    pub fn state(&self) -> &Dashboard {
        &self.state
    }

    /// Count of transitions applied since construction.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if `category_id` currently holds a widget with `widget_id`.
    pub fn contains_widget(&self, category_id: &str, widget_id: &str) -> bool {
        self.state
            .category(category_id)
            .is_some_and(|c| c.contains(widget_id))
    }

    /// Applies `action` and replaces the current state with the result.
    ///
    /// On error the state is left untouched and no notification is sent.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownCategory`] for a `ToggleWidget` whose
    /// category does not exist.
    pub fn dispatch(&mut self, action: Action) -> Result<(), StoreError> {
        let next = match apply(&self.state, &action) {
            Ok(next) => next,
            Err(e) => {
                tracing::warn!("Rejected {} on {}: {}", action.kind(), action.category_id(), e);
                return Err(e);
            }
        };
        self.state = next;
        self.revision += 1;
        tracing::debug!(
            "Applied {} {} on {} (revision {})",
            action.kind(),
            action.widget_id(),
            action.category_id(),
            self.revision
        );
        self.broadcast(&action);
        Ok(())
    }

    /// Broadcasts a notification for an applied action.
    fn broadcast(&self, action: &Action) {
        let update = StoreUpdate {
            action: action.kind(),
            category_id: action.category_id().to_string(),
            widget_id: action.widget_id().to_string(),
            revision: self.revision,
        };
        match self.update_tx.send(update) {
            Ok(count) => {
                tracing::trace!("Broadcast update sent to {} subscribers", count);
            }
            Err(_) => {
                tracing::debug!("No subscribers for store update broadcast");
            }
        }
    }

    /// Subscribes to store update notifications.
    ///
    /// Returns a broadcast receiver that gets one [`StoreUpdate`] per
    /// successful dispatch. Multiple subscribers can exist simultaneously.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreUpdate> {
        self.update_tx.subscribe()
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.update_tx.receiver_count()
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::with_seed()
    }
}

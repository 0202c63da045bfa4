//! Browser application state.
//!
//! `App` mirrors the store's published [`ViewState`] and layers the purely
//! visual state (cursor, theme, footer message) on top of it. It never
//! sorts or filters records itself; every list change arrives through the
//! store subscription.

use super::constants::STATUS_TICKS;
use super::state::{ListNavigation, ListState};
use crate::config::TuiPreferences;
use crate::model::ParsedRecord;
use crate::store::{ListStore, ViewState};
use chrono::{DateTime, Local};
use std::sync::mpsc::{Receiver, TryRecvError};

/// Interactive list browser.
pub struct App {
    store: ListStore,
    updates: Receiver<ViewState>,
    /// Latest state published by the store
    pub(crate) view: ViewState,
    /// Table cursor
    pub(crate) list: ListState,
    /// Where the records come from, shown in the header
    pub(crate) source_label: String,
    /// When the resident list was last loaded
    pub(crate) loaded_at: Option<DateTime<Local>>,
    /// Status message to display temporarily
    pub(crate) status_message: Option<String>,
    status_set_at: u64,
    /// Set while a load started by this app has not settled yet
    awaiting_load: bool,
    /// Should quit
    pub(crate) should_quit: bool,
    /// Animation tick counter
    pub(crate) tick: u64,
}

impl App {
    /// Wrap a store, subscribing to its state stream.
    pub fn new(store: ListStore, source_label: impl Into<String>) -> Self {
        let updates = store.subscribe();
        let mut app = Self {
            store,
            updates,
            view: ViewState::Loading,
            list: ListState::new(),
            source_label: source_label.into(),
            loaded_at: None,
            status_message: None,
            status_set_at: 0,
            awaiting_load: true,
            should_quit: false,
            tick: 0,
        };
        app.sync();
        app
    }

    /// Drain pending store updates into the view.
    pub fn sync(&mut self) {
        // Read before draining so a load that settles in between is seen next time
        let settled = self.awaiting_load && !self.store.load_in_flight();
        loop {
            match self.updates.try_recv() {
                Ok(next) => self.apply(next),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::debug!("Store subscription closed");
                    self.should_quit = true;
                    break;
                }
            }
        }

        if settled {
            self.awaiting_load = false;
            if self.view.is_ready() {
                let count = self.view.items().len();
                self.loaded_at = Some(Local::now());
                self.set_status_message(format!("Loaded {count} records"));
            } else if self.view.is_failed() {
                self.set_status_message("Load failed");
            }
        }
    }

    fn apply(&mut self, next: ViewState) {
        let selected_id = self.selected_record().map(|r| r.id);
        self.view = next;

        let items = self.view.items();
        self.list.resize(items.len());
        if let Some(pos) = selected_id.and_then(|id| items.iter().position(|r| r.id == id)) {
            self.list.set_selected(pos);
        }
    }

    /// Advance the tick counter, expiring old status messages.
    pub fn on_tick(&mut self) {
        self.tick += 1;
        if self.status_message.is_some() && self.tick.saturating_sub(self.status_set_at) > STATUS_TICKS {
            self.status_message = None;
        }
        self.sync();
    }

    /// The record under the cursor, if the list is showing.
    pub fn selected_record(&self) -> Option<&ParsedRecord> {
        self.view.items().get(self.list.selected)
    }

    pub fn toggle_group_sort(&mut self) {
        self.store.toggle_group_sort();
        self.sync();
    }

    pub fn toggle_name_sort(&mut self) {
        self.store.toggle_name_sort();
        self.sync();
    }

    /// Reload the list from the source.
    pub fn refresh(&mut self) {
        self.awaiting_load = true;
        self.set_status_message(if self.view.is_failed() {
            "Retrying..."
        } else {
            "Refreshing..."
        });
        self.store.refresh();
    }

    /// Rotate the color theme and persist the choice.
    pub fn toggle_theme(&mut self) {
        let name = super::toggle_theme();
        let prefs = TuiPreferences {
            theme: name.to_string(),
        };
        if let Err(e) = prefs.save() {
            tracing::warn!("Failed to save theme preference: {e}");
        }
        self.set_status_message(format!("Theme: {name}"));
    }

    pub fn set_status_message(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_set_at = self.tick;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

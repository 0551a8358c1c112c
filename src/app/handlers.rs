//! Message handling for the App.

use crossterm::event::{KeyEvent, KeyEventKind};

use super::status::{
    StatusKind, ERROR_STATUS, HELP_STATUS, HELP_TEXT, LOADED_STATUS, TOGGLED_STATUS,
};
use super::{App, AppMessage, Command, Effect, Phase};
use crate::models::{Gist, GistId};

impl App {
    /// Apply one message and return the effects to schedule.
    ///
    /// After quit every message is ignored.
    pub fn update(&mut self, msg: AppMessage) -> Vec<Effect> {
        if self.should_quit {
            return Vec::new();
        }
        self.mark_dirty();

        match msg {
            AppMessage::Key(key) => self.handle_key(key),
            AppMessage::Resize { width, height } => {
                self.update_terminal_dimensions(width, height);
                Vec::new()
            }
            AppMessage::GistsLoaded(gists) => self.handle_loaded(gists),
            AppMessage::LoadFailed(error) => self.handle_load_failed(error),
            AppMessage::VisibilityToggled { id, public } => self.handle_toggled(id, public),
            AppMessage::ToggleFailed { id, error } => self.handle_toggle_failed(id, error),
            AppMessage::StatusExpired { generation } => {
                self.expire_status(generation);
                Vec::new()
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Vec<Effect> {
        if key.kind != KeyEventKind::Press {
            return Vec::new();
        }
        match self.keybindings.resolve(&key) {
            Some(command) => self.execute(command),
            None => Vec::new(),
        }
    }

    /// Run a command. Only quit is honoured while loading.
    pub fn execute(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Quit => {
                self.quit();
                Vec::new()
            }
            _ if self.is_loading() => Vec::new(),
            Command::Refresh => self.refresh(),
            Command::ToggleVisibility => self.request_toggle(),
            Command::Help => vec![self.set_status(HELP_TEXT, StatusKind::Neutral, HELP_STATUS)],
            Command::MoveUp => {
                self.move_up();
                Vec::new()
            }
            Command::MoveDown => {
                self.move_down();
                Vec::new()
            }
            Command::MoveFirst => {
                self.move_first();
                Vec::new()
            }
            Command::MoveLast => {
                self.move_last();
                Vec::new()
            }
        }
    }

    /// Re-enter loading. A no-op while a load is already in flight.
    pub fn refresh(&mut self) -> Vec<Effect> {
        if self.is_loading() {
            return Vec::new();
        }
        self.phase = Phase::Loading;
        vec![Effect::LoadGists]
    }

    /// Request a visibility flip for the selected gist.
    ///
    /// The list is not touched until the remote confirms.
    pub fn request_toggle(&mut self) -> Vec<Effect> {
        if self.is_loading() {
            return Vec::new();
        }
        let Some(gist) = self.selected_gist().cloned() else {
            return Vec::new();
        };
        if !self.pending_toggles.insert(gist.id.clone()) {
            tracing::debug!(id = %gist.id, "toggle already in flight");
            return Vec::new();
        }
        vec![Effect::ToggleVisibility(gist)]
    }

    fn handle_loaded(&mut self, gists: Vec<Gist>) -> Vec<Effect> {
        self.phase = Phase::Ready;
        self.last_error = None;
        self.gists = gists;
        self.clamp_selection();

        let text = format!("Loaded {} gists", self.gists.len());
        vec![self.set_status(text, StatusKind::Neutral, LOADED_STATUS)]
    }

    fn handle_load_failed(&mut self, error: String) -> Vec<Effect> {
        self.phase = Phase::Ready;
        let text = format!("Error: {}", error);
        self.last_error = Some(error);
        vec![self.set_status(text, StatusKind::Error, ERROR_STATUS)]
    }

    fn handle_toggled(&mut self, id: GistId, public: bool) -> Vec<Effect> {
        self.pending_toggles.remove(&id);
        if let Some(gist) = self.gists.iter_mut().find(|g| g.id == id) {
            gist.public = public;
        }

        let visibility = if public { "public" } else { "private" };
        let text = format!("✓ Gist updated to {}", visibility);
        vec![self.set_status(text, StatusKind::Success, TOGGLED_STATUS)]
    }

    fn handle_toggle_failed(&mut self, id: GistId, error: String) -> Vec<Effect> {
        self.pending_toggles.remove(&id);
        let text = format!("Error: failed to update gist: {}", error);
        self.last_error = Some(error);
        vec![self.set_status(text, StatusKind::Error, ERROR_STATUS)]
    }
}

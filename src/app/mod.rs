//! Interactive session state and logic.
//!
//! The session is a state machine: [`App::update`] takes one [`AppMessage`]
//! and returns the [`Effect`]s to schedule. It performs no I/O, so every
//! transition can be tested without a terminal, a runtime or a network.
//! [`runtime::run`] wires it to crossterm input, ratatui rendering and an
//! [`EffectRunner`].
//!
//! - [`Phase`] - loading or ready
//! - [`StatusMessage`] - transient status line with expiry generation
//! - [`KeybindingConfig`] - key to [`Command`] mapping

mod effects;
mod handlers;
mod keybindings;
mod messages;
mod navigation;
pub mod runtime;
mod status;

pub use effects::{Effect, EffectRunner};
pub use keybindings::{Command, KeyCombo, KeybindingConfig};
pub use messages::AppMessage;
pub use status::{
    StatusKind, StatusMessage, ERROR_STATUS, FOOTER_HINT, HELP_STATUS, HELP_TEXT, LOADED_STATUS,
    TOGGLED_STATUS,
};

use std::collections::HashSet;

use crate::models::{Gist, GistId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// A load-all is in flight
    Loading,
    /// The list is displayed and accepts input
    Ready,
}

/// Session state. Owned by the event loop, never shared.
#[derive(Debug)]
pub struct App {
    pub phase: Phase,
    /// Private copy of the list, replaced on load and patched on toggle
    pub gists: Vec<Gist>,
    /// Selection cursor into `gists`
    pub selected: usize,
    pub status: Option<StatusMessage>,
    /// Most recent failure, cleared by a successful load
    pub last_error: Option<String>,
    /// Gists with a visibility change in flight
    pub pending_toggles: HashSet<GistId>,
    pub should_quit: bool,
    /// Animation counter, advanced by the render loop
    pub tick_count: u64,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Set when state changed since the last draw
    pub needs_redraw: bool,
    status_generation: u64,
    keybindings: KeybindingConfig,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            phase: Phase::Loading,
            gists: Vec::new(),
            selected: 0,
            status: None,
            last_error: None,
            pending_toggles: HashSet::new(),
            should_quit: false,
            tick_count: 0,
            terminal_width: 80,
            terminal_height: 24,
            needs_redraw: true,
            status_generation: 0,
            keybindings: KeybindingConfig::new(),
        }
    }

    /// Enter loading and request the first load.
    pub fn init(&mut self) -> Vec<Effect> {
        self.phase = Phase::Loading;
        self.mark_dirty();
        vec![Effect::LoadGists]
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn selected_gist(&self) -> Option<&Gist> {
        self.gists.get(self.selected)
    }

    pub fn is_toggle_pending(&self, id: &GistId) -> bool {
        self.pending_toggles.contains(id)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Advance animations. Only the loading spinner and pending markers move.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.is_loading() || !self.pending_toggles.is_empty() {
            self.mark_dirty();
        }
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
    }
}

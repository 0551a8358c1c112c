//! AppMessage enum for async communication within the session.

use crossterm::event::KeyEvent;

use crate::models::{Gist, GistId};

/// Everything the session reacts to: terminal input and the results of
/// effects that ran out-of-band.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// A key press from the terminal
    Key(KeyEvent),
    /// Terminal resized
    Resize { width: u16, height: u16 },
    /// Load-all finished
    GistsLoaded(Vec<Gist>),
    /// Load-all failed
    LoadFailed(String),
    /// The remote accepted a visibility change
    VisibilityToggled { id: GistId, public: bool },
    /// The remote rejected a visibility change
    ToggleFailed { id: GistId, error: String },
    /// A status timer elapsed
    StatusExpired { generation: u64 },
}

//! Transient status line.

use std::time::Duration;

use super::{App, Effect};

/// Shown after a successful load.
pub const LOADED_STATUS: Duration = Duration::from_secs(2);
/// Shown after a confirmed visibility change.
pub const TOGGLED_STATUS: Duration = Duration::from_secs(3);
/// Shown after any failure.
pub const ERROR_STATUS: Duration = Duration::from_secs(5);
/// Shown after the help key.
pub const HELP_STATUS: Duration = Duration::from_secs(5);

pub const HELP_TEXT: &str = "Keys: [Enter] Toggle visibility • [r] Refresh • [q] Quit";

/// Footer shown when no status is set.
pub const FOOTER_HINT: &str =
    "[↑/↓] Navigate • [Enter] Toggle visibility • [r] Refresh • [?] Help • [q] Quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Neutral,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    /// Matches the expiry effect scheduled alongside this message
    pub generation: u64,
}

impl App {
    /// Replace the status and schedule its expiry.
    pub(crate) fn set_status(
        &mut self,
        text: impl Into<String>,
        kind: StatusKind,
        ttl: Duration,
    ) -> Effect {
        self.status_generation += 1;
        let generation = self.status_generation;
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
            generation,
        });
        Effect::ClearStatusAfter {
            generation,
            delay: ttl,
        }
    }

    /// Clear the status if `generation` is still the current one.
    pub(crate) fn expire_status(&mut self, generation: u64) {
        if self
            .status
            .as_ref()
            .is_some_and(|s| s.generation == generation)
        {
            self.status = None;
        }
    }
}

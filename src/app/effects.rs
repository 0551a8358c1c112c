//! Side effects requested by the session and the runner that executes them.
//!
//! [`App::update`](super::App::update) never performs I/O. It returns
//! [`Effect`] values which the [`EffectRunner`] spawns onto the tokio runtime;
//! each task reports back by sending an [`AppMessage`] into the loop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use super::AppMessage;
use crate::models::Gist;
use crate::service::GistService;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// List all gists through the orchestrator
    LoadGists,
    /// Flip the visibility of this gist remotely
    ToggleVisibility(Gist),
    /// Deliver `StatusExpired { generation }` after `delay`
    ClearStatusAfter { generation: u64, delay: Duration },
}

/// Spawns effects and routes their results back to the session.
///
/// Results that arrive after the receiver is gone (the session quit) are
/// dropped.
#[derive(Clone)]
pub struct EffectRunner {
    service: Arc<GistService>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl EffectRunner {
    pub fn new(service: Arc<GistService>, message_tx: mpsc::UnboundedSender<AppMessage>) -> Self {
        Self {
            service,
            message_tx,
        }
    }

    pub fn run_all(&self, effects: Vec<Effect>) {
        for effect in effects {
            self.run(effect);
        }
    }

    pub fn run(&self, effect: Effect) {
        tracing::debug!(?effect, "dispatching effect");
        let tx = self.message_tx.clone();

        match effect {
            Effect::LoadGists => {
                let service = Arc::clone(&self.service);
                tokio::spawn(async move {
                    let msg = match service.list_gists().await {
                        Ok(gists) => AppMessage::GistsLoaded(gists),
                        Err(e) => {
                            tracing::warn!(error = %e, "loading gists failed");
                            AppMessage::LoadFailed(e.to_string())
                        }
                    };
                    let _ = tx.send(msg);
                });
            }
            Effect::ToggleVisibility(gist) => {
                let service = Arc::clone(&self.service);
                tokio::spawn(async move {
                    let id = gist.id.clone();
                    let msg = match service.toggle_visibility(&gist).await {
                        Ok(public) => AppMessage::VisibilityToggled { id, public },
                        Err(e) => AppMessage::ToggleFailed {
                            id,
                            error: e.to_string(),
                        },
                    };
                    let _ = tx.send(msg);
                });
            }
            Effect::ClearStatusAfter { generation, delay } => {
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(AppMessage::StatusExpired { generation });
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{InMemoryCache, InMemoryFileSystem, InMemoryRemote};
    use crate::error::GistError;
    use crate::models::GistId;

    fn runner(remote: InMemoryRemote) -> (EffectRunner, mpsc::UnboundedReceiver<AppMessage>) {
        let service = GistService::new(
            Arc::new(remote),
            Arc::new(InMemoryCache::new()),
            Arc::new(InMemoryFileSystem::new()),
        );
        let (tx, rx) = mpsc::unbounded_channel();
        (EffectRunner::new(Arc::new(service), tx), rx)
    }

    fn private_gist(id: &str) -> Gist {
        let mut gist = Gist::new_local("", false);
        gist.id = GistId::from(id);
        gist.add_file("a.txt", "a");
        gist
    }

    #[tokio::test]
    async fn test_load_reports_gists() {
        let (runner, mut rx) = runner(InMemoryRemote::with_gists(vec![private_gist("abc")]));
        runner.run(Effect::LoadGists);

        match rx.recv().await {
            Some(AppMessage::GistsLoaded(gists)) => assert_eq!(gists.len(), 1),
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_toggle_failure_reports_error() {
        let remote = InMemoryRemote::with_gists(vec![private_gist("abc")]);
        remote.fail_next_update(GistError::remote(422, "unsupported"));
        let (runner, mut rx) = runner(remote);

        runner.run(Effect::ToggleVisibility(private_gist("abc")));

        match rx.recv().await {
            Some(AppMessage::ToggleFailed { id, error }) => {
                assert_eq!(id.as_str(), "abc");
                assert!(error.contains("unsupported"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_clear_status_after_delay() {
        let (runner, mut rx) = runner(InMemoryRemote::new());
        runner.run(Effect::ClearStatusAfter {
            generation: 7,
            delay: Duration::from_millis(5),
        });

        assert!(matches!(
            rx.recv().await,
            Some(AppMessage::StatusExpired { generation: 7 })
        ));
    }

    #[tokio::test]
    async fn test_results_after_receiver_dropped_are_discarded() {
        let (runner, rx) = runner(InMemoryRemote::new());
        drop(rx);
        runner.run(Effect::LoadGists);
        tokio::task::yield_now().await;
    }
}

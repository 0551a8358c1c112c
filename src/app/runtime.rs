//! Event loop for the interactive session.

use std::sync::Arc;
use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use tokio::sync::mpsc;

use super::{App, AppMessage, Effect, EffectRunner};
use crate::service::GistService;
use crate::terminal::{setup_panic_hook, TerminalManager};
use crate::ui;

/// Frame interval for animations.
pub const TICK: Duration = Duration::from_millis(16);

/// Run the session on the real terminal until the user quits.
pub async fn run(service: GistService) -> Result<()> {
    setup_panic_hook();
    let mut manager = TerminalManager::new()?;
    let size = manager.size()?;

    let (message_tx, message_rx) = mpsc::unbounded_channel();
    let runner = EffectRunner::new(Arc::new(service), message_tx);

    let mut app = App::new();
    app.update_terminal_dimensions(size.width, size.height);
    tracing::info!("interactive session started");

    let result = run_app(manager.terminal(), &mut app, &runner, message_rx).await;
    manager.restore()?;

    tracing::info!("interactive session ended");
    result
}

/// Drive `app` until it quits: draw when dirty, then wait for the next
/// tick, terminal event or effect result, whichever comes first.
///
/// In-flight effects are not awaited on exit.
pub async fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &EffectRunner,
    mut message_rx: mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    runner.run_all(app.init());

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        let timeout = tokio::time::sleep(TICK);

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event = event_stream.next() => {
                runner.run_all(handle_event(app, event));
            }

            msg = message_rx.recv() => {
                if let Some(msg) = msg {
                    runner.run_all(app.update(msg));
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

/// Feed one terminal event to `app`.
///
/// Read errors are logged and skipped. When the input stream ends no quit
/// key can arrive any more, so the session is asked to quit.
fn handle_event(app: &mut App, event: Option<std::io::Result<Event>>) -> Vec<Effect> {
    match event {
        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
            app.update(AppMessage::Key(key))
        }
        Some(Ok(Event::Resize(width, height))) => app.update(AppMessage::Resize { width, height }),
        Some(Ok(_)) => Vec::new(),
        Some(Err(e)) => {
            tracing::warn!(error = %e, "terminal event read failed");
            Vec::new()
        }
        None => {
            tracing::warn!("terminal input closed");
            app.quit();
            Vec::new()
        }
    }
}

//! Command-line shells over the orchestrator.
//!
//! Each subcommand is a thin handler that calls [`GistService`] and writes
//! plain text to the given writer. The interactive browser is not run from
//! here; [`run_cli_command`] returns `None` for it so `main` can take over
//! the terminal.
//!
//! ```ignore
//! let cli = Cli::parse();
//! match cli.command {
//!     Some(command) => run_cli_command(command, &service, &mut stdout).await,
//!     None => /* print help */,
//! }
//! ```

pub mod args;
pub mod list;
pub mod publish;
pub mod show;
pub mod sync;

pub use args::{Cli, Commands};
pub use list::handle_list_command;
pub use publish::handle_publish_command;
pub use show::handle_show_command;
pub use sync::handle_sync_command;

use std::io::Write;

use color_eyre::{Report, Result};

use crate::error::GistError;
use crate::service::GistService;

/// Line printed to stderr when a command fails. Transient remote failures
/// get a hint that a later retry may succeed.
pub fn error_line(err: &Report) -> String {
    match err.downcast_ref::<GistError>() {
        Some(e) if e.is_retryable() => {
            format!("Error: {} (temporary failure, try again later)", e)
        }
        _ => format!("Error: {}", err),
    }
}

/// Run a non-interactive command.
///
/// Returns `None` for [`Commands::Tui`].
pub async fn run_cli_command(
    command: Commands,
    service: &GistService,
    out: &mut impl Write,
) -> Option<Result<()>> {
    let result = match command {
        Commands::Publish {
            description,
            public,
            files,
        } => {
            let description = description.unwrap_or_default();
            handle_publish_command(service, &files, &description, public, out).await
        }
        Commands::List { tag, tags } => {
            handle_list_command(service, tag.as_deref(), tags, out).await
        }
        Commands::Show { id } => handle_show_command(service, &id, out).await,
        Commands::Sync => handle_sync_command(service, out).await,
        Commands::Tui => return None,
    };
    Some(result)
}

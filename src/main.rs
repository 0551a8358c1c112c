use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;

use clap::{CommandFactory, Parser};
use color_eyre::{Report, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use gist::app::runtime as session;
use gist::cli::{error_line, run_cli_command, Cli, Commands};
use gist::config::{self, Config};
use gist::service::GistService;

const LOG_ENV: &str = "GIST_LOG";
const LOG_FILE: &str = "gist.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Plain commands log to stderr.
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// The interactive session owns the screen, so logs go to a file in the
/// cache directory. Logging stays off when the file cannot be opened.
fn init_tui_logging() {
    let dir = config::cache_dir();
    let file = fs::create_dir_all(&dir).and_then(|_| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
    });

    if let Ok(file) = file {
        tracing_subscriber::registry()
            .with(env_filter())
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    }
}

fn exit_with_error(e: Report) -> ! {
    eprintln!("{}", error_line(&e));
    std::process::exit(1);
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    if command == Commands::Tui {
        init_tui_logging();
    } else {
        init_cli_logging();
    }
    color_eyre::install()?;

    let config = Config::load().unwrap_or_else(|e| exit_with_error(e.into()));
    tracing::debug!(?config, "configuration loaded");
    let service = GistService::from_config(&config);

    let runtime = tokio::runtime::Runtime::new()?;

    let outcome = {
        let mut out = io::stdout().lock();
        runtime.block_on(run_cli_command(command, &service, &mut out))
    };
    let result = match outcome {
        Some(result) => result,
        None => runtime.block_on(session::run(service)),
    };

    if let Err(e) = result {
        io::stdout().flush()?;
        exit_with_error(e);
    }
    Ok(())
}

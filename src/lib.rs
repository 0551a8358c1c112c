//! Gist manager: a local cache and orchestrator over GitHub Gists, with a
//! plain command line and an interactive terminal browser.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod terminal;
pub mod traits;
pub mod ui;

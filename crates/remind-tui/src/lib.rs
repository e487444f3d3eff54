//! Full-screen terminal client for the reminders API.
//!
//! Elm-style: [`update::update`] folds [`events::UiEvent`]s into
//! [`state::AppState`] and returns [`effects::UiEffect`]s, which the
//! [`runtime`] executes.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
pub use features::{groups, login, reminders};
use remind_core::ApiClient;
use remind_core::config::Config;
pub use runtime::{EffectDispatcher, TuiRuntime};

/// Runs the interactive client until the user quits.
pub fn run_interactive(config: &Config, client: ApiClient) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "remind needs a terminal.\n\
             Use `remind whoami` or `remind config path` for non-interactive use."
        );
    }

    tracing::info!(api_url = client.base_url(), "starting interactive client");
    let mut runtime = TuiRuntime::new(config, client)?;
    runtime.run()?;
    tracing::info!("interactive client exited");
    Ok(())
}

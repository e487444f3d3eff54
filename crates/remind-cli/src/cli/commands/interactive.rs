//! Default command: the full-screen client.

use std::sync::Arc;

use anyhow::{Context, Result};
use remind_core::config::{Config, paths};
use remind_core::session::FileStorage;
use remind_core::{ApiClient, SessionStore, logging};

pub fn run(config: &Config, api_url_flag: Option<&str>) -> Result<()> {
    let _log_guard = logging::init(&paths::logs_dir(), &config.log_level)?;

    let api_url = config.api_url(api_url_flag)?;
    let session = Arc::new(SessionStore::open(FileStorage::new(paths::session_path())));
    let client = ApiClient::with_timeout(&api_url, config.request_timeout(), session)
        .context("create API client")?;

    remind_tui::run_interactive(config, client)
}

//! Stored-session maintenance without starting the TUI.

use anyhow::{Context, Result};
use remind_core::SessionStore;
use remind_core::config::paths;
use remind_core::session::FileStorage;

fn open_store() -> SessionStore {
    SessionStore::open(FileStorage::new(paths::session_path()))
}

pub fn whoami() {
    match open_store().current_user() {
        Some(user) => println!("{}", user.username),
        None => println!("Not logged in"),
    }
}

pub fn logout() -> Result<()> {
    let store = open_store();
    let user = store.current_user();
    store.logout().context("clear stored session")?;
    match user {
        Some(user) => println!("Logged out {}", user.username),
        None => println!("Not logged in"),
    }
    Ok(())
}

pub mod config;
pub mod interactive;
pub mod session;

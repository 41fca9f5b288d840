//! Core server infrastructure: configuration, shared state, HTTP server

mod config;
mod server;
mod state;

pub use config::Config;
pub use server::Server;
pub use state::AppState;

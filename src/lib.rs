//! Read-only hotel, room and pricing API backed by SQLite.

pub mod api_docs;
pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;

pub use config::Config;
pub use state::AppState;

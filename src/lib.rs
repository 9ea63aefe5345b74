//! todo-server: HTTP backend for todo tracking
//!
//! One resource type exposed via CRUD over HTTP, persisted to SQLite.
//! Layers compose linearly: config -> pool -> schema setup -> router.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::AppConfig;
pub use http::{run_server, ServerConfig};

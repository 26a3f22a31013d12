//! Configuration loading for the preview app.
//!
//! Settings live in `conf/config.toml` as sectioned tables. Missing or
//! invalid entries fall back to defaults so the window can still open.

mod defaults;
mod io;
mod models;
mod tables;

pub use io::load_config;
pub use models::{AppConfig, LogLevel};

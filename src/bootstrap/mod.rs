pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_config, API_URL_ENV};
pub use wiring::{wire_dependencies, WiredApp, WiringError};

//! Subcommand handlers.
//!
//! Each handler drives the [`od_app::App`] the way a user would tap through
//! the screens, and returns a serializable result.

pub mod dto;
pub mod error;
pub mod orphanages;
pub mod registration;

pub use error::map_err;
pub use orphanages::{list_orphanages, show_orphanage};
pub use registration::{register_orphanage, RegisterRequest};

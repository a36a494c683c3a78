//! Screen stack and typed routes.
//!
//! The navigator is an explicit object handed to whoever drives the UI;
//! screen parameters live in the [`Route`] variants instead of an untyped
//! parameter bag.

mod header;
mod navigator;
mod route;

pub use header::ScreenHeader;
pub use navigator::{Navigator, Transition};
pub use route::{Route, Screen};

use thiserror::Error;

/// A screen was opened with parameters that do not belong to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("{expected} requires a selected position, but was opened as {found}")]
    MissingPosition { expected: Screen, found: Screen },
}

//! Presentation-side port implementations.

pub mod alert;

pub use alert::ConsoleAlert;

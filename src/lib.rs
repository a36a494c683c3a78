//! Command-line presentation layer for the orphanage directory.
//!
//! `bootstrap` loads configuration, installs tracing and wires the
//! adapters; `commands` drives the [`od_app::App`] screens for each
//! subcommand and returns serializable results.

pub mod adapters;
pub mod bootstrap;
pub mod commands;

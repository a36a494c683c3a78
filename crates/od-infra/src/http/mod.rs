//! REST adapter for the orphanage directory API.

mod client;
mod error;
mod multipart;

pub use client::{HttpApiConfig, HttpOrphanageApi};
pub use multipart::{build_form, local_path};

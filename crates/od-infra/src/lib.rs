//! # od-infra
//!
//! Adapters implementing the `od-core` ports:
//!
//! - [`http::HttpOrphanageApi`] talks to the directory REST API with reqwest;
//! - [`picker::FileImagePicker`] stands in for the device photo library by
//!   handing out local image files.

pub mod http;
pub mod picker;

pub use http::{HttpApiConfig, HttpOrphanageApi};
pub use picker::FileImagePicker;

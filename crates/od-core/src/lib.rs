//! # od-core
//!
//! Core domain models and business rules for the orphanage directory client.
//!
//! This crate contains pure logic without any infrastructure dependencies:
//! value objects, the registration draft and its multipart payload, the
//! typed navigation routes, and the port traits implemented by `od-infra`.

pub mod config;
pub mod geo;
pub mod ids;
pub mod navigation;
pub mod orphanage;
pub mod ports;
pub mod registration;

// Re-export commonly used types at the crate root
pub use config::AppConfig;
pub use geo::{Coordinate, CoordinateError, MapRegion};
pub use ids::{DraftId, OrphanageId};
pub use navigation::{Navigator, Route, Screen, ScreenHeader, Transition};
pub use orphanage::{OrphanageDetail, OrphanageImage, OrphanageSummary};
pub use registration::{DraftRegistration, LocalImage, RegistrationForm, RegistrationPayload};

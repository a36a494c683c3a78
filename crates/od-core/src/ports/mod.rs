//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `od-app` and the
//! adapters in `od-infra` (HTTP, image picker) or the presentation layer
//! (alerts). Use cases only ever see these traits.

pub mod alert;
pub mod image_picker;
pub mod orphanage_api;

pub use alert::AlertPort;
pub use image_picker::{
    ImagePickerPort, MediaTypes, PermissionStatus, PickerError, PickerOptions, PickerResult,
};
pub use orphanage_api::{ApiError, OrphanageApiPort};

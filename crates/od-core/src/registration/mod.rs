//! Registration of a new orphanage.
//!
//! ## Lifecycle / 生命周期
//!
//! ```text
//! Coordinate ──> RegistrationForm ──snapshot()──> DraftRegistration ──> RegistrationPayload
//!                 (mutable, one owner)             (immutable)            (multipart parts)
//! ```
//!
//! Nothing here talks to the network; the payload is encoded into an actual
//! HTTP body by the infrastructure layer.

mod draft;
mod form;
mod image;
mod payload;

pub use draft::DraftRegistration;
pub use form::RegistrationForm;
pub use image::LocalImage;
pub use payload::{
    ImagePart, RegistrationPayload, TextPart, IMAGES_FIELD, IMAGE_CONTENT_TYPE,
};

//! Orphanage registration flow.
//!
//! Position selection → data entry → multipart submission. The flow owns
//! the transient state of one registration attempt; nothing survives it.

mod add_image;
mod error;
mod flow;
mod select_position;
mod submit;

pub use add_image::{AddImage, PickOutcome, PERMISSION_DENIED_MESSAGE};
pub use error::{FlowError, SubmitError};
pub use flow::RegistrationFlow;
pub use select_position::PositionSelector;
pub use submit::SubmitRegistration;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::ids::DraftId;

use super::{LocalImage, RegistrationPayload};

/// Immutable snapshot of a registration form, ready to submit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftRegistration {
    pub id: DraftId,
    pub name: String,
    pub about: String,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
    pub images: Vec<LocalImage>,
    pub position: Coordinate,
}

impl DraftRegistration {
    pub fn to_payload(&self) -> RegistrationPayload {
        RegistrationPayload::from_draft(self)
    }
}

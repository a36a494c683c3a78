use crate::geo::Coordinate;
use crate::ids::DraftId;
use crate::navigation::{Route, RouteError, Screen};

use super::{DraftRegistration, LocalImage};

/// Mutable state of the data-entry screen for one registration attempt.
///
/// A form can only be built from a [`Coordinate`], so a draft without a
/// position cannot exist. Text fields are not validated: empty values are
/// submitted as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm {
    draft_id: DraftId,
    position: Coordinate,
    pub name: String,
    pub about: String,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
    images: Vec<LocalImage>,
}

impl RegistrationForm {
    pub fn new(position: Coordinate) -> Self {
        Self {
            draft_id: DraftId::new(),
            position,
            name: String::new(),
            about: String::new(),
            instructions: String::new(),
            opening_hours: String::new(),
            open_on_weekends: true,
            images: Vec::new(),
        }
    }

    /// Builds the form from the parameters of the route that opened it.
    ///
    /// Any route other than [`Route::OrphanageData`] is a wiring mistake and
    /// is rejected instead of producing a form with a made-up position.
    pub fn from_route(route: &Route) -> Result<Self, RouteError> {
        match route {
            Route::OrphanageData { position } => Ok(Self::new(*position)),
            other => Err(RouteError::MissingPosition {
                expected: Screen::OrphanageData,
                found: other.screen(),
            }),
        }
    }

    pub fn draft_id(&self) -> &DraftId {
        &self.draft_id
    }

    pub fn position(&self) -> Coordinate {
        self.position
    }

    pub fn images(&self) -> &[LocalImage] {
        &self.images
    }

    /// Appends a picked image; earlier images keep their order.
    pub fn push_image(&mut self, image: LocalImage) {
        self.images.push(image);
    }

    /// Freezes the current field values into a submittable draft.
    pub fn snapshot(&self) -> DraftRegistration {
        DraftRegistration {
            id: self.draft_id.clone(),
            name: self.name.clone(),
            about: self.about.clone(),
            instructions: self.instructions.clone(),
            opening_hours: self.opening_hours.clone(),
            open_on_weekends: self.open_on_weekends,
            images: self.images.clone(),
            position: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::OrphanageId;

    fn position() -> Coordinate {
        Coordinate::new(-6.52, -38.42).unwrap()
    }

    #[test]
    fn starts_empty_and_open_on_weekends() {
        let form = RegistrationForm::new(position());
        assert!(form.name.is_empty());
        assert!(form.images().is_empty());
        assert!(form.open_on_weekends);
        assert_eq!(form.position(), position());
    }

    #[test]
    fn from_route_takes_position_parameter() {
        let route = Route::OrphanageData {
            position: position(),
        };
        let form = RegistrationForm::from_route(&route).unwrap();
        assert_eq!(form.position(), position());
    }

    #[test]
    fn from_route_fails_fast_without_position() {
        let err = RegistrationForm::from_route(&Route::OrphanageDetails {
            id: OrphanageId::new(1),
        })
        .unwrap_err();

        assert_eq!(
            err,
            RouteError::MissingPosition {
                expected: Screen::OrphanageData,
                found: Screen::OrphanageDetails,
            }
        );
    }

    #[test]
    fn images_keep_pick_order() {
        let mut form = RegistrationForm::new(position());
        form.push_image(LocalImage::new("file://a.jpg"));
        form.push_image(LocalImage::new("file://b.jpg"));
        form.push_image(LocalImage::new("file://a.jpg"));

        let uris: Vec<&str> = form.images().iter().map(LocalImage::uri).collect();
        assert_eq!(uris, vec!["file://a.jpg", "file://b.jpg", "file://a.jpg"]);
    }

    #[test]
    fn snapshot_does_not_change_the_form() {
        let mut form = RegistrationForm::new(position());
        form.name = "Lar Feliz".to_string();
        form.push_image(LocalImage::new("file://a.jpg"));
        let before = form.clone();

        let draft = form.snapshot();

        assert_eq!(form, before);
        assert_eq!(&draft.id, form.draft_id());
        assert_eq!(draft.name, "Lar Feliz");
        assert_eq!(draft.images.len(), 1);
    }

    #[test]
    fn snapshots_share_the_draft_id() {
        let form = RegistrationForm::new(position());
        assert_eq!(form.snapshot().id, form.snapshot().id);
        assert_ne!(
            form.snapshot().id,
            RegistrationForm::new(position()).snapshot().id
        );
    }
}

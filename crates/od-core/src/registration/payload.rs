use serde::Serialize;

use super::{DraftRegistration, LocalImage};

/// Multipart field name shared by every image part.
pub const IMAGES_FIELD: &str = "images";

/// Content type declared for every image part.
pub const IMAGE_CONTENT_TYPE: &str = "image/jpg";

/// A text part of the multipart body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextPart {
    pub name: &'static str,
    pub value: String,
}

/// A file part of the multipart body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImagePart {
    pub field: &'static str,
    pub file_name: String,
    pub content_type: &'static str,
    pub source: LocalImage,
}

/// Wire-level description of a `POST orphanages` body.
///
/// Field order follows the server form: name, about, latitude, longitude,
/// instructions, opening_hours, open_on_weekends, then the images.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrationPayload {
    pub text: Vec<TextPart>,
    pub images: Vec<ImagePart>,
}

impl RegistrationPayload {
    pub fn from_draft(draft: &DraftRegistration) -> Self {
        let text = vec![
            TextPart {
                name: "name",
                value: draft.name.clone(),
            },
            TextPart {
                name: "about",
                value: draft.about.clone(),
            },
            TextPart {
                name: "latitude",
                value: draft.position.latitude().to_string(),
            },
            TextPart {
                name: "longitude",
                value: draft.position.longitude().to_string(),
            },
            TextPart {
                name: "instructions",
                value: draft.instructions.clone(),
            },
            TextPart {
                name: "opening_hours",
                value: draft.opening_hours.clone(),
            },
            TextPart {
                name: "open_on_weekends",
                value: draft.open_on_weekends.to_string(),
            },
        ];

        let images = draft
            .images
            .iter()
            .enumerate()
            .map(|(index, image)| ImagePart {
                field: IMAGES_FIELD,
                file_name: format!("image_{index}.jpg"),
                content_type: IMAGE_CONTENT_TYPE,
                source: image.clone(),
            })
            .collect();

        Self { text, images }
    }

    /// Value of a text part by name.
    pub fn text_value(&self, name: &str) -> Option<&str> {
        self.text
            .iter()
            .find(|part| part.name == name)
            .map(|part| part.value.as_str())
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("image picker unavailable: {0}")]
    Unavailable(String),

    #[error("not an image: {0}")]
    NotAnImage(String),
}

/// Answer to a media-library permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionStatus {
    Granted,
    Denied,
    Undetermined,
}

impl PermissionStatus {
    pub fn is_granted(self) -> bool {
        self == PermissionStatus::Granted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaTypes {
    Images,
    Videos,
    All,
}

/// Options passed to the library picker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickerOptions {
    pub media_types: MediaTypes,
    /// Let the user crop before returning.
    pub allows_editing: bool,
    /// Compression quality from 0.0 to 1.0.
    pub quality: f32,
}

impl PickerOptions {
    /// Photos only, editable, uncompressed.
    pub fn photos() -> Self {
        Self {
            media_types: MediaTypes::Images,
            allows_editing: true,
            quality: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickerResult {
    Cancelled,
    Picked { uri: String },
}

/// OS-level photo library.
#[async_trait::async_trait]
pub trait ImagePickerPort: Send + Sync {
    async fn request_media_library_permission(&self) -> Result<PermissionStatus, PickerError>;

    async fn launch_image_library(&self, options: PickerOptions)
        -> Result<PickerResult, PickerError>;
}

#[cfg(test)]
mockall::mock! {
    pub ImagePicker {}

    #[async_trait::async_trait]
    impl ImagePickerPort for ImagePicker {
        async fn request_media_library_permission(&self) -> Result<PermissionStatus, PickerError>;
        async fn launch_image_library(&self, options: PickerOptions)
            -> Result<PickerResult, PickerError>;
    }
}

use std::path::PathBuf;

use od_core::ports::ApiError;
use od_core::registration::RegistrationPayload;
use reqwest::multipart::{Form, Part};
use tracing::debug;

const FILE_SCHEME: &str = "file://";

/// Filesystem path behind a picked image URI.
///
/// Accepts `file://` URIs and bare paths.
pub fn local_path(uri: &str) -> PathBuf {
    PathBuf::from(uri.strip_prefix(FILE_SCHEME).unwrap_or(uri))
}

/// Encode a registration as a `multipart/form-data` body.
///
/// Text parts go first in payload order, then one `images` part per picked
/// image. Every image is read fully into memory before the request starts,
/// so an unreadable file fails the submission without any network traffic.
pub async fn build_form(payload: &RegistrationPayload) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for part in &payload.text {
        form = form.text(part.name, part.value.clone());
    }

    for image in &payload.images {
        let uri = image.source.uri();
        let bytes = tokio::fs::read(local_path(uri))
            .await
            .map_err(|e| ApiError::Image {
                uri: uri.to_string(),
                reason: e.to_string(),
            })?;
        debug!(uri, file_name = %image.file_name, size = bytes.len(), "image part read");

        let part = Part::bytes(bytes)
            .file_name(image.file_name.clone())
            .mime_str(image.content_type)
            .map_err(|e| ApiError::Image {
                uri: uri.to_string(),
                reason: e.to_string(),
            })?;
        form = form.part(image.field, part);
    }

    Ok(form)
}

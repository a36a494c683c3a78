use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use od_core::ports::{AlertPort, ImagePickerPort, PickerError, PickerOptions, PickerResult};
use od_core::registration::{LocalImage, RegistrationForm};

/// Alert shown when the photo library permission is refused.
pub const PERMISSION_DENIED_MESSAGE: &str = "We need access to your photos to attach images.";

/// What happened to one "+" tap on the photos row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Added(LocalImage),
    Cancelled,
    PermissionDenied,
}

/// Pick one photo from the device library and append it to the form.
pub struct AddImage {
    picker: Arc<dyn ImagePickerPort>,
    alert: Arc<dyn AlertPort>,
}

impl AddImage {
    pub fn new(picker: Arc<dyn ImagePickerPort>, alert: Arc<dyn AlertPort>) -> Self {
        Self { picker, alert }
    }

    /// Denied and cancelled picks leave the image list untouched.
    pub async fn execute(&self, form: &mut RegistrationForm) -> Result<PickOutcome, PickerError> {
        let span = info_span!(
            "usecase.add_image.execute",
            draft_id = %form.draft_id(),
            images = form.images().len()
        );
        async {
            let status = self.picker.request_media_library_permission().await?;
            if !status.is_granted() {
                warn!(?status, "media library permission not granted");
                self.alert.alert(PERMISSION_DENIED_MESSAGE).await;
                return Ok(PickOutcome::PermissionDenied);
            }

            match self
                .picker
                .launch_image_library(PickerOptions::photos())
                .await?
            {
                PickerResult::Cancelled => {
                    debug!("image pick cancelled");
                    Ok(PickOutcome::Cancelled)
                }
                PickerResult::Picked { uri } => {
                    let image = LocalImage::new(uri);
                    form.push_image(image.clone());
                    info!(uri = image.uri(), total = form.images().len(), "image added");
                    Ok(PickOutcome::Added(image))
                }
            }
        }
        .instrument(span)
        .await
    }
}

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tokio::io::AsyncReadExt;
use tracing::{debug, info, warn};

use od_core::ports::{
    ImagePickerPort, MediaTypes, PermissionStatus, PickerError, PickerOptions, PickerResult,
};

/// Bytes read to sniff the image format.
const HEADER_LEN: usize = 32;

/// Photo library backed by local files.
///
/// Each launch hands out the next queued path. An empty queue or a path that
/// no longer exists behaves like the user dismissing the library.
pub struct FileImagePicker {
    access_granted: bool,
    queue: Mutex<VecDeque<PathBuf>>,
}

impl FileImagePicker {
    pub fn new(access_granted: bool, paths: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            access_granted,
            queue: Mutex::new(paths.into_iter().collect()),
        }
    }

    pub fn enqueue(&self, path: PathBuf) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(path);
    }

    pub fn pending(&self) -> usize {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn next_path(&self) -> Option<PathBuf> {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }
}

#[async_trait]
impl ImagePickerPort for FileImagePicker {
    async fn request_media_library_permission(&self) -> Result<PermissionStatus, PickerError> {
        Ok(if self.access_granted {
            PermissionStatus::Granted
        } else {
            PermissionStatus::Denied
        })
    }

    async fn launch_image_library(
        &self,
        options: PickerOptions,
    ) -> Result<PickerResult, PickerError> {
        if options.media_types == MediaTypes::Videos {
            return Err(PickerError::Unavailable(
                "video selection is not supported".to_string(),
            ));
        }

        let Some(path) = self.next_path() else {
            debug!("no image queued, treating as cancelled");
            return Ok(PickerResult::Cancelled);
        };

        let absolute = match tokio::fs::canonicalize(&path).await {
            Ok(absolute) => absolute,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "picked file not found, treating as cancelled");
                return Ok(PickerResult::Cancelled);
            }
        };

        let uri = format!("file://{}", absolute.display());
        let format = sniff_format(&absolute)
            .await
            .ok_or_else(|| PickerError::NotAnImage(uri.clone()))?;
        info!(%uri, ?format, "image picked");
        Ok(PickerResult::Picked { uri })
    }
}

async fn sniff_format(path: &std::path::Path) -> Option<image::ImageFormat> {
    let mut file = tokio::fs::File::open(path).await.ok()?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64)
        .read_to_end(&mut header)
        .await
        .ok()?;
    image::guess_format(&header).ok()
}

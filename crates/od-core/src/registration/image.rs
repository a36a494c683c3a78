use serde::{Deserialize, Serialize};

/// Handle to an image picked from the device library.
///
/// The URI is opaque to the domain; only the infrastructure knows how to
/// turn it into bytes. It is meaningful for one submission only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocalImage {
    uri: String,
}

impl LocalImage {
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }
}

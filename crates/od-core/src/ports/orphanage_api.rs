use thiserror::Error;

use crate::ids::OrphanageId;
use crate::orphanage::{OrphanageDetail, OrphanageSummary};
use crate::registration::RegistrationPayload;

/// Failures of the directory API, as seen by the use cases.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("orphanage not found: {0}")]
    NotFound(String),

    #[error("server error: {status}")]
    Server { status: u16 },

    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("cannot read image {uri}: {reason}")]
    Image { uri: String, reason: String },

    #[error("invalid API configuration: {0}")]
    Config(String),
}

impl ApiError {
    /// Whether sending the same request again may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ApiError::Timeout | ApiError::Network(_) | ApiError::Server { .. }
        )
    }
}

/// REST endpoints under `orphanages`.
#[async_trait::async_trait]
pub trait OrphanageApiPort: Send + Sync {
    /// `GET orphanages`
    async fn list_orphanages(&self) -> Result<Vec<OrphanageSummary>, ApiError>;

    /// `GET orphanages/{id}`
    async fn get_orphanage(&self, id: OrphanageId) -> Result<OrphanageDetail, ApiError>;

    /// `POST orphanages` as multipart form data. The response body is ignored.
    async fn create_orphanage(&self, payload: &RegistrationPayload) -> Result<(), ApiError>;
}

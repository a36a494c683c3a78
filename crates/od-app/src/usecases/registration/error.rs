use od_core::navigation::RouteError;
use od_core::ports::{ApiError, PickerError};

/// Errors produced by a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("a submission for this draft is already in flight")]
    AlreadyInFlight,
    #[error("this draft has already been registered")]
    AlreadySubmitted,
    #[error("submission cancelled")]
    Cancelled,
    #[error("registration request failed: {0}")]
    Api(#[from] ApiError),
}

impl SubmitError {
    /// Whether the same draft may be submitted again.
    pub fn allows_retry(&self) -> bool {
        matches!(self, SubmitError::Cancelled | SubmitError::Api(_))
    }
}

/// Errors produced by the registration flow orchestration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    #[error("no position selected on the map")]
    NoPositionSelected,
    #[error("the data screen is not open")]
    DataScreenClosed,
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error("image picker failed: {0}")]
    Picker(#[from] PickerError),
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

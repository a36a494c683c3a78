//! Orphanage directory application layer
//!
//! This crate contains the use cases and the screen orchestration that sits
//! between the presentation layer and the ports defined in `od-core`.

pub mod app;
pub mod deps;
pub mod usecases;

pub use app::{App, AppError, DetailsState, MapState};
pub use deps::AppDeps;
pub use usecases::registration::{
    AddImage, FlowError, PickOutcome, PositionSelector, RegistrationFlow, SubmitError,
    SubmitRegistration,
};
pub use usecases::{GetOrphanageDetails, ListOrphanages};

//! Business logic use cases
//!
//! ```text
//! OrphanagesMap ──focus──> ListOrphanages
//!      │ marker tap
//!      ▼
//! OrphanageDetails ──────> GetOrphanageDetails
//!
//! "+" ─> SelectMapPosition ─confirm─> OrphanageData ─submit─> OrphanagesMap
//!         (PositionSelector)          (AddImage, SubmitRegistration)
//! ```

pub mod get_orphanage_details;
pub mod list_orphanages;
pub mod registration;

pub use get_orphanage_details::GetOrphanageDetails;
pub use list_orphanages::ListOrphanages;

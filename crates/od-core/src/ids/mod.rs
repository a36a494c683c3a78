//! ID type wrappers for type safety.

mod id_macro;

pub mod draft_id;
pub mod orphanage_id;

pub use draft_id::DraftId;
pub use orphanage_id::OrphanageId;

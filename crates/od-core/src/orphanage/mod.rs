//! Orphanage records as served by the directory API.

mod detail;
mod summary;

pub use detail::{directions_url, OrphanageDetail, OrphanageImage};
pub use summary::{footer_label, OrphanageSummary};

use serde::{Deserialize, Serialize};

use crate::geo::{Coordinate, CoordinateError};
use crate::ids::OrphanageId;

/// Map marker data returned by `GET orphanages`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrphanageSummary {
    pub id: OrphanageId,
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
}

impl OrphanageSummary {
    pub fn coordinate(&self) -> Result<Coordinate, CoordinateError> {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Footer text of the listing screen.
pub fn footer_label(count: usize) -> String {
    format!("{count} orphanages")
}

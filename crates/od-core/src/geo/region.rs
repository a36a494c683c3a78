use serde::{Deserialize, Serialize};

use super::Coordinate;

/// Visible map area: a center plus zoom deltas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub center: Coordinate,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl MapRegion {
    pub const DEFAULT_LATITUDE: f64 = -6.5205485;
    pub const DEFAULT_LONGITUDE: f64 = -38.4155765;
    pub const DEFAULT_DELTA: f64 = 0.008;

    pub fn new(center: Coordinate, delta: f64) -> Self {
        Self {
            center,
            latitude_delta: delta,
            longitude_delta: delta,
        }
    }
}

impl Default for MapRegion {
    fn default() -> Self {
        Self {
            center: Coordinate::from_trusted(Self::DEFAULT_LATITUDE, Self::DEFAULT_LONGITUDE),
            latitude_delta: Self::DEFAULT_DELTA,
            longitude_delta: Self::DEFAULT_DELTA,
        }
    }
}

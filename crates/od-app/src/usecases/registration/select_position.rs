use od_core::geo::{Coordinate, MapRegion};

use super::FlowError;

/// Map step of the registration: the user taps to place a marker and
/// confirms it.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionSelector {
    region: MapRegion,
    selected: Option<Coordinate>,
}

impl PositionSelector {
    pub fn new(region: MapRegion) -> Self {
        Self {
            region,
            selected: None,
        }
    }

    pub fn region(&self) -> &MapRegion {
        &self.region
    }

    pub fn selected(&self) -> Option<Coordinate> {
        self.selected
    }

    /// Map tap; a later tap moves the marker.
    pub fn select(&mut self, position: Coordinate) {
        self.selected = Some(position);
    }

    /// "Next" button: yields the selected coordinate.
    pub fn confirm(&self) -> Result<Coordinate, FlowError> {
        self.selected.ok_or(FlowError::NoPositionSelected)
    }
}

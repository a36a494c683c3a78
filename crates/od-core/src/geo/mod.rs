//! Geographic value objects.

mod coordinate;
mod region;

pub use coordinate::{Coordinate, CoordinateError};
pub use region::MapRegion;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;
use crate::ids::OrphanageId;

use super::ScreenHeader;

/// Screens of the application, without parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Screen {
    OrphanagesMap,
    OrphanageDetails,
    SelectMapPosition,
    OrphanageData,
}

impl Screen {
    pub fn name(self) -> &'static str {
        match self {
            Screen::OrphanagesMap => "OrphanagesMap",
            Screen::OrphanageDetails => "OrphanageDetails",
            Screen::SelectMapPosition => "SelectMapPosition",
            Screen::OrphanageData => "OrphanageData",
        }
    }

    /// Screens that belong to the registration flow.
    pub fn is_registration(self) -> bool {
        matches!(self, Screen::SelectMapPosition | Screen::OrphanageData)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A screen together with the parameters it is opened with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "screen", content = "params")]
pub enum Route {
    OrphanagesMap,
    OrphanageDetails { id: OrphanageId },
    SelectMapPosition,
    OrphanageData { position: Coordinate },
}

impl Route {
    pub fn screen(&self) -> Screen {
        match self {
            Route::OrphanagesMap => Screen::OrphanagesMap,
            Route::OrphanageDetails { .. } => Screen::OrphanageDetails,
            Route::SelectMapPosition => Screen::SelectMapPosition,
            Route::OrphanageData { .. } => Screen::OrphanageData,
        }
    }

    /// Header shown above the screen; the map has none.
    pub fn header(&self) -> Option<ScreenHeader> {
        match self.screen() {
            Screen::OrphanagesMap => None,
            Screen::OrphanageDetails => Some(ScreenHeader::new("Orphanage").without_close()),
            Screen::SelectMapPosition => Some(ScreenHeader::new("Select on map")),
            Screen::OrphanageData => Some(ScreenHeader::new("Enter details")),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::OrphanageDetails { id } => write!(f, "{}(id={id})", self.screen()),
            Route::OrphanageData { position } => {
                write!(f, "{}(position={position})", self.screen())
            }
            _ => write!(f, "{}", self.screen()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_follow_screen() {
        assert!(Route::OrphanagesMap.header().is_none());

        let details = Route::OrphanageDetails {
            id: OrphanageId::new(1),
        }
        .header()
        .unwrap();
        assert_eq!(details.title, "Orphanage");
        assert!(!details.show_close);

        let select = Route::SelectMapPosition.header().unwrap();
        assert_eq!(select.title, "Select on map");
        assert!(select.show_close);
    }

    #[test]
    fn serializes_with_screen_tag() {
        let json = serde_json::to_value(Route::OrphanageDetails {
            id: OrphanageId::new(9),
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"screen": "OrphanageDetails", "params": {"id": 9}})
        );
    }

    #[test]
    fn display_includes_parameters() {
        let position = Coordinate::new(-6.5, -38.25).unwrap();
        assert_eq!(
            Route::OrphanageData { position }.to_string(),
            "OrphanageData(position=-6.5,-38.25)"
        );
        assert_eq!(Route::OrphanagesMap.to_string(), "OrphanagesMap");
    }
}

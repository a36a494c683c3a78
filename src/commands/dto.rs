use std::fmt;

use od_core::orphanage::{OrphanageDetail, OrphanageSummary};
use serde::Serialize;

/// Output of `list`: what the map shows.
#[derive(Debug, Clone, Serialize)]
pub struct MapDto {
    pub orphanages: Vec<OrphanageSummary>,
    pub footer: String,
}

impl fmt::Display for MapDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for orphanage in &self.orphanages {
            writeln!(
                f,
                "{:>5}  {:<32} ({}, {})",
                orphanage.id.get(), orphanage.name, orphanage.latitude, orphanage.longitude
            )?;
        }
        write!(f, "{}", self.footer)
    }
}

/// Output of `show`: the details screen.
#[derive(Debug, Clone, Serialize)]
pub struct DetailsDto {
    #[serde(flatten)]
    pub detail: OrphanageDetail,
    pub directions_url: String,
}

impl From<OrphanageDetail> for DetailsDto {
    fn from(detail: OrphanageDetail) -> Self {
        Self {
            directions_url: detail.directions_url(),
            detail,
        }
    }
}

impl fmt::Display for DetailsDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let d = &self.detail;
        writeln!(f, "{} (#{})", d.name, d.id)?;
        writeln!(f, "{}", d.about)?;
        writeln!(f)?;
        writeln!(f, "Instructions: {}", d.instructions)?;
        writeln!(f, "Opening hours: {}", d.opening_hours)?;
        writeln!(
            f,
            "{}",
            if d.open_on_weekends {
                "Open on weekends"
            } else {
                "Closed on weekends"
            }
        )?;
        for image in &d.images {
            writeln!(f, "Image: {}", image.url)?;
        }
        write!(f, "Directions: {}", self.directions_url)
    }
}

/// Output of `register`.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationDto {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub images_attached: usize,
    pub images_skipped: usize,
    /// Screen shown once the flow finished.
    pub screen: String,
    pub map: MapDto,
    pub alerts: Vec<String>,
}

impl fmt::Display for RegistrationDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Registered {:?} at ({}, {}) with {} image(s)",
            self.name, self.latitude, self.longitude, self.images_attached
        )?;
        if self.images_skipped > 0 {
            writeln!(f, "Skipped {} image(s)", self.images_skipped)?;
        }
        writeln!(f, "Now on {}", self.screen)?;
        write!(f, "{}", self.map.footer)
    }
}

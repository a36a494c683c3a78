use serde::{Deserialize, Serialize};

use crate::ids::OrphanageId;

/// Image attached to an orphanage on the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrphanageImage {
    pub id: u64,
    pub url: String,
}

/// Full record returned by `GET orphanages/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrphanageDetail {
    pub id: OrphanageId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub about: String,
    pub instructions: String,
    pub opening_hours: String,
    pub open_on_weekends: bool,
    #[serde(default)]
    pub images: Vec<OrphanageImage>,
}

impl OrphanageDetail {
    pub fn directions_url(&self) -> String {
        directions_url(self.latitude, self.longitude)
    }
}

/// Google Maps route link ending at the given position.
pub fn directions_url(latitude: f64, longitude: f64) -> String {
    format!("https://www.google.com/maps/dir/?api=1&destination={latitude},{longitude}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 3,
            "name": "Lar Feliz",
            "latitude": -6.52,
            "longitude": -38.42,
            "about": "Children up to 12",
            "instructions": "Call first",
            "opening_hours": "8h to 18h",
            "open_on_weekends": true,
            "images": [
                {"id": 10, "url": "http://localhost:3333/uploads/a.jpg"},
                {"id": 11, "url": "http://localhost:3333/uploads/b.jpg"}
            ]
        }"#
    }

    #[test]
    fn decodes_nested_images_in_order() {
        let detail: OrphanageDetail = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(detail.id, OrphanageId::new(3));
        assert!(detail.open_on_weekends);
        let ids: Vec<u64> = detail.images.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![10, 11]);
    }

    #[test]
    fn missing_images_decode_as_empty() {
        let json = r#"{"id": 1, "name": "n", "latitude": 0, "longitude": 0,
            "about": "", "instructions": "", "opening_hours": "", "open_on_weekends": false}"#;
        let detail: OrphanageDetail = serde_json::from_str(json).unwrap();
        assert!(detail.images.is_empty());
    }

    #[test]
    fn directions_url_points_at_destination() {
        let detail: OrphanageDetail = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(
            detail.directions_url(),
            "https://www.google.com/maps/dir/?api=1&destination=-6.52,-38.42"
        );
    }
}

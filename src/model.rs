//! Shared data-transfer objects used by both server and client.

use serde::{Deserialize, Serialize};

// ─── Detection ───────────────────────────────────────────────────────────────

/// A single wildlife sighting, exactly as the detection service sends it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WildlifeDetection {
    pub id: i64,
    pub animal_name: String,
    pub detection_time: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
}

impl WildlifeDetection {
    /// Human-readable rendering of `detection_time`.
    ///
    /// RFC 3339 input renders like `Mar 1, 2024, 10:00 AM`; anything the
    /// parser rejects is shown verbatim.
    pub fn display_time(&self) -> String {
        chrono::DateTime::parse_from_rfc3339(&self.detection_time)
            .map(|dt| dt.format("%b %-d, %Y, %-I:%M %p").to_string())
            .unwrap_or_else(|_| self.detection_time.clone())
    }

    /// Flatten into the pin record handed to the map bridge.
    pub fn pin(&self) -> MarkerPin {
        MarkerPin {
            id: self.id,
            animal_name: self.animal_name.clone(),
            time_label: self.display_time(),
            latitude: self.latitude,
            longitude: self.longitude,
            image_url: self.image_url.clone(),
        }
    }
}

// ─── Map centre ──────────────────────────────────────────────────────────────

/// Centre shown before any detections have been loaded (Kochi, Kerala).
pub const FALLBACK_CENTER: MapCenter = MapCenter {
    latitude: 9.9816,
    longitude: 76.2999,
};

/// Initial map zoom level.
pub const DEFAULT_ZOOM: u32 = 10;

/// A map centre coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapCenter {
    pub latitude: f64,
    pub longitude: f64,
}

impl MapCenter {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Default for MapCenter {
    fn default() -> Self {
        FALLBACK_CENTER
    }
}

// ─── Marker pins ─────────────────────────────────────────────────────────────

/// Flat marker record passed to the Leaflet glue as JSON. The time label is
/// pre-formatted so the glue only does templating.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarkerPin {
    pub id: i64,
    pub animal_name: String,
    pub time_label: String,
    pub latitude: f64,
    pub longitude: f64,
    pub image_url: String,
}

// ─── Wire decoding ───────────────────────────────────────────────────────────

/// Why a detection-service response body was rejected.
#[derive(Debug, thiserror::Error)]
pub enum SpottingDecodeError {
    #[error("invalid response: {0}")]
    NotAnArray(serde_json::Value),
    #[error("malformed detection record: {0}")]
    BadRecord(#[from] serde_json::Error),
}

/// Decode a response body into a detection batch.
///
/// The service contract is a JSON array of detection objects; any other
/// top-level shape, or a record that does not decode, is rejected wholesale.
pub fn decode_spottings(
    body: serde_json::Value,
) -> Result<Vec<WildlifeDetection>, SpottingDecodeError> {
    if !body.is_array() {
        return Err(SpottingDecodeError::NotAnArray(body));
    }
    Ok(serde_json::from_value(body)?)
}

// ─── tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_batch() -> serde_json::Value {
        json!([
            {
                "id": 7,
                "animal_name": "Bengal Tiger",
                "detection_time": "2024-03-01T10:00:00Z",
                "latitude": 25.32,
                "longitude": 85.14,
                "image_url": "https://img.example/tiger.jpg"
            },
            {
                "id": 8,
                "animal_name": "Indian Elephant",
                "detection_time": "2024-03-01T11:30:00Z",
                "latitude": 25.40,
                "longitude": 85.20,
                "image_url": "https://img.example/elephant.jpg"
            }
        ])
    }

    #[test]
    fn test_decode_batch() {
        let batch = decode_spottings(sample_batch()).unwrap();
        assert_eq!(batch.len(), 2);
        assert_eq!(batch[0].id, 7);
        assert_eq!(batch[0].animal_name, "Bengal Tiger");
        assert_eq!(batch[1].latitude, 25.40);
        assert_eq!(batch[1].image_url, "https://img.example/elephant.jpg");
    }

    #[test]
    fn test_decode_empty_batch() {
        let batch = decode_spottings(json!([])).unwrap();
        assert!(batch.is_empty());
    }

    #[test]
    fn test_decode_rejects_non_array() {
        let err = decode_spottings(json!({"error": "not found"})).unwrap_err();
        assert!(matches!(err, SpottingDecodeError::NotAnArray(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_decode_rejects_bad_record() {
        let err = decode_spottings(json!([{"id": "seven"}])).unwrap_err();
        assert!(matches!(err, SpottingDecodeError::BadRecord(_)));
    }

    #[test]
    fn test_display_time_rfc3339() {
        let det = WildlifeDetection {
            id: 1,
            animal_name: "Leopard".into(),
            detection_time: "2024-03-01T10:00:00Z".into(),
            latitude: 0.0,
            longitude: 0.0,
            image_url: String::new(),
        };
        assert_eq!(det.display_time(), "Mar 1, 2024, 10:00 AM");
    }

    #[test]
    fn test_display_time_afternoon() {
        let det = WildlifeDetection {
            id: 1,
            animal_name: "Leopard".into(),
            detection_time: "2024-12-25T18:05:00+05:30".into(),
            latitude: 0.0,
            longitude: 0.0,
            image_url: String::new(),
        };
        assert_eq!(det.display_time(), "Dec 25, 2024, 6:05 PM");
    }

    #[test]
    fn test_display_time_falls_back_to_raw() {
        let det = WildlifeDetection {
            id: 1,
            animal_name: "Leopard".into(),
            detection_time: "yesterday afternoon".into(),
            latitude: 0.0,
            longitude: 0.0,
            image_url: String::new(),
        };
        assert_eq!(det.display_time(), "yesterday afternoon");
    }

    #[test]
    fn test_pin_carries_name_and_time_label() {
        let batch = decode_spottings(sample_batch()).unwrap();
        let pin = batch[0].pin();
        assert_eq!(pin.id, 7);
        assert_eq!(pin.animal_name, "Bengal Tiger");
        assert_eq!(pin.time_label, "Mar 1, 2024, 10:00 AM");
        assert_eq!(pin.latitude, 25.32);
    }

    #[test]
    fn test_fallback_center() {
        let c = MapCenter::default();
        assert_eq!(c, FALLBACK_CENTER);
        assert!((c.latitude - 9.9816).abs() < 1e-9);
        assert!((c.longitude - 76.2999).abs() < 1e-9);
    }
}

//! Source-file hike records, exactly as they appear in the import JSON.

use serde::{Deserialize, Serialize};

/// One hike entry from the import file.
///
/// Required fields are plain strings; everything else is optional. Values are
/// kept verbatim so the normalizer can retain the original text next to each
/// derived number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawHike {
    pub number: i32,
    pub name: String,
    pub description: String,
    pub difficulty: String,
    #[serde(rename = "class")]
    pub class_text: String,
    pub crowd_level: String,
    pub round_trip_distance: String,
    pub hiking_time: String,
    pub start_elevation: String,
    pub total_elevation_gain: String,
    pub terrain: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gear_advisor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_elevation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peak_elevations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailhead_gps: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_time_to_climb: Option<String>,
    /// Accepted but not interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bonus_peaks: Option<serde_json::Value>,
}

impl RawHike {
    /// Label that marks a hike as suited to an overnight trip.
    pub const OVERNIGHT_LABEL: &'static str = "GOOD OVERNIGHT";

    pub fn is_overnight(&self) -> bool {
        self.label.as_deref() == Some(Self::OVERNIGHT_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_and_optional_fields() {
        let json = r#"{
            "number": 12,
            "name": "Bear Peak",
            "description": "Steep and rocky",
            "difficulty": "7/10",
            "class": "2+",
            "crowd_level": "Moderate",
            "round_trip_distance": "8.5 miles",
            "hiking_time": "4-6 hours",
            "start_elevation": "5,600' (NCAR Trailhead)",
            "total_elevation_gain": "2,900'",
            "terrain": "Forest",
            "label": "GOOD OVERNIGHT",
            "bonus_peaks": ["South Boulder Peak"]
        }"#;

        let hike: RawHike = serde_json::from_str(json).unwrap();
        assert_eq!(hike.number, 12);
        assert_eq!(hike.class_text, "2+");
        assert!(hike.is_overnight());
        assert!(hike.peak_elevation.is_none());
        assert!(hike.bonus_peaks.is_some());
    }

    #[test]
    fn test_overnight_requires_exact_label() {
        let hike = RawHike {
            label: Some("good overnight".to_string()),
            ..Default::default()
        };
        assert!(!hike.is_overnight());
    }
}

//! Typed KNMI feed entries and their GeoJSON projection
//!
//! The feed is loosely typed: numeric fields (depth, magnitude, lat, lon)
//! arrive as JSON numbers or as quoted strings depending on the record, so
//! deserialization accepts both.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::coord::Wgs84Coordinate;

/// One induced seismic event from the KNMI catalogue
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InducedEvent {
    pub date: String,

    pub time: String,

    pub place: String,

    #[serde(deserialize_with = "f64_or_string")]
    pub depth: f64,

    #[serde(deserialize_with = "f64_or_string")]
    pub mag: f64,

    #[serde(deserialize_with = "f64_or_string")]
    pub lat: f64,

    #[serde(deserialize_with = "f64_or_string")]
    pub lon: f64,

    /// "manual" or "automatic" hypocenter determination
    #[serde(rename = "evaluationMode")]
    pub evaluation_mode: String,

    #[serde(rename = "type")]
    pub type_: String,
}

/// The full catalogue as served by the feed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InducedEvents {
    pub events: Vec<InducedEvent>,
}

fn f64_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => s.parse().map_err(de::Error::custom),
        Value::Number(num) => num
            .as_f64()
            .ok_or_else(|| de::Error::custom("invalid number")),
        other => Err(de::Error::custom(format!(
            "expected number or string, got {}",
            other
        ))),
    }
}

/// GeoJSON point geometry in RD coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub type_: String,
    pub coordinates: [f64; 2],
}

/// Event properties carried on a GeoJSON feature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventProperties {
    pub date: String,
    pub time: String,
    pub place: String,
    pub depth: f64,
    pub mag: f64,
    #[serde(rename = "evaluationMode")]
    pub evaluation_mode: String,
}

/// A single event as a GeoJSON feature
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointFeature {
    #[serde(rename = "type")]
    pub type_: String,
    pub geometry: PointGeometry,
    pub properties: EventProperties,
}

/// The catalogue as a GeoJSON feature collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub type_: String,
    pub features: Vec<PointFeature>,
}

impl From<InducedEvent> for PointFeature {
    fn from(event: InducedEvent) -> Self {
        let rd = Wgs84Coordinate::new(event.lat, event.lon).to_rd();
        PointFeature {
            type_: "Feature".to_string(),
            geometry: PointGeometry {
                type_: "Point".to_string(),
                coordinates: [rd.x, rd.y],
            },
            properties: EventProperties {
                date: event.date,
                time: event.time,
                place: event.place,
                depth: event.depth,
                mag: event.mag,
                evaluation_mode: event.evaluation_mode,
            },
        }
    }
}

impl From<InducedEvents> for FeatureCollection {
    fn from(events: InducedEvents) -> Self {
        FeatureCollection {
            type_: "FeatureCollection".to_string(),
            features: events.events.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_decodes_mixed_numerics() {
        // depth and lat quoted, mag and lon bare, as the feed mixes freely
        let body = r#"{
            "date": "2023-10-01",
            "time": "02:14:31",
            "place": "Loppersum",
            "depth": "3.0",
            "mag": 2.5,
            "lat": "53.329",
            "lon": 6.747,
            "evaluationMode": "manual",
            "type": "GAS"
        }"#;

        let event: InducedEvent = serde_json::from_str(body).unwrap();
        assert_eq!(event.depth, 3.0);
        assert_eq!(event.mag, 2.5);
        assert_eq!(event.lat, 53.329);
        assert_eq!(event.lon, 6.747);
    }

    #[test]
    fn test_event_rejects_non_numeric() {
        let body = r#"{
            "date": "2023-10-01",
            "time": "02:14:31",
            "place": "Loppersum",
            "depth": true,
            "mag": 2.5,
            "lat": 53.329,
            "lon": 6.747,
            "evaluationMode": "manual",
            "type": "GAS"
        }"#;

        assert!(serde_json::from_str::<InducedEvent>(body).is_err());
    }

    #[test]
    fn test_feature_collection_projects_to_rd() {
        let events = InducedEvents {
            events: vec![InducedEvent {
                date: "2023-10-01".to_string(),
                time: "02:14:31".to_string(),
                place: "Groningen".to_string(),
                depth: 3.0,
                mag: 2.5,
                lat: 53.310,
                lon: 6.560,
                evaluation_mode: "manual".to_string(),
                type_: "GAS".to_string(),
            }],
        };

        let collection: FeatureCollection = events.into();
        assert_eq!(collection.type_, "FeatureCollection");
        assert_eq!(collection.features.len(), 1);

        let feature = &collection.features[0];
        assert_eq!(feature.type_, "Feature");
        assert_eq!(feature.geometry.type_, "Point");
        assert_eq!(feature.geometry.coordinates, [233_171.0, 592_141.0]);
        assert_eq!(feature.properties.mag, 2.5);
    }
}

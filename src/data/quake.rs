use crate::core::geo::LatLng;
use crate::data::geojson::{position_to_lat_lng, GeoJson, GeoJsonFeature, GeoJsonGeometry};

/// A single earthquake event from the USGS summary feed
#[derive(Debug, Clone, PartialEq)]
pub struct Earthquake {
    /// Epicenter
    pub position: LatLng,
    /// Hypocenter depth in kilometers (third coordinate of the feed geometry)
    pub depth_km: f64,
    /// Magnitude (`properties.mag`)
    pub magnitude: f64,
    /// Human-readable location (`properties.place`)
    pub place: String,
    /// Event time, milliseconds since the epoch (`properties.time`)
    pub time_ms: Option<i64>,
}

impl Earthquake {
    /// Extracts an earthquake from a GeoJSON feature. Returns `None` for
    /// non-point geometry or a missing/null magnitude; the weekly feed
    /// occasionally carries both.
    pub fn from_feature(feature: &GeoJsonFeature) -> Option<Self> {
        let geometry = feature.geometry.as_ref()?;
        let coordinates = match geometry {
            GeoJsonGeometry::Point { coordinates } => coordinates,
            _ => return None,
        };

        let position = position_to_lat_lng(coordinates)?;
        let depth_km = coordinates.get(2).copied().unwrap_or(0.0);
        let magnitude = feature.property_f64("mag")?;
        let place = feature
            .property_str("place")
            .unwrap_or("Unknown location")
            .to_string();
        let time_ms = feature.property_i64("time");

        Some(Self {
            position,
            depth_km,
            magnitude,
            place,
            time_ms,
        })
    }

    /// Extracts every usable earthquake from a GeoJSON document, logging
    /// and skipping features the feed left incomplete.
    pub fn from_geojson(geojson: &GeoJson) -> Vec<Self> {
        let features = geojson.features();
        let mut quakes = Vec::with_capacity(features.len());

        for feature in features {
            match Self::from_feature(feature) {
                Some(quake) => quakes.push(quake),
                None => log::warn!(
                    "skipping earthquake feature without point geometry or magnitude (id: {:?})",
                    feature.id
                ),
            }
        }

        quakes
    }

    /// Popup body shown when the marker is clicked, matching the
    /// Location / Magnitude / Depth block of the map page
    pub fn popup_text(&self) -> String {
        format!(
            "Location: {}\nMagnitude: {}\nDepth: {} km",
            self.place, self.magnitude, self.depth_km
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::geojson::GeoJson;

    const FEED_FIXTURE: &str = r#"
    {
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"mag": 6.1, "place": "near the east coast of Honshu, Japan", "time": 1719876543210},
                "geometry": {"type": "Point", "coordinates": [142.373, 38.297, 35.0]},
                "id": "us6000honshu"
            },
            {
                "type": "Feature",
                "properties": {"mag": null, "place": "somewhere"},
                "geometry": {"type": "Point", "coordinates": [0.0, 0.0, 10.0]},
                "id": "nullmag"
            },
            {
                "type": "Feature",
                "properties": {"mag": 2.2},
                "geometry": {"type": "Point", "coordinates": [-155.28, 19.41]},
                "id": "kilauea"
            }
        ]
    }
    "#;

    #[test]
    fn test_from_geojson_skips_incomplete_features() {
        let geojson = GeoJson::from_str(FEED_FIXTURE).unwrap();
        let quakes = Earthquake::from_geojson(&geojson);

        // The null-magnitude feature is dropped
        assert_eq!(quakes.len(), 2);

        let honshu = &quakes[0];
        assert_eq!(honshu.magnitude, 6.1);
        assert_eq!(honshu.depth_km, 35.0);
        assert_eq!(honshu.position, LatLng::new(38.297, 142.373));
        assert_eq!(honshu.time_ms, Some(1719876543210));
    }

    #[test]
    fn test_missing_place_and_depth_default() {
        let geojson = GeoJson::from_str(FEED_FIXTURE).unwrap();
        let quakes = Earthquake::from_geojson(&geojson);

        let kilauea = &quakes[1];
        assert_eq!(kilauea.place, "Unknown location");
        assert_eq!(kilauea.depth_km, 0.0);
        assert_eq!(kilauea.time_ms, None);
    }

    #[test]
    fn test_popup_text_format() {
        let quake = Earthquake {
            position: LatLng::new(38.297, 142.373),
            depth_km: 35.0,
            magnitude: 6.1,
            place: "near the east coast of Honshu, Japan".to_string(),
            time_ms: None,
        };

        let text = quake.popup_text();
        assert!(text.contains("Location: near the east coast of Honshu, Japan"));
        assert!(text.contains("Magnitude: 6.1"));
        assert!(text.contains("Depth: 35 km"));
    }

    #[test]
    fn test_non_point_feature_is_rejected() {
        let feature = GeoJsonFeature {
            id: None,
            geometry: Some(crate::data::geojson::GeoJsonGeometry::LineString {
                coordinates: vec![vec![0.0, 0.0], vec![1.0, 1.0]],
            }),
            properties: None,
        };
        assert!(Earthquake::from_feature(&feature).is_none());
    }
}

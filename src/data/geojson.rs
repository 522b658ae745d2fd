use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A GeoJSON position: `[longitude, latitude]` with an optional third
/// element. The USGS earthquake feed uses that third element for the
/// hypocenter depth in kilometers, so it must survive parsing.
pub type Position = Vec<f64>;

/// GeoJSON geometry types, tagged by the `"type"` member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
}

/// GeoJSON feature with geometry and a free-form properties bag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoJsonFeature {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub geometry: Option<GeoJsonGeometry>,
    pub properties: Option<HashMap<String, serde_json::Value>>,
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJson {
    Feature(GeoJsonFeature),
    FeatureCollection { features: Vec<GeoJsonFeature> },
}

impl GeoJson {
    /// Parses a GeoJSON document from a raw JSON string
    pub fn from_str(geojson_str: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(geojson_str)?)
    }

    /// All features in document order
    pub fn features(&self) -> Vec<&GeoJsonFeature> {
        match self {
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::FeatureCollection { features } => features.iter().collect(),
        }
    }
}

impl GeoJsonFeature {
    /// Numeric property lookup; JSON numbers only, anything else is `None`
    pub fn property_f64(&self, key: &str) -> Option<f64> {
        self.properties.as_ref()?.get(key)?.as_f64()
    }

    /// Integer property lookup
    pub fn property_i64(&self, key: &str) -> Option<i64> {
        self.properties.as_ref()?.get(key)?.as_i64()
    }

    /// String property lookup
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.as_ref()?.get(key)?.as_str()
    }
}

/// Converts a GeoJSON position (`[lng, lat, ...]`) to a LatLng
pub fn position_to_lat_lng(position: &Position) -> Option<LatLng> {
    match position.as_slice() {
        [lng, lat, ..] => Some(LatLng::new(*lat, *lng)),
        _ => None,
    }
}

impl GeoJsonGeometry {
    /// Third coordinate of a point geometry (depth/altitude), if present
    pub fn point_altitude(&self) -> Option<f64> {
        match self {
            GeoJsonGeometry::Point { coordinates } => coordinates.get(2).copied(),
            _ => None,
        }
    }

    /// Flattens the geometry into polylines of LatLng points. Points come
    /// back as single-element lines; polygon rings as closed lines.
    pub fn to_lat_lng_lines(&self) -> Vec<Vec<LatLng>> {
        let line = |coords: &[Position]| -> Vec<LatLng> {
            coords.iter().filter_map(position_to_lat_lng).collect()
        };

        match self {
            GeoJsonGeometry::Point { coordinates } => position_to_lat_lng(coordinates)
                .map(|p| vec![vec![p]])
                .unwrap_or_default(),
            GeoJsonGeometry::MultiPoint { coordinates } => {
                vec![line(coordinates)]
            }
            GeoJsonGeometry::LineString { coordinates } => vec![line(coordinates)],
            GeoJsonGeometry::MultiLineString { coordinates } => {
                coordinates.iter().map(|l| line(l)).collect()
            }
            GeoJsonGeometry::Polygon { coordinates } => {
                coordinates.iter().map(|ring| line(ring)).collect()
            }
            GeoJsonGeometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|polygon| polygon.iter().map(|ring| line(ring)))
                .collect(),
        }
    }
}

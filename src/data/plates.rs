use crate::core::geo::{LatLng, LatLngBounds};
use crate::data::geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry};

/// One tectonic plate boundary segment from the PB2002 data set
#[derive(Debug, Clone, PartialEq)]
pub struct PlateBoundary {
    /// Boundary name (`properties.Name`), e.g. "AF-AN"
    pub name: Option<String>,
    /// Boundary polyline
    pub line: Vec<LatLng>,
}

impl PlateBoundary {
    /// Extracts boundary polylines from a GeoJSON feature. The PB2002 file
    /// is LineString features; MultiLineString is handled for completeness.
    pub fn from_feature(feature: &GeoJsonFeature) -> Vec<Self> {
        let name = feature.property_str("Name").map(str::to_string);

        let lines = match feature.geometry.as_ref() {
            Some(geometry @ GeoJsonGeometry::LineString { .. })
            | Some(geometry @ GeoJsonGeometry::MultiLineString { .. }) => {
                geometry.to_lat_lng_lines()
            }
            _ => return Vec::new(),
        };

        lines
            .into_iter()
            .filter(|line| line.len() >= 2)
            .map(|line| Self {
                name: name.clone(),
                line,
            })
            .collect()
    }

    /// Extracts every boundary polyline from a GeoJSON document
    pub fn from_geojson(geojson: &GeoJson) -> Vec<Self> {
        geojson
            .features()
            .iter()
            .flat_map(|feature| Self::from_feature(feature))
            .collect()
    }

    /// Bounding box of the polyline
    pub fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(&self.line)
    }
}

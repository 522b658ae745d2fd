use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// USGS summary feed of all earthquakes recorded in the past week
pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// PB2002 tectonic plate boundaries (fraxen/tectonicplates)
pub const PLATE_BOUNDARY_FEED_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Configuration for the earthquake map viewer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Initial map center
    pub center: LatLng,
    /// Initial zoom level
    pub zoom: f64,
    /// Earthquake summary feed endpoint
    pub earthquake_feed_url: String,
    /// Tectonic plate boundary feed endpoint
    pub plate_feed_url: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(25.0, 0.0),
            zoom: 3.0,
            earthquake_feed_url: EARTHQUAKE_FEED_URL.to_string(),
            plate_feed_url: PLATE_BOUNDARY_FEED_URL.to_string(),
        }
    }
}

impl MapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the feed endpoints, e.g. for a mirror or a local fixture server
    pub fn with_feeds(mut self, earthquake_url: impl Into<String>, plate_url: impl Into<String>) -> Self {
        self.earthquake_feed_url = earthquake_url.into();
        self.plate_feed_url = plate_url.into();
        self
    }

    pub fn with_view(mut self, center: LatLng, zoom: f64) -> Self {
        self.center = center;
        self.zoom = zoom;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_matches_earthquake_map() {
        let config = MapConfig::default();
        assert_eq!(config.center, LatLng::new(25.0, 0.0));
        assert_eq!(config.zoom, 3.0);
        assert!(config.earthquake_feed_url.contains("all_week.geojson"));
        assert!(config.plate_feed_url.contains("PB2002_boundaries"));
    }

    #[test]
    fn test_feed_override() {
        let config = MapConfig::new().with_feeds("http://localhost/quakes", "http://localhost/plates");
        assert_eq!(config.earthquake_feed_url, "http://localhost/quakes");
        assert_eq!(config.plate_feed_url, "http://localhost/plates");
    }
}

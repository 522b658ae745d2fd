//! # quakemap
//!
//! An interactive earthquake map in the manner of Leaflet, rendered with egui.
//!
//! The library fetches two public GeoJSON feeds, the USGS weekly earthquake
//! summary and the PB2002 tectonic plate boundaries, and renders them as
//! togglable overlays on top of slippy-tile base layers. Earthquake markers
//! are colored by hypocenter depth and sized by magnitude; a bottom-right
//! legend follows the Earthquakes overlay on and off.

pub mod core;
pub mod data;
pub mod input;
pub mod layers;
pub mod tiles;
#[cfg(feature = "egui")]
pub mod ui;

pub mod prelude;

// Re-export public API
pub use crate::core::{
    config::MapConfig,
    geo::{LatLng, LatLngBounds, Point, TileCoord},
    map::Map,
    viewport::Viewport,
};

pub use crate::data::{
    geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry},
    plates::PlateBoundary,
    quake::Earthquake,
};

pub use crate::layers::{
    base::{Layer, LayerKind, LayerProperties, LayerRole},
    manager::LayerManager,
    plates::PlateBoundaryLayer,
    quakes::EarthquakeLayer,
    style::{radius_for_magnitude, DepthBand},
    tile::TileLayer,
};

pub use crate::input::events::{EventManager, MapEvent};

#[cfg(feature = "egui")]
pub use crate::ui::{controls::LayerControl, legend::Legend, popup::Popup, widget::MapWidget};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, QuakeMapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum QuakeMapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Feed error: {0}")]
    Feed(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),
}

/// Error type alias for convenience
pub type Error = QuakeMapError;

//! Prelude module for common quakemap types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use quakemap::prelude::*;`

pub use crate::core::{
    config::MapConfig,
    geo::{LatLng, LatLngBounds, Point, TileCoord},
    map::{Map, MapOptions},
    viewport::Viewport,
};

pub use crate::data::{
    geojson::{GeoJson, GeoJsonFeature, GeoJsonGeometry},
    plates::PlateBoundary,
    quake::Earthquake,
};

#[cfg(feature = "tokio-runtime")]
pub use crate::data::fetch::{FeedClient, FeedSource};

pub use crate::layers::{
    base::{Layer, LayerKind, LayerProperties, LayerRole},
    manager::LayerManager,
    plates::PlateBoundaryLayer,
    quakes::EarthquakeLayer,
    style::{radius_for_magnitude, DepthBand, MarkerStyle, PlateStyle},
    tile::{TileLayer, TileLayerOptions},
};

pub use crate::input::events::{EventManager, MapEvent};

pub use crate::tiles::{cache::TileCache, source::TileSource};

#[cfg(feature = "egui")]
pub use crate::ui::{
    controls::LayerControl,
    elements::Position,
    legend::Legend,
    popup::{Popup, PopupManager},
    widget::MapWidget,
};

pub use crate::{Error as QuakeMapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};

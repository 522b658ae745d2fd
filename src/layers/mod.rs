pub mod base;
pub mod manager;
pub mod plates;
pub mod quakes;
pub mod style;
pub mod tile;

pub use base::{Layer, LayerKind, LayerProperties, LayerRole};
pub use manager::LayerManager;
pub use plates::PlateBoundaryLayer;
pub use quakes::EarthquakeLayer;
pub use style::{radius_for_magnitude, Color, DepthBand, MarkerStyle, PlateStyle};
pub use tile::{TileLayer, TileLayerOptions};

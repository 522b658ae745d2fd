use crate::core::geo::{LatLng, Point};

pub use crate::input::handler::EventManager;

/// Map event types that can be emitted by the map
#[derive(Debug, Clone, PartialEq)]
pub enum MapEvent {
    /// Map view has changed (center, zoom, or size)
    ViewChanged { center: LatLng, zoom: f64 },
    /// Mouse/touch click on the map
    Click { lat_lng: LatLng, pixel: Point },
    /// Zoom ended
    ZoomEnd { zoom: f64 },
    /// Pan ended
    MoveEnd { center: LatLng },
    /// Layer was added to the map
    LayerAdd { layer_id: String },
    /// Layer was removed from the map
    LayerRemove { layer_id: String },
    /// Base layer was changed
    BaseLayerChange { layer_id: String },
    /// Overlay layer was switched on
    OverlayAdd { layer_id: String },
    /// Overlay layer was switched off
    OverlayRemove { layer_id: String },
}

impl MapEvent {
    /// Leaflet-style event name used for listener registration
    pub fn name(&self) -> &'static str {
        match self {
            MapEvent::ViewChanged { .. } => "viewchanged",
            MapEvent::Click { .. } => "click",
            MapEvent::ZoomEnd { .. } => "zoomend",
            MapEvent::MoveEnd { .. } => "moveend",
            MapEvent::LayerAdd { .. } => "layeradd",
            MapEvent::LayerRemove { .. } => "layerremove",
            MapEvent::BaseLayerChange { .. } => "baselayerchange",
            MapEvent::OverlayAdd { .. } => "overlayadd",
            MapEvent::OverlayRemove { .. } => "overlayremove",
        }
    }

    /// The layer this event refers to, if any
    pub fn layer_id(&self) -> Option<&str> {
        match self {
            MapEvent::LayerAdd { layer_id }
            | MapEvent::LayerRemove { layer_id }
            | MapEvent::BaseLayerChange { layer_id }
            | MapEvent::OverlayAdd { layer_id }
            | MapEvent::OverlayRemove { layer_id } => Some(layer_id),
            _ => None,
        }
    }
}

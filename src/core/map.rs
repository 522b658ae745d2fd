use crate::{
    core::{
        geo::{LatLng, LatLngBounds, Point},
        viewport::Viewport,
    },
    input::{events::MapEvent, handler::EventManager},
    layers::{
        base::{Layer, LayerRole},
        manager::LayerManager,
    },
    Result,
};

/// Map construction options
#[derive(Debug, Clone)]
pub struct MapOptions {
    pub center: LatLng,
    pub zoom: f64,
    pub size: Point,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: LatLng::new(25.0, 0.0),
            zoom: 3.0,
            size: Point::new(1024.0, 768.0),
            min_zoom: 0.0,
            max_zoom: 20.0,
        }
    }
}

/// Central map object tying the viewport, layer stack and events together.
///
/// Base layers are mutually exclusive: activating one via [`Map::set_base_layer`]
/// hides every other base layer. Overlays toggle independently through
/// [`Map::set_overlay_visible`], which emits `overlayadd` / `overlayremove`
/// events for listeners such as the legend.
pub struct Map {
    pub viewport: Viewport,
    pub layers: LayerManager,
    pub events: EventManager,
}

impl Map {
    pub fn new(options: MapOptions) -> Self {
        let mut viewport = Viewport::new(options.center, options.zoom, options.size);
        viewport.set_zoom_limits(options.min_zoom, options.max_zoom);

        Self {
            viewport,
            layers: LayerManager::new(),
            events: EventManager::new(),
        }
    }

    /// Moves the view to the given center and zoom
    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.viewport.set_center(center);
        self.viewport.set_zoom(zoom);
        self.events.emit(MapEvent::ViewChanged {
            center: self.viewport.center,
            zoom: self.viewport.zoom,
        });
    }

    /// Zooms and pans so that `bounds` fits inside the view
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: f64) {
        self.viewport.fit_bounds(bounds, padding);
        self.events.emit(MapEvent::ViewChanged {
            center: self.viewport.center,
            zoom: self.viewport.zoom,
        });
    }

    /// Pans by a screen-pixel delta. Interactive pans arrive as a stream of
    /// deltas; the single `moveend` fires from [`Map::end_pan`].
    pub fn pan_by(&mut self, delta: Point) {
        self.viewport.pan_by(delta);
    }

    /// Marks the end of an interactive pan, emitting `moveend`
    pub fn end_pan(&mut self) {
        self.events.emit(MapEvent::MoveEnd {
            center: self.viewport.center,
        });
    }

    /// Zooms toward `zoom` keeping `focus` fixed, emitting `zoomend` if the
    /// zoom level actually changed
    pub fn zoom_around(&mut self, zoom: f64, focus: Option<Point>) {
        let before = self.viewport.zoom;
        self.viewport.zoom_around(zoom, focus);
        if (self.viewport.zoom - before).abs() > f64::EPSILON {
            self.events.emit(MapEvent::ZoomEnd {
                zoom: self.viewport.zoom,
            });
        }
    }

    /// Reports a click at a container-relative pixel, emitting `click`
    pub fn click_at(&mut self, pixel: Point) {
        self.events.emit(MapEvent::Click {
            lat_lng: self.viewport.pixel_to_lat_lng(&pixel),
            pixel,
        });
    }

    /// Adds a layer to the stack and emits `layeradd`
    pub fn add_layer(&mut self, layer: Box<dyn Layer>) {
        let layer_id = layer.id().to_string();
        self.layers.add_layer(layer);
        self.events.emit(MapEvent::LayerAdd { layer_id });
    }

    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Box<dyn Layer>> {
        let removed = self.layers.remove_layer(layer_id);
        if removed.is_some() {
            self.events.emit(MapEvent::LayerRemove {
                layer_id: layer_id.to_string(),
            });
        }
        removed
    }

    /// Shows the named base layer and hides all other base layers
    pub fn set_base_layer(&mut self, layer_id: &str) -> Result<()> {
        let base_ids = self.layers.layers_with_role(LayerRole::Base);
        if !base_ids.iter().any(|id| id == layer_id) {
            return Err(crate::Error::Layer(format!(
                "no base layer with id '{layer_id}'"
            )));
        }

        for id in base_ids {
            let visible = id == layer_id;
            self.layers.with_layer_mut(&id, |layer| {
                layer.set_visible(visible);
            });
        }

        self.events.emit(MapEvent::BaseLayerChange {
            layer_id: layer_id.to_string(),
        });
        Ok(())
    }

    /// Toggles an overlay on or off, emitting the matching overlay event
    pub fn set_overlay_visible(&mut self, layer_id: &str, visible: bool) -> Result<()> {
        let changed = self
            .layers
            .with_layer_mut(layer_id, |layer| {
                let was = layer.is_visible();
                layer.set_visible(visible);
                was != visible
            })
            .ok_or_else(|| crate::Error::Layer(format!("no layer with id '{layer_id}'")))?;

        if changed {
            let layer_id = layer_id.to_string();
            let event = if visible {
                MapEvent::OverlayAdd { layer_id }
            } else {
                MapEvent::OverlayRemove { layer_id }
            };
            self.events.emit(event);
        }
        Ok(())
    }

    pub fn is_layer_visible(&self, layer_id: &str) -> bool {
        self.layers
            .get_layer(layer_id)
            .map(|layer| layer.is_visible())
            .unwrap_or(false)
    }

    /// Registers a listener for a Leaflet-style event name
    pub fn on<F>(&mut self, event_name: &str, callback: F)
    where
        F: Fn(&MapEvent) + Send + Sync + 'static,
    {
        self.events.on(event_name, callback);
    }

    /// Delivers queued events to listeners and returns them for inspection
    pub fn process_events(&mut self) -> Vec<MapEvent> {
        self.events.process_events()
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new(MapOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::{
        plates::PlateBoundaryLayer,
        quakes::EarthquakeLayer,
        tile::TileLayer,
    };

    fn map_with_layers() -> Map {
        let mut map = Map::new(MapOptions::default());
        map.add_layer(Box::new(TileLayer::usgs_imagery("satellite", "Satellite")));
        map.add_layer(Box::new(TileLayer::openstreetmap("streets", "Streets")));
        map.add_layer(Box::new(EarthquakeLayer::new(Vec::new())));
        map.add_layer(Box::new(PlateBoundaryLayer::new(Vec::new())));
        map.process_events();
        map
    }

    #[test]
    fn test_set_view_emits_event() {
        let mut map = Map::default();
        map.set_view(LatLng::new(35.0, 139.0), 6.0);

        let events = map.process_events();
        assert_eq!(
            events,
            vec![MapEvent::ViewChanged {
                center: LatLng::new(35.0, 139.0),
                zoom: 6.0,
            }]
        );
    }

    #[test]
    fn test_base_layers_are_exclusive() {
        let mut map = map_with_layers();

        map.set_base_layer("streets").unwrap();
        assert!(!map.is_layer_visible("satellite"));
        assert!(map.is_layer_visible("streets"));

        map.set_base_layer("satellite").unwrap();
        assert!(map.is_layer_visible("satellite"));
        assert!(!map.is_layer_visible("streets"));

        assert!(map.set_base_layer("earthquakes").is_err());
    }

    #[test]
    fn test_overlay_toggle_emits_overlay_events() {
        let mut map = map_with_layers();

        map.set_overlay_visible("earthquakes", false).unwrap();
        map.set_overlay_visible("earthquakes", true).unwrap();
        // no change, no event
        map.set_overlay_visible("earthquakes", true).unwrap();

        let events = map.process_events();
        assert_eq!(
            events,
            vec![
                MapEvent::OverlayRemove {
                    layer_id: "earthquakes".to_string()
                },
                MapEvent::OverlayAdd {
                    layer_id: "earthquakes".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_overlay_events_drive_listener() {
        use std::sync::{
            atomic::{AtomicBool, Ordering},
            Arc,
        };

        let legend_visible = Arc::new(AtomicBool::new(true));
        let mut map = map_with_layers();

        let shown = legend_visible.clone();
        map.on("overlayadd", move |event| {
            if event.layer_id() == Some("earthquakes") {
                shown.store(true, Ordering::SeqCst);
            }
        });
        let hidden = legend_visible.clone();
        map.on("overlayremove", move |event| {
            if event.layer_id() == Some("earthquakes") {
                hidden.store(false, Ordering::SeqCst);
            }
        });

        map.set_overlay_visible("earthquakes", false).unwrap();
        map.process_events();
        assert!(!legend_visible.load(Ordering::SeqCst));

        map.set_overlay_visible("earthquakes", true).unwrap();
        map.process_events();
        assert!(legend_visible.load(Ordering::SeqCst));
    }

    #[test]
    fn test_pan_and_zoom_emit_motion_events() {
        let mut map = Map::default();

        // a drag is a stream of deltas followed by one release
        map.pan_by(Point::new(40.0, 0.0));
        map.pan_by(Point::new(60.0, 0.0));
        assert!(map.process_events().is_empty());
        map.end_pan();

        map.zoom_around(map.viewport.zoom + 1.0, Some(Point::new(200.0, 150.0)));
        // unchanged zoom, no event
        map.zoom_around(map.viewport.zoom, None);

        let names: Vec<&str> = map.process_events().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["moveend", "zoomend"]);
    }

    #[test]
    fn test_click_at_reports_geographic_position() {
        let mut map = Map::default();
        let center_pixel = Point::new(
            map.viewport.size.x / 2.0,
            map.viewport.size.y / 2.0,
        );
        map.click_at(center_pixel);

        let events = map.process_events();
        assert_eq!(events.len(), 1);
        match &events[0] {
            MapEvent::Click { lat_lng, pixel } => {
                assert!((lat_lng.lat - map.viewport.center.lat).abs() < 1e-6);
                assert!((lat_lng.lng - map.viewport.center.lng).abs() < 1e-6);
                assert_eq!(*pixel, center_pixel);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_remove_layer_emits_event() {
        let mut map = map_with_layers();
        assert!(map.remove_layer("tectonic-plates").is_some());
        assert!(map.remove_layer("tectonic-plates").is_none());

        let events = map.process_events();
        assert_eq!(
            events,
            vec![MapEvent::LayerRemove {
                layer_id: "tectonic-plates".to_string()
            }]
        );
    }
}

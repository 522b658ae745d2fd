use crate::layers::base::{Layer, LayerRole};
use crate::prelude::HashMap;
#[cfg(feature = "egui")]
use crate::{core::viewport::Viewport, Result};

/// Manages layers for the map, handling ordering and rendering
#[derive(Default)]
pub struct LayerManager {
    /// All layers indexed by ID
    layers: HashMap<String, Box<dyn Layer>>,
    /// Ordered list of layer IDs for rendering (sorted by z-index)
    render_order: Vec<String>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a layer, keeping the render order sorted by z-index
    pub fn add_layer(&mut self, layer: Box<dyn Layer>) {
        let layer_id = layer.id().to_string();
        let z_index = layer.z_index();

        self.layers.insert(layer_id.clone(), layer);

        let insert_pos = self
            .render_order
            .iter()
            .position(|id| {
                self.layers
                    .get(id)
                    .map(|l| l.z_index() > z_index)
                    .unwrap_or(false)
            })
            .unwrap_or(self.render_order.len());

        self.render_order.insert(insert_pos, layer_id);
    }

    /// Removes a layer from the manager
    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Box<dyn Layer>> {
        self.render_order.retain(|id| id != layer_id);
        self.layers.remove(layer_id)
    }

    /// Gets a reference to a layer by ID
    pub fn get_layer(&self, layer_id: &str) -> Option<&dyn Layer> {
        self.layers.get(layer_id).map(|l| l.as_ref())
    }

    /// Applies a function to a specific layer mutably
    pub fn with_layer_mut<F, R>(&mut self, layer_id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut dyn Layer) -> R,
    {
        self.layers.get_mut(layer_id).map(|layer| f(layer.as_mut()))
    }

    /// Lists layer IDs in render order
    pub fn list_layers(&self) -> Vec<String> {
        self.render_order.clone()
    }

    /// IDs of layers with the given role, in render order
    pub fn layers_with_role(&self, role: LayerRole) -> Vec<String> {
        self.render_order
            .iter()
            .filter(|id| {
                self.layers
                    .get(*id)
                    .map(|l| l.role() == role)
                    .unwrap_or(false)
            })
            .cloned()
            .collect()
    }

    /// Applies a function to each layer immutably in render order
    pub fn for_each_layer<F>(&self, mut f: F)
    where
        F: FnMut(&dyn Layer),
    {
        for id in &self.render_order {
            if let Some(layer) = self.layers.get(id) {
                f(layer.as_ref());
            }
        }
    }

    /// Applies a function to each layer mutably in render order
    pub fn for_each_layer_mut<F>(&mut self, mut f: F)
    where
        F: FnMut(&mut dyn Layer),
    {
        for id in self.render_order.clone() {
            if let Some(layer) = self.layers.get_mut(&id) {
                f(layer.as_mut());
            }
        }
    }

    /// Renders all visible layers in z-index order
    #[cfg(feature = "egui")]
    pub fn render(
        &mut self,
        painter: &egui::Painter,
        rect: egui::Rect,
        viewport: &Viewport,
    ) -> Result<()> {
        let viewport_bounds = viewport.bounds();

        for layer_id in self.render_order.clone() {
            if let Some(layer) = self.layers.get_mut(&layer_id) {
                let in_view = layer
                    .bounds()
                    .map(|b| b.intersects(&viewport_bounds))
                    .unwrap_or(true);
                if layer.is_visible() && in_view {
                    layer.render(painter, rect, viewport)?;
                }
            }
        }
        Ok(())
    }

    /// Gets the number of layers
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Checks if the manager is empty
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::quake::Earthquake;
    use crate::layers::plates::PlateBoundaryLayer;
    use crate::layers::quakes::EarthquakeLayer;
    use crate::layers::tile::TileLayer;

    fn sample_quake() -> Earthquake {
        Earthquake {
            position: crate::core::geo::LatLng::new(38.297, 142.373),
            depth_km: 35.0,
            magnitude: 6.1,
            place: "near the east coast of Honshu, Japan".to_string(),
            time_ms: None,
        }
    }

    #[test]
    fn test_render_order_follows_z_index() {
        let mut manager = LayerManager::new();
        manager.add_layer(Box::new(EarthquakeLayer::new(vec![sample_quake()])));
        manager.add_layer(Box::new(TileLayer::usgs_imagery("satellite", "Satellite")));
        manager.add_layer(Box::new(PlateBoundaryLayer::new(Vec::new())));

        // Tiles (z 0) first, then plates (z 5), then quakes (z 10)
        assert_eq!(
            manager.list_layers(),
            vec!["satellite", "tectonic-plates", "earthquakes"]
        );
    }

    #[test]
    fn test_role_partition() {
        let mut manager = LayerManager::new();
        manager.add_layer(Box::new(TileLayer::usgs_imagery("satellite", "Satellite")));
        manager.add_layer(Box::new(TileLayer::openstreetmap("streets", "Streets")));
        manager.add_layer(Box::new(EarthquakeLayer::new(vec![sample_quake()])));

        assert_eq!(
            manager.layers_with_role(LayerRole::Base),
            vec!["satellite", "streets"]
        );
        assert_eq!(
            manager.layers_with_role(LayerRole::Overlay),
            vec!["earthquakes"]
        );
    }

    #[test]
    fn test_remove_layer() {
        let mut manager = LayerManager::new();
        manager.add_layer(Box::new(EarthquakeLayer::new(Vec::new())));
        assert_eq!(manager.len(), 1);

        assert!(manager.remove_layer("earthquakes").is_some());
        assert!(manager.is_empty());
        assert!(manager.remove_layer("earthquakes").is_none());
    }

    #[test]
    fn test_with_layer_mut_toggles_visibility() {
        let mut manager = LayerManager::new();
        manager.add_layer(Box::new(EarthquakeLayer::new(Vec::new())));

        manager.with_layer_mut("earthquakes", |layer| layer.set_visible(false));
        assert!(!manager.get_layer("earthquakes").unwrap().is_visible());
    }
}

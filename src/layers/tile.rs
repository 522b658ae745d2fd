use crate::{
    core::{
        geo::{LatLng, TileCoord},
        viewport::Viewport,
    },
    layers::base::{Layer, LayerKind, LayerProperties, LayerRole},
    prelude::HashSet,
    tiles::{cache::TileCache, loader, source::TemplateSource},
};
#[cfg(feature = "egui")]
use crate::Result;
use serde::{Deserialize, Serialize};
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::Mutex;

/// Configuration for a tile layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileLayerOptions {
    /// URL template for tiles (e.g., "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png")
    pub url_template: String,
    /// Available subdomains for load balancing
    pub subdomains: Vec<String>,
    /// Attribution text
    pub attribution: String,
    /// Tile size in pixels
    pub tile_size: u32,
    /// Maximum zoom level for this tile source
    pub max_zoom: u8,
    /// Minimum zoom level for this tile source
    pub min_zoom: u8,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            attribution: "Map data © OpenStreetMap contributors".to_string(),
            tile_size: 256,
            max_zoom: 18,
            min_zoom: 0,
        }
    }
}

/// A slippy-tile base layer that displays map tiles from a tile server
pub struct TileLayer {
    properties: LayerProperties,
    options: TileLayerOptions,
    /// Source translating tile coordinates to URLs
    source: TemplateSource,
    /// Sender handed to download threads
    tile_tx: Sender<(TileCoord, Vec<u8>)>,
    /// Receiver for completed tile downloads
    tile_rx: Mutex<Receiver<(TileCoord, Vec<u8>)>>,
    /// Raw tile bytes, LRU-evicted
    cache: TileCache,
    /// Tiles currently in flight (to avoid duplicate requests)
    loading: HashSet<TileCoord>,
    /// Decoded tile textures
    #[cfg(feature = "egui")]
    textures: std::collections::HashMap<TileCoord, egui::TextureHandle>,
}

impl TileLayer {
    /// Create a new tile layer with custom options
    pub fn with_options(
        id: impl Into<String>,
        name: impl Into<String>,
        options: TileLayerOptions,
    ) -> Self {
        let properties =
            LayerProperties::new(id, name, LayerKind::Tile).with_role(LayerRole::Base);
        let source = TemplateSource::new(options.url_template.clone(), options.subdomains.clone());

        let (tx, rx): (Sender<(TileCoord, Vec<u8>)>, Receiver<(TileCoord, Vec<u8>)>) = channel();

        Self {
            properties,
            options,
            source,
            tile_tx: tx,
            tile_rx: Mutex::new(rx),
            cache: TileCache::default(),
            loading: HashSet::default(),
            #[cfg(feature = "egui")]
            textures: std::collections::HashMap::new(),
        }
    }

    /// USGS imagery base layer (the map's "Satellite" option)
    pub fn usgs_imagery(id: impl Into<String>, name: impl Into<String>) -> Self {
        let options = TileLayerOptions {
            url_template:
                "https://basemap.nationalmap.gov/arcgis/rest/services/USGSImageryOnly/MapServer/tile/{z}/{y}/{x}"
                    .to_string(),
            subdomains: Vec::new(),
            attribution: "Tiles courtesy of the U.S. Geological Survey".to_string(),
            max_zoom: 20,
            ..Default::default()
        };
        Self::with_options(id, name, options)
    }

    /// OpenStreetMap base layer (the map's "Streets" option)
    pub fn openstreetmap(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_options(id, name, TileLayerOptions::default())
    }

    pub fn options(&self) -> &TileLayerOptions {
        &self.options
    }

    pub fn attribution(&self) -> &str {
        &self.options.attribution
    }

    /// Tile coordinates needed to cover the viewport, with a one-tile margin
    pub fn visible_tiles(&self, viewport: &Viewport) -> Vec<TileCoord> {
        let mut zoom = viewport.zoom.floor() as u8;
        zoom = zoom.clamp(self.options.min_zoom, self.options.max_zoom);

        let tiles_per_axis = 1u32 << zoom;
        let bounds = viewport.bounds();

        // lat/lng to fractional tile indices
        let ll_to_tile = |lat: f64, lng: f64| -> (f64, f64) {
            let lat_rad = LatLng::clamp_lat(lat).to_radians();
            let x = (lng + 180.0) / 360.0 * tiles_per_axis as f64;
            let y = (1.0 - (lat_rad.tan() + 1.0 / lat_rad.cos()).ln() / std::f64::consts::PI)
                / 2.0
                * tiles_per_axis as f64;
            (x, y)
        };

        let (min_x_f, min_y_f) = ll_to_tile(bounds.north_east.lat, bounds.south_west.lng);
        let (max_x_f, max_y_f) = ll_to_tile(bounds.south_west.lat, bounds.north_east.lng);

        let margin: i32 = 1;
        let min_x = (min_x_f.floor() as i32 - margin).max(0) as u32;
        let max_x = (max_x_f.ceil() as i32 + margin).min(tiles_per_axis as i32 - 1) as u32;
        let min_y = (min_y_f.floor() as i32 - margin).max(0) as u32;
        let max_y = (max_y_f.ceil() as i32 + margin).min(tiles_per_axis as i32 - 1) as u32;

        let mut tiles = Vec::new();
        for x in min_x..=max_x {
            for y in min_y..=max_y {
                tiles.push(TileCoord { x, y, z: zoom });
            }
        }
        tiles
    }

    /// Kick off a download for a tile unless it is cached or in flight
    fn request_tile(&mut self, coord: TileCoord) {
        if self.loading.contains(&coord) || self.cache.contains(&coord) {
            return;
        }
        self.loading.insert(coord);
        loader::spawn_fetch(&self.source, coord, self.tile_tx.clone());
    }

    /// Drain completed downloads into the cache
    fn collect_downloads(&mut self) {
        let completed: Vec<(TileCoord, Vec<u8>)> = match self.tile_rx.lock() {
            Ok(rx) => std::iter::from_fn(|| rx.try_recv().ok()).collect(),
            Err(_) => Vec::new(),
        };

        for (coord, data) in completed {
            self.loading.remove(&coord);
            self.cache.insert(coord, data);
        }
    }

    #[cfg(feature = "egui")]
    fn decode_texture(
        &mut self,
        ctx: &egui::Context,
        coord: TileCoord,
        bytes: &[u8],
    ) -> Option<egui::TextureHandle> {
        let decoded = match image::load_from_memory(bytes) {
            Ok(img) => img.to_rgba8(),
            Err(e) => {
                log::warn!("failed to decode tile {:?}: {}", coord, e);
                return None;
            }
        };

        let size = [decoded.width() as usize, decoded.height() as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, decoded.as_raw());
        let name = format!("{}-{}-{}-{}", self.properties.id, coord.z, coord.x, coord.y);
        Some(ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR))
    }
}

#[cfg(feature = "egui")]
impl Layer for TileLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn render(
        &mut self,
        painter: &egui::Painter,
        rect: egui::Rect,
        viewport: &Viewport,
    ) -> Result<()> {
        self.collect_downloads();

        let coords = self.visible_tiles(viewport);
        let zoom = coords.first().map(|c| c.z).unwrap_or(0);
        let tile_screen_size =
            self.options.tile_size as f64 * 2_f64.powf(viewport.zoom - zoom as f64);

        for coord in &coords {
            if !self.textures.contains_key(coord) {
                if let Some(bytes) = self.cache.get(coord) {
                    if let Some(texture) = self.decode_texture(painter.ctx(), *coord, &bytes) {
                        self.textures.insert(*coord, texture);
                    } else {
                        // Undecodable payload; do not retry every frame
                        continue;
                    }
                } else {
                    self.request_tile(*coord);
                    continue;
                }
            }

            if let Some(texture) = self.textures.get(coord) {
                let nw = viewport.lat_lng_to_pixel(&coord.to_lat_lng());
                let tile_rect = egui::Rect::from_min_size(
                    rect.min + egui::vec2(nw.x as f32, nw.y as f32),
                    egui::Vec2::splat(tile_screen_size as f32),
                );
                if tile_rect.intersects(rect) {
                    painter.image(
                        texture.id(),
                        tile_rect,
                        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                        egui::Color32::WHITE,
                    );
                }
            }
        }

        // Drop textures for tiles far from the current zoom to bound memory
        let visible: HashSet<TileCoord> = coords.into_iter().collect();
        self.textures
            .retain(|coord, _| visible.contains(coord) || coord.z == zoom);

        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(not(feature = "egui"))]
impl Layer for TileLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::{LatLng, Point};
    use crate::core::viewport::Viewport;

    #[test]
    fn test_presets() {
        let satellite = TileLayer::usgs_imagery("satellite", "Satellite");
        assert_eq!(satellite.role(), LayerRole::Base);
        assert_eq!(satellite.options().max_zoom, 20);
        assert!(satellite.options().url_template.contains("USGSImageryOnly"));
        assert!(satellite.attribution().contains("U.S. Geological Survey"));

        let streets = TileLayer::openstreetmap("streets", "Streets");
        assert_eq!(streets.options().max_zoom, 18);
        assert_eq!(streets.options().subdomains.len(), 3);
    }

    #[test]
    fn test_visible_tiles_cover_viewport() {
        let layer = TileLayer::usgs_imagery("satellite", "Satellite");
        let viewport = Viewport::new(LatLng::new(25.0, 0.0), 3.0, Point::new(1024.0, 768.0));

        let tiles = layer.visible_tiles(&viewport);
        assert!(!tiles.is_empty());
        assert!(tiles.iter().all(|t| t.z == 3));
        assert!(tiles.iter().all(|t| t.is_valid()));

        // The tile under the map center must be present
        let center_tile = TileCoord::from_lat_lng(&viewport.center, 3);
        assert!(tiles.contains(&center_tile));
    }

    #[test]
    fn test_visible_tiles_clamp_to_max_zoom() {
        let layer = TileLayer::openstreetmap("streets", "Streets");
        let viewport = Viewport::new(LatLng::new(25.0, 0.0), 19.5, Point::new(256.0, 256.0));

        let tiles = layer.visible_tiles(&viewport);
        assert!(tiles.iter().all(|t| t.z == 18));
    }
}

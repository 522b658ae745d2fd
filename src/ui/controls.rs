use crate::{
    core::map::Map,
    layers::base::{Layer, LayerRole},
};
use egui::{Align2, Color32, Frame, Stroke, Ui};

/// Leaflet-style layer control: radio buttons for the base layers,
/// checkboxes for the overlays.
pub struct LayerControl {
    expanded: bool,
}

impl Default for LayerControl {
    fn default() -> Self {
        Self::new()
    }
}

impl LayerControl {
    pub fn new() -> Self {
        Self { expanded: true }
    }

    pub fn show(&mut self, ui: &Ui, map: &mut Map) {
        let frame = Frame::none()
            .fill(Color32::WHITE)
            .stroke(Stroke::new(1.0, Color32::BLACK))
            .rounding(4.0)
            .inner_margin(8.0);

        egui::Area::new(egui::Id::new("layer-control"))
            .anchor(Align2::RIGHT_TOP, [-10.0, 10.0])
            .show(ui.ctx(), |ui| {
                frame.show(ui, |ui| {
                    if ui.selectable_label(self.expanded, "Layers").clicked() {
                        self.expanded = !self.expanded;
                    }
                    if !self.expanded {
                        return;
                    }
                    ui.separator();
                    self.base_layer_rows(ui, map);
                    ui.separator();
                    self.overlay_rows(ui, map);
                });
            });
    }

    fn base_layer_rows(&self, ui: &mut Ui, map: &mut Map) {
        let base_ids = map.layers.layers_with_role(LayerRole::Base);
        for id in base_ids {
            let (name, active) = match map.layers.get_layer(&id) {
                Some(layer) => (layer.name().to_string(), layer.is_visible()),
                None => continue,
            };
            if ui.radio(active, name).clicked() && !active {
                if let Err(err) = map.set_base_layer(&id) {
                    log::warn!("failed to switch base layer: {}", err);
                }
            }
        }
    }

    fn overlay_rows(&self, ui: &mut Ui, map: &mut Map) {
        let overlay_ids = map.layers.layers_with_role(LayerRole::Overlay);
        for id in overlay_ids {
            let (name, visible) = match map.layers.get_layer(&id) {
                Some(layer) => (layer.name().to_string(), layer.is_visible()),
                None => continue,
            };
            let mut checked = visible;
            if ui.checkbox(&mut checked, name).changed() {
                if let Err(err) = map.set_overlay_visible(&id, checked) {
                    log::warn!("failed to toggle overlay: {}", err);
                }
            }
        }
    }
}

use crate::{
    core::{geo::Point, map::Map},
    layers::{base::Layer, quakes::EarthquakeLayer},
    ui::{controls::LayerControl, legend::Legend, popup::Popup, popup::PopupManager},
};
use egui::{Rect, Response, Sense, Ui, Vec2};

/// Immediate-mode widget that draws a [`Map`] and wires up interaction.
///
/// Dragging pans, scrolling zooms around the cursor, clicking an earthquake
/// marker opens its popup. The depth legend and layer control are drawn on
/// top of the map each frame.
pub struct MapWidget {
    legend: Legend,
    controls: LayerControl,
    popups: PopupManager,
}

impl Default for MapWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl MapWidget {
    pub fn new() -> Self {
        Self {
            legend: Legend::for_layer(EarthquakeLayer::ID),
            controls: LayerControl::new(),
            popups: PopupManager::new(),
        }
    }

    pub fn show(&mut self, ui: &mut Ui, map: &mut Map) -> Response {
        let desired = ui.available_size();
        let (rect, response) = ui.allocate_exact_size(desired, Sense::click_and_drag());

        map.viewport
            .set_size(Point::new(rect.width() as f64, rect.height() as f64));

        self.handle_input(ui, map, rect, &response);

        let painter = ui.painter_at(rect);
        if let Err(err) = map.layers.render(&painter, rect, &map.viewport) {
            log::error!("layer render failed: {}", err);
        }

        for event in map.process_events() {
            self.legend.handle_event(&event);
        }

        self.popups.render(&painter, rect, &map.viewport);
        self.legend.render(&painter, rect);
        self.controls.show(ui, map);

        // tile downloads land on background threads
        ui.ctx().request_repaint_after(std::time::Duration::from_millis(100));

        response
    }

    fn handle_input(&mut self, ui: &Ui, map: &mut Map, rect: Rect, response: &Response) {
        if response.dragged() {
            let delta = response.drag_delta();
            if delta != Vec2::ZERO {
                map.pan_by(Point::new(-delta.x as f64, -delta.y as f64));
            }
        }
        if response.drag_released() {
            map.end_pan();
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll.abs() > 0.0 {
                let focus = response
                    .hover_pos()
                    .map(|pos| Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64));
                let zoom = map.viewport.zoom + scroll as f64 * 0.003;
                map.zoom_around(zoom, focus);
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let pixel = Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64);
                map.click_at(pixel);
                self.handle_click(map, pixel);
            }
        }
    }

    fn handle_click(&mut self, map: &mut Map, pixel: Point) {
        let hit = map
            .layers
            .get_layer(EarthquakeLayer::ID)
            .filter(|layer| layer.is_visible())
            .and_then(|layer| layer.as_any().downcast_ref::<EarthquakeLayer>())
            .and_then(|layer| layer.hit_test(&map.viewport, pixel))
            .map(|quake| (quake.position, quake.popup_text()));

        match hit {
            Some((position, text)) => self.popups.open(Popup::new(position, text)),
            None => self.popups.close(),
        }
    }
}

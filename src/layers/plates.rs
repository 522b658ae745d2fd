use crate::{
    core::geo::LatLngBounds,
    data::plates::PlateBoundary,
    layers::{
        base::{Layer, LayerKind, LayerProperties, LayerRole},
        style::PlateStyle,
    },
};
#[cfg(feature = "egui")]
use crate::{core::viewport::Viewport, Result};

/// Overlay drawing tectonic plate boundaries as orange polylines
pub struct PlateBoundaryLayer {
    properties: LayerProperties,
    boundaries: Vec<PlateBoundary>,
    style: PlateStyle,
}

impl PlateBoundaryLayer {
    pub const ID: &'static str = "tectonic-plates";

    pub fn new(boundaries: Vec<PlateBoundary>) -> Self {
        let properties = LayerProperties::new(Self::ID, "Tectonic Plates", LayerKind::Vector)
            .with_role(LayerRole::Overlay)
            .with_z_index(5);

        Self {
            properties,
            boundaries,
            style: PlateStyle::default(),
        }
    }

    pub fn boundaries(&self) -> &[PlateBoundary] {
        &self.boundaries
    }

    pub fn set_boundaries(&mut self, boundaries: Vec<PlateBoundary>) {
        self.boundaries = boundaries;
    }
}

impl Layer for PlateBoundaryLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        let mut bounds: Option<LatLngBounds> = None;
        for boundary in &self.boundaries {
            if let Some(b) = boundary.bounds() {
                bounds = Some(match bounds {
                    Some(acc) => acc.union(&b),
                    None => b,
                });
            }
        }
        bounds
    }

    #[cfg(feature = "egui")]
    fn render(
        &mut self,
        painter: &egui::Painter,
        rect: egui::Rect,
        viewport: &Viewport,
    ) -> Result<()> {
        let stroke = egui::Stroke::new(self.style.width, egui::Color32::from(self.style.color));
        let viewport_bounds = viewport.bounds();

        for boundary in &self.boundaries {
            let in_view = boundary
                .bounds()
                .map(|b| b.intersects(&viewport_bounds))
                .unwrap_or(false);
            if !in_view {
                continue;
            }

            let mut previous: Option<egui::Pos2> = None;
            for point in &boundary.line {
                let pixel = viewport.lat_lng_to_pixel(point);
                let pos = rect.min + egui::vec2(pixel.x as f32, pixel.y as f32);
                if let Some(prev) = previous {
                    painter.line_segment([prev, pos], stroke);
                }
                previous = Some(pos);
            }
        }

        Ok(())
    }

    fn as_any(&self) -> &dyn std::any::Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn std::any::Any {
        self
    }
}

use crate::{
    core::geo::{LatLngBounds, Point},
    data::quake::Earthquake,
    layers::{
        base::{Layer, LayerKind, LayerProperties, LayerRole},
        style::{radius_for_magnitude, DepthBand, MarkerStyle},
    },
};
#[cfg(feature = "egui")]
use crate::{core::viewport::Viewport, Result};

/// Overlay drawing one circle marker per earthquake: fill color from the
/// hypocenter depth band, radius from the magnitude.
pub struct EarthquakeLayer {
    properties: LayerProperties,
    quakes: Vec<Earthquake>,
    style: MarkerStyle,
}

impl EarthquakeLayer {
    pub const ID: &'static str = "earthquakes";

    pub fn new(quakes: Vec<Earthquake>) -> Self {
        let properties = LayerProperties::new(Self::ID, "Earthquakes", LayerKind::Marker)
            .with_role(LayerRole::Overlay)
            .with_z_index(10);

        Self {
            properties,
            quakes,
            style: MarkerStyle::default(),
        }
    }

    pub fn quakes(&self) -> &[Earthquake] {
        &self.quakes
    }

    pub fn set_quakes(&mut self, quakes: Vec<Earthquake>) {
        self.quakes = quakes;
    }

    /// Marker radius in pixels for a quake
    pub fn marker_radius(quake: &Earthquake) -> f64 {
        radius_for_magnitude(quake.magnitude)
    }

    /// Topmost earthquake whose marker covers the given container-relative
    /// pixel, if any. Later-drawn (later in the feed) markers win ties.
    #[cfg(feature = "egui")]
    pub fn hit_test(&self, viewport: &Viewport, pixel: Point) -> Option<&Earthquake> {
        self.quakes.iter().rev().find(|quake| {
            let center = viewport.lat_lng_to_pixel(&quake.position);
            // Feed magnitudes can be negative; such markers are sub-pixel
            let radius = Self::marker_radius(quake).max(1.0);
            center.distance_to(&pixel) <= radius
        })
    }
}

impl Layer for EarthquakeLayer {
    fn properties(&self) -> &LayerProperties {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut LayerProperties {
        &mut self.properties
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        let points: Vec<_> = self.quakes.iter().map(|q| q.position).collect();
        LatLngBounds::from_points(&points)
    }

    #[cfg(feature = "egui")]
    fn render(
        &mut self,
        painter: &egui::Painter,
        rect: egui::Rect,
        viewport: &Viewport,
    ) -> Result<()> {
        let stroke = egui::Stroke::new(
            self.style.stroke_width,
            egui::Color32::from(self.style.stroke_color),
        );
        let fill_alpha = (self.style.fill_opacity * 255.0) as u8;

        for quake in &self.quakes {
            let pixel = viewport.lat_lng_to_pixel(&quake.position);
            let radius = Self::marker_radius(quake).max(1.0) as f32;
            let center = rect.min + egui::vec2(pixel.x as f32, pixel.y as f32);

            // Skip markers entirely outside the widget
            if !rect.expand(radius).contains(center) {
                continue;
            }

            let fill = DepthBand::for_depth(quake.depth_km)
                .color()
                .with_alpha(fill_alpha);
            painter.circle_filled(center, radius, fill);
            painter.circle_stroke(center, radius, stroke);
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

use crate::core::geo::{LatLng, LatLngBounds, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

const EARTH_RADIUS: f64 = 6378137.0;

/// Manages the current view of the map: center, zoom, and screen dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(0.0, 20.0),
            size,
            min_zoom: 0.0,
            max_zoom: 20.0,
        }
    }

    /// Sets the center of the viewport
    pub fn set_center(&mut self, center: LatLng) {
        self.center = LatLng::new(
            LatLng::clamp_lat(center.lat),
            LatLng::wrap_lng(center.lng),
        );
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets the viewport size
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Sets the zoom limits
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// Gets the scale factor for the current zoom level
    pub fn scale(&self) -> f64 {
        2_f64.powf(self.zoom)
    }

    /// Projects a LatLng to world pixel coordinates at the given zoom level
    /// (standard Web Mercator, EPSG:3857, 256px tiles)
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<f64>) -> Point {
        let z = zoom.unwrap_or(self.zoom);
        let scale = 256.0 * 2_f64.powf(z);

        let lat = LatLng::clamp_lat(lat_lng.lat);
        let x = lat_lng.lng.to_radians() * EARTH_RADIUS;
        let y = ((PI / 4.0 + lat.to_radians() / 2.0).tan().ln()) * EARTH_RADIUS;

        let world = 2.0 * PI * EARTH_RADIUS;
        let pixel_x = (x + PI * EARTH_RADIUS) / world * scale;
        let pixel_y = (-y + PI * EARTH_RADIUS) / world * scale;

        Point::new(pixel_x, pixel_y)
    }

    /// Unprojects world pixel coordinates back to LatLng at the given zoom level
    pub fn unproject(&self, pixel: &Point, zoom: Option<f64>) -> LatLng {
        let z = zoom.unwrap_or(self.zoom);
        let scale = 256.0 * 2_f64.powf(z);

        let world = 2.0 * PI * EARTH_RADIUS;
        let x = (pixel.x / scale) * world - PI * EARTH_RADIUS;
        let y = PI * EARTH_RADIUS - (pixel.y / scale) * world;

        let lng = (x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();

        LatLng::new(lat, lng)
    }

    /// World pixel coordinates of the viewport's top-left corner
    fn top_left_pixel(&self) -> Point {
        let center_pixel = self.project(&self.center, None);
        Point::new(
            center_pixel.x - self.size.x / 2.0,
            center_pixel.y - self.size.y / 2.0,
        )
    }

    /// Converts a geographical coordinate to container-relative pixel coordinates
    pub fn lat_lng_to_pixel(&self, lat_lng: &LatLng) -> Point {
        self.project(lat_lng, None).subtract(&self.top_left_pixel())
    }

    /// Converts container-relative pixel coordinates back to geographical coordinates
    pub fn pixel_to_lat_lng(&self, pixel: &Point) -> LatLng {
        self.unproject(&pixel.add(&self.top_left_pixel()), None)
    }

    /// Geographical bounds currently visible in the viewport
    pub fn bounds(&self) -> LatLngBounds {
        let top_left = self.top_left_pixel();
        let bottom_right = Point::new(top_left.x + self.size.x, top_left.y + self.size.y);

        let nw = self.unproject(&top_left, None);
        let se = self.unproject(&bottom_right, None);

        LatLngBounds::new(LatLng::new(se.lat, nw.lng), LatLng::new(nw.lat, se.lng))
    }

    /// Pans the viewport by a screen-pixel delta
    pub fn pan_by(&mut self, delta: Point) {
        let center_pixel = self.project(&self.center, None);
        let new_center = self.unproject(&center_pixel.add(&delta), None);
        self.set_center(new_center);
    }

    /// Zooms toward a zoom level while keeping the given container point fixed
    pub fn zoom_around(&mut self, zoom: f64, focus: Option<Point>) {
        let zoom = zoom.clamp(self.min_zoom, self.max_zoom);
        if (zoom - self.zoom).abs() < f64::EPSILON {
            return;
        }

        match focus {
            Some(focus) => {
                let fixed = self.pixel_to_lat_lng(&focus);
                self.zoom = zoom;
                // Re-center so `fixed` stays under the focus point
                let fixed_pixel = self.project(&fixed, None);
                let center_pixel = Point::new(
                    fixed_pixel.x - (focus.x - self.size.x / 2.0),
                    fixed_pixel.y - (focus.y - self.size.y / 2.0),
                );
                let new_center = self.unproject(&center_pixel, None);
                self.set_center(new_center);
            }
            None => self.zoom = zoom,
        }
    }

    /// Adjusts center and zoom so the given bounds fit the viewport
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: f64) {
        self.set_center(bounds.center());

        let usable_x = (self.size.x - padding * 2.0).max(1.0);
        let usable_y = (self.size.y - padding * 2.0).max(1.0);

        let mut zoom = self.max_zoom;
        while zoom > self.min_zoom {
            let sw = self.project(&bounds.south_west, Some(zoom));
            let ne = self.project(&bounds.north_east, Some(zoom));
            let width = (ne.x - sw.x).abs();
            let height = (sw.y - ne.y).abs();
            if width <= usable_x && height <= usable_y {
                break;
            }
            zoom -= 1.0;
        }

        self.set_zoom(zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world_viewport() -> Viewport {
        // Same initial view as the earthquake map: [25, 0] at zoom 3
        Viewport::new(LatLng::new(25.0, 0.0), 3.0, Point::new(1024.0, 768.0))
    }

    #[test]
    fn test_project_unproject_roundtrip() {
        let viewport = world_viewport();
        let original = LatLng::new(38.297, 142.373);

        let pixel = viewport.project(&original, None);
        let back = viewport.unproject(&pixel, None);

        assert!((back.lat - original.lat).abs() < 1e-6);
        assert!((back.lng - original.lng).abs() < 1e-6);
    }

    #[test]
    fn test_center_maps_to_viewport_middle() {
        let viewport = world_viewport();
        let pixel = viewport.lat_lng_to_pixel(&viewport.center);

        assert!((pixel.x - 512.0).abs() < 1e-6);
        assert!((pixel.y - 384.0).abs() < 1e-6);
    }

    #[test]
    fn test_bounds_contain_center() {
        let viewport = world_viewport();
        let bounds = viewport.bounds();
        assert!(bounds.contains(&viewport.center));
    }

    #[test]
    fn test_pan_by_moves_center() {
        let mut viewport = world_viewport();
        let before = viewport.center;
        viewport.pan_by(Point::new(100.0, 0.0));

        assert!(viewport.center.lng > before.lng);
        assert!((viewport.center.lat - before.lat).abs() < 1e-6);
    }

    #[test]
    fn test_zoom_around_clamps() {
        let mut viewport = world_viewport();
        viewport.set_zoom_limits(1.0, 10.0);
        viewport.zoom_around(25.0, None);
        assert_eq!(viewport.zoom, 10.0);
    }

    #[test]
    fn test_zoom_around_keeps_focus_fixed() {
        let mut viewport = world_viewport();
        let focus = Point::new(200.0, 150.0);
        let before = viewport.pixel_to_lat_lng(&focus);

        viewport.zoom_around(5.0, Some(focus));
        let after = viewport.pixel_to_lat_lng(&focus);

        assert!((before.lat - after.lat).abs() < 1e-6);
        assert!((before.lng - after.lng).abs() < 1e-6);
    }

    #[test]
    fn test_fit_bounds_covers_bounds() {
        let mut viewport = world_viewport();
        let bounds = LatLngBounds::from_coords(30.0, 128.0, 46.0, 146.0); // Japan
        viewport.fit_bounds(&bounds, 20.0);

        let visible = viewport.bounds();
        assert!(visible.contains(&bounds.south_west));
        assert!(visible.contains(&bounds.north_east));
    }
}

//! Marker styling for the earthquake map: depth buckets for color,
//! magnitude for radius, and the stroke styles of the two overlays.

use serde::{Deserialize, Serialize};

/// Serializable RGBA color that can convert to/from egui::Color32
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

#[cfg(feature = "egui")]
impl From<Color> for egui::Color32 {
    fn from(color: Color) -> Self {
        egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
    }
}

#[cfg(feature = "egui")]
impl From<egui::Color32> for Color {
    fn from(color: egui::Color32) -> Self {
        Self::new(color.r(), color.g(), color.b(), color.a())
    }
}

/// Depth buckets for earthquake marker coloring, shallow to deep.
/// Thresholds and colors follow the USGS earthquake map convention:
/// greener is shallower, redder is deeper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthBand {
    /// Up to 10 km
    Shallowest,
    /// 10–30 km
    Shallow,
    /// 30–50 km
    Moderate,
    /// 50–70 km
    Deep,
    /// 70–90 km
    Deeper,
    /// Beyond 90 km
    Deepest,
}

impl DepthBand {
    /// All bands in legend order (shallow first)
    pub const ALL: [DepthBand; 6] = [
        DepthBand::Shallowest,
        DepthBand::Shallow,
        DepthBand::Moderate,
        DepthBand::Deep,
        DepthBand::Deeper,
        DepthBand::Deepest,
    ];

    /// Buckets a hypocenter depth (km) into its band
    pub fn for_depth(depth_km: f64) -> Self {
        if depth_km > 90.0 {
            DepthBand::Deepest
        } else if depth_km > 70.0 {
            DepthBand::Deeper
        } else if depth_km > 50.0 {
            DepthBand::Deep
        } else if depth_km > 30.0 {
            DepthBand::Moderate
        } else if depth_km > 10.0 {
            DepthBand::Shallow
        } else {
            DepthBand::Shallowest
        }
    }

    /// CSS color name of the band
    pub fn css_name(&self) -> &'static str {
        match self {
            DepthBand::Shallowest => "lime",
            DepthBand::Shallow => "yellowgreen",
            DepthBand::Moderate => "gold",
            DepthBand::Deep => "darkorange",
            DepthBand::Deeper => "orangered",
            DepthBand::Deepest => "red",
        }
    }

    /// Marker fill color of the band (the CSS color's RGB values)
    pub fn color(&self) -> Color {
        match self {
            DepthBand::Shallowest => Color::rgb(0, 255, 0),
            DepthBand::Shallow => Color::rgb(154, 205, 50),
            DepthBand::Moderate => Color::rgb(255, 215, 0),
            DepthBand::Deep => Color::rgb(255, 140, 0),
            DepthBand::Deeper => Color::rgb(255, 69, 0),
            DepthBand::Deepest => Color::rgb(255, 0, 0),
        }
    }

    /// Legend row label, e.g. "10 - 30" or "90+"
    pub fn label(&self) -> &'static str {
        match self {
            DepthBand::Shallowest => "-10 - 10",
            DepthBand::Shallow => "10 - 30",
            DepthBand::Moderate => "30 - 50",
            DepthBand::Deep => "50 - 70",
            DepthBand::Deeper => "70 - 90",
            DepthBand::Deepest => "90+",
        }
    }
}

/// Marker radius in pixels from magnitude. Zero magnitude gets a minimum
/// radius so the event is still visible.
pub fn radius_for_magnitude(magnitude: f64) -> f64 {
    if magnitude != 0.0 {
        magnitude * 4.0
    } else {
        1.0
    }
}

/// Circle marker style for earthquake epicenters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    /// Border color
    pub stroke_color: Color,
    /// Border width
    pub stroke_width: f32,
    /// Fill opacity (0.0 to 1.0)
    pub fill_opacity: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            stroke_color: Color::rgb(0, 0, 0),
            stroke_width: 0.5,
            fill_opacity: 0.9,
        }
    }
}

/// Stroke style for plate boundary polylines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlateStyle {
    pub color: Color,
    pub width: f32,
}

impl Default for PlateStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb(255, 165, 0), // orange
            width: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_band_bucketing() {
        assert_eq!(DepthBand::for_depth(95.0).css_name(), "red");
        assert_eq!(DepthBand::for_depth(75.0).css_name(), "orangered");
        assert_eq!(DepthBand::for_depth(55.0).css_name(), "darkorange");
        assert_eq!(DepthBand::for_depth(35.0).css_name(), "gold");
        assert_eq!(DepthBand::for_depth(15.0).css_name(), "yellowgreen");
        assert_eq!(DepthBand::for_depth(5.0).css_name(), "lime");
    }

    #[test]
    fn test_depth_band_boundaries_are_exclusive() {
        // Thresholds use strict greater-than
        assert_eq!(DepthBand::for_depth(90.0), DepthBand::Deeper);
        assert_eq!(DepthBand::for_depth(10.0), DepthBand::Shallowest);
        assert_eq!(DepthBand::for_depth(-5.0), DepthBand::Shallowest);
    }

    #[test]
    fn test_radius_for_magnitude() {
        assert_eq!(radius_for_magnitude(2.5), 10.0);
        assert_eq!(radius_for_magnitude(0.0), 1.0);
        assert_eq!(radius_for_magnitude(6.1), 24.4);
    }

    #[test]
    fn test_legend_order_is_shallow_to_deep() {
        let labels: Vec<_> = DepthBand::ALL.iter().map(|band| band.label()).collect();
        assert_eq!(
            labels,
            vec!["-10 - 10", "10 - 30", "30 - 50", "50 - 70", "70 - 90", "90+"]
        );
        assert_eq!(DepthBand::ALL[0].color(), Color::rgb(0, 255, 0));
        assert_eq!(DepthBand::ALL[5].color(), Color::rgb(255, 0, 0));
    }
}

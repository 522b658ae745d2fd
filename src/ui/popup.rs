use crate::core::{geo::LatLng, viewport::Viewport};
use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, Vec2};

const PADDING: f32 = 8.0;
const LINE_HEIGHT: f32 = 16.0;
const ARROW_GAP: f32 = 14.0;

/// A popup anchored to a geographic position
#[derive(Debug, Clone)]
pub struct Popup {
    pub position: LatLng,
    pub content: String,
}

impl Popup {
    pub fn new(position: LatLng, content: impl Into<String>) -> Self {
        Self {
            position,
            content: content.into(),
        }
    }

    fn size(&self) -> Vec2 {
        let lines: Vec<&str> = self.content.lines().collect();
        let widest = lines.iter().map(|l| l.len()).max().unwrap_or(0) as f32;
        Vec2::new(
            (widest * 7.0 + 2.0 * PADDING).max(80.0),
            lines.len() as f32 * LINE_HEIGHT + 2.0 * PADDING,
        )
    }
}

/// Tracks the single open popup, Leaflet-style: opening a new one
/// replaces the previous, clicking empty map closes it.
#[derive(Debug, Default)]
pub struct PopupManager {
    open: Option<Popup>,
}

impl PopupManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self, popup: Popup) {
        self.open = Some(popup);
    }

    pub fn close(&mut self) {
        self.open = None;
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn current(&self) -> Option<&Popup> {
        self.open.as_ref()
    }

    pub fn render(&self, painter: &Painter, container: Rect, viewport: &Viewport) {
        let Some(popup) = &self.open else {
            return;
        };

        let pixel = viewport.lat_lng_to_pixel(&popup.position);
        let anchor = container.min + egui::vec2(pixel.x as f32, pixel.y as f32);
        let size = popup.size();
        let mut rect = Rect::from_min_size(
            Pos2::new(anchor.x - size.x / 2.0, anchor.y - size.y - ARROW_GAP),
            size,
        );
        // keep the popup inside the map area
        rect = rect.translate(Vec2::new(
            (container.min.x - rect.min.x).max(0.0) + (container.max.x - rect.max.x).min(0.0),
            (container.min.y - rect.min.y).max(0.0),
        ));

        painter.rect_filled(rect, 4.0, Color32::WHITE);
        painter.rect_stroke(rect, 4.0, Stroke::new(1.0, Color32::from_gray(120)));

        let font = FontId::proportional(12.0);
        let mut cursor = rect.min + Vec2::new(PADDING, PADDING);
        for line in popup.content.lines() {
            painter.text(cursor, Align2::LEFT_TOP, line, font.clone(), Color32::BLACK);
            cursor.y += LINE_HEIGHT;
        }
    }
}

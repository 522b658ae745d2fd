use crate::{input::events::MapEvent, layers::style::DepthBand, ui::elements::Position};
use egui::{Align2, Color32, FontId, Painter, Rect, Stroke, Vec2};

const SWATCH_SIZE: f32 = 18.0;
const ROW_GAP: f32 = 4.0;
const PADDING: f32 = 8.0;
const TITLE_HEIGHT: f32 = 18.0;

/// Depth legend pinned to a corner of the map.
///
/// Follows the visibility of one overlay: it listens for `overlayadd` and
/// `overlayremove` events carrying that overlay's id and shows or hides
/// itself accordingly.
pub struct Legend {
    position: Position,
    tracked_layer: String,
    visible: bool,
}

impl Legend {
    pub fn for_layer(layer_id: impl Into<String>) -> Self {
        Self {
            position: Position::BottomRight,
            tracked_layer: layer_id.into(),
            visible: true,
        }
    }

    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Updates visibility from overlay toggle events
    pub fn handle_event(&mut self, event: &MapEvent) {
        if event.layer_id() != Some(self.tracked_layer.as_str()) {
            return;
        }
        match event {
            MapEvent::OverlayAdd { .. } => self.visible = true,
            MapEvent::OverlayRemove { .. } => self.visible = false,
            _ => {}
        }
    }

    fn size(&self) -> Vec2 {
        let rows = DepthBand::ALL.len() as f32;
        Vec2::new(
            120.0,
            TITLE_HEIGHT + rows * (SWATCH_SIZE + ROW_GAP) + 2.0 * PADDING,
        )
    }

    pub fn render(&self, painter: &Painter, container: Rect) {
        if !self.visible {
            return;
        }

        let rect = self.position.calculate_rect(container, self.size(), 10.0);
        painter.rect_filled(rect, 4.0, Color32::WHITE);
        painter.rect_stroke(rect, 4.0, Stroke::new(1.0, Color32::BLACK));

        let font = FontId::proportional(12.0);
        let mut cursor = rect.min + Vec2::new(PADDING, PADDING);

        painter.text(
            cursor,
            Align2::LEFT_TOP,
            "Depth (km)",
            FontId::proportional(13.0),
            Color32::BLACK,
        );
        cursor.y += TITLE_HEIGHT;

        for band in DepthBand::ALL {
            let swatch = Rect::from_min_size(cursor, Vec2::splat(SWATCH_SIZE));
            painter.rect_filled(swatch, 2.0, band.color());
            painter.text(
                swatch.right_center() + Vec2::new(6.0, 0.0),
                Align2::LEFT_CENTER,
                band.label(),
                font.clone(),
                Color32::BLACK,
            );
            cursor.y += SWATCH_SIZE + ROW_GAP;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_follows_overlay_events() {
        let mut legend = Legend::for_layer("earthquakes");
        assert!(legend.is_visible());

        legend.handle_event(&MapEvent::OverlayRemove {
            layer_id: "earthquakes".to_string(),
        });
        assert!(!legend.is_visible());

        legend.handle_event(&MapEvent::OverlayAdd {
            layer_id: "earthquakes".to_string(),
        });
        assert!(legend.is_visible());
    }

    #[test]
    fn test_legend_ignores_other_overlays() {
        let mut legend = Legend::for_layer("earthquakes");
        legend.handle_event(&MapEvent::OverlayRemove {
            layer_id: "tectonic-plates".to_string(),
        });
        assert!(legend.is_visible());
    }
}

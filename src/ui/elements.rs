use egui::{Pos2, Rect, Vec2};

/// Anchor position for map controls and overlays
#[derive(Debug, Clone, PartialEq)]
pub enum Position {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Custom { x: f32, y: f32 },
}

impl Position {
    /// Resolves the anchor into a concrete rect inside `container`
    pub fn calculate_rect(&self, container: Rect, size: Vec2, margin: f32) -> Rect {
        let pos = match self {
            Position::TopLeft => container.min + Vec2::new(margin, margin),
            Position::TopRight => {
                Pos2::new(container.max.x - margin - size.x, container.min.y + margin)
            }
            Position::BottomLeft => {
                Pos2::new(container.min.x + margin, container.max.y - margin - size.y)
            }
            Position::BottomRight => container.max - Vec2::new(margin + size.x, margin + size.y),
            Position::Custom { x, y } => container.min + Vec2::new(*x, *y),
        };
        Rect::from_min_size(pos, size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_right_anchors_to_corner() {
        let container = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(800.0, 600.0));
        let rect = Position::BottomRight.calculate_rect(container, Vec2::new(100.0, 50.0), 10.0);

        assert_eq!(rect.max.x, 790.0);
        assert_eq!(rect.max.y, 590.0);
        assert_eq!(rect.size(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_top_left_respects_margin() {
        let container = Rect::from_min_size(Pos2::new(0.0, 0.0), Vec2::new(800.0, 600.0));
        let rect = Position::TopLeft.calculate_rect(container, Vec2::new(40.0, 40.0), 10.0);

        assert_eq!(rect.min, Pos2::new(10.0, 10.0));
    }
}

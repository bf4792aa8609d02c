use eframe::egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

/// Painted size of a system node, centered on its position.
pub(super) const NODE_SIZE: Vec2 = Vec2::new(120.0, 50.0);
pub(super) const NODE_CORNER_RADIUS: f32 = 12.0;

pub(super) fn node_rect(center: Pos2) -> Rect {
    Rect::from_center_size(center, NODE_SIZE)
}

pub(super) fn draw_background(painter: &Painter, rect: Rect) {
    painter.rect_filled(rect, 0.0, Color32::from_rgb(19, 23, 29));

    let step = 56.0;
    let stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(60, 70, 80, 70));

    let mut x = rect.left();
    while x < rect.right() {
        painter.line_segment(
            [Pos2::new(x, rect.top()), Pos2::new(x, rect.bottom())],
            stroke,
        );
        x += step;
    }

    let mut y = rect.top();
    while y < rect.bottom() {
        painter.line_segment(
            [Pos2::new(rect.left(), y), Pos2::new(rect.right(), y)],
            stroke,
        );
        y += step;
    }
}

/// Distance from `point` to the segment `a`-`b`.
pub(super) fn dist_to_segment(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let ab = b - a;
    let length_sq = ab.length_sq();
    if length_sq <= f32::EPSILON {
        return a.distance(point);
    }

    let t = ((point - a).dot(ab) / length_sq).clamp(0.0, 1.0);
    (a + ab * t).distance(point)
}

//! Circle vs. axis-aligned rectangle overlap

use crate::foundation::math::Vec2;

/// Whether a circle touches an axis-aligned rectangle
///
/// Uses the clamped (closest point) distance from the circle center to the
/// rectangle, so touching counts as overlapping.
pub fn circle_intersects_rect(center: Vec2, radius: f32, rect_center: Vec2, half: Vec2) -> bool {
    let dx = ((center.x - rect_center.x).abs() - half.x).max(0.0);
    let dy = ((center.y - rect_center.y).abs() - half.y).max(0.0);
    dx * dx + dy * dy <= radius * radius
}

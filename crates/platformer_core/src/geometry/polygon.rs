//! 2D polygon clipping and area
//!
//! Shadows are circles cut down to the rectangular top of whatever they land
//! on. The circle is approximated by a regular polygon and then clipped
//! against each side of the rectangle in turn (Sutherland–Hodgman).

use crate::foundation::math::{constants::TAU, Vec2};

/// Default vertex count used to approximate a circle
pub const CIRCLE_SEGMENTS: usize = 32;

/// Closed 2D polygon, vertices in order, last vertex implicitly joined to the first
pub type Polygon = Vec<Vec2>;

/// One half-plane of an axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClipEdge {
    /// Keep `x >= value`
    MinX(f32),
    /// Keep `x <= value`
    MaxX(f32),
    /// Keep `y >= value`
    MinY(f32),
    /// Keep `y <= value`
    MaxY(f32),
}

impl ClipEdge {
    /// Whether `point` lies on the kept side (boundary included)
    pub fn contains(self, point: &Vec2) -> bool {
        match self {
            Self::MinX(x) => point.x >= x,
            Self::MaxX(x) => point.x <= x,
            Self::MinY(y) => point.y >= y,
            Self::MaxY(y) => point.y <= y,
        }
    }

    /// Point where segment `a -> b` crosses this edge's line
    fn intersect(self, a: &Vec2, b: &Vec2) -> Vec2 {
        match self {
            Self::MinX(x) | Self::MaxX(x) => {
                let denom = b.x - a.x;
                let t = if denom == 0.0 { 0.0 } else { (x - a.x) / denom };
                Vec2::new(x, a.y + (b.y - a.y) * t)
            }
            Self::MinY(y) | Self::MaxY(y) => {
                let denom = b.y - a.y;
                let t = if denom == 0.0 { 0.0 } else { (y - a.y) / denom };
                Vec2::new(a.x + (b.x - a.x) * t, y)
            }
        }
    }
}

/// Regular `segments`-gon inscribed in the circle, counter-clockwise from +X
pub fn circle_polygon(center: Vec2, radius: f32, segments: usize) -> Polygon {
    (0..segments)
        .map(|i| {
            let angle = i as f32 / segments as f32 * TAU;
            Vec2::new(center.x + angle.cos() * radius, center.y + angle.sin() * radius)
        })
        .collect()
}

/// One Sutherland–Hodgman stage: keep the part of `points` inside `edge`
///
/// Edges that cross the boundary are replaced by the exact crossing point.
pub fn clip_polygon(points: &[Vec2], edge: ClipEdge) -> Polygon {
    let mut output = Vec::with_capacity(points.len() + 1);

    for (i, current) in points.iter().enumerate() {
        let next = &points[(i + 1) % points.len()];

        match (edge.contains(current), edge.contains(next)) {
            (true, true) => output.push(*next),
            (true, false) => output.push(edge.intersect(current, next)),
            (false, true) => {
                output.push(edge.intersect(current, next));
                output.push(*next);
            }
            (false, false) => {}
        }
    }

    output
}

/// Circle of `radius` at `center`, clipped to the rectangle `[-half, half]`
///
/// The rectangle is centered on the local origin. Returns an empty polygon
/// when `radius <= 0` or nothing of the circle survives.
pub fn clip_circle_to_rect(center: Vec2, radius: f32, half: Vec2) -> Polygon {
    clip_circle_to_rect_with(center, radius, half, CIRCLE_SEGMENTS)
}

/// [`clip_circle_to_rect`] with an explicit circle resolution
pub fn clip_circle_to_rect_with(center: Vec2, radius: f32, half: Vec2, segments: usize) -> Polygon {
    if radius <= 0.0 {
        return Vec::new();
    }

    [
        ClipEdge::MinX(-half.x),
        ClipEdge::MaxX(half.x),
        ClipEdge::MinY(-half.y),
        ClipEdge::MaxY(half.y),
    ]
    .into_iter()
    .fold(circle_polygon(center, radius, segments), |points, edge| {
        clip_polygon(&points, edge)
    })
}

/// Shoelace area; positive for counter-clockwise winding
pub fn signed_area(points: &[Vec2]) -> f32 {
    let twice: f32 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();
    twice * 0.5
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::constants::PI;
    use approx::assert_relative_eq;

    #[test]
    fn test_signed_area_winding() {
        let ccw = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 3.0),
            Vec2::new(0.0, 3.0),
        ];
        let cw: Polygon = ccw.iter().rev().copied().collect();

        assert_relative_eq!(signed_area(&ccw), 6.0);
        assert_relative_eq!(signed_area(&cw), -6.0);
        assert_relative_eq!(signed_area(&[]), 0.0);
    }

    #[test]
    fn test_contained_circle_is_untouched() {
        let polygon = clip_circle_to_rect(Vec2::zeros(), 5.0, Vec2::new(10.0, 10.0));
        let unclipped = circle_polygon(Vec2::zeros(), 5.0, CIRCLE_SEGMENTS);

        assert_eq!(polygon.len(), CIRCLE_SEGMENTS);
        assert_relative_eq!(signed_area(&polygon), signed_area(&unclipped), epsilon = 1e-3);
        assert!(signed_area(&polygon) <= PI * 25.0);
    }

    #[test]
    fn test_clipped_area_never_exceeds_circle() {
        let cases = [
            (Vec2::new(8.0, 0.0), 5.0, Vec2::new(10.0, 10.0)),
            (Vec2::new(9.0, 9.0), 4.0, Vec2::new(10.0, 10.0)),
            (Vec2::new(0.0, 0.0), 20.0, Vec2::new(3.0, 1.0)),
        ];

        for (center, radius, half) in cases {
            let area = signed_area(&clip_circle_to_rect(center, radius, half));
            assert!(area > 0.0);
            assert!(area <= PI * radius * radius);
            assert!(area <= 4.0 * half.x * half.y + 1e-3);
        }
    }

    #[test]
    fn test_circle_larger_than_rect_becomes_rect() {
        let polygon = clip_circle_to_rect(Vec2::zeros(), 100.0, Vec2::new(3.0, 2.0));

        assert_relative_eq!(signed_area(&polygon), 24.0, epsilon = 1e-3);
        for point in &polygon {
            assert!(point.x.abs() <= 3.0 + 1e-4 && point.y.abs() <= 2.0 + 1e-4);
        }
    }

    #[test]
    fn test_zero_radius_and_disjoint_are_empty() {
        assert!(clip_circle_to_rect(Vec2::zeros(), 0.0, Vec2::new(1.0, 1.0)).is_empty());
        assert!(clip_circle_to_rect(Vec2::new(50.0, 0.0), 5.0, Vec2::new(1.0, 1.0)).is_empty());
    }

    #[test]
    fn test_single_stage_inserts_crossings() {
        let square = vec![
            Vec2::new(-1.0, -1.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 1.0),
        ];
        let clipped = clip_polygon(&square, ClipEdge::MaxX(0.0));

        assert_eq!(clipped.len(), 4);
        assert_relative_eq!(signed_area(&clipped), 2.0);
        assert!(clipped.iter().all(|p| p.x <= 0.0));
    }
}

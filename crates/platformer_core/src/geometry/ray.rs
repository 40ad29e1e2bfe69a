//! Rays and ray/box intersection

use crate::foundation::math::Vec3;

/// Direction components smaller than this are treated as parallel to a slab
pub const PARALLEL_EPSILON: f32 = 1.0e-4;

/// A ray for occlusion tests and picking
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// The origin point of the ray in world space
    pub origin: Vec3,
    /// The direction of the ray (unit length)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a new ray with the given origin and direction
    ///
    /// The direction is normalized. Callers must not pass a zero vector.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Get a point along the ray at distance t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Slab test of `ray` against the box spanning `min..=max`
///
/// Returns the distance to the entry face. When the origin is already inside
/// the box the distance to the exit face is returned instead, so a ray that
/// starts inside a box still reports that box. Returns `None` when the ray
/// misses or the box lies entirely behind the origin.
///
/// An axis whose direction component is below [`PARALLEL_EPSILON`] is
/// skipped if the origin lies within that slab and fails the whole test
/// otherwise.
pub fn ray_box_intersect(ray: &Ray, min: &Vec3, max: &Vec3) -> Option<f32> {
    let mut t_min = f32::NEG_INFINITY;
    let mut t_max = f32::INFINITY;

    for axis in 0..3 {
        let origin = ray.origin[axis];
        let dir = ray.direction[axis];

        if dir.abs() < PARALLEL_EPSILON {
            if origin < min[axis] || origin > max[axis] {
                return None;
            }
            continue;
        }

        let t1 = (min[axis] - origin) / dir;
        let t2 = (max[axis] - origin) / dir;
        t_min = t_min.max(t1.min(t2));
        t_max = t_max.min(t1.max(t2));

        if t_min > t_max {
            return None;
        }
    }

    if t_max < 0.0 {
        return None;
    }

    Some(if t_min >= 0.0 { t_min } else { t_max })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box() -> (Vec3, Vec3) {
        (Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0))
    }

    fn on_boundary(point: Vec3, min: &Vec3, max: &Vec3) -> bool {
        const TOL: f32 = 1e-4;
        let inside = (0..3).all(|i| point[i] >= min[i] - TOL && point[i] <= max[i] + TOL);
        let on_face = (0..3).any(|i| (point[i] - min[i]).abs() < TOL || (point[i] - max[i]).abs() < TOL);
        inside && on_face
    }

    #[test]
    fn test_hit_from_outside_returns_entry() {
        let (min, max) = unit_box();
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        let t = ray_box_intersect(&ray, &min, &max).unwrap();
        assert_relative_eq!(t, 4.0);
        assert!(on_boundary(ray.point_at(t), &min, &max));
    }

    #[test]
    fn test_origin_inside_returns_exit() {
        let (min, max) = unit_box();
        let ray = Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        let t = ray_box_intersect(&ray, &min, &max).unwrap();
        assert_relative_eq!(t, 0.5);
    }

    #[test]
    fn test_box_behind_ray_misses() {
        let (min, max) = unit_box();
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        assert!(ray_box_intersect(&ray, &min, &max).is_none());
    }

    #[test]
    fn test_parallel_ray_outside_slab_misses() {
        let (min, max) = unit_box();
        // Travels along X but sits above the box on Z
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 2.0), Vec3::new(1.0, 0.0, 0.0));

        assert!(ray_box_intersect(&ray, &min, &max).is_none());
    }

    #[test]
    fn test_parallel_ray_inside_slab_hits() {
        let (min, max) = unit_box();
        let ray = Ray::new(Vec3::new(-5.0, 0.99, 0.0), Vec3::new(1.0, 0.0, 0.0));

        assert!(ray_box_intersect(&ray, &min, &max).is_some());
    }

    #[test]
    fn test_oblique_hits_land_on_boundary() {
        let min = Vec3::new(10.0, -20.0, 0.0);
        let max = Vec3::new(50.0, 20.0, 40.0);
        let origins = [
            Vec3::new(-30.0, 5.0, 70.0),
            Vec3::new(0.0, -60.0, 20.0),
            Vec3::new(100.0, 100.0, -10.0),
        ];

        for origin in origins {
            let ray = Ray::new(origin, Vec3::new(30.0, 0.0, 20.0) - origin);
            let t = ray_box_intersect(&ray, &min, &max)
                .unwrap_or_else(|| panic!("ray from {origin:?} should hit"));
            assert!(t >= 0.0);
            assert!(on_boundary(ray.point_at(t), &min, &max), "hit off boundary from {origin:?}");
        }
    }

    #[test]
    fn test_grazing_miss() {
        let (min, max) = unit_box();
        let ray = Ray::new(Vec3::new(-5.0, 3.0, 0.0), Vec3::new(1.0, 0.1, 0.0));

        assert!(ray_box_intersect(&ray, &min, &max).is_none());
    }
}

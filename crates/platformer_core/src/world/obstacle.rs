//! Static obstacles: boxes and ramps
//!
//! An obstacle is stored as a center and a size. Everything else (extents,
//! top, ramp surface) is derived on demand, so editing `center` or `size`
//! can never leave stale bounds behind.

use serde::{Serialize, Deserialize};

use crate::foundation::math::{Vec2, Vec3};
use crate::geometry::PARALLEL_EPSILON;

/// Cosmetic RGB color carried through for the level schema, ignored by the core
pub type Color = [u8; 3];

/// Horizontal axis a ramp rises along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampAxis {
    /// Rises along world X
    #[default]
    X,
    /// Rises along world Y
    Y,
}

/// Which way along its axis a ramp rises
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RampDirection {
    /// Low end at the minimum side, rising toward +axis
    #[default]
    Positive,
    /// Low end at the maximum side, rising toward -axis
    Negative,
}

impl RampDirection {
    /// Direction from a signed value; zero counts as positive
    pub fn from_sign(sign: f32) -> Self {
        if sign >= 0.0 {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// `1` or `-1`
    pub fn sign(self) -> i32 {
        match self {
            Self::Positive => 1,
            Self::Negative => -1,
        }
    }
}

/// Geometry variant of an obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObstacleShape {
    /// Solid axis-aligned box
    #[default]
    Box,
    /// Wedge filling the box volume; its walkable surface rises along `axis`
    Ramp {
        /// Axis of the slope
        axis: RampAxis,
        /// Which end is low
        direction: RampDirection,
    },
}

/// Axis-aligned bounds derived from an obstacle's center and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Half of the size on each axis
    pub half: Vec3,
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
    /// `max.z`
    pub top_z: f32,
    /// `min.z`
    pub bottom_z: f32,
}

impl Bounds {
    /// Bounds of a box centered at `center` with full extents `size`
    pub fn from_center_size(center: Vec3, size: Vec3) -> Self {
        let half = size * 0.5;
        Self {
            half,
            min: center - half,
            max: center + half,
            top_z: center.z + half.z,
            bottom_z: center.z - half.z,
        }
    }

    /// Check if the bounds, grown by `padding` on every side, contain a point
    pub fn contains_point(&self, point: &Vec3, padding: f32) -> bool {
        (0..3).all(|axis| {
            point[axis] >= self.min[axis] - padding && point[axis] <= self.max[axis] + padding
        })
    }
}

/// A static collidable volume
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Geometric center (z includes the half height above the base)
    pub center: Vec3,
    /// Full extents (width, depth, height)
    pub size: Vec3,
    /// Box or ramp
    pub shape: ObstacleShape,
    /// Cosmetic color, passed through untouched
    pub color: Option<Color>,
}

impl Obstacle {
    /// Box whose footprint is centered on `base.xy` and whose bottom sits at `base.z`
    pub fn new_box(base: Vec3, size: Vec3) -> Self {
        Self {
            center: Vec3::new(base.x, base.y, base.z + size.z * 0.5),
            size,
            shape: ObstacleShape::Box,
            color: None,
        }
    }

    /// Ramp occupying the same volume a box at `base` with `size` would
    pub fn new_ramp(base: Vec3, size: Vec3, axis: RampAxis, direction: RampDirection) -> Self {
        Self {
            shape: ObstacleShape::Ramp { axis, direction },
            ..Self::new_box(base, size)
        }
    }

    /// Attach a cosmetic color
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Footprint center at the bottom face (the schema's `x, y, z`)
    pub fn base(&self) -> Vec3 {
        Vec3::new(self.center.x, self.center.y, self.center.z - self.size.z * 0.5)
    }

    /// Current bounds
    pub fn bounds(&self) -> Bounds {
        Bounds::from_center_size(self.center, self.size)
    }

    /// Whether this obstacle is a ramp
    pub fn is_ramp(&self) -> bool {
        matches!(self.shape, ObstacleShape::Ramp { .. })
    }

    /// Footprint center on the XY plane
    pub fn footprint_center(&self) -> Vec2 {
        self.center.xy()
    }

    /// Footprint half extents on the XY plane
    pub fn half_footprint(&self) -> Vec2 {
        self.size.xy() * 0.5
    }

    /// Rise over run of a ramp, `None` for boxes
    ///
    /// A ramp with (near) zero run reports an infinite slope.
    pub fn slope(&self) -> Option<f32> {
        match self.shape {
            ObstacleShape::Box => None,
            ObstacleShape::Ramp { axis, .. } => {
                let run = match axis {
                    RampAxis::X => self.size.x,
                    RampAxis::Y => self.size.y,
                }
                .abs();
                if run <= PARALLEL_EPSILON {
                    Some(f32::INFINITY)
                } else {
                    Some(self.size.z.abs() / run)
                }
            }
        }
    }

    /// Whether an actor limited to `max_slope` walks on this ramp
    ///
    /// Boxes and degenerate (infinitely steep) ramps never qualify, even when
    /// `max_slope` itself is infinite; they collide as solid boxes instead.
    pub fn is_walkable_ramp(&self, max_slope: f32) -> bool {
        self.slope()
            .is_some_and(|slope| slope.is_finite() && slope <= max_slope)
    }

    /// Height of the walkable top at `(x, y)`
    ///
    /// Boxes are flat. Ramps interpolate from their base to their top along
    /// the slope axis, clamped flat beyond either end of the run.
    pub fn surface_z(&self, x: f32, y: f32) -> f32 {
        let bounds = self.bounds();

        match self.shape {
            ObstacleShape::Box => bounds.top_z,
            ObstacleShape::Ramp { axis, direction } => {
                let (local, half, run) = match axis {
                    RampAxis::X => (x - self.center.x, bounds.half.x, self.size.x),
                    RampAxis::Y => (y - self.center.y, bounds.half.y, self.size.y),
                };
                let t = match direction {
                    RampDirection::Positive => (local + half) / run,
                    RampDirection::Negative => (half - local) / run,
                };
                // max/min rather than clamp: a zero run yields NaN, which lands on the base
                bounds.bottom_z + t.max(0.0).min(1.0) * self.size.z
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ramp(axis: RampAxis, direction: RampDirection) -> Obstacle {
        Obstacle::new_ramp(Vec3::new(0.0, 0.0, 10.0), Vec3::new(100.0, 60.0, 40.0), axis, direction)
    }

    #[test]
    fn test_box_bounds_from_base() {
        let obstacle = Obstacle::new_box(Vec3::new(5.0, -3.0, 2.0), Vec3::new(10.0, 6.0, 40.0));
        let bounds = obstacle.bounds();

        assert_relative_eq!(bounds.min, Vec3::new(0.0, -6.0, 2.0));
        assert_relative_eq!(bounds.max, Vec3::new(10.0, 0.0, 42.0));
        assert_relative_eq!(bounds.top_z, 42.0);
        assert_relative_eq!(bounds.bottom_z, 2.0);
        assert_relative_eq!(obstacle.base(), Vec3::new(5.0, -3.0, 2.0));
    }

    #[test]
    fn test_bounds_follow_edits() {
        let mut obstacle = Obstacle::new_box(Vec3::zeros(), Vec3::new(2.0, 2.0, 2.0));
        obstacle.center.x += 10.0;
        obstacle.size.z = 8.0;

        let bounds = obstacle.bounds();
        assert_relative_eq!(bounds.min.x, 9.0);
        assert_relative_eq!(bounds.top_z, 1.0 + 4.0);
    }

    #[test]
    fn test_padded_containment() {
        let bounds = Bounds::from_center_size(Vec3::zeros(), Vec3::new(2.0, 2.0, 2.0));

        assert!(bounds.contains_point(&Vec3::new(1.005, 0.0, 0.0), 0.01));
        assert!(!bounds.contains_point(&Vec3::new(1.02, 0.0, 0.0), 0.01));
    }

    #[test]
    fn test_ramp_surface_positive_x() {
        let ramp = ramp(RampAxis::X, RampDirection::Positive);

        assert_relative_eq!(ramp.surface_z(-50.0, 0.0), 10.0);
        assert_relative_eq!(ramp.surface_z(0.0, 0.0), 30.0);
        assert_relative_eq!(ramp.surface_z(50.0, 0.0), 50.0);
        // Clamped flat past either end
        assert_relative_eq!(ramp.surface_z(-500.0, 0.0), 10.0);
        assert_relative_eq!(ramp.surface_z(500.0, 0.0), 50.0);
    }

    #[test]
    fn test_ramp_surface_negative_y() {
        let ramp = ramp(RampAxis::Y, RampDirection::Negative);

        assert_relative_eq!(ramp.surface_z(0.0, 30.0), 10.0);
        assert_relative_eq!(ramp.surface_z(0.0, -30.0), 50.0);
        // X does not matter for a Y ramp
        assert_relative_eq!(ramp.surface_z(999.0, 0.0), 30.0);
    }

    #[test]
    fn test_ramp_surface_is_monotonic_along_run() {
        let ramp = ramp(RampAxis::X, RampDirection::Positive);
        let mut previous = f32::NEG_INFINITY;

        for step in 0..=40 {
            let x = -80.0 + step as f32 * 4.0;
            let z = ramp.surface_z(x, 0.0);
            assert!(z >= previous);
            assert!((10.0..=50.0).contains(&z));
            previous = z;
        }
    }

    #[test]
    fn test_box_surface_is_flat_top() {
        let obstacle = Obstacle::new_box(Vec3::zeros(), Vec3::new(4.0, 4.0, 40.0));
        assert_relative_eq!(obstacle.surface_z(1.0, -1.0), 40.0);
        assert!(obstacle.slope().is_none());
    }

    #[test]
    fn test_slope_and_walkability() {
        let ramp = ramp(RampAxis::X, RampDirection::Positive);

        assert_relative_eq!(ramp.slope().unwrap(), 0.4);
        assert!(ramp.is_walkable_ramp(f32::INFINITY));
        assert!(ramp.is_walkable_ramp(0.4));
        assert!(!ramp.is_walkable_ramp(0.3));
    }

    #[test]
    fn test_zero_run_ramp_is_never_walkable() {
        let wall = Obstacle::new_ramp(
            Vec3::zeros(),
            Vec3::new(0.0, 10.0, 40.0),
            RampAxis::X,
            RampDirection::Positive,
        );

        assert_eq!(wall.slope(), Some(f32::INFINITY));
        assert!(!wall.is_walkable_ramp(f32::INFINITY));
    }
}

//! Line-of-sight test between a camera and its target

use crate::foundation::math::Vec3;
use crate::geometry::{ray_box_intersect, Ray};
use crate::world::{Bounds, ObstacleHandle, World};

/// Padding applied to obstacle bounds when deciding whether the target sits
/// inside them, and to both ends of the sight line
pub const SELF_OCCLUSION_PADDING: f32 = 0.01;

/// Camera and target closer than this are treated as coincident
const MIN_SIGHT_DISTANCE: f32 = 1.0e-4;

/// The occluder nearest to the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestOccluder {
    /// Which obstacle
    pub handle: ObstacleHandle,
    /// Its bounds at the time of the test
    pub bounds: Bounds,
    /// Distance from the target along the sight line
    pub t: f32,
}

/// Every obstacle between a camera and its target
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Occlusion {
    /// Occluding obstacles in world iteration order
    pub occluders: Vec<ObstacleHandle>,
    /// The one nearest to the target, if any
    pub closest: Option<ClosestOccluder>,
}

impl Occlusion {
    /// Number of occluders
    pub fn count(&self) -> usize {
        self.occluders.len()
    }

    /// Whether the line of sight is clear
    pub fn is_clear(&self) -> bool {
        self.occluders.is_empty()
    }
}

/// Cast from `target` toward `camera` and collect every obstacle in between
///
/// Obstacles that contain the target are skipped, as are hits within
/// [`SELF_OCCLUSION_PADDING`] of either end of the sight line.
pub fn occlusion(world: &World, camera: Vec3, target: Vec3) -> Occlusion {
    let offset = camera - target;
    let distance = offset.norm();
    if distance <= MIN_SIGHT_DISTANCE {
        return Occlusion::default();
    }

    let ray = Ray {
        origin: target,
        direction: offset / distance,
    };
    let mut result = Occlusion::default();

    for (handle, _, bounds) in world.iter() {
        if bounds.contains_point(&target, SELF_OCCLUSION_PADDING) {
            continue;
        }
        let Some(t) = ray_box_intersect(&ray, &bounds.min, &bounds.max) else {
            continue;
        };
        if t <= SELF_OCCLUSION_PADDING || t >= distance - SELF_OCCLUSION_PADDING {
            continue;
        }

        result.occluders.push(handle);
        if result.closest.map_or(true, |closest| t < closest.t) {
            result.closest = Some(ClosestOccluder { handle, bounds, t });
        }
    }

    result
}

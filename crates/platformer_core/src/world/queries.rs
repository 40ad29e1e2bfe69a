//! Per-frame world queries: picking and shadow receivers

use super::{ObstacleHandle, ObstacleShape, World};
use crate::core::config::ShadowConfig;
use crate::foundation::math::{Vec2, Vec3};
use crate::geometry::{circle_intersects_rect, ray_box_intersect, Ray};

/// Result of [`World::pick_nearest`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    /// The obstacle that was hit
    pub handle: ObstacleHandle,
    /// The point of intersection in world space
    pub point: Vec3,
    /// Distance along the ray
    pub t: f32,
}

/// A surface that receives the actor's contact shadow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSurface {
    /// The receiving obstacle
    pub handle: ObstacleHandle,
    /// Height of the receiving top under the actor (ramp surface for ramps)
    pub top_z: f32,
    /// Shadow radius on this surface
    pub radius: f32,
}

impl World {
    /// Closest box hit by `ray`
    ///
    /// Ramps are not selectable. A ray starting inside a box reports that box
    /// at its exit face.
    pub fn pick_nearest(&self, ray: &Ray) -> Option<PickHit> {
        self.iter()
            .filter(|(_, obstacle, _)| obstacle.shape == ObstacleShape::Box)
            .filter_map(|(handle, _, bounds)| {
                ray_box_intersect(ray, &bounds.min, &bounds.max).map(|t| (handle, t))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(handle, t)| PickHit {
                handle,
                point: ray.point_at(t),
                t,
            })
    }

    /// Surfaces under an actor standing at `position` that can receive its shadow
    ///
    /// A surface qualifies when its top at `position` is no more than
    /// `receive_tolerance` above `bottom_z` and the shadow circle, shrunk by
    /// the drop height, still touches its footprint. The result is sorted
    /// highest first; the first entry is the primary receiver.
    pub fn shadow_surfaces(
        &self,
        position: Vec2,
        bottom_z: f32,
        actor_size: f32,
        config: &ShadowConfig,
    ) -> Vec<ShadowSurface> {
        let mut surfaces: Vec<ShadowSurface> = self
            .iter()
            .filter_map(|(handle, obstacle, bounds)| {
                let top_z = obstacle.surface_z(position.x, position.y);
                if top_z > bottom_z + config.receive_tolerance {
                    return None;
                }

                let radius = config.radius_at(actor_size, bottom_z - top_z);
                circle_intersects_rect(position, radius, obstacle.footprint_center(), bounds.half.xy())
                    .then_some(ShadowSurface { handle, top_z, radius })
            })
            .collect();

        surfaces.sort_by(|a, b| b.top_z.total_cmp(&a.top_z));
        surfaces
    }
}

//! Platform-on-platform shadows

use super::ShadowProjector;
use crate::foundation::math::Vec2;
use crate::world::{ObstacleHandle, World};

/// Rectangle a platform darkens on a platform below it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlatformShadow {
    /// The platform above
    pub caster: ObstacleHandle,
    /// The platform below
    pub receiver: ObstacleHandle,
    /// Minimum corner of the footprint overlap, world XY
    pub min: Vec2,
    /// Maximum corner of the footprint overlap, world XY
    pub max: Vec2,
    /// Height to draw at, just above the receiver's top
    pub z: f32,
}

impl PlatformShadow {
    /// Corners in drawing order
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.min.x, self.max.y),
            self.max,
            Vec2::new(self.max.x, self.min.y),
        ]
    }
}

impl ShadowProjector {
    /// Footprint overlaps of every platform with every platform beneath it
    ///
    /// A receiver must sit below the caster's bottom by more than
    /// `hole_tolerance` and by no more than `max_platform_drop`. Quadratic in
    /// the number of obstacles.
    pub fn platform_shadows(&self, world: &World) -> Vec<PlatformShadow> {
        let config = self.config();
        let mut shadows = Vec::new();

        for (caster, _, above) in world.iter() {
            for (receiver, _, below) in world.iter() {
                if receiver == caster || below.top_z >= above.bottom_z - config.hole_tolerance {
                    continue;
                }
                if above.bottom_z - below.top_z > config.max_platform_drop {
                    continue;
                }

                let min = above.min.xy().sup(&below.min.xy());
                let max = above.max.xy().inf(&below.max.xy());
                if min.x >= max.x || min.y >= max.y {
                    continue;
                }

                shadows.push(PlatformShadow {
                    caster,
                    receiver,
                    min,
                    max,
                    z: below.top_z + config.platform_offset,
                });
            }
        }

        shadows
    }
}

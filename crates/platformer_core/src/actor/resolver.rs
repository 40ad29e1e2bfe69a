//! Discrete collision resolution for the actor
//!
//! One pass per frame, no sweeping: the body is tested where the movement
//! layer left it and pushed out of whatever it overlaps. Two passes run in
//! order:
//!
//! 1. **Solid pass.** Boxes, and ramps too steep for the actor, are treated as
//!    solid. Each overlap is resolved along its axis of least penetration.
//!    Horizontal hits may turn into a step-up onto the obstacle's top.
//! 2. **Ramp pass.** The highest walkable ramp surface under the footprint
//!    catches the feet if they are at or just below it.

use super::{ActorState, ContactFlags};
use crate::core::config::ActorConfig;
use crate::foundation::math::{utils::sign_or_positive, Vec3};
use crate::world::{Bounds, Obstacle, World};

/// Resolves an [`ActorState`] against the static obstacles of a [`World`]
#[derive(Debug, Clone)]
pub struct ActorResolver {
    config: ActorConfig,
}

impl ActorResolver {
    /// Create a resolver with the given fall-out and snapping policy
    pub fn new(config: ActorConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ActorConfig {
        &self.config
    }

    /// Run one resolution pass
    ///
    /// `on_ground` is recomputed from scratch. Falling below the fall limit is
    /// only reported through [`ContactFlags::FELL_OUT`]; respawning is up to
    /// the caller.
    pub fn resolve(&self, actor: &mut ActorState, world: &World) -> ContactFlags {
        actor.on_ground = false;

        let half = actor.half_extents();
        let mut center = actor.center();
        let mut contacts = ContactFlags::empty();

        for (_, obstacle, bounds) in world.iter() {
            if obstacle.is_walkable_ramp(actor.max_ramp_slope) {
                continue;
            }
            contacts |= Self::push_out(actor, &mut center, &half, obstacle, &bounds);
        }

        if let Some(ramp_z) = Self::ramp_surface(actor, &center, &half, world) {
            let bottom = center.z - half.z;
            if bottom <= ramp_z + self.config.ramp_snap_tolerance && center.z >= ramp_z {
                center.z = ramp_z + half.z;
                Self::land(actor);
                contacts |= ContactFlags::RAMP_SNAPPED;
            }
        }

        actor.pos = Vec3::new(center.x, center.y, center.z - half.z);

        if actor.on_ground {
            contacts |= ContactFlags::GROUNDED;
        }
        if actor.pos.z < self.config.fall_limit {
            log::debug!("Actor fell out at {:?} (limit {})", actor.pos, self.config.fall_limit);
            contacts |= ContactFlags::FELL_OUT;
        }

        contacts
    }

    /// Resolve one solid obstacle along its axis of least overlap
    ///
    /// X wins only when strictly smallest, then Y when below Z, so equal
    /// overlaps go to the later axis.
    fn push_out(
        actor: &mut ActorState,
        center: &mut Vec3,
        half: &Vec3,
        obstacle: &Obstacle,
        bounds: &Bounds,
    ) -> ContactFlags {
        let delta = *center - obstacle.center;
        let overlap = bounds.half + half - delta.abs();
        if overlap.iter().any(|&depth| depth <= 0.0) {
            return ContactFlags::empty();
        }

        let axis = if overlap.x < overlap.y && overlap.x < overlap.z {
            0
        } else if overlap.y < overlap.z {
            1
        } else {
            2
        };

        if axis < 2 {
            if Self::try_step_up(actor, center, half.z, bounds.top_z) {
                return ContactFlags::STEPPED_UP;
            }
            center[axis] += sign_or_positive(delta[axis]) * overlap[axis];
            return ContactFlags::PUSHED;
        }

        let sign = sign_or_positive(delta.z);
        center.z += sign * overlap.z;
        if sign > 0.0 {
            Self::land(actor);
            ContactFlags::empty()
        } else {
            if actor.vel_z > 0.0 {
                actor.vel_z = 0.0;
            }
            log::trace!("Head bump at {:?}", center);
            ContactFlags::HEAD_BUMP
        }
    }

    /// Lift the body onto `top_z` if it is a ledge the actor may climb
    fn try_step_up(actor: &mut ActorState, center: &mut Vec3, half_z: f32, top_z: f32) -> bool {
        let Some(step_height) = actor.step_height.filter(|&h| h > 0.0) else {
            return false;
        };
        if actor.vel_z > 0.0 {
            return false;
        }

        let rise = top_z - (center.z - half_z);
        if !(0.0..=step_height).contains(&rise) {
            return false;
        }

        center.z = top_z + half_z;
        Self::land(actor);
        log::trace!("Stepped up {} onto {}", rise, top_z);
        true
    }

    /// Highest walkable ramp surface under the body's footprint
    fn ramp_surface(actor: &ActorState, center: &Vec3, half: &Vec3, world: &World) -> Option<f32> {
        world
            .iter()
            .filter(|(_, obstacle, _)| obstacle.is_walkable_ramp(actor.max_ramp_slope))
            .filter(|(_, obstacle, bounds)| {
                (center.x - obstacle.center.x).abs() <= bounds.half.x + half.x
                    && (center.y - obstacle.center.y).abs() <= bounds.half.y + half.y
            })
            .map(|(_, obstacle, _)| obstacle.surface_z(center.x, center.y))
            .max_by(|a, b| a.total_cmp(b))
    }

    fn land(actor: &mut ActorState) {
        actor.on_ground = true;
        if actor.vel_z < 0.0 {
            actor.vel_z = 0.0;
        }
    }
}

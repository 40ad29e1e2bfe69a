//! Actor kinematic state

use crate::core::config::ActorConfig;
use crate::foundation::math::Vec3;

/// Mutable record shared by the movement layer and the collision resolver
///
/// `pos` is the position of the *feet*: the footprint center at the bottom of
/// the body. Only vertical velocity is tracked; horizontal motion is applied
/// directly to `pos` by the movement layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ActorState {
    /// Feet position
    pub pos: Vec3,
    /// Vertical velocity (units / second)
    pub vel_z: f32,
    /// Heading in radians, 0 faces +X
    pub angle: f32,
    /// Footprint width and depth
    pub size: f32,
    /// Body height
    pub height: f32,
    /// Recomputed by every resolution pass
    pub on_ground: bool,
    /// Steepest walkable ramp
    pub max_ramp_slope: f32,
    /// Ledge height climbed without jumping
    pub step_height: Option<f32>,
    /// Time left in which a jump is allowed after leaving the ground
    pub coyote_timer: f32,
    /// Time left in which a buffered jump press is honored
    pub jump_buffer_timer: f32,
    /// How long the current jump has been held
    pub jump_hold_time: f32,
    /// Rising from a jump that can still be extended or cut
    pub jumping: bool,
    /// Jump input as of the previous frame, for edge detection
    pub jump_held: bool,
    /// Where [`reset`](Self::reset) puts the feet
    pub spawn: Vec3,
}

impl ActorState {
    /// Actor standing at `spawn` with the body described by `config`
    pub fn new(spawn: Vec3, config: &ActorConfig) -> Self {
        Self {
            pos: spawn,
            vel_z: 0.0,
            angle: 0.0,
            size: config.size,
            height: config.height,
            on_ground: false,
            max_ramp_slope: config.max_ramp_slope,
            step_height: config.step_height,
            coyote_timer: 0.0,
            jump_buffer_timer: 0.0,
            jump_hold_time: 0.0,
            jumping: false,
            jump_held: false,
            spawn,
        }
    }

    /// Return to the spawn point and clear all motion and jump state
    ///
    /// The heading is kept.
    pub fn reset(&mut self) {
        self.pos = self.spawn;
        self.vel_z = 0.0;
        self.on_ground = false;
        self.jumping = false;
        self.jump_held = false;
        self.jump_hold_time = 0.0;
        self.coyote_timer = 0.0;
        self.jump_buffer_timer = 0.0;
    }

    /// Geometric center of the body
    pub fn center(&self) -> Vec3 {
        Vec3::new(self.pos.x, self.pos.y, self.pos.z + self.height * 0.5)
    }

    /// Half extents of the body box
    pub fn half_extents(&self) -> Vec3 {
        Vec3::new(self.size * 0.5, self.size * 0.5, self.height * 0.5)
    }

    /// Height of the feet
    pub fn bottom_z(&self) -> f32 {
        self.pos.z
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_center_sits_half_height_above_feet() {
        let actor = ActorState::new(Vec3::new(1.0, 2.0, 10.0), &ActorConfig::default());

        assert_relative_eq!(actor.center(), Vec3::new(1.0, 2.0, 10.0 + actor.height * 0.5));
        assert_relative_eq!(actor.half_extents().x, actor.size * 0.5);
        assert_relative_eq!(actor.bottom_z(), 10.0);
    }

    #[test]
    fn test_reset_restores_spawn_and_clears_motion() {
        let mut actor = ActorState::new(Vec3::new(0.0, 0.0, 50.0), &ActorConfig::default());
        actor.pos = Vec3::new(300.0, -20.0, -500.0);
        actor.vel_z = -900.0;
        actor.angle = 1.0;
        actor.jumping = true;
        actor.jump_buffer_timer = 0.1;

        actor.reset();

        assert_relative_eq!(actor.pos, Vec3::new(0.0, 0.0, 50.0));
        assert_eq!(actor.vel_z, 0.0);
        assert!(!actor.jumping);
        assert_eq!(actor.jump_buffer_timer, 0.0);
        assert_relative_eq!(actor.angle, 1.0);
    }
}

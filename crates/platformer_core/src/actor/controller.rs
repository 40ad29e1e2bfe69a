//! Movement layer: input intents to motion
//!
//! Runs before collision resolution each frame. Turning and forward motion are
//! applied straight to the feet position; vertical motion goes through
//! `vel_z` and gravity. Jumping supports coyote time, an input buffer, a
//! variable-height hold and an early-release cut.

use super::{ActorResolver, ActorState, ContactFlags};
use crate::core::config::{ActorConfig, MovementConfig};
use crate::world::World;

/// Input for one frame, already combined from whatever devices are in use
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementIntent {
    /// Turn axis, positive turns counter-clockwise. Clamped to `[-1, 1]`.
    pub turn: f32,
    /// Move axis along the heading, positive is forward. Clamped to `[-1, 1]`.
    pub forward: f32,
    /// Jump button is down
    pub jump: bool,
}

impl MovementIntent {
    /// Intent with both axes clamped into range
    pub fn clamped(self) -> Self {
        Self {
            turn: self.turn.clamp(-1.0, 1.0),
            forward: self.forward.clamp(-1.0, 1.0),
            jump: self.jump,
        }
    }
}

/// Applies intents to an [`ActorState`] and resolves the result
#[derive(Debug, Clone)]
pub struct ActorController {
    movement: MovementConfig,
    resolver: ActorResolver,
}

impl ActorController {
    /// Create a controller from movement tuning and the actor's collision policy
    pub fn new(movement: MovementConfig, actor: ActorConfig) -> Self {
        Self {
            movement,
            resolver: ActorResolver::new(actor),
        }
    }

    /// Movement tuning in use
    pub fn movement(&self) -> &MovementConfig {
        &self.movement
    }

    /// The collision resolver run at the end of every step
    pub fn resolver(&self) -> &ActorResolver {
        &self.resolver
    }

    /// Advance the actor by `dt` seconds
    ///
    /// When the actor falls out of the level it is reset to its spawn point
    /// and the returned flags still carry [`ContactFlags::FELL_OUT`].
    pub fn step(
        &self,
        actor: &mut ActorState,
        intent: MovementIntent,
        world: &World,
        dt: f32,
    ) -> ContactFlags {
        let intent = intent.clamped();
        let jump_pressed = intent.jump && !actor.jump_held;

        if intent.turn != 0.0 {
            actor.angle += self.movement.turn_speed * dt * intent.turn;
        }
        if intent.forward != 0.0 {
            let distance = self.movement.speed * dt * intent.forward;
            actor.pos.x += actor.angle.cos() * distance;
            actor.pos.y += actor.angle.sin() * distance;
        }

        self.update_jump(actor, intent.jump, jump_pressed, dt);

        actor.vel_z += self.movement.gravity * dt;
        actor.pos.z += actor.vel_z * dt;

        let contacts = self.resolver.resolve(actor, world);
        if contacts.contains(ContactFlags::FELL_OUT) {
            log::info!("Actor fell out of the level, respawning at {:?}", actor.spawn);
            actor.reset();
        }

        contacts
    }

    fn update_jump(&self, actor: &mut ActorState, jump: bool, jump_pressed: bool, dt: f32) {
        if actor.on_ground {
            actor.coyote_timer = self.movement.coyote_time;
            actor.jumping = false;
            actor.jump_hold_time = 0.0;
        } else {
            actor.coyote_timer = (actor.coyote_timer - dt).max(0.0);
        }

        if actor.jump_buffer_timer > 0.0 {
            actor.jump_buffer_timer = (actor.jump_buffer_timer - dt).max(0.0);
        }
        if jump_pressed {
            actor.jump_buffer_timer = self.movement.jump_buffer_time;
        }

        if actor.jump_buffer_timer > 0.0 && (actor.on_ground || actor.coyote_timer > 0.0) {
            actor.vel_z = self.movement.jump_speed();
            actor.jumping = true;
            actor.jump_hold_time = 0.0;
            actor.coyote_timer = 0.0;
            actor.jump_buffer_timer = 0.0;
            log::trace!("Jump launched at {:?}", actor.pos);
        }

        if actor.jumping {
            if jump && actor.jump_hold_time < self.movement.jump_hold_max && actor.vel_z > 0.0 {
                actor.vel_z += self.movement.jump_hold_force * dt;
                actor.jump_hold_time += dt;
            } else if self.movement.jump_hold_max > 0.0 && !jump && actor.jump_held && actor.vel_z > 0.0 {
                actor.vel_z *= self.movement.jump_cut;
                actor.jumping = false;
            } else if actor.vel_z <= 0.0 {
                actor.jumping = false;
            }
        }

        actor.jump_held = jump;
    }
}

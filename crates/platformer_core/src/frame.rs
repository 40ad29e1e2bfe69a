//! Per-frame pipeline
//!
//! [`Simulation`] owns the world and the actor and runs the resolvers in the
//! only order that makes sense: the actor moves first, then the camera and the
//! shadows read its new pose.

use crate::actor::{ActorController, ActorState, ContactFlags, MovementIntent};
use crate::camera::{CameraPose, CameraResolver, ChaseCamera};
use crate::core::config::CoreConfig;
use crate::shadow::{PlatformShadow, ShadowContour, ShadowProjector};
use crate::world::{ObstacleHandle, World};

/// Everything the renderer needs after one step
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    /// What the actor touched this frame
    pub contacts: ContactFlags,
    /// Smoothed, de-occluded camera pose
    pub camera: CameraPose,
    /// Obstacles between the camera and its target, for alpha blending
    pub occluders: Vec<ObstacleHandle>,
    /// Actor shadow on each receiving surface, highest first
    pub actor_shadows: Vec<ShadowContour>,
    /// Shadows platforms cast on platforms below them
    pub platform_shadows: Vec<PlatformShadow>,
}

/// World, actor and resolvers stepped together once per rendered frame
#[derive(Debug, Clone)]
pub struct Simulation {
    config: CoreConfig,
    world: World,
    actor: ActorState,
    controller: ActorController,
    chase: ChaseCamera,
    camera: CameraResolver,
    shadows: ShadowProjector,
    frame_count: u64,
}

impl Simulation {
    /// Set up a simulation with the actor at the configured spawn point
    pub fn new(config: CoreConfig, world: World) -> Self {
        log::info!(
            "Starting simulation with {} obstacles, spawn at {:?}",
            world.len(),
            config.spawn_point
        );

        Self {
            actor: ActorState::new(config.spawn_point, &config.actor),
            controller: ActorController::new(config.movement, config.actor),
            chase: ChaseCamera::new(config.camera),
            camera: CameraResolver::new(config.camera),
            shadows: ShadowProjector::new(config.shadow),
            world,
            config,
            frame_count: 0,
        }
    }

    /// Configuration the simulation was built with
    pub fn config(&self) -> &CoreConfig {
        &self.config
    }

    /// The obstacle world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Edit the world between frames
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Current actor state
    pub fn actor(&self) -> &ActorState {
        &self.actor
    }

    /// Mutable actor state, e.g. for teleporting from an editor
    pub fn actor_mut(&mut self) -> &mut ActorState {
        &mut self.actor
    }

    /// Number of completed steps
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Put the actor back at its spawn point and snap the camera next frame
    pub fn respawn(&mut self) {
        self.actor.reset();
        self.camera.reset();
    }

    /// Advance everything by `dt` seconds
    pub fn step(&mut self, intent: MovementIntent, dt: f32) -> FrameOutput {
        let contacts = self.controller.step(&mut self.actor, intent, &self.world, dt);
        if contacts.contains(ContactFlags::FELL_OUT) {
            // Snap to the respawned actor next update
            self.camera.reset();
        }

        let desired = self.chase.desired_pose(&self.actor);
        let camera = self.camera.update(&self.world, &desired, dt);

        let actor_shadows = self.shadows.project(&self.world, self.actor.pos, self.actor.size);
        let platform_shadows = self.shadows.platform_shadows(&self.world);

        self.frame_count += 1;
        log::trace!(
            "Frame {}: actor at {:?}, contacts {:?}, {} occluders",
            self.frame_count,
            self.actor.pos,
            contacts,
            camera.occluders.len()
        );

        FrameOutput {
            contacts,
            camera: camera.pose,
            occluders: camera.occluders,
            actor_shadows,
            platform_shadows,
        }
    }
}

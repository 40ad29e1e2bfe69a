//! # Platformer Core
//!
//! Kinematic and visibility core of a third-person platformer: collision
//! resolution for a box-shaped actor against boxes and ramps, a chase camera
//! that keeps its line of sight clear, and contact shadows clipped to the
//! surfaces they fall on.
//!
//! ## Features
//!
//! - **Collision**: discrete per-frame push-out with step-up and ramp snapping
//! - **Camera**: vertical de-occlusion search with frame-rate independent smoothing
//! - **Shadows**: circle-on-rectangle contours with occluder holes, plus
//!   platform-on-platform shadows
//! - **Level schema**: serde mapping for editor level records
//!
//! Rendering, input capture and level file I/O are left to the caller.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use platformer_core::prelude::*;
//!
//! let mut world = World::new();
//! world.add_box(Vec3::new(0.0, 0.0, 0.0), Vec3::new(400.0, 400.0, 40.0));
//!
//! let mut sim = Simulation::new(CoreConfig::default(), world);
//! let frame = sim.step(MovementIntent { forward: 1.0, ..Default::default() }, 1.0 / 60.0);
//! println!("camera at {:?}", frame.camera.position);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

// Shared configuration
pub mod core;
pub mod config;

pub mod foundation;
pub mod geometry;
pub mod world;
pub mod actor;
pub mod camera;
pub mod shadow;
pub mod frame;

#[cfg(test)]
mod tests;

pub use frame::{FrameOutput, Simulation};

/// Common imports for core users
pub mod prelude {
    pub use crate::{
        Simulation, FrameOutput,
        config::{Config, ConfigError},
        core::config::{ActorConfig, CameraConfig, CoreConfig, MovementConfig, ShadowConfig},
        foundation::math::{Vec2, Vec3},
        geometry::Ray,
        world::{LevelDef, LevelError, Obstacle, ObstacleDef, ObstacleHandle, RampAxis, RampDirection, World},
        actor::{ActorController, ActorResolver, ActorState, ContactFlags, MovementIntent},
        camera::{CameraPose, CameraResolver, ChaseCamera},
        shadow::{PlatformShadow, ShadowContour, ShadowProjector},
    };
}

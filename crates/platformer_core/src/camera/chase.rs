//! Third-person chase pose

use super::CameraPose;
use crate::actor::ActorState;
use crate::core::config::CameraConfig;
use crate::foundation::math::Vec3;

/// Places the camera behind the actor, looking a little ahead of it
#[derive(Debug, Clone)]
pub struct ChaseCamera {
    config: CameraConfig,
}

impl ChaseCamera {
    /// Create a chase camera with the given follow distances
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }

    /// Where the camera would like to be, before de-occlusion
    pub fn desired_pose(&self, actor: &ActorState) -> CameraPose {
        let heading = Vec3::new(actor.angle.cos(), actor.angle.sin(), 0.0);
        let feet = actor.pos;

        let mut position = feet - heading * self.config.follow_distance;
        position.z = feet.z + self.config.follow_height;

        let mut target = feet + heading * self.config.look_ahead;
        target.z = feet.z + self.config.look_height;

        CameraPose { position, target }
    }
}

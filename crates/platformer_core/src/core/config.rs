//! # Unified Configuration System
//!
//! Every tunable of the actor, camera and shadow resolvers lives here as a
//! named field with a documented default. Resolvers take their section by
//! value in `new`, so a running frame never observes a config change.
//!
//! ## Configuration Categories
//!
//! - **Actor Config**: collision body and fall-out policy
//! - **Movement Config**: intent integration, jumping and gravity
//! - **Camera Config**: chase pose, de-occlusion and smoothing
//! - **Shadow Config**: contact shadow sizing and platform shadows
//!
//! All sections deserialize with `#[serde(default)]`, so a config file only
//! needs to name the values it overrides.

use serde::{Serialize, Deserialize};

use crate::config::{Config, ConfigError};
use crate::foundation::math::{constants::UNIT, Vec3};

/// # Actor Configuration
///
/// Collision body of the player actor and the fall-out floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActorConfig {
    /// Footprint width and depth (the body is a `size x size x height` box)
    pub size: f32,
    /// Body height measured up from the feet
    pub height: f32,
    /// Steepest ramp (rise over run) the actor walks on. Steeper ramps are solid.
    pub max_ramp_slope: f32,
    /// Ledge height the actor climbs without jumping. `None` disables step-up.
    pub step_height: Option<f32>,
    /// Feet height below which the actor is considered to have fallen out
    pub fall_limit: f32,
    /// How far above a ramp surface the feet may hover and still snap onto it
    pub ramp_snap_tolerance: f32,
}

impl Default for ActorConfig {
    fn default() -> Self {
        Self {
            size: UNIT,
            height: UNIT * 1.5,
            max_ramp_slope: f32::INFINITY,
            step_height: None,
            fall_limit: -100.0,
            ramp_snap_tolerance: 0.01,
        }
    }
}

/// # Movement Configuration
///
/// Converts per-frame input intents into heading, horizontal displacement and
/// vertical velocity before collision resolution runs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Forward speed (units / second)
    pub speed: f32,
    /// Turn rate (radians / second)
    pub turn_speed: f32,
    /// Vertical acceleration (negative pulls down)
    pub gravity: f32,
    /// Apex height of a tap jump
    pub jump_height: f32,
    /// Extra upward acceleration while jump is held
    pub jump_hold_force: f32,
    /// How long (seconds) holding jump keeps adding `jump_hold_force`
    pub jump_hold_max: f32,
    /// Multiplier applied to rising velocity when jump is released early
    pub jump_cut: f32,
    /// How long (seconds) a jump press is remembered before landing
    pub jump_buffer_time: f32,
    /// How long (seconds) after leaving a ledge a jump is still allowed
    pub coyote_time: f32,
}

impl MovementConfig {
    /// Launch velocity that reaches `jump_height` under `gravity`
    pub fn jump_speed(&self) -> f32 {
        (2.0 * self.gravity.abs() * self.jump_height).sqrt()
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 5.5 * UNIT,
            turn_speed: 2.6,
            gravity: -22.5 * UNIT,
            jump_height: 1.5 * UNIT,
            jump_hold_force: 0.0,
            jump_hold_max: 0.0,
            jump_cut: 1.0,
            jump_buffer_time: 0.12,
            coyote_time: 0.3,
        }
    }
}

/// # Camera Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Exponential smoothing rate (1 / seconds)
    pub lerp_rate: f32,
    /// Clearance kept above or below an occluder when shifting the eye
    pub obstruction_buffer: f32,
    /// Largest vertical shift the de-occlusion search may apply
    pub max_obstruction_shift: f32,
    /// Horizontal distance of the chase eye behind the actor
    pub follow_distance: f32,
    /// Height of the chase eye above the actor's feet
    pub follow_height: f32,
    /// Distance ahead of the actor along its heading that the camera looks at
    pub look_ahead: f32,
    /// Height of the look-at point above the actor's feet
    pub look_height: f32,
    /// Vertical field of view in radians, passed through to the renderer
    pub fov: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            lerp_rate: 8.0,
            obstruction_buffer: UNIT * 0.2,
            max_obstruction_shift: UNIT * 3.0,
            follow_distance: UNIT * 5.5,
            follow_height: UNIT * 3.0,
            look_ahead: UNIT,
            look_height: UNIT * 2.5,
            fov: std::f32::consts::FRAC_PI_3,
        }
    }
}

/// # Shadow Configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowConfig {
    /// Shadow diameter as a multiple of the actor footprint
    pub size_factor: f32,
    /// Smallest shadow scale once the actor is far above the surface
    pub min_scale: f32,
    /// Drop height over which the shadow shrinks from full size to `min_scale`
    pub attenuation_height: f32,
    /// How far above the feet a surface top may sit and still receive the shadow
    pub receive_tolerance: f32,
    /// Minimum height difference for an obstacle to cut a hole into a surface
    pub hole_tolerance: f32,
    /// Vertex count of the polygon approximating the shadow circle
    pub circle_segments: usize,
    /// Lift of actor shadow contours above the receiving surface
    pub surface_offset: f32,
    /// Lift of platform shadow rectangles above the receiving surface
    pub platform_offset: f32,
    /// Platforms further apart vertically than this cast no shadow on each other
    pub max_platform_drop: f32,
}

impl Default for ShadowConfig {
    fn default() -> Self {
        Self {
            size_factor: 1.5,
            min_scale: 0.35,
            attenuation_height: 320.0,
            receive_tolerance: 0.1,
            hole_tolerance: 0.01,
            circle_segments: 32,
            surface_offset: 0.1,
            platform_offset: 0.06,
            max_platform_drop: 320.0,
        }
    }
}

impl ShadowConfig {
    /// Shadow radius for an actor of `actor_size` hovering `height` above a surface
    pub fn radius_at(&self, actor_size: f32, height: f32) -> f32 {
        let scale = (1.0 - height.max(0.0) / self.attenuation_height).max(self.min_scale);
        actor_size * self.size_factor * scale * 0.5
    }
}

/// # Complete Core Configuration
///
/// Top-level configuration that encompasses all resolver sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Actor collision body
    pub actor: ActorConfig,
    /// Intent integration
    pub movement: MovementConfig,
    /// Chase camera and de-occlusion
    pub camera: CameraConfig,
    /// Contact shadows
    pub shadow: ShadowConfig,
    /// Where the actor (re)spawns, feet position
    pub spawn_point: Vec3,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            actor: ActorConfig::default(),
            movement: MovementConfig::default(),
            camera: CameraConfig::default(),
            shadow: ShadowConfig::default(),
            spawn_point: Vec3::new(0.0, 0.0, 4.0 * UNIT),
        }
    }
}

impl CoreConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: &str| Err(ConfigError::Invalid(msg.to_string()));

        if self.actor.size <= 0.0 || self.actor.height <= 0.0 {
            return invalid("actor size and height must be positive");
        }
        if self.actor.max_ramp_slope.is_nan() || self.actor.max_ramp_slope < 0.0 {
            return invalid("max ramp slope must be a non-negative number");
        }
        if self.actor.step_height.is_some_and(|h| h < 0.0) {
            return invalid("step height cannot be negative");
        }
        if self.camera.lerp_rate < 0.0
            || self.camera.obstruction_buffer < 0.0
            || self.camera.max_obstruction_shift < 0.0
        {
            return invalid("camera rates and buffers cannot be negative");
        }
        if self.shadow.circle_segments < 3 {
            return invalid("shadow circle needs at least 3 segments");
        }
        if self.shadow.attenuation_height <= 0.0 {
            return invalid("shadow attenuation height must be positive");
        }

        Ok(())
    }
}

impl Config for CoreConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config_is_valid() {
        assert!(CoreConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_non_positive_actor() {
        let mut config = CoreConfig::default();
        config.actor.height = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_degenerate_shadow_circle() {
        let mut config = CoreConfig::default();
        config.shadow.circle_segments = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let text = "[camera]\nlerp_rate = 4.0\n\n[actor]\nstep_height = 12.0\n";
        let config = CoreConfig::from_str_with_format(text, "core.toml").unwrap();

        assert_relative_eq!(config.camera.lerp_rate, 4.0);
        assert_eq!(config.actor.step_height, Some(12.0));
        assert_relative_eq!(config.camera.obstruction_buffer, UNIT * 0.2);
        assert_eq!(config.shadow.circle_segments, 32);
    }

    #[test]
    fn test_ron_config_parses() {
        let text = "(shadow: (min_scale: 0.5), spawn_point: (1.0, 2.0, 3.0))";
        let config = CoreConfig::from_str_with_format(text, "core.ron").unwrap();

        assert_relative_eq!(config.shadow.min_scale, 0.5);
        assert_relative_eq!(config.spawn_point, Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_unknown_extension_is_rejected() {
        let result = CoreConfig::from_str_with_format("", "core.yaml");
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_shadow_radius_attenuates_and_clamps() {
        let shadow = ShadowConfig::default();

        assert_relative_eq!(shadow.radius_at(40.0, 0.0), 30.0);
        assert_relative_eq!(shadow.radius_at(40.0, 160.0), 15.0);
        // Far drops bottom out at min_scale
        assert_relative_eq!(shadow.radius_at(40.0, 10_000.0), 30.0 * 0.35);
    }
}

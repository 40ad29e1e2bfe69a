//! Math utilities and types
//!
//! Provides the vector aliases and scalar helpers used by the collision,
//! camera and shadow code. All geometry is `f32`, Z is up.

pub use nalgebra::{Vector2, Vector3};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// 2 * Pi
    pub const TAU: f32 = 2.0 * PI;

    /// Reference world unit. Default sizes, speeds and camera distances are
    /// expressed as multiples of this.
    pub const UNIT: f32 = 40.0;
}

/// Math utility functions
pub mod utils {
    /// Linear interpolation
    pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
        a + (b - a) * t
    }

    /// Blend factor for an exponential-decay filter
    ///
    /// Returns `1 - exp(-rate * dt)`, so that repeatedly applying
    /// `state += (goal - state) * factor` converges at the same speed
    /// regardless of frame rate.
    pub fn exp_decay_factor(rate: f32, dt: f32) -> f32 {
        1.0 - (-rate * dt).exp()
    }

    /// Sign of `value`, treating zero as positive
    ///
    /// Used to pick a push-out direction when two centers coincide.
    pub fn sign_or_positive(value: f32) -> f32 {
        if value < 0.0 {
            -1.0
        } else {
            1.0
        }
    }
}

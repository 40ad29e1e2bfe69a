//! Camera de-occlusion and smoothing
//!
//! The renderer asks for a camera pose every frame. [`ChaseCamera`] proposes
//! where a third-person camera would like to be; [`CameraResolver`] then
//! checks the line of sight from the look-at target back to the eye, nudges
//! the eye vertically around whatever blocks it and smooths the result over
//! time.

mod occlusion;
mod resolver;
mod chase;

pub use occlusion::{occlusion, ClosestOccluder, Occlusion, SELF_OCCLUSION_PADDING};
pub use resolver::{CameraFrame, CameraPose, CameraResolver};
pub use chase::ChaseCamera;

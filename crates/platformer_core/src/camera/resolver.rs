//! Vertical de-occlusion search and temporal smoothing

use super::occlusion::occlusion;
use crate::core::config::CameraConfig;
use crate::foundation::math::{utils::exp_decay_factor, Vec3};
use crate::world::{ObstacleHandle, World};

/// Shifts smaller than this are not worth testing
const MIN_SHIFT: f32 = 1.0e-3;

/// Eye and look-at point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    /// Eye position
    pub position: Vec3,
    /// Look-at point
    pub target: Vec3,
}

/// What the renderer needs from the camera for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct CameraFrame {
    /// Smoothed pose to render from
    pub pose: CameraPose,
    /// Obstacles still between the smoothed eye and its target, for fading
    pub occluders: Vec<ObstacleHandle>,
}

/// Keeps a camera's line of sight clear and eases it between frames
#[derive(Debug, Clone)]
pub struct CameraResolver {
    config: CameraConfig,
    state: Option<CameraPose>,
}

impl CameraResolver {
    /// Create a resolver with no smoothing history
    pub fn new(config: CameraConfig) -> Self {
        Self { config, state: None }
    }

    /// Active configuration
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Pose produced by the last [`update`](Self::update)
    pub fn current(&self) -> Option<&CameraPose> {
        self.state.as_ref()
    }

    /// Forget the smoothing history; the next update snaps
    pub fn reset(&mut self) {
        self.state = None;
    }

    /// Eye position with fewer obstacles in the way, if one can be found
    ///
    /// Only the occluder nearest the target is considered. The eye is tried
    /// just above its top and just below its bottom, each shift clamped to
    /// `max_obstruction_shift`; shifts under 0.001 are skipped. A candidate
    /// replaces the current best when it has strictly fewer occluders, or as
    /// many with a smaller shift. The unshifted eye starts as the best with an
    /// unbounded shift, so the first candidate that is no worse replaces it
    /// and the result is never more occluded than the desired position.
    pub fn resolve_obstruction(&self, world: &World, desired: &CameraPose) -> Vec3 {
        let initial = occlusion(world, desired.position, desired.target);
        let Some(closest) = initial.closest else {
            return desired.position;
        };

        let buffer = self.config.obstruction_buffer;
        let candidates = [closest.bounds.max.z + buffer, closest.bounds.min.z - buffer];

        let mut best = desired.position;
        let mut best_count = initial.count();
        let mut best_shift = f32::INFINITY;

        for candidate_z in candidates {
            let delta = candidate_z - desired.position.z;
            if delta.abs() < MIN_SHIFT {
                continue;
            }

            let shift = delta.signum() * delta.abs().min(self.config.max_obstruction_shift);
            let position = Vec3::new(desired.position.x, desired.position.y, desired.position.z + shift);
            let count = occlusion(world, position, desired.target).count();

            if count < best_count || (count == best_count && shift.abs() < best_shift) {
                best = position;
                best_count = count;
                best_shift = shift.abs();
                if best_count == 0 {
                    break;
                }
            }
        }

        if best != desired.position {
            log::debug!(
                "Camera shifted {} to clear {:?} ({} -> {} occluders)",
                best.z - desired.position.z,
                closest.handle,
                initial.count(),
                best_count
            );
        }

        best
    }

    /// De-occlude `desired` and blend toward it
    ///
    /// The first update after construction or [`reset`](Self::reset) snaps
    /// straight to the resolved pose. Later updates move each coordinate by
    /// `1 - exp(-lerp_rate * dt)` of the remaining distance. The look-at
    /// target is smoothed but never shifted.
    pub fn update(&mut self, world: &World, desired: &CameraPose, dt: f32) -> CameraFrame {
        let resolved = CameraPose {
            position: self.resolve_obstruction(world, desired),
            target: desired.target,
        };

        let pose = match self.state {
            None => resolved,
            Some(previous) => {
                let t = exp_decay_factor(self.config.lerp_rate, dt);
                CameraPose {
                    position: previous.position.lerp(&resolved.position, t),
                    target: previous.target.lerp(&resolved.target, t),
                }
            }
        };
        self.state = Some(pose);

        CameraFrame {
            pose,
            occluders: occlusion(world, pose.position, pose.target).occluders,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pose(position: Vec3, target: Vec3) -> CameraPose {
        CameraPose { position, target }
    }

    /// Low wall close to the eye, 30 high
    fn low_wall() -> World {
        let mut world = World::new();
        world.add_box(Vec3::new(150.0, 0.0, 0.0), Vec3::new(10.0, 200.0, 30.0));
        world
    }

    #[test]
    fn test_clear_view_is_untouched() {
        let resolver = CameraResolver::new(CameraConfig::default());
        let desired = pose(Vec3::new(200.0, 0.0, 50.0), Vec3::new(0.0, 0.0, 20.0));

        assert_eq!(resolver.resolve_obstruction(&low_wall(), &desired), desired.position);
    }

    #[test]
    fn test_lifts_over_low_wall() {
        let resolver = CameraResolver::new(CameraConfig::default());
        let world = low_wall();
        let desired = pose(Vec3::new(200.0, 0.0, 25.0), Vec3::new(0.0, 0.0, 20.0));
        assert_eq!(occlusion(&world, desired.position, desired.target).count(), 1);

        let resolved = resolver.resolve_obstruction(&world, &desired);

        // Wall top 30 plus the default 8 unit buffer
        assert_relative_eq!(resolved, Vec3::new(200.0, 0.0, 38.0));
        assert!(occlusion(&world, resolved, desired.target).is_clear());
    }

    /// Wall next to the target, 30 high
    fn near_wall() -> World {
        let mut world = World::new();
        world.add_box(Vec3::new(50.0, 0.0, 0.0), Vec3::new(10.0, 200.0, 30.0));
        world
    }

    #[test]
    fn test_equal_count_shift_replaces_unshifted_eye() {
        let config = CameraConfig { max_obstruction_shift: 5.0, ..CameraConfig::default() };
        let resolver = CameraResolver::new(config);
        let world = low_wall();
        let desired = pose(Vec3::new(200.0, 0.0, 25.0), Vec3::new(0.0, 0.0, 20.0));

        let resolved = resolver.resolve_obstruction(&world, &desired);

        // Both clamped shifts still see the wall; the upward one is tried first
        assert_relative_eq!(resolved, Vec3::new(200.0, 0.0, 30.0));
        assert_eq!(occlusion(&world, resolved, desired.target).count(), 1);
    }

    #[test]
    fn test_keeps_original_when_both_shifts_are_worse() {
        let mut world = low_wall();
        // Each catches only one of the shifted sight lines
        world.add_box(Vec3::new(190.0, 0.0, 28.0), Vec3::new(10.0, 200.0, 4.0));
        world.add_box(Vec3::new(190.0, 0.0, 18.0), Vec3::new(10.0, 200.0, 4.0));
        let config = CameraConfig { max_obstruction_shift: 5.0, ..CameraConfig::default() };
        let resolver = CameraResolver::new(config);
        let desired = pose(Vec3::new(200.0, 0.0, 25.0), Vec3::new(0.0, 0.0, 20.0));
        assert_eq!(occlusion(&world, desired.position, desired.target).count(), 1);

        assert_eq!(resolver.resolve_obstruction(&world, &desired), desired.position);
    }

    #[test]
    fn test_equal_counts_prefer_smaller_shift() {
        let mut world = near_wall();
        // Tall wall by the eye that no candidate can clear
        world.add_box(Vec3::new(180.0, 0.0, -100.0), Vec3::new(10.0, 200.0, 200.0));
        let resolver = CameraResolver::new(CameraConfig { obstruction_buffer: 8.0, ..CameraConfig::default() });
        let desired = pose(Vec3::new(200.0, 0.0, 12.0), Vec3::new(0.0, 0.0, 20.0));
        assert_eq!(occlusion(&world, desired.position, desired.target).count(), 2);

        // Up to 38 is a shift of 26, down to -8 only 20
        let resolved = resolver.resolve_obstruction(&world, &desired);

        assert_relative_eq!(resolved, Vec3::new(200.0, 0.0, -8.0));
        assert_eq!(occlusion(&world, resolved, desired.target).count(), 2);
    }

    #[test]
    fn test_negligible_shift_is_not_a_candidate() {
        let world = near_wall();
        let resolver = CameraResolver::new(CameraConfig { obstruction_buffer: 8.0, ..CameraConfig::default() });
        // Already sitting at wall top plus buffer, yet still occluded
        let desired = pose(Vec3::new(200.0, 0.0, 38.0), Vec3::new(0.0, 0.0, 20.0));
        assert_eq!(occlusion(&world, desired.position, desired.target).count(), 1);

        let resolved = resolver.resolve_obstruction(&world, &desired);

        // A zero shift would have won the tie; only the downward one is tried
        assert_relative_eq!(resolved, Vec3::new(200.0, 0.0, -8.0));
    }

    #[test]
    fn test_shift_is_bounded_and_never_worse() {
        let mut world = low_wall();
        world.add_box(Vec3::new(80.0, 0.0, 60.0), Vec3::new(10.0, 200.0, 40.0));
        world.add_box(Vec3::new(120.0, 40.0, -20.0), Vec3::new(20.0, 20.0, 200.0));
        let target = Vec3::new(0.0, 0.0, 20.0);

        for max_shift in [5.0, 40.0, 120.0] {
            let resolver = CameraResolver::new(CameraConfig {
                max_obstruction_shift: max_shift,
                ..CameraConfig::default()
            });
            for step in 0..24 {
                let desired = pose(Vec3::new(200.0, 30.0, -40.0 + step as f32 * 10.0), target);
                let resolved = resolver.resolve_obstruction(&world, &desired);

                assert!((resolved.z - desired.position.z).abs() <= max_shift + 1e-4);
                assert_relative_eq!(resolved.xy(), desired.position.xy());
                assert!(
                    occlusion(&world, resolved, target).count()
                        <= occlusion(&world, desired.position, target).count()
                );
            }
        }
    }

    #[test]
    fn test_first_update_snaps_then_smooths() {
        let world = World::new();
        let mut resolver = CameraResolver::new(CameraConfig::default());
        let start = pose(Vec3::new(0.0, 0.0, 100.0), Vec3::zeros());
        let goal = pose(Vec3::new(100.0, 0.0, 100.0), Vec3::new(10.0, 0.0, 0.0));

        assert_eq!(resolver.update(&world, &start, 0.016).pose, start);

        let dt = 0.1;
        let frame = resolver.update(&world, &goal, dt);
        let t = exp_decay_factor(8.0, dt);
        assert_relative_eq!(frame.pose.position.x, 100.0 * t, epsilon = 1e-4);
        assert_relative_eq!(frame.pose.target.x, 10.0 * t, epsilon = 1e-4);
        assert_eq!(resolver.current(), Some(&frame.pose));

        resolver.reset();
        assert_eq!(resolver.update(&world, &goal, dt).pose, goal);
    }

    #[test]
    fn test_frame_reports_occluders_of_smoothed_pose() {
        let world = low_wall();
        let mut resolver = CameraResolver::new(CameraConfig::default());

        let desired = pose(Vec3::new(200.0, 0.0, 20.0), Vec3::new(0.0, 0.0, 20.0));

        // Settle with nothing in the way, then the wall appears
        resolver.update(&World::new(), &desired, 0.016);
        let frame = resolver.update(&world, &desired, 1.0e-4);

        // The resolved eye is lifted, but the smoothed one lags behind it
        assert!(frame.pose.position.z < 21.0);
        assert_eq!(frame.occluders.len(), 1);
    }
}

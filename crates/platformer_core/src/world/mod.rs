//! Obstacle world
//!
//! Owns every static obstacle in the level and answers the per-frame
//! queries the resolvers need. Queries are brute-force scans over all
//! obstacles; levels are small enough that no broad phase is needed.
//!
//! # Identity
//!
//! Obstacles are stored in a generational arena. [`ObstacleHandle`]s stay
//! valid across frames and stop resolving once their obstacle is removed, so
//! an editor selection can never silently point at a different obstacle.
//!
//! # Mutation
//!
//! Adding or removing obstacles is only allowed between frames. All queries
//! borrow the world immutably, which the borrow checker enforces for the
//! duration of a frame.

mod obstacle;
mod queries;
pub mod level;

pub use obstacle::{Bounds, Color, Obstacle, ObstacleShape, RampAxis, RampDirection};
pub use queries::{PickHit, ShadowSurface};
pub use level::{LevelDef, LevelError, ObstacleDef, ObstacleKind};
pub use crate::foundation::collections::ObstacleHandle;

use crate::foundation::collections::HandleMap;
use crate::foundation::math::Vec3;

/// The set of static obstacles in a level
#[derive(Debug, Clone, Default)]
pub struct World {
    obstacles: HandleMap<Obstacle>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an obstacle and return its handle
    pub fn add(&mut self, obstacle: Obstacle) -> ObstacleHandle {
        let handle = self.obstacles.insert(obstacle);
        log::debug!(
            "Added {:?} obstacle {:?} at {:?} size {:?}",
            obstacle.shape,
            handle,
            obstacle.center,
            obstacle.size
        );
        handle
    }

    /// Add a box whose bottom face is centered on `base`
    pub fn add_box(&mut self, base: Vec3, size: Vec3) -> ObstacleHandle {
        self.add(Obstacle::new_box(base, size))
    }

    /// Add a ramp whose bottom face is centered on `base`
    pub fn add_ramp(
        &mut self,
        base: Vec3,
        size: Vec3,
        axis: RampAxis,
        direction: RampDirection,
    ) -> ObstacleHandle {
        self.add(Obstacle::new_ramp(base, size, axis, direction))
    }

    /// Remove an obstacle
    ///
    /// Removing a handle that no longer resolves is a no-op and returns `None`.
    pub fn remove(&mut self, handle: ObstacleHandle) -> Option<Obstacle> {
        let removed = self.obstacles.remove(handle);
        match removed {
            Some(_) => log::debug!("Removed obstacle {:?}", handle),
            None => log::debug!("Ignoring removal of stale obstacle handle {:?}", handle),
        }
        removed
    }

    /// Remove every obstacle
    pub fn clear(&mut self) {
        self.obstacles.clear();
    }

    /// Look up an obstacle
    pub fn get(&self, handle: ObstacleHandle) -> Option<&Obstacle> {
        self.obstacles.get(handle)
    }

    /// Look up an obstacle for editing
    pub fn get_mut(&mut self, handle: ObstacleHandle) -> Option<&mut Obstacle> {
        self.obstacles.get_mut(handle)
    }

    /// Whether `handle` still refers to an obstacle
    pub fn contains(&self, handle: ObstacleHandle) -> bool {
        self.obstacles.contains_key(handle)
    }

    /// Number of obstacles
    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    /// Whether the world has no obstacles
    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Iterate over every obstacle together with its freshly computed bounds
    pub fn iter(&self) -> impl Iterator<Item = (ObstacleHandle, &Obstacle, Bounds)> + '_ {
        self.obstacles
            .iter()
            .map(|(handle, obstacle)| (handle, obstacle, obstacle.bounds()))
    }
}

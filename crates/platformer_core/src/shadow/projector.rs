//! Actor contact shadow with occluder holes

use crate::core::config::ShadowConfig;
use crate::foundation::math::{Vec2, Vec3};
use crate::geometry::{circle_intersects_rect, clip_circle_to_rect_with, signed_area, Polygon};
use crate::world::{ObstacleHandle, ShadowSurface, World};

/// Shadow outline on one receiving surface
///
/// All points are relative to `origin`. Holes are wound opposite to `outer`,
/// so an even-odd or non-zero tessellator cuts them out.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowContour {
    /// The receiving obstacle
    pub surface: ObstacleHandle,
    /// Surface center, lifted slightly above the receiving top
    pub origin: Vec3,
    /// Shadow circle clipped to the surface footprint
    pub outer: Polygon,
    /// Parts of the circle covered by obstacles above the surface
    pub holes: Vec<Polygon>,
}

/// Computes contact shadows from a [`World`]
#[derive(Debug, Clone)]
pub struct ShadowProjector {
    config: ShadowConfig,
}

impl ShadowProjector {
    /// Create a projector with the given shadow sizing
    pub fn new(config: ShadowConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ShadowConfig {
        &self.config
    }

    /// Shadow contours for an actor standing at `feet`
    ///
    /// One contour per receiving surface, highest surface first. Surfaces
    /// where less than a triangle of the circle survives are skipped.
    pub fn project(&self, world: &World, feet: Vec3, actor_size: f32) -> Vec<ShadowContour> {
        world
            .shadow_surfaces(feet.xy(), feet.z, actor_size, &self.config)
            .into_iter()
            .filter_map(|surface| self.contour(world, feet, &surface))
            .collect()
    }

    fn contour(&self, world: &World, feet: Vec3, surface: &ShadowSurface) -> Option<ShadowContour> {
        let obstacle = world.get(surface.handle)?;
        let surface_center = obstacle.footprint_center();
        let local = feet.xy() - surface_center;

        let outer = self.clip(local, surface.radius, obstacle.half_footprint());
        if outer.len() < 3 {
            return None;
        }

        let outer_area = signed_area(&outer);
        let holes = world
            .iter()
            .filter(|(handle, _, bounds)| {
                *handle != surface.handle
                    && bounds.top_z > surface.top_z + self.config.hole_tolerance
                    && bounds.top_z <= feet.z + self.config.receive_tolerance
            })
            .filter(|(_, other, bounds)| {
                circle_intersects_rect(feet.xy(), surface.radius, other.footprint_center(), bounds.half.xy())
            })
            .filter_map(|(_, other, bounds)| {
                let offset = other.footprint_center() - surface_center;
                let hole = self.clip(local - offset, surface.radius, bounds.half.xy());
                (hole.len() >= 3).then(|| {
                    let mut hole: Polygon = hole.into_iter().map(|point| point + offset).collect();
                    if outer_area * signed_area(&hole) > 0.0 {
                        hole.reverse();
                    }
                    hole
                })
            })
            .collect();

        Some(ShadowContour {
            surface: surface.handle,
            origin: Vec3::new(
                surface_center.x,
                surface_center.y,
                surface.top_z + self.config.surface_offset,
            ),
            outer,
            holes,
        })
    }

    fn clip(&self, center: Vec2, radius: f32, half: Vec2) -> Polygon {
        clip_circle_to_rect_with(center, radius, half, self.config.circle_segments)
    }
}

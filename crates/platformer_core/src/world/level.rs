//! Level schema mapping
//!
//! Mirrors the obstacle records written by the level editor. Positions in
//! the schema are footprint centers at the *bottom* face; the core stores
//! geometric centers, so conversion adds or subtracts half the height.
//! Reading and writing level files is left to the caller; this module only
//! owns the serde shape and the lossless conversion.

use serde::{Serialize, Deserialize};
use thiserror::Error;

use super::{Color, Obstacle, ObstacleShape, RampAxis, RampDirection, World};
use crate::foundation::math::{constants::UNIT, Vec3};

/// Schema `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObstacleKind {
    /// Solid box (default when `type` is missing)
    #[default]
    Box,
    /// Walkable ramp
    Ramp,
}

fn default_footprint() -> f32 {
    UNIT
}

fn default_height() -> f32 {
    UNIT * 0.5
}

/// One obstacle record as stored in a level file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleDef {
    /// Footprint center X
    #[serde(default)]
    pub x: f32,
    /// Footprint center Y
    #[serde(default)]
    pub y: f32,
    /// Bottom face Z
    #[serde(default)]
    pub z: f32,
    /// Width (X extent)
    #[serde(default = "default_footprint")]
    pub w: f32,
    /// Depth (Y extent)
    #[serde(default = "default_footprint")]
    pub d: f32,
    /// Height (Z extent)
    #[serde(default = "default_height")]
    pub h: f32,
    /// Cosmetic color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Box or ramp
    #[serde(rename = "type", default)]
    pub kind: ObstacleKind,
    /// Ramp slope axis, `x` when missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub axis: Option<RampAxis>,
    /// Ramp direction, `1` when missing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<i32>,
}

/// A whole level: just its obstacles
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelDef {
    /// Obstacle records in editor order
    #[serde(default)]
    pub platforms: Vec<ObstacleDef>,
}

/// Why an obstacle record was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LevelError {
    /// Width, depth or height is zero or negative
    #[error("size must be positive, got {w} x {d} x {h}")]
    NonPositiveSize {
        /// Width
        w: f32,
        /// Depth
        d: f32,
        /// Height
        h: f32,
    },

    /// `dir` is something other than 1 or -1
    #[error("ramp direction must be 1 or -1, got {0}")]
    InvalidDirection(i32),

    /// A record inside a level failed
    #[error("platform {index}: {source}")]
    Platform {
        /// Position of the record in the level
        index: usize,
        /// What was wrong with it
        #[source]
        source: Box<LevelError>,
    },
}

impl TryFrom<&ObstacleDef> for Obstacle {
    type Error = LevelError;

    fn try_from(def: &ObstacleDef) -> Result<Self, Self::Error> {
        if def.w <= 0.0 || def.d <= 0.0 || def.h <= 0.0 {
            return Err(LevelError::NonPositiveSize { w: def.w, d: def.d, h: def.h });
        }

        let base = Vec3::new(def.x, def.y, def.z);
        let size = Vec3::new(def.w, def.d, def.h);
        let mut obstacle = match def.kind {
            ObstacleKind::Box => Obstacle::new_box(base, size),
            ObstacleKind::Ramp => {
                let direction = match def.dir.unwrap_or(1) {
                    1 => RampDirection::Positive,
                    -1 => RampDirection::Negative,
                    other => return Err(LevelError::InvalidDirection(other)),
                };
                Obstacle::new_ramp(base, size, def.axis.unwrap_or_default(), direction)
            }
        };
        obstacle.color = def.color;

        Ok(obstacle)
    }
}

impl From<&Obstacle> for ObstacleDef {
    fn from(obstacle: &Obstacle) -> Self {
        let base = obstacle.base();
        let (kind, axis, dir) = match obstacle.shape {
            ObstacleShape::Box => (ObstacleKind::Box, None, None),
            ObstacleShape::Ramp { axis, direction } => {
                (ObstacleKind::Ramp, Some(axis), Some(direction.sign()))
            }
        };

        Self {
            x: base.x,
            y: base.y,
            z: base.z,
            w: obstacle.size.x,
            d: obstacle.size.y,
            h: obstacle.size.z,
            color: obstacle.color,
            kind,
            axis,
            dir,
        }
    }
}

impl World {
    /// Build a world from a level, rejecting the first malformed record
    pub fn from_level(level: &LevelDef) -> Result<Self, LevelError> {
        let mut world = Self::new();
        for (index, def) in level.platforms.iter().enumerate() {
            let obstacle = Obstacle::try_from(def).map_err(|source| LevelError::Platform {
                index,
                source: Box::new(source),
            })?;
            world.add(obstacle);
        }
        log::info!("Loaded level with {} obstacles", world.len());
        Ok(world)
    }

    /// Export every obstacle as a level record
    pub fn to_level(&self) -> LevelDef {
        LevelDef {
            platforms: self.iter().map(|(_, obstacle, _)| ObstacleDef::from(obstacle)).collect(),
        }
    }
}

//! Stateless geometry kernel
//!
//! Exact intersection tests and 2D polygon helpers shared by the world,
//! actor, camera and shadow modules.
//!
//! # Module Organization
//!
//! - [`ray`] - Rays and the slab ray/box test
//! - [`rect`] - Circle vs. axis-aligned rectangle overlap
//! - [`polygon`] - Sutherland–Hodgman clipping and signed area

pub mod ray;
pub mod rect;
pub mod polygon;

pub use ray::{Ray, ray_box_intersect, PARALLEL_EPSILON};
pub use rect::circle_intersects_rect;
pub use polygon::{
    Polygon,
    ClipEdge,
    circle_polygon,
    clip_polygon,
    clip_circle_to_rect,
    clip_circle_to_rect_with,
    signed_area,
    CIRCLE_SEGMENTS,
};

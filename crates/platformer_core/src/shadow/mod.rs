//! Contact shadows
//!
//! Two kinds of shadow are produced for the renderer:
//!
//! - **Actor shadows** ([`ShadowProjector::project`]): a circle under the
//!   actor, clipped to the top of each surface it falls on, with holes where a
//!   higher obstacle between the surface and the feet blocks it.
//! - **Platform shadows** ([`ShadowProjector::platform_shadows`]): the
//!   footprint overlap of every platform with every platform below it.
//!
//! Both are plain 2D outlines with a height; drawing them is up to the caller.

mod projector;
mod platform;

pub use projector::{ShadowContour, ShadowProjector};
pub use platform::PlatformShadow;

//! Handle-based collections
//!
//! Obstacles live in a generational arena so that an editor can hold on to a
//! handle across frames. Once an obstacle is removed its handle stops
//! resolving, even if the slot is later reused.

pub use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Generation-checked handle to an obstacle stored in a [`crate::world::World`]
    pub struct ObstacleHandle;
}

/// Handle-based map using slot map for stable references
pub type HandleMap<T> = SlotMap<ObstacleHandle, T>;

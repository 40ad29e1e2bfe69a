//! # Core Module
//!
//! Holds the unified configuration shared by every resolver in the crate.
//! Each resolver receives its own section by value at construction time.

pub mod config;

pub use config::{ActorConfig, CameraConfig, CoreConfig, MovementConfig, ShadowConfig};

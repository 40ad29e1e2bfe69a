//! Player actor: kinematic state, collision resolution and movement
//!
//! The actor is an axis-aligned box standing on its feet. Each frame the
//! [`ActorController`] turns input intents into motion and then hands the
//! state to the [`ActorResolver`], which pushes the body out of solid
//! obstacles, climbs small ledges and snaps onto walkable ramps.
//!
//! The resolver never fails; everything it noticed during a frame is reported
//! as [`ContactFlags`].

mod contacts;
mod state;
mod resolver;
mod controller;

pub use contacts::ContactFlags;
pub use state::ActorState;
pub use resolver::ActorResolver;
pub use controller::{ActorController, MovementIntent};

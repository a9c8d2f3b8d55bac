//! Steps a collection of [`rigid2d::Body`]s inside a rectangular world.
//!
//! Every tick each body is updated and then bounced off the world edges, in the
//! order the bodies were added. Bodies never interact with each other, but
//! [`World::collisions`] reports the ones that ended up on the same spot.

#![warn(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

mod config;
mod error;
mod world;

pub use config::WorldConfig;
pub use error::WorldError;
pub use world::{BodyId, StepReport, Tick, World};

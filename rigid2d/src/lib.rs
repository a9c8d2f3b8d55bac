//! Tiny point-mass kinematics kernel.
//!
//! A [`Body`] integrates linear forces (gravity and applied impulses) with a
//! unit time step and bounces off the walls of an axis-aligned world
//! rectangle. Collision between bodies is point coincidence only.

#![warn(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]

mod body;
mod collision;
mod error;
mod options;
mod shape;
mod vector;

pub use body::Body;
pub use collision::Edge;
pub use error::BodyError;
pub use options::BodyOptions;
pub use shape::{Polygon, Shape, ShapeDescriptor};
pub use vector::{Vector, VectorExt};

pub use arrayvec::ArrayVec;

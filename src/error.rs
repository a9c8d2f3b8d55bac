use rigid2d::BodyError;
use thiserror::Error;

use crate::BodyId;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorldError {
    #[error(transparent)]
    Body(#[from] BodyError),

    /// The world rectangle spans `[0, x] × [0, y]`, so both must be usable upper bounds.
    #[error("world bounds must be finite and non-negative, got ({x}, {y})")]
    InvalidBounds { x: f64, y: f64 },

    #[error("no body with id {0:?} in this world")]
    UnknownBody(BodyId),
}

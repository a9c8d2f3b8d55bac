use thiserror::Error;

/// Everything that can go wrong when building or reshaping a [`Body`](crate::Body).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BodyError {
    /// A construction option was out of its valid range.
    #[error("invalid body configuration: `{field}` {reason}")]
    InvalidConfiguration {
        /// Name of the offending option
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },

    /// A shape was neither a label nor a polygon.
    #[error("shape must be a label or a polygon with at least 3 vertices, got {vertices} vertices")]
    InvalidShape {
        /// Number of vertices that were supplied
        vertices: usize,
    },

    /// The damping factor divides by gravity, which has not been set yet.
    #[error("damping factor is undefined until gravity is set")]
    DivisionByZero,
}

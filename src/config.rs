use rigid2d::{BodyOptions, Vector};

/// Everything needed to build a [`World`](crate::World) in one go.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct WorldConfig {
    /// Lower right corner of the world, the upper left is the origin.
    pub bounds: Vector,
    /// Passed to [`World::set_gravity`](crate::World::set_gravity) if present.
    /// Bodies stay weightless if absent.
    pub gravity: Option<f64>,
    /// Spawned in order.
    pub bodies: Vec<BodyOptions>,
}

impl WorldConfig {
    pub const DEFAULT_BOUNDS: Vector = Vector::new(800., 600.);
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            bounds: Self::DEFAULT_BOUNDS,
            gravity: None,
            bodies: Vec::new(),
        }
    }
}

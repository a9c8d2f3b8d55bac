use arrayvec::ArrayVec;
use tracing::trace;

use crate::{Body, Vector, VectorExt as _};

/// A wall of the world rectangle `[0, max.x] × [0, max.y]`.
/// `y` grows downwards, so `Bottom` is the `y = max.y` wall.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

impl Body {
    /// Distance between the two body positions.
    pub fn dist(&self, other: &Body) -> f64 {
        (self.pos - other.pos).modulus()
    }

    /// Bodies only collide when their positions coincide exactly.
    /// Width, height and shape are not taken into account.
    pub fn collides(&self, other: &Body) -> bool {
        self.dist(other) == 0.
    }

    /// Keep the body inside `[0, constraints.x] × [0, constraints.y]`.
    /// Returns whether the body was outside before being clamped.
    /// A body that never had gravity set (and no configured `cf`) bounces undamped.
    pub fn edges(&mut self, constraints: Vector) -> bool {
        !self.resolve_edges(constraints).is_empty()
    }

    /// Like [`Body::edges`], but reports which walls were hit (at most one per axis).
    ///
    /// The position is clamped exactly onto the wall, so the next call
    /// won't see the body outside again. Velocity on a hit axis is
    /// reversed and scaled by `1 - cf / 10`. Without a damping factor
    /// snapshot the reflection is undamped.
    pub fn resolve_edges(&mut self, constraints: Vector) -> ArrayVec<Edge, 2> {
        let cf = self.cf().ok();
        let factor = |cf: Option<f64>| -1. + cf.unwrap_or(0.) / 10.;
        let mut hits = ArrayVec::new();

        if self.pos.x > constraints.x {
            self.pos.x = constraints.x;
            self.vel.x *= factor(cf.map(|cf| cf.x));
            hits.push(Edge::Right);
        } else if self.pos.x < 0. {
            self.pos.x = 0.;
            self.vel.x *= factor(cf.map(|cf| cf.x));
            hits.push(Edge::Left);
        }

        if self.pos.y > constraints.y {
            self.pos.y = constraints.y;
            self.vel.y *= factor(cf.map(|cf| cf.y));
            hits.push(Edge::Bottom);
        } else if self.pos.y < 0. {
            self.pos.y = 0.;
            self.vel.y *= factor(cf.map(|cf| cf.y));
            hits.push(Edge::Top);
        }

        if !hits.is_empty() {
            trace!(?hits, pos = ?self.pos, vel = ?self.vel, damped = cf.is_some());
        }
        hits
    }
}

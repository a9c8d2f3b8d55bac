use derive_more::derive::{Add, AddAssign};
use rand::Rng;
use rigid2d::{ArrayVec, Body, BodyOptions, Edge, Vector};
use tracing::{debug, debug_span, trace};

use crate::{WorldConfig, WorldError};

/// Number of steps a world has taken.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Add, AddAssign)]
pub struct Tick(pub u64);

/// Position of a body in its world's insertion order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BodyId(pub usize);

/// What happened during a single [`World::step`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StepReport {
    pub tick: Tick,
    /// Bodies that had left the world and were put back on its edge,
    /// together with the walls they hit.
    pub bounces: Vec<(BodyId, ArrayVec<Edge, 2>)>,
}

#[derive(Debug, Clone)]
pub struct World {
    bodies: Vec<Body>,
    bounds: Vector,
    /// Resolved gravity handed to every body, `None` if never set.
    gravity: Option<f64>,
    tick: Tick,
}

impl World {
    pub fn new(bounds: Vector) -> Result<Self, WorldError> {
        if !(bounds.is_finite() && bounds.x >= 0. && bounds.y >= 0.) {
            return Err(WorldError::InvalidBounds {
                x: bounds.x,
                y: bounds.y,
            });
        }
        debug!(?bounds, "new world");
        Ok(Self {
            bodies: Vec::new(),
            bounds,
            gravity: None,
            tick: Tick::default(),
        })
    }

    pub fn from_config(config: WorldConfig) -> Result<Self, WorldError> {
        let WorldConfig {
            bounds,
            gravity,
            bodies,
        } = config;
        let mut world = Self::new(bounds)?;
        if let Some(gravity) = gravity {
            world.set_gravity(Some(gravity));
        }
        for opts in bodies {
            world.spawn(opts)?;
        }
        Ok(world)
    }

    /// Appends a body. If the world has gravity, the body's gravity is set to it.
    pub fn add(&mut self, mut body: Body) -> BodyId {
        if let Some(gravity) = self.gravity {
            body.set_g(Some(gravity));
        }
        let id = BodyId(self.bodies.len());
        trace!(?id, pos = ?body.pos);
        self.bodies.push(body);
        id
    }

    pub fn spawn(&mut self, opts: BodyOptions) -> Result<BodyId, WorldError> {
        Ok(self.add(Body::new(opts)?))
    }

    /// Spawns `count` bodies built from `template`, each placed at a uniformly
    /// random position inside the world.
    pub fn scatter<R: Rng>(
        &mut self,
        rng: &mut R,
        count: usize,
        template: &BodyOptions,
    ) -> Result<Vec<BodyId>, WorldError> {
        let mut ids = Vec::with_capacity(count);
        for _ in 0..count {
            let mut body = Body::new(template.clone())?;
            body.pos = Vector::new(
                rng.random_range(0.0..=self.bounds.x),
                rng.random_range(0.0..=self.bounds.y),
            );
            ids.push(self.add(body));
        }
        debug!(count, total = self.bodies.len(), "scattered bodies");
        Ok(ids)
    }

    /// Sets the gravity of every body, including ones added later.
    /// Follows [`Body::set_g`]: `None`, zero and NaN mean `1`.
    pub fn set_gravity(&mut self, magnitude: Option<f64>) {
        let gravity = Body::resolve_gravity(magnitude);
        for body in &mut self.bodies {
            body.set_g(Some(gravity));
        }
        debug!(gravity);
        self.gravity = Some(gravity);
    }

    pub fn apply_force(&mut self, force: Vector) {
        for body in &mut self.bodies {
            body.apply_force(force);
        }
    }

    /// Advance every body by one tick, in insertion order.
    pub fn step(&mut self) -> StepReport {
        self.tick += Tick(1);
        let _span = debug_span!("step", tick = self.tick.0).entered();
        let mut bounces = Vec::new();
        for (index, body) in self.bodies.iter_mut().enumerate() {
            body.update();
            let hits = body.resolve_edges(self.bounds);
            if !hits.is_empty() {
                trace!(body = index, ?hits, "bounce");
                bounces.push((BodyId(index), hits));
            }
        }
        StepReport {
            tick: self.tick,
            bounces,
        }
    }

    /// All pairs of bodies sharing a position, lower id first.
    /// Checks every pair, there is no broad phase.
    pub fn collisions(&self) -> Vec<(BodyId, BodyId)> {
        let mut pairs = Vec::new();
        for (i, a) in self.bodies.iter().enumerate() {
            for (j, b) in self.bodies.iter().enumerate().skip(i + 1) {
                if a.collides(b) {
                    pairs.push((BodyId(i), BodyId(j)));
                }
            }
        }
        pairs
    }

    pub fn get(&self, id: BodyId) -> Option<&Body> {
        self.bodies.get(id.0)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut Body> {
        self.bodies.get_mut(id.0)
    }

    pub fn try_get(&self, id: BodyId) -> Result<&Body, WorldError> {
        self.get(id).ok_or(WorldError::UnknownBody(id))
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn bounds(&self) -> Vector {
        self.bounds
    }

    pub fn tick(&self) -> Tick {
        self.tick
    }

    /// Gravity handed to bodies, `None` until [`World::set_gravity`] is called.
    pub fn gravity(&self) -> Option<f64> {
        self.gravity
    }
}

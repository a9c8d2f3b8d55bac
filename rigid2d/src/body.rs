use tracing::debug;

use crate::{
    options::{finite_vector, positive},
    BodyError, BodyOptions, Shape, ShapeDescriptor, Vector, VectorExt as _,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vector,
    pub vel: Vector,
    /// Summation of all forces applied since last
    /// update. Will get reset to zero at next `update`
    pub acc: Vector,

    /// Damping factor used when bouncing off walls. A snapshot of
    /// `vel / (mass * gravity)` for the velocity the body was built with,
    /// completed once the first time gravity is set. Never recomputed when
    /// velocity, mass or gravity change later.
    cf: Option<Vector>,
    /// Velocity at construction, the numerator of `cf`.
    initial_vel: Vector,
    gravity: Option<f64>,
    shape: Shape,
    mass: f64,
    w: f64,
    h: f64,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            pos: Vector::ZERO,
            vel: Vector::ZERO,
            acc: Vector::ZERO,
            cf: None,
            initial_vel: Vector::ZERO,
            gravity: None,
            shape: Shape::default(),
            mass: BodyOptions::DEFAULT_MASS,
            w: BodyOptions::DEFAULT_SIZE,
            h: BodyOptions::DEFAULT_SIZE,
        }
    }
}

impl Body {
    pub fn new(opts: BodyOptions) -> Result<Self, BodyError> {
        let BodyOptions {
            pos,
            vel,
            acc,
            shape,
            mass,
            w,
            h,
            cf,
        } = opts;
        let shape = match shape {
            None => Shape::default(),
            Some(shape) => Shape::try_from(shape).map_err(|err| BodyError::InvalidConfiguration {
                field: "shape",
                reason: err.to_string(),
            })?,
        };
        let cf = match cf {
            None => None,
            Some(cf) => Some(finite_vector("cf", Some(cf))?),
        };
        let vel = finite_vector("vel", vel)?;
        Ok(Self {
            pos: finite_vector("pos", pos)?,
            vel,
            acc: finite_vector("acc", acc)?,
            cf,
            initial_vel: vel,
            gravity: None,
            shape,
            mass: positive("mass", mass, BodyOptions::DEFAULT_MASS)?,
            w: positive("w", w, BodyOptions::DEFAULT_SIZE)?,
            h: positive("h", h, BodyOptions::DEFAULT_SIZE)?,
        })
    }

    /// Adds `force` to the acceleration and returns the new acceleration.
    pub fn apply_force(&mut self, force: Vector) -> Vector {
        self.acc += force;
        self.acc
    }

    /// Sets the downward pull. `None`, zero and NaN all mean the default of `1`.
    ///
    /// The first call also completes the damping factor snapshot from the
    /// velocity the body was built with, unless one was configured explicitly.
    pub fn set_g(&mut self, magnitude: Option<f64>) -> f64 {
        let gravity = Self::resolve_gravity(magnitude);
        self.gravity = Some(gravity);
        debug!(gravity);
        if self.cf.is_none() {
            let cf = self.initial_vel / (self.mass * gravity);
            debug!(?cf, "damping factor snapshot");
            self.cf = Some(cf);
        }
        gravity
    }

    /// The gravity [`Body::set_g`] would set for `magnitude`.
    pub fn resolve_gravity(magnitude: Option<f64>) -> f64 {
        magnitude
            .filter(|magnitude| *magnitude != 0. && !magnitude.is_nan())
            .unwrap_or(1.)
    }

    /// Applies the body's own gravity as a force. The argument is ignored,
    /// the pull always comes from the last `set_g`.
    pub fn apply_g(&mut self, _magnitude: f64) -> Vector {
        self.apply_force(Vector::new(0., self.gravity()))
    }

    /// Advance one tick: gravity into acceleration, acceleration into
    /// velocity, velocity into position, then drop the acceleration.
    pub fn update(&mut self) -> &mut Self {
        self.apply_g(self.gravity());
        self.vel += self.acc;
        self.pos += self.vel;
        self.acc.set_mag(0.);
        self
    }

    /// Replace the shape. Fails without touching the current shape if a
    /// vertex list is too short to be a polygon.
    pub fn set_shape(&mut self, shape: impl Into<ShapeDescriptor>) -> Result<&Shape, BodyError> {
        self.shape = Shape::try_from(shape.into())?;
        Ok(&self.shape)
    }

    /// Effective gravity, `0` until [`Body::set_g`] is called.
    pub fn gravity(&self) -> f64 {
        self.gravity.unwrap_or(0.)
    }

    /// Whether [`Body::set_g`] has been called at least once.
    pub fn has_gravity(&self) -> bool {
        self.gravity.is_some()
    }

    /// The bounce damping factor. [`BodyError::DivisionByZero`] until the first
    /// [`Body::set_g`], unless [`BodyOptions::cf`] was configured.
    pub fn cf(&self) -> Result<Vector, BodyError> {
        self.cf.ok_or(BodyError::DivisionByZero)
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn w(&self) -> f64 {
        self.w
    }

    pub fn h(&self) -> f64 {
        self.h
    }
}

/// Two component `f64` vector. All body state is kept in this type.
pub type Vector = glam::DVec2;

/// The magnitude operations bodies need on top of glam's arithmetic.
pub trait VectorExt {
    /// Length of the vector.
    fn modulus(&self) -> f64;

    /// Rescale in place to the given length, keeping the direction.
    /// A zero (or non-finite) vector has no direction and becomes zero.
    fn set_mag(&mut self, value: f64) -> &mut Self;
}

impl VectorExt for Vector {
    fn modulus(&self) -> f64 {
        self.length()
    }

    fn set_mag(&mut self, value: f64) -> &mut Self {
        *self = self.normalize_or_zero() * value;
        self
    }
}

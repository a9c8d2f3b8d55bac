use crate::{BodyError, ShapeDescriptor, Vector};

/// Construction options for a [`Body`](crate::Body). Every field is optional
/// and defaulted on its own.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct BodyOptions {
    /// Defaults to the origin.
    pub pos: Option<Vector>,
    /// Defaults to rest.
    pub vel: Option<Vector>,
    /// Defaults to zero.
    pub acc: Option<Vector>,
    /// Defaults to the label `"RECT"`.
    pub shape: Option<ShapeDescriptor>,
    /// Defaults to [`BodyOptions::DEFAULT_MASS`]. Must be positive.
    pub mass: Option<f64>,
    /// Defaults to [`BodyOptions::DEFAULT_SIZE`]. Must be positive.
    pub w: Option<f64>,
    /// Defaults to [`BodyOptions::DEFAULT_SIZE`]. Must be positive.
    pub h: Option<f64>,
    /// Fixed damping factor for wall bounces. When absent it is derived
    /// from `vel` and `mass` as given here, divided by the gravity the
    /// first time gravity is set.
    pub cf: Option<Vector>,
}

impl BodyOptions {
    /// Mass of a body that did not configure one.
    pub const DEFAULT_MASS: f64 = 10.;
    /// Width and height of a body that did not configure them.
    pub const DEFAULT_SIZE: f64 = 100.;
}

pub(crate) fn finite_vector(field: &'static str, value: Option<Vector>) -> Result<Vector, BodyError> {
    let value = value.unwrap_or(Vector::ZERO);
    if !value.is_finite() {
        return Err(BodyError::InvalidConfiguration {
            field,
            reason: format!("must be finite, got {value}"),
        });
    }
    Ok(value)
}

pub(crate) fn positive(field: &'static str, value: Option<f64>, default: f64) -> Result<f64, BodyError> {
    let value = value.unwrap_or(default);
    if !(value.is_finite() && value > 0.) {
        return Err(BodyError::InvalidConfiguration {
            field,
            reason: format!("must be a positive number, got {value}"),
        });
    }
    Ok(value)
}

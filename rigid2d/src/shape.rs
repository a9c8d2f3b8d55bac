use crate::{BodyError, Vector};

/// Describes what a body looks like. Neither variant takes part in
/// collision detection, bodies collide as points.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A free-form tag like `"RECT"` or `"CIRCLE"`.
    Label(String),
    Polygon(Polygon),
}

impl Shape {
    /// The label bodies get when no shape was configured.
    pub const DEFAULT_LABEL: &'static str = "RECT";

    pub fn label(&self) -> Option<&str> {
        match self {
            Shape::Label(label) => Some(label),
            Shape::Polygon(_) => None,
        }
    }

    pub fn polygon(&self) -> Option<&Polygon> {
        match self {
            Shape::Label(_) => None,
            Shape::Polygon(polygon) => Some(polygon),
        }
    }
}

impl Default for Shape {
    fn default() -> Self {
        Shape::Label(Self::DEFAULT_LABEL.to_owned())
    }
}

/// An ordered list of at least [`Polygon::MIN_VERTICES`] vertices.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon(Vec<Vector>);

impl Polygon {
    pub const MIN_VERTICES: usize = 3;

    pub fn new(vertices: impl Into<Vec<Vector>>) -> Result<Self, BodyError> {
        let vertices = vertices.into();
        if vertices.len() < Self::MIN_VERTICES {
            return Err(BodyError::InvalidShape {
                vertices: vertices.len(),
            });
        }
        Ok(Self(vertices))
    }

    pub fn vertices(&self) -> &[Vector] {
        &self.0
    }
}

/// Unvalidated shape input, as accepted by [`Body::set_shape`](crate::Body::set_shape)
/// and by [`BodyOptions`](crate::BodyOptions).
///
/// With the `serde` feature this is either a string or a list of `[x, y]` pairs.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum ShapeDescriptor {
    Label(String),
    Vertices(Vec<Vector>),
}

impl TryFrom<ShapeDescriptor> for Shape {
    type Error = BodyError;

    fn try_from(descriptor: ShapeDescriptor) -> Result<Self, Self::Error> {
        match descriptor {
            ShapeDescriptor::Label(label) => Ok(Shape::Label(label)),
            ShapeDescriptor::Vertices(vertices) => Polygon::new(vertices).map(Shape::Polygon),
        }
    }
}

impl From<Shape> for ShapeDescriptor {
    fn from(shape: Shape) -> Self {
        match shape {
            Shape::Label(label) => ShapeDescriptor::Label(label),
            Shape::Polygon(Polygon(vertices)) => ShapeDescriptor::Vertices(vertices),
        }
    }
}

impl From<&str> for ShapeDescriptor {
    fn from(label: &str) -> Self {
        ShapeDescriptor::Label(label.to_owned())
    }
}

impl From<String> for ShapeDescriptor {
    fn from(label: String) -> Self {
        ShapeDescriptor::Label(label)
    }
}

impl From<Vec<Vector>> for ShapeDescriptor {
    fn from(vertices: Vec<Vector>) -> Self {
        ShapeDescriptor::Vertices(vertices)
    }
}

impl From<&[Vector]> for ShapeDescriptor {
    fn from(vertices: &[Vector]) -> Self {
        ShapeDescriptor::Vertices(vertices.to_vec())
    }
}

impl<const N: usize> From<[Vector; N]> for ShapeDescriptor {
    fn from(vertices: [Vector; N]) -> Self {
        ShapeDescriptor::Vertices(vertices.into())
    }
}

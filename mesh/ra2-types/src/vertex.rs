//! Vertex type with position and normal.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A vertex in 3D space with a per-vertex normal.
///
/// The position is stored as a `Point3<f64>` for high precision; narrowing
/// to `f32` is the serializer's concern. The normal is a plain attribute of
/// the vertex: it is carried along unchanged and never recomputed or
/// normalized by this crate.
///
/// # Example
///
/// ```
/// use ra2_types::{Point3, Vector3, Vertex};
///
/// let v = Vertex::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(0.0, 0.0, 1.0));
/// assert_eq!(v.position.x, 1.0);
/// assert_eq!(v.normal.z, 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,

    /// Per-vertex normal. Not required to be unit length.
    pub normal: Vector3<f64>,
}

impl Vertex {
    /// Create a new vertex from a position and a normal.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { position, normal }
    }

    /// Create a vertex from raw coordinates, with a zero normal.
    ///
    /// # Example
    ///
    /// ```
    /// use ra2_types::Vertex;
    ///
    /// let v = Vertex::from_coords(1.0, 2.0, 3.0);
    /// assert_eq!(v.position.y, 2.0);
    /// assert_eq!(v.normal.norm(), 0.0);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self {
            position: Point3::new(x, y, z),
            normal: Vector3::zeros(),
        }
    }

    /// Replace the normal, consuming and returning the vertex.
    ///
    /// # Example
    ///
    /// ```
    /// use ra2_types::{Vector3, Vertex};
    ///
    /// let v = Vertex::from_coords(0.0, 0.0, 0.0).with_normal(Vector3::new(0.0, 0.0, 1.0));
    /// assert_eq!(v.normal.z, 1.0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn with_normal(mut self, normal: Vector3<f64>) -> Self {
        self.normal = normal;
        self
    }
}

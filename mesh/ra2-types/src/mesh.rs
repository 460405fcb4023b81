//! Indexed polygon mesh.

use crate::{Polygon, Vertex};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An indexed polygon mesh.
///
/// Stores vertices and faces separately, with faces referencing vertices
/// by index. Unlike a pure triangle mesh, faces may be triangles or quads;
/// quads are fan-triangulated lazily by consumers via
/// [`Polygon::triangles`].
///
/// # Invariant
///
/// Every index referenced by a polygon must be a valid index into
/// `vertices`. The mesh is caller-constructed and this crate does not
/// re-validate indices on access.
///
/// # Example
///
/// ```
/// use ra2_types::{PolygonMesh, Polygon, Vertex};
///
/// let mut mesh = PolygonMesh::new();
/// mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(1.0, 1.0, 0.0));
/// mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
/// mesh.polygons.push(Polygon::Quad([0, 1, 2, 3]));
///
/// assert_eq!(mesh.polygon_count(), 1);
/// assert_eq!(mesh.triangle_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolygonMesh {
    /// Vertex data.
    pub vertices: Vec<Vertex>,

    /// Faces as indices into the vertex array.
    pub polygons: Vec<Polygon>,
}

impl PolygonMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            polygons: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated capacity.
    ///
    /// # Arguments
    ///
    /// * `vertex_count` - Expected number of vertices
    /// * `polygon_count` - Expected number of faces
    #[inline]
    #[must_use]
    pub fn with_capacity(vertex_count: usize, polygon_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            polygons: Vec::with_capacity(polygon_count),
        }
    }

    /// Create a mesh from vertices and faces.
    ///
    /// # Example
    ///
    /// ```
    /// use ra2_types::{PolygonMesh, Polygon, Vertex};
    ///
    /// let vertices = vec![
    ///     Vertex::from_coords(0.0, 0.0, 0.0),
    ///     Vertex::from_coords(1.0, 0.0, 0.0),
    ///     Vertex::from_coords(0.0, 1.0, 0.0),
    /// ];
    /// let mesh = PolygonMesh::from_parts(vertices, vec![Polygon::Triangle([0, 1, 2])]);
    /// assert_eq!(mesh.vertex_count(), 3);
    /// ```
    #[inline]
    #[must_use]
    pub const fn from_parts(vertices: Vec<Vertex>, polygons: Vec<Polygon>) -> Self {
        Self { vertices, polygons }
    }

    /// Get the number of vertices.
    #[inline]
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of faces.
    #[inline]
    #[must_use]
    pub fn polygon_count(&self) -> usize {
        self.polygons.len()
    }

    /// Get the number of triangles the mesh will expand to.
    ///
    /// Each triangle face counts once, each quad twice.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.polygons.iter().map(Polygon::triangle_count).sum()
    }

    /// Check if the mesh has no vertices or no faces.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.polygons.is_empty()
    }
}

//! Polygon faces and fan triangulation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygonal face referencing vertices by index.
///
/// Only triangles and quads are supported; higher-arity polygons have no
/// representation here and must be triangulated by the producer.
///
/// # Winding Order
///
/// Faces use **counter-clockwise (CCW) winding** when viewed from outside,
/// so normals point outward by the right-hand rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Polygon {
    /// A triangle `[a, b, c]`.
    Triangle([u32; 3]),
    /// A quad `[a, b, c, d]`, split into triangles along the a-c diagonal.
    Quad([u32; 4]),
}

impl Polygon {
    /// Get the number of vertices referenced by this face (3 or 4).
    ///
    /// # Example
    ///
    /// ```
    /// use ra2_types::Polygon;
    ///
    /// assert_eq!(Polygon::Triangle([0, 1, 2]).vertex_count(), 3);
    /// assert_eq!(Polygon::Quad([0, 1, 2, 3]).vertex_count(), 4);
    /// ```
    #[inline]
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        match self {
            Self::Triangle(_) => 3,
            Self::Quad(_) => 4,
        }
    }

    /// Get the number of triangles this face yields (1 or 2).
    #[inline]
    #[must_use]
    pub const fn triangle_count(&self) -> usize {
        match self {
            Self::Triangle(_) => 1,
            Self::Quad(_) => 2,
        }
    }

    /// Get the vertex indices as a slice.
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        match self {
            Self::Triangle(idx) => idx,
            Self::Quad(idx) => idx,
        }
    }

    /// Iterate over this face as fan triangles.
    ///
    /// A triangle yields itself. A quad `[a, b, c, d]` yields `[a, b, c]`
    /// followed by `[a, c, d]`, the two triangles sharing the a-c diagonal.
    /// Iteration order is significant: consumers rely on the second quad
    /// triangle immediately following the first.
    ///
    /// # Example
    ///
    /// ```
    /// use ra2_types::Polygon;
    ///
    /// let tris: Vec<[u32; 3]> = Polygon::Quad([0, 1, 2, 3]).triangles().collect();
    /// assert_eq!(tris, vec![[0, 1, 2], [0, 2, 3]]);
    /// ```
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> {
        let (first, second) = match *self {
            Self::Triangle([a, b, c]) => ([a, b, c], None),
            Self::Quad([a, b, c, d]) => ([a, b, c], Some([a, c, d])),
        };
        std::iter::once(first).chain(second)
    }
}

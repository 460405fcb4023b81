//! Named scene objects.

use crate::PolygonMesh;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The geometry payload of a scene object.
///
/// Exporters only handle [`ObjectData::Mesh`]; the other kinds exist so a
/// caller can hand over whatever object is currently active and get a
/// well-formed "not a mesh" error back instead of a panic.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ObjectData {
    /// Polygon mesh geometry.
    Mesh(PolygonMesh),
    /// A camera; carries no exportable geometry.
    Camera,
    /// A light source; carries no exportable geometry.
    Light,
    /// An empty (transform-only) object.
    Empty,
}

impl ObjectData {
    /// Human-readable name of this data kind, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Mesh(_) => "mesh",
            Self::Camera => "camera",
            Self::Light => "light",
            Self::Empty => "empty",
        }
    }
}

/// A named scene object.
///
/// This is the plain-data stand-in for a host application's object handle:
/// a name for diagnostics plus the geometry payload, read-only to consumers.
///
/// # Example
///
/// ```
/// use ra2_types::{Object, ObjectData, PolygonMesh};
///
/// let ob = Object::mesh("Cube", PolygonMesh::new());
/// assert!(ob.as_mesh().is_some());
///
/// let lamp = Object::new("Lamp", ObjectData::Light);
/// assert!(lamp.as_mesh().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Object {
    /// Object name, used in error messages.
    pub name: String,

    /// Geometry payload.
    pub data: ObjectData,
}

impl Object {
    /// Create a new object.
    #[inline]
    pub fn new(name: impl Into<String>, data: ObjectData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    /// Create a mesh object.
    #[inline]
    pub fn mesh(name: impl Into<String>, mesh: PolygonMesh) -> Self {
        Self::new(name, ObjectData::Mesh(mesh))
    }

    /// Get the mesh data, or `None` if this object is not a mesh.
    #[inline]
    #[must_use]
    pub const fn as_mesh(&self) -> Option<&PolygonMesh> {
        match &self.data {
            ObjectData::Mesh(mesh) => Some(mesh),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_object_resolves_mesh() {
        let ob = Object::mesh("Suzanne", PolygonMesh::new());
        assert_eq!(ob.name, "Suzanne");
        assert!(ob.as_mesh().is_some());
        assert_eq!(ob.data.kind(), "mesh");
    }

    #[test]
    fn non_mesh_objects_resolve_none() {
        for (data, kind) in [
            (ObjectData::Camera, "camera"),
            (ObjectData::Light, "light"),
            (ObjectData::Empty, "empty"),
        ] {
            let ob = Object::new("thing", data);
            assert!(ob.as_mesh().is_none());
            assert_eq!(ob.data.kind(), kind);
        }
    }
}

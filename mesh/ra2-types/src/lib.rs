//! Core polygon-mesh types for the RA2 exporter.
//!
//! This crate provides the foundational types for RA2 export:
//!
//! - [`Vertex`] - A point in 3D space with a per-vertex normal
//! - [`Polygon`] - A face referencing 3 or 4 vertices by index
//! - [`PolygonMesh`] - A polygonal mesh with indexed vertices
//! - [`Object`] - A named scene object that may or may not carry mesh data
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be used in:
//! - CLI tools
//! - Web applications (WASM)
//! - Servers
//! - Python bindings
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`; narrowing to
//! `f32` happens only at serialization time in downstream crates.
//!
//! # Coordinate System
//!
//! Uses a **right-handed, Z-up coordinate system**. Downstream consumers that
//! want Y-up apply the remap at export time rather than mutating the mesh.
//!
//! # Example
//!
//! ```
//! use ra2_types::{PolygonMesh, Polygon, Vertex};
//!
//! // Create a single-triangle mesh
//! let mut mesh = PolygonMesh::new();
//! mesh.vertices.push(Vertex::from_coords(0.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(1.0, 0.0, 0.0));
//! mesh.vertices.push(Vertex::from_coords(0.0, 1.0, 0.0));
//! mesh.polygons.push(Polygon::Triangle([0, 1, 2]));
//!
//! assert_eq!(mesh.polygon_count(), 1);
//! assert_eq!(mesh.triangle_count(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod mesh;
mod object;
mod polygon;
mod vertex;

pub use mesh::PolygonMesh;
pub use object::{Object, ObjectData};
pub use polygon::Polygon;
pub use vertex::Vertex;

// Re-export the nalgebra types used in our public API.
pub use nalgebra::{Point3, Vector3};

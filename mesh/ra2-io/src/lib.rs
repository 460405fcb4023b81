//! RA2 mesh export.
//!
//! RA2 is a deliberately minimal, headerless binary format: a mesh is dumped
//! as two parallel files of raw 32-bit floats, one for vertex positions and
//! one for vertex normals. Renderers load it with a single `fread` into a
//! float array.
//!
//! # Format
//!
//! ```text
//! model.ra2                      model.n
//! foreach triangle               foreach triangle
//!     REAL32[3] – Vertex 1           REAL32[3] – Normal 1
//!     REAL32[3] – Vertex 2           REAL32[3] – Normal 2
//!     REAL32[3] – Vertex 3           REAL32[3] – Normal 3
//! end                            end
//! ```
//!
//! No header, no length prefix, no padding. All floats are little-endian.
//! Triangles appear in polygon order; a quad contributes two consecutive
//! triangles, `[a, b, c]` then `[a, c, d]`.
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero engine dependencies**. It can be used
//! in CLI tools, servers, and bindings for host applications that own the
//! file-dialog and property-panel side of exporting.
//!
//! # Example
//!
//! ```no_run
//! use ra2_io::{save_ra2, ExportConfig};
//! use ra2_types::{Object, Polygon, PolygonMesh, Vertex};
//!
//! let mesh = PolygonMesh::from_parts(
//!     vec![
//!         Vertex::from_coords(0.0, 0.0, 0.0),
//!         Vertex::from_coords(1.0, 0.0, 0.0),
//!         Vertex::from_coords(0.0, 1.0, 0.0),
//!     ],
//!     vec![Polygon::Triangle([0, 1, 2])],
//! );
//! let object = Object::mesh("Tri", mesh);
//!
//! let config = ExportConfig { scale: 0.1, rotate_y_up: true };
//! save_ra2(&object, "tri.ra2", &config).unwrap();
//! // Normals land in tri.n
//! ```
//!
//! # Quality Standards
//!
//! - Zero clippy/doc warnings
//! - Zero `unwrap`/`expect` in library code

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Safety: deny unwrap/expect in library code; tests may use them.
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod error;
mod ra2;

pub use error::{ExportError, ExportResult};
pub use ra2::{normals_path, save_ra2, ExportConfig, NORMALS_EXTENSION, RA2_EXTENSION};

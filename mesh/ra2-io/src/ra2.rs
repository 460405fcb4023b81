//! RA2 export: transform, fan-triangulate, and dump float streams.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ra2_types::{Object, PolygonMesh, Vertex};
use tracing::{debug, info};

use crate::error::{ExportError, ExportResult};

/// Canonical extension of the position stream.
pub const RA2_EXTENSION: &str = "ra2";

/// Extension of the companion normal stream.
pub const NORMALS_EXTENSION: &str = "n";

/// Export configuration.
///
/// The output path is not part of the configuration; it is passed to
/// [`save_ra2`] directly, like every other `save_*` entry point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportConfig {
    /// Uniform scale applied to vertex positions. Never applied to normals.
    pub scale: f64,

    /// Rotate the mesh from Z-up to Y-up: `(x, y, z)` becomes `(x, z, -y)`.
    /// Applied to both positions and normals.
    pub rotate_y_up: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 1.0,
            rotate_y_up: false,
        }
    }
}

/// Derive the normal-stream path from the position-stream path.
///
/// The extension is replaced with [`NORMALS_EXTENSION`]:
/// `model.ra2` becomes `model.n`.
///
/// # Example
///
/// ```
/// use ra2_io::normals_path;
/// use std::path::Path;
///
/// assert_eq!(normals_path("scene/model.ra2"), Path::new("scene/model.n"));
/// ```
#[must_use]
pub fn normals_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let mut path = path.as_ref().to_path_buf();
    path.set_extension(NORMALS_EXTENSION);
    path
}

/// Export an object's mesh as an RA2 float-stream pair.
///
/// Writes two files: the position stream at `path` and the normal stream at
/// [`normals_path`]`(path)`. Each file holds 9 little-endian `f32` values per
/// emitted triangle (3 vertices × 3 components), in polygon order. Quads are
/// fan-triangulated into `[a, b, c]` + `[a, c, d]`, the second triangle
/// immediately following the first.
///
/// Positions are remapped (if `rotate_y_up`) and scaled by `config.scale`;
/// normals are remapped but never scaled.
///
/// # Arguments
///
/// * `object` - Scene object to export; must carry mesh data
/// * `path` - Output path of the position stream
/// * `config` - Scale and orientation settings
///
/// # Errors
///
/// Returns [`ExportError::NotAMesh`] if `object` carries no mesh data (no
/// file is created in that case), or [`ExportError::Io`] if either stream
/// cannot be created or written. A stream that fails mid-write is left in
/// its partial state for inspection; the error return is the source of truth
/// for whether the export completed.
///
/// # Example
///
/// ```no_run
/// use ra2_io::{save_ra2, ExportConfig};
/// use ra2_types::{Object, PolygonMesh};
///
/// let ob = Object::mesh("Cube", PolygonMesh::new());
/// save_ra2(&ob, "cube.ra2", &ExportConfig::default()).unwrap();
/// ```
pub fn save_ra2<P: AsRef<Path>>(
    object: &Object,
    path: P,
    config: &ExportConfig,
) -> ExportResult<()> {
    let mesh_path = path.as_ref();

    let mesh = object.as_mesh().ok_or_else(|| ExportError::NotAMesh {
        name: object.name.clone(),
    })?;

    info!(
        object = %object.name,
        triangles = mesh.triangle_count(),
        path = %mesh_path.display(),
        "exporting RA2 position stream"
    );
    write_stream(mesh, mesh_path, |v| {
        scaled(remap(v.position.coords.into(), config.rotate_y_up), config.scale)
    })?;

    let normal_path = normals_path(mesh_path);
    debug!(path = %normal_path.display(), "exporting RA2 normal stream");
    write_stream(mesh, &normal_path, |v| {
        remap(v.normal.into(), config.rotate_y_up)
    })?;

    Ok(())
}

/// Write one attribute stream: 9 floats per fan triangle, polygon order.
fn write_stream<F>(mesh: &PolygonMesh, path: &Path, attribute: F) -> ExportResult<()>
where
    F: Fn(&Vertex) -> [f64; 3],
{
    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    for polygon in &mesh.polygons {
        for tri in polygon.triangles() {
            for index in tri {
                let vertex = &mesh.vertices[index as usize];
                write_vec3(&mut writer, attribute(vertex))
                    .map_err(|e| ExportError::io(path, e))?;
            }
        }
    }

    // BufWriter's Drop swallows flush errors; flush explicitly so the
    // result reflects whether the stream actually completed.
    writer.flush().map_err(|e| ExportError::io(path, e))
}

/// Z-up to Y-up axis remap: `(x, y, z)` to `(x, z, -y)`.
///
/// A 90 degree rotation about X that preserves right-handedness. Identity
/// when `rotate_y_up` is false.
const fn remap(v: [f64; 3], rotate_y_up: bool) -> [f64; 3] {
    let [x, y, z] = v;
    if rotate_y_up { [x, z, -y] } else { [x, y, z] }
}

const fn scaled(v: [f64; 3], scale: f64) -> [f64; 3] {
    [v[0] * scale, v[1] * scale, v[2] * scale]
}

/// Write one 3-component record as consecutive little-endian `f32`s.
fn write_vec3<W: Write>(writer: &mut W, v: [f64; 3]) -> std::io::Result<()> {
    for component in v {
        #[allow(clippy::cast_possible_truncation)]
        // Truncation: f64 to f32 is intentional, the RA2 format stores f32
        writer.write_all(&(component as f32).to_le_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ra2_types::{Point3, Polygon, Vector3};

    fn floats(buf: &[u8]) -> Vec<f32> {
        buf.chunks_exact(4)
            .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    fn single_triangle() -> PolygonMesh {
        let up = Vector3::new(0.0, 0.0, 1.0);
        PolygonMesh::from_parts(
            vec![
                Vertex::new(Point3::new(0.0, 0.0, 0.0), up),
                Vertex::new(Point3::new(1.0, 0.0, 0.0), up),
                Vertex::new(Point3::new(0.0, 1.0, 0.0), up),
            ],
            vec![Polygon::Triangle([0, 1, 2])],
        )
    }

    fn write_to_vec<F>(mesh: &PolygonMesh, attribute: F) -> Vec<f32>
    where
        F: Fn(&Vertex) -> [f64; 3],
    {
        let mut buf = Vec::new();
        for polygon in &mesh.polygons {
            for tri in polygon.triangles() {
                for index in tri {
                    write_vec3(&mut buf, attribute(&mesh.vertices[index as usize])).unwrap();
                }
            }
        }
        floats(&buf)
    }

    #[test]
    fn remap_is_identity_when_disabled() {
        assert_eq!(remap([1.0, 2.0, 3.0], false), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn remap_rotates_z_up_to_y_up() {
        assert_eq!(remap([1.0, 2.0, 3.0], true), [1.0, 3.0, -2.0]);
        // Z-up axis lands on Y
        assert_eq!(remap([0.0, 0.0, 1.0], true), [0.0, 1.0, 0.0]);
    }

    #[test]
    fn triangle_positions_scaled() {
        let mesh = single_triangle();
        let config = ExportConfig {
            scale: 2.0,
            rotate_y_up: false,
        };
        let out = write_to_vec(&mesh, |v| {
            scaled(remap(v.position.coords.into(), config.rotate_y_up), config.scale)
        });
        assert_eq!(out, vec![0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 2.0, 0.0]);
    }

    #[test]
    fn triangle_positions_rotated() {
        let mesh = single_triangle();
        let out = write_to_vec(&mesh, |v| scaled(remap(v.position.coords.into(), true), 1.0));
        assert_eq!(out, vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, -1.0]);
    }

    #[test]
    fn normals_ignore_scale() {
        let mesh = single_triangle();
        let out = write_to_vec(&mesh, |v| remap(v.normal.into(), false));
        assert_eq!(out, vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn quad_emits_fan_order() {
        let mesh = PolygonMesh::from_parts(
            vec![
                Vertex::from_coords(0.0, 0.0, 0.0),
                Vertex::from_coords(1.0, 0.0, 0.0),
                Vertex::from_coords(1.0, 1.0, 0.0),
                Vertex::from_coords(0.0, 1.0, 0.0),
            ],
            vec![Polygon::Quad([0, 1, 2, 3])],
        );
        let out = write_to_vec(&mesh, |v| v.position.coords.into());
        assert_eq!(out.len(), 18);
        // First triangle: V0, V1, V2
        assert_eq!(&out[..9], &[0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0]);
        // Second triangle: V0, V2, V3
        assert_eq!(&out[9..], &[0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn normals_path_replaces_extension() {
        assert_eq!(normals_path("model.ra2"), PathBuf::from("model.n"));
        assert_eq!(normals_path("dir/model.ra2"), PathBuf::from("dir/model.n"));
        assert_eq!(normals_path("bare"), PathBuf::from("bare.n"));
    }

    #[test]
    fn default_config_is_passthrough() {
        let config = ExportConfig::default();
        assert_eq!(config.scale, 1.0);
        assert!(!config.rotate_y_up);
    }
}

use crate::aabb::Aabb;
use crate::triangle::Triangle;
use crate::triangulated::Triangulated3D;
use std::io::Write;

/// First line of every ASCII document.
pub const HEADER: &str = "solid ASCII\n";
/// Last line of every ASCII document.
pub const FOOTER: &str = "endsolid\n";

/// What was written: facet count, zero-normal facets and the bounds of all vertices.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeshStats {
    pub triangles: usize,
    pub degenerate: usize,
    pub bounds: Option<Aabb>,
}

impl MeshStats {
    pub fn record(&mut self, tri: &Triangle) {
        self.triangles += 1;
        if tri.is_degenerate() {
            self.degenerate += 1;
        }
        for p in &tri.vertices {
            match self.bounds.as_mut() {
                Some(b) => b.grow(p),
                None => self.bounds = Some(Aabb::from_point(*p)),
            }
        }
    }
}

/// Write one facet record.
pub fn write_facet<W: Write>(sink: &mut W, tri: &Triangle) -> std::io::Result<()> {
    let n = tri.normal;
    writeln!(sink, "facet normal {:.6} {:.6} {:.6}", n.x, n.y, n.z)?;
    sink.write_all(b"  outer loop\n")?;
    for p in &tri.vertices {
        writeln!(sink, "    vertex {:.6} {:.6} {:.6}", p.x, p.y, p.z)?;
    }
    sink.write_all(b"  endloop\n")?;
    sink.write_all(b"endfacet\n")
}

/// Stream `shape` to `sink` as an **ASCII STL** document.
///
/// Facets go out one by one as the shape yields them, so memory use does not
/// grow with the number of triangles. Wrap file sinks in a `BufWriter`.
/// The first write error aborts the document; what was already written stays.
pub fn write_stl_ascii<T: Triangulated3D, W: Write>(
    shape: &T,
    sink: &mut W,
) -> std::io::Result<MeshStats> {
    let mut stats = MeshStats::default();
    sink.write_all(HEADER.as_bytes())?;
    shape.try_visit_triangles(|tri| {
        stats.record(&tri);
        write_facet(&mut *sink, &tri)
    })?;
    sink.write_all(FOOTER.as_bytes())?;
    sink.flush()?;
    Ok(stats)
}

/// Convert `shape` to an **ASCII STL** string.
///
/// ```rust
/// # use qrsolid::{io::to_stl_ascii, shapes::Cuboid};
/// # use nalgebra::Point3;
/// let cube = Cuboid::unit(Point3::origin());
/// let text = to_stl_ascii(&cube);
/// assert!(text.starts_with("solid ASCII\n"));
/// assert_eq!(text.matches("endfacet").count(), 12);
/// ```
pub fn to_stl_ascii<T: Triangulated3D>(shape: &T) -> String {
    let mut buf = Vec::new();
    // writing into a Vec cannot fail
    let _ = write_stl_ascii(shape, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

/// Export to BINARY STL
///
/// The binary layout carries the facet count ahead of the facets, so the
/// triangles are collected before anything is written.
#[cfg(feature = "stl-io")]
pub fn write_stl_binary<T: Triangulated3D, W: Write>(
    shape: &T,
    sink: &mut W,
) -> std::io::Result<MeshStats> {
    use stl_io::{Normal, Vertex};

    let mut stats = MeshStats::default();
    let mut triangles = Vec::<stl_io::Triangle>::new();

    shape.visit_triangles(|tri| {
        stats.record(&tri);
        let n = tri.normal;
        #[allow(clippy::unnecessary_cast)]
        {
            triangles.push(stl_io::Triangle {
                normal: Normal::new([n.x as f32, n.y as f32, n.z as f32]),
                vertices: tri
                    .vertices
                    .map(|p| Vertex::new([p.x as f32, p.y as f32, p.z as f32])),
            });
        }
    });

    stl_io::write_stl(sink, triangles.iter())?;
    sink.flush()?;
    Ok(stats)
}

/// Convert `shape` to a **binary STL** byte vector.
#[cfg(feature = "stl-io")]
pub fn to_stl_binary<T: Triangulated3D>(shape: &T) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_stl_binary(shape, &mut buf)?;
    Ok(buf)
}

//! Test support library
//! Provides various helper functions & utilities for tests.
#![allow(dead_code)]

use qrsolid::{BitMatrix, float_types::Real};
use nalgebra::{Point3, Vector3};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Quick helper to compare floating-point results with an acceptable tolerance.
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    (a - b).abs() < eps
}

/// Deterministic generator for disc fills.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A `size × size` matrix of coin flips.
pub fn random_matrix(size: usize, seed: u64) -> BitMatrix {
    let mut rng = seeded(seed ^ 0x5eed);
    let rows: Vec<Vec<bool>> = (0..size)
        .map(|_| (0..size).map(|_| rng.gen_bool(0.5)).collect())
        .collect();
    BitMatrix::from_rows(&rows).expect("square by construction")
}

/// All-unset matrix with a single module at `(x, y)`.
pub fn single_module(size: usize, x: usize, y: usize) -> BitMatrix {
    let mut m = BitMatrix::new(size).expect("non-empty");
    m.set(x, y, true).expect("inside the matrix");
    m
}

/// One facet as read back from an ASCII document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFacet {
    pub normal: Vector3<Real>,
    pub vertices: [Point3<Real>; 3],
}

fn parse_xyz(rest: &str) -> [Real; 3] {
    let v: Vec<Real> = rest
        .split_whitespace()
        .map(|s| s.parse().expect("number"))
        .collect();
    assert_eq!(v.len(), 3, "expected three coordinates in {rest:?}");
    [v[0], v[1], v[2]]
}

/// Parse an ASCII STL document, asserting its line structure along the way.
pub fn parse_ascii_stl(text: &str) -> Vec<ParsedFacet> {
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("solid ASCII"));

    let mut facets = Vec::new();
    loop {
        let line = lines.next().expect("document ended without endsolid");
        if line == "endsolid" {
            break;
        }
        let normal = parse_xyz(line.strip_prefix("facet normal ").expect("facet line"));
        assert_eq!(lines.next(), Some("  outer loop"));
        let mut vertices = [Point3::origin(); 3];
        for v in &mut vertices {
            let line = lines.next().expect("vertex line");
            let [x, y, z] = parse_xyz(line.strip_prefix("    vertex ").expect("vertex prefix"));
            *v = Point3::new(x, y, z);
        }
        assert_eq!(lines.next(), Some("  endloop"));
        assert_eq!(lines.next(), Some("endfacet"));
        let [x, y, z] = normal;
        facets.push(ParsedFacet { normal: Vector3::new(x, y, z), vertices });
    }
    assert_eq!(lines.next(), None, "content after endsolid");
    facets
}

/// Center of the axis-aligned box spanned by `facets`.
pub fn centroid_of(facets: &[ParsedFacet]) -> Point3<Real> {
    let mut min = Point3::new(Real::MAX, Real::MAX, Real::MAX);
    let mut max = Point3::new(Real::MIN, Real::MIN, Real::MIN);
    for f in facets {
        for p in &f.vertices {
            min = min.inf(p);
            max = max.sup(p);
        }
    }
    nalgebra::center(&min, &max)
}

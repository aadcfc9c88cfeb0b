//! In-memory mesh data.
//!
//! # See Also
//!
//! * [Wavefront OBJ Reference](https://paulbourke.net/dataformats/obj/)

mod face;
pub use face::*;

use nalgebra::{Point3, Vector3};
use objtext_common::{ArrayIndex, Real};

/// A texture coordinate with two or three components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureVertex<R> {
    pub u: R,
    pub v: R,
    /// Depth component; only present if the source coordinate had three components.
    pub w: Option<R>,
}

impl<R: Real> TextureVertex<R> {
    #[inline]
    pub fn new(u: R, v: R) -> Self {
        Self { u, v, w: None }
    }

    #[inline]
    pub fn with_w(u: R, v: R, w: R) -> Self {
        Self { u, v, w: Some(w) }
    }

    /// The components of this coordinate; `[u, v]` or `[u, v, w]`.
    pub fn components(&self) -> impl Iterator<Item = R> {
        [self.u, self.v].into_iter().chain(self.w)
    }
}

/// A set of vertices, texture coordinates, normals, and the polygonal faces which refer to them.
///
/// Optional fields are `None` until at least one of the corresponding directives has been read;
/// an OBJ file with a `vn` line and no valid normals has `normals == Some(vec![])`.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh<R: Real = f64, Idx: ArrayIndex = u32> {
    /// Geometric vertices (`v`)
    pub vertices: Vec<Point3<R>>,
    /// Texture vertices (`vt`)
    pub texture_vertices: Option<Vec<TextureVertex<R>>>,
    /// Vertex normals (`vn`)
    pub normals: Option<Vec<Vector3<R>>>,
    /// Polygons (`f`), with 0-based indices into the above
    pub faces: Vec<Face<Idx>>,
    /// Object names (`o`)
    pub objects: Option<Vec<String>>,
    /// Group names (`g`)
    pub groups: Option<Vec<String>>,
    /// Material names (`usemtl`)
    pub materials: Option<Vec<String>>,
    /// Smoothing groups (`s`)
    pub smoothing_groups: Option<Vec<String>>,
}

impl<R: Real, Idx: ArrayIndex> Default for Mesh<R, Idx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Real, Idx: ArrayIndex> Mesh<R, Idx> {
    /// Construct a mesh with no vertices, no faces, and no optional data.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            texture_vertices: None,
            normals: None,
            faces: Vec::new(),
            objects: None,
            groups: None,
            materials: None,
            smoothing_groups: None,
        }
    }

    /// The vertex indices of every face with exactly three corners, in face order.
    pub fn triangles(&self) -> impl Iterator<Item = [Idx; 3]> + '_ {
        self.faces.iter().filter_map(Face::as_triangle)
    }
}

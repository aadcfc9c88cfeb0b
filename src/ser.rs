//! Serialization of [Meshes](crate::Mesh) to OBJ text.
//!
//! # Notes
//!
//! Output is written in a fixed section order, each section omitted if its source field is absent:
//!
//! 1. `o` per object name
//! 2. `v` per vertex
//! 3. `vt` per texture vertex
//! 4. `vn` per normal
//! 5. `g` per group name
//! 6. `usemtl` per material name
//! 7. `s` per smoothing group
//! 8. `f` per face, in [Mesh::faces](crate::Mesh::faces) order
//!
//! Every name directive is hoisted above the faces, so the original interleaving of `o`, `g`,
//! `usemtl`, & `s` lines relative to faces isn't preserved. Re-parsing the output yields the same
//! [Mesh], since that interleaving isn't recorded in a [Mesh] to begin with.
//!
//! Numbers are written as the shortest decimal text which reads back as the same value (see
//! [Shortest]); indices are written 1-based.

use std::{
    fmt::{self, Display, Write as _},
    io,
};

use objtext_common::{ArrayIndex, Real, Shortest};

use crate::{Corner, Directive, Face, Mesh};

/// Write `mesh` as OBJ text.
pub fn to_string<R: Real, Idx: ArrayIndex>(mesh: &Mesh<R, Idx>) -> String {
    mesh.to_string()
}

/// Write `mesh` as OBJ text to `writer`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "debug", skip_all, fields(vertices = mesh.vertices.len(), faces = mesh.faces.len()))
)]
pub fn to_writer<R: Real, Idx: ArrayIndex>(
    mut writer: impl io::Write,
    mesh: &Mesh<R, Idx>,
) -> io::Result<()> {
    write!(writer, "{mesh}")
}

/// Write one line per name.
fn names(f: &mut fmt::Formatter<'_>, directive: Directive, names: Option<&[String]>) -> fmt::Result {
    for name in names.unwrap_or_default() {
        writeln!(f, "{directive} {name}")?;
    }
    Ok(())
}

/// Write one line of space-separated numbers.
fn reals<R: Real>(
    f: &mut fmt::Formatter<'_>,
    directive: Directive,
    components: impl IntoIterator<Item = R>,
) -> fmt::Result {
    f.write_str(directive.keyword())?;
    for c in components {
        write!(f, " {}", Shortest(c))?;
    }
    f.write_char('\n')
}

impl<R: Real, Idx: ArrayIndex> Display for Mesh<R, Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        names(f, Directive::Object, self.objects.as_deref())?;
        for v in &self.vertices {
            reals(f, Directive::Vertex, v.coords.iter().copied())?;
        }
        for vt in self.texture_vertices.iter().flatten() {
            reals(f, Directive::TextureVertex, vt.components())?;
        }
        for vn in self.normals.iter().flatten() {
            reals(f, Directive::Normal, vn.iter().copied())?;
        }
        names(f, Directive::Group, self.groups.as_deref())?;
        names(f, Directive::Material, self.materials.as_deref())?;
        names(f, Directive::SmoothingGroup, self.smoothing_groups.as_deref())?;
        for face in &self.faces {
            writeln!(f, "{face}")?;
        }
        Ok(())
    }
}

/// A face line, without its trailing newline: `f 1/1/1 2/2/2 3/3/3`
impl<Idx: ArrayIndex> Display for Face<Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Directive::Face.keyword())?;
        for corner in self.corners() {
            write!(f, " {corner}")?;
        }
        Ok(())
    }
}

/// A 1-based face vertex token: `v`, `v/t`, `v//n`, or `v/t/n`
impl<Idx: ArrayIndex> Display for Corner<Idx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.vertex.to_one_based();
        match (self.texture, self.normal) {
            (Some(t), Some(n)) => write!(f, "{v}/{}/{}", t.to_one_based(), n.to_one_based()),
            (Some(t), None) => write!(f, "{v}/{}", t.to_one_based()),
            (None, Some(n)) => write!(f, "{v}//{}", n.to_one_based()),
            (None, None) => write!(f, "{v}"),
        }
    }
}

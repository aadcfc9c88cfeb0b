//! Reading the body of a single directive line.

use nalgebra::{Point3, Vector3};
use objtext_common::{
    number::{index_strict, integer_lenient, real_lenient, real_strict},
    ArrayIndex, Real,
};

use super::ParseMode;
use crate::{Corner, Directive, Face, LineErrorKind, Mesh, TextureVertex};

/// The slot separator within a face vertex token.
const SLOT_SEPARATOR: char = '/';

/// Reads directive bodies into a [Mesh] under a given [ParseMode].
///
/// Every method returns `Err` when the whole line must be dropped. In lenient mode, some problems
/// are absorbed instead (an unreadable index slot is treated as empty), and only structural
/// problems such as a wrong component count drop the line.
#[derive(Debug, Clone, Copy)]
pub(super) struct LineReader {
    pub(super) mode: ParseMode,
}

impl LineReader {
    /// Read one line's body, already separated from its directive, into `mesh`.
    pub(super) fn read<R: Real, Idx: ArrayIndex>(
        &self,
        mesh: &mut Mesh<R, Idx>,
        directive: Directive,
        body: &str,
    ) -> Result<(), LineErrorKind> {
        match directive {
            Directive::Vertex => {
                let [x, y, z] = self.triple(directive, body)?;
                mesh.vertices.push(Point3::new(x, y, z));
            }
            Directive::TextureVertex => {
                let coords = mesh.texture_vertices.get_or_insert_with(Vec::new);
                coords.push(self.texture_vertex(body)?);
            }
            Directive::Normal => {
                let normals = mesh.normals.get_or_insert_with(Vec::new);
                let [x, y, z] = self.triple(directive, body)?;
                normals.push(Vector3::new(x, y, z));
            }
            Directive::Face => mesh.faces.push(self.face(body)?),
            Directive::Object => push_name(&mut mesh.objects, body),
            Directive::Group => push_name(&mut mesh.groups, body),
            Directive::Material => push_name(&mut mesh.materials, body),
            Directive::SmoothingGroup => push_name(&mut mesh.smoothing_groups, body),
        }
        Ok(())
    }

    fn real<R: Real>(&self, token: &str) -> Result<R, LineErrorKind> {
        match self.mode {
            ParseMode::Lenient => Ok(real_lenient(token)),
            ParseMode::Strict => Ok(real_strict(token)?),
        }
    }

    /// Read exactly three whitespace-separated reals.
    fn triple<R: Real>(&self, directive: Directive, body: &str) -> Result<[R; 3], LineErrorKind> {
        let tokens: Vec<&str> = body.split_whitespace().collect();
        let [x, y, z] = tokens.as_slice() else {
            return Err(LineErrorKind::ComponentCount {
                directive,
                expected: "3",
                found: tokens.len(),
            });
        };
        Ok([self.real(x)?, self.real(y)?, self.real(z)?])
    }

    fn texture_vertex<R: Real>(&self, body: &str) -> Result<TextureVertex<R>, LineErrorKind> {
        let tokens: Vec<&str> = body.split_whitespace().collect();
        let count_error = || LineErrorKind::ComponentCount {
            directive: Directive::TextureVertex,
            expected: "2 or 3",
            found: tokens.len(),
        };
        match (tokens.len(), self.mode) {
            (0 | 1, _) => return Err(count_error()),
            (4.., ParseMode::Strict) => return Err(count_error()),
            (4.., ParseMode::Lenient) => {
                trace!(found = tokens.len(), "ignoring texture vertex components past w");
            }
            _ => {}
        }
        let u = self.real(tokens[0])?;
        let v = self.real(tokens[1])?;
        Ok(match tokens.get(2) {
            Some(w) => TextureVertex::with_w(u, v, self.real(w)?),
            None => TextureVertex::new(u, v),
        })
    }

    /// Read a face index slot; an empty slot is absent.
    fn index<Idx: ArrayIndex>(&self, slot: &str) -> Result<Option<Idx>, LineErrorKind> {
        if slot.is_empty() {
            return Ok(None);
        }
        match self.mode {
            ParseMode::Lenient => {
                let index = integer_lenient(slot).and_then(Idx::from_one_based);
                if index.is_none() {
                    trace!(slot, "treating unreadable index as absent");
                }
                Ok(index)
            }
            ParseMode::Strict => {
                let n = index_strict(slot)?;
                Idx::from_one_based(n)
                    .map(Some)
                    .ok_or(LineErrorKind::IndexOutOfRange(n))
            }
        }
    }

    /// Read a face vertex token (`v`, `v/t`, `v//n`, or `v/t/n`).
    ///
    /// Returns `Ok(None)` if the token has no usable vertex index in lenient mode.
    fn corner<Idx: ArrayIndex>(&self, token: &str) -> Result<Option<Corner<Idx>>, LineErrorKind> {
        let mut slots = token.split(SLOT_SEPARATOR);
        let vertex = self.index(slots.next().unwrap_or_default())?;
        let texture = self.index(slots.next().unwrap_or_default())?;
        let normal = self.index(slots.next().unwrap_or_default())?;

        if self.mode == ParseMode::Strict {
            if slots.next().is_some() {
                return Err(LineErrorKind::TooManySlots(token.to_owned()));
            }
            if vertex.is_none() {
                return Err(LineErrorKind::MissingVertex(token.to_owned()));
            }
        }

        Ok(vertex.map(|vertex| Corner {
            vertex,
            texture,
            normal,
        }))
    }

    fn face<Idx: ArrayIndex>(&self, body: &str) -> Result<Face<Idx>, LineErrorKind> {
        let mut corners = Vec::new();
        for token in body.split_whitespace() {
            if let Some(corner) = self.corner(token)? {
                corners.push(corner);
            } else {
                trace!(token, "dropping face vertex without vertex index");
            }
        }
        if corners.is_empty() {
            return Err(LineErrorKind::EmptyFace);
        }
        Ok(Face::new(corners))
    }
}

/// Append the first token of `body` to a list of names, creating the list if needed.
///
/// Lines are trimmed before being classified, so `body` always has a first token.
fn push_name(names: &mut Option<Vec<String>>, body: &str) {
    let names = names.get_or_insert_with(Vec::new);
    if let Some(name) = body.split_whitespace().next() {
        names.push(name.to_owned());
    }
}

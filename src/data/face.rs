use objtext_common::ArrayIndex;

/// One vertex of a [Face]: an index into [Mesh::vertices](crate::Mesh::vertices), and optionally
/// indices into the texture vertex & normal lists. All indices are 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corner<Idx> {
    pub vertex: Idx,
    pub texture: Option<Idx>,
    pub normal: Option<Idx>,
}

impl<Idx: ArrayIndex> Corner<Idx> {
    #[inline]
    pub fn new(vertex: Idx) -> Self {
        Self {
            vertex,
            texture: None,
            normal: None,
        }
    }

    #[inline]
    pub fn with_texture(self, texture: Idx) -> Self {
        Self {
            texture: Some(texture),
            ..self
        }
    }

    #[inline]
    pub fn with_normal(self, normal: Idx) -> Self {
        Self {
            normal: Some(normal),
            ..self
        }
    }
}

impl<Idx: ArrayIndex> From<Idx> for Corner<Idx> {
    fn from(vertex: Idx) -> Self {
        Self::new(vertex)
    }
}

/// A polygon, defined by an ordered list of [Corners](Corner).
///
/// Each corner carries its own optional texture & normal slot, so a face such as `f 1 2/5 3` keeps
/// its texture index attached to the second vertex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Face<Idx> {
    corners: Vec<Corner<Idx>>,
}

impl<Idx: ArrayIndex> Face<Idx> {
    #[inline]
    pub fn new(corners: Vec<Corner<Idx>>) -> Self {
        Self { corners }
    }

    /// Construct a face with no texture or normal indices.
    pub fn from_vertices(vertices: impl IntoIterator<Item = Idx>) -> Self {
        vertices.into_iter().map(Corner::new).collect()
    }

    /// Construct a face from parallel index lists.
    ///
    /// `vertices` determines the arity of the face. If `textures` or `normals` is shorter than
    /// `vertices`, the remaining corners have no index in that slot; if longer, the extra indices
    /// are ignored.
    pub fn from_parts(
        vertices: &[Idx],
        textures: Option<&[Idx]>,
        normals: Option<&[Idx]>,
    ) -> Self {
        let slot = |list: Option<&[Idx]>, i: usize| list.and_then(|l| l.get(i)).copied();
        vertices
            .iter()
            .enumerate()
            .map(|(i, &vertex)| Corner {
                vertex,
                texture: slot(textures, i),
                normal: slot(normals, i),
            })
            .collect()
    }

    #[inline]
    pub fn corners(&self) -> &[Corner<Idx>] {
        &self.corners
    }

    /// The number of corners of this face.
    #[inline]
    pub fn arity(&self) -> usize {
        self.corners.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = Idx> + '_ {
        self.corners.iter().map(|c| c.vertex)
    }

    /// Whether any corner has a texture index.
    pub fn has_textures(&self) -> bool {
        self.corners.iter().any(|c| c.texture.is_some())
    }

    /// Whether any corner has a normal index.
    pub fn has_normals(&self) -> bool {
        self.corners.iter().any(|c| c.normal.is_some())
    }

    /// The texture slot of each corner, or `None` if no corner has a texture index.
    pub fn textures(&self) -> Option<impl Iterator<Item = Option<Idx>> + '_> {
        self.has_textures()
            .then(|| self.corners.iter().map(|c| c.texture))
    }

    /// The normal slot of each corner, or `None` if no corner has a normal index.
    pub fn normals(&self) -> Option<impl Iterator<Item = Option<Idx>> + '_> {
        self.has_normals().then(|| self.corners.iter().map(|c| c.normal))
    }

    /// The vertex indices of this face, if it has exactly three corners.
    pub fn as_triangle(&self) -> Option<[Idx; 3]> {
        match self.corners.as_slice() {
            [a, b, c] => Some([a.vertex, b.vertex, c.vertex]),
            _ => None,
        }
    }
}

impl<Idx: ArrayIndex> From<Vec<Corner<Idx>>> for Face<Idx> {
    fn from(corners: Vec<Corner<Idx>>) -> Self {
        Self::new(corners)
    }
}

impl<Idx: ArrayIndex> FromIterator<Corner<Idx>> for Face<Idx> {
    fn from_iter<I: IntoIterator<Item = Corner<Idx>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

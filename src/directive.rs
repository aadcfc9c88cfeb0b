use std::fmt;

/// The leading keyword of an OBJ line, which determines how the rest of the line is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    /// `v x y z`
    Vertex,
    /// `vt u v [w]`
    TextureVertex,
    /// `vn x y z`
    Normal,
    /// `f v[/t[/n]] ...`
    Face,
    /// `o name`
    Object,
    /// `g name`
    Group,
    /// `usemtl name`
    Material,
    /// `s value`
    SmoothingGroup,
}

impl Directive {
    /// Every directive, in the order lines are matched against them.
    pub const ALL: [Directive; 8] = [
        Directive::Vertex,
        Directive::TextureVertex,
        Directive::Normal,
        Directive::Face,
        Directive::Object,
        Directive::Group,
        Directive::Material,
        Directive::SmoothingGroup,
    ];

    pub const fn keyword(self) -> &'static str {
        match self {
            Directive::Vertex => "v",
            Directive::TextureVertex => "vt",
            Directive::Normal => "vn",
            Directive::Face => "f",
            Directive::Object => "o",
            Directive::Group => "g",
            Directive::Material => "usemtl",
            Directive::SmoothingGroup => "s",
        }
    }

    /// Split a trimmed line into its directive and the text following the directive.
    ///
    /// A directive is only recognized when its keyword is followed by a space, so `vt 0 1` is
    /// never mistaken for `v`, and `v\t0 0 0` isn't recognized at all.
    pub fn classify(line: &str) -> Option<(Self, &str)> {
        Self::ALL.into_iter().find_map(|directive| {
            line.strip_prefix(directive.keyword())
                .and_then(|rest| rest.strip_prefix(' '))
                .map(|rest| (directive, rest))
        })
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::Directive;

    #[test]
    fn classify() {
        assert_eq!(
            Directive::classify("v 1 2 3"),
            Some((Directive::Vertex, "1 2 3"))
        );
        assert_eq!(
            Directive::classify("vt 0 1"),
            Some((Directive::TextureVertex, "0 1"))
        );
        assert_eq!(
            Directive::classify("vn 0 0 1"),
            Some((Directive::Normal, "0 0 1"))
        );
        assert_eq!(
            Directive::classify("usemtl steel"),
            Some((Directive::Material, "steel"))
        );
        assert_eq!(Directive::classify("s off"), Some((Directive::SmoothingGroup, "off")));
        assert_eq!(Directive::classify("vp 0.5"), None);
        assert_eq!(Directive::classify("mtllib a.mtl"), None);
        assert_eq!(Directive::classify("# v 1 2 3"), None);
        assert_eq!(Directive::classify("v"), None);
        assert_eq!(Directive::classify("v\t1 2 3"), None);
        assert_eq!(Directive::classify(""), None);
    }
}

//! Indentation style for built text.

/// Width and fill character of one indentation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IndentStyle {
    /// Number of fill characters per indentation level.
    pub width: usize,
    /// Character repeated to form the indentation.
    pub fill: char,
}

impl IndentStyle {
    /// 4-space indentation (Rust, Python, C#).
    pub const RUST: Self = Self::spaces(4);

    /// 2-space indentation (TypeScript, JavaScript, YAML).
    pub const TYPESCRIPT: Self = Self::spaces(2);

    /// Tab indentation (Go).
    pub const GO: Self = Self {
        width: 1,
        fill: '\t',
    };

    /// The style a fresh builder starts with.
    pub const DEFAULT: Self = Self::RUST;

    /// Indentation made of `width` spaces per level.
    pub const fn spaces(width: usize) -> Self {
        Self { width, fill: ' ' }
    }

    /// The indentation string for `level` nested units.
    pub fn prefix(&self, level: usize) -> String {
        let mut out = String::new();
        self.push_prefix(&mut out, level);
        out
    }

    /// Append the indentation for `level` nested units to `out`.
    pub fn push_prefix(&self, out: &mut String, level: usize) {
        let count = level.saturating_mul(self.width);
        out.extend(std::iter::repeat_n(self.fill, count));
    }
}

impl Default for IndentStyle {
    fn default() -> Self {
        Self::DEFAULT
    }
}

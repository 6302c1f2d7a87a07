//! Render trait and Fragment for declarative text trees.
//!
//! Nodes describe their output as fragments; [`TextBuilder::emit`] applies
//! them with the builder's current indentation.
//!
//! [`TextBuilder::emit`]: crate::TextBuilder::emit

/// A piece of output, applied to a builder in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Complete line(s); see [`TextBuilder::line`](crate::TextBuilder::line).
    Line(String),
    /// Unterminated text; see [`TextBuilder::append`](crate::TextBuilder::append).
    Text(String),
    /// A bare line feed.
    Newline,
    /// A brace-delimited scope.
    Scope { header: String, body: Vec<Fragment> },
    /// A header, an indented body, and an optional closing line.
    Block {
        header: String,
        body: Vec<Fragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments one level.
    Indented(Vec<Fragment>),
    /// A sequence of fragments.
    Sequence(Vec<Fragment>),
}

impl Fragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create an unterminated text fragment.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Create a bare newline fragment.
    pub fn newline() -> Self {
        Self::Newline
    }

    /// Create a brace-delimited scope fragment.
    pub fn scope(header: impl Into<String>, body: Vec<Fragment>) -> Self {
        Self::Scope {
            header: header.into(),
            body,
        }
    }

    /// Create a block fragment.
    pub fn block(header: impl Into<String>, body: Vec<Fragment>, close: Option<String>) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Create an indented fragment sequence.
    pub fn indented(fragments: Vec<Fragment>) -> Self {
        Self::Indented(fragments)
    }

    /// Create a sequence of fragments.
    pub fn sequence(fragments: Vec<Fragment>) -> Self {
        Self::Sequence(fragments)
    }
}

/// Types that can describe themselves as fragments.
pub trait Render {
    /// Convert this node to a sequence of fragments.
    fn to_fragments(&self) -> Vec<Fragment>;
}

impl Render for Fragment {
    fn to_fragments(&self) -> Vec<Fragment> {
        vec![self.clone()]
    }
}

impl Render for [Fragment] {
    fn to_fragments(&self) -> Vec<Fragment> {
        self.to_vec()
    }
}

impl Render for Vec<Fragment> {
    fn to_fragments(&self) -> Vec<Fragment> {
        self.clone()
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn to_fragments(&self) -> Vec<Fragment> {
        (*self).to_fragments()
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn to_fragments(&self) -> Vec<Fragment> {
        self.as_ref().to_fragments()
    }
}

//! Indentation-aware text builder.

use std::{borrow::Cow, fmt};

use tracing::{debug, trace};

use crate::{Fragment, IndentError, IndentStyle, Render, Setting};

/// Accumulates text so that every line starts with the indentation that was
/// active when the line began.
///
/// Multi-line input is split and re-indented on each call, and `\r\n` is
/// normalized to `\n` first. Mutators return `&mut Self` so calls chain on
/// the same builder.
///
/// # Example
///
/// ```
/// use quill_core::TextBuilder;
///
/// let mut builder = TextBuilder::new();
/// builder
///     .line("fn main()")
///     .line("{")
///     .indent()
///     .line("let x = 1;\nlet y = 2;")
///     .dedent()
///     .line("}");
///
/// assert_eq!(
///     builder.render(),
///     "fn main()\n{\n    let x = 1;\n    let y = 2;\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuilder {
    buffer: String,
    indent_level: usize,
    style: IndentStyle,
}

impl TextBuilder {
    /// Create an empty builder with 4-space indentation.
    pub fn new() -> Self {
        Self::with_style(IndentStyle::DEFAULT)
    }

    /// Create an empty builder with the given indentation style.
    pub fn with_style(style: IndentStyle) -> Self {
        Self {
            buffer: String::new(),
            indent_level: 0,
            style,
        }
    }

    /// Create a builder seeded with `text`, inserted verbatim.
    ///
    /// The seed is not re-indented. If it does not end with a line feed the
    /// builder starts mid-line.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            buffer: text.into(),
            ..Self::new()
        }
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Current number of active indentation units.
    pub fn indent_level(&self) -> usize {
        self.indent_level
    }

    /// Number of fill characters per indentation unit.
    pub fn indent_width(&self) -> usize {
        self.style.width
    }

    /// Character used to fill indentation.
    pub fn indent_char(&self) -> char {
        self.style.fill
    }

    /// Current indentation style.
    pub fn style(&self) -> IndentStyle {
        self.style
    }

    /// Set the indentation level. Negative values are rejected.
    pub fn set_indent_level(&mut self, level: i64) -> Result<&mut Self, IndentError> {
        self.indent_level = non_negative(Setting::Level, level)?;
        Ok(self)
    }

    /// Set the indentation width. Negative values are rejected.
    pub fn set_indent_width(&mut self, width: i64) -> Result<&mut Self, IndentError> {
        self.style.width = non_negative(Setting::Width, width)?;
        Ok(self)
    }

    /// Set the indentation fill character. Any character is accepted.
    pub fn set_indent_char(&mut self, fill: char) -> &mut Self {
        self.style.fill = fill;
        self
    }

    /// Replace width and fill character at once.
    pub fn set_style(&mut self, style: IndentStyle) -> &mut Self {
        self.style = style;
        self
    }

    /// The indentation prefix for the current level.
    pub fn indentation(&self) -> String {
        self.style.prefix(self.indent_level)
    }

    /// Increase indentation level by one.
    pub fn indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level by one. Does nothing at level zero.
    pub fn dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    // =========================================================================
    // Text
    // =========================================================================

    /// Whether the next character written starts a new line.
    ///
    /// Derived from the buffer: true when it is empty or ends with `\n`.
    pub fn is_at_line_start(&self) -> bool {
        self.buffer.is_empty() || self.buffer.ends_with('\n')
    }

    /// Append a bare line feed, without indentation.
    pub fn newline(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Append `text` as one or more complete lines.
    ///
    /// Every segment of `text` is terminated, so the builder always ends at a
    /// line start. `line("")` appends a single line feed.
    pub fn line(&mut self, text: &str) -> &mut Self {
        for segment in normalize_line_endings(text).split('\n') {
            self.write_segment(segment);
            self.buffer.push('\n');
        }
        self
    }

    /// Append `text` without terminating its last segment.
    ///
    /// Segments before an embedded line break are terminated and indented like
    /// [`line`](Self::line). Text ending in a line break leaves the builder at a
    /// line start. An empty string is a no-op.
    pub fn append(&mut self, text: &str) -> &mut Self {
        for (i, segment) in normalize_line_endings(text).split('\n').enumerate() {
            if i > 0 {
                self.buffer.push('\n');
            }
            self.write_segment(segment);
        }
        self
    }

    // =========================================================================
    // Scopes
    // =========================================================================

    /// Write `header`, an opening brace line, then indent.
    pub fn enter_scope(&mut self, header: &str) -> &mut Self {
        self.line(header).line("{").indent();
        trace!(header, level = self.indent_level, "entered scope");
        self
    }

    /// Dedent, then write a closing brace line.
    pub fn leave_scope(&mut self) -> &mut Self {
        self.dedent().line("}");
        trace!(level = self.indent_level, "left scope");
        self
    }

    /// Write a brace-delimited scope whose body is produced by `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use quill_core::TextBuilder;
    ///
    /// let mut builder = TextBuilder::new();
    /// builder.scope("impl Foo", |b| {
    ///     b.line("fn bar(&self) {}");
    /// });
    ///
    /// assert_eq!(builder.render(), "impl Foo\n{\n    fn bar(&self) {}\n}\n");
    /// ```
    pub fn scope<F>(&mut self, header: &str, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.enter_scope(header);
        f(self);
        self.leave_scope()
    }

    /// Write `header`, an indented body produced by `f`, and an optional
    /// closing line at the outer level.
    pub fn block<F>(&mut self, header: &str, close: Option<&str>, f: F) -> &mut Self
    where
        F: FnOnce(&mut Self),
    {
        self.line(header).indent();
        f(self);
        self.dedent();
        if let Some(close) = close {
            self.line(close);
        }
        self
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    /// Emit a [`Render`] node.
    pub fn emit(&mut self, node: &impl Render) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single fragment.
    pub fn apply_fragment(&mut self, fragment: Fragment) {
        match fragment {
            Fragment::Line(s) => {
                self.line(&s);
            }
            Fragment::Text(s) => {
                self.append(&s);
            }
            Fragment::Newline => {
                self.newline();
            }
            Fragment::Scope { header, body } => {
                self.enter_scope(&header);
                for f in body {
                    self.apply_fragment(f);
                }
                self.leave_scope();
            }
            Fragment::Block {
                header,
                body,
                close,
            } => {
                self.block(&header, close.as_deref(), |b| {
                    for f in body {
                        b.apply_fragment(f);
                    }
                });
            }
            Fragment::Indented(body) => {
                self.indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.dedent();
            }
            Fragment::Sequence(body) => {
                for f in body {
                    self.apply_fragment(f);
                }
            }
        }
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// The accumulated text, verbatim.
    pub fn render(&self) -> &str {
        &self.buffer
    }

    /// Consume the builder and return the accumulated text.
    pub fn into_string(self) -> String {
        self.buffer
    }

    /// Length of the accumulated text in bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Empty the buffer. Indentation level and style are kept.
    pub fn clear(&mut self) -> &mut Self {
        self.buffer.clear();
        self
    }

    fn write_segment(&mut self, segment: &str) {
        if segment.is_empty() {
            return;
        }
        if self.is_at_line_start() {
            self.write_indent();
        }
        self.buffer.push_str(segment);
    }

    fn write_indent(&mut self) {
        self.style.push_prefix(&mut self.buffer, self.indent_level);
    }
}

fn non_negative(setting: Setting, value: i64) -> Result<usize, IndentError> {
    let result = if value < 0 {
        Err(IndentError::OutOfRange { setting, value })
    } else {
        usize::try_from(value).map_err(|_| IndentError::TooLarge { setting, value })
    };
    if let Err(err) = &result {
        debug!(%err, "rejected indent setting");
    }
    result
}

fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if text.contains("\r\n") {
        Cow::Owned(text.replace("\r\n", "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

impl From<&str> for TextBuilder {
    fn from(text: &str) -> Self {
        Self::with_text(text)
    }
}

impl From<String> for TextBuilder {
    fn from(text: String) -> Self {
        Self::with_text(text)
    }
}

impl fmt::Display for TextBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

/// Formatted writes go through [`TextBuilder::append`].
impl fmt::Write for TextBuilder {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append(s);
        Ok(())
    }
}

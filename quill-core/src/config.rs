//! `quill.toml` configuration.
//!
//! ```toml
//! [indent]
//! level = 0
//! width = 4
//! char = " "
//! ```

use std::{
    path::{Path, PathBuf},
    str::FromStr,
};

use miette::{Diagnostic, NamedSource, SourceSpan};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{IndentError, IndentStyle, TextBuilder};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "quill.toml";

/// Result type for configuration loading (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("create a quill.toml or pass the indent flags instead"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse configuration")]
    #[diagnostic(code(quill::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Indent(#[from] IndentError),
}

impl Error {
    /// Create a parse error from a toml error with source context
    pub fn parse(source: toml::de::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            source,
        })
    }
}

/// Root of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub indent: IndentConfig,
}

/// The `[indent]` table.
///
/// Integers are signed so that negative values surface as [`IndentError`]
/// when applied rather than as type errors.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IndentConfig {
    pub level: i64,
    pub width: i64,
    #[serde(rename = "char")]
    pub fill: char,
}

impl Default for IndentConfig {
    fn default() -> Self {
        let style = IndentStyle::DEFAULT;
        Self {
            level: 0,
            width: style.width as i64,
            fill: style.fill,
        }
    }
}

impl IndentConfig {
    /// Create an empty builder configured from this table.
    pub fn builder(&self) -> std::result::Result<TextBuilder, IndentError> {
        let mut builder = TextBuilder::new();
        builder
            .set_indent_level(self.level)?
            .set_indent_width(self.width)?
            .set_indent_char(self.fill);
        Ok(builder)
    }
}

impl TryFrom<&IndentConfig> for TextBuilder {
    type Error = IndentError;

    fn try_from(config: &IndentConfig) -> std::result::Result<Self, Self::Error> {
        config.builder()
    }
}

impl Config {
    /// Read and parse a configuration file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let config = Self::from_str_with_filename(&content, &path.display().to_string())?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Parse configuration text, naming `filename` in diagnostics.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    /// Create an empty builder configured from the `[indent]` table.
    pub fn builder(&self) -> Result<TextBuilder> {
        self.indent.builder().map_err(|e| Box::new(Error::Indent(e)))
    }
}

impl FromStr for Config {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_str_with_filename(s, CONFIG_FILE)
    }
}

//! Indentation-aware text accumulation for generated output.
//!
//! [`TextBuilder`] guarantees that every physical line it writes starts with
//! the indentation active when that line began, whether callers pass single
//! lines or text with embedded line breaks.
//!
//! # Module Organization
//!
//! - [`TextBuilder`] - Fluent builder tracking indentation and line position
//! - [`IndentStyle`] - Width and fill character of one indentation unit
//! - [`Fragment`], [`Render`] - Declarative text trees emitted through a builder
//! - [`config`] - `quill.toml` loading
//! - [`IndentError`] - Rejected indentation settings

mod builder;
pub mod config;
mod error;
mod fragment;
mod indent;

pub use builder::TextBuilder;
pub use config::{Config, IndentConfig};
pub use error::{IndentError, Setting};
pub use fragment::{Fragment, Render};
pub use indent::IndentStyle;

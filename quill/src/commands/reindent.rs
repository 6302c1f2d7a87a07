use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
};

use clap::Args;
use eyre::{Context, Result};
use quill_core::{Config, IndentConfig, TextBuilder, config::CONFIG_FILE};
use tracing::debug;

use super::UnwrapOrExit;
use crate::output::{OutputFile, Overwrite, WriteResult};

#[derive(Args)]
pub struct ReindentCommand {
    /// Input file (reads stdin when omitted or `-`)
    pub input: Option<PathBuf>,

    /// Path to quill.toml (defaults to ./quill.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Indentation level applied to every line
    #[arg(long, allow_negative_numbers = true)]
    pub level: Option<i64>,

    /// Characters per indentation level
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Indentation character
    #[arg(long = "char", conflicts_with = "tab")]
    pub fill: Option<char>,

    /// Indent with one tab per level
    #[arg(long, conflicts_with = "width")]
    pub tab: bool,

    /// Wrap the text in a brace-delimited scope with this header line
    #[arg(long)]
    pub scope: Option<String>,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Leave an existing output file untouched
    #[arg(long, requires = "output")]
    pub no_clobber: bool,
}

impl ReindentCommand {
    pub fn run(&self) -> Result<()> {
        let mut config = self.load_config(Path::new(".")).unwrap_or_exit();
        self.apply_overrides(&mut config.indent);
        let builder = config.builder().unwrap_or_exit();

        let text = self.read_input()?;
        let rendered = reindent(builder, &text, self.scope.as_deref());

        match &self.output {
            Some(path) => self.write_file(path, rendered),
            None => {
                io::stdout()
                    .write_all(rendered.as_bytes())
                    .wrap_err("Failed to write to stdout")?;
                Ok(())
            }
        }
    }

    /// Load `--config`, else `dir/quill.toml` when present, else defaults.
    fn load_config(&self, dir: &Path) -> quill_core::config::Result<Config> {
        let default_path = dir.join(CONFIG_FILE);
        match &self.config {
            Some(path) => Config::open(path),
            None if default_path.exists() => Config::open(default_path),
            None => Ok(Config::default()),
        }
    }

    fn apply_overrides(&self, indent: &mut IndentConfig) {
        if let Some(level) = self.level {
            indent.level = level;
        }
        if let Some(width) = self.width {
            indent.width = width;
        }
        if self.tab {
            indent.width = 1;
            indent.fill = '\t';
        }
        if let Some(fill) = self.fill {
            indent.fill = fill;
        }
        debug!(?indent, "resolved indentation");
    }

    fn read_input(&self) -> Result<String> {
        match self.input.as_deref() {
            Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
                .wrap_err_with(|| format!("Failed to read {}", path.display())),
            _ => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .wrap_err("Failed to read stdin")?;
                Ok(text)
            }
        }
    }

    fn write_file(&self, path: &Path, rendered: String) -> Result<()> {
        let overwrite = if self.no_clobber {
            Overwrite::IfMissing
        } else {
            Overwrite::Always
        };
        let file = OutputFile::new(path, rendered).overwrite(overwrite);
        match file.write()? {
            WriteResult::Written => eprintln!("Wrote {}", file.path().display()),
            WriteResult::Skipped => {
                eprintln!("Skipped {} (already exists)", file.path().display())
            }
        }
        Ok(())
    }
}

/// Append `text` to `builder`, optionally inside a brace scope.
fn reindent(mut builder: TextBuilder, text: &str, scope: Option<&str>) -> String {
    match scope {
        Some(header) => {
            builder.scope(header, |b| {
                b.append(text);
                if !b.is_at_line_start() {
                    b.newline();
                }
            });
        }
        None => {
            builder.append(text);
        }
    }
    builder.into_string()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use quill_core::config::Error;
    use tempfile::TempDir;

    use super::*;

    fn command() -> ReindentCommand {
        ReindentCommand {
            input: None,
            config: None,
            level: None,
            width: None,
            fill: None,
            tab: false,
            scope: None,
            output: None,
            no_clobber: false,
        }
    }

    fn builder(level: i64) -> TextBuilder {
        let mut builder = TextBuilder::new();
        builder.set_indent_level(level).unwrap();
        builder
    }

    #[test]
    fn test_reindent_plain() {
        let out = reindent(builder(1), "a\r\n\r\nb\n", None);
        assert_eq!(out, "    a\n\n    b\n");
    }

    #[test]
    fn test_reindent_keeps_missing_trailing_newline() {
        assert_eq!(reindent(builder(1), "a\nb", None), "    a\n    b");
    }

    #[test]
    fn test_reindent_in_scope() {
        let out = reindent(builder(0), "x = 1;\ny = 2;", Some("void f()"));
        assert_eq!(out, "void f()\n{\n    x = 1;\n    y = 2;\n}\n");
    }

    #[test]
    fn test_reindent_in_scope_with_trailing_newline() {
        let out = reindent(builder(0), "x = 1;\n", Some("void f()"));
        assert_eq!(out, "void f()\n{\n    x = 1;\n}\n");
    }

    #[test]
    fn test_overrides_replace_config_values() {
        let mut indent = IndentConfig::default();
        let cmd = ReindentCommand {
            level: Some(3),
            width: Some(2),
            fill: Some('.'),
            ..command()
        };
        cmd.apply_overrides(&mut indent);

        assert_eq!(indent.level, 3);
        assert_eq!(indent.width, 2);
        assert_eq!(indent.fill, '.');
    }

    #[test]
    fn test_tab_override() {
        let mut indent = IndentConfig::default();
        let cmd = ReindentCommand {
            tab: true,
            ..command()
        };
        cmd.apply_overrides(&mut indent);

        assert_eq!(indent.width, 1);
        assert_eq!(indent.fill, '\t');
    }

    #[test]
    fn test_negative_override_is_rejected() {
        let mut config = Config::default();
        let cmd = ReindentCommand {
            width: Some(-1),
            ..command()
        };
        cmd.apply_overrides(&mut config.indent);

        assert!(config.builder().is_err());
    }

    #[test]
    fn test_explicit_config_negative_level_fixed_by_flag() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[indent]\nlevel = -1\nwidth = 2\n").unwrap();

        let cmd = ReindentCommand {
            config: Some(path),
            level: Some(1),
            ..command()
        };
        let mut config = cmd.load_config(temp.path()).unwrap();
        cmd.apply_overrides(&mut config.indent);
        let builder = config.builder().unwrap();

        assert_eq!(builder.indent_level(), 1);
        assert_eq!(builder.indent_width(), 2);
        assert_eq!(reindent(builder, "x", None), "  x");
    }

    #[test]
    fn test_explicit_config_negative_level_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("custom.toml");
        fs::write(&path, "[indent]\nlevel = -1\n").unwrap();

        let cmd = ReindentCommand {
            config: Some(path),
            ..command()
        };
        let mut config = cmd.load_config(temp.path()).unwrap();
        cmd.apply_overrides(&mut config.indent);

        let err = config.builder().unwrap_err();
        assert!(matches!(*err, Error::Indent(_)));
    }

    #[test]
    fn test_default_config_file_in_dir() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE),
            "[indent]\nlevel = 2\nchar = \"-\"\nwidth = 1\n",
        )
        .unwrap();

        let config = command().load_config(temp.path()).unwrap();
        let builder = config.builder().unwrap();
        assert_eq!(reindent(builder, "x\n", None), "--x\n");
    }

    #[test]
    fn test_missing_default_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = command().load_config(temp.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let temp = TempDir::new().unwrap();
        let cmd = ReindentCommand {
            config: Some(temp.path().join("missing.toml")),
            ..command()
        };
        let err = cmd.load_config(temp.path()).unwrap_err();
        assert!(matches!(*err, Error::Io { .. }));
    }
}

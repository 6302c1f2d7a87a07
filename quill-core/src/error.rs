use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Indentation setting that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Level,
    Width,
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level => f.write_str("level"),
            Self::Width => f.write_str("width"),
        }
    }
}

/// Rejected indentation setting. The builder is left exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Diagnostic)]
pub enum IndentError {
    #[error("indent {setting} must be non-negative, got {value}")]
    #[diagnostic(
        code(quill::indent_out_of_range),
        help("use 0 or a positive number for the indent {setting}")
    )]
    OutOfRange { setting: Setting, value: i64 },

    #[error("indent {setting} {value} does not fit in memory on this target")]
    #[diagnostic(code(quill::indent_too_large))]
    TooLarge { setting: Setting, value: i64 },
}

impl IndentError {
    /// The setting that was rejected.
    pub fn setting(&self) -> Setting {
        match self {
            Self::OutOfRange { setting, .. } | Self::TooLarge { setting, .. } => *setting,
        }
    }

    /// The value that was rejected.
    pub fn value(&self) -> i64 {
        match self {
            Self::OutOfRange { value, .. } | Self::TooLarge { value, .. } => *value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_setting_and_value() {
        let err = IndentError::OutOfRange {
            setting: Setting::Width,
            value: -2,
        };
        assert_eq!(err.to_string(), "indent width must be non-negative, got -2");
        assert_eq!(err.setting(), Setting::Width);
        assert_eq!(err.value(), -2);
    }

    #[test]
    fn test_too_large_message() {
        let err = IndentError::TooLarge {
            setting: Setting::Level,
            value: 5_000_000_000,
        };
        assert_eq!(
            err.to_string(),
            "indent level 5000000000 does not fit in memory on this target"
        );
        assert_eq!(err.setting(), Setting::Level);
        assert_eq!(err.value(), 5_000_000_000);
    }
}

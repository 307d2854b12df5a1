use thiserror::Error;

/// Errors raised by version parsing and comparison.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum VersionError {
    /// The input does not match the scheme's grammar, or matches but fails
    /// range or canonical-form validation.
    #[error("'{input}' is not a valid {scheme} version{}", format_suffix(.format))]
    Malformed {
        /// Name of the scheme that rejected the input
        scheme: String,
        /// The offending input text
        input: String,
        /// The format string, for format-driven schemes (CalVer)
        format: Option<String>,
    },

    /// A user-supplied format string or pattern could not be compiled.
    #[error("invalid format '{format}': {reason}")]
    BadFormat { format: String, reason: String },

    /// Two versions from different schemes (or CalVer formats) were compared.
    /// This is a wiring bug in the caller, not a data error.
    #[error("cannot compare {left} version with {right} version")]
    SchemeMismatch { left: String, right: String },

    /// A configured scheme name is not one of the closed scheme set.
    #[error("unknown version scheme '{0}'")]
    UnknownScheme(String),
}

impl VersionError {
    pub(crate) fn malformed(scheme: &str, input: &str) -> Self {
        VersionError::Malformed {
            scheme: scheme.to_string(),
            input: input.to_string(),
            format: None,
        }
    }

    pub(crate) fn malformed_with_format(scheme: &str, input: &str, format: &str) -> Self {
        VersionError::Malformed {
            scheme: scheme.to_string(),
            input: input.to_string(),
            format: Some(format.to_string()),
        }
    }

    pub(crate) fn bad_format(format: &str, reason: impl Into<String>) -> Self {
        VersionError::BadFormat {
            format: format.to_string(),
            reason: reason.into(),
        }
    }
}

fn format_suffix(format: &Option<String>) -> String {
    match format {
        Some(f) => format!(" (format '{f}')"),
        None => String::new(),
    }
}

//! Scheme dispatch
//!
//! The release engine configures one versioning scheme per project and
//! hands every tag through three calls: parse, default, compare. The
//! scheme set is closed, so dispatch is a plain enum match rather than a
//! registry:
//!
//! - [`Scheme`]: the configured scheme, carrying the CalVer format string
//!   or the custom ordering pattern where one applies
//! - [`TagVersion`]: a parsed value, one variant per scheme
//!
//! [`Scheme::resolve`] additionally implements the engine's tag policy:
//! retry with a leading `v`/`V` stripped, then substitute the scheme
//! default for tags that still fail, logging the substitution.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, warn};

use crate::error::VersionError;
use crate::schemes::calver::CalverVersion;
use crate::schemes::chronver::ChronVersion;
use crate::schemes::custom::CustomVersion;
use crate::schemes::dotted::{JavaModuleVersion, JavaRuntimeVersion, SemanticVersion};

/// The closed set of versioning schemes the engine can be configured with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scheme {
    Semver,
    JavaRuntime,
    JavaModule,
    /// Calendar versioning; the format string defines the grammar.
    Calver { format: String },
    Chronver,
    /// Fallback scheme; the optional pattern selects the comparison key.
    Custom { pattern: Option<String> },
}

impl Scheme {
    /// Build a scheme from its configured name (`SEMVER`, `JAVA_RUNTIME`,
    /// `JAVA_MODULE`, `CALVER`, `CHRONVER`, `CUSTOM`; case-insensitive)
    /// plus the CalVer format or custom pattern where one applies.
    pub fn new(name: &str, format: Option<&str>) -> Result<Self, VersionError> {
        match name.to_ascii_lowercase().as_str() {
            "semver" => Ok(Scheme::Semver),
            "java_runtime" => Ok(Scheme::JavaRuntime),
            "java_module" => Ok(Scheme::JavaModule),
            "chronver" => Ok(Scheme::Chronver),
            "calver" => {
                let format = format.ok_or_else(|| {
                    VersionError::bad_format("", "calver requires a format string")
                })?;
                Ok(Scheme::Calver {
                    format: format.to_string(),
                })
            }
            "custom" => Ok(Scheme::Custom {
                pattern: format.map(str::to_string),
            }),
            _ => Err(VersionError::UnknownScheme(name.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Semver => SemanticVersion::SCHEME,
            Scheme::JavaRuntime => JavaRuntimeVersion::SCHEME,
            Scheme::JavaModule => JavaModuleVersion::SCHEME,
            Scheme::Calver { .. } => CalverVersion::SCHEME,
            Scheme::Chronver => ChronVersion::SCHEME,
            Scheme::Custom { .. } => CustomVersion::SCHEME,
        }
    }

    /// Parse a tag under this scheme.
    pub fn parse(&self, text: &str) -> Result<TagVersion, VersionError> {
        match self {
            Scheme::Semver => SemanticVersion::of(text).map(TagVersion::Semver),
            Scheme::JavaRuntime => JavaRuntimeVersion::of(text).map(TagVersion::JavaRuntime),
            Scheme::JavaModule => JavaModuleVersion::of(text).map(TagVersion::JavaModule),
            Scheme::Calver { format } => {
                CalverVersion::of(format, text).map(TagVersion::Calver)
            }
            Scheme::Chronver => ChronVersion::of(text).map(TagVersion::Chronver),
            Scheme::Custom { pattern: Some(p) } => {
                CustomVersion::of_with_pattern(p, text).map(TagVersion::Custom)
            }
            Scheme::Custom { pattern: None } => Ok(TagVersion::Custom(CustomVersion::of(text))),
        }
    }

    /// The pre-history baseline: below or equal to every parseable version
    /// of the scheme. Fails only when the configured CalVer format or
    /// custom pattern is itself invalid.
    pub fn default_version(&self) -> Result<TagVersion, VersionError> {
        match self {
            Scheme::Semver => Ok(TagVersion::Semver(SemanticVersion::default_of())),
            Scheme::JavaRuntime => Ok(TagVersion::JavaRuntime(JavaRuntimeVersion::default_of())),
            Scheme::JavaModule => Ok(TagVersion::JavaModule(JavaModuleVersion::default_of())),
            Scheme::Calver { format } => {
                CalverVersion::default_of(format).map(TagVersion::Calver)
            }
            Scheme::Chronver => Ok(TagVersion::Chronver(ChronVersion::default_of())),
            Scheme::Custom { .. } => Ok(TagVersion::Custom(CustomVersion::default_of())),
        }
    }

    /// Parse a tag, retrying with a leading `v`/`V` stripped, and fall
    /// back to [`Scheme::default_version`] when the tag is unparseable so
    /// one bad tag does not abort the whole release computation.
    /// Configuration errors (bad format/pattern) still propagate.
    pub fn resolve(&self, text: &str) -> Result<TagVersion, VersionError> {
        match self.parse(text) {
            Ok(version) => Ok(version),
            Err(VersionError::Malformed { .. }) => {
                if let Some(stripped) = text.strip_prefix(['v', 'V'])
                    && let Ok(version) = self.parse(stripped)
                {
                    debug!(
                        scheme = self.as_str(),
                        tag = text,
                        "parsed after stripping the leading 'v'"
                    );
                    return Ok(version);
                }
                warn!(
                    scheme = self.as_str(),
                    tag = text,
                    "unparseable tag, substituting the scheme default"
                );
                self.default_version()
            }
            Err(other) => Err(other),
        }
    }
}

impl FromStr for Scheme {
    type Err = VersionError;

    /// Parses format-free scheme names; `CALVER` requires a format and is
    /// rejected here (use [`Scheme::new`]).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scheme::new(s, None)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tag parsed under some scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TagVersion {
    Semver(SemanticVersion),
    JavaRuntime(JavaRuntimeVersion),
    JavaModule(JavaModuleVersion),
    Calver(CalverVersion),
    Chronver(ChronVersion),
    Custom(CustomVersion),
}

impl TagVersion {
    pub fn scheme(&self) -> &'static str {
        match self {
            TagVersion::Semver(_) => SemanticVersion::SCHEME,
            TagVersion::JavaRuntime(_) => JavaRuntimeVersion::SCHEME,
            TagVersion::JavaModule(_) => JavaModuleVersion::SCHEME,
            TagVersion::Calver(_) => CalverVersion::SCHEME,
            TagVersion::Chronver(_) => ChronVersion::SCHEME,
            TagVersion::Custom(_) => CustomVersion::SCHEME,
        }
    }

    /// Total order within one scheme; comparing across schemes (or CalVer
    /// formats) is a caller wiring bug and errors.
    pub fn compare(&self, other: &Self) -> Result<Ordering, VersionError> {
        match (self, other) {
            (TagVersion::Semver(a), TagVersion::Semver(b)) => Ok(a.cmp(b)),
            (TagVersion::JavaRuntime(a), TagVersion::JavaRuntime(b)) => Ok(a.cmp(b)),
            (TagVersion::JavaModule(a), TagVersion::JavaModule(b)) => Ok(a.cmp(b)),
            (TagVersion::Calver(a), TagVersion::Calver(b)) => a.compare(b),
            (TagVersion::Chronver(a), TagVersion::Chronver(b)) => Ok(a.cmp(b)),
            (TagVersion::Custom(a), TagVersion::Custom(b)) => Ok(a.cmp(b)),
            _ => Err(VersionError::SchemeMismatch {
                left: self.scheme().to_string(),
                right: other.scheme().to_string(),
            }),
        }
    }
}

impl PartialOrd for TagVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other).ok()
    }
}

impl fmt::Display for TagVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagVersion::Semver(v) => v.fmt(f),
            TagVersion::JavaRuntime(v) => v.fmt(f),
            TagVersion::JavaModule(v) => v.fmt(f),
            TagVersion::Calver(v) => v.fmt(f),
            TagVersion::Chronver(v) => v.fmt(f),
            TagVersion::Custom(v) => v.fmt(f),
        }
    }
}

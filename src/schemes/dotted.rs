//! Dotted-numeric version family
//!
//! Three schemes share one grammar skeleton,
//! `major[.minor[.patch]][-tag][+build][-optional]`:
//!
//! - [`SemanticVersion`]: `major[.minor[.patch]][-tag][+build]`
//! - [`JavaModuleVersion`]: same shape as [`SemanticVersion`]
//! - [`JavaRuntimeVersion`]: additionally accepts a trailing `-optional`
//!   group after the build metadata
//!
//! Numbers are plain non-negative integers (leading zeros are accepted,
//! unlike strict semver). The tag may be introduced by `-` or `.`.
//! Rendering reproduces the original input byte-for-byte; equality follows
//! the comparison key, so `1.2` and `01.2` are equal but each displays as
//! it was written.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::VersionError;

static DOTTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d+)(?:\.(\d+))?(?:\.(\d+))?(?:([-.])([A-Za-z0-9]+))?(?:\+([A-Za-z0-9]+))?(?:-([A-Za-z0-9]+))?$",
    )
    .expect("dotted version pattern is valid")
});

/// Shared engine behind the three dotted-numeric schemes.
///
/// Ordering key, most significant first:
/// `(major, minor, patch, tag, build, optional)` where
/// - minor/patch are `Option<u64>` and absent sorts below any value;
/// - a present tag sorts *below* an absent one (a pre-release is older
///   than the untagged release of the same triple), tags compare
///   lexicographically when both are present;
/// - build/optional use normal presence (absent sorts first) and compare
///   lexicographically. Numeric build strings therefore compare as text,
///   so "10" < "9".
#[derive(Debug, Clone)]
struct Dotted {
    raw: String,
    major: u64,
    minor: Option<u64>,
    patch: Option<u64>,
    tag: Option<String>,
    build: Option<String>,
    optional: Option<String>,
}

impl Dotted {
    fn parse(scheme: &str, allow_optional: bool, text: &str) -> Result<Self, VersionError> {
        let malformed = || VersionError::malformed(scheme, text);
        let caps = DOTTED_RE.captures(text).ok_or_else(malformed)?;

        let number = |group: usize| -> Result<Option<u64>, VersionError> {
            caps.get(group)
                .map(|m| m.as_str().parse::<u64>().map_err(|_| malformed()))
                .transpose()
        };

        let optional = caps.get(7).map(|m| m.as_str().to_string());
        if optional.is_some() && !allow_optional {
            return Err(malformed());
        }

        Ok(Dotted {
            raw: text.to_string(),
            major: number(1)?.ok_or_else(malformed)?,
            minor: number(2)?,
            patch: number(3)?,
            tag: caps.get(5).map(|m| m.as_str().to_string()),
            build: caps.get(6).map(|m| m.as_str().to_string()),
            optional,
        })
    }

    /// The synthetic "version zero": below or equal to every parseable
    /// version of the scheme.
    fn lowest() -> Self {
        Dotted {
            raw: "0".to_string(),
            major: 0,
            minor: None,
            patch: None,
            tag: None,
            build: None,
            optional: None,
        }
    }
}

impl Ord for Dotted {
    fn cmp(&self, other: &Self) -> Ordering {
        self.major
            .cmp(&other.major)
            .then_with(|| self.minor.cmp(&other.minor))
            .then_with(|| self.patch.cmp(&other.patch))
            .then_with(|| cmp_tag(&self.tag, &other.tag))
            .then_with(|| self.build.cmp(&other.build))
            .then_with(|| self.optional.cmp(&other.optional))
    }
}

/// Tagged sorts before untagged; two tags compare in code-point order.
fn cmp_tag(a: &Option<String>, b: &Option<String>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

impl PartialOrd for Dotted {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Dotted {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Dotted {}

impl Hash for Dotted {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.major.hash(state);
        self.minor.hash(state);
        self.patch.hash(state);
        self.tag.hash(state);
        self.build.hash(state);
        self.optional.hash(state);
    }
}

impl fmt::Display for Dotted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// `major[.minor[.patch]][-tag][+build]` version.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion(Dotted);

impl SemanticVersion {
    /// Scheme name used in error messages and dispatch.
    pub const SCHEME: &'static str = "semver";

    /// Parse a version string, failing on any input outside the grammar.
    pub fn of(text: &str) -> Result<Self, VersionError> {
        Dotted::parse(Self::SCHEME, false, text).map(Self)
    }

    /// The lowest value of the scheme (`0` with every other part absent).
    pub fn default_of() -> Self {
        Self(Dotted::lowest())
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> Option<u64> {
        self.0.minor
    }

    pub fn patch(&self) -> Option<u64> {
        self.0.patch
    }

    pub fn tag(&self) -> Option<&str> {
        self.0.tag.as_deref()
    }

    pub fn build(&self) -> Option<&str> {
        self.0.build.as_deref()
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Java module version, same shape as [`SemanticVersion`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JavaModuleVersion(Dotted);

impl JavaModuleVersion {
    pub const SCHEME: &'static str = "java_module";

    pub fn of(text: &str) -> Result<Self, VersionError> {
        Dotted::parse(Self::SCHEME, false, text).map(Self)
    }

    pub fn default_of() -> Self {
        Self(Dotted::lowest())
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> Option<u64> {
        self.0.minor
    }

    pub fn patch(&self) -> Option<u64> {
        self.0.patch
    }

    pub fn tag(&self) -> Option<&str> {
        self.0.tag.as_deref()
    }

    pub fn build(&self) -> Option<&str> {
        self.0.build.as_deref()
    }
}

impl fmt::Display for JavaModuleVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Java runtime version: the family grammar plus a trailing `-optional`
/// group after the build metadata (e.g. `11.0.2+13-LTS`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JavaRuntimeVersion(Dotted);

impl JavaRuntimeVersion {
    pub const SCHEME: &'static str = "java_runtime";

    pub fn of(text: &str) -> Result<Self, VersionError> {
        Dotted::parse(Self::SCHEME, true, text).map(Self)
    }

    pub fn default_of() -> Self {
        Self(Dotted::lowest())
    }

    pub fn major(&self) -> u64 {
        self.0.major
    }

    pub fn minor(&self) -> Option<u64> {
        self.0.minor
    }

    pub fn patch(&self) -> Option<u64> {
        self.0.patch
    }

    pub fn tag(&self) -> Option<&str> {
        self.0.tag.as_deref()
    }

    pub fn build(&self) -> Option<&str> {
        self.0.build.as_deref()
    }

    pub fn optional(&self) -> Option<&str> {
        self.0.optional.as_deref()
    }
}

impl fmt::Display for JavaRuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

//! Chronological versioning: `YYYY.MM.DD[.CHANGESET]`
//!
//! The date part is fixed-width (`2022.01.02`). The trailing changeset has
//! two legal shapes:
//!
//! - `.change[-tag[.change2]]` — a dot-prefixed changeset number with an
//!   optional tag and second-level change;
//! - `-tag` — a tag appended directly to the date, with the changeset
//!   number defaulting to 0.
//!
//! Changeset numbers are canonical integers (`01` is invalid). Dates are
//! validated against the Gregorian calendar, leap years included.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::VersionError;

static CHRONVER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(\d{4})\.(\d{2})\.(\d{2})(?:\.(0|[1-9]\d*)(?:-([A-Za-z0-9]+)(?:\.(0|[1-9]\d*))?)?|-([A-Za-z0-9]+))?$",
    )
    .expect("chronver pattern is valid")
});

/// Earliest year the scheme accepts; also the `default_of` date.
const EPOCH_YEAR: i32 = 2000;

#[derive(Debug, Clone)]
struct Changeset {
    change: u32,
    tag: Option<String>,
    change2: Option<u32>,
    /// Whether the changeset was written dot-prefixed (`.0-tag`) rather
    /// than as a bare tag suffix (`-tag`). Rendering-only; ignored by
    /// comparison.
    dotted: bool,
}

impl Changeset {
    fn key(&self) -> (u32, &Option<String>, Option<u32>) {
        (self.change, &self.tag, self.change2)
    }

    fn cmp_key(&self, other: &Self) -> Ordering {
        self.change
            .cmp(&other.change)
            .then_with(|| match (&self.tag, &other.tag) {
                // tagged sorts before untagged, like the dotted family
                (Some(a), Some(b)) => a.cmp(b),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            })
            .then_with(|| self.change2.cmp(&other.change2))
    }
}

/// A parsed ChronVer value.
///
/// Ordering is date-dominant: `(year, month, day)` first, then the
/// changeset, where a bare date sorts below any date carrying a changeset.
#[derive(Debug, Clone)]
pub struct ChronVersion {
    year: i32,
    month: u32,
    day: u32,
    changeset: Option<Changeset>,
}

impl ChronVersion {
    pub const SCHEME: &'static str = "chronver";

    /// Parse and validate a ChronVer string.
    pub fn of(text: &str) -> Result<Self, VersionError> {
        let malformed = || VersionError::malformed(Self::SCHEME, text);
        let caps = CHRONVER_RE.captures(text).ok_or_else(malformed)?;

        let year: i32 = caps[1].parse().map_err(|_| malformed())?;
        let month: u32 = caps[2].parse().map_err(|_| malformed())?;
        let day: u32 = caps[3].parse().map_err(|_| malformed())?;

        if year < EPOCH_YEAR || !(1..=12).contains(&month) {
            return Err(malformed());
        }
        // Rejects day 0, day > month length, and 02.29 outside leap years.
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(malformed());
        }

        let changeset = if let Some(change) = caps.get(4) {
            Some(Changeset {
                change: change.as_str().parse().map_err(|_| malformed())?,
                tag: caps.get(5).map(|m| m.as_str().to_string()),
                change2: caps
                    .get(6)
                    .map(|m| m.as_str().parse().map_err(|_| malformed()))
                    .transpose()?,
                dotted: true,
            })
        } else {
            caps.get(7).map(|tag| Changeset {
                change: 0,
                tag: Some(tag.as_str().to_string()),
                change2: None,
                dotted: false,
            })
        };

        Ok(ChronVersion {
            year,
            month,
            day,
            changeset,
        })
    }

    /// The scheme's epoch date with no changeset, the lowest legal value.
    pub fn default_of() -> Self {
        ChronVersion {
            year: EPOCH_YEAR,
            month: 1,
            day: 1,
            changeset: None,
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    /// The changeset number; `None` for a bare date, 0 for a tag-only
    /// suffix.
    pub fn change(&self) -> Option<u32> {
        self.changeset.as_ref().map(|c| c.change)
    }

    pub fn tag(&self) -> Option<&str> {
        self.changeset.as_ref().and_then(|c| c.tag.as_deref())
    }

    pub fn change2(&self) -> Option<u32> {
        self.changeset.as_ref().and_then(|c| c.change2)
    }
}

impl Ord for ChronVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day)
            .cmp(&(other.year, other.month, other.day))
            .then_with(|| match (&self.changeset, &other.changeset) {
                (Some(a), Some(b)) => a.cmp_key(b),
                (Some(_), None) => Ordering::Greater,
                (None, Some(_)) => Ordering::Less,
                (None, None) => Ordering::Equal,
            })
    }
}

impl PartialOrd for ChronVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ChronVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ChronVersion {}

impl Hash for ChronVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.year, self.month, self.day).hash(state);
        self.changeset.as_ref().map(|c| c.key()).hash(state);
    }
}

impl fmt::Display for ChronVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}.{:02}.{:02}", self.year, self.month, self.day)?;
        if let Some(changeset) = &self.changeset {
            if changeset.dotted {
                write!(f, ".{}", changeset.change)?;
                if let Some(tag) = &changeset.tag {
                    write!(f, "-{tag}")?;
                    if let Some(change2) = changeset.change2 {
                        write!(f, ".{change2}")?;
                    }
                }
            } else if let Some(tag) = &changeset.tag {
                write!(f, "-{tag}")?;
            }
        }
        Ok(())
    }
}

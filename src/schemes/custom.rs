//! Fallback scheme for tags that follow no recognized convention
//!
//! Wraps the raw tag text and orders lexicographically, either over the
//! whole string or over the first capture group of a user-supplied regex
//! (ties broken by the full text so the order stays total).

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, Mutex};

use regex::Regex;

use crate::error::VersionError;

/// Compiled ordering patterns, memoized by their source string so sorting
/// a tag list does not recompile the same regex per tag.
static PATTERN_CACHE: LazyLock<Mutex<HashMap<String, Arc<Regex>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn cached_pattern(pattern: &str) -> Result<Arc<Regex>, VersionError> {
    let mut cache = PATTERN_CACHE.lock().expect("custom pattern cache lock");
    if let Some(compiled) = cache.get(pattern) {
        return Ok(Arc::clone(compiled));
    }
    let compiled = Arc::new(
        Regex::new(pattern).map_err(|e| VersionError::bad_format(pattern, e.to_string()))?,
    );
    cache.insert(pattern.to_string(), Arc::clone(&compiled));
    Ok(compiled)
}

/// A raw tag ordered by its comparison key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CustomVersion {
    // field order matters: derived ordering compares the key first
    key: String,
    value: String,
}

impl CustomVersion {
    pub const SCHEME: &'static str = "custom";

    /// Wrap a tag, ordering by the whole text. Never fails.
    pub fn of(text: &str) -> Self {
        CustomVersion {
            key: text.to_string(),
            value: text.to_string(),
        }
    }

    /// Wrap a tag, ordering by the first capture group of `pattern` when
    /// it matches, otherwise by the whole text. Fails only on an invalid
    /// pattern.
    pub fn of_with_pattern(pattern: &str, text: &str) -> Result<Self, VersionError> {
        let regex = cached_pattern(pattern)?;
        let key = regex
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map_or(text, |m| m.as_str());
        Ok(CustomVersion {
            key: key.to_string(),
            value: text.to_string(),
        })
    }

    /// The empty tag, below every non-empty one.
    pub fn default_of() -> Self {
        CustomVersion {
            key: String::new(),
            value: String::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl fmt::Display for CustomVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

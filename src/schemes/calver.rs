//! Calendar versioning driven by a user-supplied format string
//!
//! Unlike the other schemes the grammar here is a runtime parameter: the
//! caller supplies a token pattern such as `YYYY.MINOR.MICRO[-MODIFIER]`,
//! which is compiled once into a [`CalverFormat`] and matched against tag
//! text. Tokens are separated by literal `.`, `-` or `_`, and a `[...]`
//! group marks a trailing portion optional (nesting allowed).
//!
//! | Token | Meaning | Width |
//! |---|---|---|
//! | `YYYY` | absolute year, 2000..=9999 | exactly 4 digits |
//! | `YY` / `0Y` | year offset from 2000, 0..=7999 | minimal / zero-padded 2 |
//! | `MM` / `0M` | month 1..=12 | minimal / zero-padded 2 |
//! | `DD` / `0D` | day, calendar-validated | minimal / zero-padded 2 |
//! | `WW` / `0W` | week 1..=52 | minimal / zero-padded 2 |
//! | `MINOR`, `MICRO` | non-negative integers | minimal |
//! | `MODIFIER` | free-form label without `/` | as-is |
//!
//! "Minimal" tokens enforce canonical form: the captured text must equal
//! the minimal rendering of its value, so `00` is rejected where `0` is
//! canonical and `01` where `1` is.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, LazyLock, Mutex};

use chrono::NaiveDate;
use regex::Regex;

use crate::error::VersionError;

/// Compiled formats, memoized by their source string. Compilation is
/// idempotent, so racing compilers caching either result is safe.
static FORMAT_CACHE: LazyLock<Mutex<HashMap<String, Arc<CalverFormat>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// A recognized token in a CalVer format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Year4,
    Year,
    PaddedYear,
    Month,
    PaddedMonth,
    Day,
    PaddedDay,
    Week,
    PaddedWeek,
    Minor,
    Micro,
    Modifier,
}

impl Token {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "YYYY" => Some(Token::Year4),
            "YY" => Some(Token::Year),
            "0Y" => Some(Token::PaddedYear),
            "MM" => Some(Token::Month),
            "0M" => Some(Token::PaddedMonth),
            "DD" => Some(Token::Day),
            "0D" => Some(Token::PaddedDay),
            "WW" => Some(Token::Week),
            "0W" => Some(Token::PaddedWeek),
            "MINOR" => Some(Token::Minor),
            "MICRO" => Some(Token::Micro),
            "MODIFIER" => Some(Token::Modifier),
            _ => None,
        }
    }

    /// The sub-pattern this token contributes to the compiled regex.
    fn pattern(&self) -> &'static str {
        match self {
            Token::Year4 => r"\d{4}",
            Token::PaddedYear | Token::PaddedMonth | Token::PaddedDay | Token::PaddedWeek => {
                r"\d{2}"
            }
            Token::Year | Token::Month | Token::Day | Token::Week | Token::Minor | Token::Micro => {
                r"\d+"
            }
            Token::Modifier => r"[^/]+",
        }
    }

    /// Tokens that reject non-canonical digit strings ("01" where "1" is
    /// canonical). Fixed-width tokens are exempt; the regex pins their
    /// width.
    fn is_minimal(&self) -> bool {
        matches!(
            self,
            Token::Year | Token::Month | Token::Day | Token::Week | Token::Minor | Token::Micro
        )
    }

    /// The fixed default used by `default_of`, one per token.
    fn default_value(&self) -> FieldValue {
        match self {
            Token::Year4 => FieldValue::Number(2000),
            Token::Year | Token::PaddedYear => FieldValue::Number(0),
            Token::Month | Token::PaddedMonth => FieldValue::Number(1),
            Token::Day | Token::PaddedDay => FieldValue::Number(1),
            Token::Week | Token::PaddedWeek => FieldValue::Number(1),
            Token::Minor | Token::Micro => FieldValue::Number(0),
            Token::Modifier => FieldValue::Label("A".to_string()),
        }
    }

    /// Render a value at this token's width.
    fn render(&self, value: &FieldValue) -> String {
        match (self, value) {
            (Token::Year4, FieldValue::Number(n)) => format!("{n:04}"),
            (
                Token::PaddedYear | Token::PaddedMonth | Token::PaddedDay | Token::PaddedWeek,
                FieldValue::Number(n),
            ) => format!("{n:02}"),
            (_, FieldValue::Number(n)) => n.to_string(),
            (_, FieldValue::Label(s)) => s.clone(),
        }
    }
}

#[derive(Debug, Clone)]
struct Part {
    /// Literal separator preceding the token; `None` for the first token.
    sep: Option<char>,
    token: Token,
}

/// A compiled CalVer format: the ordered token sequence and the anchored
/// regex it matches.
#[derive(Debug)]
pub struct CalverFormat {
    source: String,
    parts: Vec<Part>,
    pattern: Regex,
}

impl CalverFormat {
    /// Compile a format string into a matcher.
    pub fn compile(format: &str) -> Result<Self, VersionError> {
        let bad = |reason: &str| VersionError::bad_format(format, reason);

        let mut parts: Vec<Part> = Vec::new();
        let mut pattern = String::from("^");
        let mut depth = 0usize;
        let mut pending_sep: Option<char> = None;
        let mut chars = format.chars().peekable();

        while let Some(&c) = chars.peek() {
            match c {
                '[' => {
                    chars.next();
                    pattern.push_str("(?:");
                    depth += 1;
                }
                ']' => {
                    chars.next();
                    if depth == 0 {
                        return Err(bad("unbalanced ']'"));
                    }
                    if pending_sep.is_some() {
                        return Err(bad("separator before ']'"));
                    }
                    depth -= 1;
                    pattern.push_str(")?");
                }
                '.' | '-' | '_' => {
                    chars.next();
                    if pending_sep.is_some() {
                        return Err(bad("consecutive separators"));
                    }
                    pending_sep = Some(c);
                }
                c if c.is_ascii_uppercase() || c.is_ascii_digit() => {
                    let mut name = String::new();
                    while let Some(&c) = chars.peek() {
                        if c.is_ascii_uppercase() || c.is_ascii_digit() {
                            name.push(c);
                            chars.next();
                        } else {
                            break;
                        }
                    }
                    let token = Token::from_name(&name)
                        .ok_or_else(|| bad(&format!("unknown token '{name}'")))?;
                    let sep = pending_sep.take();
                    match (parts.is_empty(), sep) {
                        (true, Some(_)) => return Err(bad("format starts with a separator")),
                        (false, None) => {
                            return Err(bad(&format!("token '{name}' must follow a separator")));
                        }
                        _ => {}
                    }
                    if let Some(sep) = sep {
                        pattern.push_str(&regex::escape(&sep.to_string()));
                    }
                    pattern.push('(');
                    pattern.push_str(token.pattern());
                    pattern.push(')');
                    parts.push(Part { sep, token });
                }
                _ => return Err(bad(&format!("unexpected character '{c}'"))),
            }
        }

        if depth != 0 {
            return Err(bad("unbalanced '['"));
        }
        if pending_sep.is_some() {
            return Err(bad("format ends with a separator"));
        }
        if parts.is_empty() {
            return Err(bad("format contains no tokens"));
        }

        pattern.push('$');
        let pattern = Regex::new(&pattern)
            .map_err(|e| VersionError::bad_format(format, e.to_string()))?;

        Ok(CalverFormat {
            source: format.to_string(),
            parts,
            pattern,
        })
    }

    /// Compile through the process-wide memoization cache.
    pub fn cached(format: &str) -> Result<Arc<Self>, VersionError> {
        let mut cache = FORMAT_CACHE.lock().expect("calver format cache lock");
        if let Some(compiled) = cache.get(format) {
            return Ok(Arc::clone(compiled));
        }
        let compiled = Arc::new(Self::compile(format)?);
        cache.insert(format.to_string(), Arc::clone(&compiled));
        Ok(compiled)
    }

    /// The format string this matcher was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum FieldValue {
    Number(u32),
    Label(String),
}

/// A version parsed under a [`CalverFormat`].
///
/// Two values compare token by token in format order, numerically for
/// digit tokens and lexicographically for MODIFIER. An absent optional
/// numeric token compares as 0; an absent MODIFIER sorts above any present
/// one, so `default_of` stays a floor for every format. Values from
/// different formats are not comparable.
#[derive(Debug, Clone)]
pub struct CalverVersion {
    format: Arc<CalverFormat>,
    values: Vec<Option<FieldValue>>,
}

impl CalverVersion {
    pub const SCHEME: &'static str = "calver";

    /// Parse `text` under `format`, compiling the format through the cache.
    pub fn of(format: &str, text: &str) -> Result<Self, VersionError> {
        let format = CalverFormat::cached(format)?;
        Self::parse(format, text)
    }

    fn parse(format: Arc<CalverFormat>, text: &str) -> Result<Self, VersionError> {
        let malformed = || VersionError::malformed_with_format(Self::SCHEME, text, &format.source);
        let caps = format.pattern.captures(text).ok_or_else(malformed)?;

        let mut raws: Vec<Option<&str>> = Vec::with_capacity(format.parts.len());
        let mut values: Vec<Option<FieldValue>> = Vec::with_capacity(format.parts.len());
        for (index, part) in format.parts.iter().enumerate() {
            let raw = caps.get(index + 1).map(|m| m.as_str());
            let value = match (raw, part.token) {
                (None, _) => None,
                (Some(raw), Token::Modifier) => Some(FieldValue::Label(raw.to_string())),
                (Some(raw), _) => {
                    Some(FieldValue::Number(raw.parse().map_err(|_| malformed())?))
                }
            };
            raws.push(raw);
            values.push(value);
        }

        // Range checks; day needs the year and month, when present.
        let mut year: Option<i32> = None;
        let mut month: Option<u32> = None;
        let mut day: Option<u32> = None;
        for (part, value) in format.parts.iter().zip(&values) {
            let Some(FieldValue::Number(n)) = value else {
                continue;
            };
            match part.token {
                Token::Year4 => {
                    if !(2000..10000).contains(&(*n as i32)) {
                        return Err(malformed());
                    }
                    year = Some(*n as i32);
                }
                Token::Year | Token::PaddedYear => {
                    // same ceiling as YYYY: offsets past 7999 would name a
                    // five-digit year (and wrap the i32 cast long before)
                    if *n > 7999 {
                        return Err(malformed());
                    }
                    year = Some(2000 + *n as i32);
                }
                Token::Month | Token::PaddedMonth => {
                    if !(1..=12).contains(n) {
                        return Err(malformed());
                    }
                    month = Some(*n);
                }
                Token::Week | Token::PaddedWeek => {
                    if !(1..=52).contains(n) {
                        return Err(malformed());
                    }
                }
                Token::Day | Token::PaddedDay => day = Some(*n),
                Token::Minor | Token::Micro | Token::Modifier => {}
            }
        }
        if let Some(day) = day {
            let valid = match (month, year) {
                (Some(month), Some(year)) => NaiveDate::from_ymd_opt(year, month, day).is_some(),
                // No year token: leap cannot be decided, allow 02.29.
                (Some(month), None) => NaiveDate::from_ymd_opt(2000, month, day).is_some(),
                (None, _) => (1..=31).contains(&day),
            };
            if !valid {
                return Err(malformed());
            }
        }

        // Canonical-form check for minimal-width tokens.
        for (part, (raw, value)) in format.parts.iter().zip(raws.iter().zip(&values)) {
            if !part.token.is_minimal() {
                continue;
            }
            if let (Some(raw), Some(FieldValue::Number(n))) = (raw, value)
                && *raw != n.to_string()
            {
                return Err(malformed());
            }
        }

        // The MODIFIER sub-pattern already excludes '/'; keep the check so
        // the rule survives a pattern change.
        for (part, value) in format.parts.iter().zip(&values) {
            if part.token == Token::Modifier
                && let Some(FieldValue::Label(label)) = value
                && label.contains('/')
            {
                return Err(malformed());
            }
        }

        Ok(CalverVersion { format, values })
    }

    /// The lowest value of the format: every token, optional or not, gets
    /// its fixed default (`YYYY`→2000, months/days/weeks→1, counters→0,
    /// `MODIFIER`→"A").
    pub fn default_of(format: &str) -> Result<Self, VersionError> {
        let format = CalverFormat::cached(format)?;
        let values = format
            .parts
            .iter()
            .map(|part| Some(part.token.default_value()))
            .collect();
        Ok(CalverVersion { format, values })
    }

    pub fn format(&self) -> &str {
        &self.format.source
    }

    /// Absolute year: `YYYY` as-is, `YY`/`0Y` offset from 2000.
    pub fn year(&self) -> Option<i32> {
        self.format
            .parts
            .iter()
            .zip(&self.values)
            .find_map(|(part, value)| match (part.token, value) {
                (Token::Year4, Some(FieldValue::Number(n))) => Some(*n as i32),
                (Token::Year | Token::PaddedYear, Some(FieldValue::Number(n))) => {
                    Some(2000 + *n as i32)
                }
                _ => None,
            })
    }

    pub fn month(&self) -> Option<u32> {
        self.number_of(|t| matches!(t, Token::Month | Token::PaddedMonth))
    }

    pub fn day(&self) -> Option<u32> {
        self.number_of(|t| matches!(t, Token::Day | Token::PaddedDay))
    }

    pub fn week(&self) -> Option<u32> {
        self.number_of(|t| matches!(t, Token::Week | Token::PaddedWeek))
    }

    pub fn minor(&self) -> Option<u32> {
        self.number_of(|t| matches!(t, Token::Minor))
    }

    pub fn micro(&self) -> Option<u32> {
        self.number_of(|t| matches!(t, Token::Micro))
    }

    pub fn modifier(&self) -> Option<&str> {
        self.format
            .parts
            .iter()
            .zip(&self.values)
            .find_map(|(part, value)| match (part.token, value) {
                (Token::Modifier, Some(FieldValue::Label(label))) => Some(label.as_str()),
                _ => None,
            })
    }

    fn number_of(&self, matches: impl Fn(Token) -> bool) -> Option<u32> {
        self.format
            .parts
            .iter()
            .zip(&self.values)
            .find_map(|(part, value)| match value {
                Some(FieldValue::Number(n)) if matches(part.token) => Some(*n),
                _ => None,
            })
    }

    /// Compare two values of the same format; errors when formats differ.
    pub fn compare(&self, other: &Self) -> Result<Ordering, VersionError> {
        self.partial_cmp(other)
            .ok_or_else(|| VersionError::SchemeMismatch {
                left: format!("{} ({})", Self::SCHEME, self.format.source),
                right: format!("{} ({})", Self::SCHEME, other.format.source),
            })
    }

    fn cmp_values(&self, other: &Self) -> Ordering {
        for (a, b) in self.values.iter().zip(&other.values) {
            let ordering = match (a, b) {
                (Some(FieldValue::Number(a)), Some(FieldValue::Number(b))) => a.cmp(b),
                (Some(FieldValue::Label(a)), Some(FieldValue::Label(b))) => a.cmp(b),
                // absent numeric token counts as 0
                (Some(FieldValue::Number(a)), None) => a.cmp(&0),
                (None, Some(FieldValue::Number(b))) => 0.cmp(b),
                // a present modifier marks a pre-release: it sorts first
                (Some(FieldValue::Label(_)), None) => Ordering::Less,
                (None, Some(FieldValue::Label(_))) => Ordering::Greater,
                (None, None) => Ordering::Equal,
                // same format implies same field kind on both sides
                _ => unreachable!("mismatched field kinds under format '{}'", self.format.source),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for CalverVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        (self.format.source == other.format.source).then(|| self.cmp_values(other))
    }
}

impl PartialEq for CalverVersion {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl Eq for CalverVersion {}

impl Hash for CalverVersion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.format.source.hash(state);
        for (part, value) in self.format.parts.iter().zip(&self.values) {
            // normalize so that values comparing equal hash alike
            match (part.token, value) {
                (Token::Modifier, Some(FieldValue::Label(label))) => {
                    1u8.hash(state);
                    label.hash(state);
                }
                (Token::Modifier, _) => 0u8.hash(state),
                (_, Some(FieldValue::Number(n))) => n.hash(state),
                (_, _) => 0u32.hash(state),
            }
        }
    }
}

impl fmt::Display for CalverVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (part, value) in self.format.parts.iter().zip(&self.values) {
            if let Some(value) = value {
                if let Some(sep) = part.sep {
                    write!(f, "{sep}")?;
                }
                f.write_str(&part.token.render(value))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_fixture_with_optional_modifier() {
        let v = CalverVersion::of("YYYY.MINOR.MICRO[.MODIFIER]", "2022.1.1.beta2").unwrap();
        assert_eq!(v.year(), Some(2022));
        assert_eq!(v.minor(), Some(1));
        assert_eq!(v.micro(), Some(1));
        assert_eq!(v.modifier(), Some("beta2"));
        assert_eq!(v.to_string(), "2022.1.1.beta2");
    }

    #[test]
    fn optional_group_may_be_absent() {
        let v = CalverVersion::of("YYYY.MINOR.MICRO[.MODIFIER]", "2022.1.1").unwrap();
        assert_eq!(v.modifier(), None);
        assert_eq!(v.to_string(), "2022.1.1");
    }

    #[rstest]
    #[case("YY.MM.MICRO", "0.1.0", 2000)]
    #[case("YY.MM.MICRO", "21.12.3", 2021)]
    #[case("0Y.MM.MICRO", "00.1.0", 2000)]
    #[case("YYYY.MM.DD", "2024.2.29", 2024)]
    #[case("YY.MM.MICRO", "7999.1.0", 9999)] // largest offset, year 9999
    fn accepts_canonical_inputs(#[case] format: &str, #[case] input: &str, #[case] year: i32) {
        let v = CalverVersion::of(format, input).unwrap();
        assert_eq!(v.year(), Some(year));
        assert_eq!(v.to_string(), input);
    }

    #[rstest]
    #[case("YY.MM.MICRO", "00.1.0")] // canonical for YY value 0 is "0"
    #[case("YY.MM.MICRO", "21.01.0")] // canonical month 1 is "1"
    #[case("YY.MM.MICRO", "21.13.0")] // month out of range
    #[case("YY.MM.MICRO", "21.13")] // missing mandatory MICRO
    #[case("YYYY.MM.DD", "1999.1.1")] // year below 2000
    #[case("YY.MM.MICRO", "8000.1.0")] // offset past the year-9999 ceiling
    #[case("YY.MM.DD", "4294967292.2.29")] // huge offset must not wrap into a leap year
    #[case("YYYY.MM.DD", "2001.2.29")] // not a leap year
    #[case("YYYY.MM.DD", "2022.4.31")] // April has 30 days
    #[case("YYYY.0M.0D", "2022.1.2")] // padded tokens need two digits
    #[case("YYYY.WW", "2022.53")] // week out of range
    #[case("YYYY.WW", "2022.0")]
    #[case("YYYY.MODIFIER", "2022.a/b")] // '/' is not allowed in labels
    #[case("YYYY.MINOR", "2022.1.extra")]
    #[case("YYYY.MINOR", "2022.1.1")]
    fn rejects_invalid_inputs(#[case] format: &str, #[case] input: &str) {
        let err = CalverVersion::of(format, input).unwrap_err();
        assert_eq!(
            err,
            VersionError::malformed_with_format("calver", input, format)
        );
    }

    #[test]
    fn day_without_year_token_accepts_leap_day() {
        assert!(CalverVersion::of("MM.DD.MICRO", "2.29.0").is_ok());
        assert!(CalverVersion::of("MM.DD.MICRO", "2.30.0").is_err());
    }

    #[test]
    fn day_without_month_token_is_capped_at_31() {
        assert!(CalverVersion::of("YYYY.DD", "2022.31").is_ok());
        assert!(CalverVersion::of("YYYY.DD", "2022.32").is_err());
    }

    #[rstest]
    #[case("YYYY.BOGUS")]
    #[case("YYYY..MM")]
    #[case("[YYYY.MM")]
    #[case("YYYY.MM]")]
    #[case("YYYY.")]
    #[case(".YYYY")]
    #[case("YYYY MM")]
    #[case("YYYY[MM]")]
    #[case("")]
    fn rejects_bad_formats(#[case] format: &str) {
        assert!(matches!(
            CalverFormat::compile(format),
            Err(VersionError::BadFormat { .. })
        ));
    }

    #[rstest]
    #[case("YYYY.0M.0D", "2000.01.01")]
    #[case("YY.MM.MICRO", "0.1.0")]
    #[case("YYYY.MINOR.MICRO[.MODIFIER]", "2000.0.0.A")]
    #[case("YYYY.WW[_MINOR]", "2000.1_0")]
    fn default_renders_per_token_widths(#[case] format: &str, #[case] expected: &str) {
        assert_eq!(
            CalverVersion::default_of(format).unwrap().to_string(),
            expected
        );
    }

    #[rstest]
    #[case("YYYY.MINOR.MICRO[.MODIFIER]", "2022.1.1.beta2")]
    #[case("YYYY.MINOR.MICRO[.MODIFIER]", "2000.0.0")]
    #[case("YY.MM.MICRO", "0.1.0")]
    #[case("YYYY.0M.0D", "2000.01.01")]
    #[case("YYYY.0M.0D", "2024.02.29")]
    fn default_is_a_floor(#[case] format: &str, #[case] input: &str) {
        let default = CalverVersion::default_of(format).unwrap();
        let parsed = CalverVersion::of(format, input).unwrap();
        assert_ne!(
            default.compare(&parsed).unwrap(),
            Ordering::Greater,
            "default_of({format}) > {input}"
        );
    }

    #[test]
    fn numeric_tokens_compare_as_integers() {
        let older = CalverVersion::of("YYYY.MINOR", "2022.9").unwrap();
        let newer = CalverVersion::of("YYYY.MINOR", "2022.10").unwrap();
        assert_eq!(older.compare(&newer).unwrap(), Ordering::Less);
    }

    #[test]
    fn modifier_marks_a_pre_release() {
        let tagged = CalverVersion::of("YYYY.MINOR[.MODIFIER]", "2022.1.beta").unwrap();
        let plain = CalverVersion::of("YYYY.MINOR[.MODIFIER]", "2022.1").unwrap();
        assert_eq!(tagged.compare(&plain).unwrap(), Ordering::Less);
    }

    #[test]
    fn absent_numeric_token_counts_as_zero() {
        let short = CalverVersion::of("YYYY[.MICRO]", "2022").unwrap();
        let zero = CalverVersion::of("YYYY[.MICRO]", "2022.0").unwrap();
        let one = CalverVersion::of("YYYY[.MICRO]", "2022.1").unwrap();
        assert_eq!(short.compare(&zero).unwrap(), Ordering::Equal);
        assert_eq!(short.compare(&one).unwrap(), Ordering::Less);
    }

    #[test]
    fn different_formats_are_not_comparable() {
        let a = CalverVersion::of("YYYY.MM", "2022.1").unwrap();
        let b = CalverVersion::of("YYYY.MINOR", "2022.1").unwrap();
        assert!(a.partial_cmp(&b).is_none());
        assert!(matches!(
            a.compare(&b),
            Err(VersionError::SchemeMismatch { .. })
        ));
    }

    #[test]
    fn nested_optional_groups_parse_prefixes() {
        let format = "YYYY[.MM[.DD]]";
        for input in ["2022", "2022.5", "2022.5.31"] {
            let v = CalverVersion::of(format, input).unwrap();
            assert_eq!(v.to_string(), input);
        }
        let short = CalverVersion::of(format, "2022").unwrap();
        let long = CalverVersion::of(format, "2022.1.1").unwrap();
        assert_eq!(short.compare(&long).unwrap(), Ordering::Less);
    }

    #[test]
    fn cached_formats_are_shared() {
        let a = CalverFormat::cached("YYYY.MM.DD").unwrap();
        let b = CalverFormat::cached("YYYY.MM.DD").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn equal_values_hash_alike() {
        use std::collections::HashSet;
        let a = CalverVersion::of("YYYY[.MICRO]", "2022").unwrap();
        let b = CalverVersion::of("YYYY[.MICRO]", "2022.0").unwrap();
        assert_eq!(a, b);
        let set: HashSet<CalverVersion> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }
}

use std::cmp::Ordering;

use tagver::compare::{greater_than, less_than};
use tagver::{CalverVersion, ChronVersion, Scheme, SemanticVersion, VersionError};

#[test]
fn semver_round_trip_is_byte_for_byte() {
    for input in [
        "0",
        "0-ea",
        "1.2",
        "01.2",
        "1.2.3",
        "1.2.3-SNAPSHOT",
        "1.2.3.Final",
        "1.2.3-rc1+b42",
        "2021.05.20",
    ] {
        let parsed = SemanticVersion::of(input).unwrap();
        assert_eq!(parsed.to_string(), input);
    }
}

#[test]
fn semver_sentinels_and_tags_order() {
    let v0 = SemanticVersion::of("0").unwrap();
    let v01 = SemanticVersion::of("0.1").unwrap();
    let v012 = SemanticVersion::of("0.1.2").unwrap();
    assert!(v0 < v01);
    assert!(v01 < v012);

    let pre = SemanticVersion::of("0.1-PRE").unwrap();
    let built = SemanticVersion::of("0.1+BUILD").unwrap();
    assert!(pre < v01);
    assert!(v01 < built);
}

#[test]
fn ordering_is_total_for_same_scheme_values() {
    let inputs = ["0", "0-ea", "0.1", "0.1-PRE", "0.1+BUILD", "1.0.0", "1.0.0-rc1"];
    for a in inputs {
        for b in inputs {
            let a = SemanticVersion::of(a).unwrap();
            let b = SemanticVersion::of(b).unwrap();
            let holds = [less_than(&a, &b), a == b, greater_than(&a, &b)];
            assert_eq!(holds.iter().filter(|h| **h).count(), 1, "{a} vs {b}");
        }
    }
}

#[test]
fn semver_sort_places_tagged_zero_first() {
    let mut tags: Vec<SemanticVersion> = ["2021.05.20", "0-ea", "2021.01.22"]
        .iter()
        .map(|t| SemanticVersion::of(t).unwrap())
        .collect();
    tags.sort();
    let rendered: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
    assert_eq!(rendered, ["0-ea", "2021.01.22", "2021.05.20"]);
}

#[test]
fn chronver_validates_the_calendar() {
    assert!(ChronVersion::of("2001.02.29").is_err());
    assert!(ChronVersion::of("2000.02.29").is_ok());
    assert!(ChronVersion::of("2100.02.29").is_err());

    let v = ChronVersion::of("2022.01.02.1-break.2").unwrap();
    assert_eq!(v.year(), 2022);
    assert_eq!(v.month(), 1);
    assert_eq!(v.day(), 2);
    assert_eq!(v.change(), Some(1));
    assert_eq!(v.tag(), Some("break"));
    assert_eq!(v.change2(), Some(2));
}

#[test]
fn calver_enforces_canonical_minimal_digits() {
    match CalverVersion::of("YY.MM.MICRO", "00.1.0") {
        Err(VersionError::Malformed { scheme, input, format }) => {
            assert_eq!(scheme, "calver");
            assert_eq!(input, "00.1.0");
            assert_eq!(format.as_deref(), Some("YY.MM.MICRO"));
        }
        other => panic!("expected a malformed-version error, got {other:?}"),
    }

    let v = CalverVersion::of("YY.MM.MICRO", "0.1.0").unwrap();
    assert_eq!(v.year(), Some(2000));
    assert_eq!(v.to_string(), "0.1.0");
}

#[test]
fn calver_default_is_a_floor_for_every_format() {
    let cases = [
        ("YYYY.MINOR.MICRO[.MODIFIER]", ["2022.1.1.beta2", "2000.0.0.A", "2000.0.0"]),
        ("YY.MM.MICRO", ["0.1.0", "21.12.3", "1.1.1"]),
        ("YYYY.0M.0D", ["2000.01.01", "2024.02.29", "2999.12.31"]),
    ];
    for (format, inputs) in cases {
        let default = CalverVersion::default_of(format).unwrap();
        for input in inputs {
            let parsed = CalverVersion::of(format, input).unwrap();
            assert_ne!(
                default.compare(&parsed).unwrap(),
                Ordering::Greater,
                "default_of({format}) > {input}"
            );
        }
    }
}

#[test]
fn dispatch_covers_every_scheme() {
    let cases = [
        (Scheme::new("SEMVER", None).unwrap(), "1.2.3-rc1"),
        (Scheme::new("JAVA_RUNTIME", None).unwrap(), "11.0.2+13-LTS"),
        (Scheme::new("JAVA_MODULE", None).unwrap(), "9.0.1"),
        (
            Scheme::new("CALVER", Some("YYYY.MINOR.MICRO[.MODIFIER]")).unwrap(),
            "2022.1.1.beta2",
        ),
        (Scheme::new("CHRONVER", None).unwrap(), "2022.01.02.1-break.2"),
        (Scheme::new("CUSTOM", None).unwrap(), "release-7"),
    ];
    for (scheme, tag) in cases {
        let parsed = scheme.parse(tag).unwrap();
        assert_eq!(parsed.to_string(), tag);
        let default = scheme.default_version().unwrap();
        assert_ne!(default.compare(&parsed).unwrap(), Ordering::Greater);
    }
}

#[test]
fn resolve_handles_v_prefixed_and_garbage_tags() {
    let scheme = Scheme::new("SEMVER", None).unwrap();
    assert_eq!(scheme.resolve("v1.2.3").unwrap().to_string(), "1.2.3");
    assert_eq!(
        scheme.resolve("???").unwrap(),
        scheme.default_version().unwrap()
    );
}

#[test]
fn cross_scheme_comparison_errors() {
    let semver = Scheme::new("SEMVER", None).unwrap().parse("1.0.0").unwrap();
    let chron = Scheme::new("CHRONVER", None)
        .unwrap()
        .parse("2022.01.02")
        .unwrap();
    assert!(matches!(
        semver.compare(&chron),
        Err(VersionError::SchemeMismatch { .. })
    ));
}

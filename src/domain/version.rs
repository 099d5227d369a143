use crate::domain::prerelease;
use crate::error::{Result, VersionError};
use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

const IDENTIFIERS: &str = r"[0-9A-Za-z-]+(?:\.[0-9A-Za-z-]+)*";

/// Semantic version with optional pre-release and build metadata.
///
/// Equality (`==`) is structural and includes build metadata. Precedence is
/// exposed through [`SemVer::precedence`] and the `lt`/`le`/`gt`/`ge` family,
/// which ignore build metadata entirely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SemVer {
    major: u64,
    minor: u64,
    patch: u64,
    pre_release: Option<String>,
    build_metadata: Option<String>,
}

/// Named fields captured from a display string, before conversion to numbers
struct CapturedFields<'t> {
    major: &'t str,
    minor: Option<&'t str>,
    patch: Option<&'t str>,
    pre_release: Option<&'t str>,
    build_metadata: Option<&'t str>,
}

impl SemVer {
    /// Create a new version without pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        SemVer {
            major,
            minor,
            patch,
            pre_release: None,
            build_metadata: None,
        }
    }

    /// Create a version with every field given explicitly
    pub fn with_parts(
        major: u64,
        minor: u64,
        patch: u64,
        pre_release: Option<String>,
        build_metadata: Option<String>,
    ) -> Self {
        SemVer {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        }
    }

    /// Parse a display string such as `v1.2.3-beta.1+build.5`.
    ///
    /// The leading `v`/`V` is optional and all three numeric components are
    /// required. Surrounding whitespace is ignored.
    pub fn parse(text: &str) -> Result<Self> {
        Self::from_fields(text, capture(text, false)?)
    }

    /// Parse like [`SemVer::parse`] but let `minor` and `patch` default to 0,
    /// so `"2"` and `"v2.4"` are accepted.
    pub fn parse_lenient(text: &str) -> Result<Self> {
        Self::from_fields(text, capture(text, true)?)
    }

    fn from_fields(text: &str, fields: CapturedFields<'_>) -> Result<Self> {
        let number = |digits: Option<&str>| -> Result<u64> {
            match digits {
                Some(digits) => digits.parse::<u64>().map_err(|_| VersionError::parse(text)),
                None => Ok(0),
            }
        };

        Ok(SemVer {
            major: number(Some(fields.major))?,
            minor: number(fields.minor)?,
            patch: number(fields.patch)?,
            pre_release: fields.pre_release.map(str::to_string),
            build_metadata: fields.build_metadata.map(str::to_string),
        })
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    pub fn pre_release(&self) -> Option<&str> {
        self.pre_release.as_deref()
    }

    pub fn build_metadata(&self) -> Option<&str> {
        self.build_metadata.as_deref()
    }

    /// Increment the patch component.
    ///
    /// Fails without modifying the version if the component is already `u64::MAX`.
    pub fn next_patch(&mut self) -> Result<()> {
        self.patch = increment(self.patch, VersionBump::Patch)?;
        Ok(())
    }

    /// Increment the minor component and reset patch
    pub fn next_minor(&mut self) -> Result<()> {
        self.minor = increment(self.minor, VersionBump::Minor)?;
        self.patch = 0;
        Ok(())
    }

    /// Increment the major component and reset minor and patch
    pub fn next_major(&mut self) -> Result<()> {
        self.major = increment(self.major, VersionBump::Major)?;
        self.minor = 0;
        self.patch = 0;
        Ok(())
    }

    /// Apply the increment matching `level`
    pub fn bump(&mut self, level: VersionBump) -> Result<()> {
        match level {
            VersionBump::Major => self.next_major(),
            VersionBump::Minor => self.next_minor(),
            VersionBump::Patch => self.next_patch(),
        }
    }

    /// Overwrite the numeric components that are `Some`, leaving the rest as they are
    pub fn set(&mut self, major: Option<u64>, minor: Option<u64>, patch: Option<u64>) {
        self.patch = patch.unwrap_or(self.patch);
        self.minor = minor.unwrap_or(self.minor);
        self.major = major.unwrap_or(self.major);
    }

    /// Replace the pre-release, or clear it with `None`
    pub fn set_pre_release(&mut self, pre_release: Option<String>) {
        self.pre_release = pre_release;
    }

    /// Replace the build metadata, or clear it with `None`
    pub fn set_build_metadata(&mut self, build_metadata: Option<String>) {
        self.build_metadata = build_metadata;
    }

    /// Precedence ordering: numeric triple first, then pre-release.
    /// Build metadata never takes part.
    pub fn precedence(&self, other: &SemVer) -> Ordering {
        self.major
            .cmp(&other.major)
            .then(self.minor.cmp(&other.minor))
            .then(self.patch.cmp(&other.patch))
            .then_with(|| prerelease::compare(self.pre_release(), other.pre_release()))
    }

    pub fn lt(&self, other: &SemVer) -> bool {
        self.precedence(other) == Ordering::Less
    }

    pub fn gt(&self, other: &SemVer) -> bool {
        self.precedence(other) == Ordering::Greater
    }

    pub fn ge(&self, other: &SemVer) -> bool {
        !self.lt(other)
    }

    pub fn le(&self, other: &SemVer) -> bool {
        !self.gt(other)
    }

    /// Equal precedence; unlike `==`, build metadata is ignored
    pub fn precedence_eq(&self, other: &SemVer) -> bool {
        self.precedence(other) == Ordering::Equal
    }

    pub fn precedence_ne(&self, other: &SemVer) -> bool {
        !self.precedence_eq(other)
    }
}

fn increment(value: u64, level: VersionBump) -> Result<u64> {
    value
        .checked_add(1)
        .ok_or_else(|| VersionError::Overflow(level.to_string()))
}

/// Check that `value` is a non-empty list of dot-separated `[0-9A-Za-z-]` identifiers
pub fn validate_identifiers(value: &str) -> Result<()> {
    let re = Regex::new(&format!("^{}$", IDENTIFIERS)).map_err(|_| VersionError::parse(value))?;
    if re.is_match(value) {
        Ok(())
    } else {
        Err(VersionError::parse(value))
    }
}

fn capture(text: &str, lenient: bool) -> Result<CapturedFields<'_>> {
    let numbers = if lenient {
        r"(?P<major>[0-9]+)(?:\.(?P<minor>[0-9]+)(?:\.(?P<patch>[0-9]+))?)?"
    } else {
        r"(?P<major>[0-9]+)\.(?P<minor>[0-9]+)\.(?P<patch>[0-9]+)"
    };
    let pattern = format!(
        r"^[vV]?{}(?:-(?P<pre>{}))?(?:\+(?P<build>{}))?$",
        numbers, IDENTIFIERS, IDENTIFIERS
    );
    let re = Regex::new(&pattern).map_err(|_| VersionError::parse(text))?;

    let captures = re
        .captures(text.trim())
        .ok_or_else(|| VersionError::parse(text))?;
    let major = captures
        .name("major")
        .ok_or_else(|| VersionError::parse(text))?
        .as_str();

    Ok(CapturedFields {
        major,
        minor: captures.name("minor").map(|m| m.as_str()),
        patch: captures.name("patch").map(|m| m.as_str()),
        pre_release: captures.name("pre").map(|m| m.as_str()),
        build_metadata: captures.name("build").map(|m| m.as_str()),
    })
}

impl FromStr for SemVer {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        SemVer::parse(s)
    }
}

impl fmt::Display for SemVer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(pre_release) = &self.pre_release {
            write!(f, "-{}", pre_release)?;
        }
        if let Some(build_metadata) = &self.build_metadata {
            write!(f, "+{}", build_metadata)?;
        }
        Ok(())
    }
}

/// Version component to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    Major,
    Minor,
    Patch,
}

impl FromStr for VersionBump {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            "patch" => Ok(VersionBump::Patch),
            other => Err(VersionError::InvalidLevel(other.to_string())),
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionBump::Major => write!(f, "major"),
            VersionBump::Minor => write!(f, "minor"),
            VersionBump::Patch => write!(f, "patch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn pre(major: u64, minor: u64, patch: u64, pre_release: &str) -> SemVer {
        SemVer::with_parts(major, minor, patch, Some(pre_release.to_string()), None)
    }

    #[test]
    fn test_version_parse() {
        let v = SemVer::parse("v1.2.3").unwrap();
        assert_eq!(v.major(), 1);
        assert_eq!(v.minor(), 2);
        assert_eq!(v.patch(), 3);
        assert_eq!(v.pre_release(), None);
        assert_eq!(v.build_metadata(), None);
    }

    #[test]
    fn test_version_parse_without_v() {
        assert_eq!(SemVer::parse("1.2.3").unwrap(), SemVer::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_uppercase_v() {
        assert_eq!(SemVer::parse("V1.2.3").unwrap(), SemVer::new(1, 2, 3));
    }

    #[test]
    fn test_version_parse_full() {
        let v = SemVer::parse("v0.0.1-beta.2+build-7.x").unwrap();
        assert_eq!(v.pre_release(), Some("beta.2"));
        assert_eq!(v.build_metadata(), Some("build-7.x"));
    }

    #[test]
    fn test_version_parse_build_without_pre_release() {
        let v = SemVer::parse("2.0.0+20240101").unwrap();
        assert_eq!(v.pre_release(), None);
        assert_eq!(v.build_metadata(), Some("20240101"));
    }

    #[test]
    fn test_version_parse_invalid() {
        for text in [
            "",
            "v",
            "1.2",
            "v1.2.3.4",
            "1.x.3",
            "1.2.3-",
            "1.2.3-beta..1",
            "1.2.3-be_ta",
            "1.2.3+",
            "release-1.2.3",
            "-1.2.3",
        ] {
            let err = SemVer::parse(text).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "input {:?}", text);
        }
    }

    #[test]
    fn test_parse_error_message_names_input() {
        let err = SemVer::parse("nope").unwrap_err();
        assert_eq!(err.to_string(), "nope is not a valid version");
    }

    #[test]
    fn test_parse_rejects_overflowing_component() {
        assert!(SemVer::parse("99999999999999999999999.0.0").is_err());
    }

    #[test]
    fn test_parse_lenient_defaults_missing_components() {
        assert_eq!(SemVer::parse_lenient("2").unwrap(), SemVer::new(2, 0, 0));
        assert_eq!(SemVer::parse_lenient("v2.4").unwrap(), SemVer::new(2, 4, 0));
        assert_eq!(
            SemVer::parse_lenient("2.4-rc").unwrap(),
            pre(2, 4, 0, "rc")
        );
        assert_eq!(SemVer::parse_lenient("2.4.6").unwrap(), SemVer::new(2, 4, 6));
        assert!(SemVer::parse_lenient("2.").is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["v0.0.1", "v1.2.3-alpha", "v1.2.3-rc.1+exp.sha.5114f85", "v10.20.30+meta"] {
            let v = SemVer::parse(text).unwrap();
            assert_eq!(v.to_string(), text);
            assert_eq!(SemVer::parse(&v.to_string()).unwrap(), v);
        }
    }

    #[test]
    fn test_from_str() {
        let v: SemVer = "v3.1.4-pi".parse().unwrap();
        assert_eq!(v, pre(3, 1, 4, "pi"));
    }

    #[test]
    fn test_increments_reset_lower_components() {
        let mut v = SemVer::new(1, 1, 0);
        v.next_patch().unwrap();
        assert_eq!(v.to_string(), "v1.1.1");
        v.next_minor().unwrap();
        assert_eq!(v.to_string(), "v1.2.0");
        v.next_major().unwrap();
        assert_eq!(v.to_string(), "v2.0.0");
    }

    #[test]
    fn test_increment_overflow_leaves_version_untouched() {
        let mut v = SemVer::new(1, 0, u64::MAX);
        let err = v.next_patch().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overflow);
        assert_eq!(v, SemVer::new(1, 0, u64::MAX));

        let mut v = SemVer::new(1, u64::MAX, 7);
        assert!(v.bump(VersionBump::Minor).is_err());
        assert_eq!(v, SemVer::new(1, u64::MAX, 7));

        let mut v = SemVer::new(u64::MAX, 2, 3);
        assert!(v.next_major().is_err());
        assert_eq!(v, SemVer::new(u64::MAX, 2, 3));

        let mut v = SemVer::new(1, 0, u64::MAX);
        v.next_minor().unwrap();
        assert_eq!(v, SemVer::new(1, 1, 0));
    }

    #[test]
    fn test_validate_identifiers() {
        for ok in ["alpha", "rc.1", "x-y.0.Z9", "-"] {
            assert!(validate_identifiers(ok).is_ok(), "{:?}", ok);
        }
        for bad in ["", "a.", ".a", "a..b", "be ta", "be_ta", "a+b"] {
            let err = validate_identifiers(bad).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Parse, "{:?}", bad);
        }
    }

    #[test]
    fn test_increment_keeps_pre_release() {
        let mut v = pre(1, 0, 0, "beta");
        v.bump(VersionBump::Patch).unwrap();
        assert_eq!(v.to_string(), "v1.0.1-beta");
    }

    #[test]
    fn test_set_only_overwrites_given_components() {
        let mut v = SemVer::new(1, 2, 3);
        v.set(None, Some(7), None);
        assert_eq!(v, SemVer::new(1, 7, 3));
        v.set(Some(4), None, Some(0));
        assert_eq!(v, SemVer::new(4, 7, 0));
    }

    #[test]
    fn test_set_and_clear_suffixes() {
        let mut v = SemVer::new(1, 0, 0);
        v.set_pre_release(Some("rc.1".to_string()));
        v.set_build_metadata(Some("b42".to_string()));
        assert_eq!(v.to_string(), "v1.0.0-rc.1+b42");
        v.set_pre_release(None);
        v.set_build_metadata(None);
        assert_eq!(v.to_string(), "v1.0.0");
    }

    #[test]
    fn test_major_dominates() {
        assert!(SemVer::new(1, 1, 0).lt(&SemVer::new(11, 0, 0)));
        assert!(SemVer::new(2, 0, 0).gt(&SemVer::new(1, 99, 99)));
        assert!(SemVer::new(1, 2, 0).gt(&SemVer::new(1, 1, 9)));
    }

    #[test]
    fn test_release_greater_than_pre_release() {
        assert!(SemVer::new(1, 0, 0).gt(&pre(1, 0, 0, "alpha")));
        assert!(pre(1, 0, 0, "alpha").lt(&SemVer::new(1, 0, 0)));
    }

    #[test]
    fn test_pre_release_case_insensitive_order() {
        assert!(pre(1, 0, 0, "alpha").lt(&pre(1, 0, 0, "RC")));
        assert!(pre(1, 0, 0, "rc").precedence_eq(&pre(1, 0, 0, "RC")));
    }

    #[test]
    fn test_build_metadata_ignored_for_precedence() {
        let a = SemVer::parse("1.0.0+a").unwrap();
        let b = SemVer::parse("1.0.0+b").unwrap();
        assert!(a.precedence_eq(&b));
        assert!(!a.lt(&b) && !a.gt(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_predicates_are_consistent() {
        let versions: Vec<SemVer> = [
            "v0.0.1", "v0.0.1-beta", "v0.0.1-beta.1", "v0.0.1-BETA.2", "v1.0.0", "v1.0.0+x",
            "v1.1.0-rc.10", "v1.1.0-rc.9", "v11.0.0",
        ]
        .iter()
        .map(|t| SemVer::parse(t).unwrap())
        .collect();

        for a in &versions {
            for b in &versions {
                let holds = [a.lt(b), a.precedence_eq(b), a.gt(b)];
                assert_eq!(holds.iter().filter(|h| **h).count(), 1, "{} vs {}", a, b);
                assert_eq!(a.ge(b), !a.lt(b));
                assert_eq!(a.le(b), !a.gt(b));
                assert_eq!(a.precedence_ne(b), !a.precedence_eq(b));
            }
        }
    }

    #[test]
    fn test_version_bump_from_str() {
        assert_eq!("major".parse::<VersionBump>().unwrap(), VersionBump::Major);
        assert_eq!("minor".parse::<VersionBump>().unwrap(), VersionBump::Minor);
        assert_eq!("patch".parse::<VersionBump>().unwrap(), VersionBump::Patch);
        let err = "bogus".parse::<VersionBump>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLevel);
    }
}

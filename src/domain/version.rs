//! SemVer 2.0 version grammar
//!
//! The value type plus every transformation the versioner needs: strict
//! parsing (optionally behind a tag prefix), canonical printing, precedence
//! ordering per semver.org §11, the minimum-(major, minor) floor, and the
//! height/auto-increment rewrite.

use crate::domain::MajorMinor;
use crate::error::{AutoverError, Result};
use std::cmp::Ordering;
use std::fmt;

/// A Semantic Versioning 2.0 version.
///
/// `pre_release` and `build_metadata` hold the dot-separated identifier
/// lists verbatim. Equality and ordering follow SemVer *precedence*: build
/// metadata is preserved for display but never participates in comparison.
#[derive(Debug, Clone, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre_release: Vec<String>,
    pub build_metadata: Vec<String>,
}

/// Version component bumped when commit height is applied to a release tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum AutoIncrement {
    Major,
    Minor,
    Patch,
}

impl Version {
    /// Create a release version with no pre-release or build identifiers.
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: Vec::new(),
            build_metadata: Vec::new(),
        }
    }

    /// Create a pre-release version from the given identifiers.
    pub fn pre_release(major: u64, minor: u64, patch: u64, identifiers: &[String]) -> Self {
        Version {
            major,
            minor,
            patch,
            pre_release: identifiers.to_vec(),
            build_metadata: Vec::new(),
        }
    }

    /// Parse a strict SemVer 2.0 version string.
    ///
    /// Returns `None` on anything the grammar rejects: malformed numerics,
    /// leading zeros, empty identifiers, illegal characters, trailing
    /// garbage.
    pub fn parse(text: &str) -> Option<Self> {
        Self::parse_prefixed(text, "")
    }

    /// Parse `text` as `prefix` followed by a strict SemVer 2.0 version.
    ///
    /// The prefix must match exactly: no trimming, no case folding. A tag
    /// name that does not carry the prefix is not a version.
    pub fn parse_prefixed(text: &str, prefix: &str) -> Option<Self> {
        let rest = text.strip_prefix(prefix)?;

        // The core contains only digits and dots, so the first '-' starts
        // the pre-release part and the first '+' starts build metadata.
        let (rest, build) = match rest.split_once('+') {
            Some((rest, build)) => (rest, Some(build)),
            None => (rest, None),
        };
        let (core, pre) = match rest.split_once('-') {
            Some((core, pre)) => (core, Some(pre)),
            None => (rest, None),
        };

        let mut numbers = core.split('.');
        let major = parse_numeric(numbers.next()?)?;
        let minor = parse_numeric(numbers.next()?)?;
        let patch = parse_numeric(numbers.next()?)?;
        if numbers.next().is_some() {
            return None;
        }

        let pre_release = match pre {
            Some(pre) => pre_release_identifiers(pre)?,
            None => Vec::new(),
        };
        let build_metadata = match build {
            Some(build) => build_identifiers(build)?,
            None => Vec::new(),
        };

        Some(Version {
            major,
            minor,
            patch,
            pre_release,
            build_metadata,
        })
    }

    /// A version is a pre-release iff it carries pre-release identifiers.
    pub fn is_prerelease(&self) -> bool {
        !self.pre_release.is_empty()
    }

    /// Lift this version to satisfy a minimum `(major, minor)` floor.
    ///
    /// Returns the version unchanged when it already meets the floor;
    /// otherwise returns `min.major.min.minor.0` pre-released with
    /// `default_prerelease`. Idempotent.
    pub fn satisfying(&self, min: MajorMinor, default_prerelease: &[String]) -> Version {
        if MajorMinor::new(self.major, self.minor) >= min {
            self.clone()
        } else {
            Version::pre_release(min.major, min.minor, 0, default_prerelease)
        }
    }

    /// Fold a commit height into the version.
    ///
    /// A pre-release version gains the height as one more numeric
    /// pre-release identifier. A release version is bumped at
    /// `auto_increment` (lower components zeroed), pre-released with
    /// `default_prerelease` plus the height, and loses its build metadata.
    /// Height zero on a release is the identity.
    pub fn with_height(
        &self,
        height: u64,
        auto_increment: AutoIncrement,
        default_prerelease: &[String],
    ) -> Version {
        if self.is_prerelease() {
            let mut pre_release = self.pre_release.clone();
            pre_release.push(height.to_string());
            return Version {
                major: self.major,
                minor: self.minor,
                patch: self.patch,
                pre_release,
                build_metadata: self.build_metadata.clone(),
            };
        }

        if height == 0 {
            return self.clone();
        }

        let (major, minor, patch) = match auto_increment {
            AutoIncrement::Major => (self.major + 1, 0, 0),
            AutoIncrement::Minor => (self.major, self.minor + 1, 0),
            AutoIncrement::Patch => (self.major, self.minor, self.patch + 1),
        };
        let mut pre_release = default_prerelease.to_vec();
        pre_release.push(height.to_string());
        Version {
            major,
            minor,
            patch,
            pre_release,
            build_metadata: Vec::new(),
        }
    }

    /// Replace the build metadata with the identifiers tokenized from
    /// `metadata`. An empty string is the identity.
    ///
    /// Untokenizable metadata is a configuration defect and surfaces as
    /// `InvalidConfiguration`; intake validation rejects it before any
    /// walk runs.
    pub fn with_build_metadata(&self, metadata: &str) -> Result<Version> {
        if metadata.is_empty() {
            return Ok(self.clone());
        }
        let identifiers = build_identifiers(metadata).ok_or_else(|| {
            AutoverError::invalid_config(format!(
                "'{}' is not valid SemVer build metadata",
                metadata
            ))
        })?;
        Ok(Version {
            major: self.major,
            minor: self.minor,
            patch: self.patch,
            pre_release: self.pre_release.clone(),
            build_metadata: identifiers,
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre_release.is_empty() {
            write!(f, "-{}", self.pre_release.join("."))?;
        }
        if !self.build_metadata.is_empty() {
            write!(f, "+{}", self.build_metadata.join("."))?;
        }
        Ok(())
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    /// SemVer 2.0 §11 precedence. Build metadata is ignored.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(
                || match (self.pre_release.is_empty(), other.pre_release.is_empty()) {
                    (true, true) => Ordering::Equal,
                    // A release outranks any pre-release of the same core.
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => compare_pre_release(&self.pre_release, &other.pre_release),
                },
            )
    }
}

fn compare_pre_release(a: &[String], b: &[String]) -> Ordering {
    for (left, right) in a.iter().zip(b.iter()) {
        let ordering = compare_identifier(left, right);
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    // A shorter list that is a prefix of a longer one is lower.
    a.len().cmp(&b.len())
}

fn compare_identifier(a: &str, b: &str) -> Ordering {
    match (numeric_value(a), numeric_value(b)) {
        (Some(left), Some(right)) => left.cmp(&right),
        // Numeric identifiers have lower precedence than alphanumeric ones.
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

fn numeric_value(identifier: &str) -> Option<u64> {
    if !identifier.is_empty() && identifier.bytes().all(|b| b.is_ascii_digit()) {
        identifier.parse().ok()
    } else {
        None
    }
}

/// Parse a `MAJOR`/`MINOR`/`PATCH` number: `0` or a digit run with no
/// leading zero.
pub(crate) fn parse_numeric(text: &str) -> Option<u64> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if text.len() > 1 && text.starts_with('0') {
        return None;
    }
    text.parse().ok()
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-'
}

/// Tokenize a dot-separated pre-release identifier list.
///
/// Identifiers are non-empty runs of `[0-9A-Za-z-]`; fully numeric
/// identifiers must not have leading zeros.
pub fn pre_release_identifiers(text: &str) -> Option<Vec<String>> {
    let mut identifiers = Vec::new();
    for part in text.split('.') {
        if !is_pre_release_identifier(part) {
            return None;
        }
        identifiers.push(part.to_string());
    }
    Some(identifiers)
}

/// Whether `text` is a single valid pre-release identifier.
pub fn is_pre_release_identifier(text: &str) -> bool {
    if text.is_empty() || !text.bytes().all(is_identifier_byte) {
        return false;
    }
    // "0" is fine, "007" is not; alphanumerics like "0a" are.
    if text.bytes().all(|b| b.is_ascii_digit()) {
        text.len() == 1 || !text.starts_with('0')
    } else {
        true
    }
}

/// Tokenize a dot-separated build metadata identifier list.
///
/// Identifiers are non-empty runs of `[0-9A-Za-z-]`; unlike pre-release
/// identifiers, leading zeros are allowed.
pub fn build_identifiers(text: &str) -> Option<Vec<String>> {
    let mut identifiers = Vec::new();
    for part in text.split('.') {
        if part.is_empty() || !part.bytes().all(is_identifier_byte) {
            return None;
        }
        identifiers.push(part.to_string());
    }
    Some(identifiers)
}

use crate::domain::version::parse_numeric;
use crate::error::AutoverError;
use std::fmt;
use std::str::FromStr;

/// A `(major, minor)` pair used as the minimum-version floor.
///
/// Ordered lexicographically: major first, then minor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct MajorMinor {
    pub major: u64,
    pub minor: u64,
}

impl MajorMinor {
    pub fn new(major: u64, minor: u64) -> Self {
        MajorMinor { major, minor }
    }
}

impl fmt::Display for MajorMinor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for MajorMinor {
    type Err = AutoverError;

    /// Parse `"MAJOR.MINOR"` with the same numeric rules as the version
    /// grammar (no leading zeros).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || {
            AutoverError::invalid_config(format!(
                "'{}' is not a minimum version; expected MAJOR.MINOR",
                s
            ))
        };
        let (major, minor) = s.split_once('.').ok_or_else(invalid)?;
        Ok(MajorMinor {
            major: parse_numeric(major).ok_or_else(invalid)?,
            minor: parse_numeric(minor).ok_or_else(invalid)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_zero_zero() {
        assert_eq!(MajorMinor::default(), MajorMinor::new(0, 0));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(MajorMinor::new(1, 9) < MajorMinor::new(2, 0));
        assert!(MajorMinor::new(2, 0) < MajorMinor::new(2, 1));
        assert!(MajorMinor::new(2, 1) >= MajorMinor::new(2, 1));
    }

    #[test]
    fn test_parse() {
        let parsed: MajorMinor = "2.0".parse().unwrap();
        assert_eq!(parsed, MajorMinor::new(2, 0));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for text in ["2", "2.", ".1", "2.0.0", "a.b", "02.1", "2.01", ""] {
            assert!(text.parse::<MajorMinor>().is_err(), "'{}' should fail", text);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(MajorMinor::new(3, 14).to_string(), "3.14");
    }
}

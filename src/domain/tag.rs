use crate::domain::Version;
use git2::Oid;

/// A git tag: its full name and the commit it points at.
///
/// For annotated tags `target` is the tagged commit, never the tag object
/// itself; the git view is responsible for peeling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub target: Oid,
}

impl Tag {
    pub fn new(name: impl Into<String>, target: Oid) -> Self {
        Tag {
            name: name.into(),
            target,
        }
    }

    /// The version this tag names, if the name is `tag_prefix` followed by
    /// a strict SemVer 2.0 version. Anything else is not a version tag.
    pub fn version(&self, tag_prefix: &str) -> Option<Version> {
        Version::parse_prefixed(&self.name, tag_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn oid(n: u8) -> Oid {
        Oid::from_bytes(&[n; 20]).unwrap()
    }

    #[test]
    fn test_version_with_empty_prefix() {
        let tag = Tag::new("1.2.3", oid(1));
        assert_eq!(tag.version("").unwrap().to_string(), "1.2.3");
    }

    #[test]
    fn test_version_with_prefix() {
        let tag = Tag::new("v1.2.3-rc.1", oid(1));
        assert_eq!(tag.version("v").unwrap().to_string(), "1.2.3-rc.1");
    }

    #[test]
    fn test_version_requires_exact_prefix() {
        let tag = Tag::new("1.2.3", oid(1));
        assert!(tag.version("v").is_none());

        let tag = Tag::new("release-1.2.3", oid(1));
        assert!(tag.version("v").is_none());
        assert_eq!(tag.version("release-").unwrap().to_string(), "1.2.3");
    }

    #[test]
    fn test_non_version_tag() {
        for name in ["nightly", "v1.2", "1.2.3rc1", "v 1.2.3"] {
            assert!(Tag::new(name, oid(1)).version("v").is_none());
        }
    }
}

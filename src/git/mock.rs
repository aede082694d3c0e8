use crate::domain::{Commit, Tag};
use crate::error::{AutoverError, Result};
use crate::git::GitView;
use git2::Oid;
use std::collections::HashMap;

/// In-memory implementation of the [GitView] trait for testing.
///
/// Holds a commit graph, a tag list, and a HEAD pointer, all populated by
/// the test before use. Tags keep their insertion order, so fixtures are
/// fully deterministic.
///
/// ```rust
/// # use autover::git::{GitView, MockGitView};
/// # use git2::Oid;
/// let root = Oid::from_bytes(&[1; 20]).unwrap();
/// let mut view = MockGitView::new();
/// view.add_commit(root, &[]);
/// view.add_tag("v1.0.0", root);
/// view.set_head(root);
///
/// assert_eq!(view.try_get_head().unwrap().unwrap().id, root);
/// assert_eq!(view.tags().unwrap().len(), 1);
/// ```
pub struct MockGitView {
    working_directory: bool,
    head: Option<Oid>,
    commits: HashMap<Oid, Vec<Oid>>,
    tags: Vec<Tag>,
}

impl MockGitView {
    /// An empty repository view: a working directory with no commits, no
    /// tags, and no HEAD.
    pub fn new() -> Self {
        MockGitView {
            working_directory: true,
            head: None,
            commits: HashMap::new(),
            tags: Vec::new(),
        }
    }

    /// A view over a directory that is not under git at all.
    pub fn non_working_directory() -> Self {
        MockGitView {
            working_directory: false,
            head: None,
            commits: HashMap::new(),
            tags: Vec::new(),
        }
    }

    /// Add a commit with the given parents (first parent first).
    pub fn add_commit(&mut self, id: Oid, parents: &[Oid]) {
        self.commits.insert(id, parents.to_vec());
    }

    /// Add a tag pointing at a commit.
    pub fn add_tag(&mut self, name: impl Into<String>, target: Oid) {
        self.tags.push(Tag::new(name, target));
    }

    /// Point HEAD at a commit previously added with `add_commit`.
    pub fn set_head(&mut self, id: Oid) {
        self.head = Some(id);
    }
}

impl Default for MockGitView {
    fn default() -> Self {
        Self::new()
    }
}

impl GitView for MockGitView {
    fn is_working_directory(&self) -> bool {
        self.working_directory
    }

    fn try_get_head(&self) -> Result<Option<Commit>> {
        match self.head {
            Some(id) => Ok(Some(self.lookup(id)?)),
            None => Ok(None),
        }
    }

    fn tags(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.clone())
    }

    fn lookup(&self, id: Oid) -> Result<Commit> {
        self.commits
            .get(&id)
            .map(|parents| Commit::new(id, parents.clone()))
            .ok_or_else(|| AutoverError::git_unavailable(format!("unknown commit {}", id)))
    }
}

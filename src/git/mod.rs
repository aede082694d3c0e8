//! Git view abstraction layer
//!
//! A read-only, trait-based snapshot of the facts the versioner needs from
//! a repository: whether the directory is under git at all, where HEAD is,
//! which tags exist, and commit parentage during the walk.
//!
//! Two implementations:
//!
//! - [Git2View]: the real thing, backed by the `git2` crate
//! - [MockGitView]: an in-memory graph for deterministic tests
//!
//! The view never mutates the repository and never touches remotes.

pub mod mock;
pub mod repository;

pub use mock::MockGitView;
pub use repository::Git2View;

use crate::domain::{Commit, Tag};
use crate::error::Result;
use git2::Oid;

/// Read-only queries against one repository snapshot.
///
/// All methods are pure functions of the on-disk state at call time.
/// Failures of the underlying git mechanism surface as
/// [crate::error::AutoverError::GitUnavailable]; "no commits yet" is not a
/// failure and is reported by [GitView::try_get_head] returning `None`.
pub trait GitView {
    /// Whether the directory this view was opened on is a git working
    /// directory.
    fn is_working_directory(&self) -> bool;

    /// The commit HEAD points at, or `None` in a repository with no
    /// commits yet.
    fn try_get_head(&self) -> Result<Option<Commit>>;

    /// Every tag in the repository, lightweight and annotated alike.
    /// Annotated tags are resolved to the commit they ultimately tag.
    fn tags(&self) -> Result<Vec<Tag>>;

    /// Resolve a commit id to the commit and its parents. Parents keep
    /// git's recorded order: first parent first.
    fn lookup(&self, id: Oid) -> Result<Commit>;
}

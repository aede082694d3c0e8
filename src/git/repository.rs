use crate::domain::{Commit, Tag};
use crate::error::{AutoverError, Result};
use crate::git::GitView;
use git2::{ErrorCode, Oid, Repository};
use std::path::Path;

/// Concrete implementation of the [GitView] trait using the git2 library.
///
/// The view wraps an opened `git2::Repository` and answers every query
/// from the on-disk snapshot; nothing is cached across calls and nothing
/// is ever written. Opening never fails: a directory that is not under
/// git produces a view whose `is_working_directory` is false, which the
/// versioner turns into its default-version path rather than an error.
pub struct Git2View {
    repo: Option<Repository>,
}

impl Git2View {
    /// Open a view over `work_dir`.
    ///
    /// Discovery semantics: the directory or any of its ancestors may hold
    /// the `.git` directory, so running from a subdirectory of a work tree
    /// behaves like git itself.
    pub fn open<P: AsRef<Path>>(work_dir: P) -> Self {
        Git2View {
            repo: Repository::discover(work_dir).ok(),
        }
    }

    fn repo(&self) -> Result<&Repository> {
        self.repo
            .as_ref()
            .ok_or_else(|| AutoverError::git_unavailable("not a git working directory"))
    }
}

impl GitView for Git2View {
    fn is_working_directory(&self) -> bool {
        self.repo.is_some()
    }

    fn try_get_head(&self) -> Result<Option<Commit>> {
        let repo = self.repo()?;
        let head = match repo.head() {
            Ok(head) => head,
            // A freshly initialized repository has a HEAD ref pointing at
            // a branch with no commits. That is "no commits yet", not a
            // failure.
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                return Ok(None)
            }
            Err(e) => return Err(e.into()),
        };
        let commit = head.peel_to_commit()?;
        let parents = commit.parent_ids().collect();
        Ok(Some(Commit::new(commit.id(), parents)))
    }

    fn tags(&self) -> Result<Vec<Tag>> {
        let repo = self.repo()?;
        let names = repo.tag_names(None)?;
        let mut tags = Vec::new();
        for name in names.iter().flatten() {
            let reference = match repo.find_reference(&format!("refs/tags/{}", name)) {
                Ok(reference) => reference,
                Err(_) => continue,
            };
            // Peeling resolves annotated tags to the commit they tag; a
            // tag pointing at a blob or tree cannot version anything and
            // is skipped.
            if let Ok(commit) = reference.peel_to_commit() {
                tags.push(Tag::new(name, commit.id()));
            }
        }
        Ok(tags)
    }

    fn lookup(&self, id: Oid) -> Result<Commit> {
        let commit = self.repo()?.find_commit(id)?;
        let parents = commit.parent_ids().collect();
        Ok(Commit::new(commit.id(), parents))
    }
}

//! The versioner: walk the commit graph, classify tags, derive a version
//!
//! One invocation is a straight pipeline: guard the degenerate cases,
//! take in the version tags, walk the graph from HEAD collecting
//! candidates, order them, select, reconcile against the minimum floor,
//! fold in the height, append build metadata. The only state is the
//! walk's worklist and visited set, both scoped to the call; re-running on
//! an unchanged repository yields an identical result.

pub mod candidate;

pub use candidate::Candidate;

use crate::config::VersionerOptions;
use crate::domain::{MajorMinor, Version};
use crate::error::{AutoverError, Result};
use crate::git::{Git2View, GitView};
use crate::logging::Logger;
use git2::Oid;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Warning code emitted when the target directory is not under git.
pub const WARN_NOT_A_WORKING_DIRECTORY: u32 = 1001;

/// A tag that survived intake: its raw name plus the version it parses to
/// under the configured prefix.
#[derive(Debug, Clone)]
struct VersionedTag {
    name: String,
    target: Oid,
    version: Version,
}

/// Computes the version of a working directory from its git history.
///
/// Construction validates the options; a constructed versioner can only
/// fail on git problems. The computation is single-threaded and
/// deterministic: walk order and the index tie-break depend on it.
pub struct Versioner {
    options: VersionerOptions,
}

impl Versioner {
    /// Validate `options` and build a versioner around them.
    pub fn new(options: VersionerOptions) -> Result<Self> {
        options.validate()?;
        Ok(Versioner { options })
    }

    pub fn options(&self) -> &VersionerOptions {
        &self.options
    }

    /// Compute the version visible through `view`.
    ///
    /// Degenerate repositories never fail: a directory that is not under
    /// git yields the default version with warning code 1001, and a
    /// repository with no commits yields it with an info log. Only a git
    /// failure mid-query aborts the computation.
    pub fn compute<V: GitView>(&self, view: &V, log: &dyn Logger) -> Result<Version> {
        if !view.is_working_directory() {
            log.warn(
                WARN_NOT_A_WORKING_DIRECTORY,
                "not a git working directory; using the default version",
            );
            return self.default_version();
        }
        let head = match view.try_get_head()? {
            Some(head) => head,
            None => {
                log.info("repository has no commits yet; using the default version");
                return self.default_version();
            }
        };

        let tags = self.take_in_tags(view, log)?;
        let mut candidates = self.walk(view, head.id, &tags, log)?;
        candidate::sort_candidates(&mut candidates);

        let selected = match candidates.iter().rev().find(|c| c.is_release()) {
            Some(release) => release,
            // No release tag is reachable; the highest pre-release or the
            // synthetic root serves as the selected candidate.
            None => candidates
                .last()
                .ok_or_else(|| AutoverError::git_unavailable("walk produced no candidates"))?,
        };

        if log.is_debug() {
            let others: Vec<Candidate> = candidates
                .iter()
                .filter(|c| c.index != selected.index)
                .cloned()
                .collect();
            if !others.is_empty() {
                log.debug("candidates not selected:");
                for line in candidate::render_table(&others) {
                    log.debug(&line);
                }
            }
        }
        if selected.is_synthetic() {
            log.info(&format!(
                "no version tags reachable from HEAD; starting from {} at height {}",
                selected.version, selected.height
            ));
        } else {
            log.info(&format!(
                "selected tag '{}' ({}) at height {}",
                selected.tag,
                selected.commit.short_id(),
                selected.height
            ));
        }

        // The highest pre-release candidate drives the floor
        // reconciliation; with none, the selected candidate does.
        let pre_release_version = candidates
            .iter()
            .rev()
            .find(|c| c.version.is_prerelease())
            .map(|c| &c.version)
            .unwrap_or(&selected.version);
        let effective_min = reconcile_minimum(
            MajorMinor::new(pre_release_version.major, pre_release_version.minor),
            self.options.min_major_minor,
        );

        let satisfied = selected
            .version
            .satisfying(effective_min, &self.options.default_prerelease);
        if satisfied != selected.version {
            log.info(&format!(
                "bumped {} to {} to satisfy the minimum version {}",
                selected.version, satisfied, effective_min
            ));
        }

        let mut version = satisfied;
        if !self.options.ignore_height && selected.height > 0 {
            version = version.with_height(
                selected.height,
                self.options.auto_increment,
                &self.options.default_prerelease,
            );
        }
        let version = version.with_build_metadata(&self.options.build_metadata)?;

        log.info(&format!("computed version {}", version));
        Ok(version)
    }

    /// The version reported when there is no history to walk:
    /// `0.0.0-<default pre-release>` plus any configured build metadata.
    fn default_version(&self) -> Result<Version> {
        Version::pre_release(0, 0, 0, &self.options.default_prerelease)
            .with_build_metadata(&self.options.build_metadata)
    }

    /// Keep the tags that parse as versions under the configured prefix,
    /// sorted ascending by (version, name) for deterministic processing.
    fn take_in_tags<V: GitView>(&self, view: &V, log: &dyn Logger) -> Result<Vec<VersionedTag>> {
        let mut kept = Vec::new();
        for tag in view.tags()? {
            match tag.version(&self.options.tag_prefix) {
                Some(version) => kept.push(VersionedTag {
                    name: tag.name,
                    target: tag.target,
                    version,
                }),
                None => {
                    if log.is_debug() {
                        log.debug(&format!("ignoring tag '{}': not a version", tag.name));
                    }
                }
            }
        }
        kept.sort_by(|a, b| {
            a.version
                .cmp(&b.version)
                .then_with(|| a.name.cmp(&b.name))
        });
        Ok(kept)
    }

    /// Reverse depth-first walk from HEAD.
    ///
    /// The worklist is LIFO and parents are pushed in reverse, so
    /// first-parent paths are explored before alternatives; the height
    /// recorded for a commit is the height along the path that first
    /// discovered it. A release tag truncates its path. A parentless
    /// commit with no release tag contributes the synthetic root
    /// candidate, one edge below the commit itself.
    fn walk<V: GitView>(
        &self,
        view: &V,
        head: Oid,
        tags: &[VersionedTag],
        log: &dyn Logger,
    ) -> Result<Vec<Candidate>> {
        let mut tags_by_target: HashMap<Oid, Vec<&VersionedTag>> = HashMap::new();
        for tag in tags {
            tags_by_target.entry(tag.target).or_default().push(tag);
        }

        let mut candidates: Vec<Candidate> = Vec::new();
        let mut visited: HashSet<Oid> = HashSet::new();
        let mut worklist: Vec<(Oid, u64)> = vec![(head, 0)];

        while let Some((id, height)) = worklist.pop() {
            if !visited.insert(id) {
                continue;
            }
            let commit = view.lookup(id)?;
            if log.is_trace() {
                log.trace(&format!(
                    "visiting {} at height {}",
                    commit.short_id(),
                    height
                ));
            }

            let tags_here = tags_by_target.get(&id).map(Vec::as_slice).unwrap_or(&[]);
            for tag in tags_here {
                let index = candidates.len();
                candidates.push(Candidate {
                    commit: commit.clone(),
                    height,
                    tag: tag.name.clone(),
                    version: tag.version.clone(),
                    index,
                });
            }
            if tags_here.iter().any(|t| !t.version.is_prerelease()) {
                // A release tag ends the search along this path.
                continue;
            }

            if commit.is_root() {
                let index = candidates.len();
                candidates.push(Candidate {
                    commit: commit.clone(),
                    height: height + 1,
                    tag: String::new(),
                    version: Version::pre_release(0, 0, 0, &self.options.default_prerelease),
                    index,
                });
            } else {
                for parent in commit.parents.iter().rev() {
                    worklist.push((*parent, height + 1));
                }
            }
        }
        Ok(candidates)
    }
}

/// Combine the pre-release candidate's `(major, minor)` with the
/// configured minimum into the effective floor.
fn reconcile_minimum(pre_release: MajorMinor, minimum: MajorMinor) -> MajorMinor {
    if minimum.major == pre_release.major {
        MajorMinor::new(pre_release.major, pre_release.minor.max(minimum.minor))
    } else if minimum.major > pre_release.major {
        minimum
    } else {
        pre_release
    }
}

/// Compute the version of `work_dir` in one call.
///
/// Opens a [Git2View] over the directory, validates `options`, runs the
/// pipeline, and returns the resulting version. This is the whole public
/// surface a build pipeline needs.
pub fn get_version<P: AsRef<Path>>(
    work_dir: P,
    options: VersionerOptions,
    log: &dyn Logger,
) -> Result<Version> {
    let versioner = Versioner::new(options)?;
    let view = Git2View::open(work_dir);
    versioner.compute(&view, log)
}

use crate::domain::{Commit, Version};

/// A commit considered for selection during the walk.
///
/// `tag` is empty only for the synthetic root candidate. `index` is the
/// insertion position in the candidate list and is the sole tie-breaker
/// between candidates whose versions compare equal.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub commit: Commit,
    pub height: u64,
    pub tag: String,
    pub version: Version,
    pub index: usize,
}

impl Candidate {
    pub fn is_release(&self) -> bool {
        !self.version.is_prerelease()
    }

    pub fn is_synthetic(&self) -> bool {
        self.tag.is_empty()
    }

    fn tag_label(&self) -> &str {
        if self.is_synthetic() {
            "(root)"
        } else {
            &self.tag
        }
    }
}

/// Order candidates by version ascending, then insertion index descending.
///
/// The index-descending leg means the later-discovered candidate wins when
/// two share a version (the same tag annotated and lightweight, duplicate
/// tags on different commits). This tie-break is part of the selection
/// contract and must not change.
pub fn sort_candidates(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| {
        a.version
            .cmp(&b.version)
            .then_with(|| b.index.cmp(&a.index))
    });
}

/// Render candidates as column-aligned lines for debug output.
pub fn render_table(candidates: &[Candidate]) -> Vec<String> {
    let height_width = candidates
        .iter()
        .map(|c| c.height.to_string().len())
        .max()
        .unwrap_or(1);
    let tag_width = candidates
        .iter()
        .map(|c| c.tag_label().len())
        .max()
        .unwrap_or(0);

    candidates
        .iter()
        .map(|c| {
            format!(
                "{} height {:>hw$}  {:<tw$}  {}",
                c.commit.short_id(),
                c.height,
                c.tag_label(),
                c.version,
                hw = height_width,
                tw = tag_width,
            )
        })
        .collect()
}

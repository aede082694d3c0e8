use git2::Oid;

/// A commit as the walker sees it: an identity plus its parent ids in the
/// order git records them (first parent first).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    pub id: Oid,
    pub parents: Vec<Oid>,
}

impl Commit {
    pub fn new(id: Oid, parents: Vec<Oid>) -> Self {
        Commit { id, parents }
    }

    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }

    /// Abbreviated 7-hex id, used only in log output.
    pub fn short_id(&self) -> String {
        let full = self.id.to_string();
        full[..7].to_string()
    }
}

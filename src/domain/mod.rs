//! Domain values - pure data and version rules independent of git I/O

pub mod commit;
pub mod major_minor;
pub mod tag;
pub mod version;

pub use commit::Commit;
pub use major_minor::MajorMinor;
pub use tag::Tag;
pub use version::{AutoIncrement, Version};

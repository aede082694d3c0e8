pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod logging;
pub mod versioner;

pub use config::VersionerOptions;
pub use domain::{AutoIncrement, MajorMinor, Version};
pub use error::{AutoverError, Result};
pub use logging::{FacadeLogger, Logger, NullLogger};
pub use versioner::{get_version, Versioner};

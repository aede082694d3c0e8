//! Configuration intake
//!
//! The versioner consumes a plain [VersionerOptions] record; it reads no
//! environment variables or files itself. The CLI assembles the record
//! from an optional `autover.toml` (working directory first, then the
//! user config directory) overlaid with command-line flags, then runs
//! [VersionerOptions::validate] so that bad build metadata or identifiers
//! fail before any repository work happens.

use crate::domain::version::{self, AutoIncrement};
use crate::domain::MajorMinor;
use crate::error::{AutoverError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// The configuration record for one version computation.
#[derive(Debug, Clone)]
pub struct VersionerOptions {
    /// Exact byte prefix stripped from tag names before parsing. May be
    /// empty.
    pub tag_prefix: String,

    /// Floor applied to the selected release version.
    pub min_major_minor: MajorMinor,

    /// Build metadata appended to the final version. Empty means none.
    pub build_metadata: String,

    /// Component bumped when height is applied to a release tag.
    pub auto_increment: AutoIncrement,

    /// Pre-release identifiers for the synthetic default version and for
    /// release bumps.
    pub default_prerelease: Vec<String>,

    /// Drop commit height from the final version entirely.
    pub ignore_height: bool,
}

impl Default for VersionerOptions {
    fn default() -> Self {
        VersionerOptions {
            tag_prefix: "v".to_string(),
            min_major_minor: MajorMinor::default(),
            build_metadata: String::new(),
            auto_increment: AutoIncrement::Patch,
            default_prerelease: vec!["alpha".to_string(), "0".to_string()],
            ignore_height: false,
        }
    }
}

impl VersionerOptions {
    /// Reject configuration the grammar cannot work with.
    ///
    /// Fatal and preventable per the error contract: this is the only
    /// place `InvalidConfiguration` should ever originate from during
    /// normal operation.
    pub fn validate(&self) -> Result<()> {
        if !self.build_metadata.is_empty()
            && version::build_identifiers(&self.build_metadata).is_none()
        {
            return Err(AutoverError::invalid_config(format!(
                "build metadata '{}' is not a dot-separated list of SemVer identifiers",
                self.build_metadata
            )));
        }
        if self.default_prerelease.is_empty() {
            return Err(AutoverError::invalid_config(
                "default pre-release identifier list must not be empty",
            ));
        }
        for identifier in &self.default_prerelease {
            if !version::is_pre_release_identifier(identifier) {
                return Err(AutoverError::invalid_config(format!(
                    "'{}' is not a valid pre-release identifier",
                    identifier
                )));
            }
        }
        Ok(())
    }
}

/// The subset of options representable in `autover.toml`. Every key is
/// optional; absent keys keep their defaults. Unknown keys are rejected so
/// typos fail loudly.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub tag_prefix: Option<String>,
    pub min_version: Option<String>,
    pub build_metadata: Option<String>,
    pub auto_increment: Option<AutoIncrement>,
    pub default_prerelease: Option<Vec<String>>,
    pub ignore_height: Option<bool>,
}

impl FileConfig {
    /// Overlay the file values onto `options`.
    pub fn apply(self, options: &mut VersionerOptions) -> Result<()> {
        if let Some(tag_prefix) = self.tag_prefix {
            options.tag_prefix = tag_prefix;
        }
        if let Some(min_version) = self.min_version {
            options.min_major_minor = min_version.parse()?;
        }
        if let Some(build_metadata) = self.build_metadata {
            options.build_metadata = build_metadata;
        }
        if let Some(auto_increment) = self.auto_increment {
            options.auto_increment = auto_increment;
        }
        if let Some(default_prerelease) = self.default_prerelease {
            options.default_prerelease = default_prerelease;
        }
        if let Some(ignore_height) = self.ignore_height {
            options.ignore_height = ignore_height;
        }
        Ok(())
    }
}

/// Load options from a config file, falling back to defaults.
///
/// Search order: the explicit `config_path` if given, then `autover.toml`
/// in the current directory, then `autover.toml` in the platform config
/// directory. A missing file is not an error; an unreadable or
/// unparseable one is.
pub fn load(config_path: Option<&Path>) -> Result<VersionerOptions> {
    let text = if let Some(path) = config_path {
        Some(fs::read_to_string(path)?)
    } else if Path::new("autover.toml").exists() {
        Some(fs::read_to_string("autover.toml")?)
    } else if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("autover.toml");
        if path.exists() {
            Some(fs::read_to_string(path)?)
        } else {
            None
        }
    } else {
        None
    };

    let mut options = VersionerOptions::default();
    if let Some(text) = text {
        let file: FileConfig = toml::from_str(&text)
            .map_err(|e| AutoverError::invalid_config(format!("cannot parse config: {}", e)))?;
        file.apply(&mut options)?;
    }
    Ok(options)
}

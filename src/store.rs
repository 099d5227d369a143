//! Version file persistence and the operations a driver invokes on it.
//!
//! Every mutating operation validates first and writes last, so a failed call
//! leaves the version file untouched.

use crate::domain::{validate_identifiers, SemVer, VersionBump};
use crate::error::{Result, VersionError};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Default location of the version file
pub const DEFAULT_VERSION_FILE: &str = "./version.json";

const DEFAULT_INDENT: usize = 4;

/// Version before and after a mutating operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionChange {
    pub previous: SemVer,
    pub current: SemVer,
}

impl fmt::Display for VersionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "previous version: {}\nnew version: {}",
            self.previous, self.current
        )
    }
}

/// A version record bound to a file location
#[derive(Debug, Clone)]
pub struct VersionStore {
    path: PathBuf,
    indent: usize,
    lenient: bool,
}

impl VersionStore {
    /// Create a store for the version file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        VersionStore {
            path: path.into(),
            indent: DEFAULT_INDENT,
            lenient: false,
        }
    }

    /// Set the number of spaces used to pretty-print the record
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Accept incomplete versions such as `"2.4"` in [`VersionStore::apply_version`]
    pub fn with_lenient_parsing(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the current version from the file
    pub fn read(&self) -> Result<SemVer> {
        if !self.exists() {
            return Err(VersionError::NotFound(self.display_path()));
        }

        debug!(path = %self.path.display(), "Reading version file");
        let content = fs::read_to_string(&self.path)?;
        SemVer::from_json(&content).map_err(|e| VersionError::InvalidRecord {
            path: self.display_path(),
            reason: e.to_string(),
        })
    }

    /// Overwrite the file with the record form of `version`
    pub fn write(&self, version: &SemVer) -> Result<()> {
        let indent = " ".repeat(self.indent);
        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
        version
            .to_record()
            .serialize(&mut serializer)
            .map_err(|e| VersionError::InvalidRecord {
                path: self.display_path(),
                reason: e.to_string(),
            })?;
        buffer.push(b'\n');

        debug!(path = %self.path.display(), version = %version, "Writing version file");
        fs::write(&self.path, buffer)?;
        Ok(())
    }

    /// Create the version file with `v0.0.1`.
    ///
    /// Fails if the file already exists unless `force` is set.
    pub fn initialize(&self, force: bool) -> Result<SemVer> {
        if self.exists() && !force {
            return Err(VersionError::AlreadyExists(self.display_path()));
        }

        let version = SemVer::new(0, 0, 1);
        self.write(&version)?;
        info!(path = %self.path.display(), version = %version, "Initialized version file");
        Ok(version)
    }

    /// Increment the component named by `level` (`major`, `minor` or `patch`)
    pub fn increment(&self, level: &str) -> Result<VersionChange> {
        let previous = self.read()?;
        let level: VersionBump = level.parse()?;
        let mut current = previous.clone();
        current.bump(level)?;
        self.commit(previous, current)
    }

    /// Replace the pre-release; `None` clears it.
    ///
    /// Refuses to lower the version unless `force` is set.
    pub fn apply_pre_release(&self, pre_release: Option<&str>, force: bool) -> Result<VersionChange> {
        let previous = self.read()?;
        if let Some(value) = pre_release {
            validate_identifiers(value)?;
        }
        let mut current = previous.clone();
        current.set_pre_release(pre_release.map(str::to_string));
        self.guard_regression(&previous, &current, force)?;
        self.commit(previous, current)
    }

    /// Replace the whole version with the one parsed from `text`.
    ///
    /// Refuses to lower the version unless `force` is set.
    pub fn apply_version(&self, text: &str, force: bool) -> Result<VersionChange> {
        let previous = self.read()?;
        let current = if self.lenient {
            SemVer::parse_lenient(text)?
        } else {
            SemVer::parse(text)?
        };
        self.guard_regression(&previous, &current, force)?;
        self.commit(previous, current)
    }

    /// Replace the build metadata; `None` clears it
    pub fn apply_build_metadata(&self, build_metadata: Option<&str>) -> Result<VersionChange> {
        let previous = self.read()?;
        if let Some(value) = build_metadata {
            validate_identifiers(value)?;
        }
        let mut current = previous.clone();
        current.set_build_metadata(build_metadata.map(str::to_string));
        self.commit(previous, current)
    }

    fn guard_regression(&self, previous: &SemVer, current: &SemVer, force: bool) -> Result<()> {
        if !force && current.lt(previous) {
            warn!(current = %previous, requested = %current, "Rejected version regression");
            return Err(VersionError::regression(previous, current));
        }
        Ok(())
    }

    fn commit(&self, previous: SemVer, current: SemVer) -> Result<VersionChange> {
        self.write(&current)?;
        info!(previous = %previous, current = %current, "Updated version");
        Ok(VersionChange { previous, current })
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }
}

impl Default for VersionStore {
    fn default() -> Self {
        Self::new(DEFAULT_VERSION_FILE)
    }
}

//! Command-line driver logic
//!
//! Maps the selected operation onto a [`VersionStore`] call and renders the
//! outcome as the text shown to the user. Kept apart from clap so the
//! workflow can be driven programmatically.

use crate::error::Result;
use crate::store::VersionStore;

/// The single operation selected on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Show the current version
    Show,
    /// Create the version file with `v0.0.1`
    Init,
    /// Increment `major`, `minor` or `patch`
    Increment(String),
    /// Replace the pre-release; an empty value clears it
    PreRelease(String),
    /// Replace the whole version
    Set(String),
    /// Replace the build metadata; an empty value clears it
    Build(String),
}

/// Arguments for a driver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunArgs {
    pub operation: Operation,

    /// Allow reinitialising and lowering the version
    pub force: bool,
}

/// Run one operation against `store` and return the text to display
pub fn run(store: &VersionStore, args: &RunArgs) -> Result<String> {
    let force = args.force;
    match &args.operation {
        Operation::Show => {
            let version = store.read()?;
            Ok(format!("current version: {}", version))
        }
        Operation::Init => {
            let version = store.initialize(force)?;
            Ok(format!(
                "version file {} created with version: {}",
                store.path().display(),
                version
            ))
        }
        Operation::Increment(level) => Ok(store.increment(level)?.to_string()),
        Operation::PreRelease(value) => {
            Ok(store.apply_pre_release(non_empty(value), force)?.to_string())
        }
        Operation::Set(text) => Ok(store.apply_version(text, force)?.to_string()),
        Operation::Build(value) => Ok(store.apply_build_metadata(non_empty(value))?.to_string()),
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

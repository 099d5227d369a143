//! Domain logic - the version value type, independent of storage

pub mod prerelease;
pub mod record;
pub mod version;

pub use version::{validate_identifiers, SemVer, VersionBump};

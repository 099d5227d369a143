pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod store;
pub mod ui;

pub use domain::{SemVer, VersionBump};
pub use error::{ErrorKind, Result, VersionError};
pub use store::{VersionChange, VersionStore};

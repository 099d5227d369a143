use thiserror::Error;

/// Unified error type for version-manager operations
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("{0} is not a valid version")]
    Parse(String),

    #[error("Invalid JSON: {0}")]
    Decode(String),

    #[error("Invalid version structure: {0}")]
    Structure(String),

    #[error("{0} is not a valid version file, use --init to create one")]
    NotFound(String),

    #[error("{0} already exists, use --force to reinitialize it")]
    AlreadyExists(String),

    #[error("Invalid version file {path}: {reason}")]
    InvalidRecord { path: String, reason: String },

    #[error("Version {0} cannot be incremented, use one of major|minor|patch")]
    InvalidLevel(String),

    #[error("Cannot increment {0}: component is already at its maximum value")]
    Overflow(String),

    #[error("{new} is lower than the current version {current}, use --force to apply it anyway")]
    Regression { current: String, new: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Stable tag identifying which kind of failure a [`VersionError`] is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Parse,
    Decode,
    Structure,
    NotFound,
    AlreadyExists,
    InvalidRecord,
    InvalidLevel,
    Overflow,
    Regression,
    Config,
    Io,
}

/// Convenience type alias for Results in version-manager
pub type Result<T> = std::result::Result<T, VersionError>;

impl VersionError {
    /// Create a parse error for the rejected input text
    pub fn parse(text: impl Into<String>) -> Self {
        VersionError::Parse(text.into())
    }

    /// Create a decode error with context
    pub fn decode(msg: impl Into<String>) -> Self {
        VersionError::Decode(msg.into())
    }

    /// Create a structure error with context
    pub fn structure(msg: impl Into<String>) -> Self {
        VersionError::Structure(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        VersionError::Config(msg.into())
    }

    pub fn regression(current: impl ToString, new: impl ToString) -> Self {
        VersionError::Regression {
            current: current.to_string(),
            new: new.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            VersionError::Parse(_) => ErrorKind::Parse,
            VersionError::Decode(_) => ErrorKind::Decode,
            VersionError::Structure(_) => ErrorKind::Structure,
            VersionError::NotFound(_) => ErrorKind::NotFound,
            VersionError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            VersionError::InvalidRecord { .. } => ErrorKind::InvalidRecord,
            VersionError::InvalidLevel(_) => ErrorKind::InvalidLevel,
            VersionError::Overflow(_) => ErrorKind::Overflow,
            VersionError::Regression { .. } => ErrorKind::Regression,
            VersionError::Config(_) => ErrorKind::Config,
            VersionError::Io(_) => ErrorKind::Io,
        }
    }
}

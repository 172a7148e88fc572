//! Settings persistence errors.

/// What went wrong while loading or saving settings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum StorageErrorKind {
    /// The settings file exists but could not be read
    #[display("cannot read {}: {}", path, reason)]
    Read {
        /// Settings file
        path: String,
        /// OS error message
        reason: String,
    },
    /// The settings file is not valid TOML for the stored keys
    #[display("{} is not a valid settings file: {}", path, reason)]
    Parse {
        /// Settings file
        path: String,
        /// Parser message
        reason: String,
    },
    /// The settings could not be encoded as TOML
    #[display("cannot encode settings: {}", _0)]
    Encode(String),
    /// A directory, temp file or rename failed while saving
    #[display("cannot write {}: {}", path, reason)]
    Write {
        /// Path being created or replaced
        path: String,
        /// OS error message
        reason: String,
    },
    /// The store cannot be used at all (no config directory, poisoned lock)
    #[display("settings store unavailable: {}", _0)]
    Unavailable(String),
}

/// Settings storage failure.
///
/// # Examples
///
/// ```
/// use postwright_error::{StorageError, StorageErrorKind};
///
/// let err = StorageError::new(StorageErrorKind::Parse {
///     path: "/tmp/settings.toml".to_string(),
///     reason: "expected `=`".to_string(),
/// });
/// assert_eq!(err.path(), Some("/tmp/settings.toml"));
/// assert!(err.to_string().contains("is not a valid settings file"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Storage Error: {} at line {} in {}", kind, line, file)]
pub struct StorageError {
    /// What went wrong
    pub kind: StorageErrorKind,
    /// Line number where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl StorageError {
    /// Wrap a kind, capturing the caller's location.
    #[track_caller]
    pub fn new(kind: StorageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// What went wrong.
    pub fn kind(&self) -> &StorageErrorKind {
        &self.kind
    }

    /// The file involved, when the failure concerns one.
    pub fn path(&self) -> Option<&str> {
        match &self.kind {
            StorageErrorKind::Read { path, .. }
            | StorageErrorKind::Parse { path, .. }
            | StorageErrorKind::Write { path, .. } => Some(path),
            StorageErrorKind::Encode(_) | StorageErrorKind::Unavailable(_) => None,
        }
    }
}

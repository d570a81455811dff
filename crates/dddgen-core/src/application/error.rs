//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApplicationError {
    /// The input collaborator returned nothing (dismissed prompt, blank answer).
    #[error("Operation cancelled: no {field} given")]
    UserCancelled { field: String },

    /// Directory creation or file write failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemFailure { path: PathBuf, reason: String },

    /// The destination root does not exist.
    #[error("Workspace folder not found: {path}")]
    WorkspaceMissing { path: PathBuf },

    /// The settings store could not be read or written.
    #[error("Settings error for '{key}': {reason}")]
    ConfigStore { key: String, reason: String },

    /// A settings key outside the known set.
    #[error("Unknown settings key: {0}")]
    UnknownConfigKey(String),

    /// Store access failed (lock poisoned).
    #[error("Settings store is unavailable")]
    StoreLockError,
}

impl ApplicationError {
    pub fn cancelled(field: impl Into<String>) -> Self {
        Self::UserCancelled {
            field: field.into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::UserCancelled { field } => vec![
                format!("Pass the {field} as an argument to skip the prompt"),
                "Nothing was written".into(),
            ],
            Self::FilesystemFailure { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Files written before the failure were kept".into(),
            ],
            Self::WorkspaceMissing { path } => vec![
                format!("Create {} first or pick another folder", path.display()),
                "Use --root DIR to choose the workspace folder".into(),
            ],
            Self::ConfigStore { .. } => vec![
                "Check the settings file: dddgen config path".into(),
                "Reset a value with: dddgen config set <key> <value>".into(),
            ],
            Self::UnknownConfigKey(_) => vec!["Known keys: language, package".into()],
            Self::StoreLockError => vec![
                "The settings store is locked".into(),
                "Try again in a moment".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UserCancelled { .. } => ErrorCategory::Cancelled,
            Self::WorkspaceMissing { .. } => ErrorCategory::NotFound,
            Self::ConfigStore { .. } => ErrorCategory::Configuration,
            Self::UnknownConfigKey(_) => ErrorCategory::Validation,
            Self::FilesystemFailure { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_names_the_field() {
        let err = ApplicationError::cancelled("entity name");
        assert_eq!(err.to_string(), "Operation cancelled: no entity name given");
        assert_eq!(err.category(), ErrorCategory::Cancelled);
    }

    #[test]
    fn workspace_missing_is_not_found() {
        let err = ApplicationError::WorkspaceMissing {
            path: PathBuf::from("/nope"),
        };
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("--root")));
    }
}

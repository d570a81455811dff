// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable and comparable (tests match on them directly)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Name must not be empty")]
    EmptyName,

    #[error("Unknown target language: {0}")]
    UnknownLanguage(String),

    #[error("Unknown artifact kind: {0}")]
    UnknownArtifactKind(String),

    #[error("Invalid package identifier '{value}': {reason}")]
    InvalidPackageIdentifier { value: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Duplicate path in generation plan: {path}")]
    DuplicatePath { path: String },

    #[error("Generation plan is empty")]
    EmptyPlan,

    #[error("Path leaves the target folder: {path}")]
    PathEscapesRoot { path: String },

    // ========================================================================
    // Constraint Violations
    // ========================================================================
    #[error("A package identifier is required for Java output")]
    MissingPackageIdentifier,

    #[error("'{0}' is not a single-file artifact")]
    NotAFileArtifact(String),

    #[error("Template placeholder '{{{{{placeholder}}}}}' has no value")]
    UnresolvedPlaceholder { placeholder: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyName => vec![
                "Provide a non-empty name".into(),
                "Example: dddgen entity Order".into(),
            ],
            Self::UnknownLanguage(lang) => vec![
                format!("'{lang}' is not a supported target language"),
                "Supported languages: typescript (ts), csharp (cs), java".into(),
            ],
            Self::UnknownArtifactKind(kind) => vec![
                format!("'{kind}' is not a known artifact kind"),
                "Known kinds: entity, repository, use-case, controller, project".into(),
            ],
            Self::InvalidPackageIdentifier { .. } => vec![
                "Use a dotted package name such as com.example.shop".into(),
                "Segments must be non-empty and contain no slashes or spaces".into(),
            ],
            Self::MissingPackageIdentifier => vec![
                "Java output needs a package identifier".into(),
                "Try: dddgen language java --package com.example.shop".into(),
            ],
            Self::AbsolutePathNotAllowed { .. } => vec![
                "Names are created inside the target folder; drop the leading '/'".into(),
                "Use --root to choose a different folder".into(),
            ],
            Self::PathEscapesRoot { .. } => vec![
                "Names must not contain '..' segments".into(),
                "Example: dddgen entity Order".into(),
            ],
            Self::NotAFileArtifact(_) => vec!["Use `dddgen project` for whole-project scaffolds".into()],
            Self::UnresolvedPlaceholder { .. } => {
                vec!["A built-in template is inconsistent; please report this issue".into()]
            }
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyName
            | Self::UnknownLanguage(_)
            | Self::UnknownArtifactKind(_)
            | Self::InvalidPackageIdentifier { .. }
            | Self::MissingPackageIdentifier
            | Self::AbsolutePathNotAllowed { .. }
            | Self::PathEscapesRoot { .. }
            | Self::NotAFileArtifact(_) => ErrorCategory::Validation,
            Self::DuplicatePath { .. }
            | Self::EmptyPlan
            | Self::UnresolvedPlaceholder { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}

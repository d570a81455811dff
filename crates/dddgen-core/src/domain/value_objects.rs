//! Domain value objects: TargetLanguage, ArtifactKind, ArtifactName,
//! PackageIdentifier.
//!
//! # Design
//!
//! These are pure value types: equality by value, no identity. They hold NO
//! layout or template knowledge. Directory topologies live in `layout.rs` and
//! source skeletons live in `template/`. This file's only job is to define
//! the types, their string representations, and their parsers.
//!
//! # Adding a New Language
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, `display_name`, `file_extension` and `FromStr` arms
//! 3. Add a `LayoutDef` in `layout.rs` and four `TemplateDef`s in `template/mod.rs`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

// ── TargetLanguage ───────────────────────────────────────────────────────────

/// The language generated sources are written in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetLanguage {
    #[default]
    TypeScript,
    CSharp,
    Java,
}

impl TargetLanguage {
    pub const ALL: [TargetLanguage; 3] = [Self::TypeScript, Self::CSharp, Self::Java];

    /// Stable key used in persisted settings and on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TypeScript => "typescript",
            Self::CSharp => "csharp",
            Self::Java => "java",
        }
    }

    /// Human-facing name, used in the project README.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::TypeScript => "TypeScript",
            Self::CSharp => "C#",
            Self::Java => "Java",
        }
    }

    pub const fn file_extension(&self) -> &'static str {
        match self {
            Self::TypeScript => "ts",
            Self::CSharp => "cs",
            Self::Java => "java",
        }
    }

    /// Whether generation for this language needs a package identifier.
    pub const fn requires_package(&self) -> bool {
        matches!(self, Self::Java)
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "typescript" | "ts" => Ok(Self::TypeScript),
            "csharp" | "cs" | "c#" => Ok(Self::CSharp),
            "java" => Ok(Self::Java),
            other => Err(DomainError::UnknownLanguage(other.to_string())),
        }
    }
}

// ── ArtifactKind ─────────────────────────────────────────────────────────────

/// The logical role of a generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Entity,
    Repository,
    UseCase,
    Controller,
    /// Whole-project scaffold: a directory set plus a README.
    Project,
}

impl ArtifactKind {
    /// Kinds that render to exactly one source file.
    pub const FILE_ARTIFACTS: [ArtifactKind; 4] = [
        Self::Entity,
        Self::Repository,
        Self::UseCase,
        Self::Controller,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Entity => "entity",
            Self::Repository => "repository",
            Self::UseCase => "use-case",
            Self::Controller => "controller",
            Self::Project => "project",
        }
    }

    /// Label used in notifications ("Entity created: ...").
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Entity => "Entity",
            Self::Repository => "Repository",
            Self::UseCase => "Use case",
            Self::Controller => "Controller",
            Self::Project => "Project",
        }
    }

    pub const fn is_file_artifact(&self) -> bool {
        !matches!(self, Self::Project)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "entity" => Ok(Self::Entity),
            "repository" | "repo" => Ok(Self::Repository),
            "use-case" | "usecase" | "use_case" => Ok(Self::UseCase),
            "controller" => Ok(Self::Controller),
            "project" => Ok(Self::Project),
            other => Err(DomainError::UnknownArtifactKind(other.to_string())),
        }
    }
}

// ── ArtifactName ─────────────────────────────────────────────────────────────

/// A user-supplied artifact or project name.
///
/// Only non-emptiness is checked. The value is kept verbatim: no casing
/// normalization and no identifier validation, so characters the target
/// language would reject pass straight through into the generated source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName(String);

impl ArtifactName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtifactName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ArtifactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── PackageIdentifier ────────────────────────────────────────────────────────

/// A Java-style dotted namespace, e.g. `com.example.domain`.
///
/// Invariant: non-empty, every dot-separated segment is non-empty and free of
/// path separators.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageIdentifier(String);

impl PackageIdentifier {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::MissingPackageIdentifier);
        }

        for segment in trimmed.split('.') {
            if segment.is_empty() {
                return Err(DomainError::InvalidPackageIdentifier {
                    value: trimmed.to_string(),
                    reason: "empty segment".into(),
                });
            }
            if segment.contains(['/', '\\']) || segment.chars().any(char::is_whitespace) {
                return Err(DomainError::InvalidPackageIdentifier {
                    value: trimmed.to_string(),
                    reason: format!("segment '{segment}' contains a separator or whitespace"),
                });
            }
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The package as a relative path: `com.acme.shop` → `com/acme/shop`.
    pub fn as_path(&self) -> PathBuf {
        self.segments().collect()
    }
}

impl fmt::Display for PackageIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PackageIdentifier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

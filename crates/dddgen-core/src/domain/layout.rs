//! Layout registry and resolver.
//!
//! Every target language owns exactly one [`LayoutDef`]: the directory each
//! file artifact is written to, and the directory set a project scaffold
//! creates. All resolution is a table lookup; nothing here branches on a
//! particular language.
//!
//! # Adding a New Language
//!
//! 1. Add a variant to `TargetLanguage` in `value_objects.rs`
//! 2. Add one [`LayoutDef`] entry to [`LAYOUT_REGISTRY`]
//! 3. Add its templates to `TEMPLATE_REGISTRY` in `template/mod.rs`
//!
//! # Per-language naming
//!
//! The tables are not derived from one another. Java files repositories under
//! `infrastructure/repositories` while TypeScript and C# use
//! `Domain/Repositories`; each row is reproduced as-is and pinned by tests.

use std::path::PathBuf;

use crate::domain::{
    config::GeneratorConfig,
    entities::common::RelativePath,
    error::DomainError,
    value_objects::{ArtifactKind, PackageIdentifier, TargetLanguage},
};

/// Source root under which Java packages live.
pub const JAVA_SOURCE_ROOT: &str = "src/main/java";

/// Where a language's layout paths are anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutRoot {
    /// Paths are used as-is, relative to the workspace (or project) root.
    Workspace,
    /// Paths are prefixed with `src/main/java/<package-as-path>/`.
    JavaPackage,
}

/// Directory topology of one target language.
#[derive(Debug, Clone, Copy)]
pub struct LayoutDef {
    pub language: TargetLanguage,
    pub root: LayoutRoot,
    pub entity: &'static str,
    pub repository: &'static str,
    pub use_case: &'static str,
    pub controller: &'static str,
    /// Directories created by a project scaffold, in creation order.
    pub project: &'static [&'static str],
}

/// Single source of truth for directory layouts.
pub static LAYOUT_REGISTRY: &[LayoutDef] = &[
    LayoutDef {
        language: TargetLanguage::TypeScript,
        root: LayoutRoot::Workspace,
        entity: "Domain/Entities",
        repository: "Domain/Repositories",
        use_case: "Application/UseCases",
        controller: "API/Controllers",
        project: &[
            "Domain/Entities",
            "Domain/Repositories",
            "Application/UseCases",
            "Infrastructure/Data",
            "Infrastructure/Repositories",
            "API/Controllers",
        ],
    },
    LayoutDef {
        language: TargetLanguage::CSharp,
        root: LayoutRoot::Workspace,
        entity: "Domain/Entities",
        repository: "Domain/Repositories",
        use_case: "Application/UseCases",
        controller: "API/Controllers",
        project: &[
            "Domain/Entities",
            "Domain/Repositories",
            "Application/UseCases",
            "Infrastructure/Data",
            "Infrastructure/Repositories",
            "API/Controllers",
            "API/Models",
            "API/Services",
        ],
    },
    LayoutDef {
        language: TargetLanguage::Java,
        root: LayoutRoot::JavaPackage,
        entity: "domain/model/entities",
        repository: "infrastructure/repositories",
        use_case: "application/usecases",
        controller: "api/controllers",
        project: &[
            "domain/model/entities",
            "application/usecases",
            "infrastructure/repositories",
            "api/controllers",
        ],
    },
];

/// Find the layout row for a language.
pub fn find_layout(language: TargetLanguage) -> Option<&'static LayoutDef> {
    LAYOUT_REGISTRY.iter().find(|def| def.language == language)
}

impl LayoutDef {
    /// The unanchored directory for a file artifact, or `None` for `Project`.
    pub const fn dir_for(&self, kind: ArtifactKind) -> Option<&'static str> {
        match kind {
            ArtifactKind::Entity => Some(self.entity),
            ArtifactKind::Repository => Some(self.repository),
            ArtifactKind::UseCase => Some(self.use_case),
            ArtifactKind::Controller => Some(self.controller),
            ArtifactKind::Project => None,
        }
    }

    /// The base every path of this layout hangs from.
    fn base(&self, config: &GeneratorConfig) -> Result<PathBuf, DomainError> {
        match self.root {
            LayoutRoot::Workspace => Ok(PathBuf::new()),
            LayoutRoot::JavaPackage => {
                let package = package_for_anchor(config)?;
                Ok(PathBuf::from(JAVA_SOURCE_ROOT).join(package.as_path()))
            }
        }
    }

    /// Dotted namespace of an artifact's directory.
    ///
    /// C# namespaces mirror the directory (`Domain.Entities`); Java packages
    /// are the configured package plus the directory segments
    /// (`com.acme.shop.domain.model.entities`).
    pub fn namespace(
        &self,
        kind: ArtifactKind,
        config: &GeneratorConfig,
    ) -> Result<String, DomainError> {
        let dir = self
            .dir_for(kind)
            .ok_or_else(|| DomainError::NotAFileArtifact(kind.to_string()))?;
        let suffix = dir.replace('/', ".");
        match self.root {
            LayoutRoot::Workspace => Ok(suffix),
            LayoutRoot::JavaPackage => Ok(format!("{}.{suffix}", package_for_anchor(config)?)),
        }
    }
}

fn package_for_anchor(config: &GeneratorConfig) -> Result<&PackageIdentifier, DomainError> {
    config
        .package()
        .ok_or(DomainError::MissingPackageIdentifier)
}

// ── Resolver ─────────────────────────────────────────────────────────────────

/// Result of resolving a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    /// Destination directory of a single file artifact.
    Single(RelativePath),
    /// Full, ordered directory set of a project scaffold.
    Tree(Vec<RelativePath>),
}

impl Layout {
    pub fn directories(&self) -> &[RelativePath] {
        match self {
            Self::Single(dir) => std::slice::from_ref(dir),
            Self::Tree(dirs) => dirs,
        }
    }
}

/// Resolve the layout of `kind` under `config`.
///
/// Java layouts require a package; without one this fails with
/// [`DomainError::MissingPackageIdentifier`] before anything is produced.
pub fn resolve_layout(kind: ArtifactKind, config: &GeneratorConfig) -> Result<Layout, DomainError> {
    match kind {
        ArtifactKind::Project => project_dirs(config).map(Layout::Tree),
        _ => artifact_dir(kind, config).map(Layout::Single),
    }
}

/// Destination directory of a file artifact, relative to the workspace root.
pub fn artifact_dir(kind: ArtifactKind, config: &GeneratorConfig) -> Result<RelativePath, DomainError> {
    let def = layout_of(config.language())?;
    let dir = def
        .dir_for(kind)
        .ok_or_else(|| DomainError::NotAFileArtifact(kind.to_string()))?;
    RelativePath::try_new(def.base(config)?.join(dir))
}

/// Directory set of a project scaffold, relative to the project root.
pub fn project_dirs(config: &GeneratorConfig) -> Result<Vec<RelativePath>, DomainError> {
    let def = layout_of(config.language())?;
    let base = def.base(config)?;
    def.project
        .iter()
        .map(|dir| RelativePath::try_new(base.join(dir)))
        .collect()
}

pub(crate) fn layout_of(language: TargetLanguage) -> Result<&'static LayoutDef, DomainError> {
    find_layout(language).ok_or_else(|| DomainError::UnknownLanguage(language.to_string()))
}

// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for dddgen.
//!
//! This module contains the Layout Resolver and the Template Renderer as pure
//! functions over static tables. All I/O, prompting and persistence are
//! handled via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **No logging**: Tracing happens in the application layer
//! - **Explicit configuration**: `GeneratorConfig` is passed in, never looked up
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod config;
pub mod entities;
pub mod error;
pub mod layout;
pub mod template;
pub mod value_objects;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use entities::{
    common::RelativePath,
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry, ProjectStructure},
};
pub use error::{DomainError, ErrorCategory};
pub use layout::{
    JAVA_SOURCE_ROOT, LAYOUT_REGISTRY, Layout, LayoutDef, LayoutRoot, artifact_dir, find_layout,
    project_dirs, resolve_layout,
};
pub use template::{
    README_FILE, RenderedFile, TEMPLATE_REGISTRY, TemplateContext, TemplateDef, find_template,
    render, render_readme,
};
pub use value_objects::{ArtifactKind, ArtifactName, PackageIdentifier, TargetLanguage};

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Cross-component Tests
    // ========================================================================

    fn java() -> GeneratorConfig {
        GeneratorConfig::new(TargetLanguage::Java)
            .with_package(PackageIdentifier::parse("com.acme.shop").unwrap())
    }

    #[test]
    fn every_language_has_layout_and_templates() {
        for lang in TargetLanguage::ALL {
            assert!(find_layout(lang).is_some(), "{lang} has no layout");
            for kind in ArtifactKind::FILE_ARTIFACTS {
                assert!(find_template(kind, lang).is_some(), "{kind} × {lang} has no template");
            }
        }
    }

    #[test]
    fn java_package_declaration_matches_directory() {
        let cfg = java();
        for kind in ArtifactKind::FILE_ARTIFACTS {
            let dir = artifact_dir(kind, &cfg).unwrap().to_slash_string();
            let file = render(kind, &cfg, &ArtifactName::new("Order").unwrap()).unwrap();

            let package = dir
                .strip_prefix(&format!("{JAVA_SOURCE_ROOT}/"))
                .unwrap()
                .replace('/', ".");
            assert!(
                file.content.starts_with(&format!("package {package};")),
                "{kind}: package does not match {dir}"
            );
        }
    }

    #[test]
    fn csharp_namespace_matches_directory() {
        let cfg = GeneratorConfig::new(TargetLanguage::CSharp);
        for kind in ArtifactKind::FILE_ARTIFACTS {
            let dir = artifact_dir(kind, &cfg).unwrap().to_slash_string();
            let file = render(kind, &cfg, &ArtifactName::new("Order").unwrap()).unwrap();
            assert!(
                file.content
                    .contains(&format!("namespace {}", dir.replace('/', "."))),
                "{kind}: namespace does not match {dir}"
            );
        }
    }

    #[test]
    fn missing_package_blocks_both_components() {
        let cfg = GeneratorConfig::new(TargetLanguage::Java);
        let name = ArtifactName::new("Order").unwrap();
        assert_eq!(
            resolve_layout(ArtifactKind::Entity, &cfg),
            Err(DomainError::MissingPackageIdentifier)
        );
        assert_eq!(
            render(ArtifactKind::Entity, &cfg, &name),
            Err(DomainError::MissingPackageIdentifier)
        );
    }

    #[test]
    fn error_categories() {
        assert_eq!(DomainError::EmptyName.category(), ErrorCategory::Validation);
        assert_eq!(
            DomainError::MissingPackageIdentifier.category(),
            ErrorCategory::Validation
        );
        assert_eq!(DomainError::EmptyPlan.category(), ErrorCategory::Internal);
        assert_eq!(
            DomainError::AbsolutePathNotAllowed { path: "/Order.ts".into() }.category(),
            ErrorCategory::Validation
        );
        assert!(!DomainError::MissingPackageIdentifier.suggestions().is_empty());
    }
}

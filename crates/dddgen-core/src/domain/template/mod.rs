//! Template registry and renderer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  TEMPLATE_REGISTRY (one TemplateDef per kind × language)    │
//! │  └── file stem + source skeleton, both with {{PLACEHOLDERS}} │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TemplateContext (Value Object)                             │
//! │  └── Variable substitution: {{NAME}} -> "Order"             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  RenderedFile                                               │
//! │  └── file stem, extension, content                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering is pure: the same (kind, config, name) always yields the same
//! file. There is no templating language. A skeleton is fixed text with
//! placeholders, and every placeholder must have exactly one value.

pub mod sources;

use std::collections::BTreeMap;

use crate::domain::{
    config::GeneratorConfig,
    error::DomainError,
    layout,
    value_objects::{ArtifactKind, ArtifactName, TargetLanguage},
};

/// File name of the project README.
pub const README_FILE: &str = "README.md";

/// One built-in template.
#[derive(Debug, Clone, Copy)]
pub struct TemplateDef {
    pub kind: ArtifactKind,
    pub language: TargetLanguage,
    /// File name without extension; placeholders allowed.
    pub file_stem: &'static str,
    pub source: &'static str,
}

macro_rules! template {
    ($kind:ident, $lang:ident, $stem:expr, $source:expr) => {
        TemplateDef {
            kind: ArtifactKind::$kind,
            language: TargetLanguage::$lang,
            file_stem: $stem,
            source: $source,
        }
    };
}

/// Single source of truth for artifact templates.
pub static TEMPLATE_REGISTRY: &[TemplateDef] = &[
    // ── TypeScript ───────────────────────────────────────────────────────────
    template!(Entity, TypeScript, "{{NAME}}", sources::TS_ENTITY),
    template!(Repository, TypeScript, "I{{NAME}}Repository", sources::TS_REPOSITORY),
    template!(UseCase, TypeScript, "{{NAME}}UseCase", sources::TS_USE_CASE),
    template!(Controller, TypeScript, "{{NAME}}Controller", sources::TS_CONTROLLER),
    // ── C# ───────────────────────────────────────────────────────────────────
    template!(Entity, CSharp, "{{NAME}}", sources::CS_ENTITY),
    template!(Repository, CSharp, "I{{NAME}}Repository", sources::CS_REPOSITORY),
    template!(UseCase, CSharp, "{{NAME}}UseCase", sources::CS_USE_CASE),
    template!(Controller, CSharp, "{{NAME}}Controller", sources::CS_CONTROLLER),
    // ── Java ─────────────────────────────────────────────────────────────────
    template!(Entity, Java, "{{NAME}}", sources::JAVA_ENTITY),
    template!(Repository, Java, "I{{NAME}}Repository", sources::JAVA_REPOSITORY),
    template!(UseCase, Java, "{{NAME}}UseCase", sources::JAVA_USE_CASE),
    template!(Controller, Java, "{{NAME}}Controller", sources::JAVA_CONTROLLER),
];

pub fn find_template(kind: ArtifactKind, language: TargetLanguage) -> Option<&'static TemplateDef> {
    TEMPLATE_REGISTRY
        .iter()
        .find(|def| def.kind == kind && def.language == language)
}

// ── Context ──────────────────────────────────────────────────────────────────

/// Variables available to a template.
///
/// Built-in variable names are `SCREAMING_SNAKE_CASE`.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    variables: BTreeMap<&'static str, String>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context for a file artifact of `config`'s language.
    pub fn for_artifact(name: &ArtifactName, config: &GeneratorConfig) -> Result<Self, DomainError> {
        let def = layout::layout_of(config.language())?;
        let ns = |kind| def.namespace(kind, config);

        Ok(Self::new()
            .with_variable("NAME", name.as_str())
            .with_variable("NAME_LOWER", name.as_str().to_lowercase())
            .with_variable("ENTITY_NAMESPACE", ns(ArtifactKind::Entity)?)
            .with_variable("REPOSITORY_NAMESPACE", ns(ArtifactKind::Repository)?)
            .with_variable("USE_CASE_NAMESPACE", ns(ArtifactKind::UseCase)?))
    }

    pub fn with_variable(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.variables.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every `{{KEY}}` in `template`.
    ///
    /// Single left-to-right pass: inserted values are never scanned again, so
    /// a name that itself contains `{{...}}` lands in the output verbatim.
    /// A placeholder without a value (or an unterminated `{{`) is an error.
    pub fn render(&self, template: &str) -> Result<String, DomainError> {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            let end = after
                .find("}}")
                .ok_or_else(|| DomainError::UnresolvedPlaceholder {
                    placeholder: after.chars().take(24).collect(),
                })?;
            let key = &after[..end];
            let value = self
                .get(key)
                .ok_or_else(|| DomainError::UnresolvedPlaceholder {
                    placeholder: key.to_string(),
                })?;
            out.push_str(value);
            rest = &after[end + 2..];
        }

        out.push_str(rest);
        Ok(out)
    }
}

// ── Rendering ────────────────────────────────────────────────────────────────

/// A rendered source file, not yet placed anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub file_stem: String,
    pub extension: &'static str,
    pub content: String,
}

impl RenderedFile {
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.file_stem, self.extension)
    }
}

/// Render the template of a file artifact.
///
/// Java output requires a package; the check happens before any text is
/// produced.
pub fn render(
    kind: ArtifactKind,
    config: &GeneratorConfig,
    name: &ArtifactName,
) -> Result<RenderedFile, DomainError> {
    if !kind.is_file_artifact() {
        return Err(DomainError::NotAFileArtifact(kind.to_string()));
    }
    config.require_package()?;

    let language = config.language();
    let def = find_template(kind, language)
        .ok_or_else(|| DomainError::UnknownLanguage(language.to_string()))?;

    let ctx = TemplateContext::for_artifact(name, config)?
        .with_variable("NAMESPACE", layout::layout_of(language)?.namespace(kind, config)?);

    Ok(RenderedFile {
        file_stem: ctx.render(def.file_stem)?,
        extension: language.file_extension(),
        content: ctx.render(def.source)?,
    })
}

/// Render the one-line project README.
pub fn render_readme(project_name: &ArtifactName, language: TargetLanguage) -> Result<String, DomainError> {
    TemplateContext::new()
        .with_variable("PROJECT_NAME", project_name.as_str())
        .with_variable("LANGUAGE", language.display_name())
        .render(sources::README)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::PackageIdentifier;

    fn config(lang: TargetLanguage) -> GeneratorConfig {
        let cfg = GeneratorConfig::new(lang);
        if lang.requires_package() {
            cfg.with_package(PackageIdentifier::parse("com.acme.shop").unwrap())
        } else {
            cfg
        }
    }

    fn order() -> ArtifactName {
        ArtifactName::new("Order").unwrap()
    }

    #[test]
    fn registry_has_one_template_per_kind_and_language() {
        for lang in TargetLanguage::ALL {
            for kind in ArtifactKind::FILE_ARTIFACTS {
                let count = TEMPLATE_REGISTRY
                    .iter()
                    .filter(|d| d.kind == kind && d.language == lang)
                    .count();
                assert_eq!(count, 1, "{kind} × {lang}");
            }
        }
        assert_eq!(TEMPLATE_REGISTRY.len(), 12);
    }

    #[test]
    fn every_template_substitutes_fully() {
        for lang in TargetLanguage::ALL {
            for kind in ArtifactKind::FILE_ARTIFACTS {
                let file = render(kind, &config(lang), &order()).unwrap();
                assert!(!file.content.is_empty());
                assert!(!file.content.contains("{{"), "{kind} × {lang} left a placeholder");
                assert!(file.content.contains("Order"), "{kind} × {lang} lost the name");
                assert_eq!(file.extension, lang.file_extension());
            }
        }
    }

    #[test]
    fn typescript_entity_matches_shape() {
        let file = render(ArtifactKind::Entity, &config(TargetLanguage::TypeScript), &order()).unwrap();
        assert_eq!(file.extension, "ts");
        assert_eq!(file.file_name(), "Order.ts");
        assert!(file.content.contains("export class Order {"));
        assert!(file.content.contains("id: number;"));
    }

    #[test]
    fn typescript_use_case_imports_repository() {
        let file = render(ArtifactKind::UseCase, &config(TargetLanguage::TypeScript), &order()).unwrap();
        assert_eq!(file.file_name(), "OrderUseCase.ts");
        assert!(file.content.contains(
            r#"import { IOrderRepository } from "../../Domain/Repositories/IOrderRepository";"#
        ));
        assert!(file.content.contains("return await this.repository.findById(id);"));
    }

    #[test]
    fn repository_is_an_interface_with_nullable_find() {
        let ts = render(ArtifactKind::Repository, &config(TargetLanguage::TypeScript), &order()).unwrap();
        assert_eq!(ts.file_stem, "IOrderRepository");
        assert!(ts.content.contains("findById(id: number): Promise<Order | null>;"));
        assert!(ts.content.contains("save(entity: Order): Promise<void>;"));

        let cs = render(ArtifactKind::Repository, &config(TargetLanguage::CSharp), &order()).unwrap();
        assert!(cs.content.contains("public interface IOrderRepository"));
        assert!(cs.content.contains("Order? FindById(int id);"));

        let java = render(ArtifactKind::Repository, &config(TargetLanguage::Java), &order()).unwrap();
        assert!(java.content.contains("Optional<Order> findById(Long id);"));
        assert!(java.content.contains("void save(Order entity);"));
    }

    #[test]
    fn java_controller_lowercases_route() {
        let file = render(ArtifactKind::Controller, &config(TargetLanguage::Java), &order()).unwrap();
        assert!(file.content.contains(r#"@RequestMapping("/order")"#));
        assert!(file.content.contains("public class OrderController {"));
    }

    #[test]
    fn csharp_controller_keeps_case() {
        let file = render(ArtifactKind::Controller, &config(TargetLanguage::CSharp), &order()).unwrap();
        assert!(file.content.contains(r#"[Route("[controller]")]"#));
        assert!(file.content.contains("public class OrderController : ControllerBase"));
        assert!(!file.content.contains("/order"));
    }

    #[test]
    fn java_sources_declare_layer_packages() {
        let cfg = config(TargetLanguage::Java);
        let entity = render(ArtifactKind::Entity, &cfg, &order()).unwrap();
        assert!(entity.content.starts_with("package com.acme.shop.domain.model.entities;"));

        let repo = render(ArtifactKind::Repository, &cfg, &order()).unwrap();
        assert!(repo.content.starts_with("package com.acme.shop.infrastructure.repositories;"));
        assert!(repo.content.contains("import com.acme.shop.domain.model.entities.Order;"));

        let use_case = render(ArtifactKind::UseCase, &cfg, &order()).unwrap();
        assert!(use_case
            .content
            .contains("import com.acme.shop.infrastructure.repositories.IOrderRepository;"));
    }

    #[test]
    fn csharp_namespaces_follow_directories() {
        let file = render(ArtifactKind::UseCase, &config(TargetLanguage::CSharp), &order()).unwrap();
        assert!(file.content.contains("namespace Application.UseCases"));
        assert!(file.content.contains("using Domain.Repositories;"));
    }

    #[test]
    fn java_without_package_fails_before_rendering() {
        let cfg = GeneratorConfig::new(TargetLanguage::Java);
        assert_eq!(
            render(ArtifactKind::Entity, &cfg, &order()),
            Err(DomainError::MissingPackageIdentifier)
        );
    }

    #[test]
    fn project_is_rejected() {
        assert!(matches!(
            render(ArtifactKind::Project, &GeneratorConfig::default(), &order()),
            Err(DomainError::NotAFileArtifact(_))
        ));
    }

    #[test]
    fn name_is_passed_through_unchanged() {
        let odd = ArtifactName::new("order-item").unwrap();
        let file = render(ArtifactKind::Entity, &config(TargetLanguage::TypeScript), &odd).unwrap();
        assert!(file.content.contains("export class order-item {"));
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let sneaky = ArtifactName::new("{{NAME_LOWER}}").unwrap();
        let file = render(ArtifactKind::Entity, &config(TargetLanguage::TypeScript), &sneaky).unwrap();
        assert!(file.content.contains("export class {{NAME_LOWER}} {"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let cfg = config(TargetLanguage::CSharp);
        assert_eq!(
            render(ArtifactKind::Controller, &cfg, &order()),
            render(ArtifactKind::Controller, &cfg, &order())
        );
    }

    #[test]
    fn unknown_placeholder_is_an_error() {
        let ctx = TemplateContext::new().with_variable("NAME", "x");
        assert_eq!(
            ctx.render("{{NAME}} {{MISSING}}"),
            Err(DomainError::UnresolvedPlaceholder {
                placeholder: "MISSING".into()
            })
        );
        assert!(ctx.render("{{NAME").is_err());
    }

    #[test]
    fn single_braces_are_left_alone() {
        let ctx = TemplateContext::new().with_variable("NAME", "Order");
        assert_eq!(
            ctx.render(r#"[HttpGet("{id}")] {{NAME}}"#).unwrap(),
            r#"[HttpGet("{id}")] Order"#
        );
    }

    #[test]
    fn readme_is_one_heading_line() {
        let readme = render_readme(&ArtifactName::new("Shop").unwrap(), TargetLanguage::CSharp).unwrap();
        assert_eq!(readme, "# Shop - DDD project (C#)\n");
        assert_eq!(readme.lines().count(), 1);
    }
}

//! `dddgen layout`: print where each artifact kind is written.

use std::collections::BTreeMap;

use serde::Serialize;

use dddgen_core::{
    application::ports::ConfigKey,
    domain::{
        ArtifactKind, GeneratorConfig, Layout, PackageIdentifier, TargetLanguage, resolve_layout,
    },
};

use crate::{cli::LayoutArgs, commands::Context, error::CliResult};

#[derive(Debug, Serialize)]
struct LayoutView {
    language: TargetLanguage,
    package: Option<String>,
    artifacts: BTreeMap<ArtifactKind, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    project: Vec<String>,
}

/// Execute `dddgen layout`.
pub fn execute(args: LayoutArgs, ctx: &Context) -> CliResult<()> {
    let settings = ctx.settings()?;
    let language = args.language.map(TargetLanguage::from);
    let mut stored = settings.load()?;

    // Non-Java settings load without their package; a Java preview still uses it.
    if stored.package().is_none()
        && args.package.is_none()
        && language.is_some_and(|lang| lang.requires_package())
    {
        if let Some(raw) = settings.get(ConfigKey::Package)?.filter(|raw| !raw.trim().is_empty()) {
            stored = stored.with_package(PackageIdentifier::parse(&raw)?);
        }
    }

    let config = preview_config(stored, language, args.package.as_deref())?;

    let kinds: Vec<ArtifactKind> = match args.kind {
        Some(kind) => vec![kind.into()],
        None => ArtifactKind::FILE_ARTIFACTS
            .into_iter()
            .chain([ArtifactKind::Project])
            .collect(),
    };

    let view = build_view(&config, &kinds)?;
    render(&view, ctx)
}

/// The stored configuration with `--lang` / `--package` applied on top.
///
/// Switching language keeps the stored package, the same way a persisted
/// language change does.
fn preview_config(
    stored: GeneratorConfig,
    language: Option<TargetLanguage>,
    package: Option<&str>,
) -> CliResult<GeneratorConfig> {
    let package = match package {
        Some(raw) => Some(PackageIdentifier::parse(raw)?),
        None => stored.package().cloned(),
    };
    let config = GeneratorConfig::new(language.unwrap_or(stored.language()));
    Ok(match package {
        Some(pkg) => config.with_package(pkg),
        None => config,
    })
}

fn build_view(config: &GeneratorConfig, kinds: &[ArtifactKind]) -> CliResult<LayoutView> {
    let mut view = LayoutView {
        language: config.language(),
        package: config
            .require_package()?
            .map(|pkg| pkg.as_str().to_string()),
        artifacts: BTreeMap::new(),
        project: Vec::new(),
    };

    for &kind in kinds {
        match resolve_layout(kind, config)? {
            Layout::Single(dir) => {
                view.artifacts.insert(kind, dir.to_slash_string());
            }
            Layout::Tree(dirs) => {
                view.project = dirs.iter().map(|d| d.to_slash_string()).collect();
            }
        }
    }
    Ok(view)
}

fn render(view: &LayoutView, ctx: &Context) -> CliResult<()> {
    let output = &ctx.output;
    if output.is_json() {
        output.json(view)?;
        return Ok(());
    }

    let title = match &view.package {
        Some(pkg) => format!("Layout for {} ({pkg})", view.language.display_name()),
        None => format!("Layout for {}", view.language.display_name()),
    };
    output.header(&title)?;

    for (kind, dir) in &view.artifacts {
        output.item(&format!("{:<12} {dir}/", kind.as_str()))?;
    }
    if !view.project.is_empty() {
        output.item("project")?;
        for dir in &view.project {
            output.item(&format!("  {dir}/"))?;
        }
    }
    Ok(())
}

//! `dddgen project` and the per-artifact commands (`entity`, `repository`,
//! `use-case`, `controller`).
//!
//! Order of work: load settings, check the package, ask for the name, plan
//! or write, then report.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use dddgen_core::{
    application::{GenerationReport, input::require_name},
    domain::{ArtifactKind, ArtifactName, GeneratorConfig},
};

use crate::{cli::GenerateArgs, commands::Context, error::CliResult};

use super::workspace_root;

/// JSON shape of a generation result.
#[derive(Debug, Serialize)]
struct ReportView {
    kind: ArtifactKind,
    name: String,
    dry_run: bool,
    root: PathBuf,
    directories: Vec<String>,
    files: Vec<String>,
}

impl ReportView {
    fn new(
        kind: ArtifactKind,
        name: &ArtifactName,
        dry_run: bool,
        report: &GenerationReport,
    ) -> Self {
        Self {
            kind,
            name: name.to_string(),
            dry_run,
            root: report.root.clone(),
            directories: report.directories.iter().map(|d| d.to_slash_string()).collect(),
            files: report.files.iter().map(|f| f.to_slash_string()).collect(),
        }
    }
}

/// Execute `dddgen project` or one of the artifact commands.
#[instrument(skip_all, fields(kind = %kind))]
pub fn execute(kind: ArtifactKind, args: GenerateArgs, ctx: &Context) -> CliResult<()> {
    let config = ctx.settings()?.load()?;

    // A Java config without a package fails here, before the name prompt.
    config.require_package()?;

    let field = format!("{} name", kind.label().to_lowercase());
    let answer = match args.name {
        Some(name) => Some(name),
        None => ctx.prompter.text(&prompt_label(kind))?,
    };
    let name = require_name(answer, &field)?;
    let root = workspace_root(args.root.as_deref())?;

    debug!(
        name = %name,
        language = %config.language(),
        root = %root.display(),
        dry_run = args.dry_run,
        "Generation resolved"
    );

    if args.dry_run {
        let report = plan(kind, &root, &name, &config, ctx)?;
        return show_plan(kind, &name, &report, ctx);
    }

    if kind.is_file_artifact() && !ctx.output.is_json() {
        warn_on_overwrite(&plan(kind, &root, &name, &config, ctx)?, ctx)?;
    }

    let service = ctx.scaffold();
    let report = match kind {
        ArtifactKind::Project => service.create_project(&root, &name, &config)?,
        _ => service.create_artifact(&root, kind, &name, &config)?,
    };
    info!(files = report.files.len(), "Generation finished");

    show_created(kind, &name, &report, ctx)
}

fn prompt_label(kind: ArtifactKind) -> String {
    format!("{} name", kind.label())
}

fn plan(
    kind: ArtifactKind,
    root: &Path,
    name: &ArtifactName,
    config: &GeneratorConfig,
    ctx: &Context,
) -> CliResult<GenerationReport> {
    let service = ctx.scaffold();
    let plan = match kind {
        ArtifactKind::Project => service.plan_project(root, name, config)?,
        _ => service.plan_artifact(root, kind, name, config)?,
    };
    Ok(GenerationReport::from(&plan))
}

/// Existing files are replaced; say so before it happens.
fn warn_on_overwrite(planned: &GenerationReport, ctx: &Context) -> CliResult<()> {
    for file in &planned.files {
        if planned.root.join(file.as_path()).is_file() {
            ctx.output
                .warning(&format!("Overwriting {}", file.to_slash_string()))?;
        }
    }
    Ok(())
}

fn show_created(
    kind: ArtifactKind,
    name: &ArtifactName,
    report: &GenerationReport,
    ctx: &Context,
) -> CliResult<()> {
    let output = &ctx.output;
    if output.is_json() {
        output.json(&ReportView::new(kind, name, false, report))?;
        return Ok(());
    }

    match kind {
        ArtifactKind::Project => {
            output.success(&format!("DDD structure created for {name}"))?;
            for dir in &report.directories {
                output.item(&format!("{}/", dir.to_slash_string()))?;
            }
            for file in &report.files {
                output.item(&file.to_slash_string())?;
            }
        }
        _ => {
            for file in &report.files {
                output.success(&format!("{} created: {}", kind.label(), file.to_slash_string()))?;
            }
        }
    }
    Ok(())
}

fn show_plan(
    kind: ArtifactKind,
    name: &ArtifactName,
    report: &GenerationReport,
    ctx: &Context,
) -> CliResult<()> {
    let output = &ctx.output;
    if output.is_json() {
        output.json(&ReportView::new(kind, name, true, report))?;
        return Ok(());
    }

    output.info(&format!("Dry run: would create in {}", report.root.display()))?;
    for dir in &report.directories {
        output.item(&format!("{}/", dir.to_slash_string()))?;
    }
    for file in &report.files {
        output.item(&file.to_slash_string())?;
    }
    Ok(())
}

//! `dddgen language`: persist the target language (and Java package).

use serde::Serialize;
use tracing::instrument;

use dddgen_core::{
    application::{
        ConfigKey,
        input::{require_language, require_package},
    },
    domain::{GeneratorConfig, PackageIdentifier, TargetLanguage},
};

use crate::{cli::LanguageArgs, commands::Context, error::CliResult};

#[derive(Debug, Serialize)]
struct LanguageView<'a> {
    language: TargetLanguage,
    package: Option<&'a str>,
}

/// Execute `dddgen language`.
#[instrument(skip_all)]
pub fn execute(args: LanguageArgs, ctx: &Context) -> CliResult<()> {
    let settings = ctx.settings()?;

    let language = match args.language {
        Some(lang) => TargetLanguage::from(lang),
        None => {
            let picked = ctx.prompter.select_language()?;
            require_language(picked.map(|lang| lang.as_str().to_string()))?
        }
    };

    // Ask for a package only when Java would otherwise be refused.
    let mut package = args.package;
    if language.requires_package()
        && package.is_none()
        && settings.get(ConfigKey::Package)?.is_none()
        && ctx.prompter.is_enabled()
    {
        let answer = ctx.prompter.text("Java package (e.g. com.example.app)")?;
        package = Some(require_package(answer)?.as_str().to_string());
    }

    let config = settings.change_language(language, package.as_deref())?;
    show(&config, ctx)
}

fn show(config: &GeneratorConfig, ctx: &Context) -> CliResult<()> {
    let output = &ctx.output;
    let package = config
        .require_package()?
        .map(PackageIdentifier::as_str);

    if output.is_json() {
        output.json(&LanguageView {
            language: config.language(),
            package,
        })?;
        return Ok(());
    }

    let message = match package {
        Some(pkg) => format!(
            "Target language set to {} (package {pkg})",
            config.language().display_name()
        ),
        None => format!(
            "Target language set to {}",
            config.language().display_name()
        ),
    };
    output.success(&message)?;
    Ok(())
}

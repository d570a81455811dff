//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use dddgen_core::domain::{ArtifactKind, TargetLanguage};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "dddgen",
    bin_name = "dddgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Layered DDD scaffolding for TypeScript, C# and Java",
    long_about = "dddgen creates DDD folder structures and entity, repository, \
                  use-case and controller skeletons in the target language \
                  you select once with `dddgen language`.",
    after_help = "EXAMPLES:\n\
        \x20 dddgen language java --package com.acme.shop\n\
        \x20 dddgen project Shop\n\
        \x20 dddgen entity Order --root Shop\n\
        \x20 dddgen completions bash > /usr/share/bash-completion/completions/dddgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the DDD folder structure of a new project.
    #[command(
        about = "Create a DDD project structure",
        after_help = "EXAMPLES:\n\
            \x20 dddgen project Shop\n\
            \x20 dddgen project Shop --root ~/code --dry-run"
    )]
    Project(GenerateArgs),

    /// Create an entity class.
    #[command(about = "Create an entity")]
    Entity(GenerateArgs),

    /// Create a repository interface.
    #[command(visible_alias = "repo", about = "Create a repository interface")]
    Repository(GenerateArgs),

    /// Create a use-case class.
    #[command(visible_alias = "usecase", about = "Create a use case")]
    UseCase(GenerateArgs),

    /// Create a controller class.
    #[command(about = "Create a controller")]
    Controller(GenerateArgs),

    /// Select the target language (and Java package).
    #[command(
        visible_alias = "lang",
        about = "Change the target language",
        after_help = "EXAMPLES:\n\
            \x20 dddgen language typescript\n\
            \x20 dddgen language cs\n\
            \x20 dddgen language java --package com.acme.shop"
    )]
    Language(LanguageArgs),

    /// Show where artifacts go for the current settings.
    #[command(
        about = "Show the resolved folder layout",
        after_help = "EXAMPLES:\n\
            \x20 dddgen layout\n\
            \x20 dddgen layout --kind repository\n\
            \x20 dddgen layout --lang java --package org.example"
    )]
    Layout(LayoutArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 dddgen completions bash > ~/.local/share/bash-completion/completions/dddgen\n\
            \x20 dddgen completions zsh  > ~/.zfunc/_dddgen\n\
            \x20 dddgen completions fish > ~/.config/fish/completions/dddgen.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect or edit the persisted generator settings.
    #[command(
        about = "Settings management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 dddgen config get language\n\
            \x20 dddgen config set package com.acme.shop\n\
            \x20 dddgen config list"
    )]
    Config(ConfigCommands),
}

impl Commands {
    /// The artifact kind a generating command produces.
    pub fn artifact_kind(&self) -> Option<ArtifactKind> {
        match self {
            Self::Project(_) => Some(ArtifactKind::Project),
            Self::Entity(_) => Some(ArtifactKind::Entity),
            Self::Repository(_) => Some(ArtifactKind::Repository),
            Self::UseCase(_) => Some(ArtifactKind::UseCase),
            Self::Controller(_) => Some(ArtifactKind::Controller),
            _ => None,
        }
    }
}

// ── project / entity / repository / use-case / controller ────────────────────

/// Arguments shared by every generating command.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Name of the project or artifact, used verbatim.  Prompted for when
    /// omitted.
    #[arg(value_name = "NAME", help = "Name (prompted for when omitted)")]
    pub name: Option<String>,

    /// Workspace folder to generate into.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Workspace folder (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── language ──────────────────────────────────────────────────────────────────

/// Arguments for `dddgen language`.
#[derive(Debug, Args)]
pub struct LanguageArgs {
    /// Target language.  Prompted for when omitted.
    #[arg(value_enum, value_name = "LANGUAGE")]
    pub language: Option<Language>,

    /// Java package, e.g. `com.acme.shop`.
    #[arg(short = 'p', long = "package", value_name = "PACKAGE")]
    pub package: Option<String>,
}

// ── layout ────────────────────────────────────────────────────────────────────

/// Arguments for `dddgen layout`.
#[derive(Debug, Args)]
pub struct LayoutArgs {
    /// Only show one artifact kind.
    #[arg(short = 'k', long = "kind", value_enum)]
    pub kind: Option<Kind>,

    /// Preview another language without saving it.
    #[arg(short = 'l', long = "lang", value_enum)]
    pub language: Option<Language>,

    /// Package to preview with (Java).
    #[arg(short = 'p', long = "package", value_name = "PACKAGE")]
    pub package: Option<String>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `dddgen completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `dddgen config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a settings key.
    Get {
        /// `language` or `package`.
        key: String,
    },
    /// Validate and store a settings value.
    Set {
        /// `language` or `package`.
        key: String,
        /// New value.
        value: String,
    },
    /// Print all settings and the effective application config.
    List,
    /// Print the settings and configuration file paths.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Supported target languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Language {
    /// Also accepted as `ts`.
    #[value(alias = "ts")]
    TypeScript,
    /// Also accepted as `cs` and `c#`.
    #[value(name = "csharp", alias = "cs", alias = "c#")]
    CSharp,
    Java,
}

impl From<Language> for TargetLanguage {
    fn from(lang: Language) -> Self {
        match lang {
            Language::TypeScript => Self::TypeScript,
            Language::CSharp => Self::CSharp,
            Language::Java => Self::Java,
        }
    }
}

/// Artifact kinds accepted by `layout --kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Entity,
    #[value(alias = "repo")]
    Repository,
    #[value(alias = "usecase")]
    UseCase,
    Controller,
    Project,
}

impl From<Kind> for ArtifactKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Entity => Self::Entity,
            Kind::Repository => Self::Repository,
            Kind::UseCase => Self::UseCase,
            Kind::Controller => Self::Controller,
            Kind::Project => Self::Project,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn language_aliases() {
        for (raw, expected) in [
            ("ts", TargetLanguage::TypeScript),
            ("typescript", TargetLanguage::TypeScript),
            ("cs", TargetLanguage::CSharp),
            ("c#", TargetLanguage::CSharp),
            ("java", TargetLanguage::Java),
        ] {
            let cli = Cli::parse_from(["dddgen", "language", raw]);
            let Commands::Language(args) = cli.command else {
                panic!("expected Language command");
            };
            assert_eq!(args.language.map(TargetLanguage::from), Some(expected), "{raw}");
        }
    }

    #[test]
    fn artifact_aliases() {
        let cli = Cli::parse_from(["dddgen", "repo", "Order"]);
        assert_eq!(cli.command.artifact_kind(), Some(ArtifactKind::Repository));

        let cli = Cli::parse_from(["dddgen", "usecase", "Order"]);
        assert_eq!(cli.command.artifact_kind(), Some(ArtifactKind::UseCase));

        let cli = Cli::parse_from(["dddgen", "use-case", "Order"]);
        assert_eq!(cli.command.artifact_kind(), Some(ArtifactKind::UseCase));
    }

    #[test]
    fn name_is_optional() {
        let cli = Cli::parse_from(["dddgen", "entity"]);
        let Commands::Entity(args) = cli.command else {
            panic!("expected Entity command");
        };
        assert!(args.name.is_none());
        assert!(!args.dry_run);
    }

    #[test]
    fn project_with_root_and_dry_run() {
        let cli = Cli::parse_from(["dddgen", "project", "Shop", "--root", "/tmp", "--dry-run"]);
        let Commands::Project(args) = cli.command else {
            panic!("expected Project command");
        };
        assert_eq!(args.name.as_deref(), Some("Shop"));
        assert_eq!(args.root, Some(PathBuf::from("/tmp")));
        assert!(args.dry_run);
    }

    #[test]
    fn layout_kind_accepts_aliases() {
        let cli = Cli::parse_from(["dddgen", "layout", "--kind", "repo"]);
        let Commands::Layout(args) = cli.command else {
            panic!("expected Layout command");
        };
        assert_eq!(args.kind.map(ArtifactKind::from), Some(ArtifactKind::Repository));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["dddgen", "--quiet", "--verbose", "layout"]);
        assert!(result.is_err());
    }
}

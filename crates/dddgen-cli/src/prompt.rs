//! Interactive input for values omitted on the command line.
//!
//! Every question returns `Ok(None)` when it was dismissed, answered with
//! nothing, or could not be asked at all (stdin is not a terminal, `--quiet`,
//! or the `interactive` feature is off). Turning `None` into a cancellation
//! is left to `dddgen_core::application::input`.

use std::io::IsTerminal;

use dddgen_core::domain::TargetLanguage;

use crate::error::CliResult;

/// Asks the user for missing values.
#[derive(Debug, Clone, Copy)]
pub struct Prompter {
    enabled: bool,
}

impl Prompter {
    /// A prompter that asks only when stdin is an interactive terminal.
    pub fn detect(quiet: bool) -> Self {
        Self {
            enabled: cfg!(feature = "interactive") && !quiet && std::io::stdin().is_terminal(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Free-text question.
    pub fn text(&self, label: &str) -> CliResult<Option<String>> {
        if !self.enabled {
            return Ok(None);
        }
        ask_text(label)
    }

    /// Pick one of the supported target languages.
    pub fn select_language(&self) -> CliResult<Option<TargetLanguage>> {
        if !self.enabled {
            return Ok(None);
        }
        ask_language()
    }
}

#[cfg(feature = "interactive")]
fn ask_text(label: &str) -> CliResult<Option<String>> {
    use dialoguer::{Input, theme::ColorfulTheme};

    let answer: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(prompt_error)?;

    let answer = answer.trim();
    Ok((!answer.is_empty()).then(|| answer.to_string()))
}

#[cfg(feature = "interactive")]
fn ask_language() -> CliResult<Option<TargetLanguage>> {
    use dialoguer::{Select, theme::ColorfulTheme};

    let labels: Vec<&str> = TargetLanguage::ALL
        .iter()
        .map(TargetLanguage::display_name)
        .collect();

    let picked = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Target language")
        .items(labels.as_slice())
        .default(0)
        .interact_opt()
        .map_err(prompt_error)?;

    Ok(picked.and_then(|index| TargetLanguage::ALL.get(index).copied()))
}

#[cfg(feature = "interactive")]
fn prompt_error(err: dialoguer::Error) -> crate::error::CliError {
    crate::error::CliError::Prompt {
        message: err.to_string(),
    }
}

#[cfg(not(feature = "interactive"))]
fn ask_text(_label: &str) -> CliResult<Option<String>> {
    Ok(None)
}

#[cfg(not(feature = "interactive"))]
fn ask_language() -> CliResult<Option<TargetLanguage>> {
    Ok(None)
}

//! Answers coming back from the input collaborator.
//!
//! A dismissed prompt and a blank answer are the same thing: the command
//! stops before doing any work.

use crate::{
    application::ApplicationError,
    domain::{ArtifactName, PackageIdentifier, TargetLanguage},
    error::DddgenResult,
};

/// Turn an optional answer into a value, or `UserCancelled`.
pub fn require_input(answer: Option<String>, field: &str) -> DddgenResult<String> {
    match answer {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(ApplicationError::cancelled(field).into()),
    }
}

pub fn require_name(answer: Option<String>, field: &str) -> DddgenResult<ArtifactName> {
    let value = require_input(answer, field)?;
    Ok(ArtifactName::new(value)?)
}

pub fn require_language(answer: Option<String>) -> DddgenResult<TargetLanguage> {
    Ok(require_input(answer, "language")?.parse()?)
}

pub fn require_package(answer: Option<String>) -> DddgenResult<PackageIdentifier> {
    Ok(PackageIdentifier::parse(&require_input(answer, "package")?)?)
}

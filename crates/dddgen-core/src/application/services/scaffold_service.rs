//! Scaffold Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Resolve the layout for the configured language
//! 2. Render the template (or README) for the artifact
//! 3. Validate the write plan
//! 4. Write to filesystem
//!
//! Planning is pure; only `create_*` touch the filesystem port. Writes are
//! applied in plan order and are not rolled back: a failure leaves whatever
//! was already written in place.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{
        ArtifactKind, ArtifactName, FsEntry, GeneratorConfig, ProjectStructure, README_FILE,
        RelativePath, artifact_dir, project_dirs, render, render_readme,
    },
    error::DddgenResult,
};

/// What a generation produced (or would produce, for a dry run).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Directory the relative paths hang from.
    pub root: PathBuf,
    pub directories: Vec<RelativePath>,
    pub files: Vec<RelativePath>,
}

impl From<&ProjectStructure> for GenerationReport {
    fn from(plan: &ProjectStructure) -> Self {
        Self {
            root: plan.root().to_path_buf(),
            directories: plan.directories().map(|d| d.path.clone()).collect(),
            files: plan.files().map(|f| f.path.clone()).collect(),
        }
    }
}

/// Main scaffolding service.
pub struct ScaffoldService {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given filesystem adapter.
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    // -------------------------------------------------------------------------
    // Planning (pure)
    // -------------------------------------------------------------------------

    /// Plan a whole-project scaffold under `root/<project_name>`.
    pub fn plan_project(
        &self,
        root: &Path,
        project_name: &ArtifactName,
        config: &GeneratorConfig,
    ) -> DddgenResult<ProjectStructure> {
        let folder = RelativePath::try_new(project_name.as_str())?;
        let mut plan = ProjectStructure::new(root.join(folder.as_path()));
        for dir in project_dirs(config)? {
            plan.add_directory(dir);
        }
        let readme = render_readme(project_name, config.language())?;
        plan.add_file(RelativePath::try_new(README_FILE)?, readme);
        Ok(plan)
    }

    /// Plan one file artifact under `root`.
    pub fn plan_artifact(
        &self,
        root: &Path,
        kind: ArtifactKind,
        name: &ArtifactName,
        config: &GeneratorConfig,
    ) -> DddgenResult<ProjectStructure> {
        let file = render(kind, config, name)?;
        let dir = artifact_dir(kind, config)?;
        let path = dir.join(file.file_name())?;

        Ok(ProjectStructure::new(root)
            .with_directory(dir)
            .with_file(path, file.content))
    }

    // -------------------------------------------------------------------------
    // Use cases
    // -------------------------------------------------------------------------

    /// Scaffold the directory set and README of a new project.
    #[instrument(
        skip_all,
        fields(
            project = %project_name,
            language = %config.language(),
            root = %root.display()
        )
    )]
    pub fn create_project(
        &self,
        root: &Path,
        project_name: &ArtifactName,
        config: &GeneratorConfig,
    ) -> DddgenResult<GenerationReport> {
        self.ensure_workspace(root)?;
        let plan = self.plan_project(root, project_name, config)?;
        self.apply(&plan)?;

        info!(
            directories = plan.directories().count(),
            "Project scaffold created"
        );
        Ok(GenerationReport::from(&plan))
    }

    /// Generate one file artifact into its layout directory.
    #[instrument(
        skip_all,
        fields(
            kind = %kind,
            name = %name,
            language = %config.language(),
            root = %root.display()
        )
    )]
    pub fn create_artifact(
        &self,
        root: &Path,
        kind: ArtifactKind,
        name: &ArtifactName,
        config: &GeneratorConfig,
    ) -> DddgenResult<GenerationReport> {
        self.ensure_workspace(root)?;
        let plan = self.plan_artifact(root, kind, name, config)?;
        self.apply(&plan)?;

        info!("{} created", kind.label());
        Ok(GenerationReport::from(&plan))
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn ensure_workspace(&self, root: &Path) -> DddgenResult<()> {
        if self.filesystem.exists(root) {
            Ok(())
        } else {
            Err(ApplicationError::WorkspaceMissing {
                path: root.to_path_buf(),
            }
            .into())
        }
    }

    /// Validate, then write every entry in order.
    fn apply(&self, plan: &ProjectStructure) -> DddgenResult<()> {
        plan.validate()?;

        for (written, entry) in plan.entries().iter().enumerate() {
            if let Err(e) = self.write_entry(plan, entry) {
                warn!(
                    error = %e,
                    written,
                    total = plan.entry_count(),
                    "Write failed, keeping entries already written"
                );
                return Err(e);
            }
        }

        Ok(())
    }

    fn write_entry(&self, plan: &ProjectStructure, entry: &FsEntry) -> DddgenResult<()> {
        match entry {
            FsEntry::Directory(dir) => {
                let path = plan.resolve(&dir.path);
                debug!(path = %path.display(), "Creating directory");
                self.filesystem.create_dir_all(&path)
            }
            FsEntry::File(file) => {
                let path = plan.resolve(&file.path);

                // Ensure parent exists
                if let Some(parent) = path.parent() {
                    self.filesystem.create_dir_all(parent)?;
                }

                debug!(path = %path.display(), bytes = file.size(), "Writing file");
                self.filesystem.write_file(&path, &file.content)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::MockFilesystem,
        domain::{DomainError, PackageIdentifier, TargetLanguage},
        error::{DddgenError, ErrorCategory},
    };
    use mockall::predicate::eq;

    fn name(s: &str) -> ArtifactName {
        ArtifactName::new(s).unwrap()
    }

    fn service_with(fs: MockFilesystem) -> ScaffoldService {
        ScaffoldService::new(Box::new(fs))
    }

    #[test]
    fn plan_artifact_places_file_in_layout_dir() {
        let service = service_with(MockFilesystem::new());
        let plan = service
            .plan_artifact(
                Path::new("/ws"),
                ArtifactKind::Entity,
                &name("Order"),
                &GeneratorConfig::default(),
            )
            .unwrap();

        let report = GenerationReport::from(&plan);
        assert_eq!(report.root, PathBuf::from("/ws"));
        assert_eq!(report.directories[0].to_string(), "Domain/Entities");
        assert_eq!(report.files[0].to_string(), "Domain/Entities/Order.ts");
    }

    #[test]
    fn names_cannot_climb_out_of_the_workspace() {
        let service = service_with(MockFilesystem::new());
        let config = GeneratorConfig::default();

        let err = service
            .plan_project(Path::new("/ws"), &name(".."), &config)
            .unwrap_err();
        assert!(matches!(
            err,
            DddgenError::Domain(DomainError::PathEscapesRoot { .. })
        ));
        assert!(
            service
                .plan_artifact(Path::new("/ws"), ArtifactKind::Entity, &name("../Order"), &config)
                .is_err()
        );
    }

    #[test]
    fn rooted_names_are_validation_errors() {
        let service = service_with(MockFilesystem::new());
        let config = GeneratorConfig::default();

        let err = service
            .plan_artifact(Path::new("/ws"), ArtifactKind::Entity, &name("/Order"), &config)
            .unwrap_err();
        assert!(matches!(
            err,
            DddgenError::Domain(DomainError::AbsolutePathNotAllowed { .. })
        ));
        assert_eq!(err.category(), ErrorCategory::Validation);

        let err = service
            .plan_project(Path::new("/ws"), &name("/abs/Shop"), &config)
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn plan_project_appends_readme_last() {
        let service = service_with(MockFilesystem::new());
        let plan = service
            .plan_project(
                Path::new("/ws"),
                &name("Shop"),
                &GeneratorConfig::new(TargetLanguage::CSharp),
            )
            .unwrap();

        assert_eq!(plan.root(), Path::new("/ws/Shop"));
        assert_eq!(plan.directories().count(), 8);
        assert!(matches!(plan.entries().last(), Some(FsEntry::File(_))));
        assert_eq!(
            plan.files().next().map(|f| f.content.as_str()),
            Some("# Shop - DDD project (C#)\n")
        );
    }

    #[test]
    fn missing_workspace_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let err = service_with(fs)
            .create_artifact(
                Path::new("/missing"),
                ArtifactKind::Entity,
                &name("Order"),
                &GeneratorConfig::default(),
            )
            .unwrap_err();

        assert!(matches!(
            err,
            DddgenError::Application(ApplicationError::WorkspaceMissing { .. })
        ));
    }

    #[test]
    fn java_without_package_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();

        let err = service_with(fs)
            .create_project(
                Path::new("/ws"),
                &name("Shop"),
                &GeneratorConfig::new(TargetLanguage::Java),
            )
            .unwrap_err();

        assert_eq!(err, DddgenError::Domain(DomainError::MissingPackageIdentifier));
    }

    #[test]
    fn artifact_writes_directory_then_file() {
        let cfg = GeneratorConfig::new(TargetLanguage::Java)
            .with_package(PackageIdentifier::parse("com.acme").unwrap());
        let dir = PathBuf::from("/ws/src/main/java/com/acme/api/controllers");
        let file = dir.join("OrderController.java");

        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all()
            .with(eq(dir.clone()))
            .times(2)
            .returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(move |path, content| {
                path == file && content.contains(r#"@RequestMapping("/order")"#)
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let report = service_with(fs)
            .create_artifact(Path::new("/ws"), ArtifactKind::Controller, &name("Order"), &cfg)
            .unwrap();
        assert_eq!(report.files.len(), 1);
    }

    #[test]
    fn write_failure_stops_without_rollback() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_create_dir_all().returning(|path| {
            if path.ends_with("Infrastructure/Data") {
                Err(ApplicationError::FilesystemFailure {
                    path: path.to_path_buf(),
                    reason: "read-only".into(),
                }
                .into())
            } else {
                Ok(())
            }
        });
        fs.expect_write_file().never();

        let err = service_with(fs)
            .create_project(Path::new("/ws"), &name("Shop"), &GeneratorConfig::default())
            .unwrap_err();

        assert!(matches!(
            err,
            DddgenError::Application(ApplicationError::FilesystemFailure { .. })
        ));
    }
}

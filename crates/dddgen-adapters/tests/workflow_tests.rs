//! Core services wired to the real adapters.

use std::path::{Path, PathBuf};

use dddgen_adapters::{LocalFilesystem, MemoryConfigStore, MemoryFilesystem, TomlConfigStore};
use dddgen_core::{application::ports::ConfigKey, prelude::*};

fn name(s: &str) -> ArtifactName {
    ArtifactName::new(s).unwrap()
}

#[test]
fn memory_adapters_run_a_java_project() {
    let fs = MemoryFilesystem::with_root("/ws");
    let store = MemoryConfigStore::new()
        .with(ConfigKey::Language, "java")
        .with(ConfigKey::Package, "com.acme.shop");

    let config = SettingsService::new(Box::new(store)).load().unwrap();
    ScaffoldService::new(Box::new(fs.clone()))
        .create_project(Path::new("/ws"), &name("Shop"), &config)
        .unwrap();

    for dir in [
        "domain/model/entities",
        "application/usecases",
        "infrastructure/repositories",
        "api/controllers",
    ] {
        let path = PathBuf::from("/ws/Shop/src/main/java/com/acme/shop").join(dir);
        assert!(fs.exists(&path), "missing {}", path.display());
    }
    assert_eq!(
        fs.read_file(Path::new("/ws/Shop/README.md")).as_deref(),
        Some("# Shop - DDD project (Java)\n")
    );
}

#[test]
fn partial_scaffold_is_kept_after_failure() {
    let fs = MemoryFilesystem::with_root("/ws");
    fs.fail_under("/ws/Shop/Infrastructure");

    let err = ScaffoldService::new(Box::new(fs.clone()))
        .create_project(Path::new("/ws"), &name("Shop"), &GeneratorConfig::default())
        .unwrap_err();

    assert!(matches!(
        err,
        DddgenError::Application(ApplicationError::FilesystemFailure { .. })
    ));
    assert!(fs.exists(Path::new("/ws/Shop/Domain/Entities")));
    assert!(fs.exists(Path::new("/ws/Shop/Application/UseCases")));
    assert!(!fs.exists(Path::new("/ws/Shop/API/Controllers")));
    assert!(fs.list_files().is_empty());
}

#[test]
fn local_adapters_write_real_files() {
    let tmp = tempfile::tempdir().unwrap();
    let settings = SettingsService::new(Box::new(TomlConfigStore::new(
        tmp.path().join("settings.toml"),
    )));
    let config = settings.change_language(TargetLanguage::CSharp, None).unwrap();

    ScaffoldService::new(Box::new(LocalFilesystem::new()))
        .create_artifact(tmp.path(), ArtifactKind::Controller, &name("Order"), &config)
        .unwrap();

    let content =
        std::fs::read_to_string(tmp.path().join("API/Controllers/OrderController.cs")).unwrap();
    assert!(content.contains(r#"[Route("[controller]")]"#));
    assert!(content.contains("namespace API.Controllers"));
}

#[test]
fn overwriting_an_artifact_replaces_content() {
    let tmp = tempfile::tempdir().unwrap();
    let service = ScaffoldService::new(Box::new(LocalFilesystem::new()));
    let path = tmp.path().join("Domain/Entities/Order.ts");
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "stale").unwrap();

    service
        .create_artifact(
            tmp.path(),
            ArtifactKind::Entity,
            &name("Order"),
            &GeneratorConfig::default(),
        )
        .unwrap();

    assert!(std::fs::read_to_string(&path).unwrap().starts_with("export class Order {"));
}

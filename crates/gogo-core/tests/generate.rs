use chrono::{DateTime, TimeZone, Utc};
use gogo_core::config::metadata::METADATA_FILE;
use gogo_core::{generate, generate_at, resolve, ProjectConfig, ProjectType, ScaffoldError};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 5, 20, 8, 15, 0).unwrap()
}

fn config(project_type: ProjectType, name: &str) -> ProjectConfig {
    let mut cfg = ProjectConfig::for_type(project_type);
    cfg.name = name.to_string();
    cfg.module = format!("github.com/example/{}", name);
    cfg.author = "Gopher".to_string();
    cfg
}

/// Every regular file under `root`, relative path -> contents
fn read_tree(root: &Path) -> BTreeMap<PathBuf, String> {
    WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let rel = entry.path().strip_prefix(root).unwrap().to_path_buf();
            (rel, fs::read_to_string(entry.path()).unwrap())
        })
        .collect()
}

fn read(project: &Path, rel: &str) -> String {
    fs::read_to_string(project.join(rel)).unwrap()
}

#[tokio::test]
async fn test_cli_project_end_to_end() {
    let temp = TempDir::new().unwrap();
    let cfg = config(ProjectType::Cli, "demo");

    let project = generate_at(&cfg, temp.path(), fixed_time()).await.unwrap();
    let dir = &project.project_dir;
    assert_eq!(dir, &temp.path().join("demo"));

    for path in [
        "gogo.yaml",
        "README.md",
        "LICENSE",
        ".gitignore",
        "Makefile",
        "go.mod",
        "cmd/demo/main.go",
        "cmd/demo/cmd/root.go",
        "cmd/demo/cmd/version.go",
        ".github/workflows/ci.yml",
        ".github/workflows/lint.yml",
        ".golangci.yml",
        ".pre-commit-config.yaml",
        ".commitlintrc.yaml",
    ] {
        assert!(dir.join(path).is_file(), "missing {}", path);
    }
    for path in ["main.go", "internal/api/server.go", "pkg/demo/demo.go"] {
        assert!(!dir.join(path).exists(), "unexpected {}", path);
    }

    let go_mod = read(dir, "go.mod");
    assert!(go_mod.starts_with("module github.com/example/demo\n\ngo 1.21\n"));
    assert!(go_mod.contains("github.com/spf13/cobra v1.9.1"));
    assert!(go_mod.contains("github.com/spf13/viper v1.19.0"));
    assert!(!go_mod.contains("gin-gonic"));

    let version = read(dir, "cmd/demo/cmd/version.go");
    assert!(version.contains("\"dev\""));
    assert!(version.contains("\"none\""));
    assert!(version.contains("\"unknown\""));

    let metadata = read(dir, METADATA_FILE);
    assert!(metadata.contains("# Generated by gogo on 2025-05-20T08:15:00Z"));
    assert!(metadata.contains("  type: cli\n"));

    let readme = read(dir, "README.md");
    assert!(readme.contains("# demo"));
    assert!(readme.contains("git clone github.com/example/demo.git"));
    assert!(readme.contains("go build -o bin/demo"));
}

#[tokio::test]
async fn test_api_project_files() {
    let temp = TempDir::new().unwrap();
    let cfg = config(ProjectType::Api, "svc");
    let project = generate_at(&cfg, temp.path(), fixed_time()).await.unwrap();
    let dir = &project.project_dir;

    assert!(dir.join("cmd/svc/main.go").is_file());
    assert!(dir.join("internal/config/config.go").is_file());
    assert!(dir.join("internal/api/server.go").is_file());
    assert!(!dir.join("cmd/svc/cmd/root.go").exists());

    let config_go = read(dir, "internal/config/config.go");
    assert!(config_go.contains("\"localhost\""));
    assert!(config_go.contains("\"8080\""));

    let go_mod = read(dir, "go.mod");
    assert!(go_mod.contains("github.com/gin-gonic/gin v1.10.0"));
    assert!(!go_mod.contains("cobra"));
}

#[tokio::test]
async fn test_library_project_files() {
    let temp = TempDir::new().unwrap();
    let cfg = config(ProjectType::Library, "greet");
    let project = generate_at(&cfg, temp.path(), fixed_time()).await.unwrap();
    let dir = &project.project_dir;

    assert!(dir.join("pkg/greet/greet.go").is_file());
    assert!(dir.join("pkg/greet/greet_test.go").is_file());
    assert!(!dir.join("cmd").exists());
    assert!(!dir.join("main.go").exists());

    let source = read(dir, "pkg/greet/greet.go");
    assert!(source.contains("package greet"));
    assert!(source.contains("func Hello(name string) string"));
}

#[tokio::test]
async fn test_default_project_main() {
    let temp = TempDir::new().unwrap();
    let cfg = config(ProjectType::Default, "hello");
    let project = generate_at(&cfg, temp.path(), fixed_time()).await.unwrap();

    assert!(read(&project.project_dir, "main.go").contains("Hello from hello!"));
    assert_eq!(
        read(&project.project_dir, "go.mod"),
        "module github.com/example/hello\n\ngo 1.21\n"
    );
}

#[tokio::test]
async fn test_license_variants() {
    let temp = TempDir::new().unwrap();

    let mut cfg = config(ProjectType::Default, "nolicense");
    cfg.license = "None".to_string();
    let project = generate_at(&cfg, temp.path(), fixed_time()).await.unwrap();
    assert!(!project.project_dir.join("LICENSE").exists());

    let mut cfg = config(ProjectType::Default, "apache");
    cfg.license = "Apache-2.0".to_string();
    let project = generate_at(&cfg, temp.path(), fixed_time()).await.unwrap();
    let license = read(&project.project_dir, "LICENSE");
    assert!(license.contains("Copyright (c) 2025 Gopher"));
    assert!(license.contains("This project is licensed under the Apache-2.0 License."));

    let mut cfg = config(ProjectType::Default, "custom");
    cfg.license = "WTFPL".to_string();
    let project = generate_at(&cfg, temp.path(), fixed_time()).await.unwrap();
    assert!(read(&project.project_dir, "LICENSE").contains("the WTFPL License"));
}

#[tokio::test]
async fn test_quality_tooling_toggles() {
    let temp = TempDir::new().unwrap();
    let mut cfg = config(ProjectType::Default, "bare");
    cfg.use_linters = false;
    cfg.use_pre_commit_hooks = false;
    cfg.use_git_hooks = false;
    cfg.use_github_actions = false;
    cfg.create_readme = false;
    cfg.create_makefile = false;

    let project = generate_at(&cfg, temp.path(), fixed_time()).await.unwrap();
    let dir = &project.project_dir;
    for path in [
        ".github",
        ".golangci.yml",
        ".pre-commit-config.yaml",
        ".commitlintrc.yaml",
        ".githooks",
        "README.md",
        "Makefile",
    ] {
        assert!(!dir.join(path).exists(), "unexpected {}", path);
    }
    assert!(dir.join(".gitignore").is_file());
    assert!(dir.join("gogo.yaml").is_file());
}

#[tokio::test]
async fn test_placeholders_in_empty_directories() {
    let temp = TempDir::new().unwrap();
    let cfg = config(ProjectType::Cli, "demo");
    let project = generate_at(&cfg, temp.path(), fixed_time()).await.unwrap();
    let dir = &project.project_dir;

    assert!(dir.join("docs/.gitkeep").is_file());
    assert!(dir.join("test/.gitkeep").is_file());
    assert!(dir.join("internal/.gitkeep").is_file());
    assert!(!dir.join("cmd/.gitkeep").exists());
}

#[tokio::test]
async fn test_plan_matches_disk() {
    let temp = TempDir::new().unwrap();
    let cfg = config(ProjectType::Api, "mirror");

    let plan = resolve(&cfg, fixed_time()).unwrap();
    let project = generate_at(&cfg, temp.path(), fixed_time()).await.unwrap();

    let planned: BTreeMap<PathBuf, String> = plan
        .files()
        .map(|f| (f.path.clone(), f.contents.clone()))
        .collect();
    assert_eq!(planned, read_tree(&project.project_dir));
    assert_eq!(project.files.len(), planned.len());
}

#[tokio::test]
async fn test_regenerate_overwrites_in_place() {
    let temp = TempDir::new().unwrap();
    let cfg = config(ProjectType::Cli, "again");

    let first = generate_at(&cfg, temp.path(), fixed_time()).await.unwrap();
    fs::write(first.project_dir.join("go.mod"), "edited").unwrap();

    let second = generate_at(&cfg, temp.path(), fixed_time()).await.unwrap();
    assert_eq!(first.project_dir, second.project_dir);
    assert!(read(&second.project_dir, "go.mod").starts_with("module github.com/example/again"));
}

#[tokio::test]
async fn test_saved_config_reproduces_project() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("configs/demo.yaml");
    let cfg = config(ProjectType::Cli, "roundtrip");
    cfg.save(&config_path).unwrap();

    let loaded = ProjectConfig::load(&config_path).unwrap();
    assert_eq!(loaded, cfg);

    let a = generate_at(&cfg, temp.path().join("a"), fixed_time()).await.unwrap();
    let b = generate_at(&loaded, temp.path().join("b"), fixed_time()).await.unwrap();
    assert_eq!(read_tree(&a.project_dir), read_tree(&b.project_dir));
}

#[tokio::test]
async fn test_empty_name_rejected_before_writing() {
    let temp = TempDir::new().unwrap();
    let mut cfg = ProjectConfig::default();
    cfg.name = String::new();

    let err = generate(&cfg, temp.path()).await.unwrap_err();
    assert!(matches!(err, ScaffoldError::Validation(_)));
    assert_eq!(fs::read_dir(temp.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_unwritable_output_fails_with_path() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "not a directory").unwrap();

    let cfg = config(ProjectType::Default, "demo");
    let err = generate(&cfg, &blocker).await.unwrap_err();
    match err {
        ScaffoldError::Io { path, .. } => assert!(path.starts_with(&blocker)),
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_dot_names_never_escape_output_root() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("out");
    fs::create_dir_all(&output).unwrap();

    for name in ["..", "."] {
        let mut cfg = config(ProjectType::Default, "placeholder");
        cfg.name = name.to_string();

        let err = generate(&cfg, &output).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::Validation(_)), "{:?}", name);
    }

    assert!(!temp.path().join("go.mod").exists());
    assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
}

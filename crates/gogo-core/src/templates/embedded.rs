//! Template sources compiled into the binary
//!
//! Paths are relative to this file. Every template listed in [`ALL`] is
//! registered with the renderer under its `name`.

pub struct EmbeddedTemplate {
    pub name: &'static str,
    pub source: &'static str,
}

macro_rules! embed {
    ($name:expr, $path:expr) => {
        EmbeddedTemplate {
            name: $name,
            source: include_str!(concat!("../../templates/", $path)),
        }
    };
}

pub const README: &str = "README.md";
pub const LICENSE_MIT: &str = "LICENSE-MIT";
pub const LICENSE_GENERIC: &str = "LICENSE-generic";
pub const GITIGNORE: &str = "gitignore";
pub const MAKEFILE: &str = "Makefile";
pub const GO_MOD: &str = "go.mod";

pub const CI_WORKFLOW: &str = "ci.yml";
pub const LINT_WORKFLOW: &str = "lint.yml";
pub const GOLANGCI: &str = "golangci.yml";
pub const PRE_COMMIT: &str = "pre-commit-config.yaml";
pub const COMMITLINT: &str = "commitlintrc.yaml";
pub const GITHOOK_PRE_COMMIT: &str = "githook-pre-commit";
pub const GITHOOK_COMMIT_MSG: &str = "githook-commit-msg";

pub const CLI_MAIN: &str = "cli/main.go";
pub const CLI_ROOT: &str = "cli/root.go";
pub const CLI_VERSION: &str = "cli/version.go";
pub const API_MAIN: &str = "api/main.go";
pub const API_CONFIG: &str = "api/config.go";
pub const API_SERVER_GIN: &str = "api/server_gin.go";
pub const API_SERVER_HTTP: &str = "api/server_http.go";
pub const LIBRARY_SOURCE: &str = "library/lib.go";
pub const LIBRARY_TEST: &str = "library/lib_test.go";
pub const DEFAULT_MAIN: &str = "default/main.go";

pub const ALL: &[EmbeddedTemplate] = &[
    embed!(README, "root/README.md.tmpl"),
    embed!(LICENSE_MIT, "root/LICENSE-MIT.tmpl"),
    embed!(LICENSE_GENERIC, "root/LICENSE-generic.tmpl"),
    embed!(GITIGNORE, "root/gitignore.tmpl"),
    embed!(MAKEFILE, "root/Makefile.tmpl"),
    embed!(GO_MOD, "root/go.mod.tmpl"),
    embed!(CI_WORKFLOW, "quality/ci.yml.tmpl"),
    embed!(LINT_WORKFLOW, "quality/lint.yml.tmpl"),
    embed!(GOLANGCI, "quality/golangci.yml.tmpl"),
    embed!(PRE_COMMIT, "quality/pre-commit-config.yaml.tmpl"),
    embed!(COMMITLINT, "quality/commitlintrc.yaml.tmpl"),
    embed!(GITHOOK_PRE_COMMIT, "quality/githook-pre-commit.tmpl"),
    embed!(GITHOOK_COMMIT_MSG, "quality/githook-commit-msg.tmpl"),
    embed!(CLI_MAIN, "cli/main.go.tmpl"),
    embed!(CLI_ROOT, "cli/root.go.tmpl"),
    embed!(CLI_VERSION, "cli/version.go.tmpl"),
    embed!(API_MAIN, "api/main.go.tmpl"),
    embed!(API_CONFIG, "api/config.go.tmpl"),
    embed!(API_SERVER_GIN, "api/server_gin.go.tmpl"),
    embed!(API_SERVER_HTTP, "api/server_http.go.tmpl"),
    embed!(LIBRARY_SOURCE, "library/lib.go.tmpl"),
    embed!(LIBRARY_TEST, "library/lib_test.go.tmpl"),
    embed!(DEFAULT_MAIN, "default/main.go.tmpl"),
];

//! Text templates for generated files
//!
//! File bodies live as `.tmpl` resources under `templates/`, embedded at compile
//! time (see [`embedded`]) and rendered with Handlebars against a single
//! [`TemplateContext`] built from the project config.
//!
//! Block helpers (`{{#if}}`, `{{#each}}`) are always written inline with
//! surrounding text so the output does not depend on standalone-line
//! whitespace stripping.

pub mod context;
pub mod embedded;

use crate::error::{Result, ScaffoldError};
use handlebars::Handlebars;

pub use context::{Requirement, TemplateContext};

/// Renders embedded templates by name
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl TemplateRenderer {
    /// Create a renderer with every embedded template registered
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        // Output is source code and config, never HTML
        registry.register_escape_fn(handlebars::no_escape);

        for template in embedded::ALL {
            registry
                .register_template_string(template.name, template.source)
                .map_err(|e| ScaffoldError::Template {
                    name: template.name.to_string(),
                    message: e.to_string(),
                })?;
        }

        Ok(Self { registry })
    }

    pub fn render(&self, name: &str, context: &TemplateContext) -> Result<String> {
        self.registry
            .render(name, context)
            .map_err(|e| ScaffoldError::Template {
                name: name.to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ProjectConfig, ProjectType};
    use chrono::{TimeZone, Utc};

    fn context_for(cfg: &ProjectConfig) -> TemplateContext {
        TemplateContext::new(cfg, Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())
    }

    fn demo_config(project_type: ProjectType) -> ProjectConfig {
        let mut cfg = ProjectConfig::for_type(project_type);
        cfg.name = "demo".to_string();
        cfg.module = "example.com/demo".to_string();
        cfg.author = "Ada".to_string();
        cfg
    }

    #[test]
    fn test_all_templates_register() {
        assert!(TemplateRenderer::new().is_ok());
    }

    #[test]
    fn test_every_template_renders_for_every_type() {
        let renderer = TemplateRenderer::new().unwrap();
        for project_type in ProjectType::ALL {
            let ctx = context_for(&demo_config(project_type));
            for template in embedded::ALL {
                let out = renderer.render(template.name, &ctx).unwrap();
                assert!(!out.contains("{{"), "unrendered tag in {}", template.name);
            }
        }
    }

    #[test]
    fn test_go_mod_requires_block() {
        let renderer = TemplateRenderer::new().unwrap();

        let cli = renderer
            .render(embedded::GO_MOD, &context_for(&demo_config(ProjectType::Cli)))
            .unwrap();
        assert_eq!(
            cli,
            "module example.com/demo\n\ngo 1.21\n\nrequire (\n\
             \tgithub.com/spf13/cobra v1.9.1\n\
             \tgithub.com/spf13/viper v1.19.0\n)\n"
        );

        let plain = renderer
            .render(
                embedded::GO_MOD,
                &context_for(&demo_config(ProjectType::Default)),
            )
            .unwrap();
        assert_eq!(plain, "module example.com/demo\n\ngo 1.21\n");
    }

    #[test]
    fn test_root_command_with_and_without_viper() {
        let renderer = TemplateRenderer::new().unwrap();

        let mut cfg = demo_config(ProjectType::Cli);
        let with_viper = renderer
            .render(embedded::CLI_ROOT, &context_for(&cfg))
            .unwrap();
        assert!(with_viper.contains("\"github.com/spf13/viper\""));
        assert!(with_viper.contains("viper.SetConfigName(\".demo\")"));
        assert!(with_viper.contains("var cfgFile string"));

        cfg.use_viper = false;
        let without = renderer
            .render(embedded::CLI_ROOT, &context_for(&cfg))
            .unwrap();
        assert!(!without.contains("viper"));
        assert!(!without.contains("\"fmt\""));
        assert!(without.contains("// Add your flags here"));
    }

    #[test]
    fn test_readme_make_section_follows_flag() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut cfg = demo_config(ProjectType::Default);

        let with_make = renderer.render(embedded::README, &context_for(&cfg)).unwrap();
        assert!(with_make.contains("## Using Make"));
        assert!(with_make.contains("git clone example.com/demo.git"));

        cfg.create_makefile = false;
        let without = renderer.render(embedded::README, &context_for(&cfg)).unwrap();
        assert!(!without.contains("## Using Make"));
    }

    #[test]
    fn test_name_is_escaped_inside_go_strings() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut cfg = demo_config(ProjectType::Api);
        cfg.name = "say \"hi\" 100%".to_string();
        let ctx = context_for(&cfg);

        let main = renderer.render(embedded::DEFAULT_MAIN, &ctx).unwrap();
        assert!(main.contains(r#"fmt.Println("Hello from say \"hi\" 100%!")"#));

        let api_main = renderer.render(embedded::API_MAIN, &ctx).unwrap();
        assert!(api_main.contains(
            r#"log.Printf("Starting %s on %s", "say \"hi\" 100%", cfg.Address())"#
        ));

        let version = renderer.render(embedded::CLI_VERSION, &ctx).unwrap();
        assert!(version.contains(r#"fmt.Println("say \"hi\" 100% CLI")"#));

        for server in [embedded::API_SERVER_GIN, embedded::API_SERVER_HTTP] {
            let out = renderer.render(server, &ctx).unwrap();
            assert!(out.contains(r#""Hello from say \"hi\" 100%!""#));
        }
    }

    #[test]
    fn test_values_are_not_html_escaped() {
        let renderer = TemplateRenderer::new().unwrap();
        let mut cfg = demo_config(ProjectType::Default);
        cfg.author = "Tom & Jerry <tj@example.com>".to_string();

        let license = renderer
            .render(embedded::LICENSE_MIT, &context_for(&cfg))
            .unwrap();
        assert!(license.contains("Copyright (c) 2024 Tom & Jerry <tj@example.com>"));
    }
}

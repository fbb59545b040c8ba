//! Handlebars rendering for the prepend header and the `.envrc` block
//!
//! The renderer runs in strict mode: referencing a field the data does not have is an
//! error rather than an empty string. Output is plain text, so nothing is escaped.

use super::env::{EnvEntry, EnvVars};
use crate::config::Program;
use crate::error::Result;
use handlebars::Handlebars;
use serde::Serialize;

/// Header meant for the top of source files
pub const PREPEND_TEMPLATE: &str = "{{program.name}}: {{program.description}}

{{licence_short}}
{{details}}

Copyright ©{{year}} {{author}} all rights reserved.
Inquiries may be directed to this address: {{email}}.
{{extra_text}}
";

/// One `export NAME=VALUE` line per variable
pub const ENV_TEMPLATE: &str = "{{#each variables}}export {{name}}={{value}}\n{{/each}}";

/// Data for [`PREPEND_TEMPLATE`]
#[derive(Debug, Clone, Serialize)]
pub struct PrependPayload {
    pub program: Program,
    /// Short notice of the selected licence, empty if it has none
    pub licence_short: String,
    pub author: String,
    pub email: String,
    pub year: i32,
    /// The "anything extra" text from the identity stage
    pub details: String,
    /// Text entered for the prepend block itself
    pub extra_text: String,
}

#[derive(Serialize)]
struct EnvData<'a> {
    variables: Vec<EnvEntry<'a>>,
}

/// Strict, non-escaping template renderer
pub struct TemplateRenderer {
    registry: Handlebars<'static>,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    pub fn new() -> Self {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        Self { registry }
    }

    /// Render a template source against `data`
    pub fn render<T: Serialize>(&self, source: &str, data: &T) -> Result<String> {
        Ok(self.registry.render_template(source, data)?)
    }

    pub fn render_prepend(&self, payload: &PrependPayload) -> Result<String> {
        self.render(PREPEND_TEMPLATE, payload)
    }

    /// Render the export block. An empty set renders to an empty string.
    pub fn render_env(&self, vars: &EnvVars) -> Result<String> {
        let data = EnvData {
            variables: vars.entries(),
        };
        self.render(ENV_TEMPLATE, &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BefossError;

    fn payload() -> PrependPayload {
        PrependPayload {
            program: Program {
                name: "demo".to_string(),
                description: "A sample tool for testing".to_string(),
            },
            licence_short: "Licensed under the Zed Licence".to_string(),
            author: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            year: 2024,
            details: String::new(),
            extra_text: "Made with care & <love>".to_string(),
        }
    }

    #[test]
    fn test_render_env_empty_set() {
        let renderer = TemplateRenderer::new();
        let out = renderer.render_env(&EnvVars::new()).unwrap();
        assert!(out.trim().is_empty());
    }

    #[test]
    fn test_render_env_single_variable() {
        let renderer = TemplateRenderer::new();
        let out = renderer.render_env(&EnvVars::seeded()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec!["export VAR2=value2"]);
    }

    #[test]
    fn test_render_env_one_line_per_variable() {
        let mut vars = EnvVars::seeded();
        vars.insert("API_URL", "http://localhost:8080/?a=1&b=2").unwrap();
        let out = TemplateRenderer::new().render_env(&vars).unwrap();
        assert_eq!(
            out,
            "export API_URL=http://localhost:8080/?a=1&b=2\nexport VAR2=value2\n"
        );
    }

    #[test]
    fn test_render_prepend_block() {
        let out = TemplateRenderer::new().render_prepend(&payload()).unwrap();
        assert!(out.starts_with("demo: A sample tool for testing\n"));
        assert!(out.contains("Licensed under the Zed Licence"));
        assert!(out.contains("Copyright ©2024 Jane Doe all rights reserved."));
        assert!(out.contains("Inquiries may be directed to this address: jane@example.com."));
        // no HTML escaping
        assert!(out.contains("Made with care & <love>"));
    }

    #[test]
    fn test_missing_field_is_template_error() {
        let err = TemplateRenderer::new()
            .render("{{program.version}}", &payload())
            .unwrap_err();
        assert!(matches!(err, BefossError::Template(_)));
    }

    #[test]
    fn test_malformed_template_is_template_error() {
        let err = TemplateRenderer::new()
            .render("{{#if author}}unterminated", &payload())
            .unwrap_err();
        assert!(matches!(err, BefossError::Template(_)));
    }
}

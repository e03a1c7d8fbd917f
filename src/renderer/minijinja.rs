use crate::{error::Result, ext::PathExt, renderer::interface::TemplateRenderer};
use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use std::path::Path;

const DEFAULT_TEMPLATE_NAME: &str = "temp";

/// MiniJinja-based template rendering engine.
///
/// Output is never escaped: the generated files are C++, CMake, Dockerfiles and JSON,
/// and parameters must land in them exactly as supplied.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);

        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        let name = template_name.unwrap_or(DEFAULT_TEMPLATE_NAME);
        log::trace!("Rendering template '{name}'");
        Ok(self.env.render_named_str(name, template, context)?)
    }

    fn render_path(
        &self,
        template_path: &Path,
        context: &serde_json::Value,
    ) -> Result<String> {
        let path_str = template_path.to_str_checked()?;
        let template_name = template_path.file_name().and_then(|name| name.to_str());
        self.render(path_str, context, template_name)
    }
}

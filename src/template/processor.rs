use indexmap::IndexMap;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::ioutils::{create_dir_all, write_file};
use crate::params::ServiceParams;
use crate::renderer::{MiniJinjaRenderer, TemplateRenderer};

use super::blueprint::{ContentKind, FileTemplate, FILES, FOLDERS};
use super::operation::TemplateOperation;

pub struct ScaffoldProcessor<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,

    /// Other
    params: &'a ServiceParams,
    context: serde_json::Value,
}

impl<'a> ScaffoldProcessor<'a> {
    pub fn new(engine: &'a dyn TemplateRenderer, params: &'a ServiceParams) -> Self {
        Self { engine, params, context: params.context() }
    }

    /// Renders the folder list, relative to the base path, in blueprint order.
    pub fn render_folders(&self) -> Result<Vec<PathBuf>> {
        FOLDERS
            .iter()
            .map(|folder| self.render_relative_path(folder))
            .collect()
    }

    /// Renders the file map: relative path to the content that will be written there.
    pub fn render_files(&self) -> Result<IndexMap<PathBuf, String>> {
        let mut files = IndexMap::with_capacity(FILES.len());
        for file in FILES.iter() {
            let path = self.render_relative_path(file.path)?;
            let content = self.render_content(file)?;
            files.insert(path, content);
        }
        Ok(files)
    }

    /// Builds every operation of the run. Nothing touches the disk until all templates
    /// have rendered, so a template error never leaves a partial tree behind.
    pub fn plan(&self) -> Result<Vec<TemplateOperation>> {
        let base_path = self.params.base_path();
        let folders = self.render_folders()?;
        let files = self.render_files()?;

        let directories = folders.into_iter().map(|folder| {
            let target = base_path.join(folder);
            let target_exists = target.exists();
            TemplateOperation::CreateDirectory { target, target_exists }
        });
        let writes = files.into_iter().map(|(path, content)| {
            let target = base_path.join(path);
            let target_exists = target.exists();
            TemplateOperation::Write { target, content, target_exists }
        });

        Ok(directories.chain(writes).collect())
    }

    /// Performs a single operation. Directory creation tolerates existing directories;
    /// writes replace whatever is at the target.
    pub fn apply(&self, operation: &TemplateOperation) -> Result<()> {
        log::debug!("Handling file operation: {}", operation.error_context());
        let result = match operation {
            TemplateOperation::CreateDirectory { target, .. } => create_dir_all(target),
            TemplateOperation::Write { target, content, .. } => write_file(content, target),
        };
        result.map_err(|e| Error::OperationError {
            operation: operation.error_context(),
            source: Box::new(e),
        })
    }

    /// Plans and applies the whole run, stopping at the first failure.
    ///
    /// # Arguments
    /// * `dry_run` - Log the operations without performing them
    ///
    /// # Returns
    /// * `Result<Vec<TemplateOperation>>` - The operations in the order they were handled
    pub fn scaffold(&self, dry_run: bool) -> Result<Vec<TemplateOperation>> {
        let operations = self.plan()?;
        for operation in &operations {
            if !dry_run {
                self.apply(operation)?;
            }
            log::info!("{}", operation.get_message(dry_run));
        }
        Ok(operations)
    }

    fn render_relative_path(&self, template: &str) -> Result<PathBuf> {
        let rendered = self.engine.render_path(Path::new(template), &self.context)?;
        Ok(PathBuf::from(rendered))
    }

    fn render_content(&self, file: &FileTemplate) -> Result<String> {
        match file.kind {
            ContentKind::Rendered => {
                self.engine.render(file.body, &self.context, Some(file.path))
            }
            ContentKind::Verbatim => Ok(file.body.to_string()),
        }
    }
}

/// Generates the skeleton of a new Drogon service under `base_path/service_name`.
///
/// Existing folders are reused and existing files are overwritten. A filesystem failure
/// aborts the run and leaves whatever was already created in place.
///
/// # Examples
/// ```no_run
/// use drogon_scaffold::create_service_structure;
///
/// create_service_structure("/tmp/out", "billing", "billing_svc", "BillingController")?;
/// # Ok::<(), drogon_scaffold::error::Error>(())
/// ```
pub fn create_service_structure(
    base_path: impl Into<PathBuf>,
    service_name: &str,
    cmake_target: &str,
    cpp_name: &str,
) -> Result<()> {
    let params = ServiceParams::new(base_path, service_name, cmake_target, cpp_name);
    let engine = MiniJinjaRenderer::new();
    ScaffoldProcessor::new(&engine, &params).scaffold(false)?;
    Ok(())
}

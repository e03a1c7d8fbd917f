use crate::constants::DRY_RUN_PREFIX;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOperation {
    CreateDirectory { target: PathBuf, target_exists: bool },
    Write { target: PathBuf, content: String, target_exists: bool },
}

impl TemplateOperation {
    /// Returns the target path for this operation.
    pub fn target_path(&self) -> &PathBuf {
        match self {
            TemplateOperation::CreateDirectory { target, .. } => target,
            TemplateOperation::Write { target, .. } => target,
        }
    }

    /// Returns a brief description of this operation for error messages.
    pub fn error_context(&self) -> String {
        match self {
            TemplateOperation::CreateDirectory { target, .. } => {
                format!("create directory '{}'", target.display())
            }
            TemplateOperation::Write { target, .. } => {
                format!("write '{}'", target.display())
            }
        }
    }

    /// Gets a message describing the operation and its status.
    ///
    /// # Arguments
    /// * `dry_run` - Whether this is a dry run (no actual file operations)
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { DRY_RUN_PREFIX } else { "" };

        match self {
            TemplateOperation::CreateDirectory { target, target_exists } => {
                if *target_exists {
                    format!(
                        "{}Skipping directory creation '{}' (already exists)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Creating directory '{}'", prefix, target.display())
                }
            }

            TemplateOperation::Write { target, target_exists, .. } => {
                if *target_exists {
                    format!(
                        "{}Writing to '{}' (overwriting existing file)",
                        prefix,
                        target.display()
                    )
                } else {
                    format!("{}Writing to '{}'", prefix, target.display())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_directory_logs_basic_message() {
        let target = PathBuf::from("/tmp/out/billing/source");
        let op = TemplateOperation::CreateDirectory { target, target_exists: false };
        assert_eq!(op.get_message(false), "Creating directory '/tmp/out/billing/source'");
    }

    #[test]
    fn create_directory_logs_skip_when_exists() {
        let target = PathBuf::from("/tmp/out/billing/source");
        let op = TemplateOperation::CreateDirectory { target, target_exists: true };
        assert_eq!(
            op.get_message(false),
            "Skipping directory creation '/tmp/out/billing/source' (already exists)"
        );
    }

    #[test]
    fn write_logs_overwrite_message() {
        let op = TemplateOperation::Write {
            target: PathBuf::from("/tmp/out/billing/Dockerfile"),
            content: String::new(),
            target_exists: true,
        };
        assert_eq!(
            op.get_message(false),
            "Writing to '/tmp/out/billing/Dockerfile' (overwriting existing file)"
        );
    }

    #[test]
    fn dry_run_messages_are_prefixed() {
        let op = TemplateOperation::Write {
            target: PathBuf::from("/tmp/out/billing/main.cpp"),
            content: String::new(),
            target_exists: false,
        };
        assert_eq!(op.get_message(true), "[DRY RUN] Writing to '/tmp/out/billing/main.cpp'");
    }

    #[test]
    fn error_context_names_target() {
        let op = TemplateOperation::CreateDirectory {
            target: PathBuf::from("/root/locked"),
            target_exists: false,
        };
        assert_eq!(op.error_context(), "create directory '/root/locked'");
        assert_eq!(op.target_path(), &PathBuf::from("/root/locked"));
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    /// A directory creation or file write failed part way through the run.
    /// Everything done before the failure stays on disk.
    #[error("Failed to {operation}. Original error: {source}")]
    OperationError {
        operation: String,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(crate::constants::exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_error_names_the_operation() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = Error::OperationError {
            operation: "write '/tmp/x/Dockerfile'".to_string(),
            source: Box::new(Error::IoError(io)),
        };
        let message = err.to_string();
        assert!(message.starts_with("Failed to write '/tmp/x/Dockerfile'."));
        assert!(message.contains("denied"));
    }
}

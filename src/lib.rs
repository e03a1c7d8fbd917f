/// Handles argument parsing and the command-line run.
pub mod cli;

/// Shared literals.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Extension traits for standard library types.
pub mod ext;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Values that parameterize a generated service.
pub mod params;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Service skeleton layout and generation.
pub mod template;

pub use params::ServiceParams;
pub use template::create_service_structure;

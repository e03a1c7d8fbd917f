//! Service skeleton generation
//!
//! - `blueprint`: the fixed folder and file layout of a generated service
//! - `operation`: directory creations and file writes produced from the blueprint
//! - `processor`: renders the blueprint and applies the resulting operations

pub mod blueprint;
pub mod operation;
pub mod processor;

pub use processor::{create_service_structure, ScaffoldProcessor};

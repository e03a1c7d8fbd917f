use crate::constants::context_keys;
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};

/// The four caller-supplied values that drive a scaffolding run.
///
/// Values are taken as-is. Nothing checks that `service_name` is a safe path
/// component or that `cpp_name` is a valid C++ identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceParams {
    pub base_path: PathBuf,
    pub service_name: String,
    pub cmake_target: String,
    pub cpp_name: String,
}

impl ServiceParams {
    pub fn new(
        base_path: impl Into<PathBuf>,
        service_name: impl Into<String>,
        cmake_target: impl Into<String>,
        cpp_name: impl Into<String>,
    ) -> Self {
        Self {
            base_path: base_path.into(),
            service_name: service_name.into(),
            cmake_target: cmake_target.into(),
            cpp_name: cpp_name.into(),
        }
    }

    /// Template context. `base_path` only decides where files go, so it is left out.
    pub fn context(&self) -> serde_json::Value {
        json!({
            (context_keys::SERVICE_NAME): self.service_name,
            (context_keys::CMAKE_TARGET): self.cmake_target,
            (context_keys::CPP_NAME): self.cpp_name,
        })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Directory that holds the generated module.
    pub fn service_root(&self) -> PathBuf {
        self.base_path.join(&self.service_name)
    }
}

//! Constants used throughout drogon-scaffold

/// Prefix attached to every log line emitted in dry-run mode
pub const DRY_RUN_PREFIX: &str = "[DRY RUN] ";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}

/// Names of the variables available inside the service templates
pub mod context_keys {
    pub const SERVICE_NAME: &str = "service_name";
    pub const CMAKE_TARGET: &str = "cmake_target";
    pub const CPP_NAME: &str = "cpp_name";
}

//! ImmunetErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a stable code string that the
/// CLI prints ahead of the human-readable message.
pub trait ImmunetErrorCode {
    /// Returns the error code string (e.g., "PARSE_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted diagnostic: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const PARSE_ERROR: &str = "PARSE_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const INVARIANT_VIOLATION: &str = "INVARIANT_VIOLATION";
pub const IO_ERROR: &str = "IO_ERROR";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const SAMPLING_ERROR: &str = "SAMPLING_ERROR";
pub const GENERATOR_ERROR: &str = "GENERATOR_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";

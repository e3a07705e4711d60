//! Error handling for immunet.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod generator_error;
pub mod parse_error;
pub mod pipeline_error;
pub mod sampling_error;
pub mod storage_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::ImmunetErrorCode;
pub use generator_error::GeneratorError;
pub use parse_error::ParseError;
pub use pipeline_error::PipelineError;
pub use sampling_error::SamplingError;
pub use storage_error::StorageError;
pub use validation_error::ValidationError;

//! Logging for immunet: `tracing` with an `EnvFilter` read from `IMMUNET_LOG`.

pub mod setup;

pub use setup::{env_filter, init_tracing};

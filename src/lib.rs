//! Debug build driver for the SCC compiler.
//!
//! Compiles the SCC translation units with a host C++ toolchain in one
//! invocation and reports the outcome in a single line.

/// Contains the build driver pipeline.
pub mod driver;
/// Contains the error types for the application.
pub mod error;
/// Contains the logger setup.
pub mod logger;

pub use driver::{BuildConfig, BuildDriver, Cli};
pub use error::{ConfigError, DriverError};

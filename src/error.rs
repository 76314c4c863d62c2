use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Exit code reported when the toolchain could not be started.
pub const LAUNCH_FAILURE_EXIT_CODE: u8 = 127;

/// Exit code reported when the build was rejected before spawning anything.
pub const CONFIG_ERROR_EXIT_CODE: u8 = 2;

/// A build request that cannot be satisfied as configured.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("source manifest is empty")]
    EmptyManifest,
    #[error("output path is empty")]
    EmptyOutputPath,
    #[error("working directory `{}` does not exist", .0.display())]
    MissingDirectory(PathBuf),
}

/// Error types for the build driver
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("toolchain `{program}` not found; verify that {toolchain} is installed")]
    Launch {
        program: String,
        toolchain: &'static str,
        #[source]
        source: io::Error,
    },

    #[error("Compilation failed. Make sure you have {toolchain} installed.")]
    CompileFailed {
        toolchain: &'static str,
        status: ExitStatus,
    },
}

impl DriverError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Config(_) => CONFIG_ERROR_EXIT_CODE,
            DriverError::Launch { .. } => LAUNCH_FAILURE_EXIT_CODE,
            DriverError::CompileFailed { status, .. } => status_exit_code(*status),
        }
    }
}

/// Map a failed child status onto a non-zero process exit code.
///
/// Codes outside `1..=255` collapse to 1. On Unix a child killed by a signal
/// maps to `128 + signal`, matching what a shell would report.
pub fn status_exit_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return match u8::try_from(code) {
            Ok(0) | Err(_) => 1,
            Ok(code) => code,
        };
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(1);
        }
    }

    1
}

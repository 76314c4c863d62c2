use std::path::PathBuf;

/// Where the driver is in its single linear pipeline.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DriverState {
    #[default]
    Idle,
    BuildingCommand,
    Invoking,
    Reporting,
}

/// outcome of a build that completed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildSuccess {
    /// The toolchain exited with status 0 and produced `output`.
    Built { output: PathBuf },
    /// The command was assembled but not run.
    DryRun { command_line: String },
}

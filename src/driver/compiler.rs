//! Build pipeline orchestration module
//!
//! `BuildDriver` walks one build through
//! `Idle -> BuildingCommand -> Invoking -> Reporting -> Idle`. Nothing is kept
//! between runs.

use log::{debug, info};

use crate::error::{ConfigError, DriverError};

use super::artifact::{BuildSuccess, DriverState};
use super::cli::BuildConfig;
use super::command::{BuildCommand, CommandBuilder};
use super::invoker::{Invoker, ProcessInvoker};
use super::output::ResultReporter;

/// Main build driver
pub struct BuildDriver<I = ProcessInvoker> {
    config: BuildConfig,
    invoker: I,
    reporter: ResultReporter,
    state: DriverState,
}

impl BuildDriver<ProcessInvoker> {
    /// Create a driver that spawns the real toolchain
    pub fn new(config: BuildConfig) -> Self {
        Self::with_invoker(config, ProcessInvoker)
    }
}

impl<I: Invoker> BuildDriver<I> {
    pub fn with_invoker(config: BuildConfig, invoker: I) -> Self {
        BuildDriver {
            config,
            invoker,
            reporter: ResultReporter::new(),
            state: DriverState::Idle,
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn invoker(&self) -> &I {
        &self.invoker
    }

    fn transition(&mut self, next: DriverState) {
        debug!("{:?} -> {:?}", self.state, next);
        self.state = next;
    }

    /// Assemble the toolchain command for the current configuration.
    pub fn build_command(&self) -> Result<BuildCommand, ConfigError> {
        let command = CommandBuilder::new(&self.config.toolchain)
            .build(&self.config.output_path, &self.config.manifest)?;

        match &self.config.working_dir {
            Some(dir) if !dir.is_dir() => Err(ConfigError::MissingDirectory(dir.clone())),
            Some(dir) => Ok(command.in_dir(dir)),
            None => Ok(command),
        }
    }

    /// Run one build without reporting it.
    ///
    /// The result goes back to the caller, so the driver moves straight from
    /// the last pipeline state to `Idle` without passing through `Reporting`.
    /// Configuration errors are returned before anything is spawned.
    pub fn run(&mut self) -> Result<BuildSuccess, DriverError> {
        let result = self.run_pipeline();
        self.transition(DriverState::Idle);
        result
    }

    fn run_pipeline(&mut self) -> Result<BuildSuccess, DriverError> {
        self.transition(DriverState::BuildingCommand);
        let command = self.build_command()?;
        info!("Selected toolchain: {}", self.config.toolchain.display_name());
        debug!("Build command: {}", command);

        if self.config.dry_run {
            return Ok(BuildSuccess::DryRun {
                command_line: command.to_string(),
            });
        }

        self.transition(DriverState::Invoking);
        let toolchain = self.config.toolchain.display_name();
        let status = self.invoker.invoke(&command).map_err(|source| DriverError::Launch {
            program: command.program().display().to_string(),
            toolchain,
            source,
        })?;

        if !status.success() {
            return Err(DriverError::CompileFailed { toolchain, status });
        }

        Ok(BuildSuccess::Built {
            output: command.output().to_path_buf(),
        })
    }

    /// Run one build, print its single result line and return the exit code.
    pub fn run_and_report(&mut self) -> std::process::ExitCode {
        let result = self.run_pipeline();
        self.transition(DriverState::Reporting);
        if let Err(e) = &result {
            debug!("Build failed: {e:?}");
        }
        let code = self.reporter.report(&result);
        self.transition(DriverState::Idle);
        code
    }
}

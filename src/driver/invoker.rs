//! This module is responsible for running the toolchain.
//! The child inherits the driver's standard streams, so compiler and linker
//! diagnostics reach the user unmodified.

use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use log::debug;

use super::command::BuildCommand;

/// Runs a [`BuildCommand`] to completion.
pub trait Invoker {
    /// Run `command`, blocking until it exits.
    ///
    /// Returns an `io::Error` only when the program could not be started.
    fn invoke(&mut self, command: &BuildCommand) -> io::Result<ExitStatus>;
}

/// Spawns the toolchain as a child process of the driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessInvoker;

impl Invoker for ProcessInvoker {
    fn invoke(&mut self, command: &BuildCommand) -> io::Result<ExitStatus> {
        if log::log_enabled!(log::Level::Debug) {
            match find_in_path(command.program(), command.working_dir()) {
                Some(path) => debug!("Resolved toolchain to {}", path.display()),
                None => debug!("{} was not found on PATH", command.program().display()),
            }
        }

        // `status` waits on the child on every path, so it is always reaped.
        let status = command.to_command().status()?;
        debug!("Toolchain exited with {}", status);
        Ok(status)
    }
}

/// Searches for `program` the way the OS would when spawning it.
///
/// Bare names are looked up in each `PATH` entry. Paths with more than one
/// component are checked directly, relative ones against `working_dir` when
/// the child runs from there.
///
/// # Returns
///
/// An `Option` with the resolved path, or `None` if the program is not found.
pub fn find_in_path(program: &Path, working_dir: Option<&Path>) -> Option<PathBuf> {
    if program.components().count() > 1 {
        let candidate = match working_dir {
            Some(dir) => dir.join(program),
            None => program.to_path_buf(),
        };
        return candidate.is_file().then_some(candidate);
    }

    let path = std::env::var_os("PATH")?;
    std::env::split_paths(&path)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}

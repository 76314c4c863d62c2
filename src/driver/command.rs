//! Build command construction.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use itertools::Itertools;

use crate::error::ConfigError;

use super::manifest::SourceManifest;
use super::toolchain::ToolchainSpec;

/// Fully materialized toolchain invocation.
///
/// The argument vector is `-o <output> <flags...> <sources...>`, with the
/// sources in manifest order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    program: PathBuf,
    args: Vec<OsString>,
    output: PathBuf,
    working_dir: Option<PathBuf>,
}

impl BuildCommand {
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments passed to the program, excluding the program itself.
    pub fn args(&self) -> &[OsString] {
        &self.args
    }

    /// The program followed by its arguments.
    pub fn argv(&self) -> impl Iterator<Item = &OsStr> {
        std::iter::once(self.program.as_os_str()).chain(self.args.iter().map(OsString::as_os_str))
    }

    /// Path of the binary the toolchain is asked to produce.
    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.working_dir.as_deref()
    }

    /// Run the toolchain from `dir` instead of the driver's own directory.
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// A `std::process::Command` with inherited standard streams.
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        command
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv().map(OsStr::to_string_lossy).join(" "))
    }
}

/// Assembles a [`BuildCommand`] from a toolchain, an output path and a
/// manifest.
///
/// The manifest order is preserved verbatim: nothing is reordered,
/// deduplicated or checked for symbol dependencies.
#[derive(Debug, Clone, Copy)]
pub struct CommandBuilder<'a> {
    toolchain: &'a ToolchainSpec,
}

impl<'a> CommandBuilder<'a> {
    pub fn new(toolchain: &'a ToolchainSpec) -> Self {
        CommandBuilder { toolchain }
    }

    pub fn build(&self, output: &Path, manifest: &SourceManifest) -> Result<BuildCommand, ConfigError> {
        if output.as_os_str().is_empty() {
            return Err(ConfigError::EmptyOutputPath);
        }
        if manifest.is_empty() {
            return Err(ConfigError::EmptyManifest);
        }

        let flags = self.toolchain.flags();
        let mut args = Vec::with_capacity(2 + flags.len() + manifest.len());
        args.push(OsString::from("-o"));
        args.push(output.as_os_str().to_owned());
        args.extend(flags.iter().map(OsString::from));
        args.extend(manifest.sources().map(|source| source.as_os_str().to_owned()));

        Ok(BuildCommand {
            program: self.toolchain.executable().to_path_buf(),
            args,
            output: output.to_path_buf(),
            working_dir: None,
        })
    }
}

//! Build driver module
//!
//! The driver is a single linear pipeline: the source manifest and the
//! selected toolchain feed the command builder, the built command is run by
//! the invoker, and the outcome is turned into one line by the reporter.

pub mod artifact;
pub mod cli;
pub mod command;
pub mod compiler;
pub mod invoker;
pub mod manifest;
pub mod output;
pub mod toolchain;

#[cfg(test)]
mod tests_compiler;

pub use artifact::{BuildSuccess, DriverState};
pub use cli::{BuildConfig, Cli};
pub use command::{BuildCommand, CommandBuilder};
pub use compiler::BuildDriver;
pub use invoker::{Invoker, ProcessInvoker};
pub use manifest::SourceManifest;
pub use output::ResultReporter;
pub use toolchain::{ToolchainKind, ToolchainSpec};

//! User-facing result reporting
//!
//! Every build ends in exactly one line: successes go to stdout, failures to
//! stderr. Toolchain diagnostics have already been streamed by then and are
//! not repeated.

use std::io::{self, Write};
use std::process::ExitCode;

use crate::error::DriverError;

use super::artifact::BuildSuccess;

/// Turns a build outcome into its terminal message and exit code.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResultReporter;

impl ResultReporter {
    pub fn new() -> Self {
        ResultReporter
    }

    /// The single line describing `result`, without a trailing newline.
    pub fn message(&self, result: &Result<BuildSuccess, DriverError>) -> String {
        match result {
            Ok(BuildSuccess::Built { output }) => {
                format!("SCC is compiled successfully: {}", output.display())
            }
            Ok(BuildSuccess::DryRun { command_line }) => command_line.clone(),
            Err(err) => err.to_string(),
        }
    }

    /// Write the message for `result` to `out` (successes) or `err` (failures).
    pub fn report_to(
        &self,
        result: &Result<BuildSuccess, DriverError>,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<()> {
        let line = self.message(result);
        match result {
            Ok(_) => writeln!(out, "{line}"),
            Err(_) => writeln!(err, "{line}"),
        }
    }

    /// Print the message for `result` and return the matching exit code.
    pub fn report(&self, result: &Result<BuildSuccess, DriverError>) -> ExitCode {
        // Nothing useful can be done if the terminal itself is gone.
        let _ = self.report_to(result, &mut io::stdout().lock(), &mut io::stderr().lock());
        match result {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => ExitCode::from(e.exit_code()),
        }
    }
}

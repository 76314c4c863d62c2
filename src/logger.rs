//! Logger setup for the driver's own diagnostics.

use std::io::Write;

use log::{Level, LevelFilter};

/// Installs the global logger.
///
/// Warnings and errors are always shown. With `verbose` enabled, debug and
/// info records are shown too and carry a `[VERBOSE]` prefix. `RUST_LOG`
/// still overrides the default filter.
///
/// # Arguments
///
/// * `verbose` - Whether verbose mode is enabled.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let _ = env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .format(|buf, record| match record.level() {
            Level::Error | Level::Warn => {
                writeln!(buf, "[{}] {}", record.level(), record.args())
            }
            _ => writeln!(buf, "[VERBOSE] {}", record.args()),
        })
        .try_init();
}

use super::*;
use crate::error::{ConfigError, DriverError, LAUNCH_FAILURE_EXIT_CODE};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;

/// Records every command it is asked to run and answers with a canned result.
struct RecordingInvoker {
    calls: Vec<String>,
    reply: fn() -> io::Result<ExitStatus>,
}

impl RecordingInvoker {
    fn replying(reply: fn() -> io::Result<ExitStatus>) -> Self {
        RecordingInvoker { calls: Vec::new(), reply }
    }
}

impl Invoker for RecordingInvoker {
    fn invoke(&mut self, command: &BuildCommand) -> io::Result<ExitStatus> {
        self.calls.push(command.to_string());
        (self.reply)()
    }
}

fn not_found() -> io::Result<ExitStatus> {
    Err(io::Error::from(io::ErrorKind::NotFound))
}

#[cfg(unix)]
fn exit_with(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

fn small_config() -> BuildConfig {
    BuildConfig {
        manifest: SourceManifest::new(["a.c", "b.c"]),
        output_path: PathBuf::from("./out/bin"),
        ..BuildConfig::default()
    }
}

#[test]
fn test_empty_manifest_never_invokes() {
    let config = BuildConfig {
        manifest: SourceManifest::new(Vec::<PathBuf>::new()),
        ..BuildConfig::default()
    };
    let mut driver = BuildDriver::with_invoker(config, RecordingInvoker::replying(not_found));
    let err = driver.run().unwrap_err();
    assert!(matches!(err, DriverError::Config(ConfigError::EmptyManifest)));
    assert!(driver.invoker().calls.is_empty());
    assert_eq!(driver.state(), DriverState::Idle);
}

#[test]
fn test_empty_output_never_invokes() {
    let config = BuildConfig {
        output_path: PathBuf::new(),
        ..BuildConfig::default()
    };
    let mut driver = BuildDriver::with_invoker(config, RecordingInvoker::replying(not_found));
    let err = driver.run().unwrap_err();
    assert!(matches!(err, DriverError::Config(ConfigError::EmptyOutputPath)));
    assert_eq!(err.exit_code(), 2);
    assert!(driver.invoker().calls.is_empty());
}

#[test]
fn test_missing_working_dir_never_invokes() {
    let config = BuildConfig {
        working_dir: Some(PathBuf::from("/nonexistent/scc-build/dir")),
        ..BuildConfig::default()
    };
    let mut driver = BuildDriver::with_invoker(config, RecordingInvoker::replying(not_found));
    let err = driver.run().unwrap_err();
    assert!(matches!(err, DriverError::Config(ConfigError::MissingDirectory(_))));
    assert!(driver.invoker().calls.is_empty());
}

#[test]
fn test_missing_toolchain_is_launch_failure() {
    let mut driver = BuildDriver::with_invoker(small_config(), RecordingInvoker::replying(not_found));
    let err = driver.run().unwrap_err();
    match &err {
        DriverError::Launch { program, toolchain, .. } => {
            assert_eq!(program, "g++");
            assert_eq!(*toolchain, "GCC");
        }
        other => panic!("expected launch failure, got {other:?}"),
    }
    assert_eq!(err.exit_code(), LAUNCH_FAILURE_EXIT_CODE);
    assert_eq!(driver.invoker().calls.len(), 1);
}

#[test]
fn test_dry_run_never_invokes() {
    let config = BuildConfig {
        dry_run: true,
        ..small_config()
    };
    let mut driver = BuildDriver::with_invoker(config, RecordingInvoker::replying(not_found));
    let success = driver.run().unwrap();
    assert_eq!(
        success,
        BuildSuccess::DryRun {
            command_line: "g++ -o ./out/bin -g3 -fno-inline -O0 a.c b.c".to_string()
        }
    );
    assert!(driver.invoker().calls.is_empty());
}

#[test]
fn test_build_command_uses_working_dir() {
    let dir = std::env::temp_dir();
    let config = BuildConfig {
        working_dir: Some(dir.clone()),
        ..small_config()
    };
    let driver = BuildDriver::with_invoker(config, RecordingInvoker::replying(not_found));
    let command = driver.build_command().unwrap();
    assert_eq!(command.working_dir(), Some(dir.as_path()));
}

#[cfg(unix)]
#[test]
fn test_successful_build_reports_output() {
    let mut driver = BuildDriver::with_invoker(small_config(), RecordingInvoker::replying(|| Ok(exit_with(0))));
    let success = driver.run().unwrap();
    assert_eq!(
        success,
        BuildSuccess::Built {
            output: PathBuf::from("./out/bin")
        }
    );
    assert_eq!(
        driver.invoker().calls,
        ["g++ -o ./out/bin -g3 -fno-inline -O0 a.c b.c"]
    );
    assert_eq!(driver.state(), DriverState::Idle);
}

#[cfg(unix)]
#[test]
fn test_toolchain_errors_are_compile_failure() {
    let mut driver = BuildDriver::with_invoker(small_config(), RecordingInvoker::replying(|| Ok(exit_with(1))));
    let err = driver.run().unwrap_err();
    assert!(matches!(err, DriverError::CompileFailed { toolchain: "GCC", .. }));
    assert_eq!(err.exit_code(), 1);
    assert_eq!(err.to_string(), "Compilation failed. Make sure you have GCC installed.");
}

#[cfg(unix)]
#[test]
fn test_clang_runs_clang_with_same_flags() {
    let config = BuildConfig {
        toolchain: ToolchainSpec::select(ToolchainKind::Clang),
        ..small_config()
    };
    let mut driver = BuildDriver::with_invoker(config, RecordingInvoker::replying(|| Ok(exit_with(0))));
    driver.run().unwrap();
    assert_eq!(
        driver.invoker().calls,
        ["clang++ -o ./out/bin -g3 -fno-inline -O0 a.c b.c"]
    );
}

#[cfg(unix)]
#[test]
fn test_run_and_report_returns_to_idle() {
    let mut driver = BuildDriver::with_invoker(small_config(), RecordingInvoker::replying(|| Ok(exit_with(3))));
    let _ = driver.run_and_report();
    assert_eq!(driver.state(), DriverState::Idle);
    assert_eq!(driver.config().output_path, Path::new("./out/bin"));
}

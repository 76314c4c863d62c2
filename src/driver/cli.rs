//! CLI parsing and configuration module
//!
//! This module handles command-line argument parsing using clap and
//! provides the configuration structure handed to the build driver.

use clap::Parser as CliParser;
use std::path::PathBuf;

use super::manifest::SourceManifest;
use super::toolchain::{ToolchainKind, ToolchainSpec};

/// Default location of the produced binary, relative to the working directory.
pub const DEFAULT_OUTPUT: &str = "./build/scc";

/// CLI interface using clap
#[derive(CliParser, Debug)]
#[clap(name = "scc-build", about = "Builds a debug binary of the SCC compiler", version)]
pub struct Cli {
    /// Toolchain family to compile with
    #[clap(long, value_enum, default_value_t = ToolchainKind::Gcc)]
    pub toolchain: ToolchainKind,

    /// Compiler executable to run instead of the toolchain's default
    #[clap(long, value_name = "PATH")]
    pub compiler: Option<PathBuf>,

    /// Output binary path
    #[clap(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Run the toolchain from this directory
    #[clap(short = 'C', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Print the toolchain command instead of running it
    #[clap(long)]
    pub dry_run: bool,

    /// Enable verbose diagnostic output
    #[clap(short, long)]
    pub verbose: bool,
}

/// Configuration for one build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    pub manifest: SourceManifest,
    pub toolchain: ToolchainSpec,
    pub output_path: PathBuf,
    pub working_dir: Option<PathBuf>,
    pub dry_run: bool,
    pub verbose: bool,
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            manifest: SourceManifest::scc(),
            toolchain: ToolchainSpec::default(),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            working_dir: None,
            dry_run: false,
            verbose: false,
        }
    }
}

impl Cli {
    /// Convert CLI arguments into build configuration
    pub fn into_config(self) -> BuildConfig {
        let mut toolchain = ToolchainSpec::select(self.toolchain);
        if let Some(compiler) = self.compiler {
            toolchain = toolchain.with_executable(compiler);
        }

        BuildConfig {
            manifest: SourceManifest::scc(),
            toolchain,
            output_path: self.output,
            working_dir: self.directory,
            dry_run: self.dry_run,
            verbose: self.verbose,
        }
    }
}

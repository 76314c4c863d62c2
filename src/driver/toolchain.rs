//! Toolchain selection.
//!
//! Both supported toolchains accept the same flag grammar, so a toolchain is
//! just an executable plus the fixed debug flag set.

use std::path::{Path, PathBuf};

use clap::ValueEnum;

/// Full debug info, no inlining, no optimization.
pub const DEBUG_FLAGS: &[&str] = &["-g3", "-fno-inline", "-O0"];

/// Toolchain family to compile with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum ToolchainKind {
    /// GCC-family front end (`g++`)
    #[default]
    Gcc,
    /// LLVM-family front end (`clang++`)
    Clang,
}

impl ToolchainKind {
    /// Executable name resolved through `PATH`.
    pub fn executable(self) -> &'static str {
        match self {
            ToolchainKind::Gcc => "g++",
            ToolchainKind::Clang => "clang++",
        }
    }

    /// Name used in user-facing messages.
    pub fn display_name(self) -> &'static str {
        match self {
            ToolchainKind::Gcc => "GCC",
            ToolchainKind::Clang => "Clang",
        }
    }
}

/// A resolved toolchain: the executable to run and the flags to pass it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolchainSpec {
    kind: ToolchainKind,
    executable: PathBuf,
}

impl ToolchainSpec {
    /// Select the preset for `kind`.
    pub fn select(kind: ToolchainKind) -> Self {
        ToolchainSpec {
            kind,
            executable: PathBuf::from(kind.executable()),
        }
    }

    /// Run `executable` instead of the preset's default, keeping the flags.
    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    pub fn kind(&self) -> ToolchainKind {
        self.kind
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn flags(&self) -> &'static [&'static str] {
        DEBUG_FLAGS
    }

    pub fn display_name(&self) -> &'static str {
        self.kind.display_name()
    }
}

impl Default for ToolchainSpec {
    fn default() -> Self {
        Self::select(ToolchainKind::default())
    }
}

//! The ordered list of translation units that make up the SCC binary.

use std::path::{Path, PathBuf};

/// Translation units of the SCC compiler, in the order the toolchain expects.
pub const SCC_SOURCES: &[&str] = &[
    "./src/ccomp.cc",
    "./src/symbol_table.cc",
    "./src/lexer.cc",
    "./src/parser.cc",
    "./src/intermediate.cc",
    "./src/code_gen.cc",
    "./src/str_helper.cc",
];

/// Ordered sequence of source paths handed to the toolchain verbatim.
///
/// The driver never checks that the files exist; a missing source is
/// reported by the toolchain itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceManifest {
    sources: Vec<PathBuf>,
}

impl SourceManifest {
    pub fn new<I, P>(sources: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        SourceManifest {
            sources: sources.into_iter().map(Into::into).collect(),
        }
    }

    /// The fixed manifest of the SCC compiler.
    pub fn scc() -> Self {
        Self::new(SCC_SOURCES.iter().copied())
    }

    pub fn sources(&self) -> impl ExactSizeIterator<Item = &Path> {
        self.sources.iter().map(PathBuf::as_path)
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl Default for SourceManifest {
    fn default() -> Self {
        Self::scc()
    }
}

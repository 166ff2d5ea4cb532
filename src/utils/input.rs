//! Text acquisition for the CLI
//!
//! Files are memory-mapped; the tree builder copies what it consumes, so
//! the mapping only lives as long as the build.

use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::ops::Deref;
use std::path::{Path, PathBuf};

/// Where a text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Literal text given on the command line
    Inline(String),
    File(PathBuf),
}

impl InputSource {
    /// Name used in report headers and error messages
    pub fn name(&self) -> String {
        match self {
            InputSource::Inline(_) => "<text>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }

    pub fn load(&self) -> Result<LoadedText> {
        match self {
            InputSource::Inline(text) => Ok(LoadedText::Owned(text.as_bytes().to_vec())),
            InputSource::File(path) => load_file(path),
        }
    }
}

/// Bytes of a loaded input
pub enum LoadedText {
    Mapped(Mmap),
    Owned(Vec<u8>),
}

impl Deref for LoadedText {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            LoadedText::Mapped(mmap) => mmap,
            LoadedText::Owned(bytes) => bytes,
        }
    }
}

/// Read a whole file, memory-mapped when non-empty
pub fn load_file(path: &Path) -> Result<LoadedText> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to stat {}", path.display()))?
        .len();

    // Zero-length mappings are rejected on some platforms
    if len == 0 {
        return Ok(LoadedText::Owned(Vec::new()));
    }

    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to map {}", path.display()))?;
    Ok(LoadedText::Mapped(mmap))
}

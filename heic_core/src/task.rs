//! Conversion task model
//!
//! A task pairs a HEIC source with its derived PNG target: same directory,
//! same stem, `.png` extension. Tasks are created once per run from the
//! directory listing and never mutated.

use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionTask {
    pub source: PathBuf,
    pub target: PathBuf,
}

impl ConversionTask {
    /// Derives the target path from the source. The source carries a `.heic`
    /// extension, so the target can never alias it.
    pub fn for_source(source: PathBuf) -> Self {
        let target = source.with_extension("png");
        Self { source, target }
    }

    /// Source file name for log lines and progress messages.
    pub fn file_name(&self) -> String {
        self.source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }

    pub fn target_file_name(&self) -> String {
        self.target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.target.display().to_string())
    }
}

/// Case-insensitive check for the source extension.
pub fn is_heic_source(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("heic"))
        .unwrap_or(false)
}

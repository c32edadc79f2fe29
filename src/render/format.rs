//! Artifact format selection.

use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::Error;

/// Output encoding for a generated artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactFormat {
    /// YAML mapping with metadata
    Yaml,
    /// Pretty-printed JSON mapping with metadata
    Json,
    /// Markdown page with a fixed heading
    Markdown,
    /// Python module holding the text in a `CONTENT` constant
    Python,
}

impl ArtifactFormat {
    /// Every supported format, in CLI order.
    pub const ALL: [ArtifactFormat; 4] = [
        ArtifactFormat::Yaml,
        ArtifactFormat::Json,
        ArtifactFormat::Markdown,
        ArtifactFormat::Python,
    ];

    /// Format token accepted on the command line and written into metadata.
    pub fn token(&self) -> &'static str {
        match self {
            ArtifactFormat::Yaml => "yaml",
            ArtifactFormat::Json => "json",
            ArtifactFormat::Markdown => "markdown",
            ArtifactFormat::Python => "python",
        }
    }

    /// File extension appended to the output stem.
    pub fn extension(&self) -> &'static str {
        match self {
            ArtifactFormat::Yaml => "yaml",
            ArtifactFormat::Json => "json",
            ArtifactFormat::Markdown => "md",
            ArtifactFormat::Python => "py",
        }
    }

    /// Whether the artifact carries a `metadata` block.
    pub fn has_metadata(&self) -> bool {
        matches!(self, ArtifactFormat::Yaml | ArtifactFormat::Json)
    }

    /// Final output path for `stem`.
    ///
    /// The extension is appended to the stem as-is, so `notes.v2` becomes
    /// `notes.v2.md` rather than having its suffix replaced.
    pub fn output_path(&self, stem: impl AsRef<Path>) -> PathBuf {
        let mut path = OsString::from(stem.as_ref());
        path.push(".");
        path.push(self.extension());
        PathBuf::from(path)
    }
}

impl std::fmt::Display for ArtifactFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ArtifactFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ArtifactFormat::ALL
            .into_iter()
            .find(|format| format.token() == s)
            .ok_or_else(|| Error::UnsupportedFormat(format!("unknown artifact format '{}'", s)))
    }
}

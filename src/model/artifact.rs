//! Structured artifact body shared by the YAML and JSON renderers.

use crate::render::ArtifactFormat;
use serde::{Deserialize, Serialize};

/// Generator label stamped into artifact metadata.
pub const GENERATOR: &str = "docx-to-artifact";

/// Metadata block attached to structured artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    /// Format token the artifact was rendered as
    pub format: ArtifactFormat,
    /// Tool label
    pub generator: String,
}

impl ArtifactMetadata {
    /// Metadata for `format` with the given generator label.
    pub fn new(format: ArtifactFormat, generator: impl Into<String>) -> Self {
        Self {
            format,
            generator: generator.into(),
        }
    }
}

/// The `{content, metadata}` mapping written by structured formats.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    /// Extracted paragraph text
    pub content: String,
    /// Format and generator record
    pub metadata: ArtifactMetadata,
}

impl Artifact {
    /// Wrap extracted text for the given format.
    pub fn new(
        content: impl Into<String>,
        format: ArtifactFormat,
        generator: impl Into<String>,
    ) -> Self {
        Self {
            content: content.into(),
            metadata: ArtifactMetadata::new(format, generator),
        }
    }
}

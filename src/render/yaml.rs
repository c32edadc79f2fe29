//! YAML renderer implementation.

use crate::error::Result;
use crate::model::Artifact;

use super::options::RenderOptions;
use super::ArtifactFormat;

/// Render extracted text as a block-style YAML artifact.
pub fn to_yaml(content: &str, options: &RenderOptions) -> Result<String> {
    let artifact = Artifact::new(content, ArtifactFormat::Yaml, options.generator.as_str());
    Ok(serde_yaml::to_string(&artifact)?)
}

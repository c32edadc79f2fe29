//! Artifact rendering.
//!
//! Extracted text is rendered into one of four encodings selected by
//! [`ArtifactFormat`]: YAML and JSON wrap it in a `{content, metadata}`
//! mapping, Markdown puts it under a fixed heading, and the Python variant
//! stores it in a module-level `CONTENT` constant.
//!
//! # Example
//!
//! ```
//! use docx2artifact::render::{render, ArtifactFormat, RenderOptions};
//!
//! let md = render(ArtifactFormat::Markdown, "Hello\nWorld", &RenderOptions::default())?;
//! assert_eq!(md, "# Document Content\n\nHello\nWorld\n");
//! # Ok::<(), docx2artifact::Error>(())
//! ```

mod format;
mod json;
mod markdown;
mod options;
mod python;
mod yaml;

pub use format::ArtifactFormat;
pub use json::to_json;
pub use markdown::to_markdown;
pub use options::{PythonLiteral, RenderOptions};
pub use python::{escape_triple_quoted, to_python};
pub use yaml::to_yaml;

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Render extracted text in the given format.
pub fn render(format: ArtifactFormat, content: &str, options: &RenderOptions) -> Result<String> {
    match format {
        ArtifactFormat::Yaml => to_yaml(content, options),
        ArtifactFormat::Json => to_json(content, options),
        ArtifactFormat::Markdown => to_markdown(content),
        ArtifactFormat::Python => to_python(content, options),
    }
}

/// Render extracted text and write it to `path`, replacing any existing file.
///
/// The body is fully rendered before the file is touched, so a render
/// failure never leaves a truncated artifact behind.
pub fn write_artifact(
    format: ArtifactFormat,
    content: &str,
    path: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<()> {
    let path = path.as_ref();
    let body = render(format, content, options)?;

    fs::write(path, body.as_bytes()).map_err(|e| Error::write(path, e))?;
    log::info!("wrote {} artifact ({} bytes) to {}", format, body.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_render_dispatch() {
        let options = RenderOptions::default();
        for format in ArtifactFormat::ALL {
            let body = render(format, "Hello", &options).unwrap();
            assert!(body.contains("Hello"), "{} body missing content", format);
            assert_eq!(
                body.contains("docx-to-artifact"),
                format.has_metadata(),
                "{} metadata presence",
                format
            );
        }
    }

    #[test]
    fn test_write_artifact_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.md");
        std::fs::write(&path, "stale content that is longer than the new body").unwrap();

        write_artifact(ArtifactFormat::Markdown, "fresh", &path, &RenderOptions::default())
            .unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "# Document Content\n\nfresh\n"
        );
    }

    #[test]
    fn test_write_artifact_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");

        let err = write_artifact(ArtifactFormat::Json, "x", &path, &RenderOptions::default())
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Write);
        assert!(!path.exists());
    }

    #[test]
    fn test_render_failure_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.py");
        let options = RenderOptions::new().with_python_literal(PythonLiteral::Verbatim);

        let err = write_artifact(ArtifactFormat::Python, r#"a """ b"#, &path, &options)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Render);
        assert!(!path.exists());
    }
}

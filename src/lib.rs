//! # docx2artifact
//!
//! Extract paragraph text from Word documents and write it out as a YAML,
//! JSON, Markdown, or Python artifact.
//!
//! ## Quick Start
//!
//! ```no_run
//! use docx2artifact::{convert, ArtifactFormat, RenderOptions};
//!
//! // Plain text: non-blank body paragraphs joined by newlines
//! let text = docx2artifact::extract_text("document.docx")?;
//! println!("{}", text);
//!
//! // One-shot conversion, writes "out/document.md"
//! let path = convert(
//!     "document.docx",
//!     ArtifactFormat::Markdown,
//!     "out/document",
//!     &RenderOptions::default(),
//! )?;
//! println!("{}", path.display());
//! # Ok::<(), docx2artifact::Error>(())
//! ```
//!
//! ## Lower-level APIs
//!
//! ```no_run
//! use docx2artifact::docx::DocxParser;
//! use docx2artifact::render::{render, ArtifactFormat, RenderOptions};
//!
//! let doc = DocxParser::open("report.docx")?.parse()?;
//! println!("{} paragraphs in {}", doc.len(), doc.main_part);
//!
//! let json = render(ArtifactFormat::Json, &doc.plain_text(), &RenderOptions::default())?;
//! # Ok::<(), docx2artifact::Error>(())
//! ```

pub mod container;
pub mod detect;
pub mod docx;
pub mod error;
pub mod model;
pub mod render;

#[cfg(test)]
mod testing;

// Re-exports
pub use container::{OoxmlContainer, Relationship, Relationships};
pub use detect::{detect_document_kind, DocumentKind};
pub use error::{Error, ErrorKind, Result};
pub use model::{Artifact, ArtifactMetadata, Document, Paragraph, GENERATOR};
pub use render::{render, write_artifact, ArtifactFormat, PythonLiteral, RenderOptions};

use std::path::{Path, PathBuf};

/// Parse a Word document file into its body paragraphs.
///
/// # Example
///
/// ```no_run
/// use docx2artifact::parse_file;
///
/// let doc = parse_file("document.docx")?;
/// println!("Paragraphs: {}", doc.len());
/// # Ok::<(), docx2artifact::Error>(())
/// ```
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
    docx::DocxParser::open(path)?.parse()
}

/// Parse a Word document from bytes.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    docx::DocxParser::from_bytes(data.to_vec())?.parse()
}

/// Extract the text of every non-blank body paragraph, joined by `\n`.
///
/// # Example
///
/// ```no_run
/// use docx2artifact::extract_text;
///
/// let text = extract_text("document.docx")?;
/// println!("{}", text);
/// # Ok::<(), docx2artifact::Error>(())
/// ```
pub fn extract_text(path: impl AsRef<Path>) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(doc.plain_text())
}

/// Extract text from a Word document held in memory.
pub fn extract_text_from_bytes(data: &[u8]) -> Result<String> {
    let doc = parse_bytes(data)?;
    Ok(doc.plain_text())
}

/// Convert a document into an artifact next to `output_stem`.
///
/// The format's extension is appended to the stem; the final path is
/// returned on success.
pub fn convert(
    input: impl AsRef<Path>,
    format: ArtifactFormat,
    output_stem: impl AsRef<Path>,
    options: &RenderOptions,
) -> Result<PathBuf> {
    let input = input.as_ref();
    let output = format.output_path(output_stem);

    log::debug!("extracting text from {}", input.display());
    let content = extract_text(input)?;
    write_artifact(format, &content, &output, options)?;

    Ok(output)
}

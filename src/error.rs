//! Error types for the docx2artifact library.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for docx2artifact operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while extracting, rendering, or writing an artifact.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading the source document.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is not a ZIP-based document container.
    #[error("Unknown file format")]
    UnknownFormat,

    /// The container is a package, but not a Word document.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Error reading ZIP archive.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// Error parsing XML content.
    #[error("XML parse error: {0}")]
    XmlParse(String),

    /// A required document component is missing.
    #[error("Missing component: {0}")]
    MissingComponent(String),

    /// The artifact body could not be serialized.
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// The content cannot be rendered in the requested format.
    #[error("Render error: {0}")]
    Render(String),

    /// The artifact could not be written to its destination.
    #[error("Cannot write {}: {source}", .path.display())]
    Write {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source document is missing, unreadable, or malformed.
    Extraction,
    /// The extracted text could not be encoded in the target format.
    Render,
    /// The destination could not be written.
    Write,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Io(_)
            | Error::UnknownFormat
            | Error::UnsupportedFormat(_)
            | Error::ZipArchive(_)
            | Error::XmlParse(_)
            | Error::MissingComponent(_) => ErrorKind::Extraction,
            Error::Serialize(_) | Error::Render(_) => ErrorKind::Render,
            Error::Write { .. } => ErrorKind::Write,
        }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::XmlParse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Serialize(err.to_string())
    }
}

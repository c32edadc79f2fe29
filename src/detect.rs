//! Word document detection for OOXML packages.

use crate::container::OoxmlContainer;
use crate::error::{Error, Result};

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

const DOCUMENT_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";

const MACRO_DOCUMENT_CONTENT_TYPE: &str = "application/vnd.ms-word.document.macroEnabled.main+xml";

const TEMPLATE_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.template.main+xml";

const MACRO_TEMPLATE_CONTENT_TYPE: &str = "application/vnd.ms-word.template.macroEnabledTemplate.main+xml";

/// Kind of Word package, derived from the main part's content type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DocumentKind {
    /// Word document (.docx)
    #[default]
    Document,
    /// Macro-enabled document (.docm)
    MacroEnabledDocument,
    /// Word template (.dotx)
    Template,
    /// Macro-enabled template (.dotm)
    MacroEnabledTemplate,
}

impl DocumentKind {
    /// Map a main-part content type to a document kind.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        match content_type {
            DOCUMENT_CONTENT_TYPE => Some(DocumentKind::Document),
            MACRO_DOCUMENT_CONTENT_TYPE => Some(DocumentKind::MacroEnabledDocument),
            TEMPLATE_CONTENT_TYPE => Some(DocumentKind::Template),
            MACRO_TEMPLATE_CONTENT_TYPE => Some(DocumentKind::MacroEnabledTemplate),
            _ => None,
        }
    }

    /// Returns the conventional file extension for this kind.
    pub fn extension(&self) -> &'static str {
        match self {
            DocumentKind::Document => "docx",
            DocumentKind::MacroEnabledDocument => "docm",
            DocumentKind::Template => "dotx",
            DocumentKind::MacroEnabledTemplate => "dotm",
        }
    }
}

/// Check that `part` is a WordprocessingML main part and report its kind.
///
/// The content type comes from the `Override` entry for the part in
/// `[Content_Types].xml`, or from the `Default` entry for its extension.
pub fn detect_document_kind(container: &OoxmlContainer, part: &str) -> Result<DocumentKind> {
    let content_type = part_content_type(container, part)?
        .ok_or_else(|| Error::UnsupportedFormat(format!("no content type declared for {}", part)))?;

    DocumentKind::from_content_type(&content_type).ok_or_else(|| {
        Error::UnsupportedFormat(format!("not a Word file, content type is '{}'", content_type))
    })
}

/// Look up the declared content type of a package part.
pub fn part_content_type(container: &OoxmlContainer, part: &str) -> Result<Option<String>> {
    let xml = container.read_xml("[Content_Types].xml")?;
    let part_name = format!("/{}", part.trim_start_matches('/'));
    let extension = part.rsplit_once('.').map(|(_, ext)| ext);

    let mut reader = quick_xml::Reader::from_str(&xml);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut by_extension: Option<String> = None;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(quick_xml::events::Event::Empty(e)) | Ok(quick_xml::events::Event::Start(e)) => {
                let mut name = None;
                let mut ext = None;
                let mut content_type = None;
                for attr in e.attributes().flatten() {
                    let value = String::from_utf8_lossy(&attr.value).to_string();
                    match attr.key.as_ref() {
                        b"PartName" => name = Some(value),
                        b"Extension" => ext = Some(value),
                        b"ContentType" => content_type = Some(value),
                        _ => {}
                    }
                }

                match e.local_name().as_ref() {
                    b"Override" => {
                        // Part names compare case-insensitively (OPC)
                        if name.is_some_and(|n| n.eq_ignore_ascii_case(&part_name)) {
                            return Ok(content_type);
                        }
                    }
                    b"Default" => {
                        if let (Some(ext), Some(wanted)) = (ext, extension) {
                            if ext.eq_ignore_ascii_case(wanted) {
                                by_extension = content_type;
                            }
                        }
                    }
                    _ => {}
                }
            }
            Ok(quick_xml::events::Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(by_extension)
}

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == ZIP_MAGIC
}

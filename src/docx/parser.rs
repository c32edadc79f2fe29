//! DOCX parser implementation.

use crate::container::OoxmlContainer;
use crate::detect::{detect_document_kind, DocumentKind};
use crate::error::{Error, Result};
use crate::model::{Document, Paragraph};

use quick_xml::events::{BytesStart, Event};

/// Parser for DOCX (Word) documents.
pub struct DocxParser {
    container: OoxmlContainer,
    main_part: String,
    kind: DocumentKind,
}

impl DocxParser {
    /// Open a DOCX file for parsing.
    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let container = OoxmlContainer::open(path)?;
        Self::from_container(container)
    }

    /// Create a parser from bytes.
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let container = OoxmlContainer::from_bytes(data)?;
        Self::from_container(container)
    }

    /// Create a parser from a container, checking that it holds a Word document.
    pub fn from_container(container: OoxmlContainer) -> Result<Self> {
        let main_part = container.main_document_part()?;
        let kind = detect_document_kind(&container, &main_part)?;

        Ok(Self {
            container,
            main_part,
            kind,
        })
    }

    /// Parse the main document part into body paragraphs.
    pub fn parse(&mut self) -> Result<Document> {
        let xml = self.container.read_xml(&self.main_part)?;
        let paragraphs = parse_body_paragraphs(&xml)?;

        log::debug!(
            "{}: {} body paragraphs in {}",
            self.kind.extension(),
            paragraphs.len(),
            self.main_part
        );

        Ok(Document {
            kind: self.kind,
            main_part: self.main_part.clone(),
            paragraphs,
        })
    }

    /// Kind of Word package being parsed.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }
}

/// Read the paragraphs that are direct children of `w:body`.
///
/// Paragraph text comes from runs directly inside the paragraph or inside
/// one of its hyperlinks. Paragraphs nested in tables, text boxes, or
/// content controls are skipped.
pub fn parse_body_paragraphs(xml: &str) -> Result<Vec<Paragraph>> {
    let mut reader = quick_xml::Reader::from_str(xml);
    // xml:space="preserve" runs must keep their whitespace
    reader.config_mut().trim_text(false);

    let mut buf = Vec::new();
    // Local names of the open elements; stack.len() is the current depth
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut paragraphs = Vec::new();
    let mut current: Option<Paragraph> = None;
    let mut para_depth = 0usize;
    let mut run_depth: Option<usize> = None;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let local = e.local_name().as_ref().to_vec();
                let depth = stack.len() + 1;

                if current.is_none() {
                    if local == b"p" && is_body(&stack) {
                        current = Some(Paragraph::new());
                        para_depth = depth;
                    }
                } else if let Some(para) = current.as_mut() {
                    if local == b"r" && is_run_parent(&stack, para_depth) {
                        run_depth = Some(depth);
                    } else if run_depth == Some(depth - 1) {
                        if local == b"t" {
                            in_text = true;
                        } else if let Some(text) = run_child_text(&local, e) {
                            para.push_str(text);
                        }
                    }
                }

                stack.push(local);
            }
            Ok(Event::Empty(ref e)) => {
                let local = e.local_name();
                let local = local.as_ref();
                let depth = stack.len() + 1;

                match current.as_mut() {
                    None => {
                        if local == b"p" && is_body(&stack) {
                            paragraphs.push(Paragraph::new());
                        }
                    }
                    Some(para) => {
                        if run_depth == Some(depth - 1) {
                            if let Some(text) = run_child_text(local, e) {
                                para.push_str(text);
                            }
                        }
                    }
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_text {
                    if let Some(para) = current.as_mut() {
                        let text = e.unescape().map_err(|e| Error::XmlParse(e.to_string()))?;
                        para.push_str(&text);
                    }
                }
            }
            Ok(Event::CData(ref e)) => {
                if in_text {
                    if let Some(para) = current.as_mut() {
                        para.push_str(&String::from_utf8_lossy(e));
                    }
                }
            }
            Ok(Event::End(_)) => {
                let depth = stack.len();
                stack.pop();

                if in_text && run_depth.map(|d| d + 1) == Some(depth) {
                    in_text = false;
                }
                if run_depth == Some(depth) {
                    run_depth = None;
                }
                if current.is_some() && depth == para_depth {
                    if let Some(para) = current.take() {
                        paragraphs.push(para);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::XmlParse(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    if current.is_some() {
        return Err(Error::XmlParse("unexpected end of document inside a paragraph".to_string()));
    }

    Ok(paragraphs)
}

fn is_body(stack: &[Vec<u8>]) -> bool {
    stack.last().is_some_and(|name| name == b"body")
}

/// A run counts when it sits directly in the paragraph or in a hyperlink child.
fn is_run_parent(stack: &[Vec<u8>], para_depth: usize) -> bool {
    stack.len() == para_depth
        || (stack.len() == para_depth + 1 && stack.last().is_some_and(|n| n == b"hyperlink"))
}

/// Text contributed by a non-`w:t` child of a run.
fn run_child_text(local: &[u8], e: &BytesStart) -> Option<&'static str> {
    match local {
        b"tab" | b"ptab" => Some("\t"),
        b"cr" => Some("\n"),
        b"noBreakHyphen" => Some("-"),
        b"br" => match get_attr(e, b"type").as_deref() {
            None | Some("textWrapping") => Some("\n"),
            // page and column breaks carry no text
            Some(_) => None,
        },
        _ => None,
    }
}

/// Attribute value looked up by local name, ignoring the namespace prefix.
fn get_attr(e: &BytesStart, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.local_name().as_ref() == key)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

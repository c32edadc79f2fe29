//! Document model structures.

use super::Paragraph;
use crate::detect::DocumentKind;

/// A parsed Word document, reduced to its body paragraphs.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Kind of Word package the paragraphs came from
    pub kind: DocumentKind,

    /// Archive path of the main document part
    pub main_part: String,

    /// Body paragraphs in document order
    pub paragraphs: Vec<Paragraph>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a paragraph to the document.
    pub fn add_paragraph(&mut self, para: Paragraph) {
        self.paragraphs.push(para);
    }

    /// Number of body paragraphs, blank ones included.
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the document has no paragraphs.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Paragraphs whose trimmed text is non-empty.
    pub fn text_paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs.iter().filter(|p| !p.is_blank())
    }

    /// Join the text of every non-blank paragraph with `\n`.
    ///
    /// Kept paragraphs are emitted exactly as read; only blank ones are
    /// dropped.
    pub fn plain_text(&self) -> String {
        self.text_paragraphs()
            .map(Paragraph::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

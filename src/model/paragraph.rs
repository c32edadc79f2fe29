//! Paragraph model.

/// A body-level paragraph, reduced to its text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Concatenated run text, including tabs and line breaks
    pub text: String,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with the given text.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Append text to the paragraph.
    pub fn push_str(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Get the paragraph text.
    pub fn plain_text(&self) -> &str {
        &self.text
    }

    /// Check whether the paragraph has no text at all.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check whether the paragraph holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph() {
        let mut para = Paragraph::new();
        assert!(para.is_empty());
        assert!(para.is_blank());

        para.push_str("Hello");
        para.push_str(", World");
        assert_eq!(para.plain_text(), "Hello, World");
        assert!(!para.is_blank());
    }

    #[test]
    fn test_whitespace_paragraph_is_blank() {
        let para = Paragraph::with_text(" \t\n ");
        assert!(!para.is_empty());
        assert!(para.is_blank());
    }
}

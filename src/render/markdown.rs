//! Markdown renderer implementation.

use crate::error::Result;

/// Heading line opening every Markdown artifact.
const HEADING: &str = "# Document Content";

/// Render extracted text under a fixed top-level heading.
///
/// The text is written raw; Markdown metacharacters are not escaped.
pub fn to_markdown(content: &str) -> Result<String> {
    Ok(format!("{}\n\n{}\n", HEADING, content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_markdown() {
        let md = to_markdown("Hello\nWorld").unwrap();
        assert_eq!(md, "# Document Content\n\nHello\nWorld\n");
    }

    #[test]
    fn test_empty_content() {
        let md = to_markdown("").unwrap();
        assert_eq!(md, "# Document Content\n\n\n");
    }

    #[test]
    fn test_no_escaping() {
        let md = to_markdown("*bold* and # hash").unwrap();
        assert!(md.ends_with("*bold* and # hash\n"));
    }
}

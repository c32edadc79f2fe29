//! Python module renderer implementation.

use crate::error::{Error, Result};

use super::options::{PythonLiteral, RenderOptions};

/// Module docstring written on the first line.
const DOCSTRING: &str = r#""""Generated artifact from DOCX.""""#;

/// Render extracted text as a Python module with a `CONTENT` constant.
pub fn to_python(content: &str, options: &RenderOptions) -> Result<String> {
    let literal = match options.python_literal {
        PythonLiteral::Escaped => escape_triple_quoted(content),
        PythonLiteral::Verbatim => {
            check_verbatim(content)?;
            content.to_string()
        }
    };

    Ok(format!("{}\n\nCONTENT = \"\"\"{}\"\"\"\n", DOCSTRING, literal))
}

/// Escape text for the body of a `"""` string literal.
///
/// Backslashes, carriage returns and NUL are escaped. A quote is escaped
/// when it belongs to a run of three or more, or when it ends the text and
/// would otherwise merge with the closing delimiter.
pub fn escape_triple_quoted(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\r' => out.push_str("\\r"),
            '\0' => out.push_str("\\x00"),
            '"' => {
                let mut run = 1;
                while chars.next_if_eq(&'"').is_some() {
                    run += 1;
                }
                let at_end = chars.peek().is_none();
                let quote = if run >= 3 || at_end { "\\\"" } else { "\"" };
                for _ in 0..run {
                    out.push_str(quote);
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

fn check_verbatim(text: &str) -> Result<()> {
    if text.contains('\\') {
        return Err(Error::Render(
            "content contains a backslash and cannot be embedded verbatim".to_string(),
        ));
    }
    // Python source cannot hold NUL and reads a bare CR as a newline
    if text.contains(['\0', '\r']) {
        return Err(Error::Render(
            "content contains a NUL or carriage return and cannot be embedded verbatim"
                .to_string(),
        ));
    }
    if text.contains(r#"""""#) {
        return Err(Error::Render(
            "content contains a triple-quote delimiter and cannot be embedded verbatim".to_string(),
        ));
    }
    if text.ends_with('"') {
        return Err(Error::Render(
            "content ends with a quote and cannot be embedded verbatim".to_string(),
        ));
    }
    Ok(())
}

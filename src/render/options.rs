//! Rendering options configuration.

use crate::model::GENERATOR;

/// How extracted text is embedded in the Python module's string literal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PythonLiteral {
    /// Escape backslashes and any quotes that would close the literal early
    #[default]
    Escaped,
    /// Embed the text unchanged; text that cannot be embedded is rejected
    Verbatim,
}

/// Options for rendering artifacts.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Label written to `metadata.generator`
    pub generator: String,

    /// Python string literal policy
    pub python_literal: PythonLiteral,

    /// Escape non-ASCII characters in JSON as `\uXXXX`
    pub ascii_json: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            generator: GENERATOR.to_string(),
            python_literal: PythonLiteral::Escaped,
            ascii_json: true,
        }
    }
}

impl RenderOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the generator label.
    pub fn with_generator(mut self, generator: impl Into<String>) -> Self {
        self.generator = generator.into();
        self
    }

    /// Set the Python literal policy.
    pub fn with_python_literal(mut self, literal: PythonLiteral) -> Self {
        self.python_literal = literal;
        self
    }

    /// Toggle ASCII-only JSON output.
    pub fn with_ascii_json(mut self, ascii: bool) -> Self {
        self.ascii_json = ascii;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = RenderOptions::default();
        assert_eq!(opts.generator, "docx-to-artifact");
        assert_eq!(opts.python_literal, PythonLiteral::Escaped);
        assert!(opts.ascii_json);
    }

    #[test]
    fn test_builder_pattern() {
        let opts = RenderOptions::new()
            .with_generator("custom")
            .with_python_literal(PythonLiteral::Verbatim)
            .with_ascii_json(false);

        assert_eq!(opts.generator, "custom");
        assert_eq!(opts.python_literal, PythonLiteral::Verbatim);
        assert!(!opts.ascii_json);
    }
}

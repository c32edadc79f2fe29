//! DOCX (Word) document parser.
//!
//! Reads the body paragraphs of a WordprocessingML package. Only paragraph
//! text is kept; styles, tables, and drawings are not modelled.

mod parser;

pub use parser::{parse_body_paragraphs, DocxParser};

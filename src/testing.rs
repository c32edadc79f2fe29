//! In-memory DOCX packages for unit tests.

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const TRANSITIONAL_REL: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
const STRICT_REL: &str = "http://purl.oclc.org/ooxml/officeDocument/relationships/officeDocument";

/// Builds a minimal DOCX package with a configurable body.
pub(crate) struct DocxBuilder {
    main_part: String,
    content_type: String,
    package_rels: bool,
    rel_type: &'static str,
    body: String,
}

impl DocxBuilder {
    pub(crate) fn new() -> Self {
        Self {
            main_part: "word/document.xml".to_string(),
            content_type:
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"
                    .to_string(),
            package_rels: true,
            rel_type: TRANSITIONAL_REL,
            body: String::new(),
        }
    }

    pub(crate) fn main_part(mut self, part: &str) -> Self {
        self.main_part = part.to_string();
        self
    }

    pub(crate) fn content_type(mut self, content_type: &str) -> Self {
        self.content_type = content_type.to_string();
        self
    }

    pub(crate) fn without_package_rels(mut self) -> Self {
        self.package_rels = false;
        self
    }

    /// Declare the main part with the ISO strict relationship type.
    pub(crate) fn strict_relationships(mut self) -> Self {
        self.rel_type = STRICT_REL;
        self
    }

    /// Append a single-run paragraph; empty text yields `<w:p/>`.
    pub(crate) fn paragraph(mut self, text: &str) -> Self {
        if text.is_empty() {
            self.body.push_str("<w:p/>");
        } else {
            self.body.push_str(&format!(
                "<w:p><w:r><w:t xml:space=\"preserve\">{}</w:t></w:r></w:p>",
                escape(text)
            ));
        }
        self
    }

    /// Append raw WordprocessingML to the body.
    pub(crate) fn raw(mut self, xml: &str) -> Self {
        self.body.push_str(xml);
        self
    }

    pub(crate) fn build(self) -> Vec<u8> {
        let mut buffer = Vec::new();
        let mut zip = ZipWriter::new(Cursor::new(&mut buffer));
        let options = SimpleFileOptions::default();

        zip.start_file("[Content_Types].xml", options).unwrap();
        write!(
            zip,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/{}" ContentType="{}"/>
</Types>"#,
            self.main_part, self.content_type
        )
        .unwrap();

        if self.package_rels {
            zip.start_file("_rels/.rels", options).unwrap();
            write!(
                zip,
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="{}" Target="{}"/>
</Relationships>"#,
                self.rel_type, self.main_part
            )
            .unwrap();
        }

        zip.start_file(self.main_part.as_str(), options).unwrap();
        write!(
            zip,
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}<w:sectPr/></w:body></w:document>"#,
            WORD_NS, self.body
        )
        .unwrap();

        zip.finish().unwrap();
        buffer
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

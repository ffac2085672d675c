// crates/ssrf-rs/src/config.rs

//! Output settings for the XML writer.

/// Default namespace of SSRF 3.1 documents.
pub const SSRF_NAMESPACE: &str = "urn:us:gov:dod:standard:ssrf:3.1";

/// The XML declaration emitted at the top of a document.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\r\n";

/// Controls how SSRF elements are written to XML.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    /// Indentation as (character, width). `None` writes everything on one line.
    pub indent: Option<(char, usize)>,
    /// Whether to start the output with an XML declaration.
    pub xml_declaration: bool,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            indent: Some((' ', 2)),
            xml_declaration: true,
        }
    }
}

impl WriterConfig {
    /// Single-line output without a declaration, for embedding fragments.
    pub fn compact() -> Self {
        Self {
            indent: None,
            xml_declaration: false,
        }
    }

    pub fn with_indent(mut self, ch: char, width: usize) -> Self {
        self.indent = Some((ch, width));
        self
    }

    pub fn with_declaration(mut self, enabled: bool) -> Self {
        self.xml_declaration = enabled;
        self
    }
}

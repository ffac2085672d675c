// crates/ssrf-rs/src/error.rs

use alloc::fmt;
use alloc::string::String;
use quick_xml::Error as XmlError;
use quick_xml::errors::serialize::DeError;
use quick_xml::errors::serialize::SeError;

/// Errors that can occur while reading or writing SSRF data.
#[derive(Debug)]
pub enum SsrfError {
    /// An error from the underlying `quick-xml` deserializer.
    XmlParsing(DeError),

    /// An error from the underlying `quick-xml` serializer.
    XmlSerializing(SeError),

    /// An error from the underlying `quick-xml` writer (e.g., I/O).
    XmlWriting(XmlError),

    /// An error occurred during string formatting (e.g., writing the XML declaration).
    FmtError(fmt::Error),

    /// A string was not one of the codes of an SSRF code list.
    UnknownCode { list: &'static str, value: String },

    /// A coordinate string did not follow the SSRF sexagesimal format.
    InvalidCoordinate { axis: &'static str, value: String },

    /// A required XML element was missing (e.g., Serial).
    MissingElement { element: &'static str },
}

impl From<DeError> for SsrfError {
    fn from(e: DeError) -> Self {
        SsrfError::XmlParsing(e)
    }
}

impl From<SeError> for SsrfError {
    fn from(e: SeError) -> Self {
        SsrfError::XmlSerializing(e)
    }
}

impl From<XmlError> for SsrfError {
    fn from(e: XmlError) -> Self {
        SsrfError::XmlWriting(e)
    }
}

impl From<fmt::Error> for SsrfError {
    fn from(e: fmt::Error) -> Self {
        SsrfError::FmtError(e)
    }
}

impl fmt::Display for SsrfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SsrfError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            SsrfError::XmlSerializing(e) => write!(f, "XML serializing error: {}", e),
            SsrfError::XmlWriting(e) => write!(f, "XML writing error: {}", e),
            SsrfError::FmtError(e) => write!(f, "Formatting error: {}", e),
            SsrfError::UnknownCode { list, value } => {
                write!(f, "Unknown code '{}' for code list {}", value, list)
            }
            SsrfError::InvalidCoordinate { axis, value } => {
                write!(f, "Invalid {} value: '{}'", axis, value)
            }
            SsrfError::MissingElement { element } => {
                write!(f, "Missing required XML element: {}", element)
            }
        }
    }
}

impl core::error::Error for SsrfError {}

#[cfg(test)]
mod tests {
    use super::SsrfError;
    use alloc::string::ToString;

    #[test]
    fn test_from_de_error() {
        let xml_err = quick_xml::de::from_str::<u32>("<n>not a number</n>").unwrap_err();
        let err: SsrfError = xml_err.into();
        assert!(matches!(err, SsrfError::XmlParsing(_)));
    }

    #[test]
    fn test_from_se_error() {
        let xml_err = quick_xml::errors::serialize::SeError::Custom("test error".to_string());
        let err: SsrfError = xml_err.into();
        assert!(matches!(err, SsrfError::XmlSerializing(_)));
    }

    #[test]
    fn test_from_xml_error() {
        let xml_err = quick_xml::Error::Syntax(quick_xml::errors::SyntaxError::UnclosedTag);
        let err: SsrfError = xml_err.into();
        assert!(matches!(err, SsrfError::XmlWriting(_)));
    }

    #[test]
    fn test_from_fmt_error() {
        let err: SsrfError = core::fmt::Error.into();
        assert!(matches!(err, SsrfError::FmtError(_)));
    }

    #[test]
    fn test_display_unknown_code() {
        let err = SsrfError::UnknownCode {
            list: "ListCBO",
            value: "Maybe".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown code 'Maybe' for code list ListCBO");
    }
}

// crates/ssrf-rs/src/builder.rs

use crate::config::{WriterConfig, XML_DECLARATION};
use crate::error::SsrfError;
use crate::model::{Ssrf, SsrfElement};
use alloc::format;
use alloc::string::String;
use core::fmt::Write;
use log::debug;
use serde::Serialize;

/// Serializes an `Ssrf` document into an XML `String` with the default
/// [`WriterConfig`] (declaration, two-space indentation).
///
/// # Errors
/// Returns an `SsrfError` if serialization fails.
pub fn save_ssrf_to_string(ssrf: &Ssrf) -> Result<String, SsrfError> {
    save_ssrf_with_config(ssrf, &WriterConfig::default())
}

/// Serializes an `Ssrf` document into an XML `String` using `config`.
///
/// # Errors
/// Returns an `SsrfError` if serialization fails.
pub fn save_ssrf_with_config(ssrf: &Ssrf, config: &WriterConfig) -> Result<String, SsrfError> {
    let xml = to_xml_string_with_config(ssrf, config)?;
    debug!(
        "Saved SSRF document with {} datasets ({} bytes)",
        ssrf.dataset_count(),
        xml.len()
    );
    Ok(xml)
}

/// Serializes any SSRF element as a standalone document rooted at
/// [`SsrfElement::ELEMENT`].
///
/// # Errors
/// Returns an `SsrfError` if serialization fails.
pub fn to_xml_string<T>(element: &T) -> Result<String, SsrfError>
where
    T: Serialize + SsrfElement,
{
    to_xml_string_with_config(element, &WriterConfig::default())
}

/// Like [`to_xml_string`], with explicit output settings.
///
/// # Errors
/// Returns an `SsrfError` if serialization fails.
pub fn to_xml_string_with_config<T>(element: &T, config: &WriterConfig) -> Result<String, SsrfError>
where
    T: Serialize + SsrfElement,
{
    let mut buffer = String::new();
    if config.xml_declaration {
        buffer.write_str(XML_DECLARATION)?;
    }

    let mut serializer = quick_xml::se::Serializer::with_root(&mut buffer, Some(T::ELEMENT))?;
    if let Some((ch, width)) = config.indent {
        serializer.indent(ch, width);
    }
    element.serialize(serializer)?;

    Ok(buffer)
}

// --- Coordinate helpers (public for use by model types) ---

/// Formats decimal degrees as an SSRF latitude, e.g. `384512.50N`.
///
/// Seconds are rounded to hundredths. Zero is written as north.
///
/// # Errors
/// Returns `SsrfError::InvalidCoordinate` for NaN or infinite input, or when
/// the degrees do not fit in two digits.
pub fn format_latitude(degrees: f64) -> Result<String, SsrfError> {
    format_sexagesimal(degrees, "latitude", 2, 'N', 'S')
}

/// Formats decimal degrees as an SSRF longitude, e.g. `0770230.00W`.
///
/// Seconds are rounded to hundredths. Zero is written as east.
///
/// # Errors
/// Returns `SsrfError::InvalidCoordinate` for NaN or infinite input, or when
/// the degrees do not fit in three digits.
pub fn format_longitude(degrees: f64) -> Result<String, SsrfError> {
    format_sexagesimal(degrees, "longitude", 3, 'E', 'W')
}

const HUNDREDTHS_PER_DEGREE: u64 = 360_000;
const HUNDREDTHS_PER_MINUTE: u64 = 6_000;

fn format_sexagesimal(
    degrees: f64,
    axis: &'static str,
    deg_digits: usize,
    positive: char,
    negative: char,
) -> Result<String, SsrfError> {
    if !degrees.is_finite() {
        return Err(SsrfError::InvalidCoordinate {
            axis,
            value: format!("{}", degrees),
        });
    }

    let hemisphere = if degrees >= 0.0 { positive } else { negative };
    let magnitude = if degrees < 0.0 { -degrees } else { degrees };

    // Rounding the total to whole hundredths of a second carries 59.995"
    // into the next minute (and degree) instead of printing "60.00".
    let total = (magnitude * HUNDREDTHS_PER_DEGREE as f64 + 0.5) as u64;
    let whole_degrees = total / HUNDREDTHS_PER_DEGREE;
    if whole_degrees >= 10u64.pow(deg_digits as u32) {
        return Err(SsrfError::InvalidCoordinate {
            axis,
            value: format!("{}", degrees),
        });
    }
    let rest = total % HUNDREDTHS_PER_DEGREE;
    let minutes = rest / HUNDREDTHS_PER_MINUTE;
    let centiseconds = rest % HUNDREDTHS_PER_MINUTE;

    Ok(format!(
        "{:0width$}{:02}{:02}.{:02}{}",
        whole_degrees,
        minutes,
        centiseconds / 100,
        centiseconds % 100,
        hemisphere,
        width = deg_digits
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_latitude, parse_longitude};

    #[test]
    fn test_format_latitude() {
        assert_eq!(format_latitude(38.753472).unwrap(), "384512.50N");
        assert_eq!(format_latitude(-33.5).unwrap(), "333000.00S");
        assert_eq!(format_latitude(0.0).unwrap(), "000000.00N");
        assert_eq!(format_latitude(-0.0).unwrap(), "000000.00N");
    }

    #[test]
    fn test_format_longitude() {
        assert_eq!(format_longitude(-77.041667).unwrap(), "0770230.00W");
        assert_eq!(format_longitude(180.0).unwrap(), "1800000.00E");
        assert_eq!(format_longitude(0.0).unwrap(), "0000000.00E");
    }

    #[test]
    fn test_rounding_carries_into_minutes() {
        // 10 deg 59' 59.999"
        let v = 10.0 + 59.0 / 60.0 + 59.999 / 3600.0;
        assert_eq!(format_latitude(v).unwrap(), "110000.00N");
    }

    #[test]
    fn test_format_rejects_non_finite() {
        assert!(matches!(
            format_latitude(f64::NAN),
            Err(SsrfError::InvalidCoordinate { axis: "latitude", .. })
        ));
        assert!(format_longitude(f64::INFINITY).is_err());
    }

    #[test]
    fn test_format_rejects_degrees_wider_than_field() {
        assert!(matches!(
            format_latitude(1e20),
            Err(SsrfError::InvalidCoordinate { axis: "latitude", .. })
        ));
        assert!(format_latitude(100.0).is_err());
        assert!(format_latitude(-100.0).is_err());
        assert!(matches!(
            format_longitude(1000.0),
            Err(SsrfError::InvalidCoordinate { axis: "longitude", .. })
        ));

        // Out of the usual range but still representable, so it parses back.
        assert_eq!(format_latitude(99.5).unwrap(), "993000.00N");
        assert_eq!(parse_latitude("993000.00N").unwrap(), 99.5);
        assert_eq!(format_longitude(999.5).unwrap(), "9993000.00E");
    }

    #[test]
    fn test_decimal_string_decimal_is_stable() {
        // Half a hundredth of an arc-second, in degrees, plus float slack.
        let tolerance = 0.005 / 3600.0 + 1e-9;
        let mut v = -89.99;
        while v < 90.0 {
            let back = parse_latitude(&format_latitude(v).unwrap()).unwrap();
            let d = back - v;
            assert!(d <= tolerance && d >= -tolerance, "latitude {} -> {}", v, back);
            v += 0.731_17;
        }
        let mut v = -179.99;
        while v < 180.0 {
            let back = parse_longitude(&format_longitude(v).unwrap()).unwrap();
            let d = back - v;
            assert!(d <= tolerance && d >= -tolerance, "longitude {} -> {}", v, back);
            v += 1.374_29;
        }
    }
}

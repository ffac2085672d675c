// crates/ssrf-rs/src/parser.rs

use crate::config::SSRF_NAMESPACE;
use crate::error::SsrfError;
use crate::model::{Ssrf, SsrfElement};
use alloc::string::String;
use log::{debug, warn};
use serde::de::DeserializeOwned;

/// Coordinate text for a withheld position. Parses as 0.0.
pub const WITHHELD_COORDINATE: &str = "X";

/// Parses an SSRF document string slice into the `Ssrf` root element.
///
/// Required children that are missing do not fail the parse; use
/// [`IsSet`](crate::IsSet) to check for them afterwards.
///
/// # Errors
/// Returns `SsrfError::XmlParsing` if the XML is malformed or a value does not
/// fit its field type (e.g. an unknown code in an enumerated field).
pub fn load_ssrf_from_str(xml_content: &str) -> Result<Ssrf, SsrfError> {
    let ssrf: Ssrf = quick_xml::de::from_str(xml_content)?;

    if ssrf.xmlns != SSRF_NAMESPACE {
        warn!(
            "SSRF document declares namespace '{}', expected '{}'",
            ssrf.xmlns, SSRF_NAMESPACE
        );
    }
    debug!(
        "Loaded SSRF document: {} Loadset, {} Location, {} RFSystem, {} TOA",
        ssrf.loadset.len(),
        ssrf.location.len(),
        ssrf.rf_system.len(),
        ssrf.toa.len()
    );

    Ok(ssrf)
}

/// Parses a single SSRF element (e.g. a `<Location>` fragment).
///
/// # Errors
/// Returns `SsrfError::XmlParsing` if the XML is malformed.
pub fn from_xml_str<T>(xml_content: &str) -> Result<T, SsrfError>
where
    T: DeserializeOwned + SsrfElement,
{
    let element = quick_xml::de::from_str(xml_content)?;
    debug!("Parsed <{}> element", T::ELEMENT);
    Ok(element)
}

// --- Coordinate helpers (public for use by model types) ---

/// Parses an SSRF latitude (`DDMMSS[.ss]N` or `S`) into decimal degrees.
///
/// The literal `X` parses to 0.0.
///
/// # Errors
/// Returns `SsrfError::InvalidCoordinate` if the text does not match the format.
pub fn parse_latitude(s: &str) -> Result<f64, SsrfError> {
    parse_sexagesimal(s, "latitude", 2, b'N', b'S')
}

/// Parses an SSRF longitude (`DDDMMSS[.ss]E` or `W`) into decimal degrees.
///
/// The literal `X` parses to 0.0.
///
/// # Errors
/// Returns `SsrfError::InvalidCoordinate` if the text does not match the format.
pub fn parse_longitude(s: &str) -> Result<f64, SsrfError> {
    parse_sexagesimal(s, "longitude", 3, b'E', b'W')
}

/// Layout: `deg_digits` degree digits, 2 minute digits, 2 second digits,
/// then an optional `.` with up to two fraction digits, then the hemisphere.
fn parse_sexagesimal(
    s: &str,
    axis: &'static str,
    deg_digits: usize,
    positive: u8,
    negative: u8,
) -> Result<f64, SsrfError> {
    let invalid = || SsrfError::InvalidCoordinate {
        axis,
        value: String::from(s),
    };

    if s == WITHHELD_COORDINATE {
        return Ok(0.0);
    }

    let (&hemisphere, body) = s.as_bytes().split_last().ok_or_else(invalid)?;
    let sign = if hemisphere == positive {
        1.0
    } else if hemisphere == negative {
        -1.0
    } else {
        return Err(invalid());
    };

    let seconds_at = deg_digits + 2;
    let whole_len = seconds_at + 2;
    if body.len() < whole_len || !body[..whole_len].iter().all(u8::is_ascii_digit) {
        return Err(invalid());
    }
    match &body[whole_len..] {
        [] => {}
        [b'.', fraction @ ..] if fraction.len() <= 2 && fraction.iter().all(u8::is_ascii_digit) => {}
        _ => return Err(invalid()),
    }

    // Everything before the hemisphere byte is ASCII, so byte offsets are
    // char boundaries.
    let text = &s[..body.len()];
    let degrees: u32 = text[..deg_digits].parse().map_err(|_| invalid())?;
    let minutes: u32 = text[deg_digits..seconds_at].parse().map_err(|_| invalid())?;
    let seconds: f64 = text[seconds_at..]
        .trim_end_matches('.')
        .parse()
        .map_err(|_| invalid())?;

    Ok(sign * (f64::from(degrees) + f64::from(minutes) / 60.0 + seconds / 3600.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        let d = a - b;
        d < 1e-9 && d > -1e-9
    }

    #[test]
    fn test_parse_latitude_forms() {
        assert!(close(parse_latitude("384512N").unwrap(), 38.0 + 45.0 / 60.0 + 12.0 / 3600.0));
        assert!(close(parse_latitude("384512.N").unwrap(), 38.0 + 45.0 / 60.0 + 12.0 / 3600.0));
        assert!(close(parse_latitude("384512.5N").unwrap(), 38.0 + 45.0 / 60.0 + 12.5 / 3600.0));
        assert!(close(parse_latitude("000000.00S").unwrap(), 0.0));
        assert!(close(parse_latitude("900000.00S").unwrap(), -90.0));
    }

    #[test]
    fn test_parse_longitude_forms() {
        assert!(close(parse_longitude("1800000.00W").unwrap(), -180.0));
        assert!(close(
            parse_longitude("0770230.25E").unwrap(),
            77.0 + 2.0 / 60.0 + 30.25 / 3600.0
        ));
    }

    #[test]
    fn test_withheld_coordinate() {
        assert_eq!(parse_latitude("X").unwrap(), 0.0);
        assert_eq!(parse_longitude("X").unwrap(), 0.0);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in [
            "", "N", "3845N", "384512", "384512E", "384512.123N", "38451aN", "0384512N",
            "384512,5N", "3845é2N", "x",
        ] {
            let err = parse_latitude(bad).unwrap_err();
            assert!(
                matches!(err, SsrfError::InvalidCoordinate { axis: "latitude", .. }),
                "expected rejection of {:?}",
                bad
            );
        }
        assert!(parse_longitude("384512N").is_err(), "latitude layout is not a longitude");
        assert!(parse_longitude("0770230.00N").is_err());
    }

    #[test]
    fn test_load_rejects_malformed_document() {
        let result = load_ssrf_from_str("<SSRF><Location>");
        assert!(matches!(result, Err(SsrfError::XmlParsing(_))));
    }
}

//! Integration tests focused on error handling and edge cases.
//!
//! These tests ensure malformed documents and unknown codes are reported as
//! errors, and that missing required elements load cleanly but show up in the
//! presence checks, all without panicking.

use ssrf_rs::lists::{ListCcl, ListUsc};
use ssrf_rs::model::common::Downgrade;
use ssrf_rs::model::location::Location;
use ssrf_rs::{IsSet, SsrfError, from_xml_str, load_ssrf_from_str, save_ssrf_to_string};

/// A minimal valid document used as a base for creating corrupted test cases.
const MINIMAL_VALID_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<SSRF xmlns="urn:us:gov:dod:standard:ssrf:3.1">
  <Location cls="U">
    <Serial>USA::LO:1</Serial>
    <Name>Site</Name>
    <Point idx="1">
      <Lon>0770230.00W</Lon>
      <Lat>384512.50N</Lat>
    </Point>
  </Location>
  <RFSystem cls="U">
    <Serial>USA::RS:1</Serial>
    <Emergency>No</Emergency>
  </RFSystem>
  <TOA cls="U">
    <Serial>USA::TOA:1</Serial>
    <Administration>NTIA</Administration>
    <FreqBand>
      <FreqMin>225</FreqMin>
    </FreqBand>
  </TOA>
</SSRF>"#;

#[test]
fn test_minimal_document_is_valid() {
    let ssrf = load_ssrf_from_str(MINIMAL_VALID_XML).expect("minimal document must parse");
    assert_eq!(ssrf.dataset_count(), 3);
    assert!(ssrf.is_set());
}

/// Verifies that the parser catches malformed XML syntax (e.g., unclosed tags).
#[test]
fn test_malformed_xml_syntax() {
    let xml = r#"<SSRF><Location><Serial>USA::LO:1</Serial> ... missing closing tags"#;
    let result = load_ssrf_from_str(xml);
    assert!(
        matches!(result, Err(SsrfError::XmlParsing(_))),
        "Expected XmlParsing error, got {:?}",
        result
    );
}

/// An enumerated element with a code outside its list is a parse error.
#[test]
fn test_unknown_code_in_element() {
    let xml = MINIMAL_VALID_XML.replace("<Emergency>No</Emergency>", "<Emergency>Maybe</Emergency>");
    let result = load_ssrf_from_str(&xml);
    assert!(
        matches!(result, Err(SsrfError::XmlParsing(_))),
        "Expected XmlParsing error, got {:?}",
        result
    );
}

/// An unknown classification in the `cls` attribute is a parse error.
#[test]
fn test_unknown_classification_attribute() {
    let xml = MINIMAL_VALID_XML.replace(r#"<Location cls="U">"#, r#"<Location cls="Q">"#);
    assert!(matches!(
        load_ssrf_from_str(&xml),
        Err(SsrfError::XmlParsing(_))
    ));
}

/// A non-numeric value in a decimal element is a parse error.
#[test]
fn test_invalid_decimal() {
    let xml = MINIMAL_VALID_XML.replace("<FreqMin>225</FreqMin>", "<FreqMin>low</FreqMin>");
    assert!(matches!(
        load_ssrf_from_str(&xml),
        Err(SsrfError::XmlParsing(_))
    ));
}

/// A dataset without its Serial still loads, but is not set.
#[test]
fn test_missing_serial_loads_but_is_not_set() {
    let xml = MINIMAL_VALID_XML.replace("<Serial>USA::LO:1</Serial>", "");
    let ssrf = load_ssrf_from_str(&xml).expect("missing Serial must not fail the parse");
    let loc = &ssrf.location[0];
    assert!(!loc.is_set());
    assert!(!ssrf.is_set());
    assert!(ssrf.find_location("USA::LO:1").is_none());
}

/// A TOA without Administration or FreqBand still loads, but is not set.
#[test]
fn test_missing_toa_children() {
    let xml = MINIMAL_VALID_XML
        .replace("<Administration>NTIA</Administration>", "")
        .replace("<FreqBand>\n      <FreqMin>225</FreqMin>\n    </FreqBand>", "");
    let ssrf = load_ssrf_from_str(&xml).unwrap();
    let toa = &ssrf.toa[0];
    assert!(!toa.administration.is_set());
    assert!(toa.freq_band.is_empty());
    assert!(!toa.is_set());
}

/// A point with only one coordinate loads, but is not set.
#[test]
fn test_point_missing_latitude() {
    let xml = MINIMAL_VALID_XML.replace("<Lat>384512.50N</Lat>", "");
    let ssrf = load_ssrf_from_str(&xml).unwrap();
    let point = &ssrf.location[0].point[0];
    assert!(!point.is_set());
    assert_eq!(point.latitude(), None);
    assert!(point.longitude().is_some());
}

/// A coordinate in the wrong format loads as text but has no decimal value.
#[test]
fn test_malformed_coordinate_text() {
    let xml = MINIMAL_VALID_XML.replace("<Lat>384512.50N</Lat>", "<Lat>38.7534N</Lat>");
    let ssrf = load_ssrf_from_str(&xml).unwrap();
    let point = &ssrf.location[0].point[0];
    assert_eq!(point.lat.as_str(), Some("38.7534N"));
    assert_eq!(point.latitude(), None);
}

/// A point without `idx` is given one from the running index.
#[test]
fn test_point_without_idx_gets_index() {
    let xml = MINIMAL_VALID_XML.replace(r#"<Point idx="1">"#, "<Point>");
    let ssrf = load_ssrf_from_str(&xml).unwrap();
    assert!(ssrf.location[0].point[0].idx >= 1);
}

/// Empty input is an error, not an empty document.
#[test]
fn test_empty_input() {
    assert!(load_ssrf_from_str("").is_err());
}

#[test]
fn test_unknown_code_lookup() {
    let err = ListUsc::from_value("ZZ").unwrap_err();
    match err {
        SsrfError::UnknownCode { list, value } => {
            assert_eq!(list, "ListUSC");
            assert_eq!(value, "ZZ");
        }
        other => panic!("Expected UnknownCode, got {:?}", other),
    }
    assert!("u".parse::<ListCcl>().is_err(), "codes are case sensitive");
}

/// Adding a fourth downgrade to a loaded document evicts the oldest one.
#[test]
fn test_downgrade_bound_after_load() {
    let xml = MINIMAL_VALID_XML.replace(
        "<Serial>USA::LO:1</Serial>",
        "<SecurityClass>\
           <Downgrade><DowngradeCls>T</DowngradeCls></Downgrade>\
           <Downgrade><DowngradeCls>S</DowngradeCls></Downgrade>\
           <Downgrade><DowngradeCls>C</DowngradeCls></Downgrade>\
         </SecurityClass>\
         <Serial>USA::LO:1</Serial>",
    );
    let mut ssrf = load_ssrf_from_str(&xml).unwrap();
    let sc = ssrf.location[0]
        .security_class
        .as_mut()
        .expect("SecurityClass missing");
    assert_eq!(sc.downgrade.len(), 3);

    sc.push_downgrade(Downgrade::new(ListCcl::U));
    let targets: Vec<_> = sc.downgrade.iter().filter_map(Downgrade::target_cls).collect();
    assert_eq!(targets, vec![ListCcl::S, ListCcl::C, ListCcl::U]);

    let saved = save_ssrf_to_string(&ssrf).unwrap();
    assert!(!saved.contains("<DowngradeCls>T</DowngradeCls>"));
}

/// Parsing a fragment as the wrong element type fails cleanly.
#[test]
fn test_fragment_of_wrong_shape() {
    let result = from_xml_str::<Location>("<Location><Point idx=\"abc\"/></Location>");
    assert!(matches!(result, Err(SsrfError::XmlParsing(_))));
}

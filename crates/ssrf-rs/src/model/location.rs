// crates/ssrf-rs/src/model/location.rs

use super::{Dataset, SsrfElement};
use crate::builder::{format_latitude, format_longitude};
use crate::error::SsrfError;
use crate::index::next_index;
use crate::lists::ListCbo;
use crate::parser::{parse_latitude, parse_longitude};
use crate::types::{Attributed, IsSet, TDecimal, TString};
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use log::warn;
use serde::{Deserialize, Serialize};

dataset! {
    /// A named geographic location: a single point, a line or a polygon.
    ///
    /// Represents `<Location>`.
    pub struct Location {
        #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
        pub name: Option<TString>,

        /// ISO 3166 country or region code (S6).
        #[serde(rename = "Country", default, skip_serializing_if = "Option::is_none")]
        pub country: Option<TString>,

        #[serde(rename = "Point", default, skip_serializing_if = "Vec::is_empty")]
        pub point: Vec<Point>,
    }
}

impl SsrfElement for Location {
    const ELEMENT: &'static str = "Location";
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = Some(TString::new(value.into()));
        self
    }

    pub fn with_country(mut self, value: impl Into<String>) -> Self {
        self.country = Some(TString::new(value.into()));
        self
    }

    /// Appends points in the given order.
    pub fn with_point(mut self, values: impl IntoIterator<Item = Point>) -> Self {
        self.point.extend(values);
        self
    }

    pub fn unset_point(&mut self) {
        self.point.clear();
    }
}

impl IsSet for Location {
    fn is_set(&self) -> bool {
        self.is_common_set()
    }
}

/// One geographic vertex of a `Location`.
///
/// Latitude and longitude are stored as SSRF sexagesimal strings
/// (`DDMMSS.ssN`, `DDDMMSS.ssE`) or the literal `X` for a withheld position.
/// Points compare, hash and sort by `idx` alone.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Point {
    #[serde(rename = "@idx", default = "next_index")]
    pub idx: u32,

    /// Whether the point is excluded from the enclosing area.
    #[serde(rename = "Excluded", default, skip_serializing_if = "Option::is_none")]
    pub excluded: Option<Attributed<ListCbo>>,

    #[serde(rename = "Lon", default)]
    pub lon: TString,

    #[serde(rename = "Lat", default)]
    pub lat: TString,

    /// Terrain elevation above mean sea level, in meters.
    #[serde(
        rename = "TerrainElevation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub terrain_elevation: Option<TDecimal>,

    #[serde(
        rename = "AltitudeMin",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub altitude_min: Option<TDecimal>,

    #[serde(
        rename = "AltitudeMax",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub altitude_max: Option<TDecimal>,
}

impl Default for Point {
    fn default() -> Self {
        Self::new()
    }
}

impl Point {
    /// Creates an empty point with the next free `idx`.
    pub fn new() -> Self {
        Self {
            idx: next_index(),
            excluded: None,
            lon: TString::empty(),
            lat: TString::empty(),
            terrain_elevation: None,
            altitude_min: None,
            altitude_max: None,
        }
    }

    /// Latitude in decimal degrees, negative in the southern hemisphere.
    ///
    /// Returns `None` when no latitude is set or the stored string is not a
    /// valid SSRF latitude.
    pub fn latitude(&self) -> Option<f64> {
        let text = self.lat.as_str()?;
        match parse_latitude(text) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Point {}: {}", self.idx, e);
                None
            }
        }
    }

    /// Longitude in decimal degrees, negative west of Greenwich.
    pub fn longitude(&self) -> Option<f64> {
        let text = self.lon.as_str()?;
        match parse_longitude(text) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!("Point {}: {}", self.idx, e);
                None
            }
        }
    }

    /// Stores `degrees` as an SSRF latitude string; `None` clears the value.
    pub fn set_latitude(&mut self, degrees: Option<f64>) -> Result<(), SsrfError> {
        let text = degrees.map(format_latitude).transpose()?;
        self.lat.set_value(text);
        Ok(())
    }

    /// Stores `degrees` as an SSRF longitude string; `None` clears the value.
    pub fn set_longitude(&mut self, degrees: Option<f64>) -> Result<(), SsrfError> {
        let text = degrees.map(format_longitude).transpose()?;
        self.lon.set_value(text);
        Ok(())
    }

    pub fn with_latitude(mut self, degrees: f64) -> Result<Self, SsrfError> {
        self.set_latitude(Some(degrees))?;
        Ok(self)
    }

    pub fn with_longitude(mut self, degrees: f64) -> Result<Self, SsrfError> {
        self.set_longitude(Some(degrees))?;
        Ok(self)
    }

    /// Sets the raw latitude string, e.g. `"384512.50N"` or `"X"`.
    pub fn with_lat_str(mut self, value: impl Into<String>) -> Self {
        self.lat.set_value(Some(value.into()));
        self
    }

    /// Sets the raw longitude string, e.g. `"0770230.00W"` or `"X"`.
    pub fn with_lon_str(mut self, value: impl Into<String>) -> Self {
        self.lon.set_value(Some(value.into()));
        self
    }

    pub fn with_excluded(mut self, value: ListCbo) -> Self {
        self.excluded = Some(Attributed::new(value));
        self
    }

    pub fn with_terrain_elevation(mut self, meters: f64) -> Self {
        self.terrain_elevation = Some(TDecimal::new(meters));
        self
    }

    pub fn with_altitude_min(mut self, meters: f64) -> Self {
        self.altitude_min = Some(TDecimal::new(meters));
        self
    }

    pub fn with_altitude_max(mut self, meters: f64) -> Self {
        self.altitude_max = Some(TDecimal::new(meters));
        self
    }

    /// Overrides the automatically assigned index.
    pub fn with_idx(mut self, idx: u32) -> Self {
        self.idx = idx;
        self
    }
}

impl IsSet for Point {
    fn is_set(&self) -> bool {
        self.lat.is_set() && self.lon.is_set()
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.idx == other.idx
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.idx.hash(state);
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        self.idx.cmp(&other.idx)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point {{ idx [{}]", self.idx)?;
        if let Some(v) = &self.excluded {
            write!(f, " excluded [{}]", v)?;
        }
        if self.lon.is_set() {
            write!(f, " lon [{}]", self.lon)?;
        }
        if self.lat.is_set() {
            write!(f, " lat [{}]", self.lat)?;
        }
        if let Some(v) = &self.terrain_elevation {
            write!(f, " terrainElevation [{}]", v)?;
        }
        if let Some(v) = &self.altitude_min {
            write!(f, " altitudeMin [{}]", v)?;
        }
        if let Some(v) = &self.altitude_max {
            write!(f, " altitudeMax [{}]", v)?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;
    use alloc::string::ToString;
    use alloc::vec;

    fn close(a: f64, b: f64) -> bool {
        let d = a - b;
        d < 1e-6 && d > -1e-6
    }

    #[test]
    fn test_new_points_get_increasing_idx() {
        let a = Point::new();
        let b = Point::new();
        assert!(b.idx > a.idx);
        assert!(a < b);
    }

    #[test]
    fn test_identity_is_idx_only() {
        let a = Point::new().with_idx(7).with_lat_str("100000N");
        let b = Point::new().with_idx(7).with_lat_str("200000S");
        assert_eq!(a, b);

        let set: BTreeSet<Point> = vec![a, b, Point::new().with_idx(3)].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert_eq!(set.iter().next().map(|p| p.idx), Some(3));
    }

    #[test]
    fn test_latitude_and_longitude_from_strings() {
        let p = Point::new()
            .with_lat_str("384512.50N")
            .with_lon_str("0770230.00W");
        let lat = p.latitude().unwrap();
        let lon = p.longitude().unwrap();
        assert!(close(lat, 38.0 + 45.0 / 60.0 + 12.5 / 3600.0));
        assert!(close(lon, -(77.0 + 2.0 / 60.0 + 30.0 / 3600.0)));
    }

    #[test]
    fn test_withheld_position_is_zero() {
        let p = Point::new().with_lat_str("X").with_lon_str("X");
        assert_eq!(p.latitude(), Some(0.0));
        assert_eq!(p.longitude(), Some(0.0));
    }

    #[test]
    fn test_malformed_coordinate_is_none() {
        let p = Point::new().with_lat_str("north").with_lon_str("0770230.00Q");
        assert_eq!(p.latitude(), None);
        assert_eq!(p.longitude(), None);
        assert_eq!(Point::new().latitude(), None);
    }

    #[test]
    fn test_set_latitude_formats_and_clears() {
        let mut p = Point::new().with_latitude(-33.5).unwrap();
        assert_eq!(p.lat.as_str(), Some("333000.00S"));
        p.set_latitude(None).unwrap();
        assert!(!p.lat.is_set());
        assert!(p.set_longitude(Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_point_presence() {
        let p = Point::new().with_lat_str("X");
        assert!(!p.is_set());
        assert!(p.with_lon_str("X").is_set());
    }

    #[test]
    fn test_point_display() {
        let p = Point::new()
            .with_idx(4)
            .with_lat_str("100000N")
            .with_lon_str("0200000E")
            .with_altitude_max(120.0);
        assert_eq!(
            p.to_string(),
            "Point { idx [4] lon [0200000E] lat [100000N] altitudeMax [120] }"
        );
    }

    #[test]
    fn test_location_builders() {
        let loc = Location::new()
            .with_serial("USA::LO:1")
            .with_name("Test Range")
            .with_point(vec![Point::new().with_lat_str("X").with_lon_str("X")]);
        assert!(loc.is_set());
        assert_eq!(loc.reference(), Some("USA::LO:1"));
        assert_eq!(loc.point.len(), 1);
        assert!(!Location::new().is_set());
    }

    #[test]
    fn test_releasability_skips_listed_codes() {
        let loc = Location::new()
            .with_releasability(["USA", "GBR", "USA"])
            .with_releasability(["GBR", "AUS"]);
        let codes: Vec<_> = loc.releasability.iter().filter_map(TString::as_str).collect();
        assert_eq!(codes, vec!["USA", "GBR", "AUS"]);
    }
}

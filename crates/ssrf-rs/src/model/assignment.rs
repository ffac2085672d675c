// crates/ssrf-rs/src/model/assignment.rs

use super::{Dataset, Location, SsrfElement};
use crate::error::SsrfError;
use crate::lists::ListCbo;
use crate::types::{Attributed, IsSet, TDate, TDecimal, TString};
use alloc::string::String;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Where an assigned station operates: a referenced location and an optional
/// service volume around it. Distances are in km, heights in meters MSL.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct StationLoc {
    /// `Yes` removes `LocSatRef` from the possible locations. Absent means `No`.
    #[serde(
        rename = "LocationExcluded",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location_excluded: Option<Attributed<ListCbo>>,

    /// Serial of a Location or Satellite dataset.
    #[serde(rename = "LocSatRef", default, skip_serializing_if = "Option::is_none")]
    pub loc_sat_ref: Option<TString>,

    #[serde(
        rename = "LocationRadius",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub location_radius: Option<TDecimal>,

    /// Serial of a Location dataset.
    #[serde(
        rename = "ServiceVolumeLocRef",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub service_volume_loc_ref: Option<TString>,

    #[serde(
        rename = "ServiceVolumeRadius",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub service_volume_radius: Option<TDecimal>,

    #[serde(
        rename = "ServiceVolumeHeight",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub service_volume_height: Option<TDecimal>,
}

impl SsrfElement for StationLoc {
    const ELEMENT: &'static str = "StationLoc";
}

impl StationLoc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location_excluded(mut self, value: ListCbo) -> Self {
        self.location_excluded = Some(Attributed::new(value));
        self
    }

    pub fn with_loc_sat_ref(mut self, serial: impl Into<String>) -> Self {
        self.loc_sat_ref = Some(TString::new(serial.into()));
        self
    }

    /// References `location` by its serial.
    pub fn with_location(self, location: &Location) -> Result<Self, SsrfError> {
        let serial = location.require_reference()?;
        Ok(self.with_loc_sat_ref(serial))
    }

    pub fn with_location_radius(mut self, km: f64) -> Self {
        self.location_radius = Some(TDecimal::new(km));
        self
    }

    pub fn with_service_volume_loc_ref(mut self, serial: impl Into<String>) -> Self {
        self.service_volume_loc_ref = Some(TString::new(serial.into()));
        self
    }

    /// Uses `location` as the service volume, referenced by its serial.
    pub fn with_service_volume_location(self, location: &Location) -> Result<Self, SsrfError> {
        let serial = location.require_reference()?;
        Ok(self.with_service_volume_loc_ref(serial))
    }

    pub fn with_service_volume_radius(mut self, km: f64) -> Self {
        self.service_volume_radius = Some(TDecimal::new(km));
        self
    }

    pub fn with_service_volume_height(mut self, meters: f64) -> Self {
        self.service_volume_height = Some(TDecimal::new(meters));
        self
    }

    /// Whether the referenced location is excluded. Defaults to `false`.
    pub fn is_excluded(&self) -> bool {
        self.location_excluded
            .as_ref()
            .and_then(|v| v.value().copied())
            .is_some_and(bool::from)
    }
}

impl IsSet for StationLoc {
    fn is_set(&self) -> bool {
        true
    }
}

/// A planned change to narrow-band operation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct NarrowBandPlanning {
    #[serde(rename = "ChangeDate", default, skip_serializing_if = "Option::is_none")]
    pub change_date: Option<TDate>,

    /// Narrow-band frequency in MHz.
    #[serde(rename = "NBFreq", default, skip_serializing_if = "Option::is_none")]
    pub nb_freq: Option<TDecimal>,
}

impl SsrfElement for NarrowBandPlanning {
    const ELEMENT: &'static str = "NarrowBandPlanning";
}

impl NarrowBandPlanning {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_change_date(mut self, value: NaiveDate) -> Self {
        self.change_date = Some(value.into());
        self
    }

    pub fn with_nb_freq(mut self, mhz: f64) -> Self {
        self.nb_freq = Some(TDecimal::new(mhz));
        self
    }
}

impl IsSet for NarrowBandPlanning {
    fn is_set(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_loc_references_location() {
        let loc = Location::new().with_serial("USA::LO:42");
        let sl = StationLoc::new()
            .with_location(&loc)
            .unwrap()
            .with_service_volume_location(&loc)
            .unwrap()
            .with_service_volume_radius(25.0);
        assert_eq!(sl.loc_sat_ref.as_ref().and_then(|r| r.as_str()), Some("USA::LO:42"));
        assert_eq!(
            sl.service_volume_loc_ref.as_ref().and_then(|r| r.as_str()),
            Some("USA::LO:42")
        );
        assert!(sl.is_set());
    }

    #[test]
    fn test_station_loc_rejects_unserialised_location() {
        let result = StationLoc::new().with_location(&Location::new());
        assert!(matches!(
            result,
            Err(SsrfError::MissingElement { element: "Serial" })
        ));
    }

    #[test]
    fn test_excluded_defaults_to_false() {
        assert!(!StationLoc::new().is_excluded());
        assert!(StationLoc::new().with_location_excluded(ListCbo::Yes).is_excluded());
        assert!(!StationLoc::new().with_location_excluded(ListCbo::No).is_excluded());
    }

    #[test]
    fn test_narrow_band_planning_builders() {
        let date = NaiveDate::from_ymd_opt(2027, 1, 1).unwrap();
        let nb = NarrowBandPlanning::new().with_change_date(date).with_nb_freq(162.25);
        assert_eq!(nb.change_date.as_ref().and_then(|d| d.value().copied()), Some(date));
        assert!(nb.is_set());
    }
}

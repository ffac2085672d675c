// crates/ssrf-rs/src/model/toa.rs

use super::{Dataset, SsrfElement};
use crate::types::{IsSet, TDate, TDecimal, TString};
use alloc::string::String;
use alloc::vec::Vec;
use chrono::NaiveDate;
use core::fmt;
use serde::{Deserialize, Serialize};

dataset! {
    /// A table of frequency allocations published by an administration.
    ///
    /// Represents `<TOA>`. Repeated children keep document order.
    pub struct Toa {
        /// Administration that publishes the table (S50).
        #[serde(rename = "Administration", default)]
        pub administration: TString,

        #[serde(rename = "EffectiveDate", default, skip_serializing_if = "Option::is_none")]
        pub effective_date: Option<TDate>,

        #[serde(rename = "ExpirationDate", default, skip_serializing_if = "Option::is_none")]
        pub expiration_date: Option<TDate>,

        #[serde(rename = "Title", default, skip_serializing_if = "Option::is_none")]
        pub title: Option<TString>,

        #[serde(rename = "Footnote", default, skip_serializing_if = "Vec::is_empty")]
        pub footnote: Vec<Footnote>,

        /// Serials of ChannelPlan datasets.
        #[serde(rename = "ChannelPlanRef", default, skip_serializing_if = "Vec::is_empty")]
        pub channel_plan_ref: Vec<TString>,

        #[serde(rename = "Country", default, skip_serializing_if = "Vec::is_empty")]
        pub country: Vec<TString>,

        /// At least one band is required.
        #[serde(rename = "FreqBand", default)]
        pub freq_band: Vec<FreqBand>,
    }
}

impl SsrfElement for Toa {
    const ELEMENT: &'static str = "TOA";
}

impl Toa {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_administration(mut self, value: impl Into<String>) -> Self {
        self.administration = TString::new(value.into());
        self
    }

    pub fn with_effective_date(mut self, value: NaiveDate) -> Self {
        self.effective_date = Some(value.into());
        self
    }

    pub fn with_expiration_date(mut self, value: NaiveDate) -> Self {
        self.expiration_date = Some(value.into());
        self
    }

    pub fn with_title(mut self, value: impl Into<String>) -> Self {
        self.title = Some(TString::new(value.into()));
        self
    }

    pub fn with_footnote(mut self, values: impl IntoIterator<Item = Footnote>) -> Self {
        self.footnote.extend(values);
        self
    }

    pub fn with_channel_plan_ref<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.channel_plan_ref
            .extend(values.into_iter().map(|v| TString::new(v.into())));
        self
    }

    pub fn with_country<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.country
            .extend(values.into_iter().map(|v| TString::new(v.into())));
        self
    }

    pub fn with_freq_band(mut self, values: impl IntoIterator<Item = FreqBand>) -> Self {
        self.freq_band.extend(values);
        self
    }

    /// Bands whose range contains `freq` (MHz). A band without `FreqMax`
    /// covers only `FreqMin`.
    pub fn bands_containing(&self, freq: f64) -> impl Iterator<Item = &FreqBand> {
        self.freq_band.iter().filter(move |b| b.contains(freq))
    }
}

impl IsSet for Toa {
    fn is_set(&self) -> bool {
        self.is_common_set() && self.administration.is_set() && self.freq_band.is_set()
    }
}

/// Scalar children print their value; repeated children print their count.
impl fmt::Display for Toa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TOA {{")?;
        if self.serial.is_set() {
            write!(f, " serial [{}]", self.serial)?;
        }
        if self.administration.is_set() {
            write!(f, " administration [{}]", self.administration)?;
        }
        if let Some(v) = &self.title {
            write!(f, " title [{}]", v)?;
        }
        if let Some(v) = &self.effective_date {
            write!(f, " effectiveDate [{}]", v)?;
        }
        if let Some(v) = &self.expiration_date {
            write!(f, " expirationDate [{}]", v)?;
        }
        let counts = [
            ("footnote", self.footnote.len()),
            ("channelPlanRef", self.channel_plan_ref.len()),
            ("country", self.country.len()),
            ("freqBand", self.freq_band.len()),
        ];
        for (name, len) in counts {
            if len > 0 {
                write!(f, " {} [{}]", name, len)?;
            }
        }
        write!(f, " }}")
    }
}

/// A numbered footnote referenced from the allocation table.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Footnote {
    #[serde(rename = "Name", default)]
    pub name: TString,

    #[serde(rename = "Text", default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TString>,
}

impl Footnote {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: TString::new(name.into()),
            text: None,
        }
    }

    pub fn with_text(mut self, value: impl Into<String>) -> Self {
        self.text = Some(TString::new(value.into()));
        self
    }
}

impl IsSet for Footnote {
    fn is_set(&self) -> bool {
        self.name.is_set()
    }
}

/// A frequency band and the services allocated in it. Frequencies are in MHz.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct FreqBand {
    #[serde(rename = "FreqMin", default)]
    pub freq_min: TDecimal,

    #[serde(rename = "FreqMax", default, skip_serializing_if = "Option::is_none")]
    pub freq_max: Option<TDecimal>,

    #[serde(rename = "Service", default, skip_serializing_if = "Vec::is_empty")]
    pub service: Vec<TString>,
}

impl FreqBand {
    pub fn new(freq_min: f64) -> Self {
        Self {
            freq_min: TDecimal::new(freq_min),
            ..Default::default()
        }
    }

    pub fn with_freq_max(mut self, value: f64) -> Self {
        self.freq_max = Some(TDecimal::new(value));
        self
    }

    pub fn with_service<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.service
            .extend(values.into_iter().map(|v| TString::new(v.into())));
        self
    }

    fn contains(&self, freq: f64) -> bool {
        let Some(&min) = self.freq_min.value() else {
            return false;
        };
        let max = self
            .freq_max
            .as_ref()
            .and_then(|m| m.value().copied())
            .unwrap_or(min);
        freq >= min && freq <= max
    }
}

impl IsSet for FreqBand {
    fn is_set(&self) -> bool {
        self.freq_min.is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    fn sample() -> Toa {
        Toa::new()
            .with_serial("USA::TOA:1")
            .with_administration("NTIA")
            .with_freq_band(vec![
                FreqBand::new(225.0)
                    .with_freq_max(328.6)
                    .with_service(["FIXED", "MOBILE"]),
                FreqBand::new(406.1).with_freq_max(420.0),
            ])
    }

    #[test]
    fn test_presence_requires_administration_and_band() {
        assert!(sample().is_set());
        assert!(!Toa::new().with_serial("USA::TOA:2").is_set());
        assert!(
            !Toa::new()
                .with_serial("USA::TOA:3")
                .with_administration("NTIA")
                .is_set()
        );
    }

    #[test]
    fn test_collections_keep_order_and_duplicates() {
        let toa = sample()
            .with_country(["USA", "CAN", "USA"])
            .with_footnote(vec![Footnote::new("US1"), Footnote::new("US1")]);
        assert_eq!(toa.country.len(), 3);
        assert_eq!(toa.country[1].as_str(), Some("CAN"));
        assert_eq!(toa.footnote.len(), 2);
    }

    #[test]
    fn test_bands_containing() {
        let toa = sample();
        assert_eq!(toa.bands_containing(300.0).count(), 1);
        assert_eq!(toa.bands_containing(400.0).count(), 0);
        let single = FreqBand::new(121.5);
        assert!(single.contains(121.5));
        assert!(!single.contains(121.6));
    }

    #[test]
    fn test_toa_display() {
        let toa = sample()
            .with_effective_date(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
            .with_country(["USA"]);
        assert_eq!(
            toa.to_string(),
            "TOA { serial [USA::TOA:1] administration [NTIA] effectiveDate [2026-01-01] country [1] freqBand [2] }"
        );
        assert_eq!(Toa::new().to_string(), "TOA { }");
    }
}

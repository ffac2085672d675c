// crates/ssrf-rs/src/model/loadset.rs

use super::{Dataset, SsrfElement};
use crate::types::{IsSet, TDecimal, TInteger, TString};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

dataset! {
    /// Software and jamming profiles loaded into an electronic attack system.
    ///
    /// Represents `<Loadset>`.
    pub struct Loadset {
        #[serde(
            rename = "KeyLoadProcedure",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        pub key_load_procedure: Option<TString>,

        #[serde(
            rename = "MaxActiveFrames",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        pub max_active_frames: Option<TInteger>,

        #[serde(
            rename = "MaxReactiveFrames",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        pub max_reactive_frames: Option<TInteger>,

        #[serde(rename = "Mission", default, skip_serializing_if = "Option::is_none")]
        pub mission: Option<TString>,

        #[serde(rename = "Name", default)]
        pub name: TString,

        #[serde(
            rename = "PrimaryFirmware",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        pub primary_firmware: Option<TString>,

        #[serde(
            rename = "ResetProcedure",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        pub reset_procedure: Option<TString>,

        #[serde(
            rename = "SecondaryFirmware",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        pub secondary_firmware: Option<TString>,

        #[serde(rename = "Software", default, skip_serializing_if = "Option::is_none")]
        pub software: Option<TString>,

        /// At least one profile is required.
        #[serde(rename = "JammingChannelProfile", default)]
        pub jamming_channel_profile: Vec<JammingChannelProfile>,
    }
}

impl SsrfElement for Loadset {
    const ELEMENT: &'static str = "Loadset";
}

impl Loadset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key_load_procedure(mut self, value: impl Into<String>) -> Self {
        self.key_load_procedure = Some(TString::new(value.into()));
        self
    }

    pub fn with_max_active_frames(mut self, value: i64) -> Self {
        self.max_active_frames = Some(TInteger::new(value));
        self
    }

    pub fn with_max_reactive_frames(mut self, value: i64) -> Self {
        self.max_reactive_frames = Some(TInteger::new(value));
        self
    }

    pub fn with_mission(mut self, value: impl Into<String>) -> Self {
        self.mission = Some(TString::new(value.into()));
        self
    }

    pub fn with_name(mut self, value: impl Into<String>) -> Self {
        self.name = TString::new(value.into());
        self
    }

    pub fn with_primary_firmware(mut self, value: impl Into<String>) -> Self {
        self.primary_firmware = Some(TString::new(value.into()));
        self
    }

    pub fn with_reset_procedure(mut self, value: impl Into<String>) -> Self {
        self.reset_procedure = Some(TString::new(value.into()));
        self
    }

    pub fn with_secondary_firmware(mut self, value: impl Into<String>) -> Self {
        self.secondary_firmware = Some(TString::new(value.into()));
        self
    }

    pub fn with_software(mut self, value: impl Into<String>) -> Self {
        self.software = Some(TString::new(value.into()));
        self
    }

    pub fn with_jamming_channel_profile(
        mut self,
        values: impl IntoIterator<Item = JammingChannelProfile>,
    ) -> Self {
        self.jamming_channel_profile.extend(values);
        self
    }
}

impl IsSet for Loadset {
    fn is_set(&self) -> bool {
        self.is_common_set() && self.name.is_set() && self.jamming_channel_profile.is_set()
    }
}

impl fmt::Display for Loadset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Loadset {{")?;
        if self.serial.is_set() {
            write!(f, " serial [{}]", self.serial)?;
        }
        if self.name.is_set() {
            write!(f, " name [{}]", self.name)?;
        }
        let text = [
            ("mission", &self.mission),
            ("keyLoadProcedure", &self.key_load_procedure),
            ("resetProcedure", &self.reset_procedure),
            ("primaryFirmware", &self.primary_firmware),
            ("secondaryFirmware", &self.secondary_firmware),
            ("software", &self.software),
        ];
        for (name, value) in text {
            if let Some(v) = value {
                write!(f, " {} [{}]", name, v)?;
            }
        }
        if let Some(v) = &self.max_active_frames {
            write!(f, " maxActiveFrames [{}]", v)?;
        }
        if let Some(v) = &self.max_reactive_frames {
            write!(f, " maxReactiveFrames [{}]", v)?;
        }
        if !self.jamming_channel_profile.is_empty() {
            write!(f, " jammingChannelProfile [{}]", self.jamming_channel_profile.len())?;
        }
        write!(f, " }}")
    }
}

/// A named channel the jammer may work on, with its frequency limits in MHz.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct JammingChannelProfile {
    #[serde(rename = "Name", default)]
    pub name: TString,

    #[serde(rename = "FreqMin", default, skip_serializing_if = "Option::is_none")]
    pub freq_min: Option<TDecimal>,

    #[serde(rename = "FreqMax", default, skip_serializing_if = "Option::is_none")]
    pub freq_max: Option<TDecimal>,

    #[serde(rename = "Priority", default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<TInteger>,
}

impl JammingChannelProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: TString::new(name.into()),
            ..Default::default()
        }
    }

    pub fn with_freq_min(mut self, value: f64) -> Self {
        self.freq_min = Some(TDecimal::new(value));
        self
    }

    pub fn with_freq_max(mut self, value: f64) -> Self {
        self.freq_max = Some(TDecimal::new(value));
        self
    }

    pub fn with_priority(mut self, value: i64) -> Self {
        self.priority = Some(TInteger::new(value));
        self
    }
}

impl IsSet for JammingChannelProfile {
    fn is_set(&self) -> bool {
        self.name.is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_loadset_presence() {
        let base = Loadset::new().with_serial("USA::LS:1").with_name("Load A");
        assert!(!base.is_set(), "a loadset needs at least one profile");

        let full = base.with_jamming_channel_profile(vec![
            JammingChannelProfile::new("CH1")
                .with_freq_min(30.0)
                .with_freq_max(88.0)
                .with_priority(1),
        ]);
        assert!(full.is_set());
        assert_eq!(full.jamming_channel_profile[0].priority, Some(TInteger::new(1)));
    }

    #[test]
    fn test_loadset_display() {
        let loadset = Loadset::new()
            .with_serial("USA::LS:1")
            .with_name("Load A")
            .with_software("v2.1")
            .with_max_active_frames(4)
            .with_jamming_channel_profile(vec![
                JammingChannelProfile::new("CH1"),
                JammingChannelProfile::new("CH2"),
            ]);
        assert_eq!(
            loadset.to_string(),
            "Loadset { serial [USA::LS:1] name [Load A] software [v2.1] maxActiveFrames [4] jammingChannelProfile [2] }"
        );
    }
}

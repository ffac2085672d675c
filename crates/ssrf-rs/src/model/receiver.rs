// crates/ssrf-rs/src/model/receiver.rs

//! Receiver selectivity curves.

use super::SsrfElement;
use crate::index::next_index;
use crate::lists::ListCbo;
use crate::types::{Attributed, IsSet, TDecimal, TString};
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};

/// A frequency response curve, given as attenuation at offsets from a
/// reference frequency `FreqFactor * f + FreqConst`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Curve {
    /// Unique within the dataset; kept when earlier curves are removed.
    #[serde(rename = "@idx", default = "next_index")]
    pub idx: u32,

    /// Curve type code (CCT), e.g. `"Selectivity"`.
    #[serde(rename = "Type", default)]
    pub r#type: TString,

    #[serde(rename = "Calculated", default, skip_serializing_if = "Option::is_none")]
    pub calculated: Option<Attributed<ListCbo>>,

    #[serde(rename = "FreqFactor", default)]
    pub freq_factor: TDecimal,

    #[serde(rename = "FreqConst", default)]
    pub freq_const: TDecimal,

    #[serde(rename = "Bw", default, skip_serializing_if = "Option::is_none")]
    pub bw: Option<TDecimal>,

    #[serde(rename = "FreqMin", default, skip_serializing_if = "Option::is_none")]
    pub freq_min: Option<TDecimal>,

    #[serde(rename = "FreqMax", default, skip_serializing_if = "Option::is_none")]
    pub freq_max: Option<TDecimal>,

    #[serde(rename = "CurvePoint", default)]
    pub curve_point: Vec<CurvePoint>,
}

impl Default for Curve {
    fn default() -> Self {
        Self::new()
    }
}

impl SsrfElement for Curve {
    const ELEMENT: &'static str = "Curve";
}

impl Curve {
    pub fn new() -> Self {
        Self {
            idx: next_index(),
            r#type: TString::empty(),
            calculated: None,
            freq_factor: TDecimal::empty(),
            freq_const: TDecimal::empty(),
            bw: None,
            freq_min: None,
            freq_max: None,
            curve_point: Vec::new(),
        }
    }

    pub fn with_idx(mut self, idx: u32) -> Self {
        self.idx = idx;
        self
    }

    pub fn with_type(mut self, value: impl Into<String>) -> Self {
        self.r#type = TString::new(value.into());
        self
    }

    pub fn with_calculated(mut self, value: ListCbo) -> Self {
        self.calculated = Some(Attributed::new(value));
        self
    }

    pub fn with_freq_factor(mut self, value: f64) -> Self {
        self.freq_factor = TDecimal::new(value);
        self
    }

    pub fn with_freq_const(mut self, value: f64) -> Self {
        self.freq_const = TDecimal::new(value);
        self
    }

    pub fn with_bw(mut self, value: f64) -> Self {
        self.bw = Some(TDecimal::new(value));
        self
    }

    pub fn with_freq_min(mut self, value: f64) -> Self {
        self.freq_min = Some(TDecimal::new(value));
        self
    }

    pub fn with_freq_max(mut self, value: f64) -> Self {
        self.freq_max = Some(TDecimal::new(value));
        self
    }

    pub fn with_curve_point(mut self, values: impl IntoIterator<Item = CurvePoint>) -> Self {
        self.curve_point.extend(values);
        self
    }

    /// Reference frequency for a tuned frequency `freq`, if both factor and
    /// constant are set.
    pub fn reference_frequency(&self, freq: f64) -> Option<f64> {
        let factor = self.freq_factor.value()?;
        let constant = self.freq_const.value()?;
        Some(factor * freq + constant)
    }
}

impl IsSet for Curve {
    fn is_set(&self) -> bool {
        self.r#type.is_set()
            && self.freq_factor.is_set()
            && self.freq_const.is_set()
            && self.curve_point.is_set()
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Curve {{ idx [{}]", self.idx)?;
        if self.r#type.is_set() {
            write!(f, " type [{}]", self.r#type)?;
        }
        if let Some(v) = &self.calculated {
            write!(f, " calculated [{}]", v)?;
        }
        if self.freq_factor.is_set() {
            write!(f, " freqFactor [{}]", self.freq_factor)?;
        }
        if self.freq_const.is_set() {
            write!(f, " freqConst [{}]", self.freq_const)?;
        }
        let optional = [
            ("bw", &self.bw),
            ("freqMin", &self.freq_min),
            ("freqMax", &self.freq_max),
        ];
        for (name, value) in optional {
            if let Some(v) = value {
                write!(f, " {} [{}]", name, v)?;
            }
        }
        if !self.curve_point.is_empty() {
            write!(f, " curvePoint [{}]", self.curve_point.len())?;
        }
        write!(f, " }}")
    }
}

/// Attenuation at one frequency offset. Points compare, hash and sort by
/// `idx` alone.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CurvePoint {
    #[serde(rename = "@idx", default = "next_index")]
    pub idx: u32,

    /// Offset from the reference frequency, in MHz.
    #[serde(rename = "FreqOffset", default)]
    pub freq_offset: TDecimal,

    /// Attenuation in dB.
    #[serde(rename = "Attenuation", default)]
    pub attenuation: TDecimal,
}

impl Default for CurvePoint {
    fn default() -> Self {
        Self {
            idx: next_index(),
            freq_offset: TDecimal::empty(),
            attenuation: TDecimal::empty(),
        }
    }
}

impl CurvePoint {
    pub fn new(freq_offset: f64, attenuation: f64) -> Self {
        Self {
            freq_offset: TDecimal::new(freq_offset),
            attenuation: TDecimal::new(attenuation),
            ..Default::default()
        }
    }

    pub fn with_idx(mut self, idx: u32) -> Self {
        self.idx = idx;
        self
    }
}

impl IsSet for CurvePoint {
    fn is_set(&self) -> bool {
        self.freq_offset.is_set() && self.attenuation.is_set()
    }
}

impl PartialEq for CurvePoint {
    fn eq(&self, other: &Self) -> bool {
        self.idx == other.idx
    }
}

impl Eq for CurvePoint {}

impl Hash for CurvePoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.idx.hash(state);
    }
}

impl PartialOrd for CurvePoint {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CurvePoint {
    fn cmp(&self, other: &Self) -> Ordering {
        self.idx.cmp(&other.idx)
    }
}

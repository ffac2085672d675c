// crates/ssrf-rs/src/model/transmitter.rs

//! Observed modulation-on-pulse (MOP) characteristics of a transmitter.

use super::SsrfElement;
use crate::types::{IsSet, TDecimal, TInteger};
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Measured bit-level modulation on pulse. All children are optional.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ObservedMopBits {
    /// Duty cycle in percent.
    #[serde(rename = "MOPDutyCycle", default, skip_serializing_if = "Option::is_none")]
    pub mop_duty_cycle: Option<TDecimal>,

    #[serde(
        rename = "MOPNumElements",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mop_num_elements: Option<TInteger>,

    /// Amplitude step, in dB.
    #[serde(rename = "MOPStepAM", default, skip_serializing_if = "Option::is_none")]
    pub mop_step_am: Option<TDecimal>,

    #[serde(rename = "MOPStepCW", default, skip_serializing_if = "Option::is_none")]
    pub mop_step_cw: Option<TDecimal>,

    /// Frequency step, in MHz.
    #[serde(rename = "MOPStepFM", default, skip_serializing_if = "Option::is_none")]
    pub mop_step_fm: Option<TDecimal>,

    /// Phase step, in degrees.
    #[serde(rename = "MOPStepPM", default, skip_serializing_if = "Option::is_none")]
    pub mop_step_pm: Option<TDecimal>,

    // Element name is misspelled in the schema.
    #[serde(
        rename = "MOPRepetionInterval",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub mop_repetition_interval: Option<TDecimal>,

    /// Bits per second.
    #[serde(rename = "BitRate", default, skip_serializing_if = "Option::is_none")]
    pub bit_rate: Option<TDecimal>,

    /// Duration of one bit, in microseconds.
    #[serde(rename = "BitDuration", default, skip_serializing_if = "Option::is_none")]
    pub bit_duration: Option<TDecimal>,

    #[serde(
        rename = "ObservedMOPValues",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub observed_mop_values: Vec<ObservedMopValues>,
}

impl SsrfElement for ObservedMopBits {
    const ELEMENT: &'static str = "ObservedMOPBits";
}

impl ObservedMopBits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mop_duty_cycle(mut self, value: f64) -> Self {
        self.mop_duty_cycle = Some(TDecimal::new(value));
        self
    }

    pub fn with_mop_num_elements(mut self, value: i64) -> Self {
        self.mop_num_elements = Some(TInteger::new(value));
        self
    }

    pub fn with_mop_step_am(mut self, value: f64) -> Self {
        self.mop_step_am = Some(TDecimal::new(value));
        self
    }

    pub fn with_mop_step_cw(mut self, value: f64) -> Self {
        self.mop_step_cw = Some(TDecimal::new(value));
        self
    }

    pub fn with_mop_step_fm(mut self, value: f64) -> Self {
        self.mop_step_fm = Some(TDecimal::new(value));
        self
    }

    pub fn with_mop_step_pm(mut self, value: f64) -> Self {
        self.mop_step_pm = Some(TDecimal::new(value));
        self
    }

    pub fn with_mop_repetition_interval(mut self, value: f64) -> Self {
        self.mop_repetition_interval = Some(TDecimal::new(value));
        self
    }

    pub fn with_bit_rate(mut self, value: f64) -> Self {
        self.bit_rate = Some(TDecimal::new(value));
        self
    }

    pub fn with_bit_duration(mut self, value: f64) -> Self {
        self.bit_duration = Some(TDecimal::new(value));
        self
    }

    pub fn with_observed_mop_values(
        mut self,
        values: impl IntoIterator<Item = ObservedMopValues>,
    ) -> Self {
        self.observed_mop_values.extend(values);
        self
    }
}

impl IsSet for ObservedMopBits {
    fn is_set(&self) -> bool {
        true
    }
}

impl fmt::Display for ObservedMopBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObservedMOPBits {{")?;
        let decimals = [
            ("MOPDutyCycle", &self.mop_duty_cycle),
            ("MOPStepAM", &self.mop_step_am),
            ("MOPStepCW", &self.mop_step_cw),
            ("MOPStepFM", &self.mop_step_fm),
            ("MOPStepPM", &self.mop_step_pm),
            ("MOPRepetionInterval", &self.mop_repetition_interval),
            ("BitRate", &self.bit_rate),
            ("BitDuration", &self.bit_duration),
        ];
        if let Some(v) = &self.mop_num_elements {
            write!(f, " MOPNumElements [{}]", v)?;
        }
        for (name, value) in decimals {
            if let Some(v) = value {
                write!(f, " {} [{}]", name, v)?;
            }
        }
        if !self.observed_mop_values.is_empty() {
            write!(f, " ObservedMOPValues [{}]", self.observed_mop_values.len())?;
        }
        write!(f, " }}")
    }
}

/// One observed modulation value and how long it was held.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ObservedMopValues {
    #[serde(rename = "Value", default)]
    pub value: TDecimal,

    /// Duration in microseconds.
    #[serde(rename = "Duration", default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<TDecimal>,
}

impl ObservedMopValues {
    pub fn new(value: f64) -> Self {
        Self {
            value: TDecimal::new(value),
            duration: None,
        }
    }

    pub fn with_duration(mut self, value: f64) -> Self {
        self.duration = Some(TDecimal::new(value));
        self
    }
}

impl IsSet for ObservedMopValues {
    fn is_set(&self) -> bool {
        self.value.is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_always_set() {
        assert!(ObservedMopBits::new().is_set());
        assert!(!ObservedMopValues::default().is_set());
    }

    #[test]
    fn test_display_lists_present_values() {
        let bits = ObservedMopBits::new()
            .with_bit_rate(9600.0)
            .with_mop_num_elements(13)
            .with_observed_mop_values(vec![ObservedMopValues::new(1.0).with_duration(0.5)]);
        assert_eq!(
            bits.to_string(),
            "ObservedMOPBits { MOPNumElements [13] BitRate [9600] ObservedMOPValues [1] }"
        );
    }
}

// crates/ssrf-rs/src/types.rs

//! Metadata-carrying value boxes and presence checks.
//!
//! SSRF never stores a bare primitive: every leaf element carries the standard
//! metadata attributes (classification, remarks, ...) next to its text value.
//! `Attributed<T>` is that box; the `T*` aliases name the XSD base types.

use crate::lists::ListCcl;
use alloc::string::String;
use alloc::vec::Vec;
use chrono::{DateTime, NaiveDate, Utc};
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use serde::{Deserialize, Serialize};

/// A leaf value together with the SSRF standard metadata attributes.
///
/// Represents e.g. `<Serial cls="U">USA::TR:123</Serial>`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Attributed<T> {
    /// Classification of this single value.
    #[serde(rename = "@cls", default, skip_serializing_if = "Option::is_none")]
    pub cls: Option<ListCcl>,

    /// Space-separated references to Remarks within the dataset.
    #[serde(rename = "@remarks", default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,

    /// Space-separated references to external documents.
    #[serde(
        rename = "@extReferences",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ext_references: Option<String>,

    #[serde(rename = "@quality", default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<String>,

    #[serde(
        rename = "@recommendedValue",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub recommended_value: Option<String>,

    /// The element text. `None` for an element that only carries attributes.
    #[serde(rename = "$text", default, skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,
}

/// String value (`xs:string` and the S*/MEMO/SERIAL restrictions).
pub type TString = Attributed<String>;
/// Decimal value (`xs:decimal`, frequencies, distances, altitudes, ...).
pub type TDecimal = Attributed<f64>;
/// Integer value (`xs:integer` and the UN* restrictions).
pub type TInteger = Attributed<i64>;
/// Date value (`xs:date`).
pub type TDate = Attributed<NaiveDate>;
/// Date and time value (`xs:dateTime`), always kept in UTC.
pub type TCalendar = Attributed<DateTime<Utc>>;

impl<T> Default for Attributed<T> {
    fn default() -> Self {
        Self {
            cls: None,
            remarks: None,
            ext_references: None,
            quality: None,
            recommended_value: None,
            value: None,
        }
    }
}

impl<T> Attributed<T> {
    /// Wraps a value without any metadata attributes.
    pub fn new(value: T) -> Self {
        Self {
            value: Some(value),
            ..Default::default()
        }
    }

    /// An element with neither text nor attributes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets the classification of this value.
    pub fn with_cls(mut self, cls: ListCcl) -> Self {
        self.cls = Some(cls);
        self
    }

    pub fn with_remarks(mut self, remarks: impl Into<String>) -> Self {
        self.remarks = Some(remarks.into());
        self
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn set_value(&mut self, value: Option<T>) {
        self.value = value;
    }

    pub fn is_set_value(&self) -> bool {
        self.value.is_some()
    }
}

impl Attributed<String> {
    /// The text value as a string slice.
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl<T> From<T> for Attributed<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Attributed<String> {
    fn from(value: &str) -> Self {
        Self::new(String::from(value))
    }
}

impl<T: fmt::Display> fmt::Display for Attributed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(v) => fmt::Display::fmt(v, f),
            None => Ok(()),
        }
    }
}

/// Presence check for SSRF elements.
///
/// For a value box this means "the text value is present"; for a complex type
/// it means "every schema-required child is present". The check never fails,
/// it only reports.
pub trait IsSet {
    fn is_set(&self) -> bool;
}

impl<T> IsSet for Attributed<T> {
    fn is_set(&self) -> bool {
        self.is_set_value()
    }
}

impl<T: IsSet> IsSet for Option<T> {
    fn is_set(&self) -> bool {
        self.as_ref().is_some_and(IsSet::is_set)
    }
}

/// A repeated child is set when it has at least one entry.
impl<T> IsSet for Vec<T> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

// --- Domain types ---

/// Antenna height above ground, in whole meters.
///
/// Two heights are equal when their values are equal, regardless of metadata.
/// A height without a value sorts after every height with one.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(transparent)]
pub struct AntHeight(pub Attributed<u64>);

impl AntHeight {
    pub fn new(meters: u64) -> Self {
        Self(Attributed::new(meters))
    }

    pub fn meters(&self) -> Option<u64> {
        self.0.value
    }
}

impl IsSet for AntHeight {
    fn is_set(&self) -> bool {
        self.0.is_set_value()
    }
}

impl PartialEq for AntHeight {
    fn eq(&self, other: &Self) -> bool {
        self.0.value == other.0.value
    }
}

impl Eq for AntHeight {}

impl Hash for AntHeight {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.value.hash(state);
    }
}

impl PartialOrd for AntHeight {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AntHeight {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0.value, other.0.value) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl fmt::Display for AntHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

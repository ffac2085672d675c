//! `serde` data structures that map directly to the SSRF XML schema.
//!
//! Each struct represents one SSRF complex type. Field order follows the
//! schema sequence, since `quick-xml` writes children in declaration order.
//! Optional children are `Option<_>`, repeated children are `Vec<_>`, and
//! required children are plain fields whose presence is reported by
//! [`IsSet`](crate::IsSet) rather than enforced.

#![allow(clippy::pedantic)] // XML schema naming conventions differ from Rust

use crate::config::SSRF_NAMESPACE;
use crate::error::SsrfError;
use crate::lists::ListCcl;
use crate::types::{IsSet, TString};
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// Declares an SSRF dataset: a top-level record that starts with the common
/// header (classification, serial, entry and change tracking) followed by its
/// own children.
macro_rules! dataset {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
        pub struct $name {
            /// Classification of the dataset as a whole.
            #[serde(rename = "@cls", default)]
            pub cls: $crate::lists::ListCcl,

            #[serde(
                rename = "SecurityClass",
                default,
                skip_serializing_if = "Option::is_none"
            )]
            pub security_class: Option<$crate::model::common::SecurityClass>,

            /// Unique identifier of the dataset, e.g. `USA::TR:123`.
            #[serde(rename = "Serial", default)]
            pub serial: $crate::types::TString,

            #[serde(
                rename = "EntryDateTime",
                default,
                skip_serializing_if = "Option::is_none"
            )]
            pub entry_date_time: Option<$crate::types::TCalendar>,

            #[serde(rename = "EntryBy", default, skip_serializing_if = "Option::is_none")]
            pub entry_by: Option<$crate::types::TString>,

            #[serde(rename = "EntryOrg", default, skip_serializing_if = "Option::is_none")]
            pub entry_org: Option<$crate::types::TString>,

            #[serde(
                rename = "LastChangeDateTime",
                default,
                skip_serializing_if = "Option::is_none"
            )]
            pub last_change_date_time: Option<$crate::types::TCalendar>,

            #[serde(
                rename = "LastChangeBy",
                default,
                skip_serializing_if = "Option::is_none"
            )]
            pub last_change_by: Option<$crate::types::TString>,

            #[serde(
                rename = "LastReviewDate",
                default,
                skip_serializing_if = "Option::is_none"
            )]
            pub last_review_date: Option<$crate::types::TDate>,

            #[serde(
                rename = "ValidationStatus",
                default,
                skip_serializing_if = "Option::is_none"
            )]
            pub validation_status: Option<$crate::types::TString>,

            /// Countries or organisations the dataset may be released to.
            #[serde(rename = "Releasability", default, skip_serializing_if = "Vec::is_empty")]
            pub releasability: Vec<$crate::types::TString>,

            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        impl $crate::model::Dataset for $name {
            fn cls(&self) -> $crate::lists::ListCcl {
                self.cls
            }

            fn serial(&self) -> &$crate::types::TString {
                &self.serial
            }

            fn security_class(&self) -> Option<&$crate::model::common::SecurityClass> {
                self.security_class.as_ref()
            }
        }

        impl $name {
            pub fn with_cls(mut self, cls: $crate::lists::ListCcl) -> Self {
                self.cls = cls;
                self
            }

            pub fn with_serial(mut self, serial: impl Into<alloc::string::String>) -> Self {
                self.serial = $crate::types::TString::new(serial.into());
                self
            }

            pub fn with_security_class(
                mut self,
                security_class: $crate::model::common::SecurityClass,
            ) -> Self {
                self.security_class = Some(security_class);
                self
            }

            pub fn with_entry_date_time(mut self, value: chrono::DateTime<chrono::Utc>) -> Self {
                self.entry_date_time = Some(value.into());
                self
            }

            pub fn with_entry_by(mut self, value: impl Into<alloc::string::String>) -> Self {
                self.entry_by = Some($crate::types::TString::new(value.into()));
                self
            }

            pub fn with_entry_org(mut self, value: impl Into<alloc::string::String>) -> Self {
                self.entry_org = Some($crate::types::TString::new(value.into()));
                self
            }

            pub fn with_last_change_date_time(
                mut self,
                value: chrono::DateTime<chrono::Utc>,
            ) -> Self {
                self.last_change_date_time = Some(value.into());
                self
            }

            pub fn with_last_change_by(mut self, value: impl Into<alloc::string::String>) -> Self {
                self.last_change_by = Some($crate::types::TString::new(value.into()));
                self
            }

            pub fn with_last_review_date(mut self, value: chrono::NaiveDate) -> Self {
                self.last_review_date = Some(value.into());
                self
            }

            pub fn with_validation_status(
                mut self,
                value: impl Into<alloc::string::String>,
            ) -> Self {
                self.validation_status = Some($crate::types::TString::new(value.into()));
                self
            }

            /// Appends releasability codes, skipping codes already listed.
            pub fn with_releasability<I, S>(mut self, values: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<alloc::string::String>,
            {
                $crate::model::extend_unique(
                    &mut self.releasability,
                    values
                        .into_iter()
                        .map(|v| $crate::types::TString::new(v.into())),
                );
                self
            }
        }
    };
}

pub mod assignment;
pub mod common;
pub mod diagram;
pub mod loadset;
pub mod location;
pub mod receiver;
pub mod rf_system;
pub mod toa;
pub mod transmitter;

pub use common::SecurityClass;
pub use loadset::Loadset;
pub use location::{Location, Point};
pub use rf_system::RfSystem;
pub use toa::Toa;

/// An SSRF type that can be written as the root of an XML document.
pub trait SsrfElement {
    /// The XML element name, e.g. `"RFSystem"`.
    const ELEMENT: &'static str;
}

/// Shared behaviour of SSRF datasets (the common header every dataset carries).
pub trait Dataset: SsrfElement {
    fn cls(&self) -> ListCcl;

    fn serial(&self) -> &TString;

    fn security_class(&self) -> Option<&SecurityClass>;

    /// The text other elements use to reference this dataset: its serial.
    fn reference(&self) -> Option<&str> {
        self.serial().as_str()
    }

    /// Like [`reference`](Dataset::reference), but fails when the serial is missing.
    fn require_reference(&self) -> Result<&str, SsrfError> {
        self.reference()
            .ok_or(SsrfError::MissingElement { element: "Serial" })
    }

    /// Whether the header fields required for every dataset are present.
    fn is_common_set(&self) -> bool {
        self.serial().is_set()
    }
}

/// Appends `values` to `target`, skipping entries already present.
///
/// Used for repeated children that the schema treats as sets.
pub(crate) fn extend_unique<T: PartialEq>(target: &mut Vec<T>, values: impl IntoIterator<Item = T>) {
    for value in values {
        if !target.contains(&value) {
            target.push(value);
        }
    }
}

fn default_namespace() -> String {
    SSRF_NAMESPACE.into()
}

/// The root element of an SSRF document.
///
/// Represents `<SSRF xmlns="urn:us:gov:dod:standard:ssrf:3.1">`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename = "SSRF")]
pub struct Ssrf {
    #[serde(rename = "@xmlns", default = "default_namespace")]
    pub xmlns: String,

    #[serde(rename = "Loadset", default, skip_serializing_if = "Vec::is_empty")]
    pub loadset: Vec<Loadset>,

    #[serde(rename = "Location", default, skip_serializing_if = "Vec::is_empty")]
    pub location: Vec<Location>,

    #[serde(rename = "RFSystem", default, skip_serializing_if = "Vec::is_empty")]
    pub rf_system: Vec<RfSystem>,

    #[serde(rename = "TOA", default, skip_serializing_if = "Vec::is_empty")]
    pub toa: Vec<Toa>,
}

impl Default for Ssrf {
    fn default() -> Self {
        Self {
            xmlns: default_namespace(),
            loadset: Vec::new(),
            location: Vec::new(),
            rf_system: Vec::new(),
            toa: Vec::new(),
        }
    }
}

impl SsrfElement for Ssrf {
    const ELEMENT: &'static str = "SSRF";
}

impl Ssrf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loadset(mut self, values: impl IntoIterator<Item = Loadset>) -> Self {
        self.loadset.extend(values);
        self
    }

    pub fn with_location(mut self, values: impl IntoIterator<Item = Location>) -> Self {
        self.location.extend(values);
        self
    }

    pub fn with_rf_system(mut self, values: impl IntoIterator<Item = RfSystem>) -> Self {
        self.rf_system.extend(values);
        self
    }

    pub fn with_toa(mut self, values: impl IntoIterator<Item = Toa>) -> Self {
        self.toa.extend(values);
        self
    }

    /// Total number of datasets in the document.
    pub fn dataset_count(&self) -> usize {
        self.loadset.len() + self.location.len() + self.rf_system.len() + self.toa.len()
    }

    /// Finds a Location dataset by serial.
    pub fn find_location(&self, serial: &str) -> Option<&Location> {
        self.location.iter().find(|l| l.reference() == Some(serial))
    }

    /// Finds an RFSystem dataset by serial.
    pub fn find_rf_system(&self, serial: &str) -> Option<&RfSystem> {
        self.rf_system.iter().find(|s| s.reference() == Some(serial))
    }
}

/// A document is set when every dataset it holds is set.
impl IsSet for Ssrf {
    fn is_set(&self) -> bool {
        self.loadset.iter().all(IsSet::is_set)
            && self.location.iter().all(IsSet::is_set)
            && self.rf_system.iter().all(IsSet::is_set)
            && self.toa.iter().all(IsSet::is_set)
    }
}

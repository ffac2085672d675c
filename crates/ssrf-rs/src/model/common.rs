// crates/ssrf-rs/src/model/common.rs

//! Contains the `<SecurityClass>` block shared by every dataset.

use super::extend_unique;
use crate::lists::ListCcl;
use crate::types::{IsSet, TDate, TString};
use alloc::string::String;
use alloc::vec::Vec;
use chrono::NaiveDate;
use core::fmt;
use log::trace;
use serde::{Deserialize, Serialize};

/// Maximum number of downgrade instructions kept in a `SecurityClass`.
pub const MAX_DOWNGRADES: usize = 3;

/// Classification authority, reason and declassification instructions for a
/// dataset.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct SecurityClass {
    /// Name or position of the original classification authority (S30).
    #[serde(
        rename = "ClsAuthority",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub cls_authority: Option<TString>,

    #[serde(
        rename = "SourceClsDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_cls_date: Option<TDate>,

    /// Originating agency of the classification (S30).
    #[serde(rename = "ClsOrg", default, skip_serializing_if = "Option::is_none")]
    pub cls_org: Option<TString>,

    /// Reason for classification (S15).
    #[serde(rename = "ClsReason", default, skip_serializing_if = "Option::is_none")]
    pub cls_reason: Option<TString>,

    /// Declassification exemption category (S10).
    #[serde(rename = "DeclsType", default, skip_serializing_if = "Option::is_none")]
    pub decls_type: Option<TString>,

    #[serde(rename = "DeclsDate", default, skip_serializing_if = "Option::is_none")]
    pub decls_date: Option<TDate>,

    /// Event that triggers declassification (S200).
    #[serde(rename = "DeclsEvent", default, skip_serializing_if = "Option::is_none")]
    pub decls_event: Option<TString>,

    /// At most [`MAX_DOWNGRADES`] downgrade instructions, oldest first.
    #[serde(rename = "Downgrade", default, skip_serializing_if = "Vec::is_empty")]
    pub downgrade: Vec<Downgrade>,

    /// Sources the classification was derived from.
    #[serde(rename = "ClsDerived", default, skip_serializing_if = "Vec::is_empty")]
    pub cls_derived: Vec<ClsDerived>,
}

impl SecurityClass {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cls_authority(mut self, value: impl Into<String>) -> Self {
        self.cls_authority = Some(TString::new(value.into()));
        self
    }

    pub fn with_source_cls_date(mut self, value: NaiveDate) -> Self {
        self.source_cls_date = Some(value.into());
        self
    }

    pub fn with_cls_org(mut self, value: impl Into<String>) -> Self {
        self.cls_org = Some(TString::new(value.into()));
        self
    }

    pub fn with_cls_reason(mut self, value: impl Into<String>) -> Self {
        self.cls_reason = Some(TString::new(value.into()));
        self
    }

    pub fn with_decls_type(mut self, value: impl Into<String>) -> Self {
        self.decls_type = Some(TString::new(value.into()));
        self
    }

    pub fn with_decls_date(mut self, value: NaiveDate) -> Self {
        self.decls_date = Some(value.into());
        self
    }

    pub fn with_decls_event(mut self, value: impl Into<String>) -> Self {
        self.decls_event = Some(TString::new(value.into()));
        self
    }

    /// Appends downgrade instructions, keeping only the most recent
    /// [`MAX_DOWNGRADES`].
    pub fn with_downgrade(mut self, values: impl IntoIterator<Item = Downgrade>) -> Self {
        for value in values {
            self.push_downgrade(value);
        }
        self
    }

    /// Appends one downgrade instruction, evicting the oldest when full.
    pub fn push_downgrade(&mut self, value: Downgrade) {
        self.downgrade.push(value);
        while self.downgrade.len() > MAX_DOWNGRADES {
            let evicted = self.downgrade.remove(0);
            trace!("SecurityClass downgrade list full, evicting {:?}", evicted);
        }
    }

    /// Appends derivation sources, skipping sources already listed.
    pub fn with_cls_derived(mut self, values: impl IntoIterator<Item = ClsDerived>) -> Self {
        extend_unique(&mut self.cls_derived, values);
        self
    }

    pub fn unset_downgrade(&mut self) {
        self.downgrade.clear();
    }

    pub fn unset_cls_derived(&mut self) {
        self.cls_derived.clear();
    }
}

/// A `SecurityClass` has no required children.
impl IsSet for SecurityClass {
    fn is_set(&self) -> bool {
        true
    }
}

impl fmt::Display for SecurityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecurityClass {{")?;
        if let Some(v) = &self.cls_authority {
            write!(f, "\n    clsAuthority [{}]", v)?;
        }
        if let Some(v) = &self.cls_reason {
            write!(f, "\n    clsReason [{}]", v)?;
        }
        if let Some(v) = &self.source_cls_date {
            write!(f, "\n    sourceClsDate [{}]", v)?;
        }
        if let Some(v) = &self.cls_org {
            write!(f, "\n    clsOrg [{}]", v)?;
        }
        if !self.cls_derived.is_empty() {
            write!(f, "\n    clsDerived [{}]", self.cls_derived.len())?;
        }
        if let Some(v) = &self.decls_event {
            write!(f, "\n    declsEvent [{}]", v)?;
        }
        if let Some(v) = &self.decls_date {
            write!(f, "\n    declsDate [{}]", v)?;
        }
        if !self.downgrade.is_empty() {
            write!(f, "\n    downgrade [")?;
            for (i, d) in self.downgrade.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", d.downgrade_cls)?;
            }
            write!(f, "]")?;
        }
        if let Some(v) = &self.decls_type {
            write!(f, "\n    declsType [{}]", v)?;
        }
        write!(f, "}}")
    }
}

/// Instruction to lower the classification at a date or event.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Downgrade {
    /// Classification after the downgrade (code from CCL).
    #[serde(rename = "DowngradeCls", default)]
    pub downgrade_cls: TString,

    #[serde(
        rename = "DowngradeDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub downgrade_date: Option<TDate>,

    #[serde(
        rename = "DowngradeEvent",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub downgrade_event: Option<TString>,
}

impl Downgrade {
    pub fn new(cls: ListCcl) -> Self {
        Self {
            downgrade_cls: cls.into(),
            ..Default::default()
        }
    }

    pub fn with_date(mut self, value: NaiveDate) -> Self {
        self.downgrade_date = Some(value.into());
        self
    }

    pub fn with_event(mut self, value: impl Into<String>) -> Self {
        self.downgrade_event = Some(TString::new(value.into()));
        self
    }

    /// The target classification, if the code is a known CCL code.
    pub fn target_cls(&self) -> Option<ListCcl> {
        self.downgrade_cls
            .as_str()
            .and_then(|code| ListCcl::from_value(code).ok())
    }
}

impl IsSet for Downgrade {
    fn is_set(&self) -> bool {
        self.downgrade_cls.is_set()
    }
}

/// A source document the classification was derived from.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ClsDerived {
    #[serde(rename = "DerivedFrom", default)]
    pub derived_from: TString,

    #[serde(
        rename = "DerivedDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub derived_date: Option<TDate>,
}

impl ClsDerived {
    pub fn new(derived_from: impl Into<String>) -> Self {
        Self {
            derived_from: TString::new(derived_from.into()),
            derived_date: None,
        }
    }

    pub fn with_date(mut self, value: NaiveDate) -> Self {
        self.derived_date = Some(value.into());
        self
    }
}

impl IsSet for ClsDerived {
    fn is_set(&self) -> bool {
        self.derived_from.is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_fourth_downgrade_evicts_oldest() {
        let sc = SecurityClass::new().with_downgrade(vec![
            Downgrade::new(ListCcl::T),
            Downgrade::new(ListCcl::S),
            Downgrade::new(ListCcl::C),
        ]);
        assert_eq!(sc.downgrade.len(), 3);

        let sc = sc.with_downgrade(vec![Downgrade::new(ListCcl::U)]);
        let targets: Vec<_> = sc.downgrade.iter().filter_map(Downgrade::target_cls).collect();
        assert_eq!(targets, vec![ListCcl::S, ListCcl::C, ListCcl::U]);
    }

    #[test]
    fn test_single_call_keeps_last_three() {
        let sc = SecurityClass::new().with_downgrade(vec![
            Downgrade::new(ListCcl::T),
            Downgrade::new(ListCcl::S),
            Downgrade::new(ListCcl::C),
            Downgrade::new(ListCcl::R),
            Downgrade::new(ListCcl::U),
        ]);
        let targets: Vec<_> = sc.downgrade.iter().filter_map(Downgrade::target_cls).collect();
        assert_eq!(targets, vec![ListCcl::C, ListCcl::R, ListCcl::U]);
    }

    #[test]
    fn test_cls_derived_has_set_semantics() {
        let sc = SecurityClass::new()
            .with_cls_derived(vec![ClsDerived::new("DOC-1"), ClsDerived::new("DOC-2")])
            .with_cls_derived(vec![ClsDerived::new("DOC-1")]);
        assert_eq!(sc.cls_derived.len(), 2);
    }

    #[test]
    fn test_security_class_is_always_set() {
        assert!(SecurityClass::new().is_set());
        assert!(!Downgrade::default().is_set());
        assert!(Downgrade::new(ListCcl::U).is_set());
    }

    #[test]
    fn test_display_lists_present_fields() {
        let sc = SecurityClass::new()
            .with_cls_authority("DIRNSA")
            .with_downgrade(vec![Downgrade::new(ListCcl::C)]);
        let text = sc.to_string();
        assert!(text.starts_with("SecurityClass {"));
        assert!(text.contains("clsAuthority [DIRNSA]"));
        assert!(text.contains("downgrade [C]"));
        assert!(!text.contains("clsOrg"));
    }
}

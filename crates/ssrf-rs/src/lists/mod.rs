//! SSRF enumerated code lists.
//!
//! Each list maps a closed set of string codes from the SSRF schema onto a Rust
//! enum. The enums serialize as their code string, so a field may hold either
//! the enum itself or the raw code in a `TString`.

#![allow(clippy::upper_case_acronyms)] // Variants mirror the SSRF codes

use serde::{Deserialize, Serialize};

/// Declares an SSRF code list enum together with its code conversions.
macro_rules! code_list {
    (
        $(#[$meta:meta])*
        $name:ident, $list:tt {
            $( $(#[$vmeta:meta])* $variant:ident => $code:tt ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Name of the code list in the SSRF schema.
            pub const LIST: &'static str = $list;

            /// Every code of the list, in schema order.
            pub const VARIANTS: &'static [$name] = &[$($name::$variant),+];

            /// Returns the SSRF code string.
            pub const fn value(self) -> &'static str {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// Looks up a variant by its exact SSRF code.
            pub fn from_value(value: &str) -> Result<Self, $crate::error::SsrfError> {
                match value {
                    $($code => Ok($name::$variant),)+
                    _ => Err($crate::error::SsrfError::UnknownCode {
                        list: $list,
                        value: alloc::string::String::from(value),
                    }),
                }
            }
        }

        impl core::str::FromStr for $name {
            type Err = $crate::error::SsrfError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_value(s)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.value())
            }
        }

        impl From<$name> for $crate::types::TString {
            fn from(code: $name) -> Self {
                $crate::types::TString::new(alloc::string::String::from(code.value()))
            }
        }
    };
}

mod station_class;

pub use station_class::ListUsc;

code_list! {
    /// Yes/No indicator (CBO).
    ListCbo, "ListCBO" {
        Yes => "Yes",
        No => "No",
    }
}

impl From<bool> for ListCbo {
    fn from(b: bool) -> Self {
        if b { ListCbo::Yes } else { ListCbo::No }
    }
}

impl From<ListCbo> for bool {
    fn from(code: ListCbo) -> Self {
        code == ListCbo::Yes
    }
}

code_list! {
    /// Security classification level (CCL), used by the `cls` attribute.
    ListCcl, "ListCCL" {
        /// Unclassified
        U => "U",
        /// Restricted
        R => "R",
        /// Confidential
        C => "C",
        /// Secret
        S => "S",
        /// Top Secret
        T => "T",
    }
}

impl Default for ListCcl {
    fn default() -> Self {
        Self::U
    }
}

code_list! {
    /// Earth station antenna data accuracy (CEA). Used in EarthStation.
    ListCea, "ListCEA" {
        Specific => "Specific",
        Typical => "Typical",
    }
}

code_list! {
    /// Force element category (CFE). Used in ForceElement.
    ListCfe, "ListCFE" {
        SpecificPlatform => "Specific Platform",
        PlatformClass => "Platform Class",
        SpecificWeapon => "Specific Weapon",
        WeaponClass => "Weapon Class",
        Unit => "Unit",
    }
}

code_list! {
    /// Radar waveform category (CRA).
    ListCra, "ListCRA" {
        CodedPulse => "Coded Pulse",
        CW => "CW",
        FmCw => "FM CW",
        FmPulse => "FM Pulse",
        NonFmPulse => "Non-FM Pulse",
        Other => "Other",
    }
}

code_list! {
    /// Combatant command (UAG). Used in IntfReport.
    ListUag, "ListUAG" {
        AFRICOM => "AFRICOM",
        CENTCOM => "CENTCOM",
        EUCOM => "EUCOM",
        JFCOM => "JFCOM",
        NORTHCOM => "NORTHCOM",
        PACOM => "PACOM",
        SOCOM => "SOCOM",
        SOUTHCOM => "SOUTHCOM",
        STRATCOM => "STRATCOM",
        TRANSCOM => "TRANSCOM",
        OTHER => "OTHER",
    }
}

code_list! {
    /// Coordination body (UCJ). Used in CoordinationData.
    ListUcj, "ListUCJ" {
        Canada => "Canada",
        Mexico => "Mexico",
        NATO => "NATO",
        HostNation => "Host Nation",
        NtiaFasMembers => "NTIA Fas Members",
        FAA => "FAA",
        DodJointChiefsOfStaff => "DoD Joint Chiefs of Staff",
        Other => "Other",
    }
}

code_list! {
    /// Stock number type (UNS). Used in StockNum.
    ListUns, "ListUNS" {
        AgencyTrackingId => "Agency Tracking ID",
        CommercialPartNumber => "Commercial P/N",
        DrawingNumber => "Drawing Number",
        LineItemNumber => "Line Item Number",
        NationalStockNumber => "National Stock Number",
        // The schema code contains a double space.
        NatoStockNumber => "NATO  Stock Number",
    }
}

code_list! {
    /// Jamming effectiveness (UWB). Used in JammingPerformance and JammingPlan.
    ListUwb, "ListUWB" {
        FullyEffective => "Fully Effective",
        NotEffective => "Not Effective",
        PartiallyEffective => "Partially Effective",
        Other => "Other",
    }
}

// crates/ssrf-rs/src/lib.rs

#![no_std]
#![doc = "Reads and writes Standard Spectrum Resource Format (SSRF) XML documents."]
#![doc = ""]
#![doc = "This `no_std + alloc` library maps SSRF complex types onto plain `serde`"]
#![doc = "records. Every leaf value is an `Attributed<T>` box carrying the SSRF"]
#![doc = "metadata attributes; required children are reported by `IsSet` rather"]
#![doc = "than enforced."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `load_ssrf_from_str` / `save_ssrf_to_string`: whole documents."]
#![doc = "- `from_xml_str` / `to_xml_string`: single elements such as `Location`."]
#![doc = "- Conversion of SSRF sexagesimal coordinates to and from decimal degrees."]

extern crate alloc;

// --- Crate Modules ---

mod builder;
mod config;
mod error;
mod index;
pub mod lists;
pub mod model;
mod parser;
mod types;

// --- Public API Re-exports ---

pub use builder::{
    format_latitude, format_longitude, save_ssrf_to_string, save_ssrf_with_config,
    to_xml_string, to_xml_string_with_config,
};
pub use config::{SSRF_NAMESPACE, WriterConfig};
pub use error::SsrfError;
pub use index::next_index;
pub use model::{Dataset, Ssrf, SsrfElement};
pub use parser::{
    WITHHELD_COORDINATE, from_xml_str, load_ssrf_from_str, parse_latitude, parse_longitude,
};
pub use types::{AntHeight, Attributed, IsSet, TCalendar, TDate, TDecimal, TInteger, TString};

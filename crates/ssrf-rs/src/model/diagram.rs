// crates/ssrf-rs/src/model/diagram.rs

//! Network diagram elements: endpoints (icons) and the links between them.

use super::{Dataset, Location, SsrfElement};
use crate::error::SsrfError;
use crate::lists::ListCbo;
use crate::types::{Attributed, IsSet, TInteger, TString};
use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct DiagramEndpoint {
    /// Unique name within the diagram (S100).
    #[serde(rename = "Name", default)]
    pub name: TString,

    #[serde(rename = "IconType", default, skip_serializing_if = "Option::is_none")]
    pub icon_type: Option<TString>,

    /// Horizontal icon position, in pixels.
    #[serde(rename = "IconPosLeft", default, skip_serializing_if = "Option::is_none")]
    pub icon_pos_left: Option<TInteger>,

    /// Vertical icon position, in pixels.
    #[serde(rename = "IconPosTop", default, skip_serializing_if = "Option::is_none")]
    pub icon_pos_top: Option<TInteger>,

    #[serde(
        rename = "PointToMultiPoint",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub point_to_multi_point: Option<Attributed<ListCbo>>,

    #[serde(
        rename = "EndpointLocation",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub endpoint_location: Vec<EndpointLocation>,
}

impl SsrfElement for DiagramEndpoint {
    const ELEMENT: &'static str = "DiagramEndpoint";
}

impl DiagramEndpoint {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: TString::new(name.into()),
            ..Default::default()
        }
    }

    pub fn with_icon_type(mut self, value: impl Into<String>) -> Self {
        self.icon_type = Some(TString::new(value.into()));
        self
    }

    /// Places the icon at (`left`, `top`).
    pub fn with_icon_pos(mut self, left: i64, top: i64) -> Self {
        self.icon_pos_left = Some(TInteger::new(left));
        self.icon_pos_top = Some(TInteger::new(top));
        self
    }

    pub fn with_point_to_multi_point(mut self, value: ListCbo) -> Self {
        self.point_to_multi_point = Some(Attributed::new(value));
        self
    }

    pub fn with_endpoint_location(
        mut self,
        values: impl IntoIterator<Item = EndpointLocation>,
    ) -> Self {
        self.endpoint_location.extend(values);
        self
    }
}

impl IsSet for DiagramEndpoint {
    fn is_set(&self) -> bool {
        self.name.is_set()
    }
}

/// Reference from an endpoint to a Location dataset.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct EndpointLocation {
    #[serde(rename = "LocationRef", default)]
    pub location_ref: TString,
}

impl EndpointLocation {
    pub fn new(serial: impl Into<String>) -> Self {
        Self {
            location_ref: TString::new(serial.into()),
        }
    }

    pub fn to_location(location: &Location) -> Result<Self, SsrfError> {
        Ok(Self::new(location.require_reference()?))
    }
}

impl IsSet for EndpointLocation {
    fn is_set(&self) -> bool {
        self.location_ref.is_set()
    }
}

/// A link drawn from a transmitting endpoint to a receiving one.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct DiagramLine {
    #[serde(rename = "TxEndpointName", default)]
    pub tx_endpoint_name: TString,

    #[serde(rename = "RxEndpointName", default)]
    pub rx_endpoint_name: TString,

    /// Configuration of the RFSystem used on this link.
    #[serde(rename = "ConfigID", default, skip_serializing_if = "Option::is_none")]
    pub config_id: Option<TString>,
}

impl SsrfElement for DiagramLine {
    const ELEMENT: &'static str = "DiagramLine";
}

impl DiagramLine {
    pub fn new(tx: impl Into<String>, rx: impl Into<String>) -> Self {
        Self {
            tx_endpoint_name: TString::new(tx.into()),
            rx_endpoint_name: TString::new(rx.into()),
            config_id: None,
        }
    }

    /// Links two endpoints by name.
    ///
    /// # Errors
    /// Returns `SsrfError::MissingElement` if either endpoint has no name.
    pub fn between(tx: &DiagramEndpoint, rx: &DiagramEndpoint) -> Result<Self, SsrfError> {
        let name_of = |ep: &DiagramEndpoint| {
            ep.name
                .as_str()
                .map(String::from)
                .ok_or(SsrfError::MissingElement { element: "Name" })
        };
        Ok(Self::new(name_of(tx)?, name_of(rx)?))
    }

    pub fn with_config_id(mut self, value: impl Into<String>) -> Self {
        self.config_id = Some(TString::new(value.into()));
        self
    }
}

impl IsSet for DiagramLine {
    fn is_set(&self) -> bool {
        self.tx_endpoint_name.is_set() && self.rx_endpoint_name.is_set()
    }
}

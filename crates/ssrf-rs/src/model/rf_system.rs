// crates/ssrf-rs/src/model/rf_system.rs

use super::{extend_unique, Dataset, SsrfElement};
use crate::error::SsrfError;
use crate::lists::{ListCbo, ListUns};
use crate::types::{Attributed, IsSet, TDecimal, TInteger, TString};
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use serde::{Deserialize, Serialize};

dataset! {
    /// A radio system: the equipment, its configurations and who fields it.
    ///
    /// Represents `<RFSystem>`. Repeated children have set semantics; the
    /// builders skip entries that are already present.
    pub struct RfSystem {
        #[serde(
            rename = "FieldedStatus",
            default,
            skip_serializing_if = "Option::is_none"
        )]
        pub fielded_status: Option<TString>,

        /// Whether the system is used for emergency communications.
        #[serde(rename = "Emergency", default, skip_serializing_if = "Option::is_none")]
        pub emergency: Option<Attributed<ListCbo>>,

        /// Unit cost in thousands of US dollars.
        #[serde(rename = "InitialCost", default, skip_serializing_if = "Option::is_none")]
        pub initial_cost: Option<TDecimal>,

        #[serde(rename = "POCInformation", default, skip_serializing_if = "Vec::is_empty")]
        pub poc_information: Vec<PocInformation>,

        #[serde(rename = "Nomenclature", default, skip_serializing_if = "Vec::is_empty")]
        pub nomenclature: Vec<Nomenclature>,

        #[serde(rename = "Deployment", default, skip_serializing_if = "Vec::is_empty")]
        pub deployment: Vec<Deployment>,

        #[serde(rename = "Configuration", default, skip_serializing_if = "Vec::is_empty")]
        pub configuration: Vec<Configuration>,

        #[serde(rename = "RelatedSystem", default, skip_serializing_if = "Vec::is_empty")]
        pub related_system: Vec<RelatedSystem>,

        #[serde(rename = "StockNum", default, skip_serializing_if = "Vec::is_empty")]
        pub stock_num: Vec<StockNum>,

        #[serde(rename = "UsingCountries", default, skip_serializing_if = "Vec::is_empty")]
        pub using_countries: Vec<UsingCountries>,
    }
}

impl SsrfElement for RfSystem {
    const ELEMENT: &'static str = "RFSystem";
}

impl RfSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fielded_status(mut self, value: impl Into<String>) -> Self {
        self.fielded_status = Some(TString::new(value.into()));
        self
    }

    pub fn with_emergency(mut self, value: ListCbo) -> Self {
        self.emergency = Some(Attributed::new(value));
        self
    }

    pub fn with_initial_cost(mut self, value: f64) -> Self {
        self.initial_cost = Some(TDecimal::new(value));
        self
    }

    pub fn with_poc_information(
        mut self,
        values: impl IntoIterator<Item = PocInformation>,
    ) -> Self {
        extend_unique(&mut self.poc_information, values);
        self
    }

    pub fn with_nomenclature(mut self, values: impl IntoIterator<Item = Nomenclature>) -> Self {
        extend_unique(&mut self.nomenclature, values);
        self
    }

    pub fn with_deployment(mut self, values: impl IntoIterator<Item = Deployment>) -> Self {
        extend_unique(&mut self.deployment, values);
        self
    }

    pub fn with_configuration(mut self, values: impl IntoIterator<Item = Configuration>) -> Self {
        extend_unique(&mut self.configuration, values);
        self
    }

    pub fn with_related_system(mut self, values: impl IntoIterator<Item = RelatedSystem>) -> Self {
        extend_unique(&mut self.related_system, values);
        self
    }

    pub fn with_stock_num(mut self, values: impl IntoIterator<Item = StockNum>) -> Self {
        extend_unique(&mut self.stock_num, values);
        self
    }

    pub fn with_using_countries(
        mut self,
        values: impl IntoIterator<Item = UsingCountries>,
    ) -> Self {
        extend_unique(&mut self.using_countries, values);
        self
    }

    /// Finds a configuration by its `ConfigID`.
    pub fn configuration_by_id(&self, id: &str) -> Option<&Configuration> {
        self.configuration
            .iter()
            .find(|c| c.config_id.as_str() == Some(id))
    }
}

impl IsSet for RfSystem {
    fn is_set(&self) -> bool {
        self.is_common_set()
    }
}

impl fmt::Display for RfSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RFSystem {{")?;
        if self.serial.is_set() {
            write!(f, " serial [{}]", self.serial)?;
        }
        if let Some(v) = &self.fielded_status {
            write!(f, " fieldedStatus [{}]", v)?;
        }
        if let Some(v) = &self.emergency {
            write!(f, " emergency [{}]", v)?;
        }
        if let Some(v) = &self.initial_cost {
            write!(f, " initialCost [{}]", v)?;
        }
        let counts = [
            ("pocInformation", self.poc_information.len()),
            ("nomenclature", self.nomenclature.len()),
            ("deployment", self.deployment.len()),
            ("configuration", self.configuration.len()),
            ("relatedSystem", self.related_system.len()),
            ("stockNum", self.stock_num.len()),
            ("usingCountries", self.using_countries.len()),
        ];
        for (name, len) in counts {
            if len > 0 {
                write!(f, " {} [{}]", name, len)?;
            }
        }
        write!(f, " }}")
    }
}

/// Reference to a point of contact responsible for the system.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct PocInformation {
    /// Serial of a Contact dataset.
    #[serde(rename = "POCRef", default)]
    pub poc_ref: TString,

    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<TString>,
}

impl PocInformation {
    pub fn new(poc_ref: impl Into<String>) -> Self {
        Self {
            poc_ref: TString::new(poc_ref.into()),
            r#type: None,
        }
    }

    pub fn with_type(mut self, value: impl Into<String>) -> Self {
        self.r#type = Some(TString::new(value.into()));
        self
    }
}

impl IsSet for PocInformation {
    fn is_set(&self) -> bool {
        self.poc_ref.is_set()
    }
}

/// Official or common name of the equipment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Nomenclature {
    #[serde(rename = "Level", default, skip_serializing_if = "Option::is_none")]
    pub level: Option<TString>,

    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub r#type: Option<TString>,

    #[serde(rename = "Name", default)]
    pub name: TString,
}

impl Nomenclature {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: TString::new(name.into()),
            ..Default::default()
        }
    }

    pub fn with_level(mut self, value: impl Into<String>) -> Self {
        self.level = Some(TString::new(value.into()));
        self
    }

    pub fn with_type(mut self, value: impl Into<String>) -> Self {
        self.r#type = Some(TString::new(value.into()));
        self
    }
}

impl IsSet for Nomenclature {
    fn is_set(&self) -> bool {
        self.name.is_set()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Deployment {
    #[serde(rename = "Type", default)]
    pub r#type: TString,

    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<TString>,
}

impl Deployment {
    pub fn new(r#type: impl Into<String>) -> Self {
        Self {
            r#type: TString::new(r#type.into()),
            description: None,
        }
    }

    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(TString::new(value.into()));
        self
    }
}

impl IsSet for Deployment {
    fn is_set(&self) -> bool {
        self.r#type.is_set()
    }
}

/// A named combination of transmitters and receivers operated together.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Configuration {
    #[serde(rename = "ConfigID", default)]
    pub config_id: TString,

    #[serde(rename = "Description", default, skip_serializing_if = "Option::is_none")]
    pub description: Option<TString>,

    /// Serials of Transmitter datasets.
    #[serde(rename = "TxRef", default, skip_serializing_if = "Vec::is_empty")]
    pub tx_ref: Vec<TString>,

    /// Serials of Receiver datasets.
    #[serde(rename = "RxRef", default, skip_serializing_if = "Vec::is_empty")]
    pub rx_ref: Vec<TString>,
}

impl Configuration {
    pub fn new(config_id: impl Into<String>) -> Self {
        Self {
            config_id: TString::new(config_id.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.description = Some(TString::new(value.into()));
        self
    }

    pub fn with_tx_ref<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(
            &mut self.tx_ref,
            values.into_iter().map(|v| TString::new(v.into())),
        );
        self
    }

    pub fn with_rx_ref<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        extend_unique(
            &mut self.rx_ref,
            values.into_iter().map(|v| TString::new(v.into())),
        );
        self
    }
}

impl IsSet for Configuration {
    fn is_set(&self) -> bool {
        self.config_id.is_set()
    }
}

/// Link to another RFSystem, e.g. a component or a replacement.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct RelatedSystem {
    #[serde(rename = "RFSystemRef", default)]
    pub rf_system_ref: TString,

    #[serde(rename = "Relationship", default, skip_serializing_if = "Option::is_none")]
    pub relationship: Option<TString>,
}

impl RelatedSystem {
    pub fn new(rf_system_ref: impl Into<String>) -> Self {
        Self {
            rf_system_ref: TString::new(rf_system_ref.into()),
            relationship: None,
        }
    }

    /// References `system` by its serial.
    ///
    /// # Errors
    /// Returns `SsrfError::MissingElement` if `system` has no serial.
    pub fn to_system(system: &RfSystem) -> Result<Self, SsrfError> {
        Ok(Self::new(system.require_reference()?))
    }

    pub fn with_relationship(mut self, value: impl Into<String>) -> Self {
        self.relationship = Some(TString::new(value.into()));
        self
    }
}

impl IsSet for RelatedSystem {
    fn is_set(&self) -> bool {
        self.rf_system_ref.is_set()
    }
}

/// A stock or part number under which the equipment is catalogued.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct StockNum {
    #[serde(rename = "Type", default)]
    pub r#type: Attributed<ListUns>,

    #[serde(rename = "Num", default)]
    pub num: TString,
}

impl StockNum {
    pub fn new(r#type: ListUns, num: impl Into<String>) -> Self {
        Self {
            r#type: Attributed::new(r#type),
            num: TString::new(num.into()),
        }
    }
}

impl IsSet for StockNum {
    fn is_set(&self) -> bool {
        self.r#type.is_set() && self.num.is_set()
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct UsingCountries {
    /// ISO 3166 country code (S6).
    #[serde(rename = "Country", default)]
    pub country: TString,

    #[serde(rename = "Quantity", default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<TInteger>,
}

impl UsingCountries {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: TString::new(country.into()),
            quantity: None,
        }
    }

    pub fn with_quantity(mut self, value: i64) -> Self {
        self.quantity = Some(TInteger::new(value));
        self
    }
}

impl IsSet for UsingCountries {
    fn is_set(&self) -> bool {
        self.country.is_set()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[test]
    fn test_collections_skip_duplicates() {
        let sys = RfSystem::new()
            .with_serial("USA::RS:1")
            .with_nomenclature(vec![Nomenclature::new("AN/PRC-117G")])
            .with_nomenclature(vec![
                Nomenclature::new("AN/PRC-117G"),
                Nomenclature::new("Falcon III"),
            ])
            .with_using_countries(vec![UsingCountries::new("USA"), UsingCountries::new("USA")]);
        assert_eq!(sys.nomenclature.len(), 2);
        assert_eq!(sys.using_countries.len(), 1);
    }

    #[test]
    fn test_related_system_requires_serial() {
        let other = RfSystem::new().with_serial("USA::RS:2");
        let rel = RelatedSystem::to_system(&other)
            .unwrap()
            .with_relationship("Replaces");
        assert_eq!(rel.rf_system_ref.as_str(), Some("USA::RS:2"));

        let err = RelatedSystem::to_system(&RfSystem::new()).unwrap_err();
        assert!(matches!(err, SsrfError::MissingElement { element: "Serial" }));
    }

    #[test]
    fn test_configuration_lookup() {
        let sys = RfSystem::new().with_configuration(vec![
            Configuration::new("CFG-A").with_tx_ref(["USA::TX:1", "USA::TX:1"]),
            Configuration::new("CFG-B").with_rx_ref(["USA::RX:1"]),
        ]);
        let a = sys.configuration_by_id("CFG-A").unwrap();
        assert_eq!(a.tx_ref.len(), 1);
        assert!(sys.configuration_by_id("CFG-C").is_none());
    }

    #[test]
    fn test_presence_checks() {
        assert!(!RfSystem::new().is_set());
        assert!(RfSystem::new().with_serial("USA::RS:3").is_set());
        assert!(!StockNum::default().is_set());
        assert!(StockNum::new(ListUns::NationalStockNumber, "5820-01-451-8250").is_set());
        assert!(!Nomenclature::default().is_set());
    }

    #[test]
    fn test_rf_system_display() {
        let sys = RfSystem::new()
            .with_serial("USA::RS:1")
            .with_emergency(ListCbo::No)
            .with_initial_cost(12.75)
            .with_nomenclature(vec![Nomenclature::new("AN/PRC-117G")])
            .with_using_countries(vec![UsingCountries::new("USA"), UsingCountries::new("GBR")]);
        assert_eq!(
            sys.to_string(),
            "RFSystem { serial [USA::RS:1] emergency [No] initialCost [12.75] nomenclature [1] usingCountries [2] }"
        );
    }
}

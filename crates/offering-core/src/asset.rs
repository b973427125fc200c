//! Asset entity and data address value object
//!
//! An asset describes a piece of data offered through the registry. Where
//! and how the data can be fetched is captured by its [`DataAddress`].

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{DomainError, Result};

/// Describes where and how the data behind an asset can be fetched.
///
/// The properties are carried verbatim from the caller; their content is
/// interpreted by whichever data plane consumes the address, not validated
/// here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataAddress {
    /// Transport-specific key-value pairs (e.g. type, baseUrl)
    pub properties: HashMap<String, String>,
}

impl DataAddress {
    /// Create a data address from raw properties
    pub fn new(properties: HashMap<String, String>) -> Self {
        Self { properties }
    }

    /// Look up a single address property
    pub fn property(&self, key: &str) -> Option<&String> {
        self.properties.get(key)
    }
}

/// A data asset offered through the registry.
///
/// Assets are persisted as immutable snapshots: an update replaces the
/// stored record wholesale, there is no field-level merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Stable primary key, chosen by the caller
    pub id: String,

    /// Where and how to fetch the data
    pub data_address: DataAddress,

    /// Public metadata, exposed to consumers
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub properties: HashMap<String, Value>,

    /// Metadata kept internal to the provider
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub private_properties: HashMap<String, Value>,
}

impl Asset {
    /// Create a builder for constructing an asset
    pub fn builder(id: impl Into<String>) -> AssetBuilder {
        AssetBuilder::new(id)
    }

    /// Validate the asset
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(DomainError::Validation(
                "Asset id cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`Asset`]
pub struct AssetBuilder {
    asset: Asset,
}

impl AssetBuilder {
    /// Create a new builder for the given asset id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            asset: Asset {
                id: id.into(),
                data_address: DataAddress::default(),
                properties: HashMap::new(),
                private_properties: HashMap::new(),
            },
        }
    }

    /// Set the data address
    pub fn data_address(mut self, address: DataAddress) -> Self {
        self.asset.data_address = address;
        self
    }

    /// Set the public properties
    pub fn properties(mut self, properties: HashMap<String, Value>) -> Self {
        self.asset.properties = properties;
        self
    }

    /// Set the private properties
    pub fn private_properties(mut self, properties: HashMap<String, Value>) -> Self {
        self.asset.private_properties = properties;
        self
    }

    /// Build the asset, validating required fields
    pub fn build(self) -> Result<Asset> {
        self.asset.validate()?;
        Ok(self.asset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_valid_asset() {
        let mut address = HashMap::new();
        address.insert("type".to_string(), "HttpData".to_string());

        let asset = Asset::builder("asset-1")
            .data_address(DataAddress::new(address))
            .build()
            .unwrap();

        assert_eq!(asset.id, "asset-1");
        assert_eq!(
            asset.data_address.property("type"),
            Some(&"HttpData".to_string())
        );
        assert!(asset.properties.is_empty());
    }

    #[test]
    fn empty_id_is_rejected() {
        let result = Asset::builder("  ").build();
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn data_address_content_is_not_interpreted() {
        // Malformed or empty addresses pass through; downstream consumers
        // decide what they mean.
        let asset = Asset::builder("asset-1").build().unwrap();
        assert!(asset.data_address.properties.is_empty());
    }
}

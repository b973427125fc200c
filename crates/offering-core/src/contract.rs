//! Contract definitions binding assets to policies
//!
//! A contract definition names an access policy and a contract policy by id
//! and selects the assets it applies to through an ordered list of
//! criteria. The policy ids are references by convention only: nothing here
//! verifies that the referenced policy definitions exist.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DomainError, Result};

/// A filter expression selecting assets a contract definition applies to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    /// Left operand, typically an asset property name
    pub operand_left: String,

    /// Comparison operator (e.g. "=", "in")
    pub operator: String,

    /// Right operand; may be a scalar or a list depending on the operator
    pub operand_right: Value,
}

impl Criterion {
    /// Create a criterion
    pub fn new(
        operand_left: impl Into<String>,
        operator: impl Into<String>,
        operand_right: Value,
    ) -> Self {
        Self {
            operand_left: operand_left.into(),
            operator: operator.into(),
            operand_right,
        }
    }
}

/// Binds an access policy and a contract policy to a set of assets.
///
/// An empty selector is legal; whether it matches all assets or none is
/// decided by the component evaluating the selector, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractDefinition {
    /// Stable primary key, chosen by the caller
    pub id: String,

    /// Id of the policy governing who may access the offer
    pub access_policy_id: String,

    /// Id of the policy that becomes part of the contract
    pub contract_policy_id: String,

    /// Ordered criteria selecting the assets this definition applies to
    pub assets_selector: Vec<Criterion>,
}

impl ContractDefinition {
    /// Create a builder for constructing a contract definition
    pub fn builder(id: impl Into<String>) -> ContractDefinitionBuilder {
        ContractDefinitionBuilder::new(id)
    }

    /// Validate the contract definition
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(DomainError::Validation(
                "ContractDefinition id cannot be empty".to_string(),
            ));
        }
        if self.access_policy_id.trim().is_empty() {
            return Err(DomainError::Validation(
                "ContractDefinition accessPolicyId cannot be empty".to_string(),
            ));
        }
        if self.contract_policy_id.trim().is_empty() {
            return Err(DomainError::Validation(
                "ContractDefinition contractPolicyId cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`ContractDefinition`]
pub struct ContractDefinitionBuilder {
    definition: ContractDefinition,
}

impl ContractDefinitionBuilder {
    /// Create a new builder for the given definition id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            definition: ContractDefinition {
                id: id.into(),
                access_policy_id: String::new(),
                contract_policy_id: String::new(),
                assets_selector: Vec::new(),
            },
        }
    }

    /// Set the access policy id
    pub fn access_policy_id(mut self, id: impl Into<String>) -> Self {
        self.definition.access_policy_id = id.into();
        self
    }

    /// Set the contract policy id
    pub fn contract_policy_id(mut self, id: impl Into<String>) -> Self {
        self.definition.contract_policy_id = id.into();
        self
    }

    /// Set the assets selector
    pub fn assets_selector(mut self, criteria: Vec<Criterion>) -> Self {
        self.definition.assets_selector = criteria;
        self
    }

    /// Build the contract definition, validating required fields
    pub fn build(self) -> Result<ContractDefinition> {
        self.definition.validate()?;
        Ok(self.definition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn build_valid_definition() {
        let definition = ContractDefinition::builder("contract-1")
            .access_policy_id("policy-1")
            .contract_policy_id("policy-1")
            .assets_selector(vec![Criterion::new("id", "=", json!("asset-1"))])
            .build()
            .unwrap();

        assert_eq!(definition.id, "contract-1");
        assert_eq!(definition.assets_selector.len(), 1);
    }

    #[test]
    fn empty_selector_is_legal() {
        let definition = ContractDefinition::builder("contract-1")
            .access_policy_id("policy-1")
            .contract_policy_id("policy-1")
            .build()
            .unwrap();

        assert!(definition.assets_selector.is_empty());
    }

    #[test]
    fn missing_policy_ids_are_rejected() {
        let result = ContractDefinition::builder("contract-1").build();
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }
}

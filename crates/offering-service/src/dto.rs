//! Data Transfer Objects for the offering API
//!
//! These types mirror the JSON wire format (camelCase). All three
//! sub-requests of an [`OfferingRequest`] are optional at the type level:
//! the create path requires all of them and fails fast naming the absent
//! one, while the update path treats an absent sub-request as "leave that
//! entity untouched".

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The logical bundle of one asset, one policy and one contract definition
/// submitted together
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferingRequest {
    /// The asset to offer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_entry: Option<AssetEntryDto>,

    /// The policy governing the asset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy_definition_request: Option<PolicyDefinitionRequestDto>,

    /// The contract definition binding asset and policy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_definition_request: Option<ContractDefinitionRequestDto>,
}

/// Wire representation of an asset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetEntryDto {
    /// Stable asset id
    pub id: String,

    /// Where and how to fetch the data; carried verbatim
    pub data_address_properties: HashMap<String, String>,

    /// Public metadata
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, Value>>,

    /// Metadata kept internal to the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_properties: Option<HashMap<String, Value>>,
}

/// Wire representation of a policy definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDefinitionRequestDto {
    /// Stable policy definition id
    pub id: String,

    /// The embedded policy expression. May be absent on the update path,
    /// in which case the policy definition is left untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub policy: Option<PolicyDto>,
}

/// Wire representation of a policy expression
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyDto {
    /// Permissions granted by the policy
    #[serde(default)]
    pub permissions: Vec<PermissionDto>,
}

/// Wire representation of a permission
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionDto {
    /// Action type (e.g. "USE"); required for the permission to be valid
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,

    /// Constraints on the permission
    #[serde(default)]
    pub constraints: Vec<ConstraintDto>,
}

/// Wire representation of a constraint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintDto {
    /// Left operand of the constraint expression
    pub left_operand: String,

    /// Comparison operator
    pub operator: String,

    /// Right operand of the constraint expression
    pub right_operand: String,
}

/// Wire representation of a contract definition
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDefinitionRequestDto {
    /// Stable contract definition id
    pub id: String,

    /// Id of the access policy definition
    pub access_policy_id: String,

    /// Id of the contract policy definition
    pub contract_policy_id: String,

    /// Criteria selecting the assets the definition applies to. An absent
    /// selector is invalid; an empty list is legal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_selector: Option<Vec<CriterionDto>>,
}

/// Wire representation of a criterion
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CriterionDto {
    /// Left operand, typically an asset property name
    pub operand_left: String,

    /// Comparison operator
    pub operator: String,

    /// Right operand; scalar or list depending on the operator
    pub operand_right: Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn offering_request_uses_camel_case_wire_names() {
        let request: OfferingRequest = serde_json::from_value(json!({
            "assetEntry": {
                "id": "asset-1",
                "dataAddressProperties": { "type": "HttpData" }
            },
            "policyDefinitionRequest": {
                "id": "policy-1",
                "policy": { "permissions": [{ "action": "USE" }] }
            },
            "contractDefinitionRequest": {
                "id": "contract-1",
                "accessPolicyId": "policy-1",
                "contractPolicyId": "policy-1",
                "assetsSelector": [
                    { "operandLeft": "id", "operator": "=", "operandRight": "asset-1" }
                ]
            }
        }))
        .unwrap();

        assert_eq!(request.asset_entry.unwrap().id, "asset-1");
        let contract = request.contract_definition_request.unwrap();
        assert_eq!(contract.access_policy_id, "policy-1");
        assert_eq!(contract.assets_selector.unwrap().len(), 1);
    }

    #[test]
    fn absent_sub_requests_deserialize_to_none() {
        let request: OfferingRequest = serde_json::from_value(json!({
            "assetEntry": {
                "id": "asset-1",
                "dataAddressProperties": {}
            }
        }))
        .unwrap();

        assert!(request.asset_entry.is_some());
        assert!(request.policy_definition_request.is_none());
        assert!(request.contract_definition_request.is_none());
    }

    #[test]
    fn absent_selector_is_distinguished_from_empty() {
        let absent: ContractDefinitionRequestDto = serde_json::from_value(json!({
            "id": "c1", "accessPolicyId": "p1", "contractPolicyId": "p1"
        }))
        .unwrap();
        assert!(absent.assets_selector.is_none());

        let empty: ContractDefinitionRequestDto = serde_json::from_value(json!({
            "id": "c1", "accessPolicyId": "p1", "contractPolicyId": "p1",
            "assetsSelector": []
        }))
        .unwrap();
        assert_eq!(empty.assets_selector.unwrap().len(), 0);
    }
}

//! Transform stage: DTOs to domain entities
//!
//! Pure, side-effect-free conversions. Dispatch is a closed set of named
//! functions selected by the static type of the incoming request. Failures
//! are validation errors carrying the underlying cause message; nothing
//! here touches a store.

use offering_core::{
    Action, Asset, Constraint, ContractDefinition, Criterion, DataAddress, Permission, Policy,
    PolicyDefinition,
};

use crate::dto::{
    AssetEntryDto, ContractDefinitionRequestDto, CriterionDto, PermissionDto,
    PolicyDefinitionRequestDto, PolicyDto,
};
use crate::error::{ServiceError, ServiceResult};

/// Build an [`Asset`] from its wire representation.
///
/// The data address properties are passed through verbatim; malformed
/// address content is not validated here and surfaces downstream.
pub fn to_asset(dto: &AssetEntryDto) -> ServiceResult<Asset> {
    Asset::builder(&dto.id)
        .data_address(DataAddress::new(dto.data_address_properties.clone()))
        .properties(dto.properties.clone().unwrap_or_default())
        .private_properties(dto.private_properties.clone().unwrap_or_default())
        .build()
        .map_err(|e| ServiceError::InvalidInput(e.to_string()))
}

/// Build a [`PolicyDefinition`] from its wire representation.
///
/// Requires an embedded policy body; a structurally invalid body fails
/// with the underlying cause message.
pub fn to_policy_definition(dto: &PolicyDefinitionRequestDto) -> ServiceResult<PolicyDefinition> {
    let policy_dto = dto.policy.as_ref().ok_or_else(|| {
        ServiceError::InvalidInput(format!(
            "Policy definition request '{}' carries no policy body",
            dto.id
        ))
    })?;

    let policy = to_policy(policy_dto)?;
    PolicyDefinition::new(&dto.id, policy).map_err(|e| ServiceError::InvalidInput(e.to_string()))
}

/// Build a [`ContractDefinition`] from its wire representation.
///
/// An absent assets selector is invalid; an empty one is legal. Criteria
/// are mapped 1:1 preserving their order.
pub fn to_contract_definition(
    dto: &ContractDefinitionRequestDto,
) -> ServiceResult<ContractDefinition> {
    let selector = dto.assets_selector.as_ref().ok_or_else(|| {
        ServiceError::InvalidInput(format!(
            "Contract definition request '{}' has no assetsSelector; an empty list is allowed, an absent one is not",
            dto.id
        ))
    })?;

    ContractDefinition::builder(&dto.id)
        .access_policy_id(&dto.access_policy_id)
        .contract_policy_id(&dto.contract_policy_id)
        .assets_selector(selector.iter().map(to_criterion).collect())
        .build()
        .map_err(|e| ServiceError::InvalidInput(e.to_string()))
}

fn to_policy(dto: &PolicyDto) -> ServiceResult<Policy> {
    let permissions = dto
        .permissions
        .iter()
        .map(to_permission)
        .collect::<ServiceResult<Vec<_>>>()?;
    Ok(Policy { permissions })
}

fn to_permission(dto: &PermissionDto) -> ServiceResult<Permission> {
    let action = dto
        .action
        .as_ref()
        .ok_or_else(|| ServiceError::InvalidInput("Permission is missing an action".to_string()))?;

    Ok(Permission {
        action: Action::new(action),
        constraints: dto
            .constraints
            .iter()
            .map(|c| Constraint {
                left_operand: c.left_operand.clone(),
                operator: c.operator.clone(),
                right_operand: c.right_operand.clone(),
            })
            .collect(),
    })
}

fn to_criterion(dto: &CriterionDto) -> Criterion {
    Criterion::new(&dto.operand_left, &dto.operator, dto.operand_right.clone())
}

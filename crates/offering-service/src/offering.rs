//! Offering coordinator
//!
//! Orchestrates the persistence of an offering (asset, policy definition,
//! contract definition) across three independent stores.
//!
//! The create path transforms all three sub-requests up front, then
//! persists them in a fixed order. If any create fails, compensation
//! issues deletes against all three stores: the deletes are idempotent and
//! touch disjoint ids, so order does not matter and deleting an entity
//! that was never written (or whose create just failed) is harmless. A
//! compensation failure is logged and swallowed; the original persistence
//! error is what the caller sees.
//!
//! The update path upserts each present sub-request independently, with no
//! compensation: re-invoking with the same input converges, so rollback is
//! unnecessary there.

use std::sync::Arc;

use async_trait::async_trait;
use offering_core::{Asset, ContractDefinition, PolicyDefinition};
use offering_store::{AssetStore, ContractDefinitionStore, PolicyDefinitionStore};
use tracing::{debug, info, instrument, warn};

use crate::dto::{
    AssetEntryDto, ContractDefinitionRequestDto, OfferingRequest, PolicyDefinitionRequestDto,
};
use crate::error::{ServiceError, ServiceResult};
use crate::transform;

/// Trait for offering coordination operations
#[async_trait]
pub trait OfferingService: Send + Sync {
    /// Create the asset, policy definition and contract definition of an
    /// offering. All three sub-requests are required. Either all three end
    /// up persisted, or best-effort compensation removes the ones that
    /// were.
    async fn create(&self, offering: OfferingRequest) -> ServiceResult<()>;

    /// Upsert the entities of an offering. Sub-requests are independently
    /// optional; an absent one leaves its entity untouched. No
    /// compensation: a failure leaves earlier upserts in place.
    async fn update(&self, offering: OfferingRequest) -> ServiceResult<()>;
}

/// Default implementation of [`OfferingService`]
///
/// Holds its three store handles explicitly; the caller assembling the
/// service graph owns their construction.
pub struct DefaultOfferingService {
    asset_store: Arc<dyn AssetStore>,
    policy_store: Arc<dyn PolicyDefinitionStore>,
    contract_store: Arc<dyn ContractDefinitionStore>,
}

impl DefaultOfferingService {
    /// Create a new offering service
    pub fn new(
        asset_store: Arc<dyn AssetStore>,
        policy_store: Arc<dyn PolicyDefinitionStore>,
        contract_store: Arc<dyn ContractDefinitionStore>,
    ) -> Self {
        Self {
            asset_store,
            policy_store,
            contract_store,
        }
    }

    /// Persist the three entities in fixed order, compensating on failure.
    ///
    /// The sequence is deliberately sequential: compensation needs a
    /// well-defined high-water mark of what succeeded.
    async fn persist(
        &self,
        asset: Asset,
        policy: PolicyDefinition,
        contract: ContractDefinition,
    ) -> ServiceResult<()> {
        let asset_id = asset.id.clone();
        let policy_id = policy.id.clone();
        let contract_id = contract.id.clone();

        let result = self.persist_in_order(asset, policy, contract).await;

        if let Err(ref error) = result {
            warn!(
                %asset_id, %policy_id, %contract_id,
                "persisting offering failed, compensating: {error}"
            );
            self.compensate(&asset_id, &policy_id, &contract_id).await;
        }

        result
    }

    async fn persist_in_order(
        &self,
        asset: Asset,
        policy: PolicyDefinition,
        contract: ContractDefinition,
    ) -> ServiceResult<()> {
        self.asset_store.create(asset).await?;
        self.policy_store.create(policy).await?;
        self.contract_store.save(contract).await?;
        Ok(())
    }

    /// Best-effort reverse actions for the create path.
    ///
    /// Deletes are issued against all three stores regardless of how far
    /// the forward sequence got. Failures are logged and swallowed; they
    /// must never mask the original persistence error.
    async fn compensate(&self, asset_id: &str, policy_id: &str, contract_id: &str) {
        if let Err(e) = self.asset_store.delete_by_id(asset_id).await {
            warn!(id = %asset_id, "compensating asset delete failed: {e}");
        }
        if let Err(e) = self.policy_store.delete(policy_id).await {
            warn!(id = %policy_id, "compensating policy delete failed: {e}");
        }
        if let Err(e) = self.contract_store.delete_by_id(contract_id).await {
            warn!(id = %contract_id, "compensating contract definition delete failed: {e}");
        }
    }

    async fn upsert_asset(&self, dto: &AssetEntryDto) -> ServiceResult<()> {
        let asset = transform::to_asset(dto)?;
        match self.asset_store.find_by_id(&asset.id).await? {
            Some(_) => self.asset_store.update(asset).await?,
            None => self.asset_store.create(asset).await?,
        }
        Ok(())
    }

    async fn upsert_policy(&self, dto: &PolicyDefinitionRequestDto) -> ServiceResult<()> {
        match self.policy_store.find_by_id(&dto.id).await? {
            Some(_) => {
                // The id alone is not enough to update an existing
                // definition; without a body the request is a no-op.
                if dto.policy.is_none() {
                    debug!(id = %dto.id, "policy definition update skipped, request carries no policy body");
                    return Ok(());
                }
                let definition = transform::to_policy_definition(dto)?;
                self.policy_store.update(definition).await?;
            }
            None => {
                let definition = transform::to_policy_definition(dto)?;
                self.policy_store.create(definition).await?;
            }
        }
        Ok(())
    }

    async fn upsert_contract(&self, dto: &ContractDefinitionRequestDto) -> ServiceResult<()> {
        let definition = transform::to_contract_definition(dto)?;
        match self.contract_store.find_by_id(&definition.id).await? {
            Some(_) => self.contract_store.update(definition).await?,
            None => self.contract_store.save(definition).await?,
        }
        Ok(())
    }
}

#[async_trait]
impl OfferingService for DefaultOfferingService {
    #[instrument(skip(self, offering))]
    async fn create(&self, offering: OfferingRequest) -> ServiceResult<()> {
        let asset_entry = offering
            .asset_entry
            .as_ref()
            .ok_or(ServiceError::MissingField { field: "assetEntry" })?;
        let policy_request = offering
            .policy_definition_request
            .as_ref()
            .ok_or(ServiceError::MissingField {
                field: "policyDefinitionRequest",
            })?;
        let contract_request = offering
            .contract_definition_request
            .as_ref()
            .ok_or(ServiceError::MissingField {
                field: "contractDefinitionRequest",
            })?;

        // Transform everything before the first side effect: validation
        // failures must leave the stores untouched.
        let asset = transform::to_asset(asset_entry)?;
        let policy = transform::to_policy_definition(policy_request)?;
        let contract = transform::to_contract_definition(contract_request)?;

        info!(
            asset_id = %asset.id,
            policy_id = %policy.id,
            contract_id = %contract.id,
            "creating offering"
        );
        self.persist(asset, policy, contract).await
    }

    #[instrument(skip(self, offering))]
    async fn update(&self, offering: OfferingRequest) -> ServiceResult<()> {
        if let Some(entry) = offering.asset_entry.as_ref() {
            self.upsert_asset(entry).await?;
        }
        if let Some(request) = offering.policy_definition_request.as_ref() {
            self.upsert_policy(request).await?;
        }
        if let Some(request) = offering.contract_definition_request.as_ref() {
            self.upsert_contract(request).await?;
        }
        Ok(())
    }
}

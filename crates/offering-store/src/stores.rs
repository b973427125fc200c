//! Store trait abstractions for offering persistence
//!
//! These traits model the capability set of the three backing stores the
//! coordinator writes to. The method names differ slightly per store on
//! purpose: they mirror the heterogeneous primitives the backends expose
//! (asset and contract stores delete by id, the policy store calls the same
//! primitive `delete`; the contract store calls its create `save`).
//!
//! Implementations must be thread-safe (Send + Sync) for use in async
//! contexts. All delete operations are idempotent: deleting a missing id
//! succeeds.

use async_trait::async_trait;
use offering_core::{Asset, ContractDefinition, PolicyDefinition};

use crate::error::StoreResult;

/// Persistence operations for assets
#[async_trait]
pub trait AssetStore: Send + Sync {
    /// Create a new asset
    ///
    /// # Returns
    /// * `Ok(())` - The asset was persisted
    /// * `Err(StoreError::AlreadyExists)` - An asset with the same id exists
    async fn create(&self, asset: Asset) -> StoreResult<()>;

    /// Find an asset by id
    ///
    /// # Returns
    /// * `Ok(Some(Asset))` - The asset if found
    /// * `Ok(None)` - If no asset with that id exists
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Asset>>;

    /// Replace an existing asset wholesale
    ///
    /// # Returns
    /// * `Err(StoreError::NotFound)` - If no asset with that id exists
    async fn update(&self, asset: Asset) -> StoreResult<()>;

    /// Delete an asset by id; succeeds if the id does not exist
    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;
}

/// Persistence operations for policy definitions
#[async_trait]
pub trait PolicyDefinitionStore: Send + Sync {
    /// Create a new policy definition
    ///
    /// # Returns
    /// * `Err(StoreError::AlreadyExists)` - A definition with the same id exists
    async fn create(&self, definition: PolicyDefinition) -> StoreResult<()>;

    /// Find a policy definition by id
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<PolicyDefinition>>;

    /// Replace an existing policy definition wholesale
    ///
    /// # Returns
    /// * `Err(StoreError::NotFound)` - If no definition with that id exists
    async fn update(&self, definition: PolicyDefinition) -> StoreResult<()>;

    /// Delete a policy definition by id; succeeds if the id does not exist
    async fn delete(&self, id: &str) -> StoreResult<()>;
}

/// Persistence operations for contract definitions
#[async_trait]
pub trait ContractDefinitionStore: Send + Sync {
    /// Persist a new contract definition
    ///
    /// # Returns
    /// * `Err(StoreError::AlreadyExists)` - A definition with the same id exists
    async fn save(&self, definition: ContractDefinition) -> StoreResult<()>;

    /// Find a contract definition by id
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<ContractDefinition>>;

    /// Replace an existing contract definition wholesale
    ///
    /// # Returns
    /// * `Err(StoreError::NotFound)` - If no definition with that id exists
    async fn update(&self, definition: ContractDefinition) -> StoreResult<()>;

    /// Delete a contract definition by id; succeeds if the id does not exist
    async fn delete_by_id(&self, id: &str) -> StoreResult<()>;
}

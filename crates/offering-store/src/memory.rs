//! In-memory store implementations
//!
//! Each store keeps its records in its own `RwLock<HashMap>`, so the three
//! stores remain independently transactional: a write to one cannot be
//! rolled into a write to another. Unique-id enforcement happens under the
//! store's own write lock, which is what resolves create races on the same
//! id (one side wins, the other gets `AlreadyExists`).

use std::collections::HashMap;

use async_trait::async_trait;
use offering_core::{Asset, ContractDefinition, PolicyDefinition};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::stores::{AssetStore, ContractDefinitionStore, PolicyDefinitionStore};

/// In-memory asset store
#[derive(Default)]
pub struct InMemoryAssetStore {
    records: RwLock<HashMap<String, Asset>>,
}

impl InMemoryAssetStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored assets
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no assets
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl AssetStore for InMemoryAssetStore {
    async fn create(&self, asset: Asset) -> StoreResult<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&asset.id) {
            return Err(StoreError::AlreadyExists(asset.id));
        }
        debug!(id = %asset.id, "storing asset");
        records.insert(asset.id.clone(), asset);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Asset>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn update(&self, asset: Asset) -> StoreResult<()> {
        let mut records = self.records.write().await;
        if !records.contains_key(&asset.id) {
            return Err(StoreError::NotFound(asset.id));
        }
        records.insert(asset.id.clone(), asset);
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        self.records.write().await.remove(id);
        Ok(())
    }
}

/// In-memory policy definition store
#[derive(Default)]
pub struct InMemoryPolicyDefinitionStore {
    records: RwLock<HashMap<String, PolicyDefinition>>,
}

impl InMemoryPolicyDefinitionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored definitions
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no definitions
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl PolicyDefinitionStore for InMemoryPolicyDefinitionStore {
    async fn create(&self, definition: PolicyDefinition) -> StoreResult<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&definition.id) {
            return Err(StoreError::AlreadyExists(definition.id));
        }
        debug!(id = %definition.id, "storing policy definition");
        records.insert(definition.id.clone(), definition);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<PolicyDefinition>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn update(&self, definition: PolicyDefinition) -> StoreResult<()> {
        let mut records = self.records.write().await;
        if !records.contains_key(&definition.id) {
            return Err(StoreError::NotFound(definition.id));
        }
        records.insert(definition.id.clone(), definition);
        Ok(())
    }

    async fn delete(&self, id: &str) -> StoreResult<()> {
        self.records.write().await.remove(id);
        Ok(())
    }
}

/// In-memory contract definition store
#[derive(Default)]
pub struct InMemoryContractDefinitionStore {
    records: RwLock<HashMap<String, ContractDefinition>>,
}

impl InMemoryContractDefinitionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored definitions
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Whether the store holds no definitions
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ContractDefinitionStore for InMemoryContractDefinitionStore {
    async fn save(&self, definition: ContractDefinition) -> StoreResult<()> {
        let mut records = self.records.write().await;
        if records.contains_key(&definition.id) {
            return Err(StoreError::AlreadyExists(definition.id));
        }
        debug!(id = %definition.id, "storing contract definition");
        records.insert(definition.id.clone(), definition);
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<ContractDefinition>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn update(&self, definition: ContractDefinition) -> StoreResult<()> {
        let mut records = self.records.write().await;
        if !records.contains_key(&definition.id) {
            return Err(StoreError::NotFound(definition.id));
        }
        records.insert(definition.id.clone(), definition);
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> StoreResult<()> {
        self.records.write().await.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use offering_core::{DataAddress, Policy};
    use serde_json::json;
    use std::collections::HashMap;

    fn asset(id: &str) -> Asset {
        Asset::builder(id)
            .data_address(DataAddress::new(HashMap::from([(
                "type".to_string(),
                "HttpData".to_string(),
            )])))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn create_then_find() {
        let store = InMemoryAssetStore::new();
        store.create(asset("a1")).await.unwrap();

        let found = store.find_by_id("a1").await.unwrap();
        assert_eq!(found.unwrap().id, "a1");
        assert!(store.find_by_id("a2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn duplicate_create_fails() {
        let store = InMemoryAssetStore::new();
        store.create(asset("a1")).await.unwrap();

        let err = store.create(asset("a1")).await.unwrap_err();
        assert!(err.is_already_exists());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn update_requires_existing_record() {
        let store = InMemoryAssetStore::new();
        let err = store.update(asset("a1")).await.unwrap_err();
        assert!(err.is_not_found());

        store.create(asset("a1")).await.unwrap();
        let mut replacement = asset("a1");
        replacement
            .properties
            .insert("name".to_string(), json!("updated"));
        store.update(replacement).await.unwrap();

        let found = store.find_by_id("a1").await.unwrap().unwrap();
        assert_eq!(found.properties.get("name"), Some(&json!("updated")));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let store = InMemoryAssetStore::new();
        store.delete_by_id("missing").await.unwrap();

        store.create(asset("a1")).await.unwrap();
        store.delete_by_id("a1").await.unwrap();
        store.delete_by_id("a1").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn policy_store_delete_is_idempotent() {
        let store = InMemoryPolicyDefinitionStore::new();
        let definition = PolicyDefinition::new("p1", Policy::default()).unwrap();
        store.create(definition).await.unwrap();

        store.delete("p1").await.unwrap();
        store.delete("p1").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn contract_store_save_and_update() {
        let store = InMemoryContractDefinitionStore::new();
        let definition = ContractDefinition::builder("c1")
            .access_policy_id("p1")
            .contract_policy_id("p1")
            .build()
            .unwrap();
        store.save(definition.clone()).await.unwrap();

        let err = store.save(definition.clone()).await.unwrap_err();
        assert!(err.is_already_exists());

        let replacement = ContractDefinition::builder("c1")
            .access_policy_id("p2")
            .contract_policy_id("p2")
            .build()
            .unwrap();
        store.update(replacement).await.unwrap();

        let found = store.find_by_id("c1").await.unwrap().unwrap();
        assert_eq!(found.access_policy_id, "p2");
    }
}

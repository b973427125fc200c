//! Store abstractions for the offering registry
//!
//! This crate defines the three store traits consumed by the offering
//! coordinator, the store error taxonomy, and in-memory implementations.
//! Each store is independently transactional; there is no shared
//! transaction boundary across them.

pub mod error;
pub mod memory;
pub mod stores;

pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryAssetStore, InMemoryContractDefinitionStore, InMemoryPolicyDefinitionStore};
pub use stores::{AssetStore, ContractDefinitionStore, PolicyDefinitionStore};

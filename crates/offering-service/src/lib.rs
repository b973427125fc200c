//! Service layer for the offering registry
//!
//! This crate implements the offering coordinator: creating or updating an
//! asset, a policy definition, and a contract definition as one logical
//! unit across three independent stores.
//!
//! The create path persists all three in a fixed order and compensates with
//! best-effort deletes when a later step fails. This is weaker than
//! atomicity: if a compensation delete itself fails, a partial write can
//! remain observable. The update path is a per-entity upsert with no
//! compensation; it converges when retried with the same input.
//!
//! # Example
//!
//! ```rust,no_run
//! use offering_service::DefaultOfferingService;
//! use offering_store::{
//!     InMemoryAssetStore, InMemoryContractDefinitionStore, InMemoryPolicyDefinitionStore,
//! };
//! use std::sync::Arc;
//!
//! let service = DefaultOfferingService::new(
//!     Arc::new(InMemoryAssetStore::new()),
//!     Arc::new(InMemoryPolicyDefinitionStore::new()),
//!     Arc::new(InMemoryContractDefinitionStore::new()),
//! );
//! ```

pub mod dto;
pub mod error;
pub mod offering;
pub mod transform;

// Re-export main types for convenience
pub use dto::{
    AssetEntryDto, ConstraintDto, ContractDefinitionRequestDto, CriterionDto, OfferingRequest,
    PermissionDto, PolicyDefinitionRequestDto, PolicyDto,
};
pub use error::{ServiceError, ServiceResult};
pub use offering::{DefaultOfferingService, OfferingService};

//! Core domain models for the offering registry
//!
//! This crate contains the entities that make up an offering: the data
//! asset, the policy definition governing its use, and the contract
//! definition binding the two together.

pub mod asset;
pub mod contract;
pub mod error;
pub mod policy;

// Re-exports for convenience
pub use asset::{Asset, AssetBuilder, DataAddress};
pub use contract::{ContractDefinition, ContractDefinitionBuilder, Criterion};
pub use error::{DomainError, Result};
pub use policy::{Action, Constraint, Permission, Policy, PolicyDefinition};

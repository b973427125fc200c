//! Policy expression model and policy definitions
//!
//! A policy is a set of permissions, each naming an action type and an
//! optional list of constraints. A [`PolicyDefinition`] gives a policy a
//! stable id under which it can be referenced by contract definitions.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

/// The action a permission allows (e.g. "USE")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// Action type identifier
    pub action_type: String,
}

impl Action {
    /// Create an action of the given type
    pub fn new(action_type: impl Into<String>) -> Self {
        Self {
            action_type: action_type.into(),
        }
    }
}

/// A single constraint on a permission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constraint {
    /// Left operand of the constraint expression
    pub left_operand: String,

    /// Comparison operator
    pub operator: String,

    /// Right operand of the constraint expression
    pub right_operand: String,
}

/// A permission granting an action, optionally constrained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    /// The permitted action
    pub action: Action,

    /// Constraints that all have to hold for the permission to apply
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub constraints: Vec<Constraint>,
}

/// An access/usage-rule expression: a set of permissions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    /// Permissions granted by this policy
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<Permission>,
}

/// A policy under a stable id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyDefinition {
    /// Stable primary key, chosen by the caller
    pub id: String,

    /// The policy expression
    pub policy: Policy,
}

impl PolicyDefinition {
    /// Create a policy definition, validating the id
    pub fn new(id: impl Into<String>, policy: Policy) -> Result<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::Validation(
                "PolicyDefinition id cannot be empty".to_string(),
            ));
        }
        Ok(Self { id, policy })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_definition_requires_id() {
        let result = PolicyDefinition::new("", Policy::default());
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn permission_with_constraints() {
        let permission = Permission {
            action: Action::new("USE"),
            constraints: vec![Constraint {
                left_operand: "purpose".to_string(),
                operator: "eq".to_string(),
                right_operand: "research".to_string(),
            }],
        };
        let definition =
            PolicyDefinition::new("policy-1", Policy { permissions: vec![permission] }).unwrap();

        assert_eq!(definition.id, "policy-1");
        assert_eq!(definition.policy.permissions[0].action.action_type, "USE");
    }
}

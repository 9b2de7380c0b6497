//! Role node type definitions

use crate::error::{AuthzError, Result};
use serde::{Deserialize, Serialize};

/// Role definition in a dominance hierarchy
///
/// A node dominates each of its children: an actor holding this role also
/// holds every role below it. Roles are identified by name, so a role shared
/// by several parents is written as an equal-named node under each of them.
/// Only the first compiled occurrence of a name contributes its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleNode {
    /// Role name (exact-match identifier)
    pub name: String,

    /// Roles dominated by this role, in compilation order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RoleNode>,
}

impl RoleNode {
    /// Create a role with no children
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    /// Append a child and return the node (builder style)
    pub fn with_child(mut self, child: RoleNode) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children
    pub fn with_children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = RoleNode>,
    {
        self.children.extend(children);
        self
    }

    /// Append a child in place
    pub fn add_child(&mut self, child: RoleNode) -> &mut Self {
        self.children.push(child);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Validate this node and its whole subtree
    ///
    /// Names must be non-empty and free of whitespace.
    pub fn validate(&self) -> Result<()> {
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.name.is_empty() {
                return Err(AuthzError::config("Role name cannot be empty"));
            }

            if node.name.chars().any(char::is_whitespace) {
                return Err(AuthzError::config(format!(
                    "Role name '{}' cannot contain whitespace",
                    node.name
                )));
            }

            stack.extend(node.children.iter());
        }

        Ok(())
    }
}

//! Role hierarchy compiler
//!
//! Turns a forest of [`RoleNode`]s into a [`CompiledRoleTable`] using a
//! memoized post-order DFS:
//!
//! 1. A finalized role is reused without descending into its children again,
//!    so a role shared by several parents is compiled once.
//! 2. Otherwise the children are compiled first and their signatures OR'd.
//! 3. The role then receives the next free bit, `1 << table.len()`.
//!
//! Traversal state per name is one of: unvisited (absent), visiting (gray),
//! finalized (black). Reaching a gray name means the role is its own ancestor.

use super::node::RoleNode;
use super::signature::{Signature, MAX_ROLES};
use super::table::CompiledRoleTable;
use crate::error::{AuthzError, Result};
use std::collections::HashMap;
use tracing::{debug, info};

/// DFS state of a role name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    /// On the current DFS path
    Visiting,
    /// Signature computed and stored
    Finalized(Signature),
}

/// Single-use compiler for one role forest
#[derive(Debug)]
pub struct RoleCompiler {
    states: HashMap<String, VisitState>,
    path: Vec<String>,
    table: CompiledRoleTable,
}

impl RoleCompiler {
    fn new() -> Self {
        Self {
            states: HashMap::new(),
            path: Vec::new(),
            table: CompiledRoleTable::new(),
        }
    }

    /// Compile a role forest into a signature table
    ///
    /// # Errors
    ///
    /// - `EmptyHierarchy` if `roles` is empty
    /// - `CapacityExceeded` if more than [`MAX_ROLES`] distinct names are found
    /// - `StructuralCycle` if a role is reachable from itself
    #[tracing::instrument(level = "debug", skip(roles), fields(roots = roles.len()))]
    pub fn compile(roles: &[RoleNode]) -> Result<CompiledRoleTable> {
        if roles.is_empty() {
            return Err(AuthzError::EmptyHierarchy);
        }

        let mut compiler = Self::new();
        let coverage = compiler.compile_all(roles)?;
        compiler.table.set_coverage(coverage);

        info!(
            roles = compiler.table.len(),
            coverage = %coverage,
            "Compiled role hierarchy"
        );

        Ok(compiler.table)
    }

    /// Compile a sequence of sibling nodes, returning the OR of their signatures
    fn compile_all(&mut self, nodes: &[RoleNode]) -> Result<Signature> {
        let mut combined = Signature::EMPTY;
        for node in nodes {
            combined |= self.compile_node(node)?;
        }
        Ok(combined)
    }

    fn compile_node(&mut self, node: &RoleNode) -> Result<Signature> {
        match self.states.get(&node.name) {
            Some(VisitState::Finalized(signature)) => return Ok(*signature),
            Some(VisitState::Visiting) => return Err(self.cycle_error(&node.name)),
            None => {}
        }

        // Every name on the path still needs its own bit, so this fires
        // before a cycle through more than MAX_ROLES names is closed
        if self.table.len() + self.path.len() >= MAX_ROLES {
            return Err(capacity_error(&node.name));
        }

        self.states.insert(node.name.clone(), VisitState::Visiting);
        self.path.push(node.name.clone());

        let children = self.compile_all(&node.children)?;

        let Some(own_bit) = Signature::bit(self.table.len()) else {
            return Err(capacity_error(&node.name));
        };
        let signature = own_bit | children;

        self.path.pop();
        let finalized = VisitState::Finalized(signature);
        self.states.insert(node.name.clone(), finalized);
        let entry = self.table.insert(&node.name, signature);

        debug!(role = %node.name, bit = entry.bit, signature = %signature, "Finalized role");

        Ok(signature)
    }

    fn cycle_error(&self, name: &str) -> AuthzError {
        let start = self.path.iter().position(|n| n == name).unwrap_or(0);
        let cycle: Vec<&str> = self.path[start..]
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(name))
            .collect();

        AuthzError::StructuralCycle(cycle.join(" -> "))
    }
}

fn capacity_error(name: &str) -> AuthzError {
    AuthzError::CapacityExceeded {
        role: name.to_string(),
        limit: MAX_ROLES,
    }
}

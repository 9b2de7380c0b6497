//! Compiled role table

use super::signature::Signature;
use std::collections::HashMap;

/// Compiled entry for a single role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleEntry {
    /// Index of the role's exclusive bit
    pub bit: usize,
    /// Own bit plus the bits of every dominated role
    pub signature: Signature,
}

/// Immutable mapping from role name to capability signature
///
/// Built once by [`RoleCompiler`](super::compiler::RoleCompiler). Bit indices
/// follow first-finalization order, so `role_names()` lists roles in bit order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledRoleTable {
    entries: HashMap<String, RoleEntry>,
    order: Vec<String>,
    coverage: Signature,
}

impl CompiledRoleTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Record a finalized role; its bit is the current table size
    pub(crate) fn insert(&mut self, name: &str, signature: Signature) -> RoleEntry {
        let entry = RoleEntry {
            bit: self.order.len(),
            signature,
        };
        self.entries.insert(name.to_string(), entry);
        self.order.push(name.to_string());
        entry
    }

    pub(crate) fn set_coverage(&mut self, coverage: Signature) {
        self.coverage = coverage;
    }

    /// Signature of a role
    pub fn signature(&self, name: &str) -> Option<Signature> {
        self.entries.get(name).map(|e| e.signature)
    }

    /// Index of a role's exclusive bit
    pub fn bit_index(&self, name: &str) -> Option<usize> {
        self.entries.get(name).map(|e| e.bit)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of compiled roles
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Role names in bit order
    pub fn role_names(&self) -> &[String] {
        &self.order
    }

    /// Iterate `(name, entry)` pairs in bit order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RoleEntry)> + '_ {
        self.order
            .iter()
            .filter_map(move |name| self.entries.get(name).map(|e| (name.as_str(), e)))
    }

    /// OR of every root role's signature
    pub fn coverage(&self) -> Signature {
        self.coverage
    }

    /// Roles whose signatures are contained in `name`'s signature
    ///
    /// This is the role itself plus everything it dominates, in bit order.
    pub fn descendants(&self, name: &str) -> Option<Vec<&str>> {
        let signature = self.signature(name)?;

        Some(
            self.iter()
                .filter(|(_, entry)| signature.contains(entry.signature))
                .map(|(role, _)| role)
                .collect(),
        )
    }
}

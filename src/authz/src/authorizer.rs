//! Role authorizer
//!
//! Answers "does the actor's role satisfy the required role?" with a single
//! signature comparison against a table compiled once at construction.

use crate::config::AuthorizerConfig;
use crate::error::{AuthzError, Result};
use crate::hierarchy::{CompiledRoleTable, HierarchyFile, RoleCompiler, RoleNode, Signature};
use std::sync::Arc;
use tracing::trace;

/// Hierarchical role authorizer
///
/// # Thread Safety
///
/// The compiled table is immutable and shared through `Arc`; clones are cheap
/// and the authorizer can be queried from any number of threads.
#[derive(Debug, Clone)]
pub struct RoleAuthorizer {
    table: Arc<CompiledRoleTable>,
}

impl RoleAuthorizer {
    /// Create a role node for building a hierarchy
    pub fn create_role(name: impl Into<String>) -> RoleNode {
        RoleNode::new(name)
    }

    /// Compile a role forest
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `roles` is empty
    /// - more than 32 distinct roles are found
    /// - a role is its own ancestor
    pub fn new(roles: Vec<RoleNode>) -> Result<Self> {
        Self::from_roles(&roles)
    }

    /// Compile a borrowed role forest
    pub fn from_roles(roles: &[RoleNode]) -> Result<Self> {
        let table = RoleCompiler::compile(roles)?;
        Ok(Self {
            table: Arc::new(table),
        })
    }

    /// Compile a role forest, validating role names first when configured
    pub fn with_config(roles: &[RoleNode], config: &AuthorizerConfig) -> Result<Self> {
        if config.strict_names {
            for role in roles {
                role.validate()?;
            }
        }

        Self::from_roles(roles)
    }

    /// Load and compile the hierarchy file named by the configuration
    pub fn from_config(config: &AuthorizerConfig) -> Result<Self> {
        let path = config
            .hierarchy_path
            .as_ref()
            .ok_or_else(|| AuthzError::config("No hierarchy file configured"))?;

        let file = HierarchyFile::from_path(path)?;
        Self::with_config(&file.roles, config)
    }

    /// Check whether `actor_role` satisfies `required_role`
    ///
    /// True when the actor is the required role or dominates it through any
    /// path in the hierarchy.
    ///
    /// # Errors
    ///
    /// `UnknownRole` if either name is not in the compiled table; the required
    /// role is checked first.
    pub fn authorize(&self, required_role: &str, actor_role: &str) -> Result<bool> {
        let required = self.lookup(required_role)?;
        let actual = self.lookup(actor_role)?;

        let allowed = actual.contains(required);

        trace!(
            required = required_role,
            actor = actor_role,
            allowed,
            "Authorization decision"
        );

        Ok(allowed)
    }

    fn lookup(&self, name: &str) -> Result<Signature> {
        self.table
            .signature(name)
            .ok_or_else(|| AuthzError::unknown_role(name))
    }

    /// Signature of a role, if compiled
    pub fn signature(&self, name: &str) -> Option<Signature> {
        self.table.signature(name)
    }

    /// Index of a role's exclusive bit, if compiled
    pub fn bit_index(&self, name: &str) -> Option<usize> {
        self.table.bit_index(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.table.contains(name)
    }

    /// Number of compiled roles
    pub fn role_count(&self) -> usize {
        self.table.len()
    }

    /// Role names in bit order
    pub fn role_names(&self) -> Vec<String> {
        self.table.role_names().to_vec()
    }

    /// Roles dominated by `name`, itself included
    pub fn descendants(&self, name: &str) -> Result<Vec<String>> {
        self.table
            .descendants(name)
            .map(|roles| roles.into_iter().map(str::to_string).collect())
            .ok_or_else(|| AuthzError::unknown_role(name))
    }

    /// OR of every root signature
    pub fn coverage(&self) -> Signature {
        self.table.coverage()
    }

    /// The compiled table
    pub fn table(&self) -> &CompiledRoleTable {
        &self.table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RoleAuthorizer {
        let viewer = RoleAuthorizer::create_role("viewer");
        let editor = RoleAuthorizer::create_role("editor").with_child(viewer.clone());
        let admin = RoleAuthorizer::create_role("admin")
            .with_child(editor)
            .with_child(RoleAuthorizer::create_role("auditor").with_child(viewer));

        RoleAuthorizer::new(vec![admin]).unwrap()
    }

    #[test]
    fn test_authorize() {
        let authz = sample();

        assert!(authz.authorize("viewer", "admin").unwrap());
        assert!(authz.authorize("viewer", "auditor").unwrap());
        assert!(authz.authorize("editor", "editor").unwrap());
        assert!(!authz.authorize("admin", "editor").unwrap());
        assert!(!authz.authorize("auditor", "editor").unwrap());
    }

    #[test]
    fn test_unknown_role_is_an_error() {
        let authz = sample();

        match authz.authorize("ghost", "admin") {
            Err(AuthzError::UnknownRole(name)) => assert_eq!(name, "ghost"),
            other => panic!("Expected UnknownRole, got {:?}", other),
        }
        match authz.authorize("admin", "ghost") {
            Err(AuthzError::UnknownRole(name)) => assert_eq!(name, "ghost"),
            other => panic!("Expected UnknownRole, got {:?}", other),
        }
    }

    #[test]
    fn test_required_role_checked_first() {
        let authz = sample();

        match authz.authorize("missing-required", "missing-actor") {
            Err(AuthzError::UnknownRole(name)) => assert_eq!(name, "missing-required"),
            other => panic!("Expected UnknownRole, got {:?}", other),
        }
    }

    #[test]
    fn test_introspection() {
        let authz = sample();

        assert_eq!(authz.role_count(), 4);
        assert_eq!(
            authz.role_names(),
            vec!["viewer", "editor", "auditor", "admin"]
        );
        assert_eq!(authz.bit_index("admin"), Some(3));
        assert_eq!(authz.coverage().bits(), 0b1111);
        assert_eq!(
            authz.descendants("auditor").unwrap(),
            vec!["viewer", "auditor"]
        );
        assert!(authz.descendants("ghost").is_err());
    }

    #[test]
    fn test_strict_names() {
        let roles = vec![RoleNode::new("admin").with_child(RoleNode::new("power user"))];

        let strict = AuthorizerConfig::default();
        assert!(matches!(
            RoleAuthorizer::with_config(&roles, &strict),
            Err(AuthzError::Config(_))
        ));

        let relaxed = AuthorizerConfig::default().with_strict_names(false);
        let authz = RoleAuthorizer::with_config(&roles, &relaxed).unwrap();
        assert!(authz.authorize("power user", "admin").unwrap());
    }

    #[test]
    fn test_from_config_requires_path() {
        let result = RoleAuthorizer::from_config(&AuthorizerConfig::default());
        assert!(matches!(result, Err(AuthzError::Config(_))));
    }

    #[test]
    fn test_clone_shares_table() {
        let authz = sample();
        let clone = authz.clone();
        assert!(std::ptr::eq(authz.table(), clone.table()));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RoleAuthorizer>();
    }
}

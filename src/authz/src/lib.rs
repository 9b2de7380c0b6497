//! # Rolemask Role Authorizer
//!
//! Hierarchical role authorization backed by 32-bit capability signatures.
//!
//! ## Features
//!
//! - **DAG hierarchies**: roles may be shared by several parents
//! - **O(1) queries**: one bitwise superset check per decision
//! - **Cycle rejection**: a role that is its own ancestor fails construction
//! - **Immutable after build**: cheap to clone and share across threads
//!
//! ## Example
//!
//! ```rust
//! use rolemask_authz::RoleAuthorizer;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let viewer = RoleAuthorizer::create_role("viewer");
//!     let editor = RoleAuthorizer::create_role("editor").with_child(viewer);
//!     let admin = RoleAuthorizer::create_role("admin").with_child(editor);
//!
//!     let authz = RoleAuthorizer::new(vec![admin])?;
//!
//!     assert!(authz.authorize("viewer", "admin")?);
//!     assert!(!authz.authorize("admin", "editor")?);
//!     Ok(())
//! }
//! ```

pub mod authorizer;
pub mod config;
pub mod error;
pub mod hierarchy;

// Re-export commonly used types
pub use authorizer::RoleAuthorizer;
pub use config::AuthorizerConfig;
pub use error::{AuthzError, ErrorKind, Result};
pub use hierarchy::{
    CompiledRoleTable, HierarchyFile, RoleCompiler, RoleEntry, RoleNode, Signature, MAX_ROLES,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

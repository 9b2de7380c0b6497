//! Role hierarchy module
//!
//! Compiles a dominance DAG of roles into fixed-width bitmask signatures.
//!
//! # Features
//!
//! - **Shared subgraphs**: a role reachable from several parents is compiled once
//! - **Cycle Detection**: three-state DFS with complete path reporting
//! - **Fixed capacity**: at most [`MAX_ROLES`] distinct roles per hierarchy
//! - **JSON files**: nested role forests via [`HierarchyFile`]
//!
//! # Example
//!
//! ```rust
//! use rolemask_authz::hierarchy::{RoleCompiler, RoleNode};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let admin = RoleNode::new("admin")
//!     .with_child(RoleNode::new("editor").with_child(RoleNode::new("viewer")));
//!
//! let table = RoleCompiler::compile(&[admin])?;
//!
//! let admin_sig = table.signature("admin").unwrap();
//! let viewer_sig = table.signature("viewer").unwrap();
//! assert!(admin_sig.contains(viewer_sig));
//! # Ok(())
//! # }
//! ```

pub mod compiler;
pub mod loader;
pub mod node;
pub mod signature;
pub mod table;


pub use compiler::RoleCompiler;
pub use loader::HierarchyFile;
pub use node::RoleNode;
pub use signature::{Signature, MAX_ROLES};
pub use table::{CompiledRoleTable, RoleEntry};

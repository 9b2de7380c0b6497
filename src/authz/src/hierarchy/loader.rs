//! JSON hierarchy files
//!
//! ```json
//! {
//!   "roles": [
//!     { "name": "admin", "children": [ { "name": "editor" } ] }
//!   ]
//! }
//! ```

use super::node::RoleNode;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// On-disk role forest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HierarchyFile {
    /// Root roles in compilation order
    #[serde(default)]
    pub roles: Vec<RoleNode>,
}

impl HierarchyFile {
    pub fn new(roles: Vec<RoleNode>) -> Self {
        Self { roles }
    }

    /// Parse a hierarchy from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a hierarchy file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let file = Self::from_json(&contents)?;

        debug!(path = %path.display(), roots = file.roles.len(), "Loaded hierarchy file");

        Ok(file)
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn into_roles(self) -> Vec<RoleNode> {
        self.roles
    }
}

//! Error types for the role authorizer

use thiserror::Error;

/// Authorizer errors
///
/// Construction errors (`EmptyHierarchy`, `CapacityExceeded`, `StructuralCycle`)
/// describe a broken role hierarchy. `UnknownRole` is returned by queries and is
/// never folded into a `false` decision.
#[derive(Debug, Error)]
pub enum AuthzError {
    /// No roles were supplied to the compiler
    #[error("There must be at least one role")]
    EmptyHierarchy,

    /// A distinct role would need a bit beyond the signature width
    #[error("There can be at most {limit} roles (role '{role}' would exceed the limit)")]
    CapacityExceeded {
        /// The role that could not be assigned a bit
        role: String,
        /// Maximum number of distinct roles
        limit: usize,
    },

    /// Query referenced a role absent from the compiled table
    #[error("Role '{0}' not found")]
    UnknownRole(String),

    /// A role is its own ancestor
    #[error("Structural cycle detected: {0}")]
    StructuralCycle(String),

    /// Invalid configuration or role definition
    #[error("Configuration error: {0}")]
    Config(String),

    /// Hierarchy file could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Broad category of an [`AuthzError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The hierarchy or its configuration is unusable
    Configuration,
    /// A looked-up role does not exist
    NotFound,
    /// Environment failure (I/O)
    Internal,
}

impl ErrorKind {
    /// HTTP-style status code for hosts that report errors over a wire
    pub fn status_code(&self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::Configuration | ErrorKind::Internal => 500,
        }
    }
}

impl AuthzError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        AuthzError::Config(msg.into())
    }

    /// Create an unknown-role error
    pub fn unknown_role<S: Into<String>>(name: S) -> Self {
        AuthzError::UnknownRole(name.into())
    }

    /// Stable error code
    pub fn code(&self) -> &'static str {
        match self {
            AuthzError::EmptyHierarchy => "RH001",
            AuthzError::CapacityExceeded { .. } => "RH002",
            AuthzError::UnknownRole(_) => "RH003",
            AuthzError::StructuralCycle(_) => "RH004",
            AuthzError::Config(_) => "RH005",
            AuthzError::Serialization(_) => "RH006",
            AuthzError::Io(_) => "RH007",
        }
    }

    /// Error category
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthzError::UnknownRole(_) => ErrorKind::NotFound,
            AuthzError::Io(_) => ErrorKind::Internal,
            AuthzError::EmptyHierarchy
            | AuthzError::CapacityExceeded { .. }
            | AuthzError::StructuralCycle(_)
            | AuthzError::Config(_)
            | AuthzError::Serialization(_) => ErrorKind::Configuration,
        }
    }

    /// Whether this error was raised while building the hierarchy
    pub fn is_construction_error(&self) -> bool {
        matches!(
            self,
            AuthzError::EmptyHierarchy
                | AuthzError::CapacityExceeded { .. }
                | AuthzError::StructuralCycle(_)
        )
    }
}

/// Result type for authorizer operations
pub type Result<T> = std::result::Result<T, AuthzError>;

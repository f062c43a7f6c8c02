//! Error types for family construction and registration
//!
//! All failure surfaces here are definition-time: an incomplete family is
//! rejected before any product can be created, and a registry never holds
//! two families under one name. Creation and collaboration themselves are
//! total and cannot fail.

/// Errors raised while defining or registering a family
#[derive(Debug, thiserror::Error)]
pub enum FactoryError {
    /// Builder was finalized without a role-A constructor
    #[error("family `{name}` is missing its product A constructor")]
    MissingProductA {
        /// Name the incomplete family was being built under
        name: String,
    },

    /// Builder was finalized without a role-B constructor
    #[error("family `{name}` is missing its product B constructor")]
    MissingProductB {
        /// Name the incomplete family was being built under
        name: String,
    },

    /// Registry already holds a family under this name
    #[error("family `{name}` is already registered")]
    DuplicateFamily {
        /// The contested family name
        name: String,
    },
}

impl FactoryError {
    /// Name of the family involved in the violation
    #[inline]
    #[must_use]
    pub fn family_name(&self) -> &str {
        match self {
            Self::MissingProductA { name }
            | Self::MissingProductB { name }
            | Self::DuplicateFamily { name } => name,
        }
    }
}

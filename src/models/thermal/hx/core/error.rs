use thiserror::Error;

use crate::support::hx::DataFormatError;

/// Errors that can occur during a heat integration run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeatIntegrationError {
    /// A reading could not be parsed and the policy is to abort.
    #[error(transparent)]
    InvalidReading(#[from] DataFormatError),

    /// Two readings share the same block identifier.
    ///
    /// Pairs refer to blocks by identifier, so identifiers must be unique.
    #[error("duplicate block identifier {0:?}")]
    DuplicateBlock(String),
}

impl HeatIntegrationError {
    /// Name of the offending block.
    #[must_use]
    pub fn identifier(&self) -> &str {
        match self {
            Self::InvalidReading(err) => err.identifier(),
            Self::DuplicateBlock(identifier) => identifier,
        }
    }
}

//! Resolution errors.
//!
//! Every variant is fatal for the type being resolved and for nothing else.
//! No shared state is touched before an error is returned, so callers can
//! drop the failing type and keep going with the rest of the batch.

use wrt_meta::{MetadataError, TypeName};

/// Fatal condition for a single type's resolution.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// A class declares interfaces but none is marked default.
    #[error("type '{ty}' does not have a default interface")]
    MissingDefaultInterface { ty: TypeName },

    /// A referenced type is not in the repository.
    #[error("type '{name}' could not be found")]
    Unresolved { name: TypeName },

    /// A delegate has no `Invoke` method.
    #[error("delegate '{ty}' has no Invoke method")]
    MissingDelegateInvoke { ty: TypeName },
}

impl ResolveError {
    /// The qualified name of the offending type or reference.
    pub fn type_name(&self) -> &TypeName {
        match self {
            Self::MissingDefaultInterface { ty } | Self::MissingDelegateInvoke { ty } => ty,
            Self::Unresolved { name } => name,
        }
    }
}

impl From<MetadataError> for ResolveError {
    fn from(err: MetadataError) -> Self {
        match err {
            MetadataError::NotFound(name) => Self::Unresolved { name },
        }
    }
}

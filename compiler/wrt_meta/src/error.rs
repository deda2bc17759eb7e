//! Repository lookup errors.

use crate::TypeName;

/// Error raised by repository lookups.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MetadataError {
    /// A referenced type is not present in the repository.
    #[error("type '{0}' could not be found")]
    NotFound(TypeName),
}

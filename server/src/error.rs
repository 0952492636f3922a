use thiserror::Error;

use wedit_shared::{PropertyError, TickingAreaError};

/// Errors surfaced by the builder server through [`crate::ErrorEvent`] or as
/// return values of its ticking area operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeditServerError {
    /// The host's property storage refused a registration, read or write
    #[error("World property error: {0}")]
    Property(#[from] PropertyError),

    /// The persisted ticking area list could not be decoded or re-encoded
    #[error("Ticking area list error: {0}")]
    TickingArea(#[from] TickingAreaError),
}

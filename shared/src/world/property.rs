use thiserror::Error;

/// Errors reported by the host's world-scoped dynamic property storage
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The property was read or written before being registered
    #[error("World property '{name}' has not been registered")]
    NotRegistered { name: String },

    /// The property registry refused a second definition of the same name
    #[error("World property '{name}' is already registered")]
    AlreadyRegistered { name: String },

    /// The value is longer than the length the property was registered with
    #[error("Value of length {length} does not fit in world property '{name}' (max {max_length})")]
    TooLong {
        name: String,
        length: usize,
        max_length: usize,
    },

    /// The host rejected the operation for a reason of its own
    #[error("Host rejected world property '{name}': {reason}")]
    Rejected { name: String, reason: String },
}

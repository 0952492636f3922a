use thiserror::Error;

/// Errors that can occur while decoding or editing the persisted ticking area list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TickingAreaError {
    /// The stored property value is not a JSON list of strings or nulls
    #[error("Malformed ticking area list: {reason}")]
    Malformed { reason: String },

    /// The ticking area is already recorded in the list
    #[error("Ticking area '{id}' is already registered")]
    Duplicate { id: String },

    /// The serialized list would not fit in the world property
    #[error("Serialized ticking area list is {length} bytes, which exceeds the property limit of {max_length}")]
    TooLong { length: usize, max_length: usize },
}

use thiserror::Error;

use crate::container::ContainerKind;

/// Models an error raised by an accessor method. It is carried unchanged, as
/// the source of [`AccessError::InvocationFailed`].
#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("{0}")]
pub struct InvocationError(pub String);

impl InvocationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AccessError {
    #[error("member not found: {class}.{member}")]
    NoSuchMember { class: String, member: String },

    #[error("illegal access to {class}.{member}")]
    AccessDenied { class: String, member: String },

    #[error("invocation of {method} failed")]
    InvocationFailed {
        method: String,
        #[source]
        source: InvocationError,
    },

    #[error("index {index} out of bounds for length {length}")]
    IndexOutOfRange { index: i32, length: usize },

    /// The key is kept as its description, since maps may be keyed by any type
    #[error("a {kind} cannot be addressed by {key}")]
    KeyMismatch { kind: ContainerKind, key: String },
}

impl AccessError {
    /// Whether the field or method could not be reached at all
    pub fn is_access_failure(&self) -> bool {
        matches!(
            self,
            AccessError::NoSuchMember { .. } | AccessError::AccessDenied { .. }
        )
    }
}

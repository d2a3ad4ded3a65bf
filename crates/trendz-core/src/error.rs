//! Core error types.

/// Errors raised while building core values from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Product id must not be empty")]
    EmptyProductId,
}

//! Error types for the box layer.
//!
//! Every fallible operation in the crate returns a [`BoxError`]. The enum is
//! exhaustive over the failure modes: bad input sizes at construction time,
//! authentication failure at open time, and the two "should never happen"
//! conditions (no entropy, primitive fault).
//!
//! Messages are intentionally terse. Nothing here ever carries key material,
//! nonce bytes or plaintext, and decryption failures carry no detail at all.

use thiserror::Error;

/// Errors that can occur while building keys, nonces or boxes, or while
/// sealing and opening messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoxError {
    /// A public or secret key was built from the wrong number of bytes.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        expected: usize,
        actual: usize,
    },

    /// A nonce was built from the wrong number of bytes.
    #[error("invalid nonce length: expected {expected} bytes, got {actual}")]
    InvalidNonceLength {
        expected: usize,
        actual: usize,
    },

    /// The ciphertext did not authenticate. Covers truncated input, tampered
    /// bytes, the wrong nonce and the wrong key pair alike.
    #[error("authentication failed")]
    AuthenticationFailure,

    /// The OS random source could not produce bytes. Not retryable here.
    #[error("secure random source unavailable")]
    RandomSourceUnavailable,

    /// The underlying primitive reported a fault on well-formed input.
    #[error("cryptographic primitive failure")]
    PrimitiveFailure,

    /// A hex string could not be decoded.
    #[error("invalid hex encoding")]
    InvalidHex,
}

impl BoxError {
    /// Whether the caller can recover by supplying different input.
    ///
    /// `RandomSourceUnavailable` and `PrimitiveFailure` are environmental or
    /// internal faults; everything else is a property of the input.
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            BoxError::RandomSourceUnavailable | BoxError::PrimitiveFailure
        )
    }
}

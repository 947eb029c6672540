//! # Nonces
//!
//! 24-byte per-message nonces for XSalsa20-Poly1305.
//!
//! ## The one rule
//!
//! Never encrypt two messages under the same nonce with the same key pair.
//! Reuse leaks the XOR of the two plaintexts and hands out the Poly1305 key,
//! which lets an attacker forge messages. Confidentiality and authenticity
//! both go in one move.
//!
//! This crate does not track nonce history. That is the caller's job, and a
//! caller that enforces uniqueness across threads must serialize access to
//! its own history store.
//!
//! ## Picking a strategy
//!
//! [`Nonce::random`] is the default. 192 bits is large enough that random
//! collisions are not a practical concern for any realistic message count, so
//! there is no counter state to persist or get wrong after a restart. Counter
//! nonces are fine too if you already have a durable, monotonic counter;
//! build them with [`Nonce::from_bytes`].

use std::fmt;

use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};

use crate::config::NONCE_LENGTH;
use crate::error::BoxError;

/// A per-message nonce. Public, but must be unique per key pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nonce {
    bytes: [u8; NONCE_LENGTH],
}

impl Nonce {
    /// Create a nonce from a fixed-size array. Cannot fail.
    pub fn from_bytes(bytes: [u8; NONCE_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Try to create a nonce from a byte slice of exactly [`NONCE_LENGTH`]
    /// bytes.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, BoxError> {
        let bytes: [u8; NONCE_LENGTH] =
            slice.try_into().map_err(|_| BoxError::InvalidNonceLength {
                expected: NONCE_LENGTH,
                actual: slice.len(),
            })?;
        Ok(Self { bytes })
    }

    /// Draw a fresh nonce from the OS random source.
    pub fn random() -> Result<Self, BoxError> {
        Self::random_with_rng(&mut OsRng)
    }

    /// Draw a nonce from a caller-supplied CSPRNG.
    pub fn random_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, BoxError> {
        let mut bytes = [0u8; NONCE_LENGTH];
        rng.try_fill_bytes(&mut bytes)
            .map_err(|_| BoxError::RandomSourceUnavailable)?;
        Ok(Self { bytes })
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; NONCE_LENGTH] {
        &self.bytes
    }

    /// Hex-encoded representation. 48 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse a hex-encoded nonce.
    pub fn from_hex(s: &str) -> Result<Self, BoxError> {
        let bytes = hex::decode(s).map_err(|_| BoxError::InvalidHex)?;
        Self::try_from_slice(&bytes)
    }
}

impl TryFrom<&[u8]> for Nonce {
    type Error = BoxError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_slice(slice)
    }
}

impl From<[u8; NONCE_LENGTH]> for Nonce {
    fn from(bytes: [u8; NONCE_LENGTH]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for Nonce {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Nonce({})", self.to_hex())
    }
}

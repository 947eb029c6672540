//! # Key Types
//!
//! Curve25519 public and secret keys for the box construction.
//!
//! `PublicKey` and `SecretKey` are distinct types on purpose. Both are
//! 32 bytes, and a function that wants one must never silently accept the
//! other. The compiler is the cheapest code reviewer we have.
//!
//! ## Validation
//!
//! There is exactly one thing to validate: length. Every 32-byte string is a
//! syntactically valid Curve25519 public key (X25519 works on u-coordinates
//! and clamps scalars), so anything beyond a length check would be theatre.
//!
//! ## Security considerations
//!
//! - Secret key bytes are zeroized on drop, including on every early-return
//!   path, because the wipe is tied to the value and not to a code path.
//! - Secret keys have no `Display`, no hex export and no serialization. The
//!   raw bytes are visible to this crate only.
//! - Key bytes are never logged.

use std::fmt;

use rand::rngs::OsRng;
use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::config::{PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use crate::error::BoxError;
use crate::primitives;

/// A Curve25519 public key. Safe to share with the world.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey {
    bytes: [u8; PUBLIC_KEY_LENGTH],
}

/// A Curve25519 secret key.
///
/// Immutable once built. Dropping it overwrites the bytes with zeros.
///
/// # Examples
///
/// ```
/// use naclbox::SecretKey;
///
/// let secret = SecretKey::generate().unwrap();
/// let public = secret.public_key();
/// assert_eq!(public, secret.public_key());
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: [u8; SECRET_KEY_LENGTH],
}

/// Generate a fresh keypair from the OS random source.
///
/// Fails only with [`BoxError::RandomSourceUnavailable`]. Don't retry it in a
/// loop: if the OS can't hand out entropy, the process has bigger problems.
pub fn generate_keypair() -> Result<(PublicKey, SecretKey), BoxError> {
    let secret = SecretKey::generate()?;
    Ok((secret.public_key(), secret))
}

/// Generate a keypair from a caller-supplied CSPRNG.
///
/// Handy for seeded tests and simulations. Production code should use
/// [`generate_keypair`].
pub fn generate_keypair_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
) -> Result<(PublicKey, SecretKey), BoxError> {
    let secret = SecretKey::generate_with_rng(rng)?;
    Ok((secret.public_key(), secret))
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

impl PublicKey {
    /// Create a `PublicKey` from a fixed-size array. Cannot fail.
    pub fn from_bytes(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Try to create a `PublicKey` from a byte slice.
    ///
    /// Succeeds for any content as long as the slice is exactly
    /// [`PUBLIC_KEY_LENGTH`] bytes.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, BoxError> {
        let bytes: [u8; PUBLIC_KEY_LENGTH] =
            slice.try_into().map_err(|_| BoxError::InvalidKeyLength {
                expected: PUBLIC_KEY_LENGTH,
                actual: slice.len(),
            })?;
        Ok(Self { bytes })
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        &self.bytes
    }

    /// Copy out the raw bytes.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.bytes
    }

    /// Hex-encoded representation. 64 characters for 32 bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Parse a hex-encoded public key.
    pub fn from_hex(s: &str) -> Result<Self, BoxError> {
        let bytes = hex::decode(s).map_err(|_| BoxError::InvalidHex)?;
        Self::try_from_slice(&bytes)
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = BoxError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_slice(slice)
    }
}

impl From<[u8; PUBLIC_KEY_LENGTH]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_LENGTH]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", &self.to_hex()[..16])
    }
}

// ---------------------------------------------------------------------------
// SecretKey
// ---------------------------------------------------------------------------

impl SecretKey {
    /// Create a `SecretKey` from a fixed-size array.
    ///
    /// Takes the array by value; the caller's copy is theirs to wipe.
    pub fn from_bytes(bytes: [u8; SECRET_KEY_LENGTH]) -> Self {
        Self { bytes }
    }

    /// Try to create a `SecretKey` from a byte slice.
    ///
    /// Any 32 bytes form a usable scalar; only the length is checked.
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, BoxError> {
        if slice.len() != SECRET_KEY_LENGTH {
            return Err(BoxError::InvalidKeyLength {
                expected: SECRET_KEY_LENGTH,
                actual: slice.len(),
            });
        }
        let mut key = Self {
            bytes: [0u8; SECRET_KEY_LENGTH],
        };
        key.bytes.copy_from_slice(slice);
        Ok(key)
    }

    /// Generate a fresh secret key from the OS random source.
    pub fn generate() -> Result<Self, BoxError> {
        Self::generate_with_rng(&mut OsRng)
    }

    /// Generate a secret key from a caller-supplied CSPRNG.
    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, BoxError> {
        let mut seed = Zeroizing::new([0u8; SECRET_KEY_LENGTH]);
        rng.try_fill_bytes(&mut seed[..])
            .map_err(|_| BoxError::RandomSourceUnavailable)?;
        Ok(Self::from_bytes(*seed))
    }

    /// Derive the matching public key (`scalarmult_base`).
    ///
    /// Deterministic, and returns a new value that shares no storage with
    /// the secret.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_bytes(primitives::scalarmult_base(&self.bytes))
    }

    pub(crate) fn as_bytes(&self) -> &[u8; SECRET_KEY_LENGTH] {
        &self.bytes
    }
}

impl TryFrom<&[u8]> for SecretKey {
    type Error = BoxError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        Self::try_from_slice(slice)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Identify the key by its public half. Never a single secret byte.
        write!(f, "SecretKey(pub={})", &self.public_key().to_hex()[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// An RNG whose source has gone away.
    struct DeadRng;

    impl RngCore for DeadRng {
        fn next_u32(&mut self) -> u32 {
            0
        }

        fn next_u64(&mut self) -> u64 {
            0
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            dest.fill(0);
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
            Err(rand_core::Error::new("entropy source closed"))
        }
    }

    impl CryptoRng for DeadRng {}

    #[test]
    fn test_generate_produces_valid_keypair() {
        let (public, secret) = generate_keypair().unwrap();
        assert_eq!(public, secret.public_key());
        assert_eq!(public.as_bytes().len(), PUBLIC_KEY_LENGTH);
    }

    #[test]
    fn test_two_generated_keypairs_are_different() {
        let (pk1, _) = generate_keypair().unwrap();
        let (pk2, _) = generate_keypair().unwrap();
        assert_ne!(pk1, pk2);
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let (pk1, _) = generate_keypair_with_rng(&mut StdRng::seed_from_u64(7)).unwrap();
        let (pk2, _) = generate_keypair_with_rng(&mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(pk1, pk2);
    }

    #[test]
    fn test_dead_rng_reports_unavailable() {
        assert_eq!(
            SecretKey::generate_with_rng(&mut DeadRng).unwrap_err(),
            BoxError::RandomSourceUnavailable
        );
        assert!(generate_keypair_with_rng(&mut DeadRng).is_err());
    }

    #[test]
    fn test_public_key_derivation_is_deterministic() {
        let secret = SecretKey::from_bytes([42u8; 32]);
        assert_eq!(secret.public_key(), secret.public_key());
        assert_eq!(
            secret.public_key(),
            SecretKey::from_bytes([42u8; 32]).public_key()
        );
    }

    #[test]
    fn test_public_key_length_boundary() {
        for len in [0, 16, 31, 33, 64] {
            assert_eq!(
                PublicKey::try_from_slice(&vec![0xAB; len]),
                Err(BoxError::InvalidKeyLength {
                    expected: 32,
                    actual: len
                })
            );
        }
        // Any content is fine at exactly 32 bytes, all-zero included.
        assert!(PublicKey::try_from_slice(&[0u8; 32]).is_ok());
        assert!(PublicKey::try_from_slice(&[0xFF; 32]).is_ok());
    }

    #[test]
    fn test_secret_key_length_boundary() {
        assert!(matches!(
            SecretKey::try_from_slice(&[1u8; 31]),
            Err(BoxError::InvalidKeyLength {
                expected: 32,
                actual: 31
            })
        ));
        assert!(matches!(
            SecretKey::try_from_slice(&[1u8; 33]),
            Err(BoxError::InvalidKeyLength {
                expected: 32,
                actual: 33
            })
        ));
        let key = SecretKey::try_from_slice(&[1u8; 32]).unwrap();
        assert_eq!(key.as_bytes(), &[1u8; 32]);
    }

    #[test]
    fn test_try_from_matches_try_from_slice() {
        let bytes = [9u8; 32];
        let via_trait = PublicKey::try_from(&bytes[..]).unwrap();
        assert_eq!(via_trait, PublicKey::from_bytes(bytes));
        assert!(SecretKey::try_from(&bytes[..16]).is_err());
    }

    #[test]
    fn public_key_hex_roundtrip() {
        let (pk, _) = generate_keypair().unwrap();
        let hex_str = pk.to_hex();
        assert_eq!(hex_str.len(), 64);
        assert_eq!(PublicKey::from_hex(&hex_str).unwrap(), pk);
        assert_eq!(pk.to_string(), hex_str);
    }

    #[test]
    fn test_invalid_hex_rejected() {
        assert_eq!(
            PublicKey::from_hex("not-hex-at-all"),
            Err(BoxError::InvalidHex)
        );
        assert_eq!(
            PublicKey::from_hex("deadbeef"),
            Err(BoxError::InvalidKeyLength {
                expected: 32,
                actual: 4
            })
        );
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let secret = SecretKey::from_bytes([0x11; 32]);
        let debug_str = format!("{:?}", secret);
        assert!(debug_str.starts_with("SecretKey(pub="));
        assert!(!debug_str.contains(&hex::encode([0x11u8; 8])));
    }

    #[test]
    fn test_zeroize_clears_bytes() {
        let mut secret = SecretKey::from_bytes([0x77; 32]);
        secret.zeroize();
        assert_eq!(secret.as_bytes(), &[0u8; 32]);
    }

    #[test]
    fn test_clone_preserves_key() {
        let secret = SecretKey::generate().unwrap();
        let cloned = secret.clone();
        assert_eq!(secret.public_key(), cloned.public_key());
    }
}

//! # Primitive Boundary
//!
//! The only place in the crate that talks to the curve and cipher libraries.
//! Everything above this module speaks in fixed-size arrays and [`SharedKey`]s;
//! everything below it is somebody else's audited code.
//!
//! - `scalarmult_base` is X25519 against the base point (x25519-dalek).
//! - `scalarmult` is raw X25519 against an arbitrary point. Only the tests
//!   call it; boxes go through `box_beforenm`.
//! - `box_beforenm` is X25519 + HSalsa20 key derivation (crypto_box).
//! - `box_afternm` / `box_open_afternm` are XSalsa20-Poly1305 with the
//!   precomputed key (crypto_box).
//!
//! All of these are pure functions of their inputs, hold no global state and
//! are safe to call from any number of threads at once.

use std::fmt;

use crypto_box::aead::Aead;
use crypto_box::SalsaBox;
use x25519_dalek::{x25519, X25519_BASEPOINT_BYTES};

#[cfg(test)]
use crate::config::SHARED_KEY_LENGTH;
use crate::config::{MAC_LENGTH, NONCE_LENGTH, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use crate::error::BoxError;

/// The precomputed symmetric key for one (secret key, peer public key) pair.
///
/// Only [`box_beforenm`] makes these. The key bytes live inside the cipher
/// instance, are never exposed, and are wiped when the cipher drops.
pub struct SharedKey {
    cipher: SalsaBox,
}

impl fmt::Debug for SharedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedKey(..)")
    }
}

/// Multiply the Curve25519 base point by a (clamped) secret scalar.
pub fn scalarmult_base(secret: &[u8; SECRET_KEY_LENGTH]) -> [u8; PUBLIC_KEY_LENGTH] {
    x25519(*secret, X25519_BASEPOINT_BYTES)
}

/// Multiply `point` by a (clamped) secret scalar. The raw X25519 output,
/// before any key derivation.
#[cfg(test)]
pub fn scalarmult(
    secret: &[u8; SECRET_KEY_LENGTH],
    point: &[u8; PUBLIC_KEY_LENGTH],
) -> [u8; SHARED_KEY_LENGTH] {
    x25519(*secret, *point)
}

/// Derive the shared symmetric key for `secret` talking to `peer_public`.
///
/// This is the expensive step (one variable-base scalar multiplication plus
/// HSalsa20). Both orderings, `(a_secret, b_public)` and `(b_secret, a_public)`,
/// yield the same key.
pub fn box_beforenm(
    peer_public: &[u8; PUBLIC_KEY_LENGTH],
    secret: &[u8; SECRET_KEY_LENGTH],
) -> SharedKey {
    let public = crypto_box::PublicKey::from(*peer_public);
    // crypto_box wipes its own copy of the scalar on drop.
    let secret = crypto_box::SecretKey::from(*secret);
    SharedKey {
        cipher: SalsaBox::new(&public, &secret),
    }
}

/// Seal `message` under a precomputed key. Output is `message.len() + MAC_LENGTH`
/// bytes.
pub fn box_afternm(
    message: &[u8],
    nonce: &[u8; NONCE_LENGTH],
    key: &SharedKey,
) -> Result<Vec<u8>, BoxError> {
    let nonce = crypto_box::Nonce::from_slice(&nonce[..]);
    key.cipher
        .encrypt(nonce, message)
        .map_err(|_| BoxError::PrimitiveFailure)
}

/// Open `ciphertext` under a precomputed key.
///
/// The tag is verified before any plaintext is produced. Input shorter than
/// the tag takes the same error path as a forged tag.
pub fn box_open_afternm(
    ciphertext: &[u8],
    nonce: &[u8; NONCE_LENGTH],
    key: &SharedKey,
) -> Result<Vec<u8>, BoxError> {
    if ciphertext.len() < MAC_LENGTH {
        return Err(BoxError::AuthenticationFailure);
    }

    let nonce = crypto_box::Nonce::from_slice(&nonce[..]);
    key.cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| BoxError::AuthenticationFailure)
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 7748 §6.1.
    const ALICE_SECRET: &str = "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a";
    const ALICE_PUBLIC: &str = "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a";
    const BOB_SECRET: &str = "5dab087e624a8a4b79e17f8b83800ee66f3bb1292618b6fd1c2f8b27ff88e0eb";
    const BOB_PUBLIC: &str = "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f";
    const SHARED_POINT: &str = "4a5d9d5ba4ce2de1728e3bf480350f25e07e21c947d19e3376f09b3c1e161742";

    fn arr32(hex_str: &str) -> [u8; 32] {
        hex::decode(hex_str).unwrap().try_into().unwrap()
    }

    #[test]
    fn test_scalarmult_base_rfc7748() {
        assert_eq!(scalarmult_base(&arr32(ALICE_SECRET)), arr32(ALICE_PUBLIC));
        assert_eq!(scalarmult_base(&arr32(BOB_SECRET)), arr32(BOB_PUBLIC));
    }

    #[test]
    fn test_scalarmult_rfc7748() {
        let ab = scalarmult(&arr32(ALICE_SECRET), &arr32(BOB_PUBLIC));
        let ba = scalarmult(&arr32(BOB_SECRET), &arr32(ALICE_PUBLIC));
        assert_eq!(ab, arr32(SHARED_POINT));
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_scalarmult_on_base_point_matches_scalarmult_base() {
        let secret = arr32(ALICE_SECRET);
        assert_eq!(
            scalarmult(&secret, &X25519_BASEPOINT_BYTES),
            scalarmult_base(&secret)
        );
    }

    #[test]
    fn test_scalarmult_base_agrees_with_crypto_box() {
        // The two libraries must clamp identically or boxes won't interoperate.
        let secret = [0x5Au8; 32];
        let via_box = crypto_box::SecretKey::from(secret).public_key();
        assert_eq!(&scalarmult_base(&secret), via_box.as_bytes());
    }

    #[test]
    fn test_afternm_roundtrip_across_orderings() {
        let a_to_b = box_beforenm(&arr32(BOB_PUBLIC), &arr32(ALICE_SECRET));
        let b_to_a = box_beforenm(&arr32(ALICE_PUBLIC), &arr32(BOB_SECRET));
        let nonce = [7u8; NONCE_LENGTH];

        let sealed = box_afternm(b"precomputed", &nonce, &a_to_b).unwrap();
        assert_eq!(sealed.len(), b"precomputed".len() + MAC_LENGTH);
        assert_eq!(
            box_open_afternm(&sealed, &nonce, &b_to_a).unwrap(),
            b"precomputed"
        );
    }

    #[test]
    fn test_open_rejects_input_shorter_than_tag() {
        let key = box_beforenm(&arr32(BOB_PUBLIC), &arr32(ALICE_SECRET));
        let nonce = [0u8; NONCE_LENGTH];
        for len in 0..MAC_LENGTH {
            assert_eq!(
                box_open_afternm(&vec![0u8; len], &nonce, &key),
                Err(BoxError::AuthenticationFailure)
            );
        }
    }

    #[test]
    fn test_shared_key_debug_is_redacted() {
        let key = box_beforenm(&arr32(BOB_PUBLIC), &arr32(ALICE_SECRET));
        assert_eq!(format!("{:?}", key), "SharedKey(..)");
    }
}

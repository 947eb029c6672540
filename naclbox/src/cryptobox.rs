//! # The Box
//!
//! Public-key authenticated encryption between two long-term keypairs.
//!
//! A [`CryptoBox`] binds one local secret key to one peer public key. Building
//! it runs the key agreement once (X25519 + HSalsa20) and caches the result.
//! Every `encrypt`/`decrypt` after that costs only XSalsa20 + Poly1305, which
//! is the whole point when you send many messages to the same peer.
//!
//! ## Lifecycle
//!
//! There is one state: bound and ready. No rekeying, no rebinding. Talking to
//! a different peer means building a different box. The shared key is wiped
//! when the box drops.
//!
//! ## Threads
//!
//! All methods take `&self` and the cached key is never mutated, so a single
//! box can be shared across threads (`Arc<CryptoBox>`) with no locking.
//!
//! # Examples
//!
//! ```
//! use naclbox::{generate_keypair, CryptoBox, Nonce};
//!
//! let (alice_pk, alice_sk) = generate_keypair().unwrap();
//! let (bob_pk, bob_sk) = generate_keypair().unwrap();
//!
//! let alice = CryptoBox::new(&alice_sk, &bob_pk);
//! let bob = CryptoBox::new(&bob_sk, &alice_pk);
//!
//! let nonce = Nonce::random().unwrap();
//! let sealed = alice.encrypt(b"hello", &nonce).unwrap();
//! assert_eq!(bob.decrypt(&sealed, &nonce).unwrap(), b"hello");
//! ```

use std::fmt;

use tracing::trace;

use crate::config::MAC_LENGTH;
use crate::error::BoxError;
use crate::keys::{PublicKey, SecretKey};
use crate::nonce::Nonce;
use crate::primitives::{self, SharedKey};

/// An encryption context for one (local secret, peer public) pair.
pub struct CryptoBox {
    shared_key: SharedKey,
}

impl CryptoBox {
    /// Bind `secret_key` to `peer_public_key` and precompute the shared key.
    ///
    /// Cannot fail: both keys were validated when they were built.
    pub fn new(secret_key: &SecretKey, peer_public_key: &PublicKey) -> Self {
        let shared_key =
            primitives::box_beforenm(peer_public_key.as_bytes(), secret_key.as_bytes());
        trace!("precomputed box shared key");
        Self { shared_key }
    }

    /// Encrypt and authenticate `message` under `nonce`.
    ///
    /// Deterministic for a given (box, nonce, message). The result is exactly
    /// [`MAC_LENGTH`] bytes longer than `message`. Neither the box nor the
    /// nonce is consumed, which also means nothing stops you from passing the
    /// same nonce twice. Don't.
    pub fn encrypt(&self, message: &[u8], nonce: &Nonce) -> Result<Vec<u8>, BoxError> {
        let ciphertext = primitives::box_afternm(message, nonce.as_bytes(), &self.shared_key)?;
        debug_assert_eq!(ciphertext.len(), message.len() + MAC_LENGTH);
        trace!(
            plaintext_len = message.len(),
            ciphertext_len = ciphertext.len(),
            "box sealed"
        );
        Ok(ciphertext)
    }

    /// Verify and decrypt `ciphertext` under `nonce`.
    ///
    /// All or nothing: either the full plaintext comes back, or
    /// [`BoxError::AuthenticationFailure`] does. Truncated input, flipped bits,
    /// the wrong nonce and the wrong peer are indistinguishable.
    pub fn decrypt(&self, ciphertext: &[u8], nonce: &Nonce) -> Result<Vec<u8>, BoxError> {
        let plaintext =
            primitives::box_open_afternm(ciphertext, nonce.as_bytes(), &self.shared_key)?;
        trace!(plaintext_len = plaintext.len(), "box opened");
        Ok(plaintext)
    }
}

impl fmt::Debug for CryptoBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CryptoBox").finish_non_exhaustive()
    }
}

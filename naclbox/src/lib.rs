// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # naclbox - Public-Key Authenticated Encryption
//!
//! The NaCl `box` construction (curve25519xsalsa20poly1305) behind a small,
//! strongly typed API: two parties with long-term Curve25519 keypairs exchange
//! messages that are both confidential and tamper-evident.
//!
//! The crate is deliberately boring. X25519 comes from x25519-dalek, the
//! XSalsa20-Poly1305 box from RustCrypto's crypto_box. What lives here is
//! the part those libraries leave to you: validated key and nonce types,
//! a box object that does the key agreement once per peer, and an error
//! taxonomy that never leaks more than "failed".
//!
//! ## Architecture
//!
//! - **config** - Every fixed length and algorithm name.
//! - **error** - [`BoxError`], the single error type.
//! - **keys** - [`PublicKey`], [`SecretKey`], keypair generation.
//! - **nonce** - [`Nonce`] and the rules for not reusing one.
//! - **cryptobox** - [`CryptoBox`], the precomputed encrypt/decrypt context.
//! - **primitives** - The crate-private boundary with the curve and cipher
//!   libraries.
//!
//! ## Design Philosophy
//!
//! 1. A public key and a secret key are different types. Always.
//! 2. Secret bytes are wiped on drop and never printed.
//! 3. Decryption is all or nothing. No partial plaintext, no detailed errors.
//! 4. Nonce uniqueness is the caller's contract, and it is written down.

pub mod config;
pub mod cryptobox;
pub mod error;
pub mod keys;
pub mod nonce;

mod primitives;

pub use cryptobox::CryptoBox;
pub use error::BoxError;
pub use keys::{generate_keypair, generate_keypair_with_rng, PublicKey, SecretKey};
pub use nonce::Nonce;

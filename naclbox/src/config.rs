//! # Box Parameters & Constants
//!
//! Every fixed size in the crate lives here. If you're hardcoding a `32` or a
//! `24` somewhere else, you're doing it wrong.
//!
//! The values are dictated by the primitive family, not by us. Targeting a
//! different family means changing all of them together and auditing every
//! caller that assumed the old sizes.

// ---------------------------------------------------------------------------
// Algorithm Identifiers
// ---------------------------------------------------------------------------

/// The NaCl name for the whole construction.
pub const PRIMITIVE_FAMILY: &str = "curve25519xsalsa20poly1305";

/// X25519 for Diffie-Hellman key agreement (RFC 7748).
pub const KEY_EXCHANGE_ALGORITHM: &str = "X25519";

/// XSalsa20 stream cipher + Poly1305 one-time authenticator.
pub const SYMMETRIC_ALGORITHM: &str = "XSalsa20-Poly1305";

// ---------------------------------------------------------------------------
// Key Sizes
// ---------------------------------------------------------------------------

/// Public key length in bytes. A Curve25519 u-coordinate.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// Secret key length in bytes. A Curve25519 scalar (clamped at use time).
pub const SECRET_KEY_LENGTH: usize = 32;

/// Length of the precomputed shared key produced by `box_beforenm`.
pub const SHARED_KEY_LENGTH: usize = 32;

// ---------------------------------------------------------------------------
// Message Parameters
// ---------------------------------------------------------------------------

/// Nonce length in bytes. 192 bits, which is what makes random nonces safe.
pub const NONCE_LENGTH: usize = 24;

/// Poly1305 tag length. Every ciphertext is exactly this much longer than
/// its plaintext.
pub const MAC_LENGTH: usize = 16;

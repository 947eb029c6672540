//! Walkthrough of the box lifecycle.
//!
//! Generates two keypairs, precomputes a box on each side, exchanges a few
//! messages, and shows what happens to a tampered ciphertext. Library events
//! are emitted through `tracing`; set `RUST_LOG=naclbox=trace` to see them and
//! `LOG_FORMAT=json` for JSON lines.
//!
//! Run with:
//!   cargo run --example demo

use std::time::Instant;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use naclbox::config::{MAC_LENGTH, PRIMITIVE_FAMILY};
use naclbox::{generate_keypair, BoxError, CryptoBox, Nonce};

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Accepts "json" or "pretty" (case-insensitive). Anything else is `Pretty`.
    fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Install the global subscriber. `RUST_LOG` overrides `default_level`.
/// Output goes to stderr so the walkthrough on stdout stays readable.
fn init_logging(default_level: &str, format: LogFormat) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    match format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
    }

    tracing::info!("logging initialized (format={:?})", format);
}

// ---------------------------------------------------------------------------
// Display helpers
// ---------------------------------------------------------------------------

fn section(num: u32, title: &str) {
    println!();
    println!("===[ Step {num} ]==================================================");
    println!("  {title}");
}

fn timing(label: &str, elapsed: std::time::Duration) {
    let ms = elapsed.as_secs_f64() * 1000.0;
    println!("  [{label}: {ms:.3} ms]");
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<(), BoxError> {
    let format = std::env::var("LOG_FORMAT")
        .map(|s| LogFormat::from_str_lossy(&s))
        .unwrap_or(LogFormat::Pretty);
    init_logging("naclbox=debug,demo=info", format);

    println!("naclbox demo  |  {PRIMITIVE_FAMILY}");

    section(1, "Keypair generation");
    let t = Instant::now();
    let (alice_pk, alice_sk) = generate_keypair()?;
    let (bob_pk, bob_sk) = generate_keypair()?;
    timing("keygen x2", t.elapsed());
    println!("  Alice  {alice_pk}");
    println!("  Bob    {bob_pk}");

    section(2, "Shared-key precomputation");
    let t = Instant::now();
    let alice = CryptoBox::new(&alice_sk, &bob_pk);
    let bob = CryptoBox::new(&bob_sk, &alice_pk);
    timing("beforenm x2", t.elapsed());

    section(3, "Alice -> Bob");
    let messages: [&[u8]; 3] = [b"hello", b"", b"the same box, a new nonce, every time"];
    for message in messages {
        let nonce = Nonce::random()?;
        let sealed = alice.encrypt(message, &nonce)?;
        let opened = bob.decrypt(&sealed, &nonce)?;
        assert_eq!(opened, message);
        println!(
            "  {:>3} bytes -> {:>3} bytes (+{MAC_LENGTH})  nonce {}",
            message.len(),
            sealed.len(),
            &nonce.to_hex()[..12]
        );
    }

    section(4, "Tampering");
    let nonce = Nonce::random()?;
    let mut sealed = bob.encrypt(b"pay 10 to carol", &nonce)?;
    sealed[MAC_LENGTH] ^= 0x01;
    match alice.decrypt(&sealed, &nonce) {
        Err(BoxError::AuthenticationFailure) => println!("  [OK] tampered ciphertext rejected"),
        other => println!("  [!!] unexpected result: {other:?}"),
    }

    Ok(())
}

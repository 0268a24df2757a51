//! Deterministic pseudo-random value derivation.
//!
//! Every "AI-derived" number in this service (confidence scores, anomaly
//! scores, wear levels) comes from here: a stable function of a seed string
//! and a range. Same seed + same range always yields the same value, across
//! calls and process restarts, which is what makes responses reproducible
//! under test.

use sha2::{Digest, Sha256};

/// Modulus applied to the digest before normalization. Large enough that the
/// resulting [0,1) grid is much finer than any range callers ask for.
const DIGEST_MODULUS: u64 = 100_000;

/// Map `seed` to a stable value in `[min, max]`.
///
/// The seed is hashed with SHA-256, the leading digest bytes are reduced
/// modulo a large constant, normalized into [0,1) and linearly interpolated
/// into the requested range. The contract is determinism plus good spread;
/// the specific digest algorithm is an implementation detail.
///
/// Callers must pass `min <= max`; the result is meaningless otherwise.
pub fn derive(seed: &str, min: f64, max: f64) -> f64 {
    let normalized = (digest_u64(seed) % DIGEST_MODULUS) as f64 / DIGEST_MODULUS as f64;
    min + normalized * (max - min)
}

/// Shorthand for `derive(seed, 0.0, 1.0)`.
pub fn derive_unit(seed: &str) -> f64 {
    derive(seed, 0.0, 1.0)
}

/// Map `seed` to a stable bucket index in `[0, buckets)`.
///
/// Used for bounded integer picks such as gate numbers. `buckets` must be
/// nonzero.
pub fn derive_index(seed: &str, buckets: u64) -> u64 {
    debug_assert!(buckets > 0, "derive_index requires at least one bucket");
    digest_u64(seed) % buckets
}

fn digest_u64(seed: &str) -> u64 {
    let digest = Sha256::digest(seed.as_bytes());
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(prefix)
}

/// Round to `decimals` decimal places. Wire values are rounded, not
/// truncated, unless an endpoint contract says otherwise.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

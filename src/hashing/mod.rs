//! BLAKE3 helpers for stable keys.
//!
//! Hashes are only used for indexing (arm file names, stub embedding buckets), never for
//! verification; stored records carry the original id and are checked on read.

use blake3::Hasher;

/// Computes a 64-bit hash of the input data using BLAKE3, truncated from 256 bits.
#[inline]
pub fn hash_to_u64(data: &[u8]) -> u64 {
    let hash = blake3::hash(data);
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&hash.as_bytes()[0..8]);
    u64::from_le_bytes(bytes)
}

/// Filesystem-safe storage key for an internship's arm (64 hex chars).
///
/// Internship ids are caller-supplied text, so they are never used as paths directly.
#[inline]
pub fn arm_storage_key(internship_id: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(b"arm|");
    hasher.update(internship_id.as_bytes());
    hasher.finalize().to_hex().to_string()
}

/// Maps a token to a `(bucket, sign)` pair for feature-hashed embeddings.
#[inline]
pub fn token_bucket(token: &str, dim: usize) -> (usize, f32) {
    let h = hash_to_u64(token.as_bytes());
    let bucket = (h % dim.max(1) as u64) as usize;
    let sign = if (h >> 63) & 1 == 0 { 1.0 } else { -1.0 };
    (bucket, sign)
}

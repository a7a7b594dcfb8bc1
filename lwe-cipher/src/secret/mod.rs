//! Password to secret vector derivation.

use crate::ring::{Ring, Vector};

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Derives the length-`n` secret vector for `password`.
///
/// Every SHA-256 digest byte is reduced modulo q; the 32 resulting values are
/// truncated or cyclically repeated to reach length `n`.
///
/// # Example
///
/// ```
/// # use lwe_cipher::ring::Ring;
/// # use lwe_cipher::secret::derive_secret;
/// let ring = Ring::try_with(2053).unwrap();
/// let s = derive_secret("password123", &ring, 64);
/// assert_eq!(s.len(), 64);
/// assert_eq!(s[..32], s[32..]);
/// ```
pub fn derive_secret(password: &str, ring: &Ring, n: usize) -> Vector {
    reduce_digest(&password_digest(password), ring, n)
}

/// SHA-256 of the password's UTF-8 bytes, held so it is wiped on drop.
pub fn password_digest(password: &str) -> Zeroizing<Vec<u8>> {
    Zeroizing::new(Sha256::digest(password.as_bytes()).to_vec())
}

/// Reduces every digest byte modulo q and extends the result cyclically to length `n`.
pub fn reduce_digest(digest: &[u8], ring: &Ring, n: usize) -> Vector {
    let values: Vector = digest.iter().map(|&byte| ring.normalize(byte as i64)).collect();

    extend_cyclic(&values, n)
}

/// Truncates `values` to `n` entries, or repeats them (index modulo `values.len()`) until there are `n`.
///
/// An empty input yields an empty vector.
pub fn extend_cyclic(values: &[i64], n: usize) -> Vector {
    values.iter().copied().cycle().take(n).collect()
}

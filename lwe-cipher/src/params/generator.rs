use crate::ring::{Matrix, Ring, Vector};

use rand::Rng;

/// Draws an n×m matrix of independent uniform residues in [0, q).
pub fn generate_matrix<R: Rng + ?Sized>(n: usize, m: usize, ring: &Ring, rng: &mut R) -> Matrix {
    let q = ring.modulus() as i64;

    (0..n)
        .map(|_| (0..m).map(|_| rng.random_range(0..q)).collect())
        .collect()
}

/// Draws m small values from `[0, error_bound)`, each reduced mod q.
pub fn generate_error<R: Rng + ?Sized>(
    m: usize,
    ring: &Ring,
    error_bound: u64,
    rng: &mut R,
) -> Vector {
    (0..m)
        .map(|_| ring.normalize(rng.random_range(0..error_bound) as i64))
        .collect()
}

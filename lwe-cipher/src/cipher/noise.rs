use crate::errors::LweCipherError;
use crate::ring::matrix_ops::{vector_add, vector_matrix_mul};
use crate::ring::{Matrix, Ring, Vector};

/// Computes the derived vector `b = s·A + E (mod q)`.
///
/// # Arguments
/// * `s` - Secret vector of length n.
/// * `A` - Coefficient matrix, n×m.
/// * `E` - Error vector of length m.
///
/// # Returns
/// The length-m vector `b`, or `DimensionMismatch` when the shapes disagree.
pub fn compute_b(s: &Vector, A: &Matrix, E: &Vector, ring: &Ring) -> Result<Vector, LweCipherError> {
    if s.len() != A.len() {
        return Err(LweCipherError::DimensionMismatch(format!(
            "Secret length ({}) must match matrix rows ({})",
            s.len(),
            A.len()
        )));
    }

    let sa = vector_matrix_mul(s, A, ring)?;
    vector_add(&sa, E, ring)
}

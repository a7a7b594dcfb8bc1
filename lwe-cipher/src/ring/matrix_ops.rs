use crate::errors::LweCipherError;
use crate::ring::{Matrix, Ring, Vector};

/// Row vector times matrix, `s·A`: a length-n `x` and an n×m `a` give a length-m result.
pub fn vector_matrix_mul(x: &Vector, a: &Matrix, ring: &Ring) -> Result<Vector, LweCipherError> {
    let n = x.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    let m = a.first().map_or(0, Vec::len);
    check_shape(a, n, m)?;

    let mut y = vec![0i64; m];
    for (j, acc) in y.iter_mut().enumerate() {
        let mut sum = 0i64;
        for i in 0..n {
            let term = ring.mul(x[i], a[i][j]);
            sum = ring.add(sum, term);
        }
        *acc = sum;
    }
    Ok(y)
}

/// Computes the vector sum `c = a + b` modulo `q`, where `q` is the modulus of the ring.
///
/// # Errors
///
/// Returns `LweCipherError::DimensionMismatch` if the vectors have different lengths.
pub fn vector_add(a: &Vector, b: &Vector, ring: &Ring) -> Result<Vector, LweCipherError> {
    if a.len() != b.len() {
        return Err(LweCipherError::DimensionMismatch(format!(
            "Vector lengths must match for addition ({} vs {})",
            a.len(),
            b.len()
        )));
    }

    Ok(a.iter().zip(b).map(|(&x, &y)| ring.add(x, y)).collect())
}

/// Checks that `matrix` is exactly `rows`×`cols`.
pub fn check_shape(matrix: &Matrix, rows: usize, cols: usize) -> Result<(), LweCipherError> {
    if matrix.len() != rows {
        return Err(LweCipherError::DimensionMismatch(format!(
            "Matrix has {} rows but expected {}",
            matrix.len(),
            rows
        )));
    }
    if let Some((i, row)) = matrix.iter().enumerate().find(|(_, row)| row.len() != cols) {
        return Err(LweCipherError::DimensionMismatch(format!(
            "Row {} has length {} but expected {}",
            i,
            row.len(),
            cols
        )));
    }
    Ok(())
}

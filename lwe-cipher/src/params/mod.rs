//! Public parameters and the ciphertext bundle that carries them.

pub mod generator;

use crate::errors::LweCipherError;
use crate::ring::matrix_ops::check_shape;
use crate::ring::{Matrix, Ring, Vector};

use rand::Rng;

use serde::{Deserialize, Serialize};

pub use generator::{generate_error, generate_matrix};

/// Public parameters {A, E, q}. Decryption needs exactly the values used at encryption time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptionParams {
    /// Coefficient matrix, n×m, entries in [0, q).
    pub A: Matrix,
    /// Error vector, length m.
    pub E: Vector,
    /// Modulus.
    pub q: u64,
}

impl EncryptionParams {
    /// Draws a fresh coefficient matrix and error vector.
    pub fn generate<R: Rng + ?Sized>(
        n: usize,
        m: usize,
        ring: &Ring,
        error_bound: u64,
        rng: &mut R,
    ) -> Self {
        Self {
            A: generate_matrix(n, m, ring, rng),
            E: generate_error(m, ring, error_bound, rng),
            q: ring.modulus(),
        }
    }

    /// Returns m, the column count shared by `A` and `E`.
    pub fn column_count(&self) -> usize {
        self.E.len()
    }

    /// Checks that `A` is n×|E| and that the bundle is usable at all.
    pub fn validate(&self, n: usize) -> Result<(), LweCipherError> {
        Ring::try_with(self.q)?;

        if self.E.is_empty() {
            return Err(LweCipherError::InvalidParameters(
                "Error vector E must not be empty".to_string(),
            ));
        }

        check_shape(&self.A, n, self.E.len())
    }
}

/// Ciphertext string plus the public parameters it was produced with. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncryptedData {
    pub data: String,
    pub params: EncryptionParams,
}

impl EncryptedData {
    /// Serializes to the `{ "data": ..., "params": { "A": ..., "E": ..., "q": ... } }` wire format.
    pub fn to_json(&self) -> Result<String, LweCipherError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, LweCipherError> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generate_shapes() -> Result<(), LweCipherError> {
        let ring = Ring::try_with(2053)?;
        let mut rng = StdRng::seed_from_u64(7);
        let params = EncryptionParams::generate(4, 6, &ring, 10, &mut rng);

        assert_eq!(params.q, 2053);
        assert_eq!(params.column_count(), 6);
        params.validate(4)?;
        assert!(params.validate(5).is_err());
        Ok(())
    }

    #[test]
    fn test_validate_rejects_broken_bundles() {
        let empty_e = EncryptionParams {
            A: vec![vec![], vec![]],
            E: vec![],
            q: 2053,
        };
        assert!(matches!(
            empty_e.validate(2),
            Err(LweCipherError::InvalidParameters(_))
        ));

        let bad_q = EncryptionParams {
            A: vec![vec![1]],
            E: vec![1],
            q: 1,
        };
        assert!(matches!(
            bad_q.validate(1),
            Err(LweCipherError::InvalidModulus(_))
        ));

        let ragged = EncryptionParams {
            A: vec![vec![1, 2], vec![3]],
            E: vec![1, 2],
            q: 2053,
        };
        assert!(matches!(
            ragged.validate(2),
            Err(LweCipherError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_wire_format_field_names() -> Result<(), LweCipherError> {
        let data = EncryptedData {
            data: "WzEsMl0=".to_string(),
            params: EncryptionParams {
                A: vec![vec![1, 2]],
                E: vec![3, 4],
                q: 2053,
            },
        };

        let json = data.to_json()?;
        assert_eq!(
            json,
            r#"{"data":"WzEsMl0=","params":{"A":[[1,2]],"E":[3,4],"q":2053}}"#
        );
        assert_eq!(EncryptedData::from_json(&json)?, data);
        Ok(())
    }
}

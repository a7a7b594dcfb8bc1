//! Printable string codec for ciphertext integer sequences.
//!
//! The sequence is written as a JSON array and the resulting bytes are
//! encoded with standard padded Base64.

use crate::errors::LweCipherError;
use crate::ring::Vector;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Encodes `values` into a printable Base64 string.
///
/// # Example
///
/// ```
/// # use lwe_cipher::codec::{decode_ints, encode_ints};
/// let encoded = encode_ints(&vec![1, 2]).unwrap();
/// assert_eq!(encoded, "WzEsMl0=");
/// assert_eq!(decode_ints(&encoded).unwrap(), vec![1, 2]);
/// ```
pub fn encode_ints(values: &Vector) -> Result<String, LweCipherError> {
    let json = serde_json::to_vec(values)?;

    Ok(STANDARD.encode(json))
}

/// Reverses [`encode_ints`].
///
/// # Errors
///
/// Returns `LweCipherError::MalformedCiphertext` when the string is not Base64
/// or does not hold a JSON integer array.
pub fn decode_ints(encoded: &str) -> Result<Vector, LweCipherError> {
    let bytes = STANDARD.decode(encoded.trim()).map_err(|e| {
        LweCipherError::MalformedCiphertext(format!("Base64 decoding failed: {}", e))
    })?;

    serde_json::from_slice(&bytes).map_err(|e| {
        LweCipherError::MalformedCiphertext(format!("Ciphertext payload is not an integer array: {}", e))
    })
}

//! Applies the derived vector to message code points and back.
//!
//! Round-trip fidelity holds only for characters whose code point is below q;
//! larger code points are reduced modulo q on the way in and cannot be recovered.

use crate::config::CharsetPolicy;
use crate::errors::LweCipherError;
use crate::ring::{Ring, Vector};

/// `cipher[i] = (codepoint mod q + b[i mod |b|]) mod q` for every character of `message`.
pub fn encode(
    message: &str,
    b: &Vector,
    ring: &Ring,
    policy: CharsetPolicy,
) -> Result<Vector, LweCipherError> {
    if b.is_empty() {
        return Err(LweCipherError::DimensionMismatch(
            "Derived vector b must not be empty".to_string(),
        ));
    }

    message
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let code = ch as u32 as u64;
            if policy == CharsetPolicy::Reject && code >= ring.modulus() {
                return Err(LweCipherError::Validation(format!(
                    "Character {:?} at position {} has code point {} >= modulus {}",
                    ch,
                    i,
                    code,
                    ring.modulus()
                )));
            }

            Ok(ring.add(code as i64, b[i % b.len()]))
        })
        .collect()
}

/// `code[i] = (cipher[i] - b[i mod |b|]) mod q`. Returns raw code points, not yet validated as `char`s.
pub fn decode_code_points(
    cipher: &[i64],
    b: &Vector,
    ring: &Ring,
) -> Result<Vec<u32>, LweCipherError> {
    if b.is_empty() {
        return Err(LweCipherError::DimensionMismatch(
            "Derived vector b must not be empty".to_string(),
        ));
    }

    cipher
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let code = ring.sub(c, b[i % b.len()]);
            u32::try_from(code).map_err(|_| {
                LweCipherError::MalformedCiphertext(format!(
                    "Recovered value {} at position {} is not a code point",
                    code, i
                ))
            })
        })
        .collect()
}

/// Reverses [`encode`] and reassembles the characters in order.
pub fn decode(cipher: &[i64], b: &Vector, ring: &Ring) -> Result<String, LweCipherError> {
    decode_code_points(cipher, b, ring)?
        .into_iter()
        .enumerate()
        .map(|(i, code)| {
            char::from_u32(code).ok_or_else(|| {
                LweCipherError::MalformedCiphertext(format!(
                    "Recovered value {} at position {} is not a valid character",
                    code, i
                ))
            })
        })
        .collect()
}

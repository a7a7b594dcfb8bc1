#[derive(thiserror::Error, Debug)]
pub enum LweCipherError {
    /// No password was given and the lock session is closed.
    #[error("MissingPassword: no password supplied and the lock is closed")]
    MissingPassword,
    /// The password failed to decrypt the reference ciphertext to printable text.
    #[error("Authentication: password does not match the reference ciphertext")]
    Authentication,
    /// A message character cannot be represented under the configured modulus.
    #[error("Validation: {0}")]
    Validation(String),

    #[error("InvalidModulus: {0}")]
    InvalidModulus(String),
    #[error("InvalidParameters: {0}")]
    InvalidParameters(String),
    #[error("DimensionMismatch: {0}")]
    DimensionMismatch(String),
    #[error("MalformedCiphertext: {0}")]
    MalformedCiphertext(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Base64 decoding: {0}")]
    Base64Error(#[from] base64::DecodeError),
}

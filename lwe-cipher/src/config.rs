//! Engine configuration.
//!
//! Loaded from JSON; every missing field falls back to the [`crate::preset`] value.

use crate::errors::LweCipherError;
use crate::preset::{
    DEFAULT_AUTH_CHAR_BOUND, DEFAULT_COLUMN_COUNT, DEFAULT_ERROR_BOUND, DEFAULT_MODULUS,
    DEFAULT_SECRET_LEN,
};

use serde::{Deserialize, Serialize};

/// What to do with message characters whose code point is `>= q`.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharsetPolicy {
    /// Reduce the code point modulo q. Lossy: such characters do not survive a round trip.
    #[default]
    Wrap,
    /// Refuse to encrypt with `LweCipherError::Validation`.
    Reject,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Secret vector length n, also the coefficient matrix row count.
    pub secret_len: usize,
    /// Coefficient matrix column count m, also the error vector length.
    pub column_count: usize,
    /// Modulus q.
    pub modulus: u64,
    /// Exclusive upper bound of raw error vector entries.
    pub error_bound: u64,
    /// Highest code point a reference plaintext may contain for lock verification to pass.
    pub auth_char_bound: u32,
    pub charset_policy: CharsetPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            secret_len: DEFAULT_SECRET_LEN,
            column_count: DEFAULT_COLUMN_COUNT,
            modulus: DEFAULT_MODULUS,
            error_bound: DEFAULT_ERROR_BOUND,
            auth_char_bound: DEFAULT_AUTH_CHAR_BOUND,
            charset_policy: CharsetPolicy::Wrap,
        }
    }
}

impl EngineConfig {
    /// Builds a config with the given dimensions and modulus, defaults elsewhere.
    pub fn with_dimensions(secret_len: usize, column_count: usize, modulus: u64) -> Self {
        Self {
            secret_len,
            column_count,
            modulus,
            ..Self::default()
        }
    }

    /// Parses a JSON document such as `{"modulus": 4099, "charset_policy": "reject"}`.
    pub fn from_json(json: &str) -> Result<Self, LweCipherError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), LweCipherError> {
        if self.secret_len == 0 {
            return Err(LweCipherError::InvalidParameters(
                "Secret length n must be > 0".to_string(),
            ));
        }

        if self.column_count == 0 {
            return Err(LweCipherError::InvalidParameters(
                "Column count m must be > 0".to_string(),
            ));
        }

        if self.modulus <= 1 {
            return Err(LweCipherError::InvalidModulus(format!(
                "Modulus must be greater than 1, got {}",
                self.modulus
            )));
        }

        if self.error_bound == 0 {
            return Err(LweCipherError::InvalidParameters(
                "Error bound must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

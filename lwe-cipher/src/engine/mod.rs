//! # Encryption Engine
//!
//! Orchestrates secret resolution, parameter generation, the derived vector
//! and the character transform, and owns the lock session.
//!
//! All operations take `&self`. Matrix, error vector and modulus are passed
//! by value through each call, so `decrypt` never touches engine state and
//! one engine can be shared across threads. Only the lock session is
//! mutable; it sits behind a `Mutex`.

use crate::cipher::transform::decode_code_points;
use crate::cipher::{compute_b, decode, encode};
use crate::codec::{decode_ints, encode_ints};
use crate::config::EngineConfig;
use crate::errors::LweCipherError;
use crate::lock::SessionLock;
use crate::params::{EncryptedData, EncryptionParams};
use crate::ring::{Ring, Vector};
use crate::secret::{password_digest, reduce_digest};

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::Rng;

use zeroize::Zeroizing;

#[derive(Debug)]
pub struct EncryptionEngine {
    config: EngineConfig,
    ring: Ring,
    lock: Mutex<SessionLock>,
}

impl EncryptionEngine {
    pub fn try_with(config: EngineConfig) -> Result<Self, LweCipherError> {
        config.validate()?;
        let ring = Ring::try_with(config.modulus)?;

        Ok(Self {
            config,
            ring,
            lock: Mutex::new(SessionLock::new()),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Encrypts `message` with fresh randomness from `rand::rng()`.
    ///
    /// See [`EncryptionEngine::encrypt_with_rng`].
    pub fn encrypt(
        &self,
        message: &str,
        password: Option<&str>,
        params: Option<&EncryptionParams>,
    ) -> Result<EncryptedData, LweCipherError> {
        self.encrypt_with_rng(message, password, params, &mut rand::rng())
    }

    /// Encrypts `message`.
    ///
    /// The secret comes from `password` when given, otherwise from the open
    /// lock session. When `params` is given its A and E are used verbatim and
    /// `rng` is not touched; otherwise a new matrix and error vector are drawn.
    ///
    /// # Errors
    /// * `MissingPassword` - no password and the lock is closed or expired.
    /// * `InvalidParameters` - supplied `params.q` differs from the engine modulus. Stricter
    ///   than plain verbatim reuse: the secret and charset check are bound to the engine's q.
    /// * `DimensionMismatch` - supplied A is not n×|E|.
    /// * `Validation` - a character is `>= q` under `CharsetPolicy::Reject`.
    pub fn encrypt_with_rng<R: Rng + ?Sized>(
        &self,
        message: &str,
        password: Option<&str>,
        params: Option<&EncryptionParams>,
        rng: &mut R,
    ) -> Result<EncryptedData, LweCipherError> {
        let digest = self.resolve_digest(password)?;
        let secret = reduce_digest(&digest, &self.ring, self.config.secret_len);

        let params = match params {
            Some(supplied) => {
                if supplied.q != self.ring.modulus() {
                    return Err(LweCipherError::InvalidParameters(format!(
                        "Supplied modulus {} does not match engine modulus {}",
                        supplied.q,
                        self.ring.modulus()
                    )));
                }
                supplied.validate(self.config.secret_len)?;
                supplied.clone()
            }
            None => EncryptionParams::generate(
                self.config.secret_len,
                self.config.column_count,
                &self.ring,
                self.config.error_bound,
                rng,
            ),
        };

        let b = compute_b(&secret, &params.A, &params.E, &self.ring)?;
        let cipher = encode(message, &b, &self.ring, self.config.charset_policy)?;

        tracing::debug!(
            n = params.A.len(),
            m = params.column_count(),
            q = params.q,
            chars = cipher.len(),
            "message encrypted"
        );

        Ok(EncryptedData {
            data: encode_ints(&cipher)?,
            params,
        })
    }

    /// Decrypts `encrypted` using the A, E and q it carries.
    ///
    /// # Errors
    /// * `MissingPassword` - no password and the lock is closed or expired.
    /// * `DimensionMismatch` / `InvalidModulus` - the carried params are inconsistent.
    /// * `MalformedCiphertext` - the data string cannot be decoded.
    pub fn decrypt(
        &self,
        encrypted: &EncryptedData,
        password: Option<&str>,
    ) -> Result<String, LweCipherError> {
        let (ring, b) = self.derived_vector(encrypted, password)?;
        let cipher = decode_ints(&encrypted.data)?;

        tracing::debug!(
            n = encrypted.params.A.len(),
            m = encrypted.params.column_count(),
            q = ring.modulus(),
            chars = cipher.len(),
            "message decrypted"
        );

        decode(&cipher, &b, &ring)
    }

    /// Verifies `password` against `reference` and opens the lock for `minutes`.
    pub fn open_lock(
        &self,
        minutes: u64,
        password: &str,
        reference: &EncryptedData,
    ) -> Result<(), LweCipherError> {
        let secs = minutes.checked_mul(60).ok_or_else(|| {
            LweCipherError::InvalidParameters(format!("Lock duration of {} minutes is out of range", minutes))
        })?;

        self.open_lock_for(Duration::from_secs(secs), password, reference)
    }

    /// Verifies `password` against `reference` and opens the lock for `ttl`.
    ///
    /// Verification decrypts `reference` with the candidate secret and fails with
    /// `Authentication` if any code point exceeds `auth_char_bound`. An empty
    /// reference is also refused with `Authentication`, departing from the plain
    /// "no code point above the bound" rule, because it would accept every password.
    /// On failure the current lock state is left as it was.
    pub fn open_lock_for(
        &self,
        ttl: Duration,
        password: &str,
        reference: &EncryptedData,
    ) -> Result<(), LweCipherError> {
        reference.params.validate(self.config.secret_len)?;
        let ring = Ring::try_with(reference.params.q)?;

        let digest = password_digest(password);
        let candidate = reduce_digest(&digest, &ring, self.config.secret_len);
        let b = compute_b(&candidate, &reference.params.A, &reference.params.E, &ring)?;
        let codes = decode_code_points(&decode_ints(&reference.data)?, &b, &ring)?;

        let bound = self.config.auth_char_bound;
        if codes.is_empty() || codes.iter().any(|&code| code > bound) {
            tracing::warn!("lock authentication failed");
            return Err(LweCipherError::Authentication);
        }

        self.session().open(digest, ttl)
    }

    pub fn close_lock(&self) {
        self.session().close();
    }

    pub fn is_lock_open(&self) -> bool {
        self.session().is_open()
    }

    /// Time left before the lock closes by itself, `None` when closed.
    pub fn lock_expires_in(&self) -> Option<Duration> {
        self.session().expires_in()
    }

    fn derived_vector(
        &self,
        encrypted: &EncryptedData,
        password: Option<&str>,
    ) -> Result<(Ring, Vector), LweCipherError> {
        let digest = self.resolve_digest(password)?;

        let params = &encrypted.params;
        let ring = Ring::try_with(params.q)?;
        params.validate(self.config.secret_len)?;
        let secret = reduce_digest(&digest, &ring, self.config.secret_len);
        let b = compute_b(&secret, &params.A, &params.E, &ring)?;

        Ok((ring, b))
    }

    /// Password digest from `password`, else from the open lock. Reduction mod q happens per call.
    fn resolve_digest(&self, password: Option<&str>) -> Result<Zeroizing<Vec<u8>>, LweCipherError> {
        match password {
            Some(password) => Ok(password_digest(password)),
            None => self.session().digest().ok_or(LweCipherError::MissingPassword),
        }
    }

    fn session(&self) -> MutexGuard<'_, SessionLock> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

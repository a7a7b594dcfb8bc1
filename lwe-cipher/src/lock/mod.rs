//! Time-boxed lock session caching a verified secret.
//!
//! Expiry is evaluated lazily: nothing runs in the background, every read
//! first compares the monotonic clock against the deadline and closes the
//! session if it has passed.

use crate::errors::LweCipherError;

use std::time::{Duration, Instant};

use zeroize::Zeroizing;

#[derive(Default)]
enum LockState {
    #[default]
    Closed,
    Open {
        expires_at: Instant,
        digest: Zeroizing<Vec<u8>>,
    },
}

/// Two-state machine: `Closed` (initial) and `Open` (until `close` or expiry).
#[derive(Default)]
pub struct SessionLock {
    state: LockState,
}

impl std::fmt::Debug for SessionLock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.state {
            LockState::Closed => f.write_str("SessionLock::Closed"),
            LockState::Open { expires_at, .. } => f
                .debug_struct("SessionLock::Open")
                .field("expires_at", expires_at)
                .finish_non_exhaustive(),
        }
    }
}

impl SessionLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Caches the password `digest` until `now + ttl`, replacing any previous session.
    ///
    /// The raw digest bytes are kept, not a reduced secret, so each later call
    /// can reduce them under its own modulus.
    pub fn open(&mut self, digest: Zeroizing<Vec<u8>>, ttl: Duration) -> Result<(), LweCipherError> {
        self.open_at(digest, ttl, Instant::now())
    }

    fn open_at(
        &mut self,
        digest: Zeroizing<Vec<u8>>,
        ttl: Duration,
        now: Instant,
    ) -> Result<(), LweCipherError> {
        let expires_at = now.checked_add(ttl).ok_or_else(|| {
            LweCipherError::InvalidParameters(format!("Lock duration {:?} is out of range", ttl))
        })?;

        self.state = LockState::Open {
            expires_at,
            digest,
        };
        tracing::info!(ttl_secs = ttl.as_secs(), "lock opened");

        Ok(())
    }

    /// Drops the cached secret unconditionally.
    pub fn close(&mut self) {
        if matches!(self.state, LockState::Open { .. }) {
            tracing::info!("lock closed");
        }
        self.state = LockState::Closed;
    }

    pub fn is_open(&mut self) -> bool {
        self.refresh(Instant::now());
        matches!(self.state, LockState::Open { .. })
    }

    /// Time left before the session expires, `None` when closed.
    pub fn expires_in(&mut self) -> Option<Duration> {
        let now = Instant::now();
        self.refresh(now);
        match &self.state {
            LockState::Open { expires_at, .. } => Some(expires_at.saturating_duration_since(now)),
            LockState::Closed => None,
        }
    }

    /// Returns a copy of the cached digest bytes, or `None` when closed or expired.
    pub fn digest(&mut self) -> Option<Zeroizing<Vec<u8>>> {
        self.refresh(Instant::now());
        match &self.state {
            LockState::Open { digest, .. } => Some(digest.clone()),
            LockState::Closed => None,
        }
    }

    fn refresh(&mut self, now: Instant) {
        if let LockState::Open { expires_at, .. } = &self.state {
            if now > *expires_at {
                tracing::warn!("lock session expired");
                self.state = LockState::Closed;
            }
        }
    }
}

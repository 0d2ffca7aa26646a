//! Cross-cycle session state.
//!
//! The only mutable state that outlives a wake cycle: retry counters and the
//! time of the last successful update. The firmware keeps the encoded form in
//! RTC memory across deep sleep; the continuously-running variant just holds
//! the struct.

use serde::{Deserialize, Serialize};
use thiserror_no_std::Error;

/// Size of the RTC-memory slot reserved for the encoded session.
pub const SESSION_BYTES: usize = 64;

/// Leading tag telling a stored session apart from cold-boot garbage.
const SESSION_MAGIC: u16 = 0x1D4B;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    #[error("session does not fit in the RTC slot")]
    Encode,
    #[error("stored session is corrupt")]
    Decode,
    #[error("no session stored")]
    Missing,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    /// WiFi association failures since the last successful cycle.
    pub wifi_failures: u32,
    /// Cycles in a row where at least one enabled feed failed.
    pub fetch_failures: u32,
    /// Unix seconds of the last cycle that rendered the dashboard.
    pub last_update_secs: Option<u64>,
    /// Completed cycles since cold boot.
    pub cycles: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a failed association. Returns the new failure count.
    pub fn record_wifi_failure(&mut self) -> u32 {
        self.wifi_failures = self.wifi_failures.saturating_add(1);
        self.wifi_failures
    }

    pub fn record_fetch_failure(&mut self) -> u32 {
        self.fetch_failures = self.fetch_failures.saturating_add(1);
        self.fetch_failures
    }

    /// The network was reached and the dashboard rendered, though some
    /// feeds may have failed.
    pub fn mark_connected(&mut self, now_secs: Option<u64>) {
        self.wifi_failures = 0;
        if now_secs.is_some() {
            self.last_update_secs = now_secs;
        }
    }

    /// Clear every counter after a cycle where all enabled feeds arrived.
    pub fn reset_on_success(&mut self, now_secs: Option<u64>) {
        self.mark_connected(now_secs);
        self.fetch_failures = 0;
    }

    /// Seconds since the last rendered dashboard, when both times are known
    /// and the clock has not stepped backwards.
    pub fn secs_since_update(&self, now_secs: Option<u64>) -> Option<u64> {
        now_secs?.checked_sub(self.last_update_secs?)
    }

    /// Marks the end of a cycle, whatever its outcome.
    pub fn finish_cycle(&mut self) {
        self.cycles = self.cycles.wrapping_add(1);
    }

    /// Encode into `buf`, returning the used prefix.
    pub fn store<'b>(&self, buf: &'b mut [u8]) -> Result<&'b mut [u8], SessionError> {
        postcard::to_slice(&(SESSION_MAGIC, self), buf).map_err(|_| SessionError::Encode)
    }

    pub fn load(bytes: &[u8]) -> Result<Self, SessionError> {
        let (magic, state): (u16, Self) =
            postcard::from_bytes(bytes).map_err(|_| SessionError::Decode)?;
        if magic != SESSION_MAGIC {
            return Err(SessionError::Missing);
        }
        Ok(state)
    }

    /// Load a stored session, starting fresh when there is none.
    pub fn restore(bytes: &[u8]) -> Self {
        match Self::load(bytes) {
            Ok(state) => state,
            Err(err) => {
                log::info!("Starting a fresh session: {}", err);
                Self::default()
            }
        }
    }
}

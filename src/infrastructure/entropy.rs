//! OS randomness and wall clock

use rand::rngs::OsRng;
use rand::RngCore;

use crate::domain::ports::{Clock, EntropySource};

/// Random bytes from the operating system CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill_bytes(&self, dest: &mut [u8]) {
        OsRng.fill_bytes(dest);
    }
}

/// Wall clock backed by `chrono::Utc`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        // Pre-epoch clocks clamp to zero rather than wrapping.
        u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
    }
}

//! Randomness and time ports used for token issuance

/// Source of cryptographically strong random bytes
pub trait EntropySource {
    fn fill_bytes(&self, dest: &mut [u8]);
}

/// Wall clock
pub trait Clock {
    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> u64;
}

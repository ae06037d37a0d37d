//! Verification token
//!
//! Format: `TASKMASTER-<RANDOM>-<TIMESTAMP>` where `RANDOM` is 4 random bytes
//! as 8 uppercase hex digits and `TIMESTAMP` is the issue time in
//! milliseconds since the Unix epoch, written in uppercase base 36.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::ports::{Clock, EntropySource};

/// Literal prefix of every token
pub const TOKEN_PREFIX: &str = "TASKMASTER";

/// Number of random bytes in a token
pub const RANDOM_BYTES: usize = 4;

/// Width of the hex-encoded random segment
pub const RANDOM_HEX_WIDTH: usize = RANDOM_BYTES * 2;

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Reasons a string is not a well-formed token
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token must start with 'TASKMASTER-'")]
    MissingPrefix,

    #[error("random segment must be 8 uppercase hex digits")]
    InvalidRandom,

    #[error("timestamp segment must be one or more uppercase base-36 digits")]
    InvalidTimestamp,
}

/// One-time credential issued on a fully passing run
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VerificationToken(String);

impl VerificationToken {
    /// Issue a fresh token from the given entropy source and clock
    pub fn issue<E, C>(entropy: &E, clock: &C) -> Self
    where
        E: EntropySource + ?Sized,
        C: Clock + ?Sized,
    {
        let timestamp_ms = clock.now_millis();
        let mut random = [0u8; RANDOM_BYTES];
        entropy.fill_bytes(&mut random);
        Self::from_parts(random, timestamp_ms)
    }

    /// Compose a token from its raw parts
    pub fn from_parts(random: [u8; RANDOM_BYTES], timestamp_ms: u64) -> Self {
        let random_hex: String = random.iter().map(|b| format!("{:02X}", b)).collect();
        Self(format!(
            "{}-{}-{}",
            TOKEN_PREFIX,
            random_hex,
            to_base36_upper(timestamp_ms)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 8-digit hex segment
    pub fn random_segment(&self) -> &str {
        let start = TOKEN_PREFIX.len() + 1;
        &self.0[start..start + RANDOM_HEX_WIDTH]
    }

    /// The base-36 timestamp segment
    pub fn timestamp_segment(&self) -> &str {
        &self.0[TOKEN_PREFIX.len() + RANDOM_HEX_WIDTH + 2..]
    }

    /// Decode the timestamp segment back to milliseconds
    pub fn timestamp_millis(&self) -> Option<u64> {
        u64::from_str_radix(self.timestamp_segment(), 36).ok()
    }

    /// Find the first well-formed token embedded in free text.
    ///
    /// The timestamp segment is taken greedily up to the first character
    /// outside `[0-9A-Z]`.
    pub fn find_in(text: &str) -> Option<Self> {
        text.match_indices(TOKEN_PREFIX).find_map(|(idx, _)| {
            let rest = &text[idx..];
            let end = token_len(rest)?;
            Some(Self(rest[..end].to_string()))
        })
    }
}

impl fmt::Display for VerificationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for VerificationToken {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix(TOKEN_PREFIX)
            .and_then(|r| r.strip_prefix('-'))
            .ok_or(TokenError::MissingPrefix)?;

        let (random, timestamp) = match rest.split_once('-') {
            Some(parts) => parts,
            None => return Err(TokenError::InvalidRandom),
        };

        if random.len() != RANDOM_HEX_WIDTH || !random.bytes().all(is_upper_hex) {
            return Err(TokenError::InvalidRandom);
        }
        if timestamp.is_empty() || !timestamp.bytes().all(is_upper_base36) {
            return Err(TokenError::InvalidTimestamp);
        }

        Ok(Self(s.to_string()))
    }
}

/// Encode `n` in base 36 with uppercase digits (`0` encodes as `"0"`)
pub fn to_base36_upper(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while n > 0 {
        digits.push(BASE36_DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    digits.into_iter().map(char::from).collect()
}

fn is_upper_hex(b: u8) -> bool {
    b.is_ascii_digit() || (b'A'..=b'F').contains(&b)
}

fn is_upper_base36(b: u8) -> bool {
    b.is_ascii_digit() || b.is_ascii_uppercase()
}

/// Length of the well-formed token at the start of `s`, if any
fn token_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut pos = TOKEN_PREFIX.len();
    if bytes.get(pos) != Some(&b'-') {
        return None;
    }
    pos += 1;

    let random = bytes.get(pos..pos + RANDOM_HEX_WIDTH)?;
    if !random.iter().copied().all(is_upper_hex) {
        return None;
    }
    pos += RANDOM_HEX_WIDTH;

    if bytes.get(pos) != Some(&b'-') {
        return None;
    }
    pos += 1;

    let ts_len = bytes[pos..]
        .iter()
        .take_while(|b| is_upper_base36(**b))
        .count();
    if ts_len == 0 {
        return None;
    }
    Some(pos + ts_len)
}

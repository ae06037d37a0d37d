//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O: spawning commands, stat calls, OS randomness.
//!
//! ## Structure
//!
//! - `probes/` - Process- and filesystem-backed probes
//! - `entropy` - OS random source and system clock

pub mod entropy;
pub mod probes;

// Re-export for convenience
pub use entropy::{OsEntropy, SystemClock};
pub use probes::{CommandVersionProbe, GitIdentityProbe, LocalPathProbe};

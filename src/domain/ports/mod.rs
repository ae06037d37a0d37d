//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod entropy;
pub mod probe;

pub use entropy::{Clock, EntropySource};
pub use probe::{Identity, IdentityProbe, PathProbe, ProbeError, ProbeResult, VersionProbe};

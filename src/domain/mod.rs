//! Domain Layer
//!
//! Pure types for an environment verification run, without I/O.
//!
//! ## Structure
//!
//! - `check` - Check records and the aggregated `CheckRun`
//! - `token` - The `VerificationToken` issued on success
//! - `ports/` - Interface definitions for probes, entropy and time
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never spawns processes or touches the file system
//! 2. **Ports & Adapters** - All environment access goes through trait-defined ports

pub mod check;
pub mod ports;
pub mod token;

pub use check::{Check, CheckRun, CheckStatus};
pub use token::{TokenError, VerificationToken};

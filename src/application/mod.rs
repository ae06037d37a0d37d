//! Application Layer
//!
//! Use cases that orchestrate a verification run.
//! This layer:
//! - Depends on Domain layer (check records, token, ports)
//! - Never spawns processes itself; all I/O goes through probes
//!
//! ## Use Cases
//!
//! - `VerifyUseCase` - Runs the checks, aggregates, and issues a token
//!
//! ## Services
//!
//! - `checks` - The individual check predicates

pub mod checks;
pub mod verify;

pub use checks::{parse_major, CheckKind};
pub use verify::{ProbeSet, VerifyOutcome, VerifyUseCase};

//! Verify Module
//!
//! Runs the environment checks and issues a token when every check passes.
//!
//! ## Structure
//!
//! - `result` - Outcome of a run (`VerifyOutcome`)
//! - `use_case` - Runner and aggregator (`VerifyUseCase`, `ProbeSet`)
//!
//! ## Usage
//!
//! ```ignore
//! use taskmaster_verify::application::verify::VerifyUseCase;
//!
//! let use_case = VerifyUseCase::new(probes, OsEntropy, SystemClock);
//! let outcome = use_case.execute();
//! std::process::exit(outcome.exit_code());
//! ```

mod result;
mod use_case;

pub use result::VerifyOutcome;
pub use use_case::{ProbeSet, VerifyUseCase};

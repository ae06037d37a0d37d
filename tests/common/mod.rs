//! Common test utilities for taskmaster-verify CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated project, home and `PATH` directories
//! - Fake probe scripts standing in for `node`, `npm` and `git`

pub mod env;

pub use env::*;

//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//!
//! ## Usage
//!
//! ```ignore
//! use taskmaster_verify::presentation::factory;
//!
//! let use_case = factory::create_verify_use_case(&project_root);
//! let outcome = use_case.execute();
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::create_verify_use_case;

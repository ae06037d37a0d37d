//! Command implementations for the verifier binary

mod project_root;
pub mod verify;

pub use verify::cmd_verify;

//! Probe implementations
//!
//! - `CommandVersionProbe` - `<program> --version`
//! - `GitIdentityProbe` - `git config user.name` / `git config user.email`
//! - `LocalPathProbe` - existence checks under the project root

mod command;
mod identity;
mod path;
mod version;

pub use command::run_command;
pub use identity::GitIdentityProbe;
pub use path::LocalPathProbe;
pub use version::CommandVersionProbe;

//! CLI command implementations.
//!
//! - **resolve**: run the cipher cascade on a ciphertext and report the outcome
//! - **init**: write a default `.cipherid.toml`

pub mod init;
pub mod resolve;

pub use init::{init_config, init_config_in};
pub use resolve::{resolve_command, ResolveConfig, ResolveStatus};

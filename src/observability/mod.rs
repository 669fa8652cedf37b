//! Observability infrastructure for resolution diagnostics.
//!
//! The cascade narrates what it is doing through [`ResolutionEvent`]s sent
//! to a [`ResolutionObserver`]. The default observer forwards them to
//! `tracing`; tests attach a [`RecordingObserver`] and assert on the
//! sequence instead of on formatted log text.
//!
//! ## Usage
//!
//! Install logging at application startup:
//!
//! ```ignore
//! use cipherid::observability::init_tracing;
//!
//! fn main() {
//!     init_tracing();
//!     // ... rest of application
//! }
//! ```

pub mod events;

pub use events::{
    RecordingObserver, ResolutionEvent, ResolutionObserver, ResolutionState, TracingObserver,
};

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "CIPHERID_LOG";

/// Install a stderr `tracing` subscriber filtered by `CIPHERID_LOG`
/// (default `warn`). Safe to call more than once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

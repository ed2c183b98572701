//! envcheck-core: shared foundation for the envcheck workspace.
//!
//! Configuration, per-subsystem errors, check lifecycle events, tracing
//! setup, and constants. No analysis logic lives here.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

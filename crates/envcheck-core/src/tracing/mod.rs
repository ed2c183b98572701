//! Observability for envcheck.
//! `tracing` crate with `EnvFilter`, read from `ENVCHECK_LOG`.

pub mod setup;

pub use setup::init_tracing;

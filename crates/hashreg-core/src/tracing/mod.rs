//! Observability for hashreg.
//! `tracing` crate with `EnvFilter`, configured through `HASHREG_LOG`.

pub mod setup;

pub use setup::init_tracing;

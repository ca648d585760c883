//! Shared error taxonomy for the Scyther GUI wrapper.
//!
//! The wrapper drives an external security-protocol verification backend,
//! and every failure it can signal is a case of [`ScytherError`]: backend
//! diagnostics, malformed input, a missing or unconfigured executable, an
//! unsupported platform, or an argument that was not a (list of) string.
//! Detection lives elsewhere -- this crate only carries the categories,
//! their fields, and their display strings, so one boundary (typically the
//! presentation layer) can catch and report any of them.

pub mod error;

pub use error::{Result, ScytherError};

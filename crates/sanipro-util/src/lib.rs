//! Shared utilities for sanipro.
//!
//! This crate provides cross-cutting concerns used by the other sanipro
//! crates: the error type, data directory helpers, and terminal status
//! output.

pub mod errors;
pub mod fs;
pub mod progress;

//! Core data types for sanipro.
//!
//! This crate defines the prompt model (tokens and delimiters), the two
//! prompt parsers, the [`filter::Filter`] trait implemented by every
//! filter, the [`pipeline::Pipeline`] that chains them, and the global
//! configuration file.
//!
//! This crate is intentionally free of terminal I/O.

/// Default strength of a token written without weighting syntax.
pub const DEFAULT_STRENGTH: f64 = 1.0;

pub mod config;
pub mod delimiter;
pub mod filter;
pub mod lcg;
pub mod parser;
pub mod pipeline;
pub mod similarity;
pub mod token;

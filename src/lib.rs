//! `finops-synth` library crate.
//!
//! The binary (`finops`) is a thin wrapper around this library so that:
//!
//! - the generator and processor are testable without spawning processes
//! - each stage can be driven on its own (or from other tools)

pub mod app;
pub mod cli;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod report;

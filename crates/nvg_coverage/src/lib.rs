#![forbid(unsafe_code)]

//! Combinatorial API coverage generator for the NanoVG Vulkan backend.
//!
//! A [`registry::Registry`] lists API functions and representative argument
//! variants. For every `(function, variant)` pair the generator writes one
//! standalone C program exercising that call inside a rendering frame, then
//! an aggregate shell script that builds and runs each program and tallies
//! pass/fail counts.

pub mod call;
pub mod catalog;
pub mod classify;
pub mod cli;
pub mod emit;
pub mod error;
pub mod generate;
pub mod literal;
pub mod registry;
pub mod runner;
pub mod snippet;
pub mod unit;
pub mod util;

pub use cli::run_from_env;
pub use error::{CoverageError, Result};

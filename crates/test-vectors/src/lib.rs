//! # eip2537-test-vectors
//!
//! JSON test vectors for the EIP-2537 precompiles, in the format used by the
//! go-ethereum precompile tests, with a runner and a throughput reporter.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]

mod bench;
mod error;
mod runner;
mod vector;

pub use bench::*;
pub use error::*;
pub use runner::*;
pub use vector::*;

//! # eip2537-precompile
//!
//! [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537) BLS12-381 precompiles.
//!
//! Every operation decodes its input with the EIP-2537 fixed-width encoding,
//! validates curve and subgroup membership as the EIP requires, hands the
//! operands to an [`ArithmeticEngine`](bls12_381::ArithmeticEngine) and encodes
//! the result. The default engine is backed by [`blst`].
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub mod bls12_381;
pub mod bls12_381_const;
pub mod bls12_381_utils;
pub mod error;
pub mod id;
pub mod interface;

pub use bls12_381::{precompiles, ArithmeticEngine, BlstEngine, MsmAlgorithm};
pub use error::*;
pub use id::PrecompileId;
pub use interface::*;

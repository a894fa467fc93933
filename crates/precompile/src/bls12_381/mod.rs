//! BLS12-381 precompiles added in [`EIP-2537`](https://eips.ethereum.org/EIPS/eip-2537)
//! For more details check modules for each precompile.
use crate::{Precompile, PrecompileId};

mod blst;
pub mod engine;
mod g1;
pub mod g1_add;
pub mod g1_msm;
pub mod g1_mul;
mod g2;
pub mod g2_add;
pub mod g2_msm;
pub mod g2_mul;
pub mod map_fp2_to_g2;
pub mod map_fp_to_g1;
mod msm;
pub mod pairing;
#[cfg(test)]
pub(crate) mod test_utils;
pub mod types;
pub mod utils;
pub mod validation;

pub use self::blst::BlstEngine;
pub use engine::{ArithmeticEngine, MsmAlgorithm};
pub use types::{Fp, Fp2, G1Point, G1PointScalar, G2Point, G2PointScalar, PairingPair, Scalar};
pub use utils::{exact_input, input_items, InputLength};
pub use validation::PointChecks;

/// Returns every EIP-2537 precompile, in [`PrecompileId::ALL`] order.
pub fn precompiles() -> impl Iterator<Item = Precompile> {
    PrecompileId::ALL.into_iter().map(|id| id.precompile())
}

//! BLS12-381 map fp to g1 precompile. More details in [`map_fp_to_g1`]
use super::utils::exact_input;
use super::{ArithmeticEngine, Fp};
use crate::bls12_381_const::{G1_OUTPUT_LENGTH, MAP_FP_TO_G1_INPUT_LENGTH};
use crate::{Eip2537Error, Precompile, PrecompileId, PrecompileOutput, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_MAP_FP_TO_G1 precompile.
pub const PRECOMPILE: Precompile = Precompile::new(PrecompileId::Bls12MapFpToG1, run);

fn run(input: &[u8], engine: &dyn ArithmeticEngine) -> PrecompileResult {
    let out = map_fp_to_g1(input, engine)?;
    let gas = PRECOMPILE.id().required_gas(input.len());
    Ok(PrecompileOutput::new(gas, out.into()))
}

/// Field-to-curve call expects 64 bytes as an input that is interpreted as an
/// element of Fp. Output of this call is 128 bytes and is an encoded G1 point.
///
/// Every canonical element, zero included, maps to a subgroup point.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-mapping-fp-element-to-g1-point>
pub fn map_fp_to_g1(
    input: &[u8],
    engine: &dyn ArithmeticEngine,
) -> Result<[u8; G1_OUTPUT_LENGTH], Eip2537Error> {
    let input = exact_input::<MAP_FP_TO_G1_INPUT_LENGTH>(input)?;
    let fp = Fp::decode(input)?;
    Ok(engine.map_fp_to_g1(&fp).encode())
}

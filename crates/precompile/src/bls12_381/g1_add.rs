//! BLS12-381 G1 add precompile. More details in [`g1_add`]
use super::utils::{exact_input, split_item};
use super::validation::validate_g1;
use super::{ArithmeticEngine, G1Point};
use crate::bls12_381_const::{G1_ADD_INPUT_LENGTH, G1_OUTPUT_LENGTH, PADDED_G1_LENGTH};
use crate::{Eip2537Error, Precompile, PrecompileId, PrecompileOutput, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G1ADD precompile.
pub const PRECOMPILE: Precompile = Precompile::new(PrecompileId::Bls12G1Add, run);

fn run(input: &[u8], engine: &dyn ArithmeticEngine) -> PrecompileResult {
    let out = g1_add(input, engine)?;
    let gas = PRECOMPILE.id().required_gas(input.len());
    Ok(PrecompileOutput::new(gas, out.into()))
}

/// G1 addition call expects `256` bytes as an input that is interpreted as byte
/// concatenation of two G1 points (`128` bytes each).
/// Output is an encoding of addition operation result - single G1 point (`128`
/// bytes).
///
/// Inputs only need to be on the curve, no subgroup check is performed.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-addition>
pub fn g1_add(
    input: &[u8],
    engine: &dyn ArithmeticEngine,
) -> Result<[u8; G1_OUTPUT_LENGTH], Eip2537Error> {
    let input = exact_input::<G1_ADD_INPUT_LENGTH>(input)?;
    let (a, b) = split_item::<PADDED_G1_LENGTH, PADDED_G1_LENGTH>(input)?;
    let a = G1Point::decode(a)?;
    let b = G1Point::decode(b)?;

    let checks = PRECOMPILE.id().point_checks().unwrap_or_default();
    validate_g1(&a, checks, engine)?;
    validate_g1(&b, checks, engine)?;

    Ok(engine.g1_add(&a, &b).encode())
}

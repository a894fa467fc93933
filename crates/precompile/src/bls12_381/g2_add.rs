//! BLS12-381 G2 add precompile. More details in [`g2_add`]
use super::utils::{exact_input, split_item};
use super::validation::validate_g2;
use super::{ArithmeticEngine, G2Point};
use crate::bls12_381_const::{G2_ADD_INPUT_LENGTH, G2_OUTPUT_LENGTH, PADDED_G2_LENGTH};
use crate::{Eip2537Error, Precompile, PrecompileId, PrecompileOutput, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G2ADD precompile.
pub const PRECOMPILE: Precompile = Precompile::new(PrecompileId::Bls12G2Add, run);

fn run(input: &[u8], engine: &dyn ArithmeticEngine) -> PrecompileResult {
    let out = g2_add(input, engine)?;
    let gas = PRECOMPILE.id().required_gas(input.len());
    Ok(PrecompileOutput::new(gas, out.into()))
}

/// G2 addition call expects `512` bytes as an input that is interpreted as byte
/// concatenation of two G2 points (`256` bytes each).
///
/// Output is an encoding of addition operation result - single G2 point (`256`
/// bytes).
/// See also <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-addition>
pub fn g2_add(
    input: &[u8],
    engine: &dyn ArithmeticEngine,
) -> Result<[u8; G2_OUTPUT_LENGTH], Eip2537Error> {
    let input = exact_input::<G2_ADD_INPUT_LENGTH>(input)?;
    let (a, b) = split_item::<PADDED_G2_LENGTH, PADDED_G2_LENGTH>(input)?;
    let a = G2Point::decode(a)?;
    let b = G2Point::decode(b)?;

    let checks = PRECOMPILE.id().point_checks().unwrap_or_default();
    validate_g2(&a, checks, engine)?;
    validate_g2(&b, checks, engine)?;

    Ok(engine.g2_add(&a, &b).encode())
}

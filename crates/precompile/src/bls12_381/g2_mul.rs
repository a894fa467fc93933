//! BLS12-381 G2 mul precompile. More details in [`g2_mul`]
use super::utils::{exact_input, split_item};
use super::validation::validate_g2;
use super::{ArithmeticEngine, G2Point, Scalar};
use crate::bls12_381_const::{
    G2_MUL_INPUT_LENGTH, G2_OUTPUT_LENGTH, PADDED_G2_LENGTH, SCALAR_LENGTH,
};
use crate::{Eip2537Error, Precompile, PrecompileId, PrecompileOutput, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G2MUL precompile.
pub const PRECOMPILE: Precompile = Precompile::new(PrecompileId::Bls12G2Mul, run);

fn run(input: &[u8], engine: &dyn ArithmeticEngine) -> PrecompileResult {
    let out = g2_mul(input, engine)?;
    let gas = PRECOMPILE.id().required_gas(input.len());
    Ok(PrecompileOutput::new(gas, out.into()))
}

/// G2 multiplication call expects `288` bytes as an input that is interpreted as
/// byte concatenation of encoding of G2 point (`256` bytes) and encoding of a
/// scalar value (`32` bytes).
/// Output is an encoding of multiplication operation result - single G2 point
/// (`256` bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-multiplication>
pub fn g2_mul(
    input: &[u8],
    engine: &dyn ArithmeticEngine,
) -> Result<[u8; G2_OUTPUT_LENGTH], Eip2537Error> {
    let input = exact_input::<G2_MUL_INPUT_LENGTH>(input)?;
    let (point, scalar) = split_item::<PADDED_G2_LENGTH, SCALAR_LENGTH>(input)?;
    let point = G2Point::decode(point)?;
    let scalar = Scalar::decode(scalar);

    // NB: Scalar multiplications, MSMs and pairings MUST perform a subgroup check.
    let checks = PRECOMPILE.id().point_checks().unwrap_or_default();
    validate_g2(&point, checks, engine)?;

    Ok(engine.g2_mul(&(point, scalar)).encode())
}

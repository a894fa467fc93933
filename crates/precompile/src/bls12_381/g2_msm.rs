//! BLS12-381 G2 msm precompile. More details in [`g2_msm`]
use super::utils::split_item;
use super::validation::validate_g2;
use super::{ArithmeticEngine, G2Point, G2PointScalar, MsmAlgorithm, Scalar};
use crate::bls12_381_const::{
    G2_OUTPUT_LENGTH, PADDED_G2_LENGTH, SCALAR_LENGTH,
};
use crate::{Eip2537Error, Precompile, PrecompileId, PrecompileOutput, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G2MSM precompile.
pub const PRECOMPILE: Precompile = Precompile::new(PrecompileId::Bls12G2Msm, g2_msm_pippenger);

/// BLS12_G2MSM computed by multiplying every point and summing the products.
pub const NAIVE_PRECOMPILE: Precompile =
    Precompile::new(PrecompileId::Bls12G2MsmNaive, g2_msm_naive);

/// BLS12_G2MSM computed with the Bos-Coster algorithm.
pub const BOS_COSTER_PRECOMPILE: Precompile =
    Precompile::new(PrecompileId::Bls12G2MsmBosCoster, g2_msm_bos_coster);

fn g2_msm_pippenger(input: &[u8], engine: &dyn ArithmeticEngine) -> PrecompileResult {
    run(PrecompileId::Bls12G2Msm, input, engine)
}

fn g2_msm_naive(input: &[u8], engine: &dyn ArithmeticEngine) -> PrecompileResult {
    run(PrecompileId::Bls12G2MsmNaive, input, engine)
}

fn g2_msm_bos_coster(input: &[u8], engine: &dyn ArithmeticEngine) -> PrecompileResult {
    run(PrecompileId::Bls12G2MsmBosCoster, input, engine)
}

fn run(id: PrecompileId, input: &[u8], engine: &dyn ArithmeticEngine) -> PrecompileResult {
    let out = g2_msm(input, engine, id.msm_algorithm().unwrap_or_default())?;
    let gas = id.required_gas(input.len());
    Ok(PrecompileOutput::new(gas, out.into()))
}

/// Implements EIP-2537 G2MSM precompile.
/// G2 multi-scalar-multiplication call expects `288*k` bytes as an input that is interpreted
/// as byte concatenation of `k` slices each of them being a byte concatenation
/// of encoding of G2 point (`256` bytes) and encoding of a scalar value (`32`
/// bytes).
/// Output is an encoding of multi-scalar-multiplication operation result - single G2
/// point (`256` bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g2-multiexponentiation>
pub fn g2_msm(
    input: &[u8],
    engine: &dyn ArithmeticEngine,
    algorithm: MsmAlgorithm,
) -> Result<[u8; G2_OUTPUT_LENGTH], Eip2537Error> {
    let id = PRECOMPILE.id();
    let k = id.input_length().items(input)?;

    let mut pairs: Vec<G2PointScalar> = Vec::new();
    pairs.try_reserve_exact(k)?;
    for item in input.chunks_exact(id.input_length().item_width()) {
        let (point, scalar) = split_item::<PADDED_G2_LENGTH, SCALAR_LENGTH>(item)?;
        pairs.push((G2Point::decode(point)?, Scalar::decode(scalar)));
    }

    // NB: Scalar multiplications, MSMs and pairings MUST perform a subgroup check.
    let checks = id.point_checks().unwrap_or_default();
    for (point, _) in &pairs {
        validate_g2(point, checks, engine)?;
    }

    pairs.retain(|(point, scalar)| !point.is_infinity() && !scalar.is_zero());
    if pairs.is_empty() {
        return Ok(G2Point::INFINITY.encode());
    }

    Ok(engine.g2_msm(&pairs, algorithm)?.encode())
}

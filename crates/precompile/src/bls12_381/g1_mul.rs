//! BLS12-381 G1 mul precompile. More details in [`g1_mul`]
use super::utils::{exact_input, split_item};
use super::validation::validate_g1;
use super::{ArithmeticEngine, G1Point, Scalar};
use crate::bls12_381_const::{
    G1_MUL_INPUT_LENGTH, G1_OUTPUT_LENGTH, PADDED_G1_LENGTH, SCALAR_LENGTH,
};
use crate::{Eip2537Error, Precompile, PrecompileId, PrecompileOutput, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_G1MUL precompile.
pub const PRECOMPILE: Precompile = Precompile::new(PrecompileId::Bls12G1Mul, run);

fn run(input: &[u8], engine: &dyn ArithmeticEngine) -> PrecompileResult {
    let out = g1_mul(input, engine)?;
    let gas = PRECOMPILE.id().required_gas(input.len());
    Ok(PrecompileOutput::new(gas, out.into()))
}

/// G1 multiplication call expects `160` bytes as an input that is interpreted as
/// byte concatenation of encoding of G1 point (`128` bytes) and encoding of a
/// scalar value (`32` bytes).
/// Output is an encoding of multiplication operation result - single G1 point
/// (`128` bytes).
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-g1-multiplication>
pub fn g1_mul(
    input: &[u8],
    engine: &dyn ArithmeticEngine,
) -> Result<[u8; G1_OUTPUT_LENGTH], Eip2537Error> {
    let input = exact_input::<G1_MUL_INPUT_LENGTH>(input)?;
    let (point, scalar) = split_item::<PADDED_G1_LENGTH, SCALAR_LENGTH>(input)?;
    let point = G1Point::decode(point)?;
    let scalar = Scalar::decode(scalar);

    // NB: Scalar multiplications, MSMs and pairings MUST perform a subgroup check.
    let checks = PRECOMPILE.id().point_checks().unwrap_or_default();
    validate_g1(&point, checks, engine)?;

    Ok(engine.g1_mul(&(point, scalar)).encode())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bls12_381::test_utils::{
        g1_off_curve, g1_outside_subgroup, random_g1, rng, GROUP_ORDER,
    };
    use crate::bls12_381::BlstEngine;

    fn input(p: &G1Point, scalar: [u8; 32]) -> Vec<u8> {
        [&p.encode()[..], &scalar[..]].concat()
    }

    #[test]
    fn zero_scalar_gives_infinity() {
        let p = random_g1(&mut rng());
        assert_eq!(g1_mul(&input(&p, [0; 32]), &BlstEngine), Ok([0; 128]));
    }

    #[test]
    fn group_order_gives_infinity() {
        let p = random_g1(&mut rng());
        assert_eq!(g1_mul(&input(&p, GROUP_ORDER), &BlstEngine), Ok([0; 128]));
    }

    #[test]
    fn one_is_identity() {
        let p = random_g1(&mut rng());
        let mut one = [0; 32];
        one[31] = 1;
        assert_eq!(g1_mul(&input(&p, one), &BlstEngine), Ok(p.encode()));
    }

    #[test]
    fn infinity_times_anything() {
        assert_eq!(
            g1_mul(&input(&G1Point::INFINITY, [0xff; 32]), &BlstEngine),
            Ok([0; 128])
        );
    }

    #[test]
    fn subgroup_is_checked() {
        assert_eq!(
            g1_mul(&input(&g1_outside_subgroup(), [1; 32]), &BlstEngine),
            Err(Eip2537Error::PointNotInSubgroup)
        );
        assert_eq!(
            g1_mul(&input(&g1_off_curve(), [1; 32]), &BlstEngine),
            Err(Eip2537Error::PointNotOnCurve)
        );
    }

    #[test]
    fn zero_scalar_does_not_skip_validation() {
        assert_eq!(
            g1_mul(&input(&g1_outside_subgroup(), [0; 32]), &BlstEngine),
            Err(Eip2537Error::PointNotInSubgroup)
        );
    }
}

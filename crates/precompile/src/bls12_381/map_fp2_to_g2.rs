//! BLS12-381 map fp2 to g2 precompile. More details in [`map_fp2_to_g2`]
use super::utils::exact_input;
use super::{ArithmeticEngine, Fp2};
use crate::bls12_381_const::{G2_OUTPUT_LENGTH, MAP_FP2_TO_G2_INPUT_LENGTH};
use crate::{Eip2537Error, Precompile, PrecompileId, PrecompileOutput, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_MAP_FP2_TO_G2 precompile.
pub const PRECOMPILE: Precompile = Precompile::new(PrecompileId::Bls12MapFp2ToG2, run);

fn run(input: &[u8], engine: &dyn ArithmeticEngine) -> PrecompileResult {
    let out = map_fp2_to_g2(input, engine)?;
    let gas = PRECOMPILE.id().required_gas(input.len());
    Ok(PrecompileOutput::new(gas, out.into()))
}

/// Field-to-curve call expects 128 bytes as an input that is interpreted as
/// an element of Fp2. Output of this call is 256 bytes and is an encoded G2
/// point.
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-mapping-fp2-element-to-g2-point>
pub fn map_fp2_to_g2(
    input: &[u8],
    engine: &dyn ArithmeticEngine,
) -> Result<[u8; G2_OUTPUT_LENGTH], Eip2537Error> {
    let input = exact_input::<MAP_FP2_TO_G2_INPUT_LENGTH>(input)?;
    let fp2 = Fp2::decode(input)?;
    Ok(engine.map_fp2_to_g2(&fp2).encode())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bls12_381::test_utils::{random_fp2, rng, MockEngine};
    use crate::bls12_381::{BlstEngine, G2Point};
    use crate::bls12_381_const::{FP_PAD_BY, MODULUS_REPR, PADDED_FP_LENGTH};

    #[test]
    fn output_is_in_subgroup() {
        let mut rng = rng();
        for fp2 in [Fp2::ZERO, random_fp2(&mut rng)] {
            let out = map_fp2_to_g2(&fp2.encode(), &BlstEngine).unwrap();
            let p = G2Point::decode(&out).unwrap();
            assert!(!p.is_infinity());
            assert!(BlstEngine.g2_on_curve(&p));
            assert!(BlstEngine.g2_in_subgroup(&p));
        }
    }

    #[test]
    fn no_point_checks() {
        let engine = MockEngine::default();
        map_fp2_to_g2(&[0; 128], &engine).unwrap();
        assert_eq!(engine.calls(), ["map_fp2_to_g2"]);
    }

    #[test]
    fn second_component_out_of_range() {
        let mut input = [0; 128];
        input[PADDED_FP_LENGTH + FP_PAD_BY..].copy_from_slice(&MODULUS_REPR);
        assert_eq!(
            map_fp2_to_g2(&input, &BlstEngine),
            Err(Eip2537Error::InvalidElement)
        );
    }

    #[test]
    fn lengths() {
        assert_eq!(map_fp2_to_g2(&[], &BlstEngine), Err(Eip2537Error::EmptyInput));
        assert_eq!(
            map_fp2_to_g2(&[0; 64], &BlstEngine),
            Err(Eip2537Error::InvalidLength)
        );
    }
}

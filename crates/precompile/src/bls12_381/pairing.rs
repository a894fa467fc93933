//! BLS12-381 pairing precompile. More details in [`pairing`]
use super::utils::split_item;
use super::validation::{validate_g1, validate_g2};
use super::{ArithmeticEngine, G1Point, G2Point, PairingPair};
use crate::bls12_381_const::{PADDED_G1_LENGTH, PADDED_G2_LENGTH, PAIRING_OUTPUT_LENGTH};
use crate::{Eip2537Error, Precompile, PrecompileId, PrecompileOutput, PrecompileResult};

/// [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537#specification) BLS12_PAIRING precompile.
pub const PRECOMPILE: Precompile = Precompile::new(PrecompileId::Bls12Pairing, run);

fn run(input: &[u8], engine: &dyn ArithmeticEngine) -> PrecompileResult {
    let out = pairing(input, engine)?;
    let gas = PRECOMPILE.id().required_gas(input.len());
    Ok(PrecompileOutput::new(gas, out.into()))
}

/// Pairing call expects 384*k (k being a positive integer) bytes as an inputs
/// that is interpreted as byte concatenation of k slices. Each slice has the
/// following structure:
///    * 128 bytes of G1 point encoding
///    * 256 bytes of G2 point encoding
///
/// Each point is expected to be in the subgroup of order q.
/// Output is 32 bytes where first 31 bytes are equal to 0x00 and the last byte
/// is 0x01 if pairing result is equal to the multiplicative identity in a pairing
/// target field and 0x00 otherwise.
///
/// See also: <https://eips.ethereum.org/EIPS/eip-2537#abi-for-pairing>
pub fn pairing(
    input: &[u8],
    engine: &dyn ArithmeticEngine,
) -> Result<[u8; PAIRING_OUTPUT_LENGTH], Eip2537Error> {
    let id = PRECOMPILE.id();
    let k = id.input_length().items(input)?;

    let mut pairs: Vec<PairingPair> = Vec::new();
    pairs.try_reserve_exact(k)?;
    for item in input.chunks_exact(id.input_length().item_width()) {
        let (g1, g2) = split_item::<PADDED_G1_LENGTH, PADDED_G2_LENGTH>(item)?;
        pairs.push((G1Point::decode(g1)?, G2Point::decode(g2)?));
    }

    let checks = id.point_checks().unwrap_or_default();
    for (g1, g2) in &pairs {
        validate_g1(g1, checks, engine)?;
        validate_g2(g2, checks, engine)?;
    }

    let mut out = [0; PAIRING_OUTPUT_LENGTH];
    out[PAIRING_OUTPUT_LENGTH - 1] = engine.pairing_check(&pairs)? as u8;
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bls12_381::g1_mul::g1_mul;
    use crate::bls12_381::test_utils::{
        g1_outside_subgroup, g2_marked, random_g1, random_g2, rng, Mark, MockEngine, GROUP_ORDER,
    };
    use crate::bls12_381::BlstEngine;
    use crate::bls12_381_const::PAIRING_INPUT_LENGTH;

    const TRUE: [u8; 32] = {
        let mut out = [0; 32];
        out[31] = 1;
        out
    };

    fn encode(pairs: &[(G1Point, G2Point)]) -> Vec<u8> {
        pairs
            .iter()
            .flat_map(|(p, q)| p.encode().into_iter().chain(q.encode()))
            .collect()
    }

    fn neg(p: &G1Point) -> G1Point {
        let mut r_minus_one = GROUP_ORDER;
        r_minus_one[31] -= 1;
        let input = [&p.encode()[..], &r_minus_one[..]].concat();
        G1Point::decode(&g1_mul(&input, &BlstEngine).unwrap()).unwrap()
    }

    #[test]
    fn bilinearity() {
        let mut rng = rng();
        let p = random_g1(&mut rng);
        let q = random_g2(&mut rng);

        assert_eq!(pairing(&encode(&[(p, q), (neg(&p), q)]), &BlstEngine), Ok(TRUE));
        assert_eq!(pairing(&encode(&[(p, q), (p, q)]), &BlstEngine), Ok([0; 32]));
        assert_eq!(pairing(&encode(&[(p, q)]), &BlstEngine), Ok([0; 32]));
    }

    #[test]
    fn infinity_pairs_are_skipped() {
        let mut rng = rng();
        let p = random_g1(&mut rng);
        let q = random_g2(&mut rng);

        let all_infinite = encode(&[
            (G1Point::INFINITY, q),
            (p, G2Point::INFINITY),
            (G1Point::INFINITY, G2Point::INFINITY),
        ]);
        assert_eq!(pairing(&all_infinite, &BlstEngine), Ok(TRUE));

        let mixed = encode(&[(p, q), (G1Point::INFINITY, q), (neg(&p), q)]);
        assert_eq!(pairing(&mixed, &BlstEngine), Ok(TRUE));
    }

    #[test]
    fn subgroup_checks() {
        let q = random_g2(&mut rng());
        assert_eq!(
            pairing(&encode(&[(g1_outside_subgroup(), q)]), &BlstEngine),
            Err(Eip2537Error::PointNotInSubgroup)
        );

        let engine = MockEngine::default();
        let input = encode(&[(G1Point::INFINITY, g2_marked(Mark::OutsideSubgroup))]);
        assert_eq!(pairing(&input, &engine), Err(Eip2537Error::PointNotInSubgroup));
        assert_eq!(engine.calls(), ["g2_on_curve", "g2_in_subgroup"]);
    }

    #[test]
    fn lengths() {
        assert_eq!(pairing(&[], &BlstEngine), Err(Eip2537Error::EmptyInput));
        assert_eq!(
            pairing(&[0; 383], &BlstEngine),
            Err(Eip2537Error::InvalidLength)
        );
        assert_eq!(
            pairing(&[0; 385], &BlstEngine),
            Err(Eip2537Error::InvalidLength)
        );
    }

    #[test]
    fn gas() {
        let out = PRECOMPILE.execute(&[0; 2 * PAIRING_INPUT_LENGTH]).unwrap();
        assert_eq!(out.gas_used, 161000);
        assert_eq!(out.bytes[..], TRUE);
    }
}

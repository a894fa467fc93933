//! Arithmetic capability consumed by the precompiles.
use super::types::{Fp, Fp2, G1Point, G1PointScalar, G2Point, G2PointScalar, PairingPair};
use crate::Eip2537Error;
use core::fmt::Debug;

/// Multi-scalar-multiplication strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MsmAlgorithm {
    /// The engine's own bucket method.
    #[default]
    Pippenger,
    /// Multiply every point and accumulate the products.
    Naive,
    /// Repeatedly fold the two terms with the largest scalars.
    BosCoster,
}

/// BLS12-381 group and pairing arithmetic.
///
/// Membership checks receive points that are not the point at infinity.
/// Every other method receives points that already passed the checks the
/// calling operation requires, and must treat [`G1Point::INFINITY`] and
/// [`G2Point::INFINITY`] as the group identity.
pub trait ArithmeticEngine: Send + Sync + Debug {
    /// Returns `true` if `p` satisfies the G1 curve equation.
    fn g1_on_curve(&self, p: &G1Point) -> bool;

    /// Returns `true` if `p` lies in the prime-order subgroup of G1.
    fn g1_in_subgroup(&self, p: &G1Point) -> bool;

    /// Returns `true` if `p` satisfies the G2 twist equation.
    fn g2_on_curve(&self, p: &G2Point) -> bool;

    /// Returns `true` if `p` lies in the prime-order subgroup of G2.
    fn g2_in_subgroup(&self, p: &G2Point) -> bool;

    /// G1 point addition.
    fn g1_add(&self, a: &G1Point, b: &G1Point) -> G1Point;

    /// G1 scalar multiplication.
    fn g1_mul(&self, p: &G1PointScalar) -> G1Point;

    /// G1 multi-scalar-multiplication with the given strategy.
    fn g1_msm(
        &self,
        pairs: &[G1PointScalar],
        algorithm: MsmAlgorithm,
    ) -> Result<G1Point, Eip2537Error>;

    /// G2 point addition.
    fn g2_add(&self, a: &G2Point, b: &G2Point) -> G2Point;

    /// G2 scalar multiplication.
    fn g2_mul(&self, p: &G2PointScalar) -> G2Point;

    /// G2 multi-scalar-multiplication with the given strategy.
    fn g2_msm(
        &self,
        pairs: &[G2PointScalar],
        algorithm: MsmAlgorithm,
    ) -> Result<G2Point, Eip2537Error>;

    /// Returns `true` if the product of the pairings of `pairs` is one.
    fn pairing_check(&self, pairs: &[PairingPair]) -> Result<bool, Eip2537Error>;

    /// Maps a base field element to G1, clearing the cofactor.
    fn map_fp_to_g1(&self, fp: &Fp) -> G1Point;

    /// Maps an extension field element to G2, clearing the cofactor.
    fn map_fp2_to_g2(&self, fp2: &Fp2) -> G2Point;
}

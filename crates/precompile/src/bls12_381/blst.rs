// This module contains a safe wrapper around the blst library.

use super::engine::{ArithmeticEngine, MsmAlgorithm};
use super::msm::{self, MsmGroup};
use super::types::{Fp, Fp2, G1Point, G1PointScalar, G2Point, G2PointScalar, PairingPair, Scalar};
use crate::bls12_381_const::{FP_LENGTH, NBITS, SCALAR_LENGTH};
use crate::Eip2537Error;
use alloy_primitives::U256;
use blst::{
    blst_bendian_from_fp, blst_final_exp, blst_fp, blst_fp12, blst_fp12_is_one, blst_fp12_mul,
    blst_fp2, blst_fp_from_bendian, blst_map_to_g1, blst_map_to_g2, blst_miller_loop, blst_p1,
    blst_p1_add_or_double, blst_p1_add_or_double_affine, blst_p1_affine, blst_p1_affine_in_g1,
    blst_p1_affine_on_curve, blst_p1_from_affine, blst_p1_mult, blst_p1_to_affine, blst_p2,
    blst_p2_add_or_double, blst_p2_add_or_double_affine, blst_p2_affine, blst_p2_affine_in_g2,
    blst_p2_affine_on_curve, blst_p2_from_affine, blst_p2_mult, blst_p2_to_affine, MultiPoint,
};

/// [`ArithmeticEngine`] backed by [`blst`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BlstEngine;

fn fp_from_bendian(fp: &Fp) -> blst_fp {
    let mut out = blst_fp::default();
    // SAFETY: input has fixed length, and out is a blst value.
    unsafe { blst_fp_from_bendian(&mut out, fp.as_be_bytes().as_ptr()) };
    out
}

fn fp_to_bendian(fp: &blst_fp) -> Fp {
    let mut out = [0; FP_LENGTH];
    // SAFETY: out has fixed length, and fp is a blst value.
    unsafe { blst_bendian_from_fp(out.as_mut_ptr(), fp) };
    Fp::from_canonical(out)
}

fn fp2_from_bendian(fp2: &Fp2) -> blst_fp2 {
    blst_fp2 {
        fp: [fp_from_bendian(&fp2.c0), fp_from_bendian(&fp2.c1)],
    }
}

fn fp2_to_bendian(fp2: &blst_fp2) -> Fp2 {
    Fp2 {
        c0: fp_to_bendian(&fp2.fp[0]),
        c1: fp_to_bendian(&fp2.fp[1]),
    }
}

/// Infinity maps to the all-zero affine point, which blst reads as infinity.
fn g1_to_affine(p: &G1Point) -> blst_p1_affine {
    blst_p1_affine {
        x: fp_from_bendian(&p.x),
        y: fp_from_bendian(&p.y),
    }
}

fn g1_from_affine(p: &blst_p1_affine) -> G1Point {
    G1Point {
        x: fp_to_bendian(&p.x),
        y: fp_to_bendian(&p.y),
    }
}

fn g2_to_affine(p: &G2Point) -> blst_p2_affine {
    blst_p2_affine {
        x: fp2_from_bendian(&p.x),
        y: fp2_from_bendian(&p.y),
    }
}

fn g2_from_affine(p: &blst_p2_affine) -> G2Point {
    G2Point {
        x: fp2_to_bendian(&p.x),
        y: fp2_to_bendian(&p.y),
    }
}

fn p1_to_affine(p: &blst_p1) -> blst_p1_affine {
    let mut p_affine = blst_p1_affine::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p1_to_affine(&mut p_affine, p) };
    p_affine
}

fn p1_from_affine(p_affine: &blst_p1_affine) -> blst_p1 {
    let mut p = blst_p1::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p1_from_affine(&mut p, p_affine) };
    p
}

fn p2_to_affine(p: &blst_p2) -> blst_p2_affine {
    let mut p_affine = blst_p2_affine::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p2_to_affine(&mut p_affine, p) };
    p_affine
}

fn p2_from_affine(p_affine: &blst_p2_affine) -> blst_p2 {
    let mut p = blst_p2::default();
    // SAFETY: both inputs are valid blst types
    unsafe { blst_p2_from_affine(&mut p, p_affine) };
    p
}

/// Jacobian G1 point, the group the generic multiexp strategies run over.
#[derive(Clone, Copy)]
struct P1(blst_p1);

impl MsmGroup for P1 {
    fn identity() -> Self {
        Self(blst_p1::default())
    }

    fn add(&self, other: &Self) -> Self {
        let mut out = blst_p1::default();
        // SAFETY: all inputs are valid blst types
        unsafe { blst_p1_add_or_double(&mut out, &self.0, &other.0) };
        Self(out)
    }

    fn mul(&self, scalar: &U256) -> Self {
        // Bos-Coster quotients are mostly tiny, only walk the significant bits.
        let nbits = scalar.bit_len();
        if nbits == 0 {
            return Self::identity();
        }
        Self(p1_mult(&self.0, &scalar.to_le_bytes::<SCALAR_LENGTH>(), nbits))
    }
}

/// Jacobian G2 point, the group the generic multiexp strategies run over.
#[derive(Clone, Copy)]
struct P2(blst_p2);

impl MsmGroup for P2 {
    fn identity() -> Self {
        Self(blst_p2::default())
    }

    fn add(&self, other: &Self) -> Self {
        let mut out = blst_p2::default();
        // SAFETY: all inputs are valid blst types
        unsafe { blst_p2_add_or_double(&mut out, &self.0, &other.0) };
        Self(out)
    }

    fn mul(&self, scalar: &U256) -> Self {
        // Bos-Coster quotients are mostly tiny, only walk the significant bits.
        let nbits = scalar.bit_len();
        if nbits == 0 {
            return Self::identity();
        }
        Self(p2_mult(&self.0, &scalar.to_le_bytes::<SCALAR_LENGTH>(), nbits))
    }
}

fn p1_mult(p: &blst_p1, scalar_le: &[u8; SCALAR_LENGTH], nbits: usize) -> blst_p1 {
    debug_assert!(nbits <= NBITS);
    let mut out = blst_p1::default();
    // SAFETY: scalar has fixed size of NBITS / 8 bytes, out and p are blst values.
    unsafe { blst_p1_mult(&mut out, p, scalar_le.as_ptr(), nbits) };
    out
}

fn p2_mult(p: &blst_p2, scalar_le: &[u8; SCALAR_LENGTH], nbits: usize) -> blst_p2 {
    debug_assert!(nbits <= NBITS);
    let mut out = blst_p2::default();
    // SAFETY: scalar has fixed size of NBITS / 8 bytes, out and p are blst values.
    unsafe { blst_p2_mult(&mut out, p, scalar_le.as_ptr(), nbits) };
    out
}

/// Concatenated little-endian scalars, the layout blst's Pippenger expects.
fn le_scalars<'a>(
    count: usize,
    scalars: impl Iterator<Item = &'a Scalar>,
) -> Result<Vec<u8>, Eip2537Error> {
    let mut out = Vec::new();
    out.try_reserve_exact(count * SCALAR_LENGTH)?;
    for scalar in scalars {
        out.extend_from_slice(&scalar.to_le_bytes());
    }
    Ok(out)
}

fn collect_terms<T, G>(
    pairs: &[(T, Scalar)],
    convert: impl Fn(&T) -> G,
) -> Result<Vec<(G, U256)>, Eip2537Error> {
    let mut terms = Vec::new();
    terms.try_reserve_exact(pairs.len())?;
    terms.extend(pairs.iter().map(|(p, s)| (convert(p), s.to_u256())));
    Ok(terms)
}

fn p1_msm(pairs: &[G1PointScalar], algorithm: MsmAlgorithm) -> Result<blst_p1, Eip2537Error> {
    if pairs.is_empty() {
        return Ok(blst_p1::default());
    }
    let to_p1 = |p: &G1Point| P1(p1_from_affine(&g1_to_affine(p)));
    match algorithm {
        MsmAlgorithm::Pippenger => {
            let mut points = Vec::new();
            points.try_reserve_exact(pairs.len())?;
            points.extend(pairs.iter().map(|(p, _)| g1_to_affine(p)));
            let scalars = le_scalars(pairs.len(), pairs.iter().map(|(_, s)| s))?;
            Ok(points.mult(&scalars, NBITS))
        }
        MsmAlgorithm::Naive => Ok(msm::naive(&collect_terms(pairs, to_p1)?).0),
        MsmAlgorithm::BosCoster => Ok(msm::bos_coster(collect_terms(pairs, to_p1)?)?.0),
    }
}

fn p2_msm(pairs: &[G2PointScalar], algorithm: MsmAlgorithm) -> Result<blst_p2, Eip2537Error> {
    if pairs.is_empty() {
        return Ok(blst_p2::default());
    }
    let to_p2 = |p: &G2Point| P2(p2_from_affine(&g2_to_affine(p)));
    match algorithm {
        MsmAlgorithm::Pippenger => {
            let mut points = Vec::new();
            points.try_reserve_exact(pairs.len())?;
            points.extend(pairs.iter().map(|(p, _)| g2_to_affine(p)));
            let scalars = le_scalars(pairs.len(), pairs.iter().map(|(_, s)| s))?;
            Ok(points.mult(&scalars, NBITS))
        }
        MsmAlgorithm::Naive => Ok(msm::naive(&collect_terms(pairs, to_p2)?).0),
        MsmAlgorithm::BosCoster => Ok(msm::bos_coster(collect_terms(pairs, to_p2)?)?.0),
    }
}

/// Computes a single miller loop for a given G1, G2 pair
fn compute_miller_loop(g1: &blst_p1_affine, g2: &blst_p2_affine) -> blst_fp12 {
    let mut result = blst_fp12::default();

    // SAFETY: All arguments are valid blst types
    unsafe { blst_miller_loop(&mut result, g2, g1) }

    result
}

/// multiply_fp12 multiplies two fp12 elements
fn multiply_fp12(a: &blst_fp12, b: &blst_fp12) -> blst_fp12 {
    let mut result = blst_fp12::default();

    // SAFETY: All arguments are valid blst types
    unsafe { blst_fp12_mul(&mut result, a, b) }

    result
}

/// final_exp computes the final exponentiation on an fp12 element
fn final_exp(f: &blst_fp12) -> blst_fp12 {
    let mut result = blst_fp12::default();

    // SAFETY: All arguments are valid blst types
    unsafe { blst_final_exp(&mut result, f) }

    result
}

/// is_fp12_one checks if an fp12 element equals
/// multiplicative identity element, one
fn is_fp12_one(f: &blst_fp12) -> bool {
    // SAFETY: argument is a valid blst type
    unsafe { blst_fp12_is_one(f) }
}

impl ArithmeticEngine for BlstEngine {
    fn g1_on_curve(&self, p: &G1Point) -> bool {
        // SAFETY: argument is a valid blst type
        unsafe { blst_p1_affine_on_curve(&g1_to_affine(p)) }
    }

    fn g1_in_subgroup(&self, p: &G1Point) -> bool {
        // SAFETY: argument is a valid blst type
        unsafe { blst_p1_affine_in_g1(&g1_to_affine(p)) }
    }

    fn g2_on_curve(&self, p: &G2Point) -> bool {
        // SAFETY: argument is a valid blst type
        unsafe { blst_p2_affine_on_curve(&g2_to_affine(p)) }
    }

    fn g2_in_subgroup(&self, p: &G2Point) -> bool {
        // SAFETY: argument is a valid blst type
        unsafe { blst_p2_affine_in_g2(&g2_to_affine(p)) }
    }

    fn g1_add(&self, a: &G1Point, b: &G1Point) -> G1Point {
        let a_jacobian = p1_from_affine(&g1_to_affine(a));
        let mut sum = blst_p1::default();
        // SAFETY: all inputs are valid blst types
        unsafe { blst_p1_add_or_double_affine(&mut sum, &a_jacobian, &g1_to_affine(b)) };
        g1_from_affine(&p1_to_affine(&sum))
    }

    fn g1_mul(&self, (p, scalar): &G1PointScalar) -> G1Point {
        let product = p1_mult(&p1_from_affine(&g1_to_affine(p)), &scalar.to_le_bytes(), NBITS);
        g1_from_affine(&p1_to_affine(&product))
    }

    fn g1_msm(
        &self,
        pairs: &[G1PointScalar],
        algorithm: MsmAlgorithm,
    ) -> Result<G1Point, Eip2537Error> {
        let multiexp = p1_msm(pairs, algorithm)?;
        Ok(g1_from_affine(&p1_to_affine(&multiexp)))
    }

    fn g2_add(&self, a: &G2Point, b: &G2Point) -> G2Point {
        let a_jacobian = p2_from_affine(&g2_to_affine(a));
        let mut sum = blst_p2::default();
        // SAFETY: all inputs are valid blst types
        unsafe { blst_p2_add_or_double_affine(&mut sum, &a_jacobian, &g2_to_affine(b)) };
        g2_from_affine(&p2_to_affine(&sum))
    }

    fn g2_mul(&self, (p, scalar): &G2PointScalar) -> G2Point {
        let product = p2_mult(&p2_from_affine(&g2_to_affine(p)), &scalar.to_le_bytes(), NBITS);
        g2_from_affine(&p2_to_affine(&product))
    }

    fn g2_msm(
        &self,
        pairs: &[G2PointScalar],
        algorithm: MsmAlgorithm,
    ) -> Result<G2Point, Eip2537Error> {
        let multiexp = p2_msm(pairs, algorithm)?;
        Ok(g2_from_affine(&p2_to_affine(&multiexp)))
    }

    fn pairing_check(&self, pairs: &[PairingPair]) -> Result<bool, Eip2537Error> {
        // Pairs with an infinity member contribute one to the product.
        let mut acc: Option<blst_fp12> = None;
        for (g1, g2) in pairs {
            if g1.is_infinity() || g2.is_infinity() {
                continue;
            }
            let ml = compute_miller_loop(&g1_to_affine(g1), &g2_to_affine(g2));
            acc = Some(match acc {
                Some(acc) => multiply_fp12(&acc, &ml),
                None => ml,
            });
        }

        let Some(acc) = acc else {
            return Ok(true);
        };
        Ok(is_fp12_one(&final_exp(&acc)))
    }

    fn map_fp_to_g1(&self, fp: &Fp) -> G1Point {
        let mut p = blst_p1::default();
        // SAFETY: `p` and `fp` are blst values
        // Third argument is unused if null
        unsafe { blst_map_to_g1(&mut p, &fp_from_bendian(fp), core::ptr::null()) };
        g1_from_affine(&p1_to_affine(&p))
    }

    fn map_fp2_to_g2(&self, fp2: &Fp2) -> G2Point {
        let mut p = blst_p2::default();
        // SAFETY: `p` and `fp2` are blst values
        // Third argument is unused if null
        unsafe { blst_map_to_g2(&mut p, &fp2_from_bendian(fp2), core::ptr::null()) };
        g2_from_affine(&p2_to_affine(&p))
    }
}

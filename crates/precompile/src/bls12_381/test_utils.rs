//! Shared helpers for the precompile tests.
use super::engine::{ArithmeticEngine, MsmAlgorithm};
use super::types::{Fp, Fp2, G1Point, G1PointScalar, G2Point, G2PointScalar, PairingPair};
use super::BlstEngine;
use crate::bls12_381_const::FP_LENGTH;
use crate::Eip2537Error;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::sync::Mutex;

/// Order of the G1 and G2 subgroups, big-endian.
pub(crate) const GROUP_ORDER: [u8; 32] = [
    0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1, 0xd8, 0x05,
    0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01,
];

pub(crate) fn rng() -> StdRng {
    StdRng::seed_from_u64(0x2537)
}

pub(crate) fn fp_from_u64(value: u64) -> Fp {
    let mut bytes = [0; FP_LENGTH];
    bytes[FP_LENGTH - 8..].copy_from_slice(&value.to_be_bytes());
    Fp::from_canonical(bytes)
}

/// Random canonical field element. Clearing the top nibble keeps it below the modulus.
pub(crate) fn random_fp(rng: &mut StdRng) -> Fp {
    let mut bytes: [u8; FP_LENGTH] = rng.random();
    bytes[0] &= 0x0f;
    Fp::from_canonical(bytes)
}

pub(crate) fn random_fp2(rng: &mut StdRng) -> Fp2 {
    Fp2 {
        c0: random_fp(rng),
        c1: random_fp(rng),
    }
}

/// Random point of the G1 subgroup.
pub(crate) fn random_g1(rng: &mut StdRng) -> G1Point {
    BlstEngine.map_fp_to_g1(&random_fp(rng))
}

/// Random point of the G2 subgroup.
pub(crate) fn random_g2(rng: &mut StdRng) -> G2Point {
    BlstEngine.map_fp2_to_g2(&random_fp2(rng))
}

/// `(0, 2)` satisfies `y^2 = x^3 + 4` but has order 3.
pub(crate) fn g1_outside_subgroup() -> G1Point {
    G1Point {
        x: Fp::ZERO,
        y: fp_from_u64(2),
    }
}

/// `(1, 1)` does not satisfy the curve equation.
pub(crate) fn g1_off_curve() -> G1Point {
    G1Point {
        x: fp_from_u64(1),
        y: fp_from_u64(1),
    }
}

/// How [`MockEngine`] judges a point, keyed by the low byte of `x`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Mark {
    Valid = 3,
    OffCurve = 1,
    OutsideSubgroup = 2,
}

fn mark_of(x: &Fp) -> u8 {
    x.as_be_bytes()[FP_LENGTH - 1]
}

pub(crate) fn g1_marked(mark: Mark) -> G1Point {
    G1Point {
        x: fp_from_u64(mark as u64),
        y: fp_from_u64(7),
    }
}

pub(crate) fn g2_marked(mark: Mark) -> G2Point {
    G2Point {
        x: Fp2 {
            c0: fp_from_u64(mark as u64),
            c1: Fp::ZERO,
        },
        y: Fp2 {
            c0: fp_from_u64(7),
            c1: Fp::ZERO,
        },
    }
}

/// Engine that judges points by their [`Mark`] and records every call.
#[derive(Debug, Default)]
pub(crate) struct MockEngine {
    calls: Mutex<Vec<&'static str>>,
}

impl MockEngine {
    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn record(&self, call: &'static str) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl ArithmeticEngine for MockEngine {
    fn g1_on_curve(&self, p: &G1Point) -> bool {
        self.record("g1_on_curve");
        mark_of(&p.x) != Mark::OffCurve as u8
    }

    fn g1_in_subgroup(&self, p: &G1Point) -> bool {
        self.record("g1_in_subgroup");
        mark_of(&p.x) != Mark::OutsideSubgroup as u8
    }

    fn g2_on_curve(&self, p: &G2Point) -> bool {
        self.record("g2_on_curve");
        mark_of(&p.x.c0) != Mark::OffCurve as u8
    }

    fn g2_in_subgroup(&self, p: &G2Point) -> bool {
        self.record("g2_in_subgroup");
        mark_of(&p.x.c0) != Mark::OutsideSubgroup as u8
    }

    fn g1_add(&self, a: &G1Point, _b: &G1Point) -> G1Point {
        self.record("g1_add");
        *a
    }

    fn g1_mul(&self, (p, _): &G1PointScalar) -> G1Point {
        self.record("g1_mul");
        *p
    }

    fn g1_msm(
        &self,
        pairs: &[G1PointScalar],
        _algorithm: MsmAlgorithm,
    ) -> Result<G1Point, Eip2537Error> {
        self.record("g1_msm");
        Ok(pairs.first().map(|(p, _)| *p).unwrap_or_default())
    }

    fn g2_add(&self, a: &G2Point, _b: &G2Point) -> G2Point {
        self.record("g2_add");
        *a
    }

    fn g2_mul(&self, (p, _): &G2PointScalar) -> G2Point {
        self.record("g2_mul");
        *p
    }

    fn g2_msm(
        &self,
        pairs: &[G2PointScalar],
        _algorithm: MsmAlgorithm,
    ) -> Result<G2Point, Eip2537Error> {
        self.record("g2_msm");
        Ok(pairs.first().map(|(p, _)| *p).unwrap_or_default())
    }

    fn pairing_check(&self, _pairs: &[PairingPair]) -> Result<bool, Eip2537Error> {
        self.record("pairing_check");
        Ok(true)
    }

    fn map_fp_to_g1(&self, _fp: &Fp) -> G1Point {
        self.record("map_fp_to_g1");
        G1Point::INFINITY
    }

    fn map_fp2_to_g2(&self, _fp2: &Fp2) -> G2Point {
        self.record("map_fp2_to_g2");
        G2Point::INFINITY
    }
}

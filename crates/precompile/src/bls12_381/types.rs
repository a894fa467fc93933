//! Decoded EIP-2537 operands.
//!
//! Values of these types are always canonical: field elements are strictly
//! below the modulus. Points are NOT known to be on the curve until they pass
//! [`validation`](super::validation).
use crate::bls12_381_const::{FP_LENGTH, MODULUS_REPR, SCALAR_LENGTH};
use crate::Eip2537Error;
use alloy_primitives::U256;
use core::cmp::Ordering;

/// Canonical base field element, big-endian.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Fp([u8; FP_LENGTH]);

impl Default for Fp {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Fp {
    /// The zero element.
    pub const ZERO: Self = Self([0; FP_LENGTH]);

    /// Returns the field element if `bytes` is strictly below the modulus.
    pub fn from_be_bytes(bytes: [u8; FP_LENGTH]) -> Result<Self, Eip2537Error> {
        if !is_valid_be(&bytes) {
            return Err(Eip2537Error::InvalidElement);
        }
        Ok(Self(bytes))
    }

    /// Wraps bytes produced by the engine, which are canonical by construction.
    pub(crate) const fn from_canonical(bytes: [u8; FP_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Big-endian bytes of the element.
    pub const fn as_be_bytes(&self) -> &[u8; FP_LENGTH] {
        &self.0
    }

    /// Returns `true` for the zero element.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }
}

/// Checks if the input is a valid big-endian representation of a field element.
fn is_valid_be(input: &[u8; FP_LENGTH]) -> bool {
    for (i, modul) in input.iter().zip(MODULUS_REPR.iter()) {
        match i.cmp(modul) {
            Ordering::Greater => return false,
            Ordering::Less => return true,
            Ordering::Equal => continue,
        }
    }
    // false if matching the modulus
    false
}

/// Element of the quadratic extension `c0 + c1 * u`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fp2 {
    /// Real part.
    pub c0: Fp,
    /// Imaginary part.
    pub c1: Fp,
}

impl Fp2 {
    /// The zero element.
    pub const ZERO: Self = Self {
        c0: Fp::ZERO,
        c1: Fp::ZERO,
    };

    /// Returns `true` for the zero element.
    pub fn is_zero(&self) -> bool {
        self.c0.is_zero() && self.c1.is_zero()
    }
}

/// Affine G1 point. `(0, 0)` is not on the curve and stands for infinity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct G1Point {
    /// x coordinate.
    pub x: Fp,
    /// y coordinate.
    pub y: Fp,
}

impl G1Point {
    /// The point at infinity.
    pub const INFINITY: Self = Self {
        x: Fp::ZERO,
        y: Fp::ZERO,
    };

    /// Returns `true` for the point at infinity.
    pub fn is_infinity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

/// Affine G2 point. `(0, 0)` is not on the twist and stands for infinity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct G2Point {
    /// x coordinate.
    pub x: Fp2,
    /// y coordinate.
    pub y: Fp2,
}

impl G2Point {
    /// The point at infinity.
    pub const INFINITY: Self = Self {
        x: Fp2::ZERO,
        y: Fp2::ZERO,
    };

    /// Returns `true` for the point at infinity.
    pub fn is_infinity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }
}

/// Big-endian 256-bit multiplier. Not reduced modulo the group order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Scalar([u8; SCALAR_LENGTH]);

impl Scalar {
    /// The zero scalar.
    pub const ZERO: Self = Self([0; SCALAR_LENGTH]);

    /// Wraps big-endian bytes.
    pub const fn from_be_bytes(bytes: [u8; SCALAR_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Big-endian bytes of the scalar.
    pub const fn as_be_bytes(&self) -> &[u8; SCALAR_LENGTH] {
        &self.0
    }

    /// Little-endian bytes, the order blst expects.
    pub fn to_le_bytes(&self) -> [u8; SCALAR_LENGTH] {
        let mut out = self.0;
        out.reverse();
        out
    }

    /// Returns `true` for the zero scalar.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    /// Returns the scalar as a 256-bit integer.
    pub fn to_u256(&self) -> U256 {
        U256::from_be_bytes(self.0)
    }
}

impl From<U256> for Scalar {
    fn from(value: U256) -> Self {
        Self(value.to_be_bytes())
    }
}

/// A G1 point with its multiplier.
pub type G1PointScalar = (G1Point, Scalar);
/// A G2 point with its multiplier.
pub type G2PointScalar = (G2Point, Scalar);
/// A pairing input item.
pub type PairingPair = (G1Point, G2Point);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulus_is_rejected() {
        assert_eq!(
            Fp::from_be_bytes(MODULUS_REPR),
            Err(Eip2537Error::InvalidElement)
        );

        let mut below = MODULUS_REPR;
        below[FP_LENGTH - 1] -= 1;
        assert!(Fp::from_be_bytes(below).is_ok());

        assert_eq!(
            Fp::from_be_bytes([0xff; FP_LENGTH]),
            Err(Eip2537Error::InvalidElement)
        );
    }

    #[test]
    fn infinity_is_all_zero() {
        assert!(G1Point::INFINITY.is_infinity());
        assert!(G2Point::INFINITY.is_infinity());

        let mut one = [0; FP_LENGTH];
        one[FP_LENGTH - 1] = 1;
        let p = G1Point {
            x: Fp::ZERO,
            y: Fp::from_be_bytes(one).unwrap(),
        };
        assert!(!p.is_infinity());
    }

    #[test]
    fn defaults_are_zero() {
        assert_eq!(Fp::default(), Fp::ZERO);
        assert_eq!(Fp2::default(), Fp2::ZERO);
        assert!(G1Point::default().is_infinity());
        assert!(G2Point::default().is_infinity());
        assert_eq!(Scalar::default(), Scalar::ZERO);
    }

    #[test]
    fn scalar_byte_orders() {
        let mut bytes = [0; SCALAR_LENGTH];
        bytes[SCALAR_LENGTH - 1] = 0x02;
        bytes[0] = 0x80;
        let s = Scalar::from_be_bytes(bytes);

        let le = s.to_le_bytes();
        assert_eq!(le[0], 0x02);
        assert_eq!(le[SCALAR_LENGTH - 1], 0x80);
        assert_eq!(s.to_u256(), (U256::from(1) << 255) + U256::from(2));
        assert_eq!(Scalar::from(s.to_u256()), s);
        assert!(Scalar::ZERO.is_zero());
    }
}

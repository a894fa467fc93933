use super::types::{Fp2, G2Point};
use super::utils::split_item;
use crate::bls12_381_const::{PADDED_FP2_LENGTH, PADDED_G2_LENGTH};
use crate::Eip2537Error;

impl G2Point {
    /// Decodes a 256 byte point encoding: `x.c0 | x.c1 | y.c0 | y.c1`.
    ///
    /// The all-zero encoding decodes to [`G2Point::INFINITY`].
    pub fn decode(input: &[u8; PADDED_G2_LENGTH]) -> Result<Self, Eip2537Error> {
        let (x, y) = split_item::<PADDED_FP2_LENGTH, PADDED_FP2_LENGTH>(input)?;
        Ok(Self {
            x: Fp2::decode(x)?,
            y: Fp2::decode(y)?,
        })
    }

    /// Encodes a G2 point with padded coordinates.
    pub fn encode(&self) -> [u8; PADDED_G2_LENGTH] {
        let mut out = [0; PADDED_G2_LENGTH];
        let (x, y) = out.split_at_mut(PADDED_FP2_LENGTH);
        x.copy_from_slice(&self.x.encode());
        y.copy_from_slice(&self.y.encode());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12_381_const::{FP_PAD_BY, MODULUS_REPR, PADDED_FP_LENGTH};

    #[test]
    fn infinity_round_trip() {
        let zero = [0; PADDED_G2_LENGTH];
        let p = G2Point::decode(&zero).unwrap();
        assert!(p.is_infinity());
        assert_eq!(p.encode(), zero);
    }

    #[test]
    fn slot_layout() {
        let mut input = [0; PADDED_G2_LENGTH];
        for slot in 0..4 {
            input[(slot + 1) * PADDED_FP_LENGTH - 1] = slot as u8 + 1;
        }
        let p = G2Point::decode(&input).unwrap();
        assert_eq!(p.x.c0.as_be_bytes()[47], 1);
        assert_eq!(p.x.c1.as_be_bytes()[47], 2);
        assert_eq!(p.y.c0.as_be_bytes()[47], 3);
        assert_eq!(p.y.c1.as_be_bytes()[47], 4);
        assert_eq!(p.encode(), input);
    }

    #[test]
    fn last_coordinate_out_of_range() {
        let mut input = [0; PADDED_G2_LENGTH];
        input[3 * PADDED_FP_LENGTH + FP_PAD_BY..].copy_from_slice(&MODULUS_REPR);
        assert_eq!(G2Point::decode(&input), Err(Eip2537Error::InvalidElement));
    }
}

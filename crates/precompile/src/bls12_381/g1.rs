use super::types::{Fp, G1Point};
use super::utils::split_item;
use crate::bls12_381_const::{PADDED_FP_LENGTH, PADDED_G1_LENGTH};
use crate::Eip2537Error;

impl G1Point {
    /// Decodes a 128 byte point encoding.
    ///
    /// The all-zero encoding decodes to [`G1Point::INFINITY`]. Any other
    /// coordinates are only known to be canonical field elements; curve and
    /// subgroup membership are left to the validator.
    pub fn decode(input: &[u8; PADDED_G1_LENGTH]) -> Result<Self, Eip2537Error> {
        let (x, y) = split_item::<PADDED_FP_LENGTH, PADDED_FP_LENGTH>(input)?;
        Ok(Self {
            x: Fp::decode(x)?,
            y: Fp::decode(y)?,
        })
    }

    /// Encodes a G1 point with padded coordinates.
    pub fn encode(&self) -> [u8; PADDED_G1_LENGTH] {
        let mut out = [0; PADDED_G1_LENGTH];
        let (x, y) = out.split_at_mut(PADDED_FP_LENGTH);
        x.copy_from_slice(&self.x.encode());
        y.copy_from_slice(&self.y.encode());
        out
    }
}

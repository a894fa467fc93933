//! Field element and scalar codec, and the input length rules.
use super::types::{Fp, Fp2, Scalar};
use crate::bls12_381_const::{
    FP_LENGTH, FP_PAD_BY, PADDED_FP2_LENGTH, PADDED_FP_LENGTH, SCALAR_LENGTH,
};
use crate::Eip2537Error;

/// Accepted input lengths of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputLength {
    /// Exactly one item of the given width.
    Exact(usize),
    /// One or more items of the given width.
    MultipleOf(usize),
}

impl InputLength {
    /// Width of one input item.
    pub const fn item_width(&self) -> usize {
        match self {
            Self::Exact(width) | Self::MultipleOf(width) => *width,
        }
    }

    /// Returns the number of items in `input`.
    ///
    /// Empty input is always [`Eip2537Error::EmptyInput`], even for widths
    /// that would otherwise report [`Eip2537Error::InvalidLength`].
    pub fn items(&self, input: &[u8]) -> Result<usize, Eip2537Error> {
        match self {
            Self::Exact(width) => exact_input_len(input, *width).map(|_| 1),
            Self::MultipleOf(width) => input_items(input, *width),
        }
    }
}

fn exact_input_len(input: &[u8], width: usize) -> Result<(), Eip2537Error> {
    if input.is_empty() {
        return Err(Eip2537Error::EmptyInput);
    }
    if input.len() != width {
        return Err(Eip2537Error::InvalidLength);
    }
    Ok(())
}

/// Returns `input` as a single item of exactly `N` bytes.
pub fn exact_input<const N: usize>(input: &[u8]) -> Result<&[u8; N], Eip2537Error> {
    exact_input_len(input, N)?;
    input.try_into().map_err(|_| Eip2537Error::InvalidLength)
}

/// Returns the number of `width` byte items in `input`.
pub fn input_items(input: &[u8], width: usize) -> Result<usize, Eip2537Error> {
    if input.is_empty() {
        return Err(Eip2537Error::EmptyInput);
    }
    if input.len() % width != 0 {
        return Err(Eip2537Error::InvalidLength);
    }
    Ok(input.len() / width)
}

/// Splits an `A + B` byte item into its two fixed-width halves.
pub(crate) fn split_item<const A: usize, const B: usize>(
    item: &[u8],
) -> Result<(&[u8; A], &[u8; B]), Eip2537Error> {
    let (head, tail) = item
        .split_first_chunk::<A>()
        .ok_or(Eip2537Error::InvalidLength)?;
    let tail = tail.try_into().map_err(|_| Eip2537Error::InvalidLength)?;
    Ok((head, tail))
}

impl Fp {
    /// Decodes a padded 64 byte slot.
    ///
    /// Padding is checked before the value, so a slot that is both badly
    /// padded and out of range is an [`Eip2537Error::EncodingError`].
    pub fn decode(input: &[u8; PADDED_FP_LENGTH]) -> Result<Self, Eip2537Error> {
        let (padding, value) = split_item::<FP_PAD_BY, FP_LENGTH>(input)?;
        if !padding.iter().all(|&x| x == 0) {
            return Err(Eip2537Error::EncodingError);
        }
        Self::from_be_bytes(*value)
    }

    /// Encodes into a padded 64 byte slot.
    pub fn encode(&self) -> [u8; PADDED_FP_LENGTH] {
        let mut out = [0; PADDED_FP_LENGTH];
        out[FP_PAD_BY..].copy_from_slice(self.as_be_bytes());
        out
    }
}

impl Fp2 {
    /// Decodes two padded slots, `c0` first.
    pub fn decode(input: &[u8; PADDED_FP2_LENGTH]) -> Result<Self, Eip2537Error> {
        let (c0, c1) = split_item::<PADDED_FP_LENGTH, PADDED_FP_LENGTH>(input)?;
        Ok(Self {
            c0: Fp::decode(c0)?,
            c1: Fp::decode(c1)?,
        })
    }

    /// Encodes into two padded slots, `c0` first.
    pub fn encode(&self) -> [u8; PADDED_FP2_LENGTH] {
        let mut out = [0; PADDED_FP2_LENGTH];
        let (c0, c1) = out.split_at_mut(PADDED_FP_LENGTH);
        c0.copy_from_slice(&self.c0.encode());
        c1.copy_from_slice(&self.c1.encode());
        out
    }
}

impl Scalar {
    /// Decodes a 32 byte big-endian scalar. Every value is accepted.
    ///
    /// From [EIP-2537](https://eips.ethereum.org/EIPS/eip-2537):
    /// * The corresponding integer is not required to be less than or equal than main subgroup
    ///   order `q`.
    pub fn decode(input: &[u8; SCALAR_LENGTH]) -> Self {
        Self::from_be_bytes(*input)
    }

    /// Encodes as 32 big-endian bytes.
    pub fn encode(&self) -> [u8; SCALAR_LENGTH] {
        *self.as_be_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12_381_const::MODULUS_REPR;
    use rstest::rstest;

    fn slot(value: &[u8; FP_LENGTH]) -> [u8; PADDED_FP_LENGTH] {
        let mut out = [0; PADDED_FP_LENGTH];
        out[FP_PAD_BY..].copy_from_slice(value);
        out
    }

    #[test]
    fn fp_round_trip() {
        let mut value = [0x11; FP_LENGTH];
        value[0] = 0x0a;
        let encoded = slot(&value);
        let fp = Fp::decode(&encoded).unwrap();
        assert_eq!(fp.as_be_bytes(), &value);
        assert_eq!(fp.encode(), encoded);
    }

    #[rstest]
    #[case::first_pad_byte(0)]
    #[case::last_pad_byte(FP_PAD_BY - 1)]
    fn non_zero_padding(#[case] index: usize) {
        let mut encoded = slot(&[0; FP_LENGTH]);
        encoded[index] = 1;
        assert_eq!(Fp::decode(&encoded), Err(Eip2537Error::EncodingError));
    }

    #[test]
    fn padding_checked_before_range() {
        let mut encoded = slot(&MODULUS_REPR);
        assert_eq!(Fp::decode(&encoded), Err(Eip2537Error::InvalidElement));
        encoded[3] = 0xff;
        assert_eq!(Fp::decode(&encoded), Err(Eip2537Error::EncodingError));
    }

    #[test]
    fn fp2_keeps_component_order() {
        let mut c1 = [0; FP_LENGTH];
        c1[FP_LENGTH - 1] = 7;
        let mut encoded = [0; PADDED_FP2_LENGTH];
        encoded[PADDED_FP_LENGTH..].copy_from_slice(&slot(&c1));

        let fp2 = Fp2::decode(&encoded).unwrap();
        assert!(fp2.c0.is_zero());
        assert_eq!(fp2.c1.as_be_bytes(), &c1);
        assert_eq!(fp2.encode(), encoded);
    }

    #[test]
    fn fp2_reports_first_bad_component() {
        let mut encoded = [0; PADDED_FP2_LENGTH];
        encoded[FP_PAD_BY..PADDED_FP_LENGTH].copy_from_slice(&MODULUS_REPR);
        encoded[PADDED_FP_LENGTH] = 1;
        assert_eq!(Fp2::decode(&encoded), Err(Eip2537Error::InvalidElement));
    }

    #[test]
    fn scalar_is_not_reduced() {
        let encoded = [0xff; SCALAR_LENGTH];
        let scalar = Scalar::decode(&encoded);
        assert_eq!(scalar.encode(), encoded);
    }

    #[rstest]
    #[case::empty(0, Err(Eip2537Error::EmptyInput))]
    #[case::short(159, Err(Eip2537Error::InvalidLength))]
    #[case::one(160, Ok(1))]
    #[case::partial(161, Err(Eip2537Error::InvalidLength))]
    #[case::three(480, Ok(3))]
    fn multiple_of_rule(#[case] len: usize, #[case] expected: Result<usize, Eip2537Error>) {
        let input = vec![0; len];
        assert_eq!(InputLength::MultipleOf(160).items(&input), expected);
    }

    #[rstest]
    #[case::empty(0, Err(Eip2537Error::EmptyInput))]
    #[case::exact(64, Ok(1))]
    #[case::two_items(128, Err(Eip2537Error::InvalidLength))]
    fn exact_rule(#[case] len: usize, #[case] expected: Result<usize, Eip2537Error>) {
        let input = vec![0; len];
        assert_eq!(InputLength::Exact(64).items(&input), expected);
        assert_eq!(
            exact_input::<64>(&input).map(|_| 1),
            expected
        );
    }
}

//! Gas schedule helpers shared by the G1/G2 multiexp and pairing precompiles.
use crate::bls12_381_const::{
    MSM_DISCOUNT_TABLE, MSM_MULTIPLIER, PAIRING_BASE_GAS, PAIRING_PER_PAIR_GAS,
};

/// Implements the gas schedule for G1/G2 multi-scalar-multiplication.
///
/// `k` is the number of `(point, scalar)` pairs. The discount for `k` pairs is
/// `discount_table[k - 1]`, clamped to the last entry of the table.
#[inline]
pub fn msm_required_gas(k: usize, discount_table: &[u16], multiplication_cost: u64) -> u64 {
    if k == 0 {
        return 0;
    }

    let index = core::cmp::min(k - 1, discount_table.len() - 1);
    let discount = discount_table[index] as u64;

    (k as u64 * discount * multiplication_cost) / MSM_MULTIPLIER
}

/// Gas for a multiexp input of `input_len` bytes made of `item_len` byte items.
#[inline]
pub fn msm_required_gas_for_input(input_len: usize, item_len: usize, mul_gas: u64) -> u64 {
    msm_required_gas(input_len / item_len, &MSM_DISCOUNT_TABLE, mul_gas)
}

/// Gas for a pairing check over `k` pairs. Zero pairs cost nothing.
#[inline]
pub fn pairing_required_gas(k: usize) -> u64 {
    if k == 0 {
        return 0;
    }
    k as u64 * PAIRING_PER_PAIR_GAS + PAIRING_BASE_GAS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bls12_381_const::{G1_MSM_INPUT_LENGTH, G1_MUL_GAS, G2_MSM_INPUT_LENGTH, G2_MUL_GAS};
    use rstest::rstest;

    #[rstest]
    #[case::empty(0, 0)]
    #[case::single(1, 14400)]
    #[case::two(2, 21312)]
    #[case::last_entry(128, 267264)]
    #[case::clamped(200, 417600)]
    fn g1_msm_schedule(#[case] k: usize, #[case] expected: u64) {
        assert_eq!(msm_required_gas(k, &MSM_DISCOUNT_TABLE, G1_MUL_GAS), expected);
    }

    #[test]
    fn msm_gas_floors_partial_items() {
        assert_eq!(
            msm_required_gas_for_input(2 * G2_MSM_INPUT_LENGTH + 5, G2_MSM_INPUT_LENGTH, G2_MUL_GAS),
            2 * G2_MUL_GAS * 888 / 1000
        );
        assert_eq!(msm_required_gas_for_input(100, G1_MSM_INPUT_LENGTH, G1_MUL_GAS), 0);
    }

    #[test]
    fn pairing_schedule() {
        assert_eq!(pairing_required_gas(0), 0);
        assert_eq!(pairing_required_gas(1), 138000);
        assert_eq!(pairing_required_gas(3), 184000);
    }
}

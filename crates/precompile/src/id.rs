//! Catalog of the EIP-2537 operations and their per-operation policy.
use core::{fmt, str::FromStr};

use crate::bls12_381::{self, InputLength, MsmAlgorithm, PointChecks};
use crate::bls12_381_const::*;
use crate::bls12_381_utils::{msm_required_gas_for_input, pairing_required_gas};
use crate::Precompile;

/// Unique EIP-2537 operation identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrecompileId {
    /// Point addition in G1 (curve over base prime field).
    Bls12G1Add,
    /// Scalar multiplication in G1.
    Bls12G1Mul,
    /// Multi-scalar-multiplication in G1 with the engine's default algorithm.
    Bls12G1Msm,
    /// Multi-scalar-multiplication in G1, multiply-then-accumulate.
    Bls12G1MsmNaive,
    /// Multi-scalar-multiplication in G1 with the Bos-Coster algorithm.
    Bls12G1MsmBosCoster,
    /// Point addition in G2 (curve over quadratic extension of the base prime field).
    Bls12G2Add,
    /// Scalar multiplication in G2.
    Bls12G2Mul,
    /// Multi-scalar-multiplication in G2 with the engine's default algorithm.
    Bls12G2Msm,
    /// Multi-scalar-multiplication in G2, multiply-then-accumulate.
    Bls12G2MsmNaive,
    /// Multi-scalar-multiplication in G2 with the Bos-Coster algorithm.
    Bls12G2MsmBosCoster,
    /// Pairing check over a set of (G1, G2) pairs.
    Bls12Pairing,
    /// Base field element mapping into a G1 point.
    Bls12MapFpToG1,
    /// Extension field element mapping into a G2 point.
    Bls12MapFp2ToG2,
}

impl PrecompileId {
    /// Every operation of the catalog, in address order.
    pub const ALL: [PrecompileId; 13] = [
        Self::Bls12G1Add,
        Self::Bls12G1Mul,
        Self::Bls12G1Msm,
        Self::Bls12G1MsmNaive,
        Self::Bls12G1MsmBosCoster,
        Self::Bls12G2Add,
        Self::Bls12G2Mul,
        Self::Bls12G2Msm,
        Self::Bls12G2MsmNaive,
        Self::Bls12G2MsmBosCoster,
        Self::Bls12Pairing,
        Self::Bls12MapFpToG1,
        Self::Bls12MapFp2ToG2,
    ];

    /// Returns the catalog name of the operation.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bls12G1Add => "G1ADD",
            Self::Bls12G1Mul => "G1MUL",
            Self::Bls12G1Msm => "G1MSM",
            Self::Bls12G1MsmNaive => "G1MSM_NAIVE",
            Self::Bls12G1MsmBosCoster => "G1MSM_BOSCOSTER",
            Self::Bls12G2Add => "G2ADD",
            Self::Bls12G2Mul => "G2MUL",
            Self::Bls12G2Msm => "G2MSM",
            Self::Bls12G2MsmNaive => "G2MSM_NAIVE",
            Self::Bls12G2MsmBosCoster => "G2MSM_BOSCOSTER",
            Self::Bls12Pairing => "PAIRING",
            Self::Bls12MapFpToG1 => "MAP_FP_TO_G1",
            Self::Bls12MapFp2ToG2 => "MAP_FP2_TO_G2",
        }
    }

    /// Returns the precompile address. Multiexp variants share one address.
    pub const fn address(&self) -> u64 {
        match self {
            Self::Bls12G1Add => G1_ADD_ADDRESS,
            Self::Bls12G1Mul => G1_MUL_ADDRESS,
            Self::Bls12G1Msm | Self::Bls12G1MsmNaive | Self::Bls12G1MsmBosCoster => G1_MSM_ADDRESS,
            Self::Bls12G2Add => G2_ADD_ADDRESS,
            Self::Bls12G2Mul => G2_MUL_ADDRESS,
            Self::Bls12G2Msm | Self::Bls12G2MsmNaive | Self::Bls12G2MsmBosCoster => G2_MSM_ADDRESS,
            Self::Bls12Pairing => PAIRING_ADDRESS,
            Self::Bls12MapFpToG1 => MAP_FP_TO_G1_ADDRESS,
            Self::Bls12MapFp2ToG2 => MAP_FP2_TO_G2_ADDRESS,
        }
    }

    /// Returns the accepted input length rule.
    pub const fn input_length(&self) -> InputLength {
        match self {
            Self::Bls12G1Add => InputLength::Exact(G1_ADD_INPUT_LENGTH),
            Self::Bls12G1Mul => InputLength::Exact(G1_MUL_INPUT_LENGTH),
            Self::Bls12G1Msm | Self::Bls12G1MsmNaive | Self::Bls12G1MsmBosCoster => {
                InputLength::MultipleOf(G1_MSM_INPUT_LENGTH)
            }
            Self::Bls12G2Add => InputLength::Exact(G2_ADD_INPUT_LENGTH),
            Self::Bls12G2Mul => InputLength::Exact(G2_MUL_INPUT_LENGTH),
            Self::Bls12G2Msm | Self::Bls12G2MsmNaive | Self::Bls12G2MsmBosCoster => {
                InputLength::MultipleOf(G2_MSM_INPUT_LENGTH)
            }
            Self::Bls12Pairing => InputLength::MultipleOf(PAIRING_INPUT_LENGTH),
            Self::Bls12MapFpToG1 => InputLength::Exact(MAP_FP_TO_G1_INPUT_LENGTH),
            Self::Bls12MapFp2ToG2 => InputLength::Exact(MAP_FP2_TO_G2_INPUT_LENGTH),
        }
    }

    /// Returns the output length.
    pub const fn output_length(&self) -> usize {
        match self {
            Self::Bls12G1Add
            | Self::Bls12G1Mul
            | Self::Bls12G1Msm
            | Self::Bls12G1MsmNaive
            | Self::Bls12G1MsmBosCoster
            | Self::Bls12MapFpToG1 => G1_OUTPUT_LENGTH,
            Self::Bls12G2Add
            | Self::Bls12G2Mul
            | Self::Bls12G2Msm
            | Self::Bls12G2MsmNaive
            | Self::Bls12G2MsmBosCoster
            | Self::Bls12MapFp2ToG2 => G2_OUTPUT_LENGTH,
            Self::Bls12Pairing => PAIRING_OUTPUT_LENGTH,
        }
    }

    /// Returns the curve/subgroup checks this operation applies to its input points.
    ///
    /// `None` for the map operations, whose input is a field element.
    pub const fn point_checks(&self) -> Option<PointChecks> {
        match self {
            Self::Bls12G1Add | Self::Bls12G2Add => Some(PointChecks::CurveOnly),
            Self::Bls12MapFpToG1 | Self::Bls12MapFp2ToG2 => None,
            _ => Some(PointChecks::CurveAndSubgroup),
        }
    }

    /// Returns the multiexp algorithm of a multiexp operation.
    pub const fn msm_algorithm(&self) -> Option<MsmAlgorithm> {
        match self {
            Self::Bls12G1Msm | Self::Bls12G2Msm => Some(MsmAlgorithm::Pippenger),
            Self::Bls12G1MsmNaive | Self::Bls12G2MsmNaive => Some(MsmAlgorithm::Naive),
            Self::Bls12G1MsmBosCoster | Self::Bls12G2MsmBosCoster => Some(MsmAlgorithm::BosCoster),
            _ => None,
        }
    }

    /// Returns the gas charged for an input of `input_len` bytes.
    pub fn required_gas(&self, input_len: usize) -> u64 {
        match self {
            Self::Bls12G1Add => G1_ADD_GAS,
            Self::Bls12G1Mul => G1_MUL_GAS,
            Self::Bls12G1Msm | Self::Bls12G1MsmNaive | Self::Bls12G1MsmBosCoster => {
                msm_required_gas_for_input(input_len, G1_MSM_INPUT_LENGTH, G1_MUL_GAS)
            }
            Self::Bls12G2Add => G2_ADD_GAS,
            Self::Bls12G2Mul => G2_MUL_GAS,
            Self::Bls12G2Msm | Self::Bls12G2MsmNaive | Self::Bls12G2MsmBosCoster => {
                msm_required_gas_for_input(input_len, G2_MSM_INPUT_LENGTH, G2_MUL_GAS)
            }
            Self::Bls12Pairing => pairing_required_gas(input_len / PAIRING_INPUT_LENGTH),
            Self::Bls12MapFpToG1 => MAP_FP_TO_G1_GAS,
            Self::Bls12MapFp2ToG2 => MAP_FP2_TO_G2_GAS,
        }
    }

    /// Returns the precompile implementing this operation.
    pub fn precompile(&self) -> Precompile {
        use bls12_381::*;

        match self {
            Self::Bls12G1Add => g1_add::PRECOMPILE,
            Self::Bls12G1Mul => g1_mul::PRECOMPILE,
            Self::Bls12G1Msm => g1_msm::PRECOMPILE,
            Self::Bls12G1MsmNaive => g1_msm::NAIVE_PRECOMPILE,
            Self::Bls12G1MsmBosCoster => g1_msm::BOS_COSTER_PRECOMPILE,
            Self::Bls12G2Add => g2_add::PRECOMPILE,
            Self::Bls12G2Mul => g2_mul::PRECOMPILE,
            Self::Bls12G2Msm => g2_msm::PRECOMPILE,
            Self::Bls12G2MsmNaive => g2_msm::NAIVE_PRECOMPILE,
            Self::Bls12G2MsmBosCoster => g2_msm::BOS_COSTER_PRECOMPILE,
            Self::Bls12Pairing => pairing::PRECOMPILE,
            Self::Bls12MapFpToG1 => map_fp_to_g1::PRECOMPILE,
            Self::Bls12MapFp2ToG2 => map_fp2_to_g2::PRECOMPILE,
        }
    }
}

impl fmt::Display for PrecompileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when parsing a name that is not in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown EIP-2537 operation: {0}")]
pub struct UnknownPrecompile(pub String);

impl FromStr for PrecompileId {
    type Err = UnknownPrecompile;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.name() == s)
            .ok_or_else(|| UnknownPrecompile(s.to_string()))
    }
}

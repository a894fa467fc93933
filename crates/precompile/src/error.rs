//! Error taxonomy shared by every EIP-2537 operation.
//!
//! Errors are plain values. Numeric status codes only exist for callers that
//! sit behind a foreign-function boundary, see [`Eip2537Error::code`] and
//! [`Eip2537Error::from_code`].
use std::collections::TryReserveError;
use thiserror::Error;

/// Status code returned for a successful call.
pub const SUCCESS_CODE: u32 = 0;

/// Status code of an [`Eip2537Error::Unknown`] whose payload collides with
/// [`SUCCESS_CODE`] or a code of the taxonomy.
pub const UNKNOWN_CODE: u32 = u32::MAX;

/// Highest code of the taxonomy.
const LAST_KNOWN_CODE: u32 = 7;

/// Reasons an EIP-2537 operation can fail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum Eip2537Error {
    /// A non-infinity point does not satisfy the curve equation.
    #[error("point not on curve")]
    PointNotOnCurve,
    /// A point is on the curve but outside the prime-order subgroup.
    #[error("point not in subgroup")]
    PointNotInSubgroup,
    /// A field element is not strictly below the field modulus.
    #[error("invalid element")]
    InvalidElement,
    /// The top padding bytes of a field element slot are not zero.
    #[error("encoding error")]
    EncodingError,
    /// Input length is not a valid multiple of the operation's item width.
    #[error("invalid length")]
    InvalidLength,
    /// Input is empty.
    #[error("empty input")]
    EmptyInput,
    /// Operand or scratch buffer could not be allocated.
    #[error("memory allocation error")]
    MemoryError,
    /// Status code that does not belong to the taxonomy.
    #[error("unknown error condition ({0})")]
    Unknown(u32),
}

impl Eip2537Error {
    /// Returns the numeric status code for this error. Never [`SUCCESS_CODE`].
    pub const fn code(&self) -> u32 {
        match self {
            Self::PointNotOnCurve => 1,
            Self::PointNotInSubgroup => 2,
            Self::InvalidElement => 3,
            Self::EncodingError => 4,
            Self::InvalidLength => 5,
            Self::EmptyInput => 6,
            Self::MemoryError => 7,
            Self::Unknown(code) if *code > LAST_KNOWN_CODE => *code,
            Self::Unknown(_) => UNKNOWN_CODE,
        }
    }

    /// Translates a numeric status code.
    ///
    /// [`SUCCESS_CODE`] maps to `Ok(())`, codes outside the taxonomy map to
    /// [`Eip2537Error::Unknown`].
    pub const fn from_code(code: u32) -> Result<(), Self> {
        let err = match code {
            SUCCESS_CODE => return Ok(()),
            1 => Self::PointNotOnCurve,
            2 => Self::PointNotInSubgroup,
            3 => Self::InvalidElement,
            4 => Self::EncodingError,
            5 => Self::InvalidLength,
            6 => Self::EmptyInput,
            7 => Self::MemoryError,
            other => Self::Unknown(other),
        };
        Err(err)
    }
}

impl From<TryReserveError> for Eip2537Error {
    fn from(err: TryReserveError) -> Self {
        log::warn!(target: "eip2537", "operand allocation failed: {err}");
        Self::MemoryError
    }
}

/// Returns the numeric status code of a call result.
pub fn status_code<T>(result: &Result<T, Eip2537Error>) -> u32 {
    match result {
        Ok(_) => SUCCESS_CODE,
        Err(err) => err.code(),
    }
}

//! Interface for the precompiles. It contains the precompile result type,
//! the precompile output type, and the precompile value itself.
use crate::bls12_381::{ArithmeticEngine, BlstEngine};
use crate::{Eip2537Error, PrecompileId};
use alloy_primitives::Bytes;

/// A precompile operation result type
///
/// Returns either `Ok(PrecompileOutput)` or `Err(error)`.
pub type PrecompileResult = Result<PrecompileOutput, Eip2537Error>;

/// Precompile execution output
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrecompileOutput {
    /// Gas charged for the call. Reported only; the caller enforces limits.
    pub gas_used: u64,
    /// Output bytes
    pub bytes: Bytes,
}

impl PrecompileOutput {
    /// Returns new precompile output with the given gas used and output bytes.
    pub fn new(gas_used: u64, bytes: Bytes) -> Self {
        Self { gas_used, bytes }
    }
}

/// Precompile function type. Takes input and the arithmetic engine and returns precompile result.
pub type PrecompileFn = fn(&[u8], &dyn ArithmeticEngine) -> PrecompileResult;

/// An EIP-2537 operation.
#[derive(Clone, Copy, Debug)]
pub struct Precompile {
    id: PrecompileId,
    function: PrecompileFn,
}

impl Precompile {
    /// Create new precompile.
    pub const fn new(id: PrecompileId, function: PrecompileFn) -> Self {
        Self { id, function }
    }

    /// Returns the precompile id.
    pub const fn id(&self) -> PrecompileId {
        self.id
    }

    /// Returns the precompile address.
    pub const fn address(&self) -> u64 {
        self.id.address()
    }

    /// Returns the precompile function.
    pub const fn precompile(&self) -> PrecompileFn {
        self.function
    }

    /// Executes the precompile with the [`blst`] engine.
    pub fn execute(&self, input: &[u8]) -> PrecompileResult {
        self.execute_with(input, &BlstEngine)
    }

    /// Executes the precompile with the given engine.
    pub fn execute_with(&self, input: &[u8], engine: &dyn ArithmeticEngine) -> PrecompileResult {
        let result = (self.function)(input, engine);
        if let Err(err) = &result {
            log::trace!(
                target: "eip2537",
                "{} rejected {} byte input: {err}",
                self.id,
                input.len()
            );
        }
        result
    }
}

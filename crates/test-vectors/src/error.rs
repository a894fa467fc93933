use alloy_primitives::Bytes;
use precompile::Eip2537Error;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or running test vectors.
#[derive(Debug, Error)]
pub enum VectorError {
    /// Vector file could not be read.
    #[error("reading {path:?} failed: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },
    /// Vector file is not valid JSON for the expected schema.
    #[error("parsing {path:?} failed: {source}")]
    Json {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: serde_json::Error,
    },
    /// A success vector was rejected.
    #[error("vector {name} failed: {error}")]
    UnexpectedError {
        /// Vector name.
        name: String,
        /// Returned error.
        error: Eip2537Error,
    },
    /// A success vector produced a different output.
    #[error("vector {name}: expected output {expected}, got {got}")]
    OutputMismatch {
        /// Vector name.
        name: String,
        /// Expected output.
        expected: Bytes,
        /// Actual output.
        got: Bytes,
    },
    /// A success vector charged a different amount of gas.
    #[error("vector {name}: expected gas {expected}, got {got}")]
    GasMismatch {
        /// Vector name.
        name: String,
        /// Expected gas.
        expected: u64,
        /// Actual gas.
        got: u64,
    },
    /// A failure vector was accepted.
    #[error("vector {name} should have failed with {expected_error}")]
    UnexpectedSuccess {
        /// Vector name.
        name: String,
        /// Reason recorded in the vector.
        expected_error: String,
    },
}

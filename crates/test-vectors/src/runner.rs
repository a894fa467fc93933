use crate::{FailureVector, SuccessVector, VectorError};
use precompile::Precompile;
use serde::de::DeserializeOwned;
use std::path::Path;

fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, VectorError> {
    let json = std::fs::read_to_string(path).map_err(|source| VectorError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&json).map_err(|source| VectorError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a JSON array of [`SuccessVector`]s.
pub fn load_success_vectors(path: impl AsRef<Path>) -> Result<Vec<SuccessVector>, VectorError> {
    load(path.as_ref())
}

/// Loads a JSON array of [`FailureVector`]s.
pub fn load_failure_vectors(path: impl AsRef<Path>) -> Result<Vec<FailureVector>, VectorError> {
    load(path.as_ref())
}

/// Runs a single success vector.
///
/// The output must match byte for byte and the reported gas must equal the
/// vector's gas.
pub fn run_success_vector(
    precompile: &Precompile,
    vector: &SuccessVector,
) -> Result<(), VectorError> {
    let out = precompile
        .execute(&vector.input)
        .map_err(|error| VectorError::UnexpectedError {
            name: vector.name.clone(),
            error,
        })?;
    if out.bytes != vector.expected {
        return Err(VectorError::OutputMismatch {
            name: vector.name.clone(),
            expected: vector.expected.clone(),
            got: out.bytes,
        });
    }
    if out.gas_used != vector.gas {
        return Err(VectorError::GasMismatch {
            name: vector.name.clone(),
            expected: vector.gas,
            got: out.gas_used,
        });
    }
    Ok(())
}

/// Runs a single failure vector. Any error passes, the error kind is not
/// compared with [`FailureVector::expected_error`].
pub fn run_failure_vector(
    precompile: &Precompile,
    vector: &FailureVector,
) -> Result<(), VectorError> {
    match precompile.execute(&vector.input) {
        Ok(_) => Err(VectorError::UnexpectedSuccess {
            name: vector.name.clone(),
            expected_error: vector.expected_error.clone(),
        }),
        Err(err) => {
            log::debug!(
                target: "eip2537",
                "{}: {} rejected with {err} (expected {})",
                vector.name,
                precompile.id(),
                vector.expected_error
            );
            Ok(())
        }
    }
}

/// Runs every success vector, stopping at the first failure.
pub fn run_success_vectors(
    precompile: &Precompile,
    vectors: &[SuccessVector],
) -> Result<(), VectorError> {
    for vector in vectors {
        run_success_vector(precompile, vector)?;
        log::debug!(target: "eip2537", "{}: {} passed", vector.name, precompile.id());
    }
    Ok(())
}

/// Runs every failure vector, stopping at the first accepted input.
pub fn run_failure_vectors(
    precompile: &Precompile,
    vectors: &[FailureVector],
) -> Result<(), VectorError> {
    vectors
        .iter()
        .try_for_each(|vector| run_failure_vector(precompile, vector))
}

use crate::{SuccessVector, VectorError};
use precompile::Precompile;
use std::time::{Duration, Instant};

/// Throughput of one precompile over one vector.
#[derive(Clone, Debug, PartialEq)]
pub struct Throughput {
    /// Vector name.
    pub name: String,
    /// Gas charged per call.
    pub gas_per_op: u64,
    /// Number of timed calls.
    pub iterations: u64,
    /// Total time spent in the timed calls.
    pub elapsed: Duration,
    /// Gas processed per second, in millions.
    pub mgas_per_sec: f64,
}

impl Throughput {
    /// Calls `precompile` `iterations` times on the vector's input.
    ///
    /// The input is copied into a fresh buffer before every call so the
    /// precompile never sees a buffer it has already read. The first call's
    /// output is checked against the vector before timing starts.
    pub fn measure(
        precompile: &Precompile,
        vector: &SuccessVector,
        iterations: u64,
    ) -> Result<Self, VectorError> {
        crate::run_success_vector(precompile, vector)?;

        let mut buf = vec![0u8; vector.input.len()];
        let mut elapsed = Duration::ZERO;
        let mut gas_used = 0u64;
        for _ in 0..iterations {
            buf.copy_from_slice(&vector.input);
            let start = Instant::now();
            let res = precompile.execute(&buf);
            elapsed += start.elapsed();
            let out = res.map_err(|error| VectorError::UnexpectedError {
                name: vector.name.clone(),
                error,
            })?;
            gas_used = gas_used.saturating_add(out.gas_used);
        }

        let elapsed_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        let mgas_per_sec = mgas_per_sec(gas_used, elapsed_ns);
        log::debug!(
            target: "eip2537",
            "{}/{}: {iterations} ops, {} gas/op, {mgas_per_sec} Mgas/s",
            precompile.id(),
            vector.name,
            vector.gas
        );
        Ok(Self {
            name: vector.name.clone(),
            gas_per_op: vector.gas,
            iterations,
            elapsed,
            mgas_per_sec,
        })
    }
}

/// Millions of gas per second, rounded down to two decimals.
///
/// A zero duration is treated as one nanosecond.
pub fn mgas_per_sec(gas_used: u64, elapsed_ns: u64) -> f64 {
    let elapsed_ns = u128::from(elapsed_ns.max(1));
    let hundredths = 100 * 1000 * u128::from(gas_used) / elapsed_ns;
    hundredths as f64 / 100.0
}

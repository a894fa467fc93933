//! Group-generic multi-scalar-multiplication strategies.
use crate::Eip2537Error;
use alloy_primitives::U256;
use std::collections::BinaryHeap;

/// The group operations the strategies need.
pub(crate) trait MsmGroup: Clone {
    /// The group identity.
    fn identity() -> Self;

    /// Group law.
    fn add(&self, other: &Self) -> Self;

    /// Scalar multiplication by a full 256-bit integer.
    fn mul(&self, scalar: &U256) -> Self;
}

/// Multiplies every point by its scalar and sums the products.
pub(crate) fn naive<G: MsmGroup>(terms: &[(G, U256)]) -> G {
    terms
        .iter()
        .fold(G::identity(), |acc, (point, scalar)| acc.add(&point.mul(scalar)))
}

/// Heap entry. Ordered by scalar, ties broken by index.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct Term {
    scalar: U256,
    index: usize,
}

/// Bos-Coster multi-scalar-multiplication.
///
/// With `a >= b` the two largest scalars, `a*A + b*B` is rewritten as
/// `(a mod b)*A + b*(B + (a / b)*A)`. Each step shrinks the largest scalar
/// until a single term is left, which is multiplied directly.
pub(crate) fn bos_coster<G: MsmGroup>(terms: Vec<(G, U256)>) -> Result<G, Eip2537Error> {
    let mut points = Vec::new();
    points.try_reserve_exact(terms.len())?;
    let mut heap = BinaryHeap::new();
    heap.try_reserve(terms.len())?;

    for (point, scalar) in terms {
        if scalar.is_zero() {
            continue;
        }
        heap.push(Term {
            scalar,
            index: points.len(),
        });
        points.push(point);
    }

    loop {
        let Some(a) = heap.pop() else {
            return Ok(G::identity());
        };
        let Some(b) = heap.pop() else {
            return Ok(points[a.index].mul(&a.scalar));
        };

        let quotient = a.scalar / b.scalar;
        let remainder = a.scalar % b.scalar;

        let folded = points[a.index].mul(&quotient);
        points[b.index] = points[b.index].add(&folded);
        heap.push(b);

        if !remainder.is_zero() {
            heap.push(Term {
                scalar: remainder,
                index: a.index,
            });
        }
    }
}

//! Curve and subgroup membership policy.
//!
//! From EIP-2537: scalar multiplications, MSMs and pairings MUST perform a
//! subgroup check. Additions only require the inputs to be on the curve.
//! The point at infinity passes every check.
use super::engine::ArithmeticEngine;
use super::types::{G1Point, G2Point};
use crate::Eip2537Error;

/// Checks an operation applies to each input point.
///
/// Defaults to the stricter policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointChecks {
    /// Curve equation only.
    CurveOnly,
    /// Curve equation, then subgroup membership.
    #[default]
    CurveAndSubgroup,
}

/// Fails with [`Eip2537Error::PointNotOnCurve`] if `p` is off the G1 curve.
pub fn require_g1_on_curve(p: &G1Point, engine: &dyn ArithmeticEngine) -> Result<(), Eip2537Error> {
    if p.is_infinity() || engine.g1_on_curve(p) {
        return Ok(());
    }
    Err(Eip2537Error::PointNotOnCurve)
}

/// Fails with [`Eip2537Error::PointNotInSubgroup`] if `p` is outside the G1 subgroup.
pub fn require_g1_in_subgroup(
    p: &G1Point,
    engine: &dyn ArithmeticEngine,
) -> Result<(), Eip2537Error> {
    if p.is_infinity() || engine.g1_in_subgroup(p) {
        return Ok(());
    }
    Err(Eip2537Error::PointNotInSubgroup)
}

/// Fails with [`Eip2537Error::PointNotOnCurve`] if `p` is off the G2 twist.
pub fn require_g2_on_curve(p: &G2Point, engine: &dyn ArithmeticEngine) -> Result<(), Eip2537Error> {
    if p.is_infinity() || engine.g2_on_curve(p) {
        return Ok(());
    }
    Err(Eip2537Error::PointNotOnCurve)
}

/// Fails with [`Eip2537Error::PointNotInSubgroup`] if `p` is outside the G2 subgroup.
pub fn require_g2_in_subgroup(
    p: &G2Point,
    engine: &dyn ArithmeticEngine,
) -> Result<(), Eip2537Error> {
    if p.is_infinity() || engine.g2_in_subgroup(p) {
        return Ok(());
    }
    Err(Eip2537Error::PointNotInSubgroup)
}

/// Applies `checks` to a G1 point.
pub fn validate_g1(
    p: &G1Point,
    checks: PointChecks,
    engine: &dyn ArithmeticEngine,
) -> Result<(), Eip2537Error> {
    require_g1_on_curve(p, engine)?;
    if checks == PointChecks::CurveAndSubgroup {
        require_g1_in_subgroup(p, engine)?;
    }
    Ok(())
}

/// Applies `checks` to a G2 point.
pub fn validate_g2(
    p: &G2Point,
    checks: PointChecks,
    engine: &dyn ArithmeticEngine,
) -> Result<(), Eip2537Error> {
    require_g2_on_curve(p, engine)?;
    if checks == PointChecks::CurveAndSubgroup {
        require_g2_in_subgroup(p, engine)?;
    }
    Ok(())
}

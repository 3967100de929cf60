//! Equivalent-exposure solver.
//!
//! Works on a single "less light" axis where every parameter's table step
//! is multiplied by its [`light_direction`](ParameterKind::light_direction).
//! An exposure is equivalent to the base when the darkening contributed by
//! all three parameters sums to the requested compensation:
//!
//! ```text
//! d(p)        = light_direction(p) × (index_new(p) − index_base(p))
//! d(unknown)  = −(d(fixed_a) + d(fixed_b)) + ev × steps_per_stop
//! raw_index   = index_base(unknown) + light_direction(unknown) × round(d(unknown))
//! ```
//!
//! The raw index is returned unclamped; bounding belongs to the classifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::request::{EquivalenceRequest, ExposureTriple};
use crate::error::{Result, StopwiseError};
use crate::scale::mapper::to_index;

/// Tolerance for treating a fractional delta as an exact half step.
const TIE_EPSILON: f64 = 1e-9;

/// How a fractional step delta snaps to a whole table step.
///
/// Rounding applies to the summed delta (fixed-parameter steps plus EV
/// compensation), not to the resulting index, so a tie moves the solved
/// parameter by the smaller amount: half a stop of compensation at full-stop
/// increments leaves the base value in place under `HalfTowardZero`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundingMode {
    /// Nearest step, halves toward zero (`1.5 → 1`, `-1.5 → -1`).
    #[default]
    HalfTowardZero,
    /// Nearest step, halves away from zero (`1.5 → 2`, `-1.5 → -2`).
    HalfAwayFromZero,
    /// Nearest step, halves to the even neighbour (`1.5 → 2`, `2.5 → 2`).
    HalfEven,
}

impl RoundingMode {
    pub fn round(self, delta: f64) -> i64 {
        let whole = delta.trunc();
        let frac = delta - whole;
        let snapped = if ((frac.abs() - 0.5).abs()) < TIE_EPSILON {
            match self {
                Self::HalfTowardZero => whole,
                Self::HalfAwayFromZero => whole + frac.signum(),
                Self::HalfEven if whole % 2.0 == 0.0 => whole,
                Self::HalfEven => whole + frac.signum(),
            }
        } else {
            delta.round()
        };
        // Saturating float-to-int cast.
        snapped as i64
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::HalfTowardZero => "half-toward-zero",
            Self::HalfAwayFromZero => "half-away-from-zero",
            Self::HalfEven => "half-even",
        }
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RoundingMode {
    type Err = StopwiseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "half-toward-zero" | "toward-zero" => Ok(Self::HalfTowardZero),
            "half-away-from-zero" | "away-from-zero" => Ok(Self::HalfAwayFromZero),
            "half-even" | "even" | "bankers" => Ok(Self::HalfEven),
            _ => Err(StopwiseError::UnknownRounding(s.to_string())),
        }
    }
}

/// Compute the unclamped stop index of `request.solve_for`.
///
/// Fails with [`StopwiseError::NotFound`] when a base or target value is
/// not on the request's scale, and with
/// [`StopwiseError::InvalidCompensation`] for a non-finite compensation.
pub fn solve(request: &EquivalenceRequest, rounding: RoundingMode) -> Result<i64> {
    if !request.ev_compensation.is_finite() {
        return Err(StopwiseError::InvalidCompensation(request.ev_compensation));
    }

    let increment = request.increment;
    let base = ExposureTriple::resolve(&request.base, increment)?;

    let mut fixed_darkening = 0_i64;
    for (parameter, target) in request.fixed_targets() {
        let target_index = to_index(parameter, increment, target)? as i64;
        let base_index = base.get(parameter) as i64;
        fixed_darkening += parameter.light_direction() * (target_index - base_index);
    }

    let steps = f64::from(increment.steps_per_stop());
    let delta = -(fixed_darkening as f64) + request.ev_compensation * steps;
    let delta = rounding.round(delta);

    let unknown = request.solve_for;
    let raw_index = (base.get(unknown) as i64)
        .saturating_add(unknown.light_direction().saturating_mul(delta));

    tracing::debug!(
        solve_for = %unknown,
        %increment,
        fixed_darkening,
        ev = request.ev_compensation,
        delta,
        raw_index,
        "solved equivalent exposure"
    );

    Ok(raw_index)
}

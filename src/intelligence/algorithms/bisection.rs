// ABOUTME: Bisection root finder for monotonic, sign-crossing functions
// ABOUTME: Bounded interval halving used to invert VDOT and difficulty formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use tracing::{debug, warn};

use crate::constants::vdot::SOLVER_TOLERANCE;

/// Hard iteration cap, far above what the engine's bounds and tolerance need
const MAX_ITERATIONS: u32 = 200;

/// Interval-halving root finder
///
/// The function must change sign on `[lower, upper]`. When it does not, the
/// search still terminates after a bounded number of halvings and returns the
/// converged midpoint, which is then meaningless; a warning is logged but no
/// error is surfaced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bisection {
    /// Stop once the bracketing interval is narrower than this
    pub tolerance: f64,
    /// Upper bound on the number of halvings
    pub max_iterations: u32,
}

impl Default for Bisection {
    fn default() -> Self {
        Self {
            tolerance: SOLVER_TOLERANCE,
            max_iterations: MAX_ITERATIONS,
        }
    }
}

impl Bisection {
    /// Create a solver with a custom tolerance
    #[must_use]
    pub const fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            max_iterations: MAX_ITERATIONS,
        }
    }

    /// Find `x` in `[lower, upper]` with `f(x) ≈ 0`
    pub fn solve<F>(&self, f: F, lower: f64, upper: f64) -> f64
    where
        F: Fn(f64) -> f64,
    {
        let (mut lo, mut hi) = if lower <= upper {
            (lower, upper)
        } else {
            (upper, lower)
        };

        let mut f_lo = f(lo);
        if f_lo * f(hi) > 0.0 {
            warn!(
                lower = lo,
                upper = hi,
                "bisection bounds do not bracket a root, result is not meaningful"
            );
        }

        let mut iterations = 0;
        while hi - lo > self.tolerance && iterations < self.max_iterations {
            let mid = 0.5 * (lo + hi);
            let f_mid = f(mid);
            if f_lo * f_mid <= 0.0 {
                hi = mid;
            } else {
                lo = mid;
                f_lo = f_mid;
            }
            iterations += 1;
        }

        debug!(iterations, width = hi - lo, "bisection finished");
        0.5 * (lo + hi)
    }
}

/// Solve with the default tolerance (`1e-5`)
pub fn bisect<F>(f: F, lower: f64, upper: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    Bisection::default().solve(f, lower, upper)
}

// ABOUTME: Numerical building blocks shared by the training science components
// ABOUTME: Provides the bisection root finder and TRIMP algorithm selection

//! Algorithm Module
//!
//! Small, dependency-free numerical pieces used by the load simulator and
//! the aerobic capacity estimator:
//!
//! - **Bisection**: interval-halving root finder used to invert the VDOT and
//!   difficulty formulas
//! - **TRIMP**: Banister training impulse with enum-based algorithm selection
//!
//! # Example
//!
//! ```rust
//! use stride_engine::intelligence::algorithms::{Bisection, TrimpAlgorithm};
//!
//! # fn main() -> stride_engine::errors::AppResult<()> {
//! let root = Bisection::default().solve(|x| x * x - 2.0, 0.0, 2.0);
//! assert!((root - 2.0_f64.sqrt()).abs() < 1e-4);
//!
//! let trimp = TrimpAlgorithm::BannisterMale.calculate(60.0, 150.0, 60.0, 190.0)?;
//! assert!(trimp > 0.0);
//! # Ok(())
//! # }
//! ```

pub mod bisection;
pub mod trimp;

pub use bisection::{bisect, Bisection};
pub use trimp::{calculate_trimp, TrimpAlgorithm};

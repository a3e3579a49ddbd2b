//! Fixed-step explicit solvers for scalar ODEs.
//!
//! - [`explicit`] — single-step methods ([`explicit::Euler`], [`explicit::Rk4`])
//!   behind the [`explicit::Stepper`] trait
//! - [`integrate`] — drives a stepper for a fixed number of steps, either
//!   lazily through [`integrate::Trajectory`] or eagerly with
//!   [`integrate::solve`]

pub mod explicit;
pub mod integrate;

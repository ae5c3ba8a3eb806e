//! # Numerics
//!
//! Self-contained numerical kernels used by the kinetics layer: special functions
//! ([`special`]), adaptive Gauss–Kronrod quadrature ([`quadrature`]) and a
//! bracketed Brent root finder ([`roots`]). All routines are deterministic and
//! bounded by explicit tolerance and iteration limits.

pub mod quadrature;
pub mod roots;
pub mod special;

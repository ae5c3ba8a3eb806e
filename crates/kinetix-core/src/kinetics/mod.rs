//! # Kinetics Module
//!
//! Collision physics built on the particle model of [`crate::core`]: everything
//! here is a pure function of temperature, species and level indices, apart from
//! the temperature-keyed caches inside the molecules it reads.
//!
//! ## Layers
//!
//! - **Probabilities** ([`probabilities`]) - FHO and SSH transition probabilities.
//! - **Cross-sections** ([`crosssection`]) - elastic and inelastic cross-sections,
//!   their velocity integrals and the Ω^(l,r) collision integrals.
//! - **Rates** ([`rates`]) - dissociation, recombination, VT and VV rate constants.
//! - **Relaxation** ([`relaxation`]) - rotational and vibrational relaxation times.
//! - **Affinities** ([`affinity`]) - thermodynamic forces Γ of elementary processes.
//!
//! ## Conventions
//!
//! Inputs and outputs are SI. Relative collision speeds are dimensionless,
//! `g = v/√(2kT/μ)`. Level indices are never clamped: an index beyond a molecule's
//! `num_vibr` panics. Physically allowed situations with no effect (a collision
//! below threshold, a forbidden transition at the given speed) yield 0; calls that
//! make no sense (a zero-quantum transition, an unsupported `(l, r)` pair) return a
//! [`KineticsError`].

pub mod affinity;
pub mod crosssection;
pub mod error;
pub mod probabilities;
pub mod rates;
pub mod relaxation;

pub use error::KineticsError;

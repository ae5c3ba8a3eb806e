//! # Core Module
//!
//! The foundation the kinetics layer computes on: physical constants, numerical
//! kernels, data providers and the in-memory particle model.
//!
//! ## Architecture
//!
//! - **Constants** ([`constants`]) - CODATA constants and unit conversion factors.
//! - **Numerics** ([`numerics`]) - special functions, adaptive quadrature and
//!   bracketed root finding.
//! - **Data Providers** ([`data`]) - species, interaction and dissociation tables
//!   with the traits the rest of the library reads them through.
//! - **Particles** ([`particles`]) - atoms and the three molecule flavours with
//!   their temperature-keyed partition function caches.
//!
//! Nothing in this module depends on [`crate::kinetics`].

pub mod constants;
pub mod data;
pub mod numerics;
pub mod particles;

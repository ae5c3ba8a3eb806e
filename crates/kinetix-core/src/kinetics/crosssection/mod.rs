//! # Cross-Sections and Collision Integrals
//!
//! Elastic and inelastic (VT, VV, dissociation) cross-sections as functions of the
//! dimensionless relative speed `g = v/√(2kT/μ)`, their velocity integrals, and the
//! Ω^(l,r) collision integrals of several interaction potentials.
//!
//! ## Velocity Integrals
//!
//! Every integral has the form
//!
//! ```text
//! I = √(kT / 2πμ) · ∫_{g_min}^{∞} g^(3 + 2·deg) · e^(−g²) · σ(g) dg
//! ```
//!
//! where `g_min` is the kinematic threshold of the process (0 for elastic
//! collisions). Rate constants are `8·I` at `deg = 0`. [`KtScale::NoKt`] drops the
//! `√(kT)` factor. The integrand is evaluated in units of a reference area so the
//! quadrature tolerances apply to numbers of order one.
//!
//! ## Submodules
//!
//! - [`models`]: model enums ([`CrossSectionModel`], [`OmegaModel`], scales).
//! - [`elastic`]: elastic and transport (momentum-transfer, viscosity)
//!   cross-sections and `elastic_integral`.
//! - [`inelastic`]: FHO VT/VV and dissociation cross-sections and integrals,
//!   rotational energy-transfer integrals.
//! - [`omega`]: Ω^(l,r) for the rigid-sphere, Lennard-Jones, Born–Mayer, VSS and
//!   phenomenological (ESA) potentials.

pub mod elastic;
mod esa;
pub mod inelastic;
pub mod models;
pub mod omega;

pub use elastic::{
    crosssection_elastic, crosssection_momentum_transfer, crosssection_viscosity, elastic_integral,
};
pub use inelastic::{
    crosssection_diss, crosssection_vt_fho, crosssection_vv_fho, de_rot_sq_equiprob_pair,
    de_rot_sq_equiprob_single, diss_integral, diss_integral_numeric, min_dimensionless_vel_diss,
    rot_energy_change_integral, vt_integral_fho, vv_integral_fho,
};
pub use models::{CrossSectionModel, DissociationEnergy, KtScale, OmegaModel, OmegaScale};
pub use omega::{omega, omega_rigid_sphere};

use crate::core::constants::K_BOLTZMANN;
use crate::core::numerics::quadrature::{QuadratureConfig, integrate_to_infinity};
use std::f64::consts::PI;

/// `√(kT/2πμ)`, or `√(1/2πμ)` without the `kT` factor.
pub(crate) fn velocity_prefactor(t: f64, mass: f64, scale: KtScale) -> f64 {
    match scale {
        KtScale::Full => (K_BOLTZMANN * t / (2.0 * PI * mass)).sqrt(),
        KtScale::NoKt => (1.0 / (2.0 * PI * mass)).sqrt(),
    }
}

/// `g^(3+2·deg)·e^(−(g² − shift))`, exactly zero once the exponential underflows.
#[inline]
pub(crate) fn collision_weight(g: f64, deg: u32, shift: f64) -> f64 {
    let damping = (shift - g * g).exp();
    if damping == 0.0 {
        0.0
    } else {
        g.powi(3 + 2 * deg as i32) * damping
    }
}

/// `∫_{lower}^{∞} g^(3+2·deg)·e^(−g²)·f(g) dg` with the default tolerances.
///
/// The factor `e^(−lower²)` is taken out of the integrand so that thresholds far
/// in the tail still integrate to full relative accuracy.
pub(crate) fn weighted_integral<F>(lower: f64, deg: u32, f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    let shift = lower * lower;
    let integrand = |g: f64| {
        let w = collision_weight(g, deg, shift);
        if w == 0.0 { 0.0 } else { w * f(g) }
    };
    integrate_to_infinity(integrand, lower, &QuadratureConfig::default()).value * (-shift).exp()
}

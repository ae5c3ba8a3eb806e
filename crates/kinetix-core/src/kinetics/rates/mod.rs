//! # Rate Constants
//!
//! Dissociation, recombination and vibrational-transition rate constants [m³/s,
//! m⁶/s for recombination].
//!
//! ## Dissociation
//!
//! Two families are provided:
//!
//! - **Treanor–Marrone** rates scale the Arrhenius equilibrium rate
//!   `k_eq = A·Tⁿ·exp(−D/kT)` by the level factor `Z_diss(T, i, U)`.
//! - **Integral** rates are `8×` the velocity integral of the dissociation
//!   cross-section from the kinematic threshold of the level.
//!
//! Functions with the `_sts` suffix give the rate from or into a single level.
//! Their unsuffixed counterparts work on a [`QuasiMolecule`](crate::core::particles::QuasiMolecule):
//! dissociation rates are population-weighted averages over the populated levels
//! and recombination rates are sums over them.
//!
//! Recombination always follows from dissociation by detailed balance,
//! `k_rec = rec_rate_sts_multiplier · k_diss`.
//!
//! ## Vibrational transitions
//!
//! [`vt_rate_ssh`] (single-quantum only), [`vt_rate_fho`] and [`vv_rate_fho`].

pub mod dissociation;
pub mod vibrational;

pub use dissociation::{
    diss_rate_integral, diss_rate_integral_sts, diss_rate_treanor_marrone,
    diss_rate_treanor_marrone_sts, k_diss_eq, ln_rec_rate_sts_multiplier, raw_k_diss_eq,
    rec_rate_integral, rec_rate_integral_sts, rec_rate_sts_multiplier,
    rec_rate_treanor_marrone, rec_rate_treanor_marrone_sts,
};
pub use vibrational::{vt_rate_fho, vt_rate_ssh, vv_rate_fho};

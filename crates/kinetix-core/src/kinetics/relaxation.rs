//! Rotational and vibrational relaxation times.
//!
//! Rotational times come from Parker's collision number `ζ(T)` multiplied by a
//! mean collision time, or directly from the mean squared rotational energy change
//! per collision. Vibrational times use the Millikan–White correlation with Park's
//! high-temperature correction.

use crate::core::constants::{AMU_TO_KG, ATM_TO_PA, K_BOLTZMANN};
use crate::core::data::InteractionData;
use crate::core::numerics::special::gamma;
use crate::core::particles::Molecule;
use crate::kinetics::crosssection::{
    CrossSectionModel, KtScale, OmegaModel, OmegaScale, elastic_integral, omega,
    rot_energy_change_integral,
};
use crate::kinetics::error::KineticsError;
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// Scattering law defining the mean collision time a collision number refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScatteringModel {
    /// Variable soft sphere.
    #[default]
    Vss,
    /// Variable hard sphere (VSS with isotropic scattering).
    Vhs,
    RigidSphere,
}

impl fmt::Display for ScatteringModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Vss => "VSS",
            Self::Vhs => "VHS",
            Self::RigidSphere => "RS",
        };
        f.write_str(name)
    }
}

impl FromStr for ScatteringModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "VSS" => Ok(Self::Vss),
            "VHS" => Ok(Self::Vhs),
            "RS" | "RIGID-SPHERE" => Ok(Self::RigidSphere),
            other => Err(format!("Unknown scattering model: '{other}'")),
        }
    }
}

/// Parker's rotational collision number
/// `ζ∞ / (1 + (π^(3/2)/2)·√(ε/T) + (π²/4 + 2)·(ε/T) + π^(3/2)·(ε/T)^(3/2))`.
///
/// `eps` is the well depth ε/k [K].
pub fn parker_zeta(t: f64, eps: f64, infcoll: f64) -> f64 {
    let x = eps / t;
    let pi_32 = PI.powf(1.5);
    infcoll / (1.0 + 0.5 * pi_32 * x.sqrt() + (0.25 * PI * PI + 2.0) * x + pi_32 * x.powf(1.5))
}

/// Mean collision time of the scattering model relative to the rigid-sphere one at
/// equal viscosity, `α·Γ(9/2 − ω)/((α + 1)(α + 2)·Γ(5/2 − ω))`.
fn collision_time_ratio(idata: &InteractionData, model: ScatteringModel) -> f64 {
    let (omega, alpha) = match model {
        ScatteringModel::Vss => (idata.vss_omega, idata.vss_alpha),
        ScatteringModel::Vhs => (idata.vss_omega, 1.0),
        ScatteringModel::RigidSphere => (0.5, 1.0),
    };
    alpha * gamma(4.5 - omega) / ((alpha + 1.0) * (alpha + 2.0) * gamma(2.5 - omega))
}

/// Rotational collision number referred to the mean collision time of `model`.
pub fn zr<M: Molecule + ?Sized>(
    t: f64,
    idata: &InteractionData,
    molecule: &M,
    model: ScatteringModel,
) -> f64 {
    parker_zeta(t, idata.lj_eps, molecule.structure().infcoll) / collision_time_ratio(idata, model)
}

/// Rotational relaxation time [s] at number density `n` [m⁻³] with VSS collisions:
/// `Z_r / (n·k_el)`, `k_el` the VSS collision rate constant.
pub fn rot_rel_time_vss<M: Molecule + ?Sized>(
    t: f64,
    n: f64,
    idata: &InteractionData,
    molecule: &M,
) -> f64 {
    let collision_rate = 8.0 * elastic_integral(t, 0, idata, CrossSectionModel::Vss, KtScale::Full);
    zr(t, idata, molecule, ScatteringModel::Vss) / (n * collision_rate)
}

/// Rotational relaxation time [s] from Parker's number and the mean collision time
/// `τ_c = 5π/(32·n·Ω^(2,2))` of the chosen potential.
pub fn rot_rel_time<M: Molecule + ?Sized>(
    t: f64,
    n: f64,
    idata: &InteractionData,
    molecule: &M,
    model: OmegaModel,
) -> Result<f64, KineticsError> {
    let omega22 = omega(t, 2, 2, idata, model, OmegaScale::Dimensional)?;
    let collision_time = 5.0 * PI / (32.0 * n * omega22);
    Ok(parker_zeta(t, idata.lj_eps, molecule.structure().infcoll) * collision_time)
}

/// Rotational relaxation time [s] from its definition,
/// `τ = 2·r·(kT)²·c_rot / (n·⟨ΔE_rot²⟩)`.
///
/// A partner of the same species rotates too, so energy is redistributed between
/// `r = 2` rotators; any other partner leaves one (`r = 1`).
pub fn rot_rel_time_def<M: Molecule + ?Sized>(
    t: f64,
    n: f64,
    idata: &InteractionData,
    molecule: &M,
    partner: &str,
    model: CrossSectionModel,
) -> f64 {
    let kt = K_BOLTZMANN * t;
    let pair = partner == molecule.name();
    let rotators = if pair { 2.0 } else { 1.0 };
    let energy_change = 8.0
        * rot_energy_change_integral(
            t,
            idata,
            model,
            molecule.avg_rot_energy(t, true),
            molecule.avg_rot_energy_sq(t, true),
            pair,
            KtScale::Full,
        );
    2.0 * rotators * kt * kt * molecule.c_rot(t) / (n * energy_change)
}

/// Millikan–White correlation `p·τ = exp(a·(T^(−1/3) − b) − 18.42)` [atm·s],
/// returned as τ [s] at pressure `p` [Pa].
pub fn raw_millikan_white(t: f64, p: f64, a: f64, b: f64) -> f64 {
    (a * (t.powf(-1.0 / 3.0) - b) - 18.42).exp() * ATM_TO_PA / p
}

/// Millikan–White vibrational relaxation time [s] with the standard coefficients
/// `a = 1.16e-3·μ^(1/2)·θ^(4/3)`, `b = 0.015·μ^(1/4)` (μ in amu, θ = hvc/k).
pub fn millikan_white<M: Molecule + ?Sized>(
    t: f64,
    n: f64,
    idata: &InteractionData,
    molecule: &M,
) -> f64 {
    let mu = idata.reduced_mass / AMU_TO_KG;
    let theta = molecule.structure().hvc / K_BOLTZMANN;
    let a = 1.16e-3 * mu.sqrt() * theta.powf(4.0 / 3.0);
    let b = 0.015 * mu.powf(0.25);
    raw_millikan_white(t, n * K_BOLTZMANN * t, a, b)
}

/// Park's collision-limited time `1/(n·σ_v·c̄)` [s] with mean molecular speed
/// `c̄ = √(8kT/πm)` and cross-section `sigma_v` [m²].
pub fn raw_park_correction(t: f64, n: f64, mass: f64, sigma_v: f64) -> f64 {
    let mean_speed = (8.0 * K_BOLTZMANN * t / (PI * mass)).sqrt();
    1.0 / (n * sigma_v * mean_speed)
}

/// Park's correction with `σ_v = 10⁻²¹·(50000/T)²` m².
pub fn park_correction<M: Molecule + ?Sized>(t: f64, n: f64, molecule: &M) -> f64 {
    let sigma_v = 1e-21 * (50_000.0 / t).powi(2);
    raw_park_correction(t, n, molecule.mass(), sigma_v)
}

/// Vibrational relaxation time [s]: Millikan–White plus Park's correction.
pub fn vibr_rel_time<M: Molecule + ?Sized>(
    t: f64,
    n: f64,
    idata: &InteractionData,
    molecule: &M,
) -> f64 {
    millikan_white(t, n, idata, molecule) + park_correction(t, n, molecule)
}

//! Transition probabilities of the forced harmonic oscillator (FHO) and
//! Schwartz–Slawsky–Herzfeld (SSH) models.
//!
//! FHO functions take the relative speed `g` in units of `√(2kT/μ)`. A transition
//! that is kinematically forbidden at that speed has probability 0.

use super::error::KineticsError;
use crate::core::constants::{H_BAR, H_PLANCK, K_BOLTZMANN};
use crate::core::data::InteractionData;
use crate::core::numerics::special::{binomial, factorial, x_over_sinh};
use crate::core::particles::Molecule;
use std::f64::consts::PI;

/// `end! / start!` as a float.
pub fn fact_div_fact(start: i64, end: i64) -> Result<f64, KineticsError> {
    if start >= end {
        return Err(KineticsError::InvalidArgument(format!(
            "fact_div_fact requires start < end, got start = {start}, end = {end}"
        )));
    }
    if end < 0 || start < 0 {
        return Err(KineticsError::InvalidArgument(format!(
            "fact_div_fact requires non-negative arguments, got start = {start}, end = {end}"
        )));
    }
    Ok(((start + 1)..=end).fold(1.0, |acc, k| acc * k as f64))
}

/// VT steric factor `1/(π|Δ|)`.
pub fn svt(delta: i32) -> f64 {
    1.0 / (PI * f64::from(delta.unsigned_abs()))
}

/// VV steric factor `C(2s, s)/16^s` with `s = |Δ|`.
pub fn svv(delta: i32) -> f64 {
    let s = delta.unsigned_abs();
    binomial(2 * s, s) / 16f64.powi(s as i32)
}

/// Mean of the pre- and post-collision relative speeds of a VT collision, or
/// `-1.0` when the post-collision speed would be imaginary.
pub fn vel_avg_vt(g: f64, e_before: f64, e_after: f64, mass: f64) -> f64 {
    let g_after_sq = g * g + 2.0 * (e_before - e_after) / mass;
    if g_after_sq < 0.0 {
        -1.0
    } else {
        0.5 * (g + g_after_sq.sqrt())
    }
}

/// VV analogue of [`vel_avg_vt`]: the energy defect is the total change of both
/// molecules' vibrational energy.
pub fn vel_avg_vv(
    g: f64,
    e1_before: f64,
    e1_after: f64,
    e2_before: f64,
    e2_after: f64,
    mass: f64,
) -> f64 {
    vel_avg_vt(g, e1_before + e2_before, e1_after + e2_after, mass)
}

/// `cosh(x)/sinh(y)` for `x ≥ 0`, `y > 0` without overflow.
fn cosh_over_sinh(x: f64, y: f64) -> f64 {
    (x - y).exp() * (1.0 + (-2.0 * x).exp()) / -(-2.0 * y).exp_m1()
}

fn check_delta(delta: i32, what: &str) -> Result<u32, KineticsError> {
    if delta == 0 {
        return Err(KineticsError::InvalidTransition(format!(
            "{what} transition must change the vibrational level"
        )));
    }
    Ok(delta.unsigned_abs())
}

fn level_factor(i: usize, delta: i32) -> Result<f64, KineticsError> {
    let from = i as i64;
    let to = from + i64::from(delta);
    fact_div_fact(from.min(to), from.max(to))
}

/// A vibrational jump checked once against its initial level(s): the number of
/// quanta `s = |Δ|` and the product of the level factors `max!/min!`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct QuantumJump {
    quanta: u32,
    level_factor: f64,
}

impl QuantumJump {
    /// VT jump `i → i + delta`.
    pub(crate) fn vt(i: usize, delta: i32) -> Result<Self, KineticsError> {
        Ok(Self {
            quanta: check_delta(delta, "VT")?,
            level_factor: level_factor(i, delta)?,
        })
    }

    /// VV exchange `i → i + i_delta`, `k → k − i_delta`.
    pub(crate) fn vv(i: usize, k: usize, i_delta: i32) -> Result<Self, KineticsError> {
        Ok(Self {
            quanta: check_delta(i_delta, "VV")?,
            level_factor: level_factor(i, i_delta)? * level_factor(k, -i_delta)?,
        })
    }

    /// `F/(s!)²·x^s·exp(−2F^{1/s}·x/(s + 1))` for the model parameter `x`.
    fn probability(&self, x: f64) -> f64 {
        let s = self.quanta;
        let s_f = f64::from(s);
        let f = self.level_factor;
        let s_fact = factorial(s);
        f / (s_fact * s_fact)
            * x.powi(s as i32)
            * (-2.0 * f.powf(1.0 / s_f) * x / (s_f + 1.0)).exp()
    }
}

/// FHO probability of the VT transition `i → i + delta`.
///
/// `mass` is the reduced mass of the pair, `beta` the repulsive range parameter,
/// `ve_before`/`ve_after` the vibrational energies of the two levels and `diss` the
/// well depth used by the attractive-potential correction φ.
#[allow(clippy::too_many_arguments)]
pub fn vt_probability_fho(
    g: f64,
    t: f64,
    mass: f64,
    beta: f64,
    ve_before: f64,
    ve_after: f64,
    diss: f64,
    i: usize,
    delta: i32,
) -> Result<f64, KineticsError> {
    let jump = QuantumJump::vt(i, delta)?;
    Ok(vt_probability_for_jump(g, t, mass, beta, ve_before, ve_after, diss, &jump))
}

/// [`vt_probability_fho`] for a jump that has already been validated.
#[allow(clippy::too_many_arguments)]
pub(crate) fn vt_probability_for_jump(
    g: f64,
    t: f64,
    mass: f64,
    beta: f64,
    ve_before: f64,
    ve_after: f64,
    diss: f64,
    jump: &QuantumJump,
) -> f64 {
    let v = g * (2.0 * K_BOLTZMANN * t / mass).sqrt();
    let v_avg = vel_avg_vt(v, ve_before, ve_after, mass);
    if v_avg <= 0.0 {
        return 0.0;
    }

    let s_f = f64::from(jump.quanta);
    let omega = (ve_before - ve_after).abs() / (s_f * H_BAR);
    let phi = 2.0 / PI * (2.0 * diss / (mass * v_avg * v_avg)).sqrt().atan();
    let a = PI * omega / (beta * v_avg);
    let kernel = cosh_over_sinh((1.0 + phi) * a, 2.0 * a);
    let steric = svt(jump.quanta as i32);
    let eps = steric * 8.0 * PI * PI * omega * mass / (beta * beta * H_PLANCK) * kernel * kernel;
    jump.probability(eps)
}

/// FHO probability of the VV exchange `i → i + i_delta`, `k → k − i_delta`.
#[allow(clippy::too_many_arguments)]
pub fn vv_probability_fho(
    g: f64,
    t: f64,
    mass: f64,
    beta: f64,
    ve1_before: f64,
    ve1_after: f64,
    ve2_before: f64,
    ve2_after: f64,
    i: usize,
    k: usize,
    i_delta: i32,
) -> Result<f64, KineticsError> {
    let jump = QuantumJump::vv(i, k, i_delta)?;
    Ok(vv_probability_for_jump(
        g, t, mass, beta, ve1_before, ve1_after, ve2_before, ve2_after, &jump,
    ))
}

/// [`vv_probability_fho`] for an exchange that has already been validated.
#[allow(clippy::too_many_arguments)]
pub(crate) fn vv_probability_for_jump(
    g: f64,
    t: f64,
    mass: f64,
    beta: f64,
    ve1_before: f64,
    ve1_after: f64,
    ve2_before: f64,
    ve2_after: f64,
    jump: &QuantumJump,
) -> f64 {
    let v = g * (2.0 * K_BOLTZMANN * t / mass).sqrt();
    let v_avg = vel_avg_vv(v, ve1_before, ve1_after, ve2_before, ve2_after, mass);
    if v_avg <= 0.0 {
        return 0.0;
    }

    let s_f = f64::from(jump.quanta);
    let omega1 = (ve1_before - ve1_after).abs() / (s_f * H_BAR);
    let omega2 = (ve2_before - ve2_after).abs() / (s_f * H_BAR);
    let omega = 0.5 * (omega1 + omega2);
    let xi = 2.0 * (omega1 - omega2).abs() / (beta * v_avg);
    let mismatch = x_over_sinh(xi);
    let scale = beta * v_avg / (2.0 * omega);
    let steric = svv(jump.quanta as i32);
    jump.probability(steric * scale * scale * mismatch * mismatch)
}

/// SSH probability of the one-quantum transition `1 → 0` in a collision with the
/// partner described by `idata`.
pub fn ssh_vt_p10<M: Molecule + ?Sized>(t: f64, idata: &InteractionData, molecule: &M) -> f64 {
    let structure = molecule.structure();
    let kt = K_BOLTZMANN * t;
    let mu = idata.reduced_mass;
    let beta = idata.fho_beta;
    let omega = structure.hvc / H_BAR;
    let well = idata.lj_eps * K_BOLTZMANN;

    let chi = (PI * PI * omega * omega * mu / (2.0 * beta * beta * kt)).cbrt();
    let r_e = structure.equilibrium_distance();
    let z0 = 0.5 * (beta * r_e).powi(2);

    1.294 / (z0 * (1.0 + 1.1 * well / kt)) * 4.0 * PI * PI * omega * mu / (beta * beta * H_PLANCK)
        * (4.0 * PI * chi / 3.0).sqrt()
        * (-3.0 * chi + H_BAR * omega / (2.0 * kt) + well / kt).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const MU: f64 = 1.16e-26;
    const BETA: f64 = 4.0e10;
    const WELL: f64 = 2.76e-21;
    const QUANTUM: f64 = 4.6e-20;

    #[test]
    fn fact_div_fact_matches_factorial_ratio() {
        assert_eq!(fact_div_fact(0, 5).unwrap(), 120.0);
        assert_eq!(fact_div_fact(3, 6).unwrap(), 120.0);
        assert_eq!(fact_div_fact(4, 5).unwrap(), 5.0);
        for (a, b) in [(1, 7), (2, 10), (5, 12)] {
            let expected = factorial(b as u32) / factorial(a as u32);
            assert_relative_eq!(fact_div_fact(a, b).unwrap(), expected, max_relative = 1e-14);
        }
    }

    #[test]
    fn fact_div_fact_rejects_invalid_arguments() {
        assert!(matches!(fact_div_fact(3, 3), Err(KineticsError::InvalidArgument(_))));
        assert!(matches!(fact_div_fact(4, 2), Err(KineticsError::InvalidArgument(_))));
        assert!(matches!(fact_div_fact(-3, -1), Err(KineticsError::InvalidArgument(_))));
        assert!(matches!(fact_div_fact(-1, 2), Err(KineticsError::InvalidArgument(_))));
    }

    #[test]
    fn steric_factors_match_closed_forms() {
        assert_relative_eq!(svt(1), 1.0 / PI);
        assert_relative_eq!(svt(-2), 1.0 / (2.0 * PI));
        assert_relative_eq!(svv(1), 2.0 / 16.0);
        assert_relative_eq!(svv(-2), 6.0 / 256.0);
    }

    #[test]
    fn vel_avg_vt_returns_sentinel_for_forbidden_transition() {
        let m = 1e-26;
        let g = 100.0;
        let e_before = 0.0;
        let e_after = 1e-21;
        assert!((e_before - e_after) * 2.0 / m + g * g < 0.0);
        assert_eq!(vel_avg_vt(g, e_before, e_after, m), -1.0);
    }

    #[test]
    fn vel_avg_vt_is_at_least_half_the_initial_speed() {
        let m = 1e-26;
        for (g, e1, e2) in [(100.0, 0.0, 4e-23), (1000.0, 1e-21, 0.0), (500.0, 2e-22, 2e-22)] {
            let v = vel_avg_vt(g, e1, e2, m);
            assert!(v >= g / 2.0);
        }
        assert_eq!(vel_avg_vt(300.0, 1e-21, 1e-21, m), 300.0);
    }

    #[test]
    fn vel_avg_vv_uses_total_energy_defect() {
        let m = 1e-26;
        let vv = vel_avg_vv(800.0, 2e-21, 1e-21, 1e-21, 2e-21, m);
        assert_eq!(vv, 800.0);
    }

    #[test]
    fn vt_probability_rejects_zero_quantum_jump() {
        let result = vt_probability_fho(1.0, 1000.0, MU, BETA, QUANTUM, QUANTUM, WELL, 3, 0);
        assert!(matches!(result, Err(KineticsError::InvalidTransition(_))));
    }

    #[test]
    fn vt_probability_is_zero_below_excitation_threshold() {
        let p = vt_probability_fho(1e-3, 300.0, MU, BETA, 0.0, QUANTUM, WELL, 0, 1).unwrap();
        assert_eq!(p, 0.0);
    }

    #[test]
    fn vt_probability_is_a_probability_and_grows_with_speed() {
        let t = 5000.0;
        let slow = vt_probability_fho(1.0, t, MU, BETA, QUANTUM, 0.0, WELL, 1, -1).unwrap();
        let fast = vt_probability_fho(3.0, t, MU, BETA, QUANTUM, 0.0, WELL, 1, -1).unwrap();
        assert!(slow > 0.0 && slow < 1.0);
        assert!(fast > slow);
    }

    #[test]
    fn vv_probability_rejects_zero_quantum_exchange() {
        let result = vv_probability_fho(
            1.0, 1000.0, MU, BETA, QUANTUM, QUANTUM, QUANTUM, QUANTUM, 1, 1, 0,
        );
        assert!(matches!(result, Err(KineticsError::InvalidTransition(_))));
    }

    #[test]
    fn vv_probability_for_resonant_exchange_uses_series_limit() {
        let p = vv_probability_fho(
            1.5,
            3000.0,
            MU,
            BETA,
            2.0 * QUANTUM,
            QUANTUM,
            QUANTUM,
            2.0 * QUANTUM,
            2,
            1,
            -1,
        )
        .unwrap();
        assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn validated_jump_reproduces_the_checked_probability() {
        let jump = QuantumJump::vt(3, -2).unwrap();
        let t = 6000.0;
        for g in [0.5, 1.0, 2.5] {
            let checked =
                vt_probability_fho(g, t, MU, BETA, 3.0 * QUANTUM, QUANTUM, WELL, 3, -2).unwrap();
            let validated =
                vt_probability_for_jump(g, t, MU, BETA, 3.0 * QUANTUM, QUANTUM, WELL, &jump);
            assert_eq!(checked, validated);
        }
    }

    #[test]
    fn jumps_are_validated_against_their_levels() {
        assert!(matches!(QuantumJump::vt(0, 0), Err(KineticsError::InvalidTransition(_))));
        assert!(matches!(QuantumJump::vt(1, -2), Err(KineticsError::InvalidArgument(_))));
        assert!(matches!(QuantumJump::vv(1, 0, 1), Err(KineticsError::InvalidArgument(_))));
        let jump = QuantumJump::vv(2, 1, -1).unwrap();
        assert_eq!(jump.quanta, 1);
        assert_eq!(jump.level_factor, 4.0);
    }

    #[test]
    fn ssh_probability_uses_the_nuclear_reduced_mass() {
        use crate::core::particles::tests::nitrogen_record;
        use crate::core::particles::{MoleculeSts, VibrationalModel};
        use crate::kinetics::crosssection::tests::nitrogen_pair;

        let idata = nitrogen_pair();
        let equal =
            MoleculeSts::from_record("N2", &nitrogen_record(), VibrationalModel::Anharmonic)
                .unwrap();
        let mut record = nitrogen_record();
        record.nuclear_masses = Some([12.0, 16.0134]);
        let unequal =
            MoleculeSts::from_record("N2*", &record, VibrationalModel::Anharmonic).unwrap();

        // z₀ ∝ r_e² = I/μ, and P₁₀ ∝ 1/z₀.
        let mu_ratio =
            unequal.structure().nuclear_reduced_mass / equal.structure().nuclear_reduced_mass;
        assert!(mu_ratio < 1.0);
        for t in [500.0, 3000.0] {
            let p_equal = ssh_vt_p10(t, &idata, &equal);
            let p_unequal = ssh_vt_p10(t, &idata, &unequal);
            assert_relative_eq!(p_unequal / p_equal, mu_ratio, max_relative = 1e-12);
        }
    }

    #[test]
    fn vv_probability_rejects_negative_final_level() {
        let result = vv_probability_fho(
            1.0, 1000.0, MU, BETA, QUANTUM, 2.0 * QUANTUM, 0.0, QUANTUM, 1, 0, 1,
        );
        assert!(matches!(result, Err(KineticsError::InvalidArgument(_))));
    }
}

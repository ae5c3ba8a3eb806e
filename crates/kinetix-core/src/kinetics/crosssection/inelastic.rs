use super::elastic::{crosssection_elastic, reference_area};
use super::models::{CrossSectionModel, DissociationEnergy, KtScale};
use super::{velocity_prefactor, weighted_integral};
use crate::core::constants::K_BOLTZMANN;
use crate::core::data::InteractionData;
use crate::kinetics::error::KineticsError;
use crate::kinetics::probabilities::{
    QuantumJump, vt_probability_for_jump, vv_probability_for_jump,
};

/// VT cross-section: elastic cross-section times the FHO probability of
/// `i → i + delta`.
#[allow(clippy::too_many_arguments)]
pub fn crosssection_vt_fho(
    t: f64,
    g: f64,
    idata: &InteractionData,
    model: CrossSectionModel,
    ve_before: f64,
    ve_after: f64,
    diss: f64,
    i: usize,
    delta: i32,
) -> Result<f64, KineticsError> {
    let jump = QuantumJump::vt(i, delta)?;
    Ok(vt_crosssection(t, g, idata, model, ve_before, ve_after, diss, &jump))
}

#[allow(clippy::too_many_arguments)]
fn vt_crosssection(
    t: f64,
    g: f64,
    idata: &InteractionData,
    model: CrossSectionModel,
    ve_before: f64,
    ve_after: f64,
    diss: f64,
    jump: &QuantumJump,
) -> f64 {
    let p = vt_probability_for_jump(
        g,
        t,
        idata.reduced_mass,
        idata.fho_beta,
        ve_before,
        ve_after,
        diss,
        jump,
    );
    if p == 0.0 {
        return 0.0;
    }
    crosssection_elastic(t, g, idata, model) * p
}

/// VV cross-section for `i → i + i_delta`, `k → k − i_delta`.
#[allow(clippy::too_many_arguments)]
pub fn crosssection_vv_fho(
    t: f64,
    g: f64,
    idata: &InteractionData,
    model: CrossSectionModel,
    ve1_before: f64,
    ve1_after: f64,
    ve2_before: f64,
    ve2_after: f64,
    i: usize,
    k: usize,
    i_delta: i32,
) -> Result<f64, KineticsError> {
    let jump = QuantumJump::vv(i, k, i_delta)?;
    Ok(vv_crosssection(
        t, g, idata, model, ve1_before, ve1_after, ve2_before, ve2_after, &jump,
    ))
}

#[allow(clippy::too_many_arguments)]
fn vv_crosssection(
    t: f64,
    g: f64,
    idata: &InteractionData,
    model: CrossSectionModel,
    ve1_before: f64,
    ve1_after: f64,
    ve2_before: f64,
    ve2_after: f64,
    jump: &QuantumJump,
) -> f64 {
    let p = vv_probability_for_jump(
        g,
        t,
        idata.reduced_mass,
        idata.fho_beta,
        ve1_before,
        ve1_after,
        ve2_before,
        ve2_after,
        jump,
    );
    if p == 0.0 {
        return 0.0;
    }
    crosssection_elastic(t, g, idata, model) * p
}

/// Lowest dimensionless speed at which a molecule with vibrational energy
/// `level_energy` (above the ground level) can dissociate.
pub fn min_dimensionless_vel_diss(t: f64, diss: f64, level_energy: f64) -> f64 {
    ((diss - level_energy) / (K_BOLTZMANN * t)).max(0.0).sqrt()
}

/// Dissociation cross-section; zero below [`min_dimensionless_vel_diss`].
pub fn crosssection_diss(
    t: f64,
    g: f64,
    idata: &InteractionData,
    model: CrossSectionModel,
    level_energy: f64,
    diss: f64,
    energy: DissociationEnergy,
) -> f64 {
    let g_min = min_dimensionless_vel_diss(t, diss, level_energy);
    if g < g_min {
        return 0.0;
    }
    let elastic = crosssection_elastic(t, g, idata, model);
    match energy {
        DissociationEnergy::CenterOfMass => {
            let collision = K_BOLTZMANN * t * g * g;
            if collision == 0.0 {
                0.0
            } else {
                elastic * (1.0 - (diss - level_energy) / collision)
            }
        }
        DissociationEnergy::Total => elastic,
    }
}

fn transition_threshold(t: f64, energy_gain: f64) -> f64 {
    (energy_gain / (K_BOLTZMANN * t)).max(0.0).sqrt()
}

/// VT velocity integral over speeds at which the transition is allowed.
#[allow(clippy::too_many_arguments)]
pub fn vt_integral_fho(
    t: f64,
    deg: u32,
    idata: &InteractionData,
    model: CrossSectionModel,
    ve_before: f64,
    ve_after: f64,
    diss: f64,
    i: usize,
    delta: i32,
    scale: KtScale,
) -> Result<f64, KineticsError> {
    let jump = QuantumJump::vt(i, delta)?;
    let area = reference_area(idata, model);
    let lower = transition_threshold(t, ve_after - ve_before);
    let value = weighted_integral(lower, deg, |g| {
        vt_crosssection(t, g, idata, model, ve_before, ve_after, diss, &jump) / area
    });
    Ok(velocity_prefactor(t, idata.reduced_mass, scale) * area * value)
}

/// VV velocity integral over speeds at which the exchange is allowed.
#[allow(clippy::too_many_arguments)]
pub fn vv_integral_fho(
    t: f64,
    deg: u32,
    idata: &InteractionData,
    model: CrossSectionModel,
    ve1_before: f64,
    ve1_after: f64,
    ve2_before: f64,
    ve2_after: f64,
    i: usize,
    k: usize,
    i_delta: i32,
    scale: KtScale,
) -> Result<f64, KineticsError> {
    let jump = QuantumJump::vv(i, k, i_delta)?;
    let area = reference_area(idata, model);
    let lower = transition_threshold(t, ve1_after + ve2_after - ve1_before - ve2_before);
    let value = weighted_integral(lower, deg, |g| {
        vv_crosssection(t, g, idata, model, ve1_before, ve1_after, ve2_before, ve2_after, &jump)
            / area
    });
    Ok(velocity_prefactor(t, idata.reduced_mass, scale) * area * value)
}

/// Dissociation velocity integral evaluated by quadrature for any model and degree.
#[allow(clippy::too_many_arguments)]
pub fn diss_integral_numeric(
    t: f64,
    deg: u32,
    idata: &InteractionData,
    model: CrossSectionModel,
    level_energy: f64,
    diss: f64,
    energy: DissociationEnergy,
    scale: KtScale,
) -> f64 {
    let area = reference_area(idata, model);
    let lower = min_dimensionless_vel_diss(t, diss, level_energy);
    let value = weighted_integral(lower, deg, |g| {
        crosssection_diss(t, g, idata, model, level_energy, diss, energy) / area
    });
    velocity_prefactor(t, idata.reduced_mass, scale) * area * value
}

/// Closed forms of the rigid-sphere dissociation integral in units of
/// `πσ²·√(kT/2πμ)`, with `a = g_min²`.
fn rigid_sphere_diss_closed_form(a: f64, deg: u32, energy: DissociationEnergy) -> Option<f64> {
    let damping = (-a).exp();
    match (energy, deg) {
        (DissociationEnergy::CenterOfMass, 0) => Some(0.5 * damping),
        (DissociationEnergy::CenterOfMass, 1) => Some(0.5 * (a + 2.0) * damping),
        (DissociationEnergy::Total, 0) => Some(0.5 * (a + 1.0) * damping),
        _ => None,
    }
}

/// Dissociation velocity integral from level energy `level_energy`.
///
/// Rigid spheres use closed forms for the centre-of-mass model at `deg ∈ {0, 1}`
/// and the total-energy model at `deg = 0`; everything else is integrated
/// numerically from the threshold speed.
#[allow(clippy::too_many_arguments)]
pub fn diss_integral(
    t: f64,
    deg: u32,
    idata: &InteractionData,
    model: CrossSectionModel,
    level_energy: f64,
    diss: f64,
    energy: DissociationEnergy,
    scale: KtScale,
) -> f64 {
    if model == CrossSectionModel::RigidSphere {
        let g_min = min_dimensionless_vel_diss(t, diss, level_energy);
        if let Some(value) = rigid_sphere_diss_closed_form(g_min * g_min, deg, energy) {
            return velocity_prefactor(t, idata.reduced_mass, scale)
                * idata.rigid_sphere_area()
                * value;
        }
    }
    diss_integral_numeric(t, deg, idata, model, level_energy, diss, energy, scale)
}

/// Mean squared rotational energy change when a collision of energy `e_coll`
/// redistributes energy equiprobably with one rotator.
pub fn de_rot_sq_equiprob_single(e_coll: f64, avg_rot: f64, avg_rot_sq: f64) -> f64 {
    (8.0 * e_coll * e_coll - 12.0 * e_coll * avg_rot + 15.0 * avg_rot_sq) / 35.0
}

/// As [`de_rot_sq_equiprob_single`], with both collision partners rotating.
pub fn de_rot_sq_equiprob_pair(e_coll: f64, avg_rot: f64, avg_rot_sq: f64) -> f64 {
    let avg_pair = 2.0 * avg_rot;
    let avg_pair_sq = 2.0 * avg_rot_sq + 2.0 * avg_rot * avg_rot;
    (8.0 * e_coll * e_coll - 8.0 * e_coll * avg_pair + 5.0 * avg_pair_sq) / 21.0
}

/// `√(kT/2πμ)·∫ g³e^(−g²)·σ_el(g)·⟨ΔE_rot²⟩(kT·g²) dg` [m³/s·J²].
///
/// `avg_rot` and `avg_rot_sq` are the rotational energy moments at `t`; `pair`
/// selects the two-rotator redistribution.
pub fn rot_energy_change_integral(
    t: f64,
    idata: &InteractionData,
    model: CrossSectionModel,
    avg_rot: f64,
    avg_rot_sq: f64,
    pair: bool,
    scale: KtScale,
) -> f64 {
    let kt = K_BOLTZMANN * t;
    let area = reference_area(idata, model);
    let (e1, e2) = (avg_rot / kt, avg_rot_sq / (kt * kt));
    let value = weighted_integral(0.0, 0, |g| {
        let e = g * g;
        let de_sq = if pair {
            de_rot_sq_equiprob_pair(e, e1, e2)
        } else {
            de_rot_sq_equiprob_single(e, e1, e2)
        };
        crosssection_elastic(t, g, idata, model) / area * de_sq
    });
    velocity_prefactor(t, idata.reduced_mass, scale) * area * value * kt * kt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinetics::crosssection::tests::nitrogen_pair;
    use approx::assert_relative_eq;

    const DISS: f64 = 1.5636e-18;

    #[test]
    fn diss_cross_section_is_discontinuous_at_threshold() {
        let idata = nitrogen_pair();
        let t = 10000.0;
        let level = 0.3 * DISS;
        let g_min = min_dimensionless_vel_diss(t, DISS, level);
        let below = crosssection_diss(
            t,
            g_min * (1.0 - 1e-9),
            &idata,
            CrossSectionModel::RigidSphere,
            level,
            DISS,
            DissociationEnergy::Total,
        );
        let above = crosssection_diss(
            t,
            g_min * (1.0 + 1e-9),
            &idata,
            CrossSectionModel::RigidSphere,
            level,
            DISS,
            DissociationEnergy::Total,
        );
        assert_eq!(below, 0.0);
        assert_relative_eq!(above, idata.rigid_sphere_area());
    }

    #[test]
    fn centre_of_mass_cross_section_vanishes_at_threshold() {
        let idata = nitrogen_pair();
        let t = 10000.0;
        let g_min = min_dimensionless_vel_diss(t, DISS, 0.0);
        let at = crosssection_diss(
            t,
            g_min,
            &idata,
            CrossSectionModel::RigidSphere,
            0.0,
            DISS,
            DissociationEnergy::CenterOfMass,
        );
        assert!(at.abs() < 1e-12 * idata.rigid_sphere_area());
    }

    #[test]
    fn threshold_is_zero_above_dissociation_energy() {
        assert_eq!(min_dimensionless_vel_diss(5000.0, DISS, 1.1 * DISS), 0.0);
    }

    #[test]
    fn rigid_sphere_closed_forms_match_quadrature() {
        let idata = nitrogen_pair();
        let t = 12000.0;
        for level in [0.0, 0.4 * DISS, 0.9 * DISS] {
            for (deg, energy) in [
                (0, DissociationEnergy::CenterOfMass),
                (1, DissociationEnergy::CenterOfMass),
                (0, DissociationEnergy::Total),
            ] {
                let closed = diss_integral(
                    t,
                    deg,
                    &idata,
                    CrossSectionModel::RigidSphere,
                    level,
                    DISS,
                    energy,
                    KtScale::Full,
                );
                let numeric = diss_integral_numeric(
                    t,
                    deg,
                    &idata,
                    CrossSectionModel::RigidSphere,
                    level,
                    DISS,
                    energy,
                    KtScale::Full,
                );
                assert_relative_eq!(closed, numeric, max_relative = 1e-6);
            }
        }
    }

    #[test]
    fn total_energy_integral_exceeds_centre_of_mass_integral() {
        let idata = nitrogen_pair();
        let t = 8000.0;
        let com = diss_integral(
            t,
            0,
            &idata,
            CrossSectionModel::Vss,
            0.2 * DISS,
            DISS,
            DissociationEnergy::CenterOfMass,
            KtScale::Full,
        );
        let total = diss_integral(
            t,
            0,
            &idata,
            CrossSectionModel::Vss,
            0.2 * DISS,
            DISS,
            DissociationEnergy::Total,
            KtScale::Full,
        );
        assert!(total > com && com > 0.0);
    }

    #[test]
    fn vt_integral_propagates_invalid_transition() {
        let idata = nitrogen_pair();
        let result = vt_integral_fho(
            1000.0,
            0,
            &idata,
            CrossSectionModel::RigidSphere,
            1e-20,
            1e-20,
            1e-21,
            2,
            0,
            KtScale::Full,
        );
        assert!(matches!(result, Err(KineticsError::InvalidTransition(_))));
    }

    #[test]
    fn vv_integral_propagates_negative_final_level() {
        let idata = nitrogen_pair();
        let result = vv_integral_fho(
            1000.0,
            0,
            &idata,
            CrossSectionModel::RigidSphere,
            2.3e-20,
            6.9e-20,
            0.0,
            2.3e-20,
            1,
            0,
            1,
            KtScale::Full,
        );
        assert!(matches!(result, Err(KineticsError::InvalidArgument(_))));
    }

    #[test]
    fn vt_integral_integrates_the_checked_cross_section() {
        let idata = nitrogen_pair();
        let t = 6000.0;
        let (e1, e2) = (6.9e-20, 1.15e-19);
        let well = idata.lj_eps * K_BOLTZMANN;
        let model = CrossSectionModel::Vss;
        let integral =
            vt_integral_fho(t, 1, &idata, model, e1, e2, well, 1, 1, KtScale::Full).unwrap();

        let area = reference_area(&idata, model);
        let lower = transition_threshold(t, e2 - e1);
        let expected = velocity_prefactor(t, idata.reduced_mass, KtScale::Full)
            * area
            * weighted_integral(lower, 1, |g| {
                crosssection_vt_fho(t, g, &idata, model, e1, e2, well, 1, 1).unwrap() / area
            });
        assert!(integral > 0.0);
        assert_relative_eq!(integral, expected, max_relative = 1e-12);
    }

    #[test]
    fn vt_excitation_is_slower_than_deexcitation() {
        let idata = nitrogen_pair();
        let t = 4000.0;
        let (e0, e1) = (2.3e-20, 6.9e-20);
        let well = idata.lj_eps * K_BOLTZMANN;
        let down = vt_integral_fho(
            t,
            0,
            &idata,
            CrossSectionModel::RigidSphere,
            e1,
            e0,
            well,
            1,
            -1,
            KtScale::Full,
        )
        .unwrap();
        let up = vt_integral_fho(
            t,
            0,
            &idata,
            CrossSectionModel::RigidSphere,
            e0,
            e1,
            well,
            0,
            1,
            KtScale::Full,
        )
        .unwrap();
        assert!(down > up && up > 0.0);
    }

    #[test]
    fn rotational_energy_change_is_positive() {
        let idata = nitrogen_pair();
        let t = 1000.0;
        let kt = K_BOLTZMANN * t;
        let single = rot_energy_change_integral(
            t,
            &idata,
            CrossSectionModel::RigidSphere,
            kt,
            2.0 * kt * kt,
            false,
            KtScale::Full,
        );
        let pair = rot_energy_change_integral(
            t,
            &idata,
            CrossSectionModel::RigidSphere,
            kt,
            2.0 * kt * kt,
            true,
            KtScale::Full,
        );
        assert!(single > 0.0);
        assert!(pair > 0.0);
    }
}

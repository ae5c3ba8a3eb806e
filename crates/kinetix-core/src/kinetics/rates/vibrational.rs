use crate::core::constants::{H_BAR, K_BOLTZMANN};
use crate::core::data::InteractionData;
use crate::core::particles::{MolecularStructure, Molecule, VibrationalModel};
use crate::kinetics::crosssection::{
    CrossSectionModel, KtScale, elastic_integral, vt_integral_fho, vv_integral_fho,
};
use crate::kinetics::error::KineticsError;
use crate::kinetics::probabilities::ssh_vt_p10;
use std::f64::consts::PI;

fn target_level(structure: &MolecularStructure, i: usize, delta: i32) -> Result<usize, KineticsError> {
    let target = i as i64 + i64::from(delta);
    if target < 0 || target > structure.num_vibr as i64 {
        return Err(KineticsError::InvalidTransition(format!(
            "level {i} + ({delta}) is outside 0..={}",
            structure.num_vibr
        )));
    }
    Ok(target as usize)
}

/// SSH rate of `upper → upper − 1`, with the Gordiets anharmonic correction for
/// anharmonic oscillators.
fn ssh_down_rate<M: Molecule + ?Sized>(
    t: f64,
    idata: &InteractionData,
    molecule: &M,
    upper: usize,
) -> f64 {
    let structure = molecule.structure();
    let gas_kinetic = 8.0 * elastic_integral(t, 0, idata, CrossSectionModel::RigidSphere, KtScale::Full);
    let harmonic = upper as f64 * ssh_vt_p10(t, idata, molecule) * gas_kinetic;
    if structure.vibr_model == VibrationalModel::Harmonic || structure.avc == 0.0 {
        return harmonic;
    }

    let omega = structure.hvc / H_BAR;
    let adiabatic = PI * omega / idata.fho_beta
        * (idata.reduced_mass / (2.0 * K_BOLTZMANN * t)).sqrt();
    let delta = 4.0 / 3.0 * adiabatic * structure.avc;
    let upper_f = upper as f64;
    harmonic * (1.0 - structure.avc) / (1.0 - upper_f * structure.avc)
        * (delta * (upper_f - 1.0)).exp()
}

/// SSH rate of the one-quantum VT transition `i → i + delta` [m³/s].
///
/// Only `delta = ±1` is defined; excitation follows from de-excitation by
/// detailed balance.
pub fn vt_rate_ssh<M: Molecule + ?Sized>(
    t: f64,
    idata: &InteractionData,
    molecule: &M,
    i: usize,
    delta: i32,
) -> Result<f64, KineticsError> {
    if delta != 1 && delta != -1 {
        return Err(KineticsError::InvalidTransition(format!(
            "SSH rates are defined for single-quantum transitions only, got delta = {delta}"
        )));
    }
    let structure = molecule.structure();
    let target = target_level(structure, i, delta)?;
    if delta == -1 {
        return Ok(ssh_down_rate(t, idata, molecule, i));
    }
    let gap = structure.vibr[target] - structure.vibr[i];
    Ok(ssh_down_rate(t, idata, molecule, target) * (-gap / (K_BOLTZMANN * t)).exp())
}

/// FHO rate of the VT transition `i → i + delta` [m³/s].
pub fn vt_rate_fho<M: Molecule + ?Sized>(
    t: f64,
    idata: &InteractionData,
    molecule: &M,
    i: usize,
    delta: i32,
    model: CrossSectionModel,
) -> Result<f64, KineticsError> {
    let structure = molecule.structure();
    let target = target_level(structure, i, delta)?;
    let integral = vt_integral_fho(
        t,
        0,
        idata,
        model,
        structure.vibr[i],
        structure.vibr[target],
        idata.lj_eps * K_BOLTZMANN,
        i,
        delta,
        KtScale::Full,
    )?;
    Ok(8.0 * integral)
}

/// FHO rate of the VV exchange `i → i + i_delta` in `molecule1` with
/// `k → k − i_delta` in `molecule2` [m³/s].
#[allow(clippy::too_many_arguments)]
pub fn vv_rate_fho<M1, M2>(
    t: f64,
    idata: &InteractionData,
    molecule1: &M1,
    molecule2: &M2,
    i: usize,
    k: usize,
    i_delta: i32,
    model: CrossSectionModel,
) -> Result<f64, KineticsError>
where
    M1: Molecule + ?Sized,
    M2: Molecule + ?Sized,
{
    let s1 = molecule1.structure();
    let s2 = molecule2.structure();
    let i_after = target_level(s1, i, i_delta)?;
    let k_after = target_level(s2, k, -i_delta)?;
    let integral = vv_integral_fho(
        t,
        0,
        idata,
        model,
        s1.vibr[i],
        s1.vibr[i_after],
        s2.vibr[k],
        s2.vibr[k_after],
        i,
        k,
        i_delta,
        KtScale::Full,
    )?;
    Ok(8.0 * integral)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::particles::MoleculeSts;
    use crate::core::particles::tests::nitrogen_record;
    use crate::kinetics::crosssection::tests::nitrogen_pair;
    use approx::assert_relative_eq;

    fn nitrogen(model: VibrationalModel) -> MoleculeSts {
        MoleculeSts::from_record("N2", &nitrogen_record(), model).unwrap()
    }

    #[test]
    fn ssh_rejects_multi_quantum_transitions() {
        let molecule = nitrogen(VibrationalModel::Anharmonic);
        let idata = nitrogen_pair();
        for delta in [0, 2, -3] {
            assert!(matches!(
                vt_rate_ssh(3000.0, &idata, &molecule, 5, delta),
                Err(KineticsError::InvalidTransition(_))
            ));
        }
    }

    #[test]
    fn ssh_excitation_and_deexcitation_satisfy_detailed_balance() {
        let molecule = nitrogen(VibrationalModel::Anharmonic);
        let idata = nitrogen_pair();
        let t = 4000.0;
        let up = vt_rate_ssh(t, &idata, &molecule, 3, 1).unwrap();
        let down = vt_rate_ssh(t, &idata, &molecule, 4, -1).unwrap();
        let s = molecule.structure();
        let boltzmann = (-(s.vibr[4] - s.vibr[3]) / (K_BOLTZMANN * t)).exp();
        assert_relative_eq!(up, down * boltzmann, max_relative = 1e-14);
    }

    #[test]
    fn harmonic_ssh_rate_scales_with_level() {
        let molecule = nitrogen(VibrationalModel::Harmonic);
        let idata = nitrogen_pair();
        let t = 2000.0;
        let k10 = vt_rate_ssh(t, &idata, &molecule, 1, -1).unwrap();
        let k54 = vt_rate_ssh(t, &idata, &molecule, 5, -1).unwrap();
        assert!(k10 > 0.0);
        assert_relative_eq!(k54, 5.0 * k10, max_relative = 1e-14);
    }

    #[test]
    fn ground_level_cannot_lose_a_quantum() {
        let molecule = nitrogen(VibrationalModel::Anharmonic);
        let idata = nitrogen_pair();
        assert!(vt_rate_ssh(1000.0, &idata, &molecule, 0, -1).is_err());
        assert!(
            vt_rate_fho(1000.0, &idata, &molecule, 0, -1, CrossSectionModel::RigidSphere).is_err()
        );
        let top = molecule.structure().num_vibr;
        assert!(
            vt_rate_fho(1000.0, &idata, &molecule, top, 1, CrossSectionModel::RigidSphere).is_err()
        );
    }

    #[test]
    fn fho_deexcitation_grows_with_level() {
        let molecule = nitrogen(VibrationalModel::Anharmonic);
        let idata = nitrogen_pair();
        let t = 5000.0;
        let low = vt_rate_fho(t, &idata, &molecule, 1, -1, CrossSectionModel::RigidSphere).unwrap();
        let high = vt_rate_fho(t, &idata, &molecule, 10, -1, CrossSectionModel::RigidSphere).unwrap();
        assert!(low > 0.0);
        assert!(high > low);
    }

    #[test]
    fn fho_zero_quantum_transition_is_invalid() {
        let molecule = nitrogen(VibrationalModel::Anharmonic);
        let idata = nitrogen_pair();
        assert!(matches!(
            vt_rate_fho(3000.0, &idata, &molecule, 4, 0, CrossSectionModel::Vss),
            Err(KineticsError::InvalidTransition(_))
        ));
        assert!(matches!(
            vv_rate_fho(3000.0, &idata, &molecule, &molecule, 4, 2, 0, CrossSectionModel::RigidSphere),
            Err(KineticsError::InvalidTransition(_))
        ));
    }

    #[test]
    fn fho_vv_exchange_rate_is_positive() {
        let molecule = nitrogen(VibrationalModel::Anharmonic);
        let idata = nitrogen_pair();
        let rate = vv_rate_fho(3000.0, &idata, &molecule, &molecule, 0, 1, 1, CrossSectionModel::RigidSphere)
            .unwrap();
        assert!(rate > 0.0 && rate.is_finite());
    }
}

//! Generalized thermodynamic forces Γ of elementary processes.
//!
//! Each Γ is `1 − (product side)/(reactant side)` weighted by the equilibrium
//! constant, so Γ = 0 exactly at detailed balance and Γ > 0 when the forward
//! process dominates. The `raw_` functions take the energies directly; the others
//! read them from molecule level structures.

use super::error::KineticsError;
use super::rates::rec_rate_sts_multiplier;
use crate::core::constants::K_BOLTZMANN;
use crate::core::particles::{Atom, Molecule, QuasiMolecule};

/// Γ of the VT transition between levels with populations `ni_before`, `ni_after`
/// and energies `ve_before`, `ve_after`.
pub fn raw_gamma_vt_sts(ni_before: f64, ni_after: f64, ve_before: f64, ve_after: f64, t: f64) -> f64 {
    1.0 - ni_after / ni_before * ((ve_after - ve_before) / (K_BOLTZMANN * t)).exp()
}

/// Γ of the VT transition `i → i + delta` of `molecule`.
pub fn gamma_vt_sts<M: Molecule + ?Sized>(
    t: f64,
    molecule: &M,
    ni_before: f64,
    ni_after: f64,
    i: usize,
    delta: i32,
) -> f64 {
    let vibr = &molecule.structure().vibr;
    let after = (i as i64 + i64::from(delta)) as usize;
    raw_gamma_vt_sts(ni_before, ni_after, vibr[i], vibr[after], t)
}

/// Γ of a VV exchange between two molecules.
#[allow(clippy::too_many_arguments)]
pub fn raw_gamma_vv_sts(
    n1_before: f64,
    n1_after: f64,
    n2_before: f64,
    n2_after: f64,
    ve1_before: f64,
    ve1_after: f64,
    ve2_before: f64,
    ve2_after: f64,
    t: f64,
) -> f64 {
    let defect = ve1_after + ve2_after - ve1_before - ve2_before;
    1.0 - (n1_after * n2_after) / (n1_before * n2_before) * (defect / (K_BOLTZMANN * t)).exp()
}

/// Γ of the VV exchange `i → i + i_delta` in `molecule1`, `k → k − i_delta` in
/// `molecule2`.
#[allow(clippy::too_many_arguments)]
pub fn gamma_vv_sts<M1, M2>(
    t: f64,
    molecule1: &M1,
    molecule2: &M2,
    n1_before: f64,
    n1_after: f64,
    n2_before: f64,
    n2_after: f64,
    i: usize,
    k: usize,
    i_delta: i32,
) -> f64
where
    M1: Molecule + ?Sized,
    M2: Molecule + ?Sized,
{
    let v1 = &molecule1.structure().vibr;
    let v2 = &molecule2.structure().vibr;
    let i_after = (i as i64 + i64::from(i_delta)) as usize;
    let k_after = (k as i64 - i64::from(i_delta)) as usize;
    raw_gamma_vv_sts(
        n1_before, n1_after, n2_before, n2_after, v1[i], v1[i_after], v2[k], v2[k_after], t,
    )
}

/// Γ of dissociation of a molecule in a given level into two atoms; `multiplier`
/// is the equilibrium ratio `n_i/(n_a1·n_a2)`.
pub fn raw_gamma_diss_sts(n_molecule: f64, n_atom1: f64, n_atom2: f64, multiplier: f64) -> f64 {
    1.0 - n_atom1 * n_atom2 * multiplier / n_molecule
}

/// Γ of dissociation from level `i` with population `ni`.
#[allow(clippy::too_many_arguments)]
pub fn gamma_diss_sts<M: Molecule + ?Sized>(
    t: f64,
    molecule: &M,
    atom1: &Atom,
    atom2: &Atom,
    ni: f64,
    n_atom1: f64,
    n_atom2: f64,
    i: usize,
) -> f64 {
    let multiplier = rec_rate_sts_multiplier(t, molecule, atom1, atom2, i);
    raw_gamma_diss_sts(ni, n_atom1, n_atom2, multiplier)
}

/// Level weight of the quasi-stationary distribution, unaffected by the Treanor
/// cutoff.
fn level_weight(molecule: &QuasiMolecule, t: f64, t1: f64, i: usize) -> f64 {
    match molecule {
        QuasiMolecule::OneT(m) => m.vibr_exp(t, i),
        QuasiMolecule::MultiT(m) => m.vibr_exp(t, t1, i),
    }
}

/// Γ of the VT transition `i → i + delta` for populations following the
/// quasi-stationary distribution at `(t, t1)`. Identically zero when `t1 = t`.
pub fn gamma_vt(t: f64, t1: f64, molecule: &QuasiMolecule, i: usize, delta: i32) -> f64 {
    let after = (i as i64 + i64::from(delta)) as usize;
    gamma_vt_sts(
        t,
        molecule,
        level_weight(molecule, t, t1, i),
        level_weight(molecule, t, t1, after),
        i,
        delta,
    )
}

/// Γ of a VV exchange between two quasi-stationary molecules with vibrational
/// temperatures `t1_first` and `t1_second`.
#[allow(clippy::too_many_arguments)]
pub fn gamma_vv(
    t: f64,
    t1_first: f64,
    t1_second: f64,
    molecule1: &QuasiMolecule,
    molecule2: &QuasiMolecule,
    i: usize,
    k: usize,
    i_delta: i32,
) -> f64 {
    let i_after = (i as i64 + i64::from(i_delta)) as usize;
    let k_after = (k as i64 - i64::from(i_delta)) as usize;
    gamma_vv_sts(
        t,
        molecule1,
        molecule2,
        level_weight(molecule1, t, t1_first, i),
        level_weight(molecule1, t, t1_first, i_after),
        level_weight(molecule2, t, t1_second, k),
        level_weight(molecule2, t, t1_second, k_after),
        i,
        k,
        i_delta,
    )
}

/// Γ of dissociation of a quasi-stationary molecule with total number density
/// `n_molecule`, evaluated for its ground vibrational level.
#[allow(clippy::too_many_arguments)]
pub fn gamma_diss(
    t: f64,
    t1: f64,
    molecule: &QuasiMolecule,
    atom1: &Atom,
    atom2: &Atom,
    n_molecule: f64,
    n_atom1: f64,
    n_atom2: f64,
) -> f64 {
    let ground = n_molecule * molecule.level_fraction(t, t1, 0);
    gamma_diss_sts(t, molecule, atom1, atom2, ground, n_atom1, n_atom2, 0)
}

/// Γ of the bimolecular exchange `1 + 2 → 3 + 4` between quasi-stationary
/// molecules with number densities `n` and vibrational temperatures `t1`:
///
/// ```text
/// Γ = 1 − (n₃n₄)/(n₁n₂) · (m₁m₂/(m₃m₄))^(3/2) · (Z₁Z₂)/(Z₃Z₄) · exp((E₃ + E₄ − E₁ − E₂)/kT)
/// ```
///
/// with `Z` the internal partition functions and `E` their reference energies.
/// All four molecules must share one distribution kind.
pub fn gamma_22(
    t: f64,
    molecules: [&QuasiMolecule; 4],
    n: [f64; 4],
    t1: [f64; 4],
) -> Result<f64, KineticsError> {
    let expected = molecules[0].tag();
    if let Some(other) = molecules.iter().find(|m| m.tag() != expected) {
        return Err(KineticsError::TypeMismatch {
            expected,
            found: other.tag(),
        });
    }

    let [m1, m2, m3, m4] = molecules;
    let kt = K_BOLTZMANN * t;
    let mass_ratio = (m1.mass() * m2.mass() / (m3.mass() * m4.mass())).powf(1.5);
    let z_ratio = (m1.z_int(t, t1[0]) * m2.z_int(t, t1[1]))
        / (m3.z_int(t, t1[2]) * m4.z_int(t, t1[3]));
    let energy = m3.reference_energy() + m4.reference_energy()
        - m1.reference_energy()
        - m2.reference_energy();

    Ok(1.0 - (n[2] * n[3]) / (n[0] * n[1]) * mass_ratio * z_ratio * (energy / kt).exp())
}

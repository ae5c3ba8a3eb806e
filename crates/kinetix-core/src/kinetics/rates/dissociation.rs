use crate::core::constants::{H_PLANCK, K_BOLTZMANN};
use crate::core::data::{DissociationParams, InteractionData};
use crate::core::particles::{Atom, Molecule, QuasiMolecule, UModel};
use crate::kinetics::crosssection::{CrossSectionModel, DissociationEnergy, KtScale, diss_integral};
use std::f64::consts::PI;

/// Arrhenius rate `A·Tⁿ·exp(−D/kT)` [m³/s].
pub fn raw_k_diss_eq(t: f64, n: f64, a: f64, diss: f64) -> f64 {
    a * t.powf(n) * (-diss / (K_BOLTZMANN * t)).exp()
}

/// Thermal-equilibrium dissociation rate of `molecule` with the Arrhenius
/// parameters of its collision partner.
pub fn k_diss_eq<M: Molecule + ?Sized>(t: f64, params: &DissociationParams, molecule: &M) -> f64 {
    raw_k_diss_eq(t, params.n, params.a, molecule.structure().diss)
}

/// Treanor–Marrone dissociation rate from vibrational level `i`.
pub fn diss_rate_treanor_marrone_sts<M: Molecule + ?Sized>(
    t: f64,
    params: &DissociationParams,
    molecule: &M,
    i: usize,
    model: UModel,
) -> f64 {
    k_diss_eq(t, params, molecule) * molecule.structure().z_diss(t, i, model)
}

/// Treanor–Marrone rate averaged over the populated levels of a quasi-stationary
/// distribution at `(t, t1)`.
pub fn diss_rate_treanor_marrone(
    t: f64,
    t1: f64,
    params: &DissociationParams,
    molecule: &QuasiMolecule,
    model: UModel,
) -> f64 {
    (0..=molecule.max_vibr_level(t, t1))
        .map(|i| {
            molecule.level_fraction(t, t1, i)
                * diss_rate_treanor_marrone_sts(t, params, molecule, i, model)
        })
        .sum()
}

/// Dissociation rate from level `i` obtained from the dissociation cross-section,
/// `8·∫` at `deg = 0`.
pub fn diss_rate_integral_sts<M: Molecule + ?Sized>(
    t: f64,
    idata: &InteractionData,
    molecule: &M,
    i: usize,
    model: CrossSectionModel,
    energy: DissociationEnergy,
) -> f64 {
    let structure = molecule.structure();
    8.0 * diss_integral(
        t,
        0,
        idata,
        model,
        structure.level_energy(i),
        structure.diss,
        energy,
        KtScale::Full,
    )
}

/// [`diss_rate_integral_sts`] averaged over the populated levels.
pub fn diss_rate_integral(
    t: f64,
    t1: f64,
    idata: &InteractionData,
    molecule: &QuasiMolecule,
    model: CrossSectionModel,
    energy: DissociationEnergy,
) -> f64 {
    (0..=molecule.max_vibr_level(t, t1))
        .map(|i| {
            molecule.level_fraction(t, t1, i)
                * diss_rate_integral_sts(t, idata, molecule, i, model, energy)
        })
        .sum()
}

/// Equilibrium ratio `n_i/(n_a1·n_a2)` for the molecule in level `i`:
///
/// ```text
/// (m/(m₁m₂))^(3/2) · h³ · (2πkT)^(−3/2) · Z_rot(T) · exp((D − ε_i)/kT)
/// ```
///
/// Recombination rates follow from dissociation rates by multiplying with it.
pub fn rec_rate_sts_multiplier<M: Molecule + ?Sized>(
    t: f64,
    molecule: &M,
    atom1: &Atom,
    atom2: &Atom,
    i: usize,
) -> f64 {
    ln_rec_rate_sts_multiplier(t, molecule, atom1, atom2, i).exp()
}

/// Natural logarithm of [`rec_rate_sts_multiplier`], finite even where the
/// multiplier itself overflows (`(D − ε_i)/kT` beyond ~709).
pub fn ln_rec_rate_sts_multiplier<M: Molecule + ?Sized>(
    t: f64,
    molecule: &M,
    atom1: &Atom,
    atom2: &Atom,
    i: usize,
) -> f64 {
    let kt = K_BOLTZMANN * t;
    let structure = molecule.structure();
    let mass_ratio = molecule.mass() / (atom1.mass() * atom2.mass());
    let translational = 1.5 * (mass_ratio * H_PLANCK * H_PLANCK / (2.0 * PI * kt)).ln();
    translational + molecule.z_rot(t).ln() + (structure.diss - structure.level_energy(i)) / kt
}

/// Treanor–Marrone recombination rate into level `i` [m⁶/s].
#[allow(clippy::too_many_arguments)]
pub fn rec_rate_treanor_marrone_sts<M: Molecule + ?Sized>(
    t: f64,
    params: &DissociationParams,
    molecule: &M,
    atom1: &Atom,
    atom2: &Atom,
    i: usize,
    model: UModel,
) -> f64 {
    rec_rate_sts_multiplier(t, molecule, atom1, atom2, i)
        * diss_rate_treanor_marrone_sts(t, params, molecule, i, model)
}

/// Recombination rate into level `i` from the dissociation cross-section.
#[allow(clippy::too_many_arguments)]
pub fn rec_rate_integral_sts<M: Molecule + ?Sized>(
    t: f64,
    idata: &InteractionData,
    molecule: &M,
    atom1: &Atom,
    atom2: &Atom,
    i: usize,
    model: CrossSectionModel,
    energy: DissociationEnergy,
) -> f64 {
    rec_rate_sts_multiplier(t, molecule, atom1, atom2, i)
        * diss_rate_integral_sts(t, idata, molecule, i, model, energy)
}

/// Total Treanor–Marrone recombination rate into every populated level.
pub fn rec_rate_treanor_marrone(
    t: f64,
    t1: f64,
    params: &DissociationParams,
    molecule: &QuasiMolecule,
    atom1: &Atom,
    atom2: &Atom,
    model: UModel,
) -> f64 {
    (0..=molecule.max_vibr_level(t, t1))
        .map(|i| rec_rate_treanor_marrone_sts(t, params, molecule, atom1, atom2, i, model))
        .sum()
}

/// Total cross-section based recombination rate into every populated level.
#[allow(clippy::too_many_arguments)]
pub fn rec_rate_integral(
    t: f64,
    t1: f64,
    idata: &InteractionData,
    molecule: &QuasiMolecule,
    atom1: &Atom,
    atom2: &Atom,
    model: CrossSectionModel,
    energy: DissociationEnergy,
) -> f64 {
    (0..=molecule.max_vibr_level(t, t1))
        .map(|i| rec_rate_integral_sts(t, idata, molecule, atom1, atom2, i, model, energy))
        .sum()
}

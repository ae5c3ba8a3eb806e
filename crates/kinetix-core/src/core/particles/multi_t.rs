use super::cache::StateCache;
use super::rotational::{Molecule, RotationalCache, RotationalState};
use super::species::SpeciesConstants;
use super::structure::{MolecularStructure, VibrationalModel};
use crate::core::constants::K_BOLTZMANN;
use crate::core::data::{DataError, MoleculeRecord};

/// Treanor averages over the truncated level set at `(T, T1)`.
///
/// The derivative fields hold the truncation fixed, so they are the derivatives
/// of the sums over levels `0..=max_level`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VibrationalStateMultiT {
    pub max_level: usize,
    pub z_vibr: f64,
    pub avg_energy: f64,
    pub avg_energy_sq: f64,
    pub avg_i: f64,
    pub avg_i_sq: f64,
    pub avg_energy_i: f64,
    /// dW/dT, W being the mean vibrational quantum number.
    pub w_dt: f64,
    pub w_dt1: f64,
    pub e_vibr_dt: f64,
    pub e_vibr_dt1: f64,
}

fn treanor_exponent(structure: &MolecularStructure, t: f64, t1: f64, i: usize) -> f64 {
    let e1 = structure.vibr[1];
    let fi = i as f64;
    -(structure.vibr[i] - fi * e1) / (K_BOLTZMANN * t) - fi * e1 / (K_BOLTZMANN * t1)
}

impl VibrationalStateMultiT {
    pub fn compute(structure: &MolecularStructure, max_vibr: usize, t: f64, t1: f64) -> Self {
        let max_level = truncation_level(structure, max_vibr, t, t1);
        let e1 = structure.vibr[1];

        let mut sum_w = 0.0;
        let mut sum_e = 0.0;
        let mut sum_e2 = 0.0;
        let mut sum_i = 0.0;
        let mut sum_i2 = 0.0;
        let mut sum_ei = 0.0;
        for i in 0..=max_level {
            let w = treanor_exponent(structure, t, t1, i).exp();
            let e = structure.vibr[i];
            let fi = i as f64;
            sum_w += w;
            sum_e += w * e;
            sum_e2 += w * e * e;
            sum_i += w * fi;
            sum_i2 += w * fi * fi;
            sum_ei += w * e * fi;
        }

        let avg_e = sum_e / sum_w;
        let avg_e2 = sum_e2 / sum_w;
        let avg_i = sum_i / sum_w;
        let avg_i2 = sum_i2 / sum_w;
        let avg_ei = sum_ei / sum_w;

        let kt2 = K_BOLTZMANN * t * t;
        let kt12 = K_BOLTZMANN * t1 * t1;
        let var_i = avg_i2 - avg_i * avg_i;
        let cov_ei = avg_ei - avg_e * avg_i;
        let var_e = avg_e2 - avg_e * avg_e;

        Self {
            max_level,
            z_vibr: sum_w,
            avg_energy: avg_e,
            avg_energy_sq: avg_e2,
            avg_i,
            avg_i_sq: avg_i2,
            avg_energy_i: avg_ei,
            w_dt: (cov_ei - e1 * var_i) / kt2,
            w_dt1: e1 * var_i / kt12,
            e_vibr_dt: (var_e - e1 * cov_ei) / kt2,
            e_vibr_dt1: e1 * cov_ei / kt12,
        }
    }
}

/// Treanor cutoff `min(max_vibr, round(ε₁·T / (2·avc·hvc·T1)))`, or `max_vibr`
/// for a harmonic spectrum.
pub fn truncation_level(structure: &MolecularStructure, max_vibr: usize, t: f64, t1: f64) -> usize {
    if structure.avc == 0.0 {
        return max_vibr;
    }
    let level = (structure.vibr[1] * t / (2.0 * structure.avc * structure.hvc * t1)).round();
    if level.is_nan() || level < 0.0 {
        0
    } else if level >= max_vibr as f64 {
        max_vibr
    } else {
        level as usize
    }
}

pub type VibrationalCacheMultiT = StateCache<(f64, f64), VibrationalStateMultiT>;

/// Molecule with a two-temperature Treanor vibrational distribution.
///
/// Level energies are stored relative to the ground level (`vibr[0] == 0`); the
/// subtracted zero-point energy is kept in `vibr_zero`.
#[derive(Debug, Clone)]
pub struct MoleculeMultiT {
    species: SpeciesConstants,
    structure: MolecularStructure,
    max_vibr: usize,
    rot_cache: RotationalCache,
    vibr_cache: VibrationalCacheMultiT,
}

impl MoleculeMultiT {
    pub fn new(species: SpeciesConstants, mut structure: MolecularStructure) -> Self {
        let zero = structure.vibr[0];
        for e in structure.vibr.iter_mut() {
            *e -= zero;
        }
        structure.vibr_zero = zero;
        let max_vibr = structure.num_vibr;
        Self {
            species,
            structure,
            max_vibr,
            rot_cache: RotationalCache::new(),
            vibr_cache: VibrationalCacheMultiT::new(),
        }
    }

    pub fn from_record(
        name: &str,
        record: &MoleculeRecord,
        vibr_model: VibrationalModel,
    ) -> Result<Self, DataError> {
        let species = SpeciesConstants::from_tabulated(
            name,
            record.mass,
            record.lj_eps,
            record.lj_sigma,
            record.form,
        )?;
        let structure = MolecularStructure::from_record(name, record, species.mass, vibr_model)?;
        if structure.num_vibr < 1 {
            return Err(DataError::InvalidRecord {
                kind: "molecule",
                key: name.to_string(),
                reason: "a Treanor distribution needs at least two vibrational levels".to_string(),
            });
        }
        Ok(Self::new(species, structure))
    }

    pub fn max_vibr(&self) -> usize {
        self.max_vibr
    }

    /// Recomputes both caches for `(t, t1)`.
    pub fn renorm(&self, t: f64, t1: f64) -> (RotationalState, VibrationalStateMultiT) {
        let structure = &self.structure;
        let max_vibr = self.max_vibr;
        let rot = self
            .rot_cache
            .refresh(t, || RotationalState::compute(structure, t));
        let vibr = self.vibr_cache.refresh((t, t1), || {
            VibrationalStateMultiT::compute(structure, max_vibr, t, t1)
        });
        (rot, vibr)
    }

    pub fn vibrational_state(&self, t: f64, t1: f64) -> VibrationalStateMultiT {
        let structure = &self.structure;
        let max_vibr = self.max_vibr;
        self.vibr_cache.get_or_compute((t, t1), || {
            VibrationalStateMultiT::compute(structure, max_vibr, t, t1)
        })
    }

    /// Treanor weight `exp(−(ε_i − i·ε₁)/kT − i·ε₁/kT1)` of level `i`.
    pub fn vibr_exp(&self, t: f64, t1: f64, i: usize) -> f64 {
        treanor_exponent(&self.structure, t, t1, i).exp()
    }

    /// Highest level index kept by the Treanor cutoff at `(t, t1)`.
    pub fn max_vibr_level(&self, t: f64, t1: f64) -> usize {
        self.vibrational_state(t, t1).max_level
    }

    /// The cutoff as a level index when `as_max_index`, otherwise the number of
    /// levels taking part.
    pub fn num_vibr_levels(&self, t: f64, t1: f64, as_max_index: bool) -> usize {
        let max_level = self.max_vibr_level(t, t1);
        if as_max_index { max_level } else { max_level + 1 }
    }

    pub fn z_vibr(&self, t: f64, t1: f64) -> f64 {
        self.vibrational_state(t, t1).z_vibr
    }

    pub fn z_int(&self, t: f64, t1: f64) -> f64 {
        self.z_rot(t) * self.z_vibr(t, t1)
    }

    pub fn avg_vibr_energy(&self, t: f64, t1: f64, dimensional: bool) -> f64 {
        let avg = self.vibrational_state(t, t1).avg_energy;
        if dimensional {
            avg
        } else {
            avg / (K_BOLTZMANN * t)
        }
    }

    pub fn avg_vibr_energy_sq(&self, t: f64, t1: f64, dimensional: bool) -> f64 {
        let avg_sq = self.vibrational_state(t, t1).avg_energy_sq;
        if dimensional {
            avg_sq
        } else {
            let kt = K_BOLTZMANN * t;
            avg_sq / (kt * kt)
        }
    }

    pub fn avg_i(&self, t: f64, t1: f64) -> f64 {
        self.vibrational_state(t, t1).avg_i
    }

    pub fn avg_i_sq(&self, t: f64, t1: f64) -> f64 {
        self.vibrational_state(t, t1).avg_i_sq
    }

    pub fn avg_vibr_energy_i(&self, t: f64, t1: f64) -> f64 {
        self.vibrational_state(t, t1).avg_energy_i
    }

    pub fn w_dt(&self, t: f64, t1: f64) -> f64 {
        self.vibrational_state(t, t1).w_dt
    }

    pub fn w_dt1(&self, t: f64, t1: f64) -> f64 {
        self.vibrational_state(t, t1).w_dt1
    }

    pub fn e_vibr_dt(&self, t: f64, t1: f64) -> f64 {
        self.vibrational_state(t, t1).e_vibr_dt
    }

    pub fn e_vibr_dt1(&self, t: f64, t1: f64) -> f64 {
        self.vibrational_state(t, t1).e_vibr_dt1
    }

    /// Population fraction of level `i` (zero above the cutoff).
    pub fn level_fraction(&self, t: f64, t1: f64, i: usize) -> f64 {
        if i > self.max_vibr_level(t, t1) {
            return 0.0;
        }
        self.vibr_exp(t, t1, i) / self.z_vibr(t, t1)
    }
}

impl Molecule for MoleculeMultiT {
    fn species(&self) -> &SpeciesConstants {
        &self.species
    }

    fn structure(&self) -> &MolecularStructure {
        &self.structure
    }

    fn rotational_cache(&self) -> &RotationalCache {
        &self.rot_cache
    }
}

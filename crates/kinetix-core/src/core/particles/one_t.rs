use super::cache::StateCache;
use super::rotational::{Molecule, RotationalCache, RotationalState};
use super::species::SpeciesConstants;
use super::structure::{MolecularStructure, VibrationalModel};
use crate::core::constants::K_BOLTZMANN;
use crate::core::data::{DataError, MoleculeRecord};

/// Boltzmann averages over all vibrational levels at one temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VibrationalStateOneT {
    pub z_vibr: f64,
    pub avg_energy: f64,
    pub avg_energy_sq: f64,
    pub avg_i: f64,
    pub avg_i_sq: f64,
    pub avg_energy_i: f64,
    /// d⟨ε⟩/dT [J/K].
    pub e_vibr_dt: f64,
}

impl VibrationalStateOneT {
    pub fn compute(structure: &MolecularStructure, t: f64) -> Self {
        let kt = K_BOLTZMANN * t;
        let ground = structure.vibr[0];

        let mut sum_w = 0.0;
        let mut sum_e = 0.0;
        let mut sum_e2 = 0.0;
        let mut sum_i = 0.0;
        let mut sum_i2 = 0.0;
        let mut sum_ei = 0.0;
        for (i, &e) in structure.vibr.iter().enumerate() {
            let w = (-(e - ground) / kt).exp();
            let fi = i as f64;
            sum_w += w;
            sum_e += w * e;
            sum_e2 += w * e * e;
            sum_i += w * fi;
            sum_i2 += w * fi * fi;
            sum_ei += w * e * fi;
        }

        let avg_energy = sum_e / sum_w;
        let avg_energy_sq = sum_e2 / sum_w;
        Self {
            z_vibr: sum_w * (-ground / kt).exp(),
            avg_energy,
            avg_energy_sq,
            avg_i: sum_i / sum_w,
            avg_i_sq: sum_i2 / sum_w,
            avg_energy_i: sum_ei / sum_w,
            e_vibr_dt: (avg_energy_sq - avg_energy * avg_energy) / (K_BOLTZMANN * t * t),
        }
    }
}

pub type VibrationalCacheOneT = StateCache<f64, VibrationalStateOneT>;

/// Molecule whose vibrational levels follow a Boltzmann distribution at the gas
/// temperature. Level energies are absolute.
#[derive(Debug, Clone)]
pub struct MoleculeOneT {
    species: SpeciesConstants,
    structure: MolecularStructure,
    rot_cache: RotationalCache,
    vibr_cache: VibrationalCacheOneT,
}

impl MoleculeOneT {
    pub fn new(species: SpeciesConstants, structure: MolecularStructure) -> Self {
        Self {
            species,
            structure,
            rot_cache: RotationalCache::new(),
            vibr_cache: VibrationalCacheOneT::new(),
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
        Ok(Self::new(species, structure))
    }

    /// Recomputes both caches for `t`.
    pub fn renorm(&self, t: f64) -> (RotationalState, VibrationalStateOneT) {
        let structure = &self.structure;
        let rot = self
            .rot_cache
            .refresh(t, || RotationalState::compute(structure, t));
        let vibr = self
            .vibr_cache
            .refresh(t, || VibrationalStateOneT::compute(structure, t));
        (rot, vibr)
    }

    pub fn vibrational_state(&self, t: f64) -> VibrationalStateOneT {
        let structure = &self.structure;
        self.vibr_cache
            .get_or_compute(t, || VibrationalStateOneT::compute(structure, t))
    }

    /// Highest populated level; all levels take part in the one-temperature model.
    pub fn max_vibr_level(&self) -> usize {
        self.structure.num_vibr
    }

    /// Boltzmann weight `exp(−ε_i/kT)` of level `i`.
    pub fn vibr_exp(&self, t: f64, i: usize) -> f64 {
        (-self.structure.vibr[i] / (K_BOLTZMANN * t)).exp()
    }

    pub fn z_vibr(&self, t: f64) -> f64 {
        self.vibrational_state(t).z_vibr
    }

    pub fn z_int(&self, t: f64) -> f64 {
        self.z_rot(t) * self.z_vibr(t)
    }

    pub fn avg_vibr_energy(&self, t: f64, dimensional: bool) -> f64 {
        let avg = self.vibrational_state(t).avg_energy;
        if dimensional {
            avg
        } else {
            avg / (K_BOLTZMANN * t)
        }
    }

    pub fn avg_vibr_energy_sq(&self, t: f64, dimensional: bool) -> f64 {
        let avg_sq = self.vibrational_state(t).avg_energy_sq;
        if dimensional {
            avg_sq
        } else {
            let kt = K_BOLTZMANN * t;
            avg_sq / (kt * kt)
        }
    }

    pub fn avg_i(&self, t: f64) -> f64 {
        self.vibrational_state(t).avg_i
    }

    pub fn avg_i_sq(&self, t: f64) -> f64 {
        self.vibrational_state(t).avg_i_sq
    }

    pub fn avg_vibr_energy_i(&self, t: f64) -> f64 {
        self.vibrational_state(t).avg_energy_i
    }

    pub fn e_vibr_dt(&self, t: f64) -> f64 {
        self.vibrational_state(t).e_vibr_dt
    }

    /// Population fraction of level `i`.
    pub fn level_fraction(&self, t: f64, i: usize) -> f64 {
        self.vibr_exp(t, i) / self.z_vibr(t)
    }
}

impl Molecule for MoleculeOneT {
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

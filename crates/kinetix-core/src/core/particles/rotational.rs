use super::cache::StateCache;
use super::species::SpeciesConstants;
use super::structure::MolecularStructure;
use crate::core::constants::K_BOLTZMANN;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationalState {
    pub z_rot: f64,
    /// Mean rotational energy [J].
    pub avg_energy: f64,
    /// Mean squared rotational energy [J²].
    pub avg_energy_sq: f64,
}

impl RotationalState {
    pub fn compute(structure: &MolecularStructure, t: f64) -> Self {
        let (avg_energy, avg_energy_sq) = structure.rot_moments(t);
        Self {
            z_rot: structure.z_rot(t),
            avg_energy,
            avg_energy_sq,
        }
    }
}

pub type RotationalCache = StateCache<f64, RotationalState>;

/// Queries shared by every molecule flavour.
pub trait Molecule {
    fn species(&self) -> &SpeciesConstants;
    fn structure(&self) -> &MolecularStructure;
    fn rotational_cache(&self) -> &RotationalCache;

    fn name(&self) -> &str {
        &self.species().name
    }

    fn mass(&self) -> f64 {
        self.species().mass
    }

    fn rotational_state(&self, t: f64) -> RotationalState {
        let structure = self.structure();
        self.rotational_cache()
            .get_or_compute(t, || RotationalState::compute(structure, t))
    }

    fn z_rot(&self, t: f64) -> f64 {
        self.rotational_state(t).z_rot
    }

    /// Mean rotational energy; divided by `kT` unless `dimensional`.
    fn avg_rot_energy(&self, t: f64, dimensional: bool) -> f64 {
        let avg = self.rotational_state(t).avg_energy;
        if dimensional {
            avg
        } else {
            avg / (K_BOLTZMANN * t)
        }
    }

    /// Mean squared rotational energy; divided by `(kT)²` unless `dimensional`.
    fn avg_rot_energy_sq(&self, t: f64, dimensional: bool) -> f64 {
        let avg_sq = self.rotational_state(t).avg_energy_sq;
        if dimensional {
            avg_sq
        } else {
            let kt = K_BOLTZMANN * t;
            avg_sq / (kt * kt)
        }
    }

    /// Rotational specific heat per molecule in units of k.
    fn c_rot(&self, t: f64) -> f64 {
        let state = self.rotational_state(t);
        let kt = K_BOLTZMANN * t;
        (state.avg_energy_sq - state.avg_energy * state.avg_energy) / (kt * kt)
    }
}

use super::rotational::{Molecule, RotationalCache, RotationalState};
use super::species::SpeciesConstants;
use super::structure::{MolecularStructure, VibrationalModel};
use crate::core::data::{DataError, MoleculeRecord};

/// Molecule with individually tracked vibrational levels (state-to-state).
///
/// Level energies are absolute and include the zero-point energy.
#[derive(Debug, Clone)]
pub struct MoleculeSts {
    species: SpeciesConstants,
    structure: MolecularStructure,
    rot_cache: RotationalCache,
}

impl MoleculeSts {
    pub fn new(species: SpeciesConstants, structure: MolecularStructure) -> Self {
        Self {
            species,
            structure,
            rot_cache: RotationalCache::new(),
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

    /// Recomputes the rotational cache for `t`, whatever temperature it holds.
    pub fn renorm_sts(&self, t: f64) -> RotationalState {
        let structure = &self.structure;
        self.rot_cache
            .refresh(t, || RotationalState::compute(structure, t))
    }
}

impl Molecule for MoleculeSts {
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

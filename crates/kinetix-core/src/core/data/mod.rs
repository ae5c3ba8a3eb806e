//! # Data Providers
//!
//! Loaders for the three external tables the kinetics layer consumes:
//!
//! - `particles.toml`: one table per species ([`species::ParticleLibrary`]).
//! - `interaction.csv`: 21 pairwise potential parameters keyed by the unordered
//!   species pair ([`interaction::InteractionTable`]).
//! - `dissociation.csv`: Arrhenius `(n, A)` keyed by (molecule, partner)
//!   ([`dissociation::DissociationTable`]).
//!
//! The rest of the library only depends on the provider traits below, so callers
//! may substitute their own storage. Records are returned in tabulated units;
//! unit conversion happens when particles are constructed.

pub mod dissociation;
pub mod error;
pub mod interaction;
pub mod species;

pub use dissociation::{DissociationParams, DissociationTable};
pub use error::DataError;
pub use interaction::{InteractionData, InteractionTable};
pub use species::{AtomRecord, MoleculeRecord, ParticleLibrary, SpeciesRecord};

use std::path::Path;

pub trait SpeciesProvider {
    fn species_record(&self, name: &str) -> Result<&SpeciesRecord, DataError>;
}

pub trait InteractionProvider {
    fn interaction(&self, first: &str, second: &str) -> Result<InteractionData, DataError>;
}

pub trait DissociationProvider {
    fn dissociation(&self, molecule: &str, partner: &str)
    -> Result<DissociationParams, DataError>;
}

impl SpeciesProvider for ParticleLibrary {
    fn species_record(&self, name: &str) -> Result<&SpeciesRecord, DataError> {
        self.record(name)
    }
}

impl InteractionProvider for InteractionTable {
    fn interaction(&self, first: &str, second: &str) -> Result<InteractionData, DataError> {
        self.get(first, second).copied()
    }
}

impl DissociationProvider for DissociationTable {
    fn dissociation(
        &self,
        molecule: &str,
        partner: &str,
    ) -> Result<DissociationParams, DataError> {
        self.get(molecule, partner)
    }
}

pub const PARTICLES_FILE: &str = "particles.toml";
pub const INTERACTION_FILE: &str = "interaction.csv";
pub const DISSOCIATION_FILE: &str = "dissociation.csv";

/// All three tables loaded from one data directory.
#[derive(Debug, Clone, Default)]
pub struct DataSet {
    pub particles: ParticleLibrary,
    pub interactions: InteractionTable,
    pub dissociation: DissociationTable,
}

impl DataSet {
    pub fn load_dir(dir: &Path) -> Result<Self, DataError> {
        Ok(Self {
            particles: ParticleLibrary::load(&dir.join(PARTICLES_FILE))?,
            interactions: InteractionTable::load(&dir.join(INTERACTION_FILE))?,
            dissociation: DissociationTable::load(&dir.join(DISSOCIATION_FILE))?,
        })
    }
}

impl SpeciesProvider for DataSet {
    fn species_record(&self, name: &str) -> Result<&SpeciesRecord, DataError> {
        self.particles.record(name)
    }
}

impl InteractionProvider for DataSet {
    fn interaction(&self, first: &str, second: &str) -> Result<InteractionData, DataError> {
        self.interactions.interaction(first, second)
    }
}

impl DissociationProvider for DataSet {
    fn dissociation(
        &self,
        molecule: &str,
        partner: &str,
    ) -> Result<DissociationParams, DataError> {
        self.dissociation.get(molecule, partner)
    }
}

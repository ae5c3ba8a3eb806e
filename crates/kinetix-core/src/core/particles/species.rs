use crate::core::constants::{AMU_TO_KG, ANGSTROM_TO_M, EV_TO_J, K_BOLTZMANN};
use crate::core::data::{AtomRecord, DataError};

/// Physical constants common to every particle, in SI units.
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesConstants {
    pub name: String,
    /// Particle mass [kg].
    pub mass: f64,
    /// Lennard-Jones well depth ε/k [K].
    pub lj_eps: f64,
    /// Lennard-Jones collision diameter [m].
    pub lj_sigma: f64,
    /// Formation energy [J].
    pub form: f64,
}

impl SpeciesConstants {
    /// Converts tabulated units (amu, K, Å, eV) to SI.
    pub fn from_tabulated(
        name: &str,
        mass_amu: f64,
        lj_eps: f64,
        lj_sigma_angstrom: f64,
        form_ev: f64,
    ) -> Result<Self, DataError> {
        if !(mass_amu > 0.0) {
            return Err(DataError::InvalidRecord {
                kind: "species",
                key: name.to_string(),
                reason: format!("mass must be positive, got {mass_amu}"),
            });
        }
        Ok(Self {
            name: name.to_string(),
            mass: mass_amu * AMU_TO_KG,
            lj_eps,
            lj_sigma: lj_sigma_angstrom * ANGSTROM_TO_M,
            form: form_ev * EV_TO_J,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub species: SpeciesConstants,
}

impl Atom {
    pub fn new(species: SpeciesConstants) -> Self {
        Self { species }
    }

    pub fn from_record(name: &str, record: &AtomRecord) -> Result<Self, DataError> {
        let species = SpeciesConstants::from_tabulated(
            name,
            record.mass,
            record.lj_eps,
            record.lj_sigma,
            record.form,
        )?;
        Ok(Self { species })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.species.name
    }

    #[inline]
    pub fn mass(&self) -> f64 {
        self.species.mass
    }

    /// Energy carried into the mixture by one added atom: translational plus formation.
    pub fn du_dn(&self, t: f64) -> f64 {
        1.5 * K_BOLTZMANN * t + self.species.form
    }
}
